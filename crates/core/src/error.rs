//! Error type for the dispatch layer.

use crate::algorithm::supported_names;
use core::fmt;

/// Hash dispatch error type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HashFnError {
    /// Algorithm name is not in the supported set.
    ///
    /// Carries the rejected name verbatim so callers can surface it.
    UnsupportedAlgorithm(String),
}

impl HashFnError {
    /// Returns an unsupported-algorithm error for the given name.
    pub fn unsupported(name: impl Into<String>) -> Self {
        Self::UnsupportedAlgorithm(name.into())
    }
}

impl core::error::Error for HashFnError {}

impl fmt::Display for HashFnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedAlgorithm(name) => {
                write!(f, "unsupported algorithm: {name}, expected one of ")?;
                for (i, supported) in supported_names().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(supported)?;
                }
                Ok(())
            }
        }
    }
}
