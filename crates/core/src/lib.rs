//! # hashfn-core
//!
//! Digest and HMAC scalar computations over a closed, case-sensitive
//! algorithm set.
//!
//! The crate is the pure compute half of the system: given an algorithm
//! name and input bytes it returns the lowercase hex encoding of the raw
//! digest, or a descriptive error for names outside the supported set.
//! It owns no cross-boundary memory; the C surface lives in `hashfn-ffi`.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod algorithm;
pub mod error;
pub mod keyed;

pub use algorithm::Algorithm;
pub use error::HashFnError;

/// Computes the digest of `data` under the named algorithm.
///
/// Returns the lowercase hex encoding of the raw digest bytes, with no
/// separators or prefix. The name lookup is exact and case-sensitive;
/// unrecognized names yield [`HashFnError::UnsupportedAlgorithm`] echoing
/// the offending name.
///
/// Empty input is valid and produces the algorithm's standard empty-input
/// digest.
pub fn hash_hex(algorithm: &str, data: &[u8]) -> Result<String, HashFnError> {
    let algorithm = Algorithm::parse(algorithm)?;
    Ok(hex::encode(algorithm.hash(data)))
}

/// Computes the HMAC of `data` under the named algorithm with `key`.
///
/// Same name lookup and hex encoding rules as [`hash_hex`]. The keyed
/// construction is the canonical RFC 2104 HMAC instantiated over the
/// selected primitive; keys longer than the primitive's block size are
/// hashed down first, per the construction.
pub fn hmac_hex(algorithm: &str, key: &[u8], data: &[u8]) -> Result<String, HashFnError> {
    let algorithm = Algorithm::parse(algorithm)?;
    Ok(hex::encode(algorithm.hmac(key, data)))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hash_hex_is_lowercase_hex() {
        let digest = hash_hex("sha2-256", b"hello world").unwrap();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn hash_hex_is_deterministic() {
        let first = hash_hex("blake3", b"determinism").unwrap();
        let second = hash_hex("blake3", b"determinism").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_name_echoes_verbatim() {
        let err = hash_hex("sha9-999", b"x").unwrap_err();
        assert!(err.to_string().contains("sha9-999"));

        let err = hmac_hex("sha9-999", b"k", b"x").unwrap_err();
        assert!(err.to_string().contains("sha9-999"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(hash_hex("SHA2-256", b"x").is_err());
        assert!(hash_hex("Blake3", b"x").is_err());
    }
}
