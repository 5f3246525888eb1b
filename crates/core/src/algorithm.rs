//! The closed algorithm set and the hash dispatch.
//!
//! Lookup is exact-string and case-sensitive against a fixed registry;
//! unknown names are rejected at the boundary before any primitive runs.

use crate::error::HashFnError;
use crate::keyed;
use blake2::Blake2b512;
use digest::Digest;
use md4::Md4;
use md5::Md5;
use once_cell::race::OnceBox;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use sha3::{Keccak224, Keccak256, Keccak384, Keccak512, Sha3_224, Sha3_256, Sha3_384, Sha3_512};
use std::collections::HashMap;

/// A hash primitive from the closed, fixed algorithm set.
///
/// The set is closed by design: names map to variants via [`Algorithm::parse`]
/// with no normalization or aliasing, and every variant carries its native
/// digest size so callers can size output without running the primitive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// MD4
    Md4,
    /// MD5
    Md5,
    /// SHA-1
    Sha1,
    /// SHA-224 (SHA-2 family)
    Sha2_224,
    /// SHA-256 (SHA-2 family)
    Sha2_256,
    /// SHA-384 (SHA-2 family)
    Sha2_384,
    /// SHA-512 (SHA-2 family)
    Sha2_512,
    /// SHA3-224
    Sha3_224,
    /// SHA3-256
    Sha3_256,
    /// SHA3-384
    Sha3_384,
    /// SHA3-512
    Sha3_512,
    /// Keccak-224 (pre-standardization SHA-3 padding)
    Keccak224,
    /// Keccak-256 (pre-standardization SHA-3 padding)
    Keccak256,
    /// Keccak-384 (pre-standardization SHA-3 padding)
    Keccak384,
    /// Keccak-512 (pre-standardization SHA-3 padding)
    Keccak512,
    /// BLAKE2b with 512-bit output
    Blake2b512,
    /// BLAKE3 with its default 256-bit output
    Blake3,
}

impl Algorithm {
    /// Every supported algorithm, in registry order.
    pub const ALL: [Algorithm; 17] = [
        Self::Md4,
        Self::Md5,
        Self::Sha1,
        Self::Sha2_224,
        Self::Sha2_256,
        Self::Sha2_384,
        Self::Sha2_512,
        Self::Sha3_224,
        Self::Sha3_256,
        Self::Sha3_384,
        Self::Sha3_512,
        Self::Keccak224,
        Self::Keccak256,
        Self::Keccak384,
        Self::Keccak512,
        Self::Blake2b512,
        Self::Blake3,
    ];

    /// Returns the registry name of the algorithm.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Md4 => "md4",
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha2_224 => "sha2-224",
            Self::Sha2_256 => "sha2-256",
            Self::Sha2_384 => "sha2-384",
            Self::Sha2_512 => "sha2-512",
            Self::Sha3_224 => "sha3-224",
            Self::Sha3_256 => "sha3-256",
            Self::Sha3_384 => "sha3-384",
            Self::Sha3_512 => "sha3-512",
            Self::Keccak224 => "keccak224",
            Self::Keccak256 => "keccak256",
            Self::Keccak384 => "keccak384",
            Self::Keccak512 => "keccak512",
            Self::Blake2b512 => "blake2b-512",
            Self::Blake3 => "blake3",
        }
    }

    /// Returns the native digest size in bytes.
    ///
    /// Hex output of [`Algorithm::hash`] and [`Algorithm::hmac`] is exactly
    /// twice this length.
    pub const fn digest_size(self) -> usize {
        match self {
            Self::Md4 | Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha2_224 | Self::Sha3_224 | Self::Keccak224 => 28,
            Self::Sha2_256 | Self::Sha3_256 | Self::Keccak256 | Self::Blake3 => 32,
            Self::Sha2_384 | Self::Sha3_384 | Self::Keccak384 => 48,
            Self::Sha2_512 | Self::Sha3_512 | Self::Keccak512 | Self::Blake2b512 => 64,
        }
    }

    /// Resolves a name against the registry.
    ///
    /// Exact match only. Unknown names produce
    /// [`HashFnError::UnsupportedAlgorithm`] carrying the name verbatim.
    pub fn parse(name: &str) -> Result<Self, HashFnError> {
        registry()
            .get(name)
            .copied()
            .ok_or_else(|| HashFnError::unsupported(name))
    }

    /// Runs the primitive over `data` and returns the raw digest bytes.
    pub fn hash(self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::Md4 => digest_bytes::<Md4>(data),
            Self::Md5 => digest_bytes::<Md5>(data),
            Self::Sha1 => digest_bytes::<Sha1>(data),
            Self::Sha2_224 => digest_bytes::<Sha224>(data),
            Self::Sha2_256 => digest_bytes::<Sha256>(data),
            Self::Sha2_384 => digest_bytes::<Sha384>(data),
            Self::Sha2_512 => digest_bytes::<Sha512>(data),
            Self::Sha3_224 => digest_bytes::<Sha3_224>(data),
            Self::Sha3_256 => digest_bytes::<Sha3_256>(data),
            Self::Sha3_384 => digest_bytes::<Sha3_384>(data),
            Self::Sha3_512 => digest_bytes::<Sha3_512>(data),
            Self::Keccak224 => digest_bytes::<Keccak224>(data),
            Self::Keccak256 => digest_bytes::<Keccak256>(data),
            Self::Keccak384 => digest_bytes::<Keccak384>(data),
            Self::Keccak512 => digest_bytes::<Keccak512>(data),
            Self::Blake2b512 => digest_bytes::<Blake2b512>(data),
            Self::Blake3 => digest_bytes::<blake3::Hasher>(data),
        }
    }

    /// Runs the generic HMAC construction over `data` with `key`, using this
    /// primitive as the inner hash. Returns the raw tag bytes.
    pub fn hmac(self, key: &[u8], data: &[u8]) -> Vec<u8> {
        match self {
            Self::Md4 => keyed::hmac_bytes::<Md4>(key, data),
            Self::Md5 => keyed::hmac_bytes::<Md5>(key, data),
            Self::Sha1 => keyed::hmac_bytes::<Sha1>(key, data),
            Self::Sha2_224 => keyed::hmac_bytes::<Sha224>(key, data),
            Self::Sha2_256 => keyed::hmac_bytes::<Sha256>(key, data),
            Self::Sha2_384 => keyed::hmac_bytes::<Sha384>(key, data),
            Self::Sha2_512 => keyed::hmac_bytes::<Sha512>(key, data),
            Self::Sha3_224 => keyed::hmac_bytes::<Sha3_224>(key, data),
            Self::Sha3_256 => keyed::hmac_bytes::<Sha3_256>(key, data),
            Self::Sha3_384 => keyed::hmac_bytes::<Sha3_384>(key, data),
            Self::Sha3_512 => keyed::hmac_bytes::<Sha3_512>(key, data),
            Self::Keccak224 => keyed::hmac_bytes::<Keccak224>(key, data),
            Self::Keccak256 => keyed::hmac_bytes::<Keccak256>(key, data),
            Self::Keccak384 => keyed::hmac_bytes::<Keccak384>(key, data),
            Self::Keccak512 => keyed::hmac_bytes::<Keccak512>(key, data),
            Self::Blake2b512 => keyed::hmac_bytes::<Blake2b512>(key, data),
            Self::Blake3 => keyed::hmac_bytes::<blake3::Hasher>(key, data),
        }
    }
}

/// Returns the static name registry.
fn registry() -> &'static HashMap<&'static str, Algorithm> {
    static INSTANCE: OnceBox<HashMap<&'static str, Algorithm>> = OnceBox::new();
    INSTANCE.get_or_init(|| {
        Box::new(
            Algorithm::ALL
                .iter()
                .map(|algorithm| (algorithm.name(), *algorithm))
                .collect(),
        )
    })
}

/// Returns the registry names of every supported algorithm.
pub fn supported_names() -> impl ExactSizeIterator<Item = &'static str> {
    Algorithm::ALL.iter().map(|algorithm| algorithm.name())
}

fn digest_bytes<D: Digest>(data: &[u8]) -> Vec<u8> {
    D::digest(data).to_vec()
}
