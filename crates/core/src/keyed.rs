//! Generic HMAC construction over any primitive in the set.
//!
//! One instantiation of RFC 2104, parameterized by the inner hash's digest
//! and block sizes. [`SimpleHmac`] handles the construction rules, including
//! hashing down keys longer than the block size, so there is exactly one
//! keyed code path shared by every algorithm.

use digest::core_api::BlockSizeUser;
use digest::Digest;
use hmac::{Mac, SimpleHmac};

/// Computes `HMAC-D(key, data)` and returns the raw tag bytes.
///
/// Any key length is valid, including empty.
pub fn hmac_bytes<D>(key: &[u8], data: &[u8]) -> Vec<u8>
where
    D: Digest + BlockSizeUser,
{
    let mut mac =
        SimpleHmac::<D>::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}
