//! # hashfn-ffi
//!
//! C ABI surface for the hashfn compute core.
//!
//! Three entry points cross the boundary: [`hashfn_hash`], [`hashfn_hmac`],
//! and [`hashfn_free_result`]. The first two return a [`HashResult`] whose
//! single owned buffer transfers to the caller; the caller copies the text
//! into its own storage and then hands the value back to
//! [`hashfn_free_result`] exactly once, regardless of tag. Each call is
//! synchronous and stateless, so concurrent calls from independent host
//! threads never interfere.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod result;

pub use result::{HashResult, HashResultTag, OwnedHashResult};

use core::ffi::c_char;
use core::slice;
use hashfn_core::{hash_hex, hmac_hex};
use std::ffi::CStr;

/// Decodes a raw `(ptr, len)` byte argument.
///
/// A null pointer is valid only for the empty slice; null with a nonzero
/// length is a caller error and yields `None`.
///
/// # Safety
///
/// When `ptr` is non-null it must point to `len` readable bytes that stay
/// valid for the duration of the call.
unsafe fn bytes_arg<'a>(ptr: *const u8, len: usize) -> Option<&'a [u8]> {
    if ptr.is_null() {
        if len == 0 {
            Some(&[])
        } else {
            None
        }
    } else {
        // SAFETY: per this function's contract.
        Some(unsafe { slice::from_raw_parts(ptr, len) })
    }
}

/// Decodes the algorithm-name argument, or returns the error result to
/// hand back when it is unusable.
///
/// # Safety
///
/// `algorithm` must be null or a valid nul-terminated C string that stays
/// valid for the duration of the call.
unsafe fn algorithm_arg<'a>(algorithm: *const c_char) -> Result<&'a str, HashResult> {
    if algorithm.is_null() {
        return Err(HashResult::err("algorithm name is null"));
    }
    // SAFETY: per this function's contract.
    unsafe { CStr::from_ptr(algorithm) }
        .to_str()
        .map_err(|_| HashResult::err("algorithm name is not valid UTF-8"))
}

/// Computes the digest of `data` under the named algorithm.
///
/// On success the returned value carries the lowercase hex digest in its
/// `ok` buffer; on failure (unsupported name, bad arguments, allocation
/// failure) it carries the `Err` tag. Either way, ownership of the value
/// transfers to the caller, who must pass it to [`hashfn_free_result`]
/// exactly once after reading the payload.
///
/// # Safety
///
/// `algorithm` must be null or a valid nul-terminated C string; `data`
/// must be null or point to `data_len` readable bytes. Both must stay
/// valid for the duration of the call; neither is retained.
#[no_mangle]
pub unsafe extern "C" fn hashfn_hash(
    algorithm: *const c_char,
    data: *const u8,
    data_len: usize,
) -> HashResult {
    // SAFETY: per this function's contract.
    let algorithm = match unsafe { algorithm_arg(algorithm) } {
        Ok(name) => name,
        Err(result) => return result,
    };
    // SAFETY: per this function's contract.
    let Some(data) = (unsafe { bytes_arg(data, data_len) }) else {
        return HashResult::err("data pointer is null");
    };
    hash_hex(algorithm, data).into()
}

/// Computes the HMAC of `data` under the named algorithm with `key`.
///
/// Result ownership and release obligations are identical to
/// [`hashfn_hash`].
///
/// # Safety
///
/// Same as [`hashfn_hash`], and `key` must be null or point to `key_len`
/// readable bytes valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn hashfn_hmac(
    algorithm: *const c_char,
    key: *const u8,
    key_len: usize,
    data: *const u8,
    data_len: usize,
) -> HashResult {
    // SAFETY: per this function's contract.
    let algorithm = match unsafe { algorithm_arg(algorithm) } {
        Ok(name) => name,
        Err(result) => return result,
    };
    // SAFETY: per this function's contract.
    let Some(key) = (unsafe { bytes_arg(key, key_len) }) else {
        return HashResult::err("key pointer is null");
    };
    // SAFETY: per this function's contract.
    let Some(data) = (unsafe { bytes_arg(data, data_len) }) else {
        return HashResult::err("data pointer is null");
    };
    hmac_hex(algorithm, key, data).into()
}

/// Releases the buffer owned by `result`.
///
/// Must be called exactly once per value returned by [`hashfn_hash`] or
/// [`hashfn_hmac`], after the caller has finished reading the payload.
/// A no-op for the buffer-less allocation-failure encoding. This is the
/// only legal deallocation path for result buffers.
///
/// # Safety
///
/// `result` must be a value previously returned by [`hashfn_hash`] or
/// [`hashfn_hmac`] that has not already been released, and its buffer
/// must not be read after this call returns.
#[no_mangle]
pub unsafe extern "C" fn hashfn_free_result(result: HashResult) {
    result.release();
}

#[cfg(test)]
mod test {
    use super::*;
    use std::ffi::CString;

    fn call_hash(name: &str, data: &[u8]) -> OwnedHashResult {
        let name = CString::new(name).unwrap();
        // SAFETY: arguments are live, valid allocations for the call.
        let result = unsafe { hashfn_hash(name.as_ptr(), data.as_ptr(), data.len()) };
        OwnedHashResult::new(result)
    }

    #[test]
    fn test_null_algorithm_is_an_error_result() {
        // SAFETY: null algorithm is explicitly allowed by the contract.
        let result = unsafe { hashfn_hash(core::ptr::null(), core::ptr::null(), 0) };
        let owned = OwnedHashResult::new(result);
        assert_eq!(owned.get().tag, HashResultTag::Err);
        assert!(owned.as_str().unwrap().contains("null"));
    }

    #[test]
    fn test_null_data_with_zero_len_is_empty_input() {
        let name = CString::new("sha2-256").unwrap();
        // SAFETY: name is live; null data is paired with a zero length.
        let result = unsafe { hashfn_hash(name.as_ptr(), core::ptr::null(), 0) };
        let owned = OwnedHashResult::new(result);
        assert_eq!(
            owned.as_str().unwrap(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_null_data_with_nonzero_len_is_an_error_result() {
        let name = CString::new("sha2-256").unwrap();
        // SAFETY: name is live; the null data pointer is rejected before use.
        let result = unsafe { hashfn_hash(name.as_ptr(), core::ptr::null(), 4) };
        let owned = OwnedHashResult::new(result);
        assert_eq!(owned.get().tag, HashResultTag::Err);
    }

    #[test]
    fn test_unsupported_name_echoed() {
        let owned = call_hash("sha9-999", b"x");
        assert_eq!(owned.get().tag, HashResultTag::Err);
        assert!(owned.as_str().unwrap().contains("sha9-999"));
    }

    #[test]
    fn test_hmac_round_trip() {
        let name = CString::new("sha2-256").unwrap();
        let key = b"key";
        let data = b"The quick brown fox jumps over the lazy dog";
        // SAFETY: all arguments are live, valid allocations for the call.
        let result = unsafe {
            hashfn_hmac(
                name.as_ptr(),
                key.as_ptr(),
                key.len(),
                data.as_ptr(),
                data.len(),
            )
        };
        let owned = OwnedHashResult::new(result);
        assert_eq!(
            owned.as_str().unwrap(),
            "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
        );
    }
}
