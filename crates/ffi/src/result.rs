//! The tagged result value that crosses the boundary, and its release path.
//!
//! Every [`HashResult`] owns at most one nul-terminated text buffer,
//! allocated here and freed only by [`HashResult::release`]. No other code
//! path frees these buffers; the host calls the release routine exactly
//! once per received value, whichever tag it carries.

use core::ffi::c_char;
use core::ptr;
use hashfn_core::HashFnError;
use std::ffi::{CStr, CString};

/// Discriminant for [`HashResult`].
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HashResultTag {
    /// The `ok` buffer holds the lowercase hex digest.
    Ok,
    /// The `err` buffer holds a human-readable error message.
    Err,
}

/// Tagged success/error value handed across the C boundary.
///
/// Invariants:
/// - At most one of `ok`/`err` is non-null, and it matches `tag`.
/// - A non-null buffer is nul-terminated text owned by this library's
///   allocator, valid until released, never mutated after creation.
/// - `tag == Err` with both pointers null encodes allocation failure:
///   no buffer was produced and release is a no-op. Hosts map this case
///   to a fixed out-of-memory message.
#[repr(C)]
#[derive(Debug)]
pub struct HashResult {
    /// Which buffer is active.
    pub tag: HashResultTag,
    /// Digest text, non-null only when `tag` is [`HashResultTag::Ok`].
    pub ok: *mut c_char,
    /// Error text, non-null only when `tag` is [`HashResultTag::Err`].
    pub err: *mut c_char,
}

impl HashResult {
    /// Returns a success result owning a freshly allocated copy of `text`.
    ///
    /// Falls back to the allocation-failure encoding if the buffer cannot
    /// be produced.
    pub fn ok(text: &str) -> Self {
        match alloc_text(text) {
            Some(buffer) => Self {
                tag: HashResultTag::Ok,
                ok: buffer,
                err: ptr::null_mut(),
            },
            None => Self::alloc_failure(),
        }
    }

    /// Returns an error result owning a freshly allocated copy of `text`.
    pub fn err(text: &str) -> Self {
        match alloc_text(text) {
            Some(buffer) => Self {
                tag: HashResultTag::Err,
                ok: ptr::null_mut(),
                err: buffer,
            },
            None => Self::alloc_failure(),
        }
    }

    /// Returns the error result that encodes allocation failure.
    ///
    /// Owns nothing, so releasing it is a no-op.
    pub const fn alloc_failure() -> Self {
        Self {
            tag: HashResultTag::Err,
            ok: ptr::null_mut(),
            err: ptr::null_mut(),
        }
    }

    /// Frees whichever buffer this result owns.
    ///
    /// Consumes the value, so a released result cannot be observed again
    /// from Rust. This is the only deallocation path for result buffers.
    pub fn release(self) {
        // SAFETY: non-null pointers were produced by `CString::into_raw` in
        // `alloc_text` and ownership was not handed out elsewhere; at most
        // one field is non-null so each buffer is freed at most once.
        unsafe {
            if !self.ok.is_null() {
                drop(CString::from_raw(self.ok));
            }
            if !self.err.is_null() {
                drop(CString::from_raw(self.err));
            }
        }
    }
}

impl From<Result<String, HashFnError>> for HashResult {
    fn from(result: Result<String, HashFnError>) -> Self {
        match result {
            Ok(digest) => Self::ok(&digest),
            Err(err) => Self::err(&err.to_string()),
        }
    }
}

/// Allocates a nul-terminated copy of `text` and leaks it to the caller.
///
/// Returns `None` when the buffer cannot be reserved (or, unreachably for
/// digest hex and error text, when `text` contains an interior nul). This
/// is the single allocation a call performs.
fn alloc_text(text: &str) -> Option<*mut c_char> {
    let bytes = text.as_bytes();
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(bytes.len() + 1).ok()?;
    buffer.extend_from_slice(bytes);
    buffer.push(0);
    let text = CString::from_vec_with_nul(buffer).ok()?;
    Some(text.into_raw())
}

/// Scoped owner for a [`HashResult`] consumed on the Rust side.
///
/// Releases the result on drop, which makes the exactly-once release
/// obligation structural for Rust hosts and tests.
#[derive(Debug)]
pub struct OwnedHashResult(Option<HashResult>);

impl OwnedHashResult {
    /// Takes ownership of `result`, scheduling its release.
    pub fn new(result: HashResult) -> Self {
        Self(Some(result))
    }

    /// Returns the wrapped result.
    pub fn get(&self) -> &HashResult {
        self.0.as_ref().expect("present until drop")
    }

    /// Reads the active buffer as UTF-8 text.
    ///
    /// Returns `None` for the buffer-less allocation-failure encoding.
    pub fn as_str(&self) -> Option<&str> {
        let result = self.get();
        let buffer = match result.tag {
            HashResultTag::Ok => result.ok,
            HashResultTag::Err => result.err,
        };
        if buffer.is_null() {
            return None;
        }
        // SAFETY: a non-null buffer is a live nul-terminated allocation
        // owned by `result`, which outlives the returned borrow.
        unsafe { CStr::from_ptr(buffer) }.to_str().ok()
    }
}

impl Drop for OwnedHashResult {
    fn drop(&mut self) {
        if let Some(result) = self.0.take() {
            result.release();
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ok_sets_exactly_one_buffer() {
        let result = HashResult::ok("deadbeef");
        assert_eq!(result.tag, HashResultTag::Ok);
        assert!(!result.ok.is_null());
        assert!(result.err.is_null());
        result.release();
    }

    #[test]
    fn test_err_sets_exactly_one_buffer() {
        let result = HashResult::err("unsupported algorithm: nope");
        assert_eq!(result.tag, HashResultTag::Err);
        assert!(result.ok.is_null());
        assert!(!result.err.is_null());
        result.release();
    }

    #[test]
    fn test_release_of_alloc_failure_is_noop() {
        let result = HashResult::alloc_failure();
        assert_eq!(result.tag, HashResultTag::Err);
        assert!(result.ok.is_null());
        assert!(result.err.is_null());
        result.release();
    }

    #[test]
    fn test_owned_reads_payload_and_releases() {
        let owned = OwnedHashResult::new(HashResult::ok("cafe"));
        assert_eq!(owned.as_str(), Some("cafe"));
        drop(owned);

        let owned = OwnedHashResult::new(HashResult::alloc_failure());
        assert_eq!(owned.as_str(), None);
    }

    #[test]
    fn test_interior_nul_takes_failure_path() {
        let result = HashResult::err("bad\0name");
        assert!(result.ok.is_null());
        assert!(result.err.is_null());
        result.release();
    }
}
