//! Salt normalization and validation.
//!
//! The engine itself accepts any byte sequence as a salt and only applies
//! the 16-byte truncation rule. Validation against the crypt alphabet is a
//! separate, caller-facing step for configuration layers that want to
//! reject malformed salts before hashing.

use log::debug;
use thiserror::Error;

use super::encoding::{CRYPT_ALPHABET, decode_char};

/// Maximum number of salt bytes that take part in the hash.
pub const SALT_MAX_LEN: usize = 16;

/// Length a configured salt must have when it is not empty.
pub const CONFIGURED_SALT_LEN: usize = 8;

/// Characters allowed in a salt. Same as the digest alphabet.
pub const SALT_ALPHABET: &[u8; 64] = CRYPT_ALPHABET;

/// Errors reported by [`validate_salt`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaltError {
    /// Salt is neither empty nor exactly eight characters long.
    #[error("salt must be exactly 8 characters, got {len}")]
    InvalidLength { len: usize },

    /// Salt contains a character outside `./0-9A-Za-z`.
    #[error("salt contains invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },
}

/// Returns `true` if `byte` belongs to the crypt base64 alphabet.
#[inline]
pub fn is_crypt_char(byte: u8) -> bool {
    decode_char(byte).is_some()
}

/// Truncates `salt` to at most [`SALT_MAX_LEN`] bytes.
///
/// Longer salts are not an error; only their first sixteen bytes are used,
/// matching glibc `crypt(3)`.
pub fn normalize_salt(salt: &[u8]) -> &[u8] {
    if salt.len() > SALT_MAX_LEN {
        debug!(
            "salt of {} bytes truncated to {} bytes",
            salt.len(),
            SALT_MAX_LEN
        );
        &salt[..SALT_MAX_LEN]
    } else {
        salt
    }
}

/// Validates a user-supplied salt.
///
/// An empty salt is accepted. Any other salt must be exactly
/// [`CONFIGURED_SALT_LEN`] bytes long and drawn from [`SALT_ALPHABET`]. The
/// length is checked first; otherwise the first offending character is
/// reported with its character index.
pub fn validate_salt(salt: &str) -> Result<(), SaltError> {
    if salt.is_empty() {
        return Ok(());
    }

    let len = salt.len();
    if len != CONFIGURED_SALT_LEN {
        return Err(SaltError::InvalidLength { len });
    }

    first_invalid_char(salt).map_or(Ok(()), |(position, ch)| {
        Err(SaltError::InvalidCharacter { ch, position })
    })
}

/// Position and value of the first character outside the crypt alphabet.
pub(crate) fn first_invalid_char(s: &str) -> Option<(usize, char)> {
    s.chars()
        .enumerate()
        .find(|&(_, ch)| !u8::try_from(ch).is_ok_and(is_crypt_char))
}
