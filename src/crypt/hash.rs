//! Parsed form of a `$6$<salt>$<checksum>` string.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::encoding::{ENCODED_LEN, decode_char};
use super::salt::{SALT_MAX_LEN, first_invalid_char};
use super::{PREFIX, sha512_crypt};

/// Errors reported when parsing a SHA-512-crypt string.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The string does not start with `$6$`.
    #[error("hash does not start with \"$6$\"")]
    MissingPrefix,

    /// No `$` separates the salt from the checksum.
    #[error("missing '$' between salt and checksum")]
    MissingSeparator,

    /// The salt is longer than sixteen characters.
    #[error("salt is {len} characters long, at most 16 are allowed")]
    SaltTooLong { len: usize },

    /// The salt contains a character outside `./0-9A-Za-z`.
    #[error("salt contains invalid character {ch:?} at position {position}")]
    InvalidSaltCharacter { ch: char, position: usize },

    /// The checksum is not 86 characters long.
    #[error("checksum is {len} characters long, expected 86")]
    InvalidChecksumLength { len: usize },

    /// The checksum contains a character outside `./0-9A-Za-z`.
    #[error("checksum contains invalid character {ch:?} at position {position}")]
    InvalidChecksumCharacter { ch: char, position: usize },

    /// The last checksum character encodes bits beyond the 512-bit digest.
    #[error("checksum has non-zero padding bits")]
    NonCanonicalChecksum,
}

/// A SHA-512-crypt hash split into its salt and checksum.
///
/// Rendering with [`fmt::Display`] gives back the `$6$<salt>$<checksum>`
/// string. The `rounds=N$` form is not supported.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CryptHash {
    salt: String,
    checksum: String,
}

impl CryptHash {
    /// Hashes `password` with `salt`.
    ///
    /// Salts longer than sixteen bytes are truncated, exactly as
    /// [`sha512_crypt`] does.
    pub fn compute(password: &[u8], salt: &str) -> Self {
        let hash = sha512_crypt(password, salt.as_bytes());
        let rest = &hash[PREFIX.len()..];
        let (salt, checksum) = rest.split_at(rest.len() - ENCODED_LEN - 1);

        Self {
            salt: salt.to_owned(),
            checksum: checksum[1..].to_owned(),
        }
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// The 86-character encoded digest.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }
}

impl fmt::Display for CryptHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}${}", PREFIX, self.salt, self.checksum)
    }
}

impl FromStr for CryptHash {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s.strip_prefix(PREFIX).ok_or(ParseError::MissingPrefix)?;
        let (salt, checksum) = rest.split_once('$').ok_or(ParseError::MissingSeparator)?;

        let salt_len = salt.chars().count();
        if salt_len > SALT_MAX_LEN {
            return Err(ParseError::SaltTooLong { len: salt_len });
        }

        if let Some((position, ch)) = first_invalid_char(salt) {
            return Err(ParseError::InvalidSaltCharacter { ch, position });
        }

        let checksum_len = checksum.chars().count();
        if checksum_len != ENCODED_LEN {
            return Err(ParseError::InvalidChecksumLength { len: checksum_len });
        }

        if let Some((position, ch)) = first_invalid_char(checksum) {
            return Err(ParseError::InvalidChecksumCharacter { ch, position });
        }

        // The final character carries only the top two bits of byte 63.
        let last = checksum.as_bytes()[ENCODED_LEN - 1];
        if decode_char(last).is_none_or(|bits| bits > 0b11) {
            return Err(ParseError::NonCanonicalChecksum);
        }

        Ok(Self {
            salt: salt.to_owned(),
            checksum: checksum.to_owned(),
        })
    }
}
