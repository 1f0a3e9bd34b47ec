//! SHA-512-crypt (`$6$`) password hashing.
//!
//! Implementation of the scheme described in Ulrich Drepper's
//! "Unix crypt using SHA-256 and SHA-512":
//!
//! <https://www.akkadia.org/drepper/SHA-crypt.txt>
//!
//! Output is byte-for-byte compatible with glibc `crypt(3)` and
//! `openssl passwd -6` for the default round count.
//!
//! # Algorithm Overview
//!
//! 1. **Alternate sum**: `B = SHA512(password || salt || password)`.
//! 2. **Main sum**: `A = SHA512(password || salt || B-bytes || bit-selected inputs)`,
//!    where `len(password)` bytes of `B` are fed, then one input per bit of
//!    `len(password)`: `B` for a set bit, the password for a clear bit.
//! 3. **Sequences**: `P` from the password fed `len(password)` times, `S`
//!    from the salt fed `16 + A[0]` times, each cut to the length of its
//!    source.
//! 4. **Rounds**: 5000 rounds, each hashing a combination of `A`, `P` and
//!    `S` chosen by the round index.
//! 5. **Encoding**: permute the final digest and write it with the crypt
//!    base64 alphabet, 86 characters.
//!
//! # Scope
//!
//! - Rounds are fixed at [`ROUNDS`]; the `rounds=N$` extension is not
//!   implemented.
//! - No verification routine is provided.
//! - Salts are truncated to [`SALT_MAX_LEN`] bytes, never rejected.
//!   [`validate_salt`] is available for callers that want to reject
//!   malformed salts up front.

use log::trace;

pub mod encoding;
pub mod hash;
pub mod salt;
pub(crate) mod stages;

pub use encoding::{CRYPT_ALPHABET, ENCODED_LEN, encode_digest};
pub use hash::{CryptHash, ParseError};
pub use salt::{SALT_MAX_LEN, SaltError, normalize_salt, validate_salt};

/// Identifier that opens every SHA-512-crypt string.
pub const PREFIX: &str = "$6$";

/// Number of mixing rounds.
pub const ROUNDS: u32 = 5000;

/// Hashes `password` with `salt` and returns the raw `$6$<salt>$<encoded>`
/// bytes.
///
/// The salt is truncated to [`SALT_MAX_LEN`] bytes and copied verbatim into
/// the output, whatever its content. This function is total: every pair of
/// byte strings, empty ones included, produces a hash.
pub fn sha512_crypt_bytes(password: &[u8], salt: &[u8]) -> Vec<u8> {
    let salt = normalize_salt(salt);
    let digest = stages::digest(password, salt);
    let encoded = encode_digest(&digest);

    let mut out = Vec::with_capacity(PREFIX.len() + salt.len() + 1 + ENCODED_LEN);
    out.extend_from_slice(PREFIX.as_bytes());
    out.extend_from_slice(salt);
    out.push(b'$');
    out.extend_from_slice(encoded.as_bytes());

    trace!("computed sha512-crypt hash with {}-byte salt", salt.len());

    out
}

/// Hashes `password` with `salt` and returns the `$6$<salt>$<encoded>`
/// string.
///
/// # Example
///
/// ```
/// use shacrypt::sha512_crypt;
///
/// let hash = sha512_crypt(b"Hello world!", b"saltstring");
/// assert_eq!(
///     hash,
///     "$6$saltstring$svn8UoSVapNtMuq1ukKS4tPQd8iKwSMHWjl/O817G3uBnIFNjnQJuesI68u4OTLiBFdcbYEdFCoEOfaS35inz1"
/// );
/// ```
///
/// # Notes
/// - Salt bytes that are not valid UTF-8 are rendered with U+FFFD; use
///   [`sha512_crypt_bytes`] when the salt is arbitrary binary data.
pub fn sha512_crypt(password: &[u8], salt: &[u8]) -> String {
    match String::from_utf8(sha512_crypt_bytes(password, salt)) {
        Ok(hash) => hash,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}
