//! SHA-512-crypt password hashing
//!
//! This crate computes `$6$` password hashes, the SHA-512 variant of the
//! Unix `crypt(3)` family, as found in `/etc/shadow`, htpasswd files and
//! the output of `openssl passwd -6`.
//!
//! The focus is on **exact compatibility and auditability**. The output of
//! the scheme has no internal checksum: a single misplaced input in any of
//! the 5000 rounds still yields something that looks like a valid hash.
//! Every stage is therefore written as flat, explicit code that can be
//! checked line by line against the published algorithm.
//!
//! # Module overview
//!
//! - `hash`
//!   The SHA-512 digest (FIPS 180-4) underneath the scheme, with a one-shot
//!   function and an incremental hasher. Pure Rust, no heap allocations.
//!
//! - `crypt`
//!   The SHA-512-crypt engine itself: the digest stages, the final
//!   permutation and crypt base64 encoding, salt normalization and
//!   validation, and a parsed representation of `$6$` strings.
//!
//! # Example
//!
//! ```
//! use shacrypt::{CryptHash, sha512_crypt, validate_salt};
//!
//! validate_salt("12341234").unwrap();
//!
//! let hash = sha512_crypt(b"1234567890abcdefghijklmnopqrstuvwxyz", b"12341234");
//! assert!(hash.starts_with("$6$12341234$"));
//!
//! let parsed: CryptHash = hash.parse().unwrap();
//! assert_eq!(parsed.checksum().len(), 86);
//! ```
//!
//! # Design goals
//!
//! - Pure functions: no global state, every call owns its digest contexts
//! - Total over all inputs: empty passwords and salts are valid
//! - Password-derived intermediates are zeroized on drop
//! - No logging of secrets; only lengths are ever reported

pub mod crypt;
pub mod hash;

pub use crypt::{
    CryptHash, ParseError, SaltError, normalize_salt, sha512_crypt, sha512_crypt_bytes,
    validate_salt,
};
