//! Hash algorithms exposed by the crate.
//!
//! Currently includes SHA-512 with a pure-Rust implementation, which is the
//! digest primitive underneath the `$6$` crypt scheme.

pub mod sha512;

/// Re-export of the SHA-512 convenience function and incremental hasher.
pub use sha512::core::{Sha512, sha512};
