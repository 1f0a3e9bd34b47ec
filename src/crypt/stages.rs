//! Digest stages of SHA-512-crypt.
//!
//! Each stage starts a fresh [`Sha512`] context and feeds it a selection of
//! the password, the salt and earlier digests. Nothing is carried between
//! stages except the 64-byte outputs.
//!
//! Every buffer derived from the password is wrapped in [`Zeroizing`] so it
//! is wiped once the computation finishes.

use zeroize::Zeroizing;

use super::ROUNDS;
use crate::hash::Sha512;
use crate::hash::sha512::DIGEST_LEN;

/// A 64-byte intermediate digest, wiped on drop.
pub(crate) type Digest = Zeroizing<[u8; DIGEST_LEN]>;

/// Minimum number of times the salt is fed into the S-sequence digest.
const S_REPEAT_BASE: usize = 16;

/// `SHA512(password || salt || password)`.
pub(crate) fn alternate_sum(password: &[u8], salt: &[u8]) -> Digest {
    let mut ctx = Sha512::new();
    ctx.update(password);
    ctx.update(salt);
    ctx.update(password);

    Zeroizing::new(ctx.finalize())
}

/// Feeds `len` bytes of `digest` into `ctx`, whole copies first and then the
/// leading bytes of one more copy.
fn feed_repeated(ctx: &mut Sha512, digest: &[u8; DIGEST_LEN], len: usize) {
    let mut remaining = len;

    while remaining > DIGEST_LEN {
        ctx.update(digest);
        remaining -= DIGEST_LEN;
    }

    ctx.update(&digest[..remaining]);
}

/// Builds the working digest from the password, the salt and `alt`.
pub(crate) fn main_sum(password: &[u8], salt: &[u8], alt: &[u8; DIGEST_LEN]) -> Digest {
    let mut ctx = Sha512::new();
    ctx.update(password);
    ctx.update(salt);

    feed_repeated(&mut ctx, alt, password.len());

    // One input per bit of the password length, lowest bit first.
    let mut bits = password.len();
    while bits > 0 {
        if bits & 1 != 0 {
            ctx.update(alt);
        } else {
            ctx.update(password);
        }
        bits >>= 1;
    }

    Zeroizing::new(ctx.finalize())
}

/// Repeats `digest` and cuts the result to exactly `len` bytes.
fn expand(digest: &[u8; DIGEST_LEN], len: usize) -> Zeroizing<Vec<u8>> {
    Zeroizing::new(digest.iter().cycle().take(len).copied().collect())
}

/// The P-sequence: `SHA512(password repeated len(password) times)`,
/// expanded to `len(password)` bytes.
pub(crate) fn p_sequence(password: &[u8]) -> Zeroizing<Vec<u8>> {
    let mut ctx = Sha512::new();
    for _ in 0..password.len() {
        ctx.update(password);
    }
    let p_bytes = Zeroizing::new(ctx.finalize());

    expand(&p_bytes, password.len())
}

/// The S-sequence: `SHA512(salt repeated 16 + first times)`, expanded to
/// `len(salt)` bytes. `first` is the leading byte of the working digest.
pub(crate) fn s_sequence(salt: &[u8], first: u8) -> Zeroizing<Vec<u8>> {
    let mut ctx = Sha512::new();
    for _ in 0..S_REPEAT_BASE + usize::from(first) {
        ctx.update(salt);
    }
    let s_bytes = Zeroizing::new(ctx.finalize());

    expand(&s_bytes, salt.len())
}

/// Runs the [`ROUNDS`] mixing rounds over `result`.
///
/// Per round `r`, in this order:
/// 1. `p` if `r` is odd, else `result`
/// 2. `s` unless `r` is a multiple of 3
/// 3. `p` unless `r` is a multiple of 7
/// 4. `result` if `r` is odd, else `p`
pub(crate) fn mix_rounds(mut result: Digest, p: &[u8], s: &[u8]) -> Digest {
    for round in 0..ROUNDS {
        let odd = round & 1 != 0;
        let mut ctx = Sha512::new();

        if odd {
            ctx.update(p);
        } else {
            ctx.update(&result[..]);
        }

        if round % 3 != 0 {
            ctx.update(s);
        }

        if round % 7 != 0 {
            ctx.update(p);
        }

        if odd {
            ctx.update(&result[..]);
        } else {
            ctx.update(p);
        }

        *result = ctx.finalize();
    }

    result
}

/// Runs the full pipeline and returns the final digest, ready for encoding.
///
/// `salt` must already be normalized.
pub(crate) fn digest(password: &[u8], salt: &[u8]) -> Digest {
    let alt = alternate_sum(password, salt);
    let result = main_sum(password, salt, &alt);

    let p = p_sequence(password);
    let s = s_sequence(salt, result[0]);

    mix_rounds(result, &p, &s)
}
