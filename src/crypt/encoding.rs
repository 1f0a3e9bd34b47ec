//! Final permutation and crypt base64 encoding of the digest.
//!
//! The 64-byte digest is not encoded in order. Bytes are taken in groups of
//! three following a fixed table, the first byte of each group being the
//! most significant of a 24-bit value, which is written as four 6-bit
//! characters, least significant first. Byte 63 is left over and written
//! as two characters.
//!
//! The table is data, not a computed walk: 21 triples then one singleton,
//! always 86 characters out.

use crate::hash::sha512::DIGEST_LEN;

/// The crypt base64 alphabet, `./0-9A-Za-z`.
///
/// Note that this is not the ordering of RFC 4648 base64.
pub const CRYPT_ALPHABET: &[u8; 64] =
    b"./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Length of the encoded digest.
pub const ENCODED_LEN: usize = 86;

/// Byte order in which the digest is grouped, as `(high, mid, low)`.
const TRIPLES: [[usize; 3]; 21] = [
    [0, 21, 42],
    [22, 43, 1],
    [44, 2, 23],
    [3, 24, 45],
    [25, 46, 4],
    [47, 5, 26],
    [6, 27, 48],
    [28, 49, 7],
    [50, 8, 29],
    [9, 30, 51],
    [31, 52, 10],
    [53, 11, 32],
    [12, 33, 54],
    [34, 55, 13],
    [56, 14, 35],
    [15, 36, 57],
    [37, 58, 16],
    [59, 17, 38],
    [18, 39, 60],
    [40, 61, 19],
    [62, 20, 41],
];

/// Digest byte encoded on its own at the end.
const SINGLETON: usize = 63;

/// Writes the low `out.len() * 6` bits of `value`, six at a time.
#[inline]
fn encode_bits(mut value: u32, out: &mut [u8]) {
    for slot in out {
        *slot = CRYPT_ALPHABET[(value & 0x3f) as usize];
        value >>= 6;
    }
}

/// Encodes a final SHA-512-crypt digest into its 86-character form.
pub fn encode_digest(digest: &[u8; DIGEST_LEN]) -> String {
    let mut out = [0u8; ENCODED_LEN];
    let (body, tail) = out.split_at_mut(ENCODED_LEN - 2);

    for (chars, &[a, b, c]) in body.chunks_exact_mut(4).zip(TRIPLES.iter()) {
        let value =
            (u32::from(digest[a]) << 16) | (u32::from(digest[b]) << 8) | u32::from(digest[c]);
        encode_bits(value, chars);
    }

    encode_bits(u32::from(digest[SINGLETON]), tail);

    out.iter().map(|&byte| char::from(byte)).collect()
}

/// Returns the 6-bit value of a crypt base64 character.
///
/// Inverse of the alphabet lookup; used when checking parsed hash strings.
#[inline]
pub fn decode_char(ch: u8) -> Option<u8> {
    match ch {
        b'.' => Some(0),
        b'/' => Some(1),
        b'0'..=b'9' => Some(ch - b'0' + 2),
        b'A'..=b'Z' => Some(ch - b'A' + 12),
        b'a'..=b'z' => Some(ch - b'a' + 38),
        _ => None,
    }
}
