//! SHA-512 core hashing functions
//!
//! This module implements the core logic of the SHA-512 cryptographic hash
//! function as defined in FIPS 180-4.
//!
//! It provides:
//! - the compression function operating on 1024-bit blocks
//! - an incremental hasher, [`Sha512`], fed in arbitrary pieces
//! - a one-shot [`sha512`] function for contiguous input
//!
//! The crypt engine feeds the same inputs many times over (the password
//! repeated once per byte of its own length, the salt up to 271 times), so
//! the incremental form is the one it uses. Buffering happens at block
//! granularity and never grows with the input.

use zeroize::Zeroize;

use super::computations::all_rounds;
use super::{BLOCK_LEN, DIGEST_LEN, H512_INIT};

/// Offset of the 128-bit length field inside the final block.
const LENGTH_OFFSET: usize = BLOCK_LEN - 16;

/// Compresses a single 1024-bit message block.
///
/// This function performs the SHA-512 compression step on a single
/// 128-byte block, updating the internal hash state in place.
///
/// # Parameters
/// - `block`: A 1024-bit (128-byte) message block
/// - `state`: The current hash state (8 × 64-bit words)
///
/// # Notes
/// - Input words are interpreted as big-endian, as required by SHA-512.
pub fn compress(block: &[u8; BLOCK_LEN], state: &mut [u64; 8]) {
    // Message schedule (first 16 words)
    let mut w = [0u64; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(8)) {
        *slot = chunk
            .iter()
            .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte));
    }

    all_rounds(state, &mut w);

    w.zeroize();
}

/// Incremental SHA-512 hasher.
///
/// Every call to [`Sha512::new`] starts from H(0); contexts are never reset
/// and reused. The internal state and any buffered input are wiped when the
/// hasher is dropped.
#[derive(Clone)]
pub struct Sha512 {
    state: [u64; 8],
    buffer: [u8; BLOCK_LEN],
    buffered: usize,
    /// Total number of bytes absorbed so far.
    len: u128,
}

impl Sha512 {
    pub fn new() -> Self {
        Self {
            state: H512_INIT,
            buffer: [0u8; BLOCK_LEN],
            buffered: 0,
            len: 0,
        }
    }

    /// Absorbs `data` into the hash state.
    pub fn update(&mut self, mut data: &[u8]) {
        self.len = self.len.wrapping_add(data.len() as u128);

        // Top up a partially filled block first.
        if self.buffered > 0 {
            let take = (BLOCK_LEN - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < BLOCK_LEN {
                return;
            }

            compress(&self.buffer, &mut self.state);
            self.buffered = 0;
        }

        let mut blocks = data.chunks_exact(BLOCK_LEN);
        for block in &mut blocks {
            self.buffer.copy_from_slice(block);
            compress(&self.buffer, &mut self.state);
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
    }

    /// Applies the final padding and returns the 512-bit digest.
    ///
    /// # Notes
    /// - The message length is encoded as a 128-bit big-endian integer (in bits).
    /// - If fewer than 17 bytes remain in the current block, an extra zeroed
    ///   block carries the length field.
    pub fn finalize(mut self) -> [u8; DIGEST_LEN] {
        let bit_len = self.len << 3;
        let rem = self.buffered;

        // Append the padding bit (0x80) and clear the tail
        self.buffer[rem] = 0x80;
        self.buffer[rem + 1..].fill(0);

        if rem >= LENGTH_OFFSET {
            compress(&self.buffer, &mut self.state);
            self.buffer.fill(0);
        }

        self.buffer[LENGTH_OFFSET..].copy_from_slice(&bit_len.to_be_bytes());
        compress(&self.buffer, &mut self.state);

        // Serialize final state into big-endian bytes
        let mut out = [0u8; DIGEST_LEN];
        for (chunk, word) in out.chunks_exact_mut(8).zip(self.state.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        out
    }
}

impl Default for Sha512 {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Sha512 {
    fn drop(&mut self) {
        self.state.zeroize();
        self.buffer.zeroize();
    }
}

/// Computes the SHA-512 hash of the given input.
///
/// # Parameters
/// - `input`: Arbitrary-length input message
///
/// # Returns
/// - The final SHA-512 hash as 64 bytes (`[u8; 64]`)
pub fn sha512(input: &[u8]) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha512::new();
    hasher.update(input);
    hasher.finalize()
}
