//! # SHA-224 Digest Engine
//!
//! A from-scratch SHA-224 (FIPS 180-4 §6.3): the SHA-256 compression
//! function started from the SHA-224 initialization vector, with the final
//! state truncated to its first seven words.
//!
//! ## Algorithm
//!
//! 1. Pad: `0x80`, zero bytes, then the message length in bits as a 64-bit
//!    big-endian integer, so the padded length is a multiple of 64. When the
//!    `0x80` byte and the length field do not fit in the final block the
//!    padding spills into one more block.
//! 2. For every 64-byte block, expand 16 big-endian words into a 64-word
//!    schedule (σ0, σ1), then run 64 rounds over an 8-word working state
//!    (Σ0, Σ1, Ch, Maj, round constants) and add the result back into the
//!    running state.
//! 3. Emit state words 0..7 big-endian (28 bytes). Word 7 is dropped.
//!
//! All arithmetic is modulo 2^32 via `wrapping_*`.
//!
//! ## Ownership
//!
//! The running state is a `[u32; 8]` passed into `compress` by value and
//! returned by value. The message schedule is a local array of that call.
//! Nothing is shared between hashers, so concurrent use needs no locking.
//!
//! ## Interoperability
//!
//! The ledger's account identifiers use this exact construction. Hashing
//! with SHA-256 and truncating to 28 bytes is a different function and
//! produces identifiers the ledger will not recognize.

/// Digest length in bytes.
pub const SHA224_OUTPUT_LEN: usize = 28;

const BLOCK_LEN: usize = 64;
const LENGTH_FIELD_LEN: usize = 8;

/// SHA-224 initialization vector (FIPS 180-4 §5.3.2).
const INITIAL_STATE: [u32; 8] = [
    0xc105_9ed8, 0x367c_d507, 0x3070_dd17, 0xf70e_5939,
    0xffc0_0b31, 0x6858_1511, 0x64f9_8fa7, 0xbefa_4fa4,
];

/// First 32 bits of the fractional parts of the cube roots of the first
/// 64 primes (FIPS 180-4 §4.2.2).
const ROUND_CONSTANTS: [u32; 64] = [
    0x428a_2f98, 0x7137_4491, 0xb5c0_fbcf, 0xe9b5_dba5,
    0x3956_c25b, 0x59f1_11f1, 0x923f_82a4, 0xab1c_5ed5,
    0xd807_aa98, 0x1283_5b01, 0x2431_85be, 0x550c_7dc3,
    0x72be_5d74, 0x80de_b1fe, 0x9bdc_06a7, 0xc19b_f174,
    0xe49b_69c1, 0xefbe_4786, 0x0fc1_9dc6, 0x240c_a1cc,
    0x2de9_2c6f, 0x4a74_84aa, 0x5cb0_a9dc, 0x76f9_88da,
    0x983e_5152, 0xa831_c66d, 0xb003_27c8, 0xbf59_7fc7,
    0xc6e0_0bf3, 0xd5a7_9147, 0x06ca_6351, 0x1429_2967,
    0x27b7_0a85, 0x2e1b_2138, 0x4d2c_6dfc, 0x5338_0d13,
    0x650a_7354, 0x766a_0abb, 0x81c2_c92e, 0x9272_2c85,
    0xa2bf_e8a1, 0xa81a_664b, 0xc24b_8b70, 0xc76c_51a3,
    0xd192_e819, 0xd699_0624, 0xf40e_3585, 0x106a_a070,
    0x19a4_c116, 0x1e37_6c08, 0x2748_774c, 0x34b0_bcb5,
    0x391c_0cb3, 0x4ed8_aa4a, 0x5b9c_ca4f, 0x682e_6ff3,
    0x748f_82ee, 0x78a5_636f, 0x84c8_7814, 0x8cc7_0208,
    0x90be_fffa, 0xa450_6ceb, 0xbef9_a3f7, 0xc671_78f2,
];

// ---------------------------------------------------------------------------
// Mixing functions
// ---------------------------------------------------------------------------

#[inline]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[inline]
fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ (!e & g)
}

#[inline]
fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

// ---------------------------------------------------------------------------
// Block processing
// ---------------------------------------------------------------------------

/// Expand one 64-byte block into the 64-word message schedule.
fn message_schedule(block: &[u8]) -> [u32; 64] {
    debug_assert_eq!(block.len(), BLOCK_LEN, "schedule input must be one block");
    let mut w = [0u32; 64];
    for (t, word) in block.chunks_exact(4).enumerate() {
        w[t] = u32::from_be_bytes([word[0], word[1], word[2], word[3]]);
    }
    for t in 16..64 {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }
    w
}

/// Run the 64-round compression function over one block and return the
/// updated chaining state.
fn compress(state: [u32; 8], block: &[u8]) -> [u32; 8] {
    let w = message_schedule(block);
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = state;

    for (k, wt) in ROUND_CONSTANTS.iter().zip(w.iter()) {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(*k)
            .wrapping_add(*wt);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));
        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    let working = [a, b, c, d, e, f, g, h];
    let mut next = state;
    for (word, delta) in next.iter_mut().zip(working) {
        *word = word.wrapping_add(delta);
    }
    next
}

/// Padding appended to a message of `message_len` bytes.
///
/// `message_len + padding(message_len).len()` is always a multiple of 64.
pub fn padding(message_len: u64) -> Vec<u8> {
    let rem = (message_len % BLOCK_LEN as u64) as usize;
    let zeros = if rem < BLOCK_LEN - LENGTH_FIELD_LEN {
        BLOCK_LEN - LENGTH_FIELD_LEN - 1 - rem
    } else {
        2 * BLOCK_LEN - LENGTH_FIELD_LEN - 1 - rem
    };

    let mut pad = Vec::with_capacity(1 + zeros + LENGTH_FIELD_LEN);
    pad.push(0x80);
    pad.resize(1 + zeros, 0);
    pad.extend_from_slice(&message_len.wrapping_mul(8).to_be_bytes());

    debug_assert_eq!(
        (rem + pad.len()) % BLOCK_LEN,
        0,
        "padded message must be block aligned"
    );
    pad
}

// ---------------------------------------------------------------------------
// Streaming hasher
// ---------------------------------------------------------------------------

/// Incremental SHA-224 hasher.
///
/// Owns its chaining state and a one-block carry buffer. `finalize`
/// consumes the hasher, so a finished state can never be extended.
#[derive(Debug, Clone)]
pub struct Sha224 {
    state: [u32; 8],
    buffer: [u8; BLOCK_LEN],
    buffered: usize,
    message_len: u64,
}

impl Sha224 {
    /// Create a hasher at the SHA-224 initial state.
    pub fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            buffer: [0u8; BLOCK_LEN],
            buffered: 0,
            message_len: 0,
        }
    }

    /// Feed message bytes into the hasher.
    pub fn update(&mut self, data: &[u8]) {
        self.message_len = self.message_len.wrapping_add(data.len() as u64);
        self.absorb(data);
    }

    /// Apply padding and return the 28-byte digest.
    pub fn finalize(mut self) -> [u8; SHA224_OUTPUT_LEN] {
        let pad = padding(self.message_len);
        self.absorb(&pad);
        debug_assert_eq!(self.buffered, 0, "padding must end on a block boundary");

        let mut out = [0u8; SHA224_OUTPUT_LEN];
        for (chunk, word) in out.chunks_exact_mut(4).zip(&self.state[..7]) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    /// Push bytes through the block buffer without touching the length
    /// counter. Shared by `update` and the padding step of `finalize`.
    fn absorb(&mut self, mut data: &[u8]) {
        if self.buffered > 0 {
            let take = (BLOCK_LEN - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];
            if self.buffered < BLOCK_LEN {
                return;
            }
            self.state = compress(self.state, &self.buffer);
            self.buffered = 0;
        }

        let mut blocks = data.chunks_exact(BLOCK_LEN);
        for block in &mut blocks {
            self.state = compress(self.state, block);
        }
        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
    }
}

impl Default for Sha224 {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the SHA-224 digest of `data` in one call.
pub fn sha224(data: &[u8]) -> [u8; SHA224_OUTPUT_LEN] {
    let mut hasher = Sha224::new();
    hasher.update(data);
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_digest(data: &[u8]) -> String {
        hex::encode(sha224(data))
    }

    #[test]
    fn empty_input_vector() {
        assert_eq!(
            hex_digest(b""),
            "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"
        );
    }

    #[test]
    fn abc_vector() {
        assert_eq!(
            hex_digest(b"abc"),
            "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"
        );
    }

    #[test]
    fn two_block_vector() {
        // FIPS 180-4 example: 448-bit message forces a second padding block.
        assert_eq!(
            hex_digest(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
            "75388b16512776cc5dba5da1fd890150b0c6455cb4f58b1952522525"
        );
    }

    #[test]
    fn one_million_a_vector() {
        let data = vec![b'a'; 1_000_000];
        assert_eq!(
            hex_digest(&data),
            "20794655980c91d8bbb4c1ea97618a4bf03f42581948b2ee4ee7ad67"
        );
    }

    #[test]
    fn padding_boundaries() {
        assert_eq!(
            hex_digest(&[b'a'; 55]),
            "fb0bd626a70c28541dfa781bb5cc4d7d7f56622a58f01a0b1ddd646f"
        );
        assert_eq!(
            hex_digest(&[b'a'; 56]),
            "d40854fc9caf172067136f2e29e1380b14626bf6f0dd06779f820dcd"
        );
        assert_eq!(
            hex_digest(&[b'a'; 64]),
            "a88cd5cde6d6fe9136a4e58b49167461ea95d388ca2bdb7afdc3cbf4"
        );
    }

    #[test]
    fn padding_fits_in_final_block() {
        let pad = padding(55);
        assert_eq!(pad.len(), 9);
        assert_eq!(pad[0], 0x80);
        assert_eq!(&pad[1..], &(55u64 * 8).to_be_bytes());
    }

    #[test]
    fn padding_spills_into_extra_block() {
        for len in 56u64..64 {
            let pad = padding(len);
            assert_eq!((len as usize + pad.len()), 128, "len {len}");
        }
    }

    #[test]
    fn padding_is_always_block_aligned() {
        for len in 0u64..300 {
            let pad = padding(len);
            assert_eq!((len as usize + pad.len()) % 64, 0, "len {len}");
            assert!(pad.len() >= 9 && pad.len() <= 72);
        }
    }

    #[test]
    fn output_is_28_bytes() {
        assert_eq!(sha224(b"anything").len(), 28);
    }

    #[test]
    fn incremental_matches_one_shot() {
        let data: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
        let mut hasher = Sha224::new();
        for chunk in data.chunks(37) {
            hasher.update(chunk);
        }
        assert_eq!(hasher.finalize(), sha224(&data));
    }

    #[test]
    fn empty_updates_are_noops() {
        let mut hasher = Sha224::default();
        hasher.update(b"");
        hasher.update(b"ab");
        hasher.update(b"");
        hasher.update(b"c");
        assert_eq!(hasher.finalize(), sha224(b"abc"));
    }

    #[test]
    fn cloned_hasher_diverges_independently() {
        let mut base = Sha224::new();
        base.update(b"prefix");
        let mut left = base.clone();
        let mut right = base;
        left.update(b"-left");
        right.update(b"-right");
        assert_eq!(left.finalize(), sha224(b"prefix-left"));
        assert_eq!(right.finalize(), sha224(b"prefix-right"));
    }

    #[test]
    fn differs_from_truncated_sha256() {
        use sha2::{Digest, Sha256};
        let truncated = &Sha256::digest(b"abc")[..28];
        assert_ne!(&sha224(b"abc")[..], truncated);
    }

    #[test]
    fn agrees_with_reference_implementation() {
        use sha2::{Digest, Sha224 as RefSha224};
        for len in [0usize, 1, 54, 55, 56, 57, 63, 64, 65, 119, 120, 127, 128, 129, 1024] {
            let data: Vec<u8> = (0..len).map(|i| (i * 31 % 251) as u8).collect();
            assert_eq!(
                sha224(&data)[..],
                RefSha224::digest(&data)[..],
                "length {len}"
            );
        }
    }
}
