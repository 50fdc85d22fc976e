//! # CRC-32 Checksum Engine
//!
//! The common "CRC-32" (IEEE 802.3, zlib, PNG): reflected polynomial
//! `0xEDB88320`, register initialized to `0xFFFFFFFF`, final XOR with
//! `0xFFFFFFFF`.
//!
//! ## Lookup Table
//!
//! The 256-entry table is computed by a `const fn` and stored in a
//! `static`, so it exists once per process, is built at compile time, and is
//! never written afterwards. Concurrent readers need no synchronization.
//!
//! ## Scope
//!
//! CRC-32 detects accidental corruption (every single-bit and every burst
//! error up to 32 bits). It is not a MAC: anyone can recompute it after
//! tampering with the covered bytes.

const POLYNOMIAL: u32 = 0xEDB8_8320;
const INITIAL_REGISTER: u32 = 0xFFFF_FFFF;
const FINAL_XOR: u32 = 0xFFFF_FFFF;

static TABLE: [u32; 256] = build_table();

const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut n = 0;
    while n < 256 {
        let mut c = n as u32;
        let mut bit = 0;
        while bit < 8 {
            c = if c & 1 != 0 { (c >> 1) ^ POLYNOMIAL } else { c >> 1 };
            bit += 1;
        }
        table[n] = c;
        n += 1;
    }
    table
}

/// Incremental CRC-32 over a byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crc32 {
    register: u32,
}

impl Crc32 {
    /// Start a new checksum.
    pub const fn new() -> Self {
        Self {
            register: INITIAL_REGISTER,
        }
    }

    /// Fold `data` into the running checksum.
    pub fn update(&mut self, data: &[u8]) {
        let mut register = self.register;
        for &byte in data {
            register = TABLE[((register ^ u32::from(byte)) & 0xFF) as usize] ^ (register >> 8);
        }
        self.register = register;
    }

    /// The finished checksum value.
    pub fn finalize(self) -> u32 {
        self.register ^ FINAL_XOR
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

/// CRC-32 of `data`.
pub fn crc32(data: &[u8]) -> u32 {
    let mut crc = Crc32::new();
    crc.update(data);
    crc.finalize()
}

/// CRC-32 of `data` as four big-endian bytes, the layout used as the
/// account identifier prefix and in the principal text form.
pub fn crc32_be_bytes(data: &[u8]) -> [u8; 4] {
    crc32(data).to_be_bytes()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Appending the little-endian CRC to a message yields the CRC-32 residue.
        #[test]
        fn residue_property(data in prop::collection::vec(any::<u8>(), 0..256)) {
            let mut framed = data.clone();
            framed.extend_from_slice(&crc32(&data).to_le_bytes());
            prop_assert_eq!(crc32(&framed), 0x2144_DF1C);
        }
    }
}
