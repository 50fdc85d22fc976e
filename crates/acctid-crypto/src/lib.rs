//! # acctid-crypto — Digest and Checksum Engines
//!
//! The two primitives an account identifier is built from:
//!
//! - **SHA-224** ([`sha224`], [`Sha224`]): the 256-bit compression function
//!   with the 224-bit initialization vector and output truncation. Written
//!   from the FIPS 180-4 description, not delegated to a hashing crate.
//! - **CRC-32** ([`crc32`], [`Crc32`]): the reflected `0xEDB88320`
//!   polynomial with a 256-entry lookup table built at compile time.
//!
//! ## Crate Policy
//!
//! - Leaf of the workspace DAG: no internal dependencies.
//! - Both engines are total over byte input. There is no error type here;
//!   internal consistency is checked with `debug_assert!`.
//! - The only process-wide state is the immutable CRC table. Everything
//!   else lives in values owned by a single call or a single hasher.
//! - `sha2` is a dev-dependency only, used as a reference oracle in tests.

pub mod crc32;
pub mod sha224;

pub use crc32::{crc32, crc32_be_bytes, Crc32};
pub use sha224::{sha224, Sha224, SHA224_OUTPUT_LEN};
