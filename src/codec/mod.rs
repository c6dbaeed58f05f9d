//! Byte-order codec primitives.
//!
//! This module is the bottom layer of the crate: pure, total functions that convert between host
//! integers and their big- or little-endian byte representation. Nothing here allocates, fails,
//! or touches shared state.
//!
//! # Key Components
//!
//! - [`swap`] - `bswap16/32/64`, their no-op twins, and host → target conversions
//! - [`native`] - host-order access, as a `const fn` shift form and a run-time copy form
//! - [`order`] - big/little-endian `get`/`set`/`decode`/`encode`, 24-bit fields, signed reads and
//!   raw-record comparators
//! - [`subword`] - the packed `le26`, `le19_5` and `le14_5` instruction fields
//! - [`sign`] - sign extension of narrow fields
//!
//! # Examples
//!
//! ```rust
//! use endiscope::codec::{get_be32, set_le32, encode_be16};
//!
//! let mut word = [0u8; 4];
//! set_le32(&mut word, 0x0102_0304);
//! assert_eq!(word, [0x04, 0x03, 0x02, 0x01]);
//! assert_eq!(get_be32(&[0x01, 0x02, 0x03, 0x04]), 0x0102_0304);
//!
//! const MAGIC: [u8; 2] = encode_be16(0x4d5a);
//! assert_eq!(&MAGIC, b"MZ");
//! ```

pub mod native;
pub mod order;
pub mod sign;
pub mod subword;
pub mod swap;

pub use native::{
    decode_ne16_const, decode_ne32_const, decode_ne64_const, encode_ne16_const,
    encode_ne32_const, encode_ne64_const, get_ne16, get_ne32, get_ne64, set_ne16, set_ne32,
    set_ne64,
};
pub use order::*;
pub use sign::{sign_extend32, sign_extend64};
pub use subword::{get_le14_5, get_le19_5, get_le26, set_le14_5, set_le19_5, set_le26};
pub use swap::{bswap16, bswap32, bswap64, no_bswap16, no_bswap32, no_bswap64};
