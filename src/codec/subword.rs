//! Bit fields packed inside a little-endian 32-bit word.
//!
//! Branch and load/store instruction encodings carry their immediates in a handful of fixed
//! layouts. Three are supported:
//!
//! | Layout    | Field bits | Preserved bits       |
//! |-----------|------------|----------------------|
//! | `le26`    | `0..26`    | top 6                |
//! | `le19_5`  | `5..24`    | low 5 and top 8      |
//! | `le14_5`  | `5..19`    | low 5 and top 13     |
//!
//! Writes are read-modify-write on the decoded word: every bit outside the field keeps its
//! decoded value. A field value wider than the field is truncated to the field width without
//! any error, mirroring what the instruction encoding itself can hold.

use crate::codec::{
    native::{get_ne32, set_ne32},
    order::{get_le32, set_le32},
    swap::ne32_to_le32,
};

const LE26_MASK: u32 = 0x03ff_ffff;
const LE19_MASK: u32 = 0x0007_ffff;
const LE14_MASK: u32 = 0x0000_3fff;

/// Reads the 26-bit field in the low bits of a little-endian word.
#[must_use]
pub fn get_le26(p: &[u8; 4]) -> u32 {
    get_le32(p) & LE26_MASK
}

/// Reads the 19-bit field stored at bit 5 of a little-endian word.
#[must_use]
pub fn get_le19_5(p: &[u8; 4]) -> u32 {
    (get_le32(p) >> 5) & LE19_MASK
}

/// Reads the 14-bit field stored at bit 5 of a little-endian word.
#[must_use]
pub fn get_le14_5(p: &[u8; 4]) -> u32 {
    (get_le32(p) >> 5) & LE14_MASK
}

/// Writes the 26-bit field in the low bits of a little-endian word, preserving the top 6 bits.
///
/// Works directly on the undecoded host-order word with a mask and value that were converted to
/// the target order, which saves the byte swap of the decode step on big-endian hosts. The result
/// is byte-identical to [`set_le26_generic`].
pub fn set_le26(p: &mut [u8; 4], v: u32) {
    let word = get_ne32(p);
    set_ne32(
        p,
        (word & ne32_to_le32(!LE26_MASK)) | (ne32_to_le32(v) & ne32_to_le32(LE26_MASK)),
    );
}

/// Writes the 26-bit field through a full decode / mask / encode round trip.
///
/// Reference form of [`set_le26`].
pub fn set_le26_generic(p: &mut [u8; 4], v: u32) {
    set_le32(p, (get_le32(p) & !LE26_MASK) | (v & LE26_MASK));
}

/// Writes the 19-bit field at bit 5, preserving the low 5 and top 8 bits.
pub fn set_le19_5(p: &mut [u8; 4], v: u32) {
    set_le32(p, (get_le32(p) & !(LE19_MASK << 5)) | ((v & LE19_MASK) << 5));
}

/// Writes the 14-bit field at bit 5, preserving the low 5 and top 13 bits.
pub fn set_le14_5(p: &mut [u8; 4], v: u32) {
    set_le32(p, (get_le32(p) & !(LE14_MASK << 5)) | ((v & LE14_MASK) << 5));
}
