//! Fixed-order big- and little-endian accessors.
//!
//! Each accessor is written as "host-order access followed by host → target conversion", so the
//! only place that knows the host byte order is [`crate::codec::swap`]. Three families exist:
//!
//! - `get_*` / `set_*` - run-time access to a byte array at any alignment
//! - `decode_*` / `encode_*` - `const fn` value ↔ byte-array transcoding
//! - `*_signed` and `*_compare*` - sign-extended reads and raw-record comparators
//!
//! 24-bit fields have no host integer of matching size and are always composed byte by byte.

use std::cmp::Ordering;

use crate::codec::{
    native::{
        decode_ne16_const, decode_ne32_const, decode_ne64_const, encode_ne16_const,
        encode_ne32_const, encode_ne64_const, get_ne16, get_ne32, get_ne64, set_ne16, set_ne32,
        set_ne64,
    },
    sign::{sign_extend32, sign_extend64},
    swap::{ne16_to_be16, ne16_to_le16, ne32_to_be32, ne32_to_le32, ne64_to_be64, ne64_to_le64},
};

macro_rules! fixed_order_16 {
    ($get:ident, $set:ident, $decode:ident, $encode:ident, $conv:ident, $doc:literal) => {
        #[doc = concat!("Reads a ", $doc, " `u16` from two bytes at any alignment.")]
        #[must_use]
        #[inline]
        pub fn $get(p: &[u8; 2]) -> u16 {
            $conv(u32::from(get_ne16(p))) as u16
        }

        #[doc = concat!("Stores `v` as a ", $doc, " `u16` into two bytes at any alignment.")]
        #[inline]
        pub fn $set(p: &mut [u8; 2], v: u16) {
            set_ne16(p, $conv(u32::from(v)) as u16);
        }

        #[doc = concat!("Decodes a ", $doc, " `u16`. Usable in `const` contexts.")]
        #[must_use]
        pub const fn $decode(p: [u8; 2]) -> u16 {
            $conv(decode_ne16_const(p) as u32) as u16
        }

        #[doc = concat!("Encodes `v` as a ", $doc, " `u16`. Usable in `const` contexts.")]
        #[must_use]
        pub const fn $encode(v: u16) -> [u8; 2] {
            encode_ne16_const($conv(v as u32) as u16)
        }
    };
}

macro_rules! fixed_order {
    ($ty:ty, $n:literal, $get:ident, $set:ident, $decode:ident, $encode:ident,
     $get_ne:ident, $set_ne:ident, $decode_ne:ident, $encode_ne:ident, $conv:ident, $doc:literal) => {
        #[doc = concat!("Reads a ", $doc, " `", stringify!($ty), "` at any alignment.")]
        #[must_use]
        #[inline]
        pub fn $get(p: &[u8; $n]) -> $ty {
            $conv($get_ne(p))
        }

        #[doc = concat!("Stores `v` as a ", $doc, " `", stringify!($ty), "` at any alignment.")]
        #[inline]
        pub fn $set(p: &mut [u8; $n], v: $ty) {
            $set_ne(p, $conv(v));
        }

        #[doc = concat!("Decodes a ", $doc, " `", stringify!($ty), "`. Usable in `const` contexts.")]
        #[must_use]
        pub const fn $decode(p: [u8; $n]) -> $ty {
            $conv($decode_ne(p))
        }

        #[doc = concat!("Encodes `v` as a ", $doc, " `", stringify!($ty), "`. Usable in `const` contexts.")]
        #[must_use]
        pub const fn $encode(v: $ty) -> [u8; $n] {
            $encode_ne($conv(v))
        }
    };
}

fixed_order_16!(get_be16, set_be16, decode_be16, encode_be16, ne16_to_be16, "big-endian");
fixed_order_16!(get_le16, set_le16, decode_le16, encode_le16, ne16_to_le16, "little-endian");

#[rustfmt::skip]
fixed_order!(u32, 4, get_be32, set_be32, decode_be32, encode_be32,
    get_ne32, set_ne32, decode_ne32_const, encode_ne32_const, ne32_to_be32, "big-endian");
#[rustfmt::skip]
fixed_order!(u32, 4, get_le32, set_le32, decode_le32, encode_le32,
    get_ne32, set_ne32, decode_ne32_const, encode_ne32_const, ne32_to_le32, "little-endian");
#[rustfmt::skip]
fixed_order!(u64, 8, get_be64, set_be64, decode_be64, encode_be64,
    get_ne64, set_ne64, decode_ne64_const, encode_ne64_const, ne64_to_be64, "big-endian");
#[rustfmt::skip]
fixed_order!(u64, 8, get_le64, set_le64, decode_le64, encode_le64,
    get_ne64, set_ne64, decode_ne64_const, encode_ne64_const, ne64_to_le64, "little-endian");

/// Reads a big-endian 24-bit value from three bytes.
#[must_use]
pub const fn get_be24(p: &[u8; 3]) -> u32 {
    ((p[0] as u32) << 16) | ((p[1] as u32) << 8) | (p[2] as u32)
}

/// Reads a little-endian 24-bit value from three bytes.
#[must_use]
pub const fn get_le24(p: &[u8; 3]) -> u32 {
    (p[0] as u32) | ((p[1] as u32) << 8) | ((p[2] as u32) << 16)
}

/// Stores the low 24 bits of `v` big-endian into three bytes. Higher bits are dropped.
pub fn set_be24(p: &mut [u8; 3], v: u32) {
    p[0] = ((v >> 16) & 0xff) as u8;
    p[1] = ((v >> 8) & 0xff) as u8;
    p[2] = (v & 0xff) as u8;
}

/// Stores the low 24 bits of `v` little-endian into three bytes. Higher bits are dropped.
pub fn set_le24(p: &mut [u8; 3], v: u32) {
    p[0] = (v & 0xff) as u8;
    p[1] = ((v >> 8) & 0xff) as u8;
    p[2] = ((v >> 16) & 0xff) as u8;
}

/// Reads a big-endian `u16` and sign-extends it.
#[must_use]
pub fn get_be16_signed(p: &[u8; 2]) -> i32 {
    sign_extend32(u32::from(get_be16(p)), 16)
}

/// Reads a big-endian 24-bit value and sign-extends it.
#[must_use]
pub fn get_be24_signed(p: &[u8; 3]) -> i32 {
    sign_extend32(get_be24(p), 24)
}

/// Reads a big-endian `u32` and reinterprets it as signed.
#[must_use]
pub fn get_be32_signed(p: &[u8; 4]) -> i32 {
    sign_extend32(get_be32(p), 32)
}

/// Reads a big-endian `u64` and reinterprets it as signed.
#[must_use]
pub fn get_be64_signed(p: &[u8; 8]) -> i64 {
    sign_extend64(get_be64(p), 64)
}

/// Reads a little-endian `u16` and sign-extends it.
#[must_use]
pub fn get_le16_signed(p: &[u8; 2]) -> i32 {
    sign_extend32(u32::from(get_le16(p)), 16)
}

/// Reads a little-endian 24-bit value and sign-extends it.
#[must_use]
pub fn get_le24_signed(p: &[u8; 3]) -> i32 {
    sign_extend32(get_le24(p), 24)
}

/// Reads a little-endian `u32` and reinterprets it as signed.
#[must_use]
pub fn get_le32_signed(p: &[u8; 4]) -> i32 {
    sign_extend32(get_le32(p), 32)
}

/// Reads a little-endian `u64` and reinterprets it as signed.
#[must_use]
pub fn get_le64_signed(p: &[u8; 8]) -> i64 {
    sign_extend64(get_le64(p), 64)
}

macro_rules! comparators {
    ($($unsigned:ident, $signed:ident, $n:literal, $get:ident, $get_signed:ident;)*) => {
        $(
            #[doc = concat!("Orders two raw records by their `", stringify!($get), "` value.")]
            #[must_use]
            pub fn $unsigned(a: &[u8; $n], b: &[u8; $n]) -> Ordering {
                $get(a).cmp(&$get(b))
            }

            #[doc = concat!("Orders two raw records by their `", stringify!($get_signed), "` value.")]
            #[must_use]
            pub fn $signed(a: &[u8; $n], b: &[u8; $n]) -> Ordering {
                $get_signed(a).cmp(&$get_signed(b))
            }
        )*
    };
}

comparators! {
    be16_compare, be16_compare_signed, 2, get_be16, get_be16_signed;
    be24_compare, be24_compare_signed, 3, get_be24, get_be24_signed;
    be32_compare, be32_compare_signed, 4, get_be32, get_be32_signed;
    be64_compare, be64_compare_signed, 8, get_be64, get_be64_signed;
    le16_compare, le16_compare_signed, 2, get_le16, get_le16_signed;
    le24_compare, le24_compare_signed, 3, get_le24, get_le24_signed;
    le32_compare, le32_compare_signed, 4, get_le32, get_le32_signed;
    le64_compare, le64_compare_signed, 8, get_le64, get_le64_signed;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn be32_layout() {
        let mut b = [0u8; 4];
        set_be32(&mut b, 0x0102_0304);
        assert_eq!(b, [0x01, 0x02, 0x03, 0x04]);
        assert_eq!(get_be32(&b), 0x0102_0304);
        assert_eq!(encode_be32(0x0102_0304), b);
    }

    #[test]
    fn le32_layout() {
        let mut b = [0u8; 4];
        set_le32(&mut b, 0x0102_0304);
        assert_eq!(b, [0x04, 0x03, 0x02, 0x01]);
        assert_eq!(get_le32(&b), 0x0102_0304);
        assert_eq!(decode_le32(b), 0x0102_0304);
    }

    #[test]
    fn sixteen_and_sixty_four() {
        assert_eq!(encode_be16(0xabcd), [0xab, 0xcd]);
        assert_eq!(encode_le16(0xabcd), [0xcd, 0xab]);
        assert_eq!(decode_be16([0xab, 0xcd]), 0xabcd);
        assert_eq!(
            encode_be64(0x0102_0304_0506_0708),
            [1, 2, 3, 4, 5, 6, 7, 8]
        );
        assert_eq!(
            encode_le64(0x0102_0304_0506_0708),
            [8, 7, 6, 5, 4, 3, 2, 1]
        );
        let mut b = [0u8; 2];
        set_le16(&mut b, 0x1234);
        assert_eq!(get_le16(&b), 0x1234);
        set_be16(&mut b, 0x1234);
        assert_eq!(b, [0x12, 0x34]);
    }

    #[test]
    fn twenty_four_bit() {
        let mut b = [0u8; 3];
        set_be24(&mut b, 0xff12_3456);
        assert_eq!(b, [0x12, 0x34, 0x56]);
        assert_eq!(get_be24(&b), 0x12_3456);
        set_le24(&mut b, 0x12_3456);
        assert_eq!(b, [0x56, 0x34, 0x12]);
        assert_eq!(get_le24(&b), 0x12_3456);
        assert_eq!(get_le24_signed(&[0xff, 0xff, 0xff]), -1);
        assert_eq!(get_be24_signed(&[0x80, 0x00, 0x00]), -0x80_0000);
    }

    #[test]
    fn signed_reads() {
        assert_eq!(get_be16_signed(&[0xff, 0xfe]), -2);
        assert_eq!(get_le16_signed(&[0xfe, 0x7f]), 0x7ffe);
        assert_eq!(get_be32_signed(&[0x80, 0, 0, 0]), i32::MIN);
        assert_eq!(get_le32_signed(&[0xff; 4]), -1);
        assert_eq!(get_be64_signed(&[0xff; 8]), -1);
        assert_eq!(get_le64_signed(&[0, 0, 0, 0, 0, 0, 0, 0x80]), i64::MIN);
    }

    #[test]
    fn comparators_sort_records() {
        let mut records = [[0x00, 0x02], [0xff, 0xff], [0x00, 0x01]];
        records.sort_by(be16_compare);
        assert_eq!(records, [[0x00, 0x01], [0x00, 0x02], [0xff, 0xff]]);
        records.sort_by(be16_compare_signed);
        assert_eq!(records, [[0xff, 0xff], [0x00, 0x01], [0x00, 0x02]]);

        assert_eq!(le32_compare(&[1, 0, 0, 0], &[0, 1, 0, 0]), Ordering::Less);
        assert_eq!(
            le64_compare_signed(&[0xff; 8], &[0; 8]),
            Ordering::Less
        );
        assert_eq!(be24_compare(&[0, 0, 1], &[0, 0, 1]), Ordering::Equal);
    }
}
