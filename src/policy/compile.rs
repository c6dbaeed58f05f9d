//! Compile-time byte-order policies.

use std::{cmp::Ordering, fmt};

use crate::{
    codec::{
        be16_compare, be16_compare_signed, be24_compare, be24_compare_signed, be32_compare,
        be32_compare_signed, be64_compare, be64_compare_signed, get_be16, get_be16_signed,
        get_be24, get_be24_signed, get_be32, get_be32_signed, get_be64, get_be64_signed,
        get_le16, get_le16_signed, get_le24, get_le24_signed, get_le32, get_le32_signed,
        get_le64, get_le64_signed, le16_compare, le16_compare_signed, le24_compare,
        le24_compare_signed, le32_compare, le32_compare_signed, le64_compare,
        le64_compare_signed, set_be16, set_be24, set_be32, set_be64, set_le16, set_le24,
        set_le32, set_le64,
    },
    policy::{ByteOrder, RuntimePolicy, BE_POLICY, LE_POLICY},
    tagged::{TaggedInt, BE16, BE32, BE64, LE16, LE32, LE64},
};

mod sealed {
    pub trait Sealed {}
}

/// A byte order selected by type.
///
/// Implemented only by [`BePolicy`] and [`LePolicy`]. All items are associated functions, so a
/// generic `fn walk<P: EndianPolicy>(..)` compiles to two fully specialized copies with no
/// run-time dispatch. The two implementations are generated from one template and therefore
/// produce bit-identical results for the same byte order.
pub trait EndianPolicy:
    sealed::Sealed + Copy + Default + fmt::Debug + Send + Sync + 'static
{
    /// The byte order this policy selects.
    const ORDER: ByteOrder;
    /// `true` for the big-endian policy.
    const IS_BE: bool;

    /// Tagged 16-bit type in this byte order.
    type U16: TaggedInt<Native = u16, Signed = i32>;
    /// Tagged 32-bit type in this byte order.
    type U32: TaggedInt<Native = u32, Signed = i32>;
    /// Tagged 64-bit type in this byte order.
    type U64: TaggedInt<Native = u64, Signed = i64>;

    /// Reads a 16-bit value.
    fn get16(p: &[u8; 2]) -> u16;
    /// Reads a 24-bit value.
    fn get24(p: &[u8; 3]) -> u32;
    /// Reads a 32-bit value.
    fn get32(p: &[u8; 4]) -> u32;
    /// Reads a 64-bit value.
    fn get64(p: &[u8; 8]) -> u64;

    /// Stores a 16-bit value.
    fn set16(p: &mut [u8; 2], v: u16);
    /// Stores the low 24 bits of `v`.
    fn set24(p: &mut [u8; 3], v: u32);
    /// Stores a 32-bit value.
    fn set32(p: &mut [u8; 4], v: u32);
    /// Stores a 64-bit value.
    fn set64(p: &mut [u8; 8], v: u64);

    /// Reads a sign-extended 16-bit value.
    fn get16_signed(p: &[u8; 2]) -> i32;
    /// Reads a sign-extended 24-bit value.
    fn get24_signed(p: &[u8; 3]) -> i32;
    /// Reads a 32-bit value as signed.
    fn get32_signed(p: &[u8; 4]) -> i32;
    /// Reads a 64-bit value as signed.
    fn get64_signed(p: &[u8; 8]) -> i64;

    /// Orders two raw 16-bit records.
    fn compare16(a: &[u8; 2], b: &[u8; 2]) -> Ordering;
    /// Orders two raw 24-bit records.
    fn compare24(a: &[u8; 3], b: &[u8; 3]) -> Ordering;
    /// Orders two raw 32-bit records.
    fn compare32(a: &[u8; 4], b: &[u8; 4]) -> Ordering;
    /// Orders two raw 64-bit records.
    fn compare64(a: &[u8; 8], b: &[u8; 8]) -> Ordering;
    /// Orders two raw 16-bit records as signed values.
    fn compare16_signed(a: &[u8; 2], b: &[u8; 2]) -> Ordering;
    /// Orders two raw 24-bit records as signed values.
    fn compare24_signed(a: &[u8; 3], b: &[u8; 3]) -> Ordering;
    /// Orders two raw 32-bit records as signed values.
    fn compare32_signed(a: &[u8; 4], b: &[u8; 4]) -> Ordering;
    /// Orders two raw 64-bit records as signed values.
    fn compare64_signed(a: &[u8; 8], b: &[u8; 8]) -> Ordering;

    /// Returns the run-time policy singleton for the same byte order.
    fn runtime() -> &'static dyn RuntimePolicy;
}

/// Selects big-endian access at compile time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BePolicy;

/// Selects little-endian access at compile time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LePolicy;

macro_rules! endian_policy {
    (
        $P:ident, $order:expr, $is_be:literal, $U16:ty, $U32:ty, $U64:ty, $singleton:ident,
        get: [$g16:ident, $g24:ident, $g32:ident, $g64:ident],
        set: [$s16:ident, $s24:ident, $s32:ident, $s64:ident],
        signed: [$gs16:ident, $gs24:ident, $gs32:ident, $gs64:ident],
        compare: [$c16:ident, $c24:ident, $c32:ident, $c64:ident],
        compare_signed: [$cs16:ident, $cs24:ident, $cs32:ident, $cs64:ident]
    ) => {
        impl sealed::Sealed for $P {}

        impl EndianPolicy for $P {
            const ORDER: ByteOrder = $order;
            const IS_BE: bool = $is_be;

            type U16 = $U16;
            type U32 = $U32;
            type U64 = $U64;

            #[inline]
            fn get16(p: &[u8; 2]) -> u16 {
                $g16(p)
            }
            #[inline]
            fn get24(p: &[u8; 3]) -> u32 {
                $g24(p)
            }
            #[inline]
            fn get32(p: &[u8; 4]) -> u32 {
                $g32(p)
            }
            #[inline]
            fn get64(p: &[u8; 8]) -> u64 {
                $g64(p)
            }

            #[inline]
            fn set16(p: &mut [u8; 2], v: u16) {
                $s16(p, v);
            }
            #[inline]
            fn set24(p: &mut [u8; 3], v: u32) {
                $s24(p, v);
            }
            #[inline]
            fn set32(p: &mut [u8; 4], v: u32) {
                $s32(p, v);
            }
            #[inline]
            fn set64(p: &mut [u8; 8], v: u64) {
                $s64(p, v);
            }

            fn get16_signed(p: &[u8; 2]) -> i32 {
                $gs16(p)
            }
            fn get24_signed(p: &[u8; 3]) -> i32 {
                $gs24(p)
            }
            fn get32_signed(p: &[u8; 4]) -> i32 {
                $gs32(p)
            }
            fn get64_signed(p: &[u8; 8]) -> i64 {
                $gs64(p)
            }

            fn compare16(a: &[u8; 2], b: &[u8; 2]) -> Ordering {
                $c16(a, b)
            }
            fn compare24(a: &[u8; 3], b: &[u8; 3]) -> Ordering {
                $c24(a, b)
            }
            fn compare32(a: &[u8; 4], b: &[u8; 4]) -> Ordering {
                $c32(a, b)
            }
            fn compare64(a: &[u8; 8], b: &[u8; 8]) -> Ordering {
                $c64(a, b)
            }
            fn compare16_signed(a: &[u8; 2], b: &[u8; 2]) -> Ordering {
                $cs16(a, b)
            }
            fn compare24_signed(a: &[u8; 3], b: &[u8; 3]) -> Ordering {
                $cs24(a, b)
            }
            fn compare32_signed(a: &[u8; 4], b: &[u8; 4]) -> Ordering {
                $cs32(a, b)
            }
            fn compare64_signed(a: &[u8; 8], b: &[u8; 8]) -> Ordering {
                $cs64(a, b)
            }

            fn runtime() -> &'static dyn RuntimePolicy {
                &$singleton
            }
        }
    };
}

endian_policy!(
    BePolicy, ByteOrder::Big, true, BE16, BE32, BE64, BE_POLICY,
    get: [get_be16, get_be24, get_be32, get_be64],
    set: [set_be16, set_be24, set_be32, set_be64],
    signed: [get_be16_signed, get_be24_signed, get_be32_signed, get_be64_signed],
    compare: [be16_compare, be24_compare, be32_compare, be64_compare],
    compare_signed: [be16_compare_signed, be24_compare_signed, be32_compare_signed, be64_compare_signed]
);

endian_policy!(
    LePolicy, ByteOrder::Little, false, LE16, LE32, LE64, LE_POLICY,
    get: [get_le16, get_le24, get_le32, get_le64],
    set: [set_le16, set_le24, set_le32, set_le64],
    signed: [get_le16_signed, get_le24_signed, get_le32_signed, get_le64_signed],
    compare: [le16_compare, le24_compare, le32_compare, le64_compare],
    compare_signed: [le16_compare_signed, le24_compare_signed, le32_compare_signed, le64_compare_signed]
);
