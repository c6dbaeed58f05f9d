//! The six byte-order tagged integer types.

use std::{
    cmp::Ordering,
    fmt,
    ops::{
        AddAssign, BitAndAssign, BitOrAssign, BitXorAssign, DivAssign, MulAssign, ShlAssign,
        ShrAssign, SubAssign,
    },
};

use bytemuck::{Pod, Zeroable};

use crate::{
    codec::{
        encode_be16, encode_be32, encode_be64, encode_le16, encode_le32, encode_le64, get_be16,
        get_be16_signed, get_be32, get_be32_signed, get_be64, get_be64_signed, get_le16,
        get_le16_signed, get_le32, get_le32_signed, get_le64, get_le64_signed, set_be16,
        set_be32, set_be64, set_le16, set_le32, set_le64,
    },
    policy::ByteOrder,
    tagged::{sealed::Sealed, TaggedInt},
};

/// Generates one tagged integer type together with its conversions and operators.
///
/// For a given `$T` this generates:
/// - the `#[repr(transparent)]` byte-array struct deriving `Pod`/`Zeroable`
/// - `$T::new` (const), `get`, `set`, `get_signed`, `to_bytes`, `from_bytes`
/// - `From<$N> for $T` and `From<$T> for $N`
/// - compound assignment operators routed through decode → operate → encode
/// - value ordering, `Debug`, `Display` and hex formatting of the decoded value
/// - the [`TaggedInt`] implementation
macro_rules! tagged_int {
    (
        $(#[$meta:meta])*
        $T:ident, $N:ty, $S:ty, $bytes:literal, $order:expr,
        $encode:ident, $get:ident, $set:ident, $get_signed:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
        #[repr(transparent)]
        pub struct $T(pub [u8; $bytes]);

        impl $T {
            /// Size of the stored representation in bytes.
            pub const SIZE: usize = $bytes;

            /// Encodes `v`. Usable in `const` contexts.
            #[must_use]
            pub const fn new(v: $N) -> Self {
                Self($encode(v))
            }

            /// Wraps raw bytes that are already in this type's byte order.
            #[must_use]
            pub const fn from_bytes(bytes: [u8; $bytes]) -> Self {
                Self(bytes)
            }

            /// Returns the raw stored bytes.
            #[must_use]
            pub const fn to_bytes(self) -> [u8; $bytes] {
                self.0
            }

            /// Decodes the stored value.
            #[must_use]
            #[inline]
            pub fn get(self) -> $N {
                $get(&self.0)
            }

            /// Encodes `v` into the stored bytes.
            #[inline]
            pub fn set(&mut self, v: $N) {
                $set(&mut self.0, v);
            }

            /// Decodes the stored value and sign-extends it to the signed host width.
            #[must_use]
            #[inline]
            pub fn get_signed(self) -> $S {
                $get_signed(&self.0)
            }

            fn update(&mut self, f: impl FnOnce($N) -> $N) {
                let v = f(self.get());
                self.set(v);
            }
        }

        impl Sealed for $T {}

        impl TaggedInt for $T {
            type Native = $N;
            type Signed = $S;
            const ORDER: ByteOrder = $order;
            const BITS: u32 = $bytes * 8;

            fn get(self) -> $N {
                $T::get(self)
            }

            fn set(&mut self, v: $N) {
                $T::set(self, v);
            }

            fn get_signed(self) -> $S {
                $T::get_signed(self)
            }
        }

        impl From<$N> for $T {
            fn from(v: $N) -> Self {
                let mut x = Self::default();
                x.set(v);
                x
            }
        }

        impl From<$T> for $N {
            fn from(v: $T) -> Self {
                v.get()
            }
        }

        impl From<&$T> for $N {
            fn from(v: &$T) -> Self {
                v.get()
            }
        }

        impl PartialOrd for $T {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $T {
            fn cmp(&self, other: &Self) -> Ordering {
                self.get().cmp(&other.get())
            }
        }

        impl PartialEq<$N> for $T {
            fn eq(&self, other: &$N) -> bool {
                self.get() == *other
            }
        }

        impl fmt::Debug for $T {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({:#x})", stringify!($T), self.get())
            }
        }

        impl fmt::Display for $T {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.get(), f)
            }
        }

        impl fmt::LowerHex for $T {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::LowerHex::fmt(&self.get(), f)
            }
        }

        impl AddAssign<$N> for $T {
            fn add_assign(&mut self, rhs: $N) {
                self.update(|v| v.wrapping_add(rhs));
            }
        }

        impl SubAssign<$N> for $T {
            fn sub_assign(&mut self, rhs: $N) {
                self.update(|v| v.wrapping_sub(rhs));
            }
        }

        impl MulAssign<$N> for $T {
            fn mul_assign(&mut self, rhs: $N) {
                self.update(|v| v.wrapping_mul(rhs));
            }
        }

        /// Panics when `rhs` is zero, like integer division.
        impl DivAssign<$N> for $T {
            fn div_assign(&mut self, rhs: $N) {
                self.update(|v| v / rhs);
            }
        }

        impl BitAndAssign<$N> for $T {
            fn bitand_assign(&mut self, rhs: $N) {
                self.update(|v| v & rhs);
            }
        }

        impl BitOrAssign<$N> for $T {
            fn bitor_assign(&mut self, rhs: $N) {
                self.update(|v| v | rhs);
            }
        }

        impl BitXorAssign<$N> for $T {
            fn bitxor_assign(&mut self, rhs: $N) {
                self.update(|v| v ^ rhs);
            }
        }

        /// Shifting by the full width or more yields zero.
        impl ShlAssign<u32> for $T {
            fn shl_assign(&mut self, rhs: u32) {
                self.update(|v| v.checked_shl(rhs).unwrap_or(0));
            }
        }

        /// Shifting by the full width or more yields zero.
        impl ShrAssign<u32> for $T {
            fn shr_assign(&mut self, rhs: u32) {
                self.update(|v| v.checked_shr(rhs).unwrap_or(0));
            }
        }
    };
}

tagged_int!(
    /// A big-endian `u16` stored as two bytes with alignment 1.
    BE16, u16, i32, 2, ByteOrder::Big, encode_be16, get_be16, set_be16, get_be16_signed
);
tagged_int!(
    /// A big-endian `u32` stored as four bytes with alignment 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endiscope::tagged::BE32;
    ///
    /// let mut v = BE32::new(0x0102_0304);
    /// assert_eq!(v.to_bytes(), [0x01, 0x02, 0x03, 0x04]);
    /// v += 0x10;
    /// assert_eq!(v.get(), 0x0102_0314);
    /// ```
    BE32, u32, i32, 4, ByteOrder::Big, encode_be32, get_be32, set_be32, get_be32_signed
);
tagged_int!(
    /// A big-endian `u64` stored as eight bytes with alignment 1.
    BE64, u64, i64, 8, ByteOrder::Big, encode_be64, get_be64, set_be64, get_be64_signed
);
tagged_int!(
    /// A little-endian `u16` stored as two bytes with alignment 1.
    LE16, u16, i32, 2, ByteOrder::Little, encode_le16, get_le16, set_le16, get_le16_signed
);
tagged_int!(
    /// A little-endian `u32` stored as four bytes with alignment 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endiscope::tagged::LE32;
    ///
    /// let v = LE32::new(0x0102_0304);
    /// assert_eq!(v.to_bytes(), [0x04, 0x03, 0x02, 0x01]);
    /// assert_eq!(u32::from(v), 0x0102_0304);
    /// ```
    LE32, u32, i32, 4, ByteOrder::Little, encode_le32, get_le32, set_le32, get_le32_signed
);
tagged_int!(
    /// A little-endian `u64` stored as eight bytes with alignment 1.
    LE64, u64, i64, 8, ByteOrder::Little, encode_le64, get_le64, set_le64, get_le64_signed
);

// 16-bit fields widen to the host's natural unsigned width
impl From<BE16> for u32 {
    fn from(v: BE16) -> Self {
        u32::from(v.get())
    }
}

impl From<LE16> for u32 {
    fn from(v: LE16) -> Self {
        u32::from(v.get())
    }
}

/// Host-order 16-bit tagged integer.
#[cfg(target_endian = "little")]
pub type NE16 = LE16;
/// Host-order 32-bit tagged integer.
#[cfg(target_endian = "little")]
pub type NE32 = LE32;
/// Host-order 64-bit tagged integer.
#[cfg(target_endian = "little")]
pub type NE64 = LE64;

/// Host-order 16-bit tagged integer.
#[cfg(target_endian = "big")]
pub type NE16 = BE16;
/// Host-order 32-bit tagged integer.
#[cfg(target_endian = "big")]
pub type NE32 = BE32;
/// Host-order 64-bit tagged integer.
#[cfg(target_endian = "big")]
pub type NE64 = BE64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_is_exact_and_unaligned() {
        assert_eq!(std::mem::size_of::<BE16>(), 2);
        assert_eq!(std::mem::size_of::<LE32>(), 4);
        assert_eq!(std::mem::size_of::<BE64>(), 8);
        assert_eq!(std::mem::align_of::<LE64>(), 1);
        assert_eq!(std::mem::align_of::<BE32>(), 1);
    }

    #[test]
    fn default_is_zero_bytes() {
        assert_eq!(LE64::default().to_bytes(), [0; 8]);
        assert_eq!(BE16::default().get(), 0);
    }

    #[test]
    fn byte_layout_of_0x01020304() {
        assert_eq!(BE32::new(0x0102_0304).0, [0x01, 0x02, 0x03, 0x04]);
        assert_eq!(LE32::new(0x0102_0304).0, [0x04, 0x03, 0x02, 0x01]);
        assert_eq!(BE32::from(0x0102_0304).0, [0x01, 0x02, 0x03, 0x04]);
        assert_eq!(LE32::from(0x0102_0304).0, [0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn const_construction() {
        const HDR: [LE16; 2] = [LE16::new(0x5a4d), LE16::new(0x0090)];
        assert_eq!(HDR[0].to_bytes(), *b"MZ");
        assert_eq!(HDR[1].get(), 0x90);
    }

    #[test]
    fn compound_ops_act_on_value() {
        let mut v = BE32::new(10);
        v += 5;
        assert_eq!(v, 15);
        v -= 20;
        assert_eq!(v.get(), u32::MAX - 4);
        v = BE32::new(6);
        v *= 7;
        assert_eq!(v, 42);
        v /= 4;
        assert_eq!(v, 10);
        v &= 0b1100;
        assert_eq!(v, 0b1000);
        v |= 0b0011;
        assert_eq!(v, 0b1011);
        v ^= 0b1111;
        assert_eq!(v, 0b0100);
        v <<= 28;
        assert_eq!(v, 0x4000_0000);
        v >>= 30;
        assert_eq!(v, 1);
        v <<= 32;
        assert_eq!(v, 0);
    }

    #[test]
    fn sixteen_bit_ops_wrap_at_width() {
        let mut v = LE16::new(0xffff);
        v += 1;
        assert_eq!(v.get(), 0);
        v.set(0x8001);
        v <<= 1;
        assert_eq!(v.get(), 0x0002);
        assert_eq!(v.to_bytes(), [0x02, 0x00]);
    }

    #[test]
    fn sixty_four_bit_ops() {
        let mut v = LE64::new(u64::MAX);
        v += 2;
        assert_eq!(v.get(), 1);
        v <<= 63;
        assert_eq!(v.get(), 1 << 63);
        assert_eq!(v.get_signed(), i64::MIN);
    }

    #[test]
    fn equality_is_bytewise_ordering_is_numeric() {
        let a = BE32::new(0x0000_00ff);
        let b = BE32::new(0x0000_0100);
        assert!(a < b);
        assert!(a.0 < b.0);

        let c = LE32::new(0x0000_00ff);
        let d = LE32::new(0x0000_0100);
        assert!(c < d);
        assert!(c.0 > d.0);
        assert_eq!(c, LE32::from_bytes([0xff, 0, 0, 0]));
    }

    #[test]
    fn signed_view() {
        assert_eq!(BE16::new(0xfffe).get_signed(), -2);
        assert_eq!(LE16::new(0x7fff).get_signed(), 0x7fff);
        assert_eq!(LE32::new(0x8000_0000).get_signed(), i32::MIN);
        assert_eq!(BE64::new(u64::MAX).get_signed(), -1);
    }

    #[test]
    fn widening_and_formatting() {
        assert_eq!(u32::from(BE16::new(0xabcd)), 0xabcd);
        assert_eq!(u16::from(&LE16::new(7)), 7);
        assert_eq!(format!("{:?}", BE16::new(0x1f)), "BE16(0x1f)");
        assert_eq!(format!("{}", LE64::new(42)), "42");
        assert_eq!(format!("{:x}", LE32::new(0xbeef)), "beef");
    }

    #[test]
    fn native_alias_matches_host() {
        assert_eq!(NE32::new(0x0102_0304).to_bytes(), 0x0102_0304u32.to_ne_bytes());
        assert_eq!(NE64::new(9).to_bytes(), 9u64.to_ne_bytes());
        assert_eq!(NE16::new(9).to_bytes(), 9u16.to_ne_bytes());
    }

    #[test]
    fn cast_from_unaligned_bytes() {
        let buf = [0u8, 0x12, 0x34, 0x56, 0x78, 0x9a];
        let v: &BE32 = bytemuck::from_bytes(&buf[1..5]);
        assert_eq!(v.get(), 0x1234_5678);
        let pair: &[LE16] = bytemuck::cast_slice(&buf[2..6]);
        assert_eq!(pair[0].get(), 0x5634);
        assert_eq!(pair[1].get(), 0x9a78);
    }
}
