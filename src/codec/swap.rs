//! Byte-swap primitives and host-to-target conversion helpers.
//!
//! Every call site that converts between the host representation and a fixed target order is
//! written as `ne*_to_be*` / `ne*_to_le*`. On any given host one of the two directions is a real
//! [`bswap32`] and the other one is the matching `no_bswap*`, so generic code never has to branch
//! on the host byte order itself.
//!
//! All functions here operate on plain integers, are `const`, and are total over their input.

/// Reverses the two bytes of the low 16 bits of `v`.
///
/// Bits above bit 15 are ignored, so the result always fits in 16 bits.
#[must_use]
#[inline]
pub const fn bswap16(v: u32) -> u32 {
    (v as u16).swap_bytes() as u32
}

/// Reverses the four bytes of `v`.
#[must_use]
#[inline]
pub const fn bswap32(v: u32) -> u32 {
    v.swap_bytes()
}

/// Reverses the eight bytes of `v`.
#[must_use]
#[inline]
pub const fn bswap64(v: u64) -> u64 {
    v.swap_bytes()
}

/// Identity counterpart of [`bswap16`].
///
/// Masks to 16 bits so that `bswap16(bswap16(v)) == no_bswap16(v)` holds for every `v`.
#[must_use]
#[inline]
pub const fn no_bswap16(v: u32) -> u32 {
    v & 0xffff
}

/// Identity counterpart of [`bswap32`].
#[must_use]
#[inline]
pub const fn no_bswap32(v: u32) -> u32 {
    v
}

/// Identity counterpart of [`bswap64`].
#[must_use]
#[inline]
pub const fn no_bswap64(v: u64) -> u64 {
    v
}

macro_rules! host_conversions {
    ($($name:ident: $ty:ty => $be:ident, $le:ident;)*) => {
        $(
            #[doc = concat!("Converts a host-order value into its `", stringify!($name), "` target representation.")]
            #[must_use]
            #[inline]
            pub const fn $name(v: $ty) -> $ty {
                if cfg!(target_endian = "big") {
                    $be(v)
                } else {
                    $le(v)
                }
            }
        )*
    };
}

host_conversions! {
    ne16_to_be16: u32 => no_bswap16, bswap16;
    ne32_to_be32: u32 => no_bswap32, bswap32;
    ne64_to_be64: u64 => no_bswap64, bswap64;
    ne16_to_le16: u32 => bswap16, no_bswap16;
    ne32_to_le32: u32 => bswap32, no_bswap32;
    ne64_to_le64: u64 => bswap64, no_bswap64;
}
