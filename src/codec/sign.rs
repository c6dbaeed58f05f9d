//! Sign extension of narrow two's-complement fields.
//!
//! The default [`sign_extend32`] / [`sign_extend64`] use a left shift followed by an arithmetic
//! right shift. Targets without a barrel shifter (m68k) use the branchless mask-and-subtract
//! formula instead. Both formulas are public so their agreement can be checked on any host.
//!
//! `bits` must lie in `1..=32` (respectively `1..=64`). Other widths are a caller bug and are
//! caught by a debug assertion.

/// Sign-extends the low `bits` bits of `v` using shifts.
#[must_use]
#[inline]
pub const fn sign_extend32_shift(v: u32, bits: u32) -> i32 {
    debug_assert!(bits >= 1 && bits <= 32);
    ((v << (32 - bits)) as i32) >> (32 - bits)
}

/// Sign-extends the low `bits` bits of `v` using a mask and a subtraction.
#[must_use]
#[inline]
pub const fn sign_extend32_masked(v: u32, bits: u32) -> i32 {
    debug_assert!(bits >= 1 && bits <= 32);
    let sign_bit = 1u32 << (bits - 1);
    (v & (sign_bit - 1)).wrapping_sub(v & sign_bit) as i32
}

/// Sign-extends the low `bits` bits of `v` using shifts.
#[must_use]
#[inline]
pub const fn sign_extend64_shift(v: u64, bits: u32) -> i64 {
    debug_assert!(bits >= 1 && bits <= 64);
    ((v << (64 - bits)) as i64) >> (64 - bits)
}

/// Sign-extends the low `bits` bits of `v` using a mask and a subtraction.
#[must_use]
#[inline]
pub const fn sign_extend64_masked(v: u64, bits: u32) -> i64 {
    debug_assert!(bits >= 1 && bits <= 64);
    let sign_bit = 1u64 << (bits - 1);
    (v & (sign_bit - 1)).wrapping_sub(v & sign_bit) as i64
}

/// Treats the low `bits` bits of `v` as a two's-complement number and widens it to `i32`.
///
/// # Examples
///
/// ```rust
/// use endiscope::codec::sign_extend32;
///
/// assert_eq!(sign_extend32(0x3ff_ffff, 26), -1);
/// assert_eq!(sign_extend32(0x1ff_ffff, 26), 0x1ff_ffff);
/// ```
#[must_use]
#[inline]
pub const fn sign_extend32(v: u32, bits: u32) -> i32 {
    if cfg!(target_arch = "m68k") {
        sign_extend32_masked(v, bits)
    } else {
        sign_extend32_shift(v, bits)
    }
}

/// Treats the low `bits` bits of `v` as a two's-complement number and widens it to `i64`.
#[must_use]
#[inline]
pub const fn sign_extend64(v: u64, bits: u32) -> i64 {
    if cfg!(target_arch = "m68k") {
        sign_extend64_masked(v, bits)
    } else {
        sign_extend64_shift(v, bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        assert_eq!(sign_extend32(0x80, 8), -128);
        assert_eq!(sign_extend32(0x7f, 8), 127);
        assert_eq!(sign_extend32(0xffff, 16), -1);
        assert_eq!(sign_extend32(0x1, 1), -1);
        assert_eq!(sign_extend32(0x0, 1), 0);
        assert_eq!(sign_extend32(0x8000_0000, 32), i32::MIN);
        assert_eq!(sign_extend64(0x8000_0000, 32), -0x8000_0000);
        assert_eq!(sign_extend64(u64::MAX, 64), -1);
    }

    #[test]
    fn bits_above_width_are_ignored() {
        assert_eq!(sign_extend32(0xffff_ff01, 8), 1);
        assert_eq!(sign_extend32_masked(0xffff_ff01, 8), 1);
        assert_eq!(sign_extend64(0xffff_0000_0000_0001, 48), 1);
        assert_eq!(sign_extend64_masked(0xffff_0000_0000_0001, 48), 1);
    }

    #[test]
    fn formulas_agree_exhaustively_on_small_widths() {
        for bits in 1..=12 {
            for v in 0..(1u32 << 12) {
                assert_eq!(sign_extend32_shift(v, bits), sign_extend32_masked(v, bits));
                assert_eq!(
                    sign_extend64_shift(u64::from(v), bits),
                    sign_extend64_masked(u64::from(v), bits)
                );
            }
        }
    }

    #[test]
    fn formulas_agree_at_full_width() {
        for v in [0u32, 1, 0x7fff_ffff, 0x8000_0000, u32::MAX] {
            assert_eq!(sign_extend32_shift(v, 32), sign_extend32_masked(v, 32));
        }
        for v in [0u64, 1, i64::MAX as u64, 1 << 63, u64::MAX] {
            assert_eq!(sign_extend64_shift(v, 64), sign_extend64_masked(v, 64));
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn zero_width_is_rejected() {
        let _ = sign_extend32(1, 0);
    }
}
