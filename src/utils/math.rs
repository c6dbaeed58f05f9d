//! Alignment arithmetic for file offsets and virtual addresses.

/// Rounding helpers for unsigned offsets.
///
/// Implemented for `u32`, `u64` and `usize`. The alignment is normally a power of two, but the
/// helpers use division and stay correct for any non-zero alignment. Tagged values are aligned
/// through their decoded value, e.g. `hdr.file_align.get()`.
///
/// # Examples
///
/// ```rust
/// use endiscope::utils::Align;
///
/// assert_eq!(0x1234u32.align_up(0x200), 0x1400);
/// assert_eq!(0x1234u32.align_down(0x200), 0x1200);
/// assert_eq!(0x1234u32.align_gap(0x200), 0x1cc);
/// assert!(0x200u32.has_single_bit());
/// ```
pub trait Align: Copy {
    /// Rounds down to a multiple of `alignment`.
    #[must_use]
    fn align_down(self, alignment: Self) -> Self;

    /// Rounds up to a multiple of `alignment`. Wraps around on overflow.
    #[must_use]
    fn align_up(self, alignment: Self) -> Self;

    /// Number of bytes needed to reach the next multiple of `alignment`.
    #[must_use]
    fn align_gap(self, alignment: Self) -> Self;

    /// Returns `true` if exactly one bit is set.
    #[must_use]
    fn has_single_bit(self) -> bool;
}

macro_rules! impl_align {
    ($($ty:ty),*) => {
        $(
            impl Align for $ty {
                fn align_down(self, alignment: Self) -> Self {
                    (self / alignment) * alignment
                }

                fn align_up(self, alignment: Self) -> Self {
                    (self.wrapping_add(alignment - 1) / alignment).wrapping_mul(alignment)
                }

                fn align_gap(self, alignment: Self) -> Self {
                    self.align_up(alignment).wrapping_sub(self)
                }

                fn has_single_bit(self) -> bool {
                    self != 0 && (self & (self - 1)) == 0
                }
            }
        )*
    };
}

impl_align!(u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_down_up_gap() {
        assert_eq!(0u32.align_up(4), 0);
        assert_eq!(1u32.align_up(4), 4);
        assert_eq!(4u32.align_up(4), 4);
        assert_eq!(5u64.align_down(4), 4);
        assert_eq!(7usize.align_gap(8), 1);
        assert_eq!(8usize.align_gap(8), 0);
        assert_eq!(0x1001u64.align_up(0x1000), 0x2000);
    }

    #[test]
    fn non_power_of_two_alignment() {
        assert_eq!(10u32.align_up(3), 12);
        assert_eq!(10u32.align_down(3), 9);
        assert_eq!(10u32.align_gap(3), 2);
    }

    #[test]
    fn single_bit() {
        assert!(!0u32.has_single_bit());
        assert!(1u32.has_single_bit());
        assert!((1u64 << 63).has_single_bit());
        assert!(!3usize.has_single_bit());
        assert!(!0x1100u32.has_single_bit());
    }

    #[test]
    fn tagged_values_through_get() {
        let raw_size = crate::tagged::LE32::new(0x3ff);
        assert_eq!(raw_size.get().align_up(0x200), 0x400);
    }
}
