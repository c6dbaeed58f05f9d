//! Three-state boolean.

use std::{fmt, hash::Hash};

/// The three states of a [`TriBool`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TriState {
    /// Definitely false.
    #[default]
    False = 0,
    /// Definitely true.
    True = 1,
    /// Unknown, inapplicable, or "let the format decide".
    Third = 2,
}

mod sealed {
    pub trait Sealed {}
}

/// Integer types that can store a [`TriBool`].
///
/// Implemented for the 8, 16, 32 and 64 bit signed and unsigned integers. The stored values are
/// `0`, `1` and `2`, so a `TriBool` can sit in a foreign structure in place of a flag field of
/// the same width.
pub trait TriRepr: sealed::Sealed + Copy + Eq + Hash + Default + fmt::Debug {
    /// Stored value of [`TriState::False`].
    const FALSE: Self;
    /// Stored value of [`TriState::True`].
    const TRUE: Self;
    /// Stored value of [`TriState::Third`].
    const THIRD: Self;
}

macro_rules! tri_repr {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl TriRepr for $ty {
                const FALSE: Self = 0;
                const TRUE: Self = 1;
                const THIRD: Self = 2;
            }
        )*
    };
}

tri_repr!(u8, i8, u16, i16, u32, i32, u64, i64);

/// A boolean with a third state.
///
/// Construction from a raw integer is permissive: `0` becomes [`TriState::False`], `1` becomes
/// [`TriState::True`] and every other value becomes [`TriState::Third`]. The original integer is
/// not preserved.
///
/// `THIRD_TRUE` decides how the third state behaves in plain boolean context: with `false` (the
/// default) only `True` converts to `true`, with `true` everything except `False` does. The
/// `is_strict_*` and [`TriBool::is_third`] queries ignore the flag.
///
/// `I` is the integer the state is stored in, `u8` unless chosen otherwise.
///
/// # Examples
///
/// ```rust
/// use endiscope::utils::{TriBool, TriState, Tribool};
///
/// let strip = Tribool::from_raw(-1);
/// assert!(strip.is_third());
/// assert!(!strip.to_bool());
///
/// let lenient = TriBool::<true>::from_raw(2);
/// assert!(lenient.to_bool());
/// assert_eq!(lenient.value(), TriState::Third);
///
/// let wide = TriBool::<false, i32>::from(TriState::True);
/// assert_eq!(wide.raw(), 1i32);
/// assert_eq!(std::mem::size_of_val(&wide), 4);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct TriBool<const THIRD_TRUE: bool = false, I: TriRepr = u8> {
    value: I,
}

/// The common flavour where the third state is falsy.
pub type Tribool = TriBool<false>;

impl<const THIRD_TRUE: bool, I: TriRepr> TriBool<THIRD_TRUE, I> {
    /// Whether the third state converts to `true`.
    pub const IS_THIRD_TRUE: bool = THIRD_TRUE;

    /// Wraps an explicit state.
    #[must_use]
    pub const fn new(state: TriState) -> Self {
        let value = match state {
            TriState::False => I::FALSE,
            TriState::True => I::TRUE,
            TriState::Third => I::THIRD,
        };
        Self { value }
    }

    /// Maps `0` to false, `1` to true and anything else to the third state.
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        Self::new(match raw {
            0 => TriState::False,
            1 => TriState::True,
            _ => TriState::Third,
        })
    }

    /// Returns the underlying state.
    #[must_use]
    pub fn value(self) -> TriState {
        if self.value == I::FALSE {
            TriState::False
        } else if self.value == I::TRUE {
            TriState::True
        } else {
            TriState::Third
        }
    }

    /// Returns the stored integer: `0`, `1` or `2`.
    #[must_use]
    pub const fn raw(self) -> I {
        self.value
    }

    /// Converts to a plain boolean, honouring `THIRD_TRUE`.
    #[must_use]
    pub fn to_bool(self) -> bool {
        if THIRD_TRUE {
            self.value() != TriState::False
        } else {
            self.value() == TriState::True
        }
    }

    /// Returns `true` only for the false state.
    #[must_use]
    pub fn is_strict_false(self) -> bool {
        self.value() == TriState::False
    }

    /// Returns `true` only for the true state.
    #[must_use]
    pub fn is_strict_true(self) -> bool {
        self.value() == TriState::True
    }

    /// Returns `true` for both definite states.
    #[must_use]
    pub fn is_strict_bool(self) -> bool {
        !self.is_third()
    }

    /// Returns `true` for the third state.
    #[must_use]
    pub fn is_third(self) -> bool {
        self.value() == TriState::Third
    }

    /// Compares against a raw integer after the same permissive mapping as [`TriBool::from_raw`].
    #[must_use]
    pub fn eq_raw(self, raw: i64) -> bool {
        self.value() == Self::from_raw(raw).value()
    }
}

impl<const THIRD_TRUE: bool, I: TriRepr> From<bool> for TriBool<THIRD_TRUE, I> {
    fn from(b: bool) -> Self {
        Self::new(if b { TriState::True } else { TriState::False })
    }
}

impl<const THIRD_TRUE: bool, I: TriRepr> From<TriState> for TriBool<THIRD_TRUE, I> {
    fn from(state: TriState) -> Self {
        Self::new(state)
    }
}

impl<const THIRD_TRUE: bool, I: TriRepr> From<i32> for TriBool<THIRD_TRUE, I> {
    fn from(raw: i32) -> Self {
        Self::from_raw(i64::from(raw))
    }
}

impl<const THIRD_TRUE: bool, I: TriRepr> From<TriBool<THIRD_TRUE, I>> for bool {
    fn from(t: TriBool<THIRD_TRUE, I>) -> Self {
        t.to_bool()
    }
}

impl<const THIRD_TRUE: bool, I: TriRepr> PartialEq<TriState> for TriBool<THIRD_TRUE, I> {
    fn eq(&self, other: &TriState) -> bool {
        self.value() == *other
    }
}

impl<const THIRD_TRUE: bool, I: TriRepr> fmt::Debug for TriBool<THIRD_TRUE, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TriBool<{THIRD_TRUE}>({:?})", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permissive_construction() {
        assert_eq!(Tribool::from_raw(0), TriState::False);
        assert_eq!(Tribool::from_raw(1), TriState::True);
        assert_eq!(Tribool::from_raw(2), TriState::Third);
        assert_eq!(Tribool::from_raw(99), TriState::Third);
        assert_eq!(Tribool::from_raw(-1), TriState::Third);
        assert_eq!(Tribool::from(8), Tribool::from(9));
        assert_eq!(Tribool::default(), TriState::False);
    }

    #[test]
    fn bool_conversion_third_false() {
        assert!(!Tribool::from(false).to_bool());
        assert!(Tribool::from(true).to_bool());
        assert!(!Tribool::from_raw(2).to_bool());
        assert!(!bool::from(Tribool::from_raw(5)));
        assert!(!Tribool::IS_THIRD_TRUE);
    }

    #[test]
    fn bool_conversion_third_true() {
        type T = TriBool<true>;
        assert!(!T::from(false).to_bool());
        assert!(T::from(true).to_bool());
        assert!(T::from_raw(2).to_bool());
        assert!(T::IS_THIRD_TRUE);
    }

    #[test]
    fn strict_queries_ignore_flag() {
        let t = TriBool::<true>::from_raw(7);
        assert!(t.to_bool());
        assert!(t.is_third());
        assert!(!t.is_strict_bool());
        assert!(!t.is_strict_true());
        assert!(!t.is_strict_false());

        let f = Tribool::from(false);
        assert!(f.is_strict_false() && f.is_strict_bool() && !f.is_third());
        let t = Tribool::from(true);
        assert!(t.is_strict_true() && t.is_strict_bool());
    }

    #[test]
    fn chosen_storage_width() {
        use std::mem::size_of;

        assert_eq!(size_of::<TriBool<false, u8>>(), 1);
        assert_eq!(size_of::<TriBool<false, i16>>(), 2);
        assert_eq!(size_of::<TriBool<true, u32>>(), 4);
        assert_eq!(size_of::<TriBool<false, i64>>(), 8);
        assert_eq!(size_of::<Tribool>(), 1);

        assert_eq!(TriBool::<false, u16>::from_raw(9), TriBool::<false, u16>::from_raw(8));
        assert_ne!(TriBool::<false, i64>::from_raw(9), TriBool::<false, i64>::from_raw(1));
        assert_eq!(TriBool::<false, u64>::from_raw(-3).raw(), 2);
        assert_eq!(TriBool::<true, i8>::from(true).raw(), 1);
        assert!(TriBool::<true, i32>::from_raw(42).to_bool());
        assert!(!TriBool::<false, u32>::from_raw(42).to_bool());
        assert_eq!(TriBool::<false, i16>::default(), TriState::False);
    }

    #[test]
    fn raw_equality() {
        let third = Tribool::from_raw(3);
        assert!(third.eq_raw(2));
        assert!(third.eq_raw(-7));
        assert!(!third.eq_raw(1));
        assert!(Tribool::from(true).eq_raw(1));
        assert_eq!(format!("{third:?}"), "TriBool<false>(Third)");
    }
}
