//! Bounded optional settings for layered configuration.
//!
//! A [`BoundedSetting`] carries a value in a closed range `[MIN, MAX]`, a default, and a flag
//! recording whether the value was set explicitly. Layers of configuration (built-in defaults, a
//! configuration file, the command line) are folded together with [`BoundedSetting::assign_from`],
//! which only copies values the source layer actually specified.
//!
//! # Examples
//!
//! ```rust
//! use endiscope::utils::BoundedSetting;
//!
//! type Level = BoundedSetting<6, 1, 9>;
//!
//! let mut effective = Level::new();
//! let mut from_file = Level::new();
//! let from_cli = Level::new();
//!
//! from_file.set(9);
//! effective.assign_from(&from_file);
//! effective.assign_from(&from_cli); // unset, nothing changes
//! assert_eq!(effective.get(), 9);
//! assert!(effective.is_set());
//!
//! assert!(Level::new().try_set(12).is_err());
//! ```

use std::fmt;

use crate::{Error, Result};

/// An integer setting restricted to `[MIN, MAX]` with a default of `DEFAULT`.
///
/// The range is checked when the type is first used: a declaration with
/// `MIN <= DEFAULT <= MAX` violated fails to compile.
///
/// ```rust,compile_fail
/// use endiscope::utils::BoundedSetting;
///
/// let _ = BoundedSetting::<10, 0, 5>::new();
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundedSetting<const D: u32, const LO: u32, const HI: u32> {
    value: u32,
    is_set: bool,
}

impl<const D: u32, const LO: u32, const HI: u32> BoundedSetting<D, LO, HI> {
    /// Default value.
    pub const DEFAULT: u32 = D;
    /// Smallest accepted value.
    pub const MIN: u32 = LO;
    /// Largest accepted value.
    pub const MAX: u32 = HI;

    const VALID_RANGE: () = assert!(
        LO <= D && D <= HI,
        "bounded setting requires MIN <= DEFAULT <= MAX"
    );

    /// Creates an unset setting holding the default value.
    #[must_use]
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_RANGE;
        Self {
            value: D,
            is_set: false,
        }
    }

    /// Returns `true` if `value` lies in `[MIN, MAX]`.
    #[must_use]
    pub const fn in_range(value: u32) -> bool {
        LO <= value && value <= HI
    }

    /// Returns the current value (the default while unset).
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.value
    }

    /// Returns `true` once a value has been assigned explicitly.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.is_set
    }

    /// Assigns `value` and marks the setting as set.
    ///
    /// # Panics
    ///
    /// Panics if `value` is outside `[MIN, MAX]`. The value is never clamped.
    pub fn set(&mut self, value: u32) {
        assert!(
            Self::in_range(value),
            "setting value {} is outside of [{}, {}]",
            value,
            LO,
            HI
        );
        self.value = value;
        self.is_set = true;
    }

    /// Assigns `value` if it is in range.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::SettingOutOfRange`] and leaves the setting untouched if `value` is
    /// outside `[MIN, MAX]`.
    pub fn try_set(&mut self, value: u32) -> Result<()> {
        if !Self::in_range(value) {
            return Err(Error::SettingOutOfRange {
                value,
                min: LO,
                max: HI,
            });
        }
        self.value = value;
        self.is_set = true;
        Ok(())
    }

    /// Asserts that the stored value is in range.
    ///
    /// # Panics
    ///
    /// Panics if the invariant was broken.
    pub fn assert_valid(&self) {
        assert!(Self::in_range(self.value));
    }

    /// Returns to the unset state with the default value.
    pub fn reset(&mut self) {
        self.value = D;
        self.is_set = false;
    }

    /// Copies value and set-flag from `other` if `other` is set; otherwise does nothing.
    ///
    /// Returns `true` if a value was copied.
    pub fn assign_from(&mut self, other: &Self) -> bool {
        if !other.is_set {
            return false;
        }
        self.value = other.value;
        self.is_set = true;
        true
    }

    /// Writes the value into `target` if this setting is set; otherwise does nothing.
    ///
    /// Returns `true` if `target` was written.
    pub fn assign_into(&self, target: &mut u32) -> bool {
        if !self.is_set {
            return false;
        }
        *target = self.value;
        true
    }
}

impl<const D: u32, const LO: u32, const HI: u32> Default
    for BoundedSetting<D, LO, HI>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<const D: u32, const LO: u32, const HI: u32> From<BoundedSetting<D, LO, HI>>
    for u32
{
    fn from(s: BoundedSetting<D, LO, HI>) -> Self {
        s.value
    }
}

impl<const D: u32, const LO: u32, const HI: u32> fmt::Debug
    for BoundedSetting<D, LO, HI>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_set { "set" } else { "default" };
        write!(f, "{} ({}, [{}, {}])", self.value, state, LO, HI)
    }
}

impl<const D: u32, const LO: u32, const HI: u32> fmt::Display
    for BoundedSetting<D, LO, HI>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type PosBits = BoundedSetting<2, 0, 4>;

    #[test]
    fn starts_unset_with_default() {
        let s = PosBits::new();
        assert_eq!(s.get(), 2);
        assert!(!s.is_set());
        assert_eq!(PosBits::default(), s);
        assert_eq!((PosBits::MIN, PosBits::DEFAULT, PosBits::MAX), (0, 2, 4));
    }

    #[test]
    fn set_and_reset() {
        let mut s = PosBits::new();
        s.set(4);
        assert_eq!(s.get(), 4);
        assert!(s.is_set());
        s.set(0);
        assert_eq!(u32::from(s), 0);
        s.assert_valid();
        s.reset();
        assert_eq!(s.get(), 2);
        assert!(!s.is_set());
    }

    #[test]
    #[should_panic(expected = "outside of [0, 4]")]
    fn set_out_of_range_is_fatal() {
        let mut s = PosBits::new();
        s.set(5);
    }

    #[test]
    fn try_set_reports_range() {
        let mut s = PosBits::new();
        match s.try_set(7) {
            Err(Error::SettingOutOfRange { value, min, max }) => {
                assert_eq!((value, min, max), (7, 0, 4));
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(!s.is_set());
        assert_eq!(s.get(), 2);
        s.try_set(3).unwrap();
        assert_eq!(s.get(), 3);
    }

    #[test]
    fn optional_assign_between_settings() {
        let mut dst = PosBits::new();
        dst.set(1);
        let unset = PosBits::new();
        assert!(!dst.assign_from(&unset));
        assert_eq!(dst.get(), 1);
        assert!(dst.is_set());

        let mut src = PosBits::new();
        src.set(3);
        let mut fresh = PosBits::new();
        assert!(fresh.assign_from(&src));
        assert_eq!(fresh.get(), 3);
        assert!(fresh.is_set());
    }

    #[test]
    fn optional_assign_into_plain_value() {
        let mut plain = 77u32;
        assert!(!PosBits::new().assign_into(&mut plain));
        assert_eq!(plain, 77);

        let mut s = PosBits::new();
        s.set(1);
        assert!(s.assign_into(&mut plain));
        assert_eq!(plain, 1);
    }

    #[test]
    fn full_u32_range() {
        let mut s = BoundedSetting::<0, 0, { u32::MAX }>::new();
        s.set(u32::MAX);
        assert_eq!(s.get(), u32::MAX);
        assert_eq!(format!("{s:?}"), format!("{} (set, [0, {}])", u32::MAX, u32::MAX));
        assert_eq!(s.to_string(), u32::MAX.to_string());
    }
}
