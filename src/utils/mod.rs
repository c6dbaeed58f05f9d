//! Small supporting types used by the access layer and its callers.
//!
//! # Key Components
//!
//! - [`TriBool`] - a boolean with a third, "undecided" state
//! - [`BoundedSetting`] - a range-checked optional integer for layered configuration
//! - [`ReleaseGuard`] - scope-bound release of a table of owned pointers
//! - [`atomic_exchange`] - pointer-sized swap returning the previous value
//! - [`Align`] - alignment arithmetic

mod atomic;
mod math;
mod release;
mod setting;
mod tribool;

pub use atomic::{atomic_exchange, AtomicWord};
pub use math::Align;
pub use release::{
    ArrayRelease, ObjectRelease, RawAlloc, RawRelease, Release, ReleaseGuard,
};
pub use setting::BoundedSetting;
pub use tribool::{TriBool, TriRepr, TriState, Tribool};
