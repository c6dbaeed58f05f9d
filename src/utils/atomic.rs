//! Pointer-sized exchange used when releasing owned slots.
//!
//! With the `threads` feature (on by default) the exchange is a sequentially consistent hardware
//! swap. Without it, it is a plain read followed by a write. A single-threaded caller cannot tell
//! the two apart.

#[cfg(all(feature = "threads", target_has_atomic = "ptr"))]
use std::sync::atomic::{AtomicPtr, AtomicUsize, Ordering};

mod sealed {
    pub trait Sealed {}
}

/// A pointer-sized value that [`atomic_exchange`] can swap.
///
/// Implemented for `usize`, `isize` and `*mut T`.
pub trait AtomicWord: sealed::Sealed + Copy {
    /// Stores `new` in `slot` and returns the previous content.
    fn exchange(slot: &mut Self, new: Self) -> Self;
}

/// Stores `new` in `slot` and returns what `slot` held before.
///
/// # Examples
///
/// ```rust
/// use endiscope::utils::atomic_exchange;
///
/// let mut word = 10usize;
/// let old = atomic_exchange(&mut word, 20);
/// assert_eq!((old, word), (10, 20));
/// ```
#[inline]
pub fn atomic_exchange<T: AtomicWord>(slot: &mut T, new: T) -> T {
    T::exchange(slot, new)
}

impl sealed::Sealed for usize {}
impl sealed::Sealed for isize {}
impl<T> sealed::Sealed for *mut T {}

#[cfg(all(feature = "threads", target_has_atomic = "ptr"))]
fn is_word_aligned<T>(slot: *mut T) -> bool {
    (slot as usize) % std::mem::align_of::<AtomicUsize>() == 0
}

#[cfg(all(feature = "threads", target_has_atomic = "ptr"))]
impl AtomicWord for usize {
    fn exchange(slot: &mut Self, new: Self) -> Self {
        let ptr: *mut usize = slot;
        if !is_word_aligned(ptr) {
            return std::mem::replace(slot, new);
        }
        // SAFETY: `ptr` comes from a unique reference that outlives this call and is aligned for
        // `AtomicUsize`, which has the same size and bit validity as `usize`.
        let atomic = unsafe { AtomicUsize::from_ptr(ptr) };
        atomic.swap(new, Ordering::SeqCst)
    }
}

#[cfg(all(feature = "threads", target_has_atomic = "ptr"))]
impl AtomicWord for isize {
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
    fn exchange(slot: &mut Self, new: Self) -> Self {
        let mut bits = *slot as usize;
        let old = usize::exchange(&mut bits, new as usize);
        *slot = bits as isize;
        old as isize
    }
}

#[cfg(all(feature = "threads", target_has_atomic = "ptr"))]
impl<T> AtomicWord for *mut T {
    fn exchange(slot: &mut Self, new: Self) -> Self {
        let ptr: *mut *mut T = slot;
        if !is_word_aligned(ptr) {
            return std::mem::replace(slot, new);
        }
        // SAFETY: as above; `AtomicPtr<T>` has the same size and bit validity as `*mut T`.
        let atomic = unsafe { AtomicPtr::from_ptr(ptr) };
        atomic.swap(new, Ordering::SeqCst)
    }
}

#[cfg(not(all(feature = "threads", target_has_atomic = "ptr")))]
impl AtomicWord for usize {
    fn exchange(slot: &mut Self, new: Self) -> Self {
        std::mem::replace(slot, new)
    }
}

#[cfg(not(all(feature = "threads", target_has_atomic = "ptr")))]
impl AtomicWord for isize {
    fn exchange(slot: &mut Self, new: Self) -> Self {
        std::mem::replace(slot, new)
    }
}

#[cfg(not(all(feature = "threads", target_has_atomic = "ptr")))]
impl<T> AtomicWord for *mut T {
    fn exchange(slot: &mut Self, new: Self) -> Self {
        std::mem::replace(slot, new)
    }
}
