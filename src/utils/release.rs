//! Scope-bound release of a caller-owned table of pointers.
//!
//! Unpackers frequently build a fixed table of heap objects one by one (section buffers,
//! relocation arrays, decompression scratch space) and must free whatever was built so far if a
//! later step fails. A [`ReleaseGuard`] wraps such a table: every successfully acquired pointer is
//! pushed into the next slot, and when the guard goes out of scope, including during unwinding,
//! slots `[0, count)` are released in order.
//!
//! Each slot is swapped to null with [`atomic_exchange`] before its previous content is released,
//! so every released slot can be observed as null afterwards and no pointer is released twice.
//! The guard is meant for one logical thread of control; it is not a concurrent container.
//!
//! The release operation is chosen by a strategy type:
//!
//! | Strategy            | Slot owns                 | Release            |
//! |---------------------|---------------------------|--------------------|
//! | [`ObjectRelease`]   | `Box<T>`                  | drop the box       |
//! | [`ArrayRelease`]    | `Box<[T]>`                | drop every element |
//! | [`RawRelease`]      | [`RawAlloc<T>`]           | deallocate only    |
//!
//! # Examples
//!
//! ```rust
//! use std::ptr;
//! use endiscope::utils::{ObjectRelease, ReleaseGuard};
//!
//! let mut slots = [ptr::null_mut::<Vec<u8>>(); 4];
//! {
//!     let mut guard = ReleaseGuard::<Vec<u8>, ObjectRelease>::new(&mut slots);
//!     guard.push(Box::new(vec![1, 2, 3]));
//!     guard.push(Box::new(vec![4, 5]));
//!     assert_eq!(guard.count(), 2);
//!     assert_eq!(guard.get(1), Some(&vec![4, 5]));
//! }
//! assert!(slots.iter().all(|p| p.is_null()));
//! ```

use std::{
    alloc::{self, Layout},
    marker::PhantomData,
    mem::ManuallyDrop,
    ptr::{self, NonNull},
    slice,
};

use log::trace;

use crate::{utils::atomic_exchange, Result};

/// How the content of a slot is produced and released.
pub trait Release<T> {
    /// The owning handle that is turned into a slot pointer.
    type Owned;
    /// Short name used in log output.
    const KIND: &'static str;

    /// Gives up ownership of `owned` and returns the pointer to store in a slot.
    fn into_raw(owned: Self::Owned) -> *mut T;

    /// Releases a pointer previously returned by [`Release::into_raw`].
    ///
    /// # Safety
    ///
    /// `ptr` must come from `Self::into_raw` and must not have been released before.
    unsafe fn release(ptr: *mut T);

    /// Borrows the first object behind a slot pointer, if there is one.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or come from `Self::into_raw` without having been released, and the
    /// object must stay alive for `'a`.
    unsafe fn first<'a>(ptr: *mut T) -> Option<&'a T>
    where
        T: 'a,
    {
        // SAFETY: guaranteed by the caller.
        unsafe { ptr.as_ref() }
    }
}

/// Releases single boxed objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectRelease;

/// Releases boxed slices of any length.
///
/// The element count is kept in a small header allocated in front of the elements, so a slot
/// holds a plain pointer to the first element and the arrays of one guard may differ in length.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayRelease;

/// Frees raw allocations without running destructors.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawRelease;

impl<T> Release<T> for ObjectRelease {
    type Owned = Box<T>;
    const KIND: &'static str = "object";

    fn into_raw(owned: Box<T>) -> *mut T {
        Box::into_raw(owned)
    }

    unsafe fn release(ptr: *mut T) {
        // SAFETY: guaranteed by the caller, `ptr` came from `Box::into_raw`.
        drop(unsafe { Box::from_raw(ptr) });
    }
}

impl ArrayRelease {
    /// Layout of a header carrying `len` followed by `len` elements, and the element offset.
    ///
    /// The offset only depends on the alignment of `T`, never on `len`.
    fn layout<T>(len: usize) -> (Layout, usize) {
        match Layout::array::<T>(len).and_then(|items| Layout::new::<usize>().extend(items)) {
            Ok((layout, offset)) => (layout.pad_to_align(), offset),
            Err(_) => panic!("array of {len} elements is too large for a release slot"),
        }
    }

    /// Reads the element count stored in front of `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must come from the [`Release::into_raw`] of this strategy and must not have been released.
    unsafe fn len_of<T>(ptr: *mut T) -> usize {
        let (_, offset) = Self::layout::<T>(0);
        // SAFETY: the header sits `offset` bytes before the first element of the same allocation.
        unsafe { ptr.cast::<u8>().sub(offset).cast::<usize>().read() }
    }
}

impl<T> Release<T> for ArrayRelease {
    type Owned = Box<[T]>;
    const KIND: &'static str = "array";

    fn into_raw(owned: Box<[T]>) -> *mut T {
        let mut items = owned.into_vec();
        let len = items.len();
        let (layout, offset) = Self::layout::<T>(len);
        // SAFETY: `layout` contains the header and therefore has a non-zero size.
        let base = unsafe { alloc::alloc(layout) };
        if base.is_null() {
            alloc::handle_alloc_error(layout);
        }
        // SAFETY: `base` is aligned for both `usize` and `T`; the elements are moved exactly once
        // and `items` forgets them before freeing its buffer.
        unsafe {
            base.cast::<usize>().write(len);
            let first = base.add(offset).cast::<T>();
            ptr::copy_nonoverlapping(items.as_ptr(), first, len);
            items.set_len(0);
            first
        }
    }

    unsafe fn first<'a>(ptr: *mut T) -> Option<&'a T>
    where
        T: 'a,
    {
        // SAFETY: guaranteed by the caller; empty arrays have no element to borrow.
        unsafe {
            if ptr.is_null() || Self::len_of(ptr) == 0 {
                return None;
            }
            ptr.as_ref()
        }
    }

    unsafe fn release(ptr: *mut T) {
        // SAFETY: guaranteed by the caller, `ptr` came from `ArrayRelease::into_raw`, so the
        // header in front of it holds the element count of this allocation.
        unsafe {
            let len = Self::len_of(ptr);
            let (layout, offset) = Self::layout::<T>(len);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr, len));
            alloc::dealloc(ptr.cast::<u8>().sub(offset), layout);
        }
    }
}

impl<T: Copy> Release<T> for RawRelease {
    type Owned = RawAlloc<T>;
    const KIND: &'static str = "raw";

    fn into_raw(owned: RawAlloc<T>) -> *mut T {
        ManuallyDrop::new(owned).ptr.as_ptr()
    }

    unsafe fn release(ptr: *mut T) {
        // SAFETY: guaranteed by the caller, `ptr` was allocated by `RawAlloc::new`.
        unsafe { RawAlloc::free(ptr) };
    }
}

/// A plain-data value in its own heap allocation, obtained directly from the global allocator.
///
/// The counterpart of a `malloc`ed block: releasing it frees the memory and runs no destructor,
/// which is why `T` must be `Copy`.
pub struct RawAlloc<T: Copy> {
    ptr: NonNull<T>,
}

impl<T: Copy> RawAlloc<T> {
    /// Allocates room for a `T` and moves `value` into it.
    #[must_use]
    pub fn new(value: T) -> Self {
        let layout = Layout::new::<T>();
        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            // SAFETY: `layout` has a non-zero size.
            let raw = unsafe { alloc::alloc(layout) }.cast::<T>();
            match NonNull::new(raw) {
                Some(ptr) => ptr,
                None => alloc::handle_alloc_error(layout),
            }
        };
        // SAFETY: `ptr` is valid for writes and properly aligned for `T`.
        unsafe { ptr.as_ptr().write(value) };
        Self { ptr }
    }

    /// Returns the stored value.
    #[must_use]
    pub fn get(&self) -> T {
        // SAFETY: `ptr` was initialized in `new` and is owned by `self`.
        unsafe { self.ptr.as_ptr().read() }
    }

    /// Frees an allocation made by [`RawAlloc::new`].
    ///
    /// # Safety
    ///
    /// `ptr` must come from `RawAlloc::new` and must not have been freed before.
    unsafe fn free(ptr: *mut T) {
        let layout = Layout::new::<T>();
        if layout.size() != 0 {
            // SAFETY: guaranteed by the caller; the layout matches the allocation.
            unsafe { alloc::dealloc(ptr.cast::<u8>(), layout) };
        }
    }
}

impl<T: Copy> Drop for RawAlloc<T> {
    fn drop(&mut self) {
        // SAFETY: `self` still owns the allocation.
        unsafe { Self::free(self.ptr.as_ptr()) };
    }
}

/// Releases slots `[0, count)` of a pointer table when dropped.
///
/// The guard does not allocate. The slot table and its length are owned by the caller; the guard
/// borrows it for its whole lifetime and counts how many leading slots it owns.
pub struct ReleaseGuard<'a, T, R: Release<T>> {
    slots: &'a mut [*mut T],
    count: usize,
    _strategy: PhantomData<R>,
}

impl<'a, T, R: Release<T>> ReleaseGuard<'a, T, R> {
    /// Creates a guard owning no slots yet.
    ///
    /// Existing slot contents are ignored and overwritten by [`ReleaseGuard::push`].
    pub fn new(slots: &'a mut [*mut T]) -> Self {
        Self {
            slots,
            count: 0,
            _strategy: PhantomData,
        }
    }

    /// Creates a guard that takes ownership of the first `count` slots as they are.
    ///
    /// Null slots in that range are skipped on release.
    ///
    /// # Safety
    ///
    /// Every non-null pointer in `slots[..count]` must come from `R::into_raw` and must not be
    /// owned by anything else.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds the number of slots.
    pub unsafe fn adopt(slots: &'a mut [*mut T], count: usize) -> Self {
        assert!(count <= slots.len(), "release guard count exceeds slot table");
        Self {
            slots,
            count,
            _strategy: PhantomData,
        }
    }

    /// Number of slots currently owned by the guard.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Total number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Stores `owned` in the next slot and returns its index.
    ///
    /// # Panics
    ///
    /// Panics if every slot is already in use.
    pub fn push(&mut self, owned: R::Owned) -> usize {
        assert!(
            self.count < self.slots.len(),
            "release guard is full ({} slots)",
            self.slots.len()
        );
        self.store(owned)
    }

    /// Stores `owned` in the next slot and returns its index.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Malformed`] if every slot is already in use; `owned` is dropped.
    pub fn try_push(&mut self, owned: R::Owned) -> Result<usize> {
        if self.count >= self.slots.len() {
            return Err(malformed_error!(
                "release guard is full ({} slots)",
                self.slots.len()
            ));
        }
        Ok(self.store(owned))
    }

    fn store(&mut self, owned: R::Owned) -> usize {
        let index = self.count;
        self.slots[index] = R::into_raw(owned);
        self.count += 1;
        index
    }

    /// Returns a reference to the object in slot `index`, if owned and non-null.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.count {
            return None;
        }
        // SAFETY: owned slots hold either null or a live pointer produced by `R::into_raw`.
        unsafe { R::first(self.slots[index]) }
    }

    /// Returns the raw pointer stored in slot `index`.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<*mut T> {
        self.slots.get(index).copied()
    }

    /// Releases every owned slot now instead of at scope exit.
    pub fn release_all(&mut self) {
        for index in 0..self.count {
            let item = atomic_exchange(&mut self.slots[index], ptr::null_mut());
            if item.is_null() {
                continue;
            }
            trace!("release guard: releasing slot {index} ({})", R::KIND);
            // SAFETY: the slot was owned by the guard and has just been cleared, so `item` is
            // released exactly once.
            unsafe { R::release(item) };
        }
        self.count = 0;
    }
}

impl<T> ReleaseGuard<'_, T, ArrayRelease> {
    /// Returns the whole array stored in slot `index`, if owned and non-null.
    #[must_use]
    pub fn get_array(&self, index: usize) -> Option<&[T]> {
        if index >= self.count || self.slots[index].is_null() {
            return None;
        }
        let first = self.slots[index];
        // SAFETY: owned non-null slots hold live pointers produced by `ArrayRelease::into_raw`,
        // which are aligned and followed by the stored number of elements.
        Some(unsafe { slice::from_raw_parts(first, ArrayRelease::len_of(first)) })
    }
}

impl<T, R: Release<T>> Drop for ReleaseGuard<'_, T, R> {
    fn drop(&mut self) {
        self.release_all();
    }
}
