//! Byte-order tagged integer types for embedding in foreign structures.
//!
//! [`BE16`], [`BE32`], [`BE64`], [`LE16`], [`LE32`] and [`LE64`] are plain byte arrays with
//! alignment 1 whose byte order is part of the type. They can sit at any offset of a buffer,
//! be cast from unaligned byte slices through `bytemuck`, and be used in `#[repr(C)]` header
//! structs that mirror an on-disk layout exactly.
//!
//! # Semantics
//!
//! - The stored bytes, decoded in the type's order, always equal the last value set.
//! - Equality compares raw bytes; ordering compares decoded values. Both agree because the
//!   encoding is a bijection.
//! - Compound assignment (`+=`, `<<=`, ...) decodes, applies the operation on the host integer
//!   with wrapping semantics, and re-encodes. There are no byte-level shortcuts.
//! - `new` is a `const fn`, so tagged constants can be built at compile time.
//! - 16- and 32-bit types implement [`ByteOffset`]; 64-bit types deliberately do not.
//!
//! # Examples
//!
//! ```rust
//! use bytemuck::{Pod, Zeroable};
//! use endiscope::tagged::{BE16, BE32};
//!
//! #[derive(Clone, Copy, Pod, Zeroable)]
//! #[repr(C)]
//! struct PackHeader {
//!     magic: BE32,
//!     version: BE16,
//!     flags: BE16,
//! }
//!
//! let raw = [0x55, 0x50, 0x58, 0x21, 0x00, 0x0d, 0x80, 0x01];
//! let hdr: PackHeader = bytemuck::pod_read_unaligned(&raw);
//! assert_eq!(hdr.magic.get(), 0x5550_5821);
//! assert_eq!(hdr.version.get(), 13);
//! assert_eq!(hdr.flags.get_signed(), -0x7fff);
//! ```

use std::cmp::Ordering;

use bytemuck::Pod;

use crate::policy::ByteOrder;

mod offset;
mod types;

pub use offset::{advance, ptr_add, ptr_sub, ByteOffset};
pub use types::{BE16, BE32, BE64, LE16, LE32, LE64, NE16, NE32, NE64};

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Common interface of the six tagged integer types.
///
/// Lets generic code (policies, buffer readers, sorters) handle any tagged type uniformly.
/// This trait is sealed.
pub trait TaggedInt: sealed::Sealed + Pod + Default + Eq + Ord {
    /// The host integer this type decodes to.
    type Native: Copy + Ord;
    /// The signed host integer produced by [`TaggedInt::get_signed`].
    type Signed: Copy + Ord;
    /// Byte order of the stored representation.
    const ORDER: ByteOrder;
    /// Logical width in bits.
    const BITS: u32;

    /// Decodes the stored value.
    fn get(self) -> Self::Native;
    /// Encodes `v` into the stored bytes.
    fn set(&mut self, v: Self::Native);
    /// Decodes the stored value, sign-extended at full width.
    fn get_signed(self) -> Self::Signed;
}

/// Orders two tagged values by their unsigned decoded value.
///
/// Suitable as a `sort_by` comparator.
pub fn compare<T: TaggedInt>(a: &T, b: &T) -> Ordering {
    a.get().cmp(&b.get())
}

/// Orders two tagged values by their sign-extended decoded value.
pub fn compare_signed<T: TaggedInt>(a: &T, b: &T) -> Ordering {
    a.get_signed().cmp(&b.get_signed())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn width_of<T: TaggedInt>() -> (u32, usize) {
        (T::BITS, std::mem::size_of::<T>())
    }

    #[test]
    fn trait_constants() {
        assert_eq!(width_of::<BE16>(), (16, 2));
        assert_eq!(width_of::<LE32>(), (32, 4));
        assert_eq!(width_of::<BE64>(), (64, 8));
        assert_eq!(LE16::ORDER, ByteOrder::Little);
        assert_eq!(BE32::ORDER, ByteOrder::Big);
    }

    #[test]
    fn sorting_unsigned_and_signed() {
        let mut relocs = vec![LE32::new(0xffff_fff0), LE32::new(0x10), LE32::new(0x8)];
        relocs.sort_by(compare);
        assert_eq!(relocs, [LE32::new(0x8), LE32::new(0x10), LE32::new(0xffff_fff0)]);

        relocs.sort_by(compare_signed);
        assert_eq!(relocs, [LE32::new(0xffff_fff0), LE32::new(0x8), LE32::new(0x10)]);

        let mut deltas = [BE16::new(1), BE16::new(0xffff)];
        deltas.sort_by(compare_signed);
        assert_eq!(deltas[0].get(), 0xffff);
    }

    #[test]
    fn generic_set_get() {
        fn bump<T: TaggedInt<Native = u64>>(x: &mut T) {
            let v = x.get();
            x.set(v + 1);
        }
        let mut a = BE64::new(41);
        let mut b = LE64::new(41);
        bump(&mut a);
        bump(&mut b);
        assert_eq!(a.get(), 42);
        assert_eq!(b.get(), 42);
        assert_ne!(a.to_bytes(), b.to_bytes());
    }
}
