//! Run-time byte-order policies.

use std::{cmp::Ordering, fmt, marker::PhantomData};

use crate::policy::{BePolicy, ByteOrder, EndianPolicy, LePolicy};

/// A byte order selected by value.
///
/// Object-safe counterpart of [`EndianPolicy`]. Obtain an instance through
/// [`ByteOrder::policy`] or [`EndianPolicy::runtime`]; both hand out references to the two
/// process-wide singletons [`BE_POLICY`] and [`LE_POLICY`].
pub trait RuntimePolicy: fmt::Debug + Send + Sync {
    /// The byte order this policy applies.
    fn order(&self) -> ByteOrder;

    /// Returns `true` for the big-endian policy.
    fn is_be(&self) -> bool {
        self.order() == ByteOrder::Big
    }

    /// Returns `true` if this policy matches the host byte order.
    fn is_native(&self) -> bool {
        self.order().is_native()
    }

    /// Reads a 16-bit value.
    fn get16(&self, p: &[u8; 2]) -> u16;
    /// Reads a 24-bit value.
    fn get24(&self, p: &[u8; 3]) -> u32;
    /// Reads a 32-bit value.
    fn get32(&self, p: &[u8; 4]) -> u32;
    /// Reads a 64-bit value.
    fn get64(&self, p: &[u8; 8]) -> u64;

    /// Stores a 16-bit value.
    fn set16(&self, p: &mut [u8; 2], v: u16);
    /// Stores the low 24 bits of `v`.
    fn set24(&self, p: &mut [u8; 3], v: u32);
    /// Stores a 32-bit value.
    fn set32(&self, p: &mut [u8; 4], v: u32);
    /// Stores a 64-bit value.
    fn set64(&self, p: &mut [u8; 8], v: u64);

    /// Reads a sign-extended 16-bit value.
    fn get16_signed(&self, p: &[u8; 2]) -> i32;
    /// Reads a sign-extended 24-bit value.
    fn get24_signed(&self, p: &[u8; 3]) -> i32;
    /// Reads a 32-bit value as signed.
    fn get32_signed(&self, p: &[u8; 4]) -> i32;
    /// Reads a 64-bit value as signed.
    fn get64_signed(&self, p: &[u8; 8]) -> i64;

    /// Orders two raw 16-bit records.
    fn compare16(&self, a: &[u8; 2], b: &[u8; 2]) -> Ordering;
    /// Orders two raw 24-bit records.
    fn compare24(&self, a: &[u8; 3], b: &[u8; 3]) -> Ordering;
    /// Orders two raw 32-bit records.
    fn compare32(&self, a: &[u8; 4], b: &[u8; 4]) -> Ordering;
    /// Orders two raw 64-bit records.
    fn compare64(&self, a: &[u8; 8], b: &[u8; 8]) -> Ordering;
    /// Orders two raw 16-bit records as signed values.
    fn compare16_signed(&self, a: &[u8; 2], b: &[u8; 2]) -> Ordering;
    /// Orders two raw 24-bit records as signed values.
    fn compare24_signed(&self, a: &[u8; 3], b: &[u8; 3]) -> Ordering;
    /// Orders two raw 32-bit records as signed values.
    fn compare32_signed(&self, a: &[u8; 4], b: &[u8; 4]) -> Ordering;
    /// Orders two raw 64-bit records as signed values.
    fn compare64_signed(&self, a: &[u8; 8], b: &[u8; 8]) -> Ordering;
}

/// Run-time wrapper forwarding every call to the compile-time policy `P`.
///
/// Stateless. Only the two statics below are ever constructed, so comparing policy references
/// by address is meaningful.
pub struct Dispatch<P> {
    _policy: PhantomData<P>,
}

impl<P> Dispatch<P> {
    const fn new() -> Self {
        Self {
            _policy: PhantomData,
        }
    }
}

impl<P: EndianPolicy> fmt::Debug for Dispatch<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dispatch({})", P::ORDER)
    }
}

/// The big-endian run-time policy.
pub static BE_POLICY: Dispatch<BePolicy> = Dispatch::new();

/// The little-endian run-time policy.
pub static LE_POLICY: Dispatch<LePolicy> = Dispatch::new();

impl<P: EndianPolicy> RuntimePolicy for Dispatch<P> {
    fn order(&self) -> ByteOrder {
        P::ORDER
    }

    fn get16(&self, p: &[u8; 2]) -> u16 {
        P::get16(p)
    }

    fn get24(&self, p: &[u8; 3]) -> u32 {
        P::get24(p)
    }

    fn get32(&self, p: &[u8; 4]) -> u32 {
        P::get32(p)
    }

    fn get64(&self, p: &[u8; 8]) -> u64 {
        P::get64(p)
    }

    fn set16(&self, p: &mut [u8; 2], v: u16) {
        P::set16(p, v);
    }

    fn set24(&self, p: &mut [u8; 3], v: u32) {
        P::set24(p, v);
    }

    fn set32(&self, p: &mut [u8; 4], v: u32) {
        P::set32(p, v);
    }

    fn set64(&self, p: &mut [u8; 8], v: u64) {
        P::set64(p, v);
    }

    fn get16_signed(&self, p: &[u8; 2]) -> i32 {
        P::get16_signed(p)
    }

    fn get24_signed(&self, p: &[u8; 3]) -> i32 {
        P::get24_signed(p)
    }

    fn get32_signed(&self, p: &[u8; 4]) -> i32 {
        P::get32_signed(p)
    }

    fn get64_signed(&self, p: &[u8; 8]) -> i64 {
        P::get64_signed(p)
    }

    fn compare16(&self, a: &[u8; 2], b: &[u8; 2]) -> Ordering {
        P::compare16(a, b)
    }

    fn compare24(&self, a: &[u8; 3], b: &[u8; 3]) -> Ordering {
        P::compare24(a, b)
    }

    fn compare32(&self, a: &[u8; 4], b: &[u8; 4]) -> Ordering {
        P::compare32(a, b)
    }

    fn compare64(&self, a: &[u8; 8], b: &[u8; 8]) -> Ordering {
        P::compare64(a, b)
    }

    fn compare16_signed(&self, a: &[u8; 2], b: &[u8; 2]) -> Ordering {
        P::compare16_signed(a, b)
    }

    fn compare24_signed(&self, a: &[u8; 3], b: &[u8; 3]) -> Ordering {
        P::compare24_signed(a, b)
    }

    fn compare32_signed(&self, a: &[u8; 4], b: &[u8; 4]) -> Ordering {
        P::compare32_signed(a, b)
    }

    fn compare64_signed(&self, a: &[u8; 8], b: &[u8; 8]) -> Ordering {
        P::compare64_signed(a, b)
    }
}
