//! Using 16- and 32-bit tagged values as byte offsets.
//!
//! Header fields such as "offset of the section table" are routinely stored as `LE32`/`BE16`
//! and added to a base position or a raw pointer. [`ByteOffset`] is implemented for those four
//! types only: 64-bit tagged values never describe a legitimate in-memory offset in this domain,
//! so `usize + LE64` and `ptr + LE64` do not compile.
//!
//! ```rust
//! use endiscope::tagged::{BE16, LE32};
//!
//! let image = [0u8, 1, 2, 3, 4, 5, 6, 7];
//! let section = image.as_ptr() + LE32::new(4);
//! assert_eq!(section, image[4..].as_ptr());
//! assert_eq!(section - BE16::new(1), image[3..].as_ptr());
//! ```
//!
//! ```rust,compile_fail
//! use endiscope::tagged::LE64;
//!
//! let _ = 16usize + LE64::new(4);
//! ```
//!
//! ```rust,compile_fail
//! use endiscope::tagged::BE64;
//!
//! let buf = [0u8; 8];
//! let _ = buf.as_ptr() + BE64::new(1);
//! ```
//!
//! ```rust,compile_fail
//! use endiscope::tagged::{ptr_add, BE64};
//!
//! let buf = [0u8; 8];
//! let _ = ptr_add(buf.as_ptr(), BE64::new(1));
//! ```
//!
//! Whether a tagged value may also appear on the *left* of the addition (`LE32 + ptr`,
//! `LE32 + usize`) is governed by the `tagged-lhs-offset` cargo feature, which is off by default.
#![cfg_attr(
    not(feature = "tagged-lhs-offset"),
    doc = "```rust,compile_fail\nuse endiscope::tagged::LE32;\n\nlet buf = [0u8; 8];\nlet _ = LE32::new(4) + buf.as_ptr();\n```"
)]
#![cfg_attr(
    not(feature = "tagged-lhs-offset"),
    doc = "```rust,compile_fail\nuse endiscope::tagged::LE32;\n\nlet _ = LE32::new(4) + 16usize;\n```"
)]

use std::ops::{Add, Sub};

use crate::{
    tagged::{sealed::Sealed, BE16, BE32, LE16, LE32},
    Error::OutOfBounds,
    Result,
};

/// A tagged value that may be used as a byte offset.
pub trait ByteOffset: Sealed + Copy {
    /// Decodes the value as an offset.
    fn to_offset(self) -> usize;
}

macro_rules! byte_offset {
    ($($T:ident),*) => {
        $(
            impl ByteOffset for $T {
                fn to_offset(self) -> usize {
                    self.get() as usize
                }
            }

            impl Add<$T> for usize {
                type Output = usize;

                fn add(self, rhs: $T) -> usize {
                    self + rhs.to_offset()
                }
            }

            impl Sub<$T> for usize {
                type Output = usize;

                fn sub(self, rhs: $T) -> usize {
                    self - rhs.to_offset()
                }
            }

            impl<P> Add<$T> for *const P {
                type Output = *const P;

                fn add(self, rhs: $T) -> *const P {
                    self.wrapping_add(rhs.to_offset())
                }
            }

            impl<P> Sub<$T> for *const P {
                type Output = *const P;

                fn sub(self, rhs: $T) -> *const P {
                    self.wrapping_sub(rhs.to_offset())
                }
            }

            impl<P> Add<$T> for *mut P {
                type Output = *mut P;

                fn add(self, rhs: $T) -> *mut P {
                    self.wrapping_add(rhs.to_offset())
                }
            }

            impl<P> Sub<$T> for *mut P {
                type Output = *mut P;

                fn sub(self, rhs: $T) -> *mut P {
                    self.wrapping_sub(rhs.to_offset())
                }
            }

            #[cfg(feature = "tagged-lhs-offset")]
            impl Add<usize> for $T {
                type Output = usize;

                fn add(self, rhs: usize) -> usize {
                    self.to_offset() + rhs
                }
            }

            #[cfg(feature = "tagged-lhs-offset")]
            impl<P> Add<*const P> for $T {
                type Output = *const P;

                fn add(self, rhs: *const P) -> *const P {
                    rhs.wrapping_add(self.to_offset())
                }
            }

            #[cfg(feature = "tagged-lhs-offset")]
            impl<P> Add<*mut P> for $T {
                type Output = *mut P;

                fn add(self, rhs: *mut P) -> *mut P {
                    rhs.wrapping_add(self.to_offset())
                }
            }
        )*
    };
}

byte_offset!(BE16, BE32, LE16, LE32);

/// Advances a raw pointer by `offset` elements. Same as `ptr + offset`.
///
/// Uses wrapping arithmetic, so computing the pointer is always safe; dereferencing it is subject
/// to the usual rules.
#[must_use]
pub fn ptr_add<T>(ptr: *const T, offset: impl ByteOffset) -> *const T {
    ptr.wrapping_add(offset.to_offset())
}

/// Moves a raw pointer back by `offset` elements. See [`ptr_add`].
#[must_use]
pub fn ptr_sub<T>(ptr: *const T, offset: impl ByteOffset) -> *const T {
    ptr.wrapping_sub(offset.to_offset())
}

/// Returns the tail of `data` starting `offset` bytes in.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `offset` lies past the end of `data`.
pub fn advance(data: &[u8], offset: impl ByteOffset) -> Result<&[u8]> {
    data.get(offset.to_offset()..).ok_or(OutOfBounds)
}
