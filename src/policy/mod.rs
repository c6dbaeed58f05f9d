//! Byte order as a strategy for generic code.
//!
//! Many executable formats come in both byte orders (ELF, Mach-O, a.out, ...). Algorithms that
//! walk such formats are written once and parametrized over the byte order in one of two ways:
//!
//! - **Compile time** - a type parameter `P: EndianPolicy`, instantiated with [`BePolicy`] or
//!   [`LePolicy`]. Every call resolves statically; there is no branch and no indirection.
//! - **Run time** - a `&'static dyn RuntimePolicy`, for when the order is only known after
//!   inspecting the input (for example `EI_DATA` of an ELF header). Exactly two instances exist,
//!   [`BE_POLICY`] and [`LE_POLICY`], shared by the whole process.
//!
//! [`EndianPolicy::runtime`] bridges the first form to the second, and [`ByteOrder::policy`]
//! maps a discovered byte order to its singleton.
//!
//! # Examples
//!
//! ```rust
//! use endiscope::policy::{BePolicy, ByteOrder, EndianPolicy, LePolicy, RuntimePolicy};
//!
//! fn entry_point<P: EndianPolicy>(hdr: &[u8; 4]) -> u32 {
//!     P::get32(hdr)
//! }
//!
//! let hdr = [0x00, 0x00, 0x10, 0x00];
//! assert_eq!(entry_point::<BePolicy>(&hdr), 0x1000);
//! assert_eq!(entry_point::<LePolicy>(&hdr), 0x0010_0000);
//!
//! let order: ByteOrder = "big".parse().unwrap();
//! assert_eq!(order.policy().get32(&hdr), 0x1000);
//! assert_eq!(BePolicy::runtime().order(), ByteOrder::Big);
//! ```

use log::debug;
use strum::{Display, EnumIter, EnumString};

use crate::{Error, Result};

mod compile;
mod runtime;

pub use compile::{BePolicy, EndianPolicy, LePolicy};
pub use runtime::{Dispatch, RuntimePolicy, BE_POLICY, LE_POLICY};

/// One of the two supported byte orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum ByteOrder {
    /// Most significant byte first.
    #[strum(to_string = "big", serialize = "be", serialize = "big-endian", serialize = "msb")]
    Big,
    /// Least significant byte first.
    #[strum(
        to_string = "little",
        serialize = "le",
        serialize = "little-endian",
        serialize = "lsb"
    )]
    Little,
}

impl ByteOrder {
    /// The byte order of the machine running this code.
    #[cfg(target_endian = "little")]
    pub const NATIVE: ByteOrder = ByteOrder::Little;
    /// The byte order of the machine running this code.
    #[cfg(target_endian = "big")]
    pub const NATIVE: ByteOrder = ByteOrder::Big;

    /// Returns `true` if this is the host byte order.
    #[must_use]
    pub const fn is_native(self) -> bool {
        matches!(
            (self, Self::NATIVE),
            (ByteOrder::Big, ByteOrder::Big) | (ByteOrder::Little, ByteOrder::Little)
        )
    }

    /// Returns the opposite byte order.
    #[must_use]
    pub const fn swapped(self) -> ByteOrder {
        match self {
            ByteOrder::Big => ByteOrder::Little,
            ByteOrder::Little => ByteOrder::Big,
        }
    }

    /// Returns the process-wide run-time policy for this byte order.
    #[must_use]
    pub fn policy(self) -> &'static dyn RuntimePolicy {
        debug!("selecting {self}-endian run-time policy");
        match self {
            ByteOrder::Big => &BE_POLICY,
            ByteOrder::Little => &LE_POLICY,
        }
    }

    /// Parses a byte-order name such as `"be"`, `"little"` or `"Big-Endian"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownByteOrder`] if `name` is not a recognised spelling.
    pub fn from_name(name: &str) -> Result<ByteOrder> {
        name.parse()
            .map_err(|_| Error::UnknownByteOrder(name.to_string()))
    }
}
