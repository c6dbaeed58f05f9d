// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![allow(dead_code)]
//#![deny(unsafe_code)]
// - 'utils/atomic.rs' views a `&mut usize` / `&mut *mut T` as its atomic counterpart
// - 'utils/release.rs' turns boxes and raw allocations into slot pointers and back

//! # endiscope
//!
//! [![Crates.io](https://img.shields.io/crates/v/endiscope.svg)](https://crates.io/crates/endiscope)
//! [![Documentation](https://docs.rs/endiscope/badge.svg)](https://docs.rs/endiscope)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/endiscope/blob/main/LICENSE-APACHE)
//!
//! Portable, alignment-independent access to big- and little-endian integers inside foreign
//! binary structures: executable headers, relocation tables, packed instruction words.
//! `endiscope` is the byte-order layer of an executable packer. It decodes and encodes fields of
//! any width at any address, whichever byte order the host uses, and lets format code be written
//! once for both orders.
//!
//! ## Features
//!
//! - **Byte-order codecs** - `get`/`set` for 16, 24, 32 and 64 bit fields, `const fn` encoders
//! - **Tagged integers** - `BE16` ... `LE64`, plain byte arrays with alignment 1 and `bytemuck::Pod`
//! - **Instruction fields** - the `le26`, `le19_5` and `le14_5` packed layouts
//! - **Policies** - byte order as a type parameter or as a run-time object, with a bridge
//! - **Supporting types** - tri-state booleans, bounded settings, scope-bound release guards
//!
//! ## Quick Start
//!
//! Add `endiscope` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! endiscope = "0.3"
//! ```
//!
//! ### Using the Prelude
//!
//! ```rust
//! use endiscope::prelude::*;
//!
//! let mut header = [0u8; 8];
//! set_be32((&mut header[..4]).try_into().unwrap(), 0xfeed_face);
//! set_le32((&mut header[4..]).try_into().unwrap(), 7);
//!
//! let mut offset = 0;
//! let magic: u32 = read_be_at(&header, &mut offset)?;
//! let cputype: u32 = read_at::<LePolicy, u32>(&header, &mut offset)?;
//! assert_eq!((magic, cputype), (0xfeed_face, 7));
//! # Ok::<(), endiscope::Error>(())
//! ```
//!
//! ### Tagged Header Structs
//!
//! ```rust
//! use bytemuck::{Pod, Zeroable};
//! use endiscope::tagged::{LE16, LE32};
//!
//! #[derive(Clone, Copy, Pod, Zeroable)]
//! #[repr(C)]
//! struct Section {
//!     vaddr: LE32,
//!     size: LE32,
//!     flags: LE16,
//!     align: LE16,
//! }
//!
//! let mut raw = [0u8; 12];
//! let section: &mut Section = bytemuck::from_bytes_mut(&mut raw);
//! section.vaddr.set(0x1000);
//! section.size += 0x200;
//! section.align = LE16::new(4);
//! assert_eq!(raw, [0, 0x10, 0, 0, 0, 2, 0, 0, 0, 0, 4, 0]);
//! ```
//!
//! ### Run-time Byte Order
//!
//! ```rust
//! use endiscope::policy::{ByteOrder, RuntimePolicy};
//!
//! // EI_DATA of an ELF header: 1 = little, 2 = big
//! let ident_data = 2u8;
//! let order = if ident_data == 2 { ByteOrder::Big } else { ByteOrder::Little };
//! let policy = order.policy();
//! assert_eq!(policy.get16(&[0x00, 0x3e]), 0x3e);
//! ```
//!
//! ## Architecture
//!
//! - [`codec`] - pure byte-order primitives, the bottom layer
//! - [`tagged`] - the six byte-order tagged integer types
//! - [`policy`] - compile-time and run-time byte-order selection
//! - [`io`] - bounds-checked, offset-advancing buffer access
//! - [`utils`] - tri-state boolean, bounded settings, release guard, atomic exchange, alignment
//! - [`config`] - compression tunables built from bounded settings
//! - [`Error`] and [`Result`] - error handling for the fallible edges of the crate
//!
//! ## Cargo Features
//!
//! - `threads` (default) - `atomic_exchange` uses a hardware atomic swap
//! - `tagged-lhs-offset` - allow `LE32 + usize` in addition to `usize + LE32`
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade and never installs a logger.
//! Release guards log at `trace` level, configuration merges and run-time policy selection at
//! `debug` level. The codec paths do not log.

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use endiscope::prelude::*;
///
/// let v = BE32::new(0x0102_0304);
/// assert_eq!(get_be32(&v.to_bytes()), 0x0102_0304);
/// ```
pub mod prelude;

/// Byte-order codec primitives.
pub mod codec;

/// Byte-order tagged integer types.
pub mod tagged;

/// Compile-time and run-time byte-order policies.
pub mod policy;

/// Bounds-checked buffer access.
pub mod io;

/// Supporting types: tri-state boolean, bounded settings, release guard, atomic exchange.
pub mod utils;

/// Compression tunables.
pub mod config;

/// `endiscope` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `endiscope` Error type
///
/// The main error type for all operations in this crate. See [`Error`] for the variants.
pub use error::Error;

pub use config::CompressConfig;
pub use policy::{BePolicy, ByteOrder, EndianPolicy, LePolicy, RuntimePolicy};
pub use tagged::{BE16, BE32, BE64, LE16, LE32, LE64, NE16, NE32, NE64};
