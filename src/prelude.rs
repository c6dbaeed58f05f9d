//! # endiscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types, traits and
//! functions from the endiscope library. Import it to get quick access to everything needed for
//! reading and writing foreign binary structures.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all endiscope operations
pub use crate::Error;

/// The result type used throughout endiscope
pub use crate::Result;

// ================================================================================================
// Tagged Integers
// ================================================================================================

/// Byte-order tagged integer types and their common trait
pub use crate::tagged::{
    compare, compare_signed, ByteOffset, TaggedInt, BE16, BE32, BE64, LE16, LE32, LE64, NE16,
    NE32, NE64,
};

// ================================================================================================
// Codec Primitives
// ================================================================================================

/// Fixed-order accessors and const encoders
pub use crate::codec::{
    decode_be16, decode_be32, decode_be64, decode_le16, decode_le32, decode_le64, encode_be16,
    encode_be32, encode_be64, encode_le16, encode_le32, encode_le64, get_be16, get_be24,
    get_be32, get_be64, get_le16, get_le24, get_le32, get_le64, set_be16, set_be24, set_be32,
    set_be64, set_le16, set_le24, set_le32, set_le64,
};

/// Packed instruction fields and sign extension
pub use crate::codec::{
    get_le14_5, get_le19_5, get_le26, set_le14_5, set_le19_5, set_le26, sign_extend32,
    sign_extend64,
};

// ================================================================================================
// Byte-Order Policies
// ================================================================================================

/// Compile-time and run-time policy selection
pub use crate::policy::{BePolicy, ByteOrder, EndianPolicy, LePolicy, RuntimePolicy};

// ================================================================================================
// Buffer Access
// ================================================================================================

/// Bounds-checked, offset-advancing readers and writers
pub use crate::io::{
    read_at, read_be, read_be_at, read_le, read_le_at, read_order_at, write_at, write_be,
    write_be_at, write_le, write_le_at, write_order_at, EndianIO,
};

// ================================================================================================
// Utilities and Configuration
// ================================================================================================

/// Supporting types
pub use crate::utils::{
    atomic_exchange, Align, BoundedSetting, ObjectRelease, ReleaseGuard, TriBool, TriRepr,
    TriState, Tribool,
};

/// Compression tunables
pub use crate::config::{CompressConfig, LzmaConfig, ZlibConfig};
