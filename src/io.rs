//! Bounds-checked, offset-advancing access to byte buffers.
//!
//! The codec functions in [`crate::codec`] operate on fixed-size arrays and cannot fail. Parsers
//! usually hold a `&[u8]` and a cursor instead; this module bridges the two. Every function checks
//! that the requested bytes lie inside the slice and returns [`crate::Error::OutOfBounds`]
//! otherwise. Nothing here panics on short input.
//!
//! # Key Components
//!
//! - [`EndianIO`] - trait connecting a host integer to the codec functions for its width
//! - [`read_le`] / [`read_be`] / [`write_le`] / [`write_be`] - access at the start of a buffer
//! - [`read_le_at`] / [`read_be_at`] / [`write_le_at`] / [`write_be_at`] - access at an offset,
//!   which is advanced past the field on success
//! - [`read_le_at_dyn`] / [`read_be_at_dyn`] / [`write_le_at_dyn`] / [`write_be_at_dyn`] - a field
//!   that is 2 or 4 bytes wide depending on a run-time flag
//! - [`read_at`] / [`write_at`] - the same, with the byte order taken from an [`EndianPolicy`]
//! - [`read_order_at`] / [`write_order_at`] - the same, with the byte order known only at run time
//!
//! # Examples
//!
//! ```rust
//! use endiscope::io::{read_be_at, read_le_at, write_le_at};
//!
//! let data = [0x01, 0x00, 0x00, 0x00, 0x12, 0x34];
//! let mut offset = 0;
//! let count: u32 = read_le_at(&data, &mut offset)?;
//! let tag: u16 = read_be_at(&data, &mut offset)?;
//! assert_eq!((count, tag, offset), (1, 0x1234, 6));
//!
//! let mut out = [0u8; 2];
//! let mut offset = 0;
//! write_le_at(&mut out, &mut offset, 0x1234u16)?;
//! assert_eq!(out, [0x34, 0x12]);
//! # Ok::<(), endiscope::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! All functions are pure operations on caller supplied buffers.

use crate::{
    codec::{
        get_be16, get_be32, get_be64, get_le16, get_le32, get_le64, set_be16, set_be32, set_be64,
        set_le16, set_le32, set_le64,
    },
    policy::{ByteOrder, EndianPolicy},
    Error::OutOfBounds,
    Result,
};

/// An integer type that can be transferred in either byte order.
///
/// Implemented for `u16`, `u32`, `u64`, `i16`, `i32` and `i64`. Signed types share the encoding
/// of the unsigned type of the same width.
pub trait EndianIO: Sized + Copy {
    /// Fixed-size byte representation.
    type Bytes: Copy + Default + AsRef<[u8]> + AsMut<[u8]>;

    /// Decodes little-endian bytes.
    fn from_le(bytes: &Self::Bytes) -> Self;
    /// Decodes big-endian bytes.
    fn from_be(bytes: &Self::Bytes) -> Self;
    /// Encodes as little-endian bytes.
    fn to_le(self, bytes: &mut Self::Bytes);
    /// Encodes as big-endian bytes.
    fn to_be(self, bytes: &mut Self::Bytes);
}

macro_rules! endian_io {
    ($($ty:ty => $unsigned:ty, $n:literal, $get_le:ident, $get_be:ident, $set_le:ident, $set_be:ident;)*) => {
        $(
            impl EndianIO for $ty {
                type Bytes = [u8; $n];

                #[allow(clippy::cast_possible_wrap)]
                fn from_le(bytes: &Self::Bytes) -> Self {
                    $get_le(bytes) as $ty
                }

                #[allow(clippy::cast_possible_wrap)]
                fn from_be(bytes: &Self::Bytes) -> Self {
                    $get_be(bytes) as $ty
                }

                #[allow(clippy::cast_sign_loss)]
                fn to_le(self, bytes: &mut Self::Bytes) {
                    $set_le(bytes, self as $unsigned);
                }

                #[allow(clippy::cast_sign_loss)]
                fn to_be(self, bytes: &mut Self::Bytes) {
                    $set_be(bytes, self as $unsigned);
                }
            }
        )*
    };
}

endian_io! {
    u16 => u16, 2, get_le16, get_be16, set_le16, set_be16;
    i16 => u16, 2, get_le16, get_be16, set_le16, set_be16;
    u32 => u32, 4, get_le32, get_be32, set_le32, set_be32;
    i32 => u32, 4, get_le32, get_be32, set_le32, set_be32;
    u64 => u64, 8, get_le64, get_be64, set_le64, set_be64;
    i64 => u64, 8, get_le64, get_be64, set_le64, set_be64;
}

fn field<T: EndianIO>(data: &[u8], offset: usize) -> Result<T::Bytes> {
    let mut bytes = T::Bytes::default();
    let len = bytes.as_ref().len();
    let end = offset.checked_add(len).ok_or(OutOfBounds)?;
    let src = data.get(offset..end).ok_or(OutOfBounds)?;
    bytes.as_mut().copy_from_slice(src);
    Ok(bytes)
}

fn store<T: EndianIO>(data: &mut [u8], offset: &mut usize, bytes: &T::Bytes) -> Result<()> {
    let src = bytes.as_ref();
    let end = offset.checked_add(src.len()).ok_or(OutOfBounds)?;
    let dst = data.get_mut(*offset..end).ok_or(OutOfBounds)?;
    dst.copy_from_slice(src);
    *offset = end;
    Ok(())
}

/// Reads a little-endian value from the start of `data`.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `data` is shorter than `T`.
pub fn read_le<T: EndianIO>(data: &[u8]) -> Result<T> {
    let mut offset = 0_usize;
    read_le_at(data, &mut offset)
}

/// Reads a little-endian value at `offset` and advances `offset` past it.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if the field does not fit; `offset` is left unchanged.
pub fn read_le_at<T: EndianIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    let bytes = field::<T>(data, *offset)?;
    *offset += bytes.as_ref().len();
    Ok(T::from_le(&bytes))
}

/// Reads a little-endian field that is 4 bytes wide if `is_large`, 2 bytes otherwise.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if the field does not fit.
pub fn read_le_at_dyn(data: &[u8], offset: &mut usize, is_large: bool) -> Result<u32> {
    let res = if is_large {
        read_le_at::<u32>(data, offset)?
    } else {
        u32::from(read_le_at::<u16>(data, offset)?)
    };

    Ok(res)
}

/// Reads a big-endian value from the start of `data`.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `data` is shorter than `T`.
pub fn read_be<T: EndianIO>(data: &[u8]) -> Result<T> {
    let mut offset = 0_usize;
    read_be_at(data, &mut offset)
}

/// Reads a big-endian value at `offset` and advances `offset` past it.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if the field does not fit; `offset` is left unchanged.
pub fn read_be_at<T: EndianIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    let bytes = field::<T>(data, *offset)?;
    *offset += bytes.as_ref().len();
    Ok(T::from_be(&bytes))
}

/// Reads a big-endian field that is 4 bytes wide if `is_large`, 2 bytes otherwise.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if the field does not fit.
pub fn read_be_at_dyn(data: &[u8], offset: &mut usize, is_large: bool) -> Result<u32> {
    let res = if is_large {
        read_be_at::<u32>(data, offset)?
    } else {
        u32::from(read_be_at::<u16>(data, offset)?)
    };

    Ok(res)
}

/// Writes a little-endian value to the start of `data`.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `data` is shorter than `T`.
pub fn write_le<T: EndianIO>(data: &mut [u8], value: T) -> Result<()> {
    let mut offset = 0_usize;
    write_le_at(data, &mut offset, value)
}

/// Writes a little-endian value at `offset` and advances `offset` past it.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if the field does not fit; neither `data` nor `offset`
/// is modified in that case.
pub fn write_le_at<T: EndianIO>(data: &mut [u8], offset: &mut usize, value: T) -> Result<()> {
    let mut bytes = T::Bytes::default();
    value.to_le(&mut bytes);
    store::<T>(data, offset, &bytes)
}

/// Writes a little-endian field that is 4 bytes wide if `is_large`, 2 bytes otherwise.
///
/// In the 2-byte form the upper 16 bits of `value` are dropped.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if the field does not fit.
pub fn write_le_at_dyn(
    data: &mut [u8],
    offset: &mut usize,
    value: u32,
    is_large: bool,
) -> Result<()> {
    if is_large {
        write_le_at::<u32>(data, offset, value)?;
    } else {
        write_le_at::<u16>(data, offset, value as u16)?;
    }

    Ok(())
}

/// Writes a big-endian value to the start of `data`.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `data` is shorter than `T`.
pub fn write_be<T: EndianIO>(data: &mut [u8], value: T) -> Result<()> {
    let mut offset = 0_usize;
    write_be_at(data, &mut offset, value)
}

/// Writes a big-endian value at `offset` and advances `offset` past it.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if the field does not fit; neither `data` nor `offset`
/// is modified in that case.
pub fn write_be_at<T: EndianIO>(data: &mut [u8], offset: &mut usize, value: T) -> Result<()> {
    let mut bytes = T::Bytes::default();
    value.to_be(&mut bytes);
    store::<T>(data, offset, &bytes)
}

/// Writes a big-endian field that is 4 bytes wide if `is_large`, 2 bytes otherwise.
///
/// In the 2-byte form the upper 16 bits of `value` are dropped.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if the field does not fit.
pub fn write_be_at_dyn(
    data: &mut [u8],
    offset: &mut usize,
    value: u32,
    is_large: bool,
) -> Result<()> {
    if is_large {
        write_be_at::<u32>(data, offset, value)?;
    } else {
        write_be_at::<u16>(data, offset, value as u16)?;
    }

    Ok(())
}

/// Reads a value at `offset` in the byte order selected by `P`.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if the field does not fit.
pub fn read_at<P: EndianPolicy, T: EndianIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    read_order_at(P::ORDER, data, offset)
}

/// Writes a value at `offset` in the byte order selected by `P`.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if the field does not fit.
pub fn write_at<P: EndianPolicy, T: EndianIO>(
    data: &mut [u8],
    offset: &mut usize,
    value: T,
) -> Result<()> {
    write_order_at(P::ORDER, data, offset, value)
}

/// Reads a value at `offset` in a byte order discovered at run time.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if the field does not fit.
pub fn read_order_at<T: EndianIO>(order: ByteOrder, data: &[u8], offset: &mut usize) -> Result<T> {
    match order {
        ByteOrder::Big => read_be_at(data, offset),
        ByteOrder::Little => read_le_at(data, offset),
    }
}

/// Writes a value at `offset` in a byte order discovered at run time.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if the field does not fit.
pub fn write_order_at<T: EndianIO>(
    order: ByteOrder,
    data: &mut [u8],
    offset: &mut usize,
    value: T,
) -> Result<()> {
    match order {
        ByteOrder::Big => write_be_at(data, offset, value),
        ByteOrder::Little => write_le_at(data, offset, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{BePolicy, LePolicy};

    const TEST_BUFFER: [u8; 8] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];

    #[test]
    fn read_le_widths() {
        assert_eq!(read_le::<u16>(&TEST_BUFFER).unwrap(), 0x0201);
        assert_eq!(read_le::<i16>(&TEST_BUFFER).unwrap(), 0x0201);
        assert_eq!(read_le::<u32>(&TEST_BUFFER).unwrap(), 0x0403_0201);
        assert_eq!(read_le::<i32>(&TEST_BUFFER).unwrap(), 0x0403_0201);
        assert_eq!(read_le::<u64>(&TEST_BUFFER).unwrap(), 0x0807_0605_0403_0201);
        assert_eq!(read_le::<i64>(&TEST_BUFFER).unwrap(), 0x0807_0605_0403_0201);
    }

    #[test]
    fn read_be_widths() {
        assert_eq!(read_be::<u16>(&TEST_BUFFER).unwrap(), 0x0102);
        assert_eq!(read_be::<i16>(&TEST_BUFFER).unwrap(), 0x0102);
        assert_eq!(read_be::<u32>(&TEST_BUFFER).unwrap(), 0x0102_0304);
        assert_eq!(read_be::<i32>(&TEST_BUFFER).unwrap(), 0x0102_0304);
        assert_eq!(read_be::<u64>(&TEST_BUFFER).unwrap(), 0x0102_0304_0506_0708);
        assert_eq!(read_be::<i64>(&TEST_BUFFER).unwrap(), 0x0102_0304_0506_0708);
    }

    #[test]
    fn read_signed_negative() {
        assert_eq!(read_le::<i16>(&[0xfe, 0xff]).unwrap(), -2);
        assert_eq!(read_be::<i32>(&[0xff, 0xff, 0xff, 0xfe]).unwrap(), -2);
        assert_eq!(read_le::<i64>(&[0xff; 8]).unwrap(), -1);
    }

    #[test]
    fn read_at_advances() {
        let mut offset = 0;
        assert_eq!(read_le_at::<u16>(&TEST_BUFFER, &mut offset).unwrap(), 0x0201);
        assert_eq!(offset, 2);
        assert_eq!(read_be_at::<u32>(&TEST_BUFFER, &mut offset).unwrap(), 0x0304_0506);
        assert_eq!(offset, 6);
        assert_eq!(read_le_at::<u16>(&TEST_BUFFER, &mut offset).unwrap(), 0x0807);
        assert_eq!(offset, 8);
    }

    #[test]
    fn read_dyn() {
        let mut offset = 0;
        assert_eq!(read_le_at_dyn(&TEST_BUFFER, &mut offset, false).unwrap(), 0x0201);
        assert_eq!(read_le_at_dyn(&TEST_BUFFER, &mut offset, true).unwrap(), 0x0605_0403);
        assert_eq!(offset, 6);

        let mut offset = 0;
        assert_eq!(read_be_at_dyn(&TEST_BUFFER, &mut offset, true).unwrap(), 0x0102_0304);
        assert_eq!(read_be_at_dyn(&TEST_BUFFER, &mut offset, false).unwrap(), 0x0506);
        assert_eq!(offset, 6);
    }

    #[test]
    fn errors() {
        let buffer = [0xff, 0xff, 0xff, 0xff];

        assert!(matches!(read_le::<u64>(&buffer), Err(OutOfBounds)));
        assert!(matches!(read_be::<u64>(&buffer), Err(OutOfBounds)));

        let mut offset = 3;
        assert!(matches!(
            read_le_at::<u16>(&buffer, &mut offset),
            Err(OutOfBounds)
        ));
        assert_eq!(offset, 3);

        let mut offset = usize::MAX - 1;
        assert!(matches!(
            read_be_at::<u32>(&buffer, &mut offset),
            Err(OutOfBounds)
        ));

        let mut offset = 0;
        assert!(matches!(
            read_le_at_dyn(&buffer[..3], &mut offset, true),
            Err(OutOfBounds)
        ));
    }

    #[test]
    fn write_le_and_be() {
        let mut buffer = [0u8; 4];
        write_le(&mut buffer, 0x1234_5678u32).unwrap();
        assert_eq!(buffer, [0x78, 0x56, 0x34, 0x12]);
        write_be(&mut buffer, 0x1234_5678u32).unwrap();
        assert_eq!(buffer, [0x12, 0x34, 0x56, 0x78]);
        write_le(&mut buffer, -1i16).unwrap();
        assert_eq!(buffer, [0xff, 0xff, 0x56, 0x78]);

        let mut wide = [0u8; 8];
        write_be(&mut wide, 0x0123_4567_89ab_cdefu64).unwrap();
        assert_eq!(wide, [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef]);
        write_le(&mut wide, -2i64).unwrap();
        assert_eq!(wide, [0xfe, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn write_at_advances() {
        let mut buffer = [0u8; 8];
        let mut offset = 0;
        write_le_at(&mut buffer, &mut offset, 0x0201u16).unwrap();
        write_be_at(&mut buffer, &mut offset, 0x0304_0506u32).unwrap();
        write_le_at_dyn(&mut buffer, &mut offset, 0x0008_0807, false).unwrap();
        assert_eq!(offset, 8);
        assert_eq!(buffer, TEST_BUFFER);
    }

    #[test]
    fn write_dyn_large() {
        let mut buffer = [0u8; 6];
        let mut offset = 0;
        write_be_at_dyn(&mut buffer, &mut offset, 0x1234_5678, true).unwrap();
        write_be_at_dyn(&mut buffer, &mut offset, 0xabcd, false).unwrap();
        assert_eq!(buffer, [0x12, 0x34, 0x56, 0x78, 0xab, 0xcd]);
    }

    #[test]
    fn write_errors_leave_buffer_untouched() {
        let mut buffer = [0xaau8; 3];
        let mut offset = 0;
        assert!(matches!(
            write_le_at(&mut buffer, &mut offset, 1u32),
            Err(OutOfBounds)
        ));
        assert_eq!(offset, 0);
        assert_eq!(buffer, [0xaa; 3]);

        let mut offset = 2;
        assert!(matches!(
            write_be_at_dyn(&mut buffer, &mut offset, 1, false),
            Err(OutOfBounds)
        ));
        assert_eq!(offset, 2);
    }

    #[test]
    fn policy_and_order_forms() {
        let mut offset = 0;
        let be: u32 = read_at::<BePolicy, _>(&TEST_BUFFER, &mut offset).unwrap();
        assert_eq!(be, 0x0102_0304);
        let le: u32 = read_at::<LePolicy, _>(&TEST_BUFFER, &mut offset).unwrap();
        assert_eq!(le, 0x0807_0605);

        let mut out = [0u8; 4];
        let mut offset = 0;
        write_at::<LePolicy, _>(&mut out, &mut offset, 0x0102u16).unwrap();
        write_order_at(ByteOrder::Big, &mut out, &mut offset, 0x0304u16).unwrap();
        assert_eq!(out, [0x02, 0x01, 0x03, 0x04]);

        let mut offset = 2;
        let v: i16 = read_order_at(ByteOrder::Little, &out, &mut offset).unwrap();
        assert_eq!(v, 0x0403);
    }
}
