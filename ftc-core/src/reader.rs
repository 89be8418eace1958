use std::fs;
use std::path::Path;

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use ftc_nls::{Decoder, Encoding, TextDecoder};

use crate::cursor::Cursor;
use crate::error::{AssetError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Endianness {
    #[default]
    Little,
    Big,
}

/// A fixed-width value that can be read out of an asset.
pub trait Scalar: Sized + Copy {
    const WIDTH: usize;

    /// `buf` is exactly `WIDTH` bytes long.
    fn from_bytes<B: ByteOrder>(buf: &[u8]) -> Self;

    fn decode(buf: &[u8], endian: Endianness) -> Self {
        match endian {
            Endianness::Little => Self::from_bytes::<LittleEndian>(buf),
            Endianness::Big => Self::from_bytes::<BigEndian>(buf),
        }
    }
}

impl Scalar for u8 {
    const WIDTH: usize = 1;

    fn from_bytes<B: ByteOrder>(buf: &[u8]) -> Self {
        buf[0]
    }
}

impl Scalar for i8 {
    const WIDTH: usize = 1;

    fn from_bytes<B: ByteOrder>(buf: &[u8]) -> Self {
        buf[0] as i8
    }
}

macro_rules! impl_scalar {
    ($($ty:ty => $read:ident),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();

                fn from_bytes<B: ByteOrder>(buf: &[u8]) -> Self {
                    B::$read(buf)
                }
            }
        )*
    };
}

impl_scalar! {
    u16 => read_u16,
    i16 => read_i16,
    u32 => read_u32,
    i32 => read_i32,
    u64 => read_u64,
    i64 => read_i64,
    f32 => read_f32,
    f64 => read_f64,
}

/// The whole asset file, loaded once and never modified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetBuffer {
    bytes: Vec<u8>,
}

impl AssetBuffer {
    /// we assume that the asset fits in memory
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = fs::read(path.as_ref())?;
        log::debug!("loaded {:?} ({} bytes)", path.as_ref(), bytes.len());
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn reader(&self) -> AssetReader<'_> {
        AssetReader::new(&self.bytes)
    }
}

impl From<Vec<u8>> for AssetBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

/// A read-only view over an asset buffer.
///
/// Offsets passed to a view are local: offset 0 is `base()` in the underlying buffer.
/// Rebasing with [`with_offset`](Self::with_offset) only moves `base`, the bytes are shared.
#[derive(Debug, Clone, Copy)]
pub struct AssetReader<'a> {
    root: &'a [u8],
    base: usize,
}

macro_rules! typed_reads {
    ($($ty:ty => $read:ident, $next:ident;)*) => {
        $(
            #[inline]
            pub fn $read(&self, offset: usize) -> Result<$ty> {
                self.read::<$ty>(offset, Endianness::Little)
            }

            #[inline]
            pub fn $next(&self, cursor: &mut Cursor) -> Result<$ty> {
                self.read_next::<$ty>(cursor, Endianness::Little)
            }
        )*
    };
}

impl<'a> AssetReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            root: bytes,
            base: 0,
        }
    }

    /// Where local offset 0 sits in the underlying buffer.
    #[inline]
    pub fn base(&self) -> usize {
        self.base
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.root.len() - self.base
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &'a [u8] {
        &self.root[self.base..]
    }

    /// A new view whose offset 0 is this view's `offset`.
    pub fn with_offset(&self, offset: usize) -> Result<AssetReader<'a>> {
        if offset > self.len() {
            return Err(self.out_of_range(offset, 0));
        }
        Ok(AssetReader {
            root: self.root,
            base: self.base + offset,
        })
    }

    pub fn start_reading(&self, offset: usize) -> Cursor {
        Cursor::new(offset)
    }

    fn out_of_range(&self, offset: usize, len: usize) -> AssetError {
        AssetError::OutOfRange {
            offset,
            len,
            base: self.base,
            size: self.len(),
        }
    }

    /// Borrow `len` bytes starting at `offset`.
    pub fn slice(&self, offset: usize, len: usize) -> Result<&'a [u8]> {
        let data = self.as_slice();
        match offset.checked_add(len) {
            Some(end) if end <= data.len() => Ok(&data[offset..end]),
            _ => Err(self.out_of_range(offset, len)),
        }
    }

    pub fn read<T: Scalar>(&self, offset: usize, endian: Endianness) -> Result<T> {
        let buf = self.slice(offset, T::WIDTH)?;
        Ok(T::decode(buf, endian))
    }

    /// Read at the cursor, then advance it by the value's width.
    /// The cursor is left alone when the read fails.
    pub fn read_next<T: Scalar>(&self, cursor: &mut Cursor, endian: Endianness) -> Result<T> {
        let value = self.read::<T>(cursor.offset(), endian)?;
        cursor.move_forward(T::WIDTH);
        Ok(value)
    }

    typed_reads! {
        u8 => read_u8, next_u8;
        i8 => read_i8, next_i8;
        u16 => read_u16, next_u16;
        i16 => read_i16, next_i16;
        u32 => read_u32, next_u32;
        i32 => read_i32, next_i32;
        u64 => read_u64, next_u64;
        i64 => read_i64, next_i64;
        f32 => read_f32, next_f32;
        f64 => read_f64, next_f64;
    }

    /// Unsigned integer of `width` bytes (1..=8).
    pub fn read_uint(&self, offset: usize, width: usize, endian: Endianness) -> Result<u64> {
        if !(1..=8).contains(&width) {
            return Err(AssetError::UnsupportedWidth(width));
        }
        let buf = self.slice(offset, width)?;
        Ok(match endian {
            Endianness::Little => LittleEndian::read_uint(buf, width),
            Endianness::Big => BigEndian::read_uint(buf, width),
        })
    }

    /// Signed integer of `width` bytes (1..=8), sign-extended.
    pub fn read_int(&self, offset: usize, width: usize, endian: Endianness) -> Result<i64> {
        if !(1..=8).contains(&width) {
            return Err(AssetError::UnsupportedWidth(width));
        }
        let buf = self.slice(offset, width)?;
        Ok(match endian {
            Endianness::Little => LittleEndian::read_int(buf, width),
            Endianness::Big => BigEndian::read_int(buf, width),
        })
    }

    pub fn read_bytes(&self, offset: usize, len: usize) -> Result<Vec<u8>> {
        Ok(self.slice(offset, len)?.to_vec())
    }

    pub fn read_bytes_next(&self, cursor: &mut Cursor, len: usize) -> Result<Vec<u8>> {
        let bytes = self.read_bytes(cursor.offset(), len)?;
        cursor.move_forward(len);
        Ok(bytes)
    }

    /// Bytes from `offset` up to (not including) the next NUL, or to the end of the view.
    pub fn read_null_terminated_bytes(&self, offset: usize) -> Result<&'a [u8]> {
        let data = self.as_slice();
        if offset >= data.len() {
            return Err(self.out_of_range(offset, 1));
        }
        let rest = &data[offset..];
        let end = rest.iter().position(|&b| b == 0).unwrap_or(rest.len());
        Ok(&rest[..end])
    }

    /// A NUL-terminated string decoded with `encoding`.
    pub fn read_cstring(&self, offset: usize, encoding: Encoding) -> Result<String> {
        let raw = self.read_null_terminated_bytes(offset)?;
        Ok(Decoder::new(encoding).decode(raw).into_owned())
    }

    /// Like [`read_cstring`](Self::read_cstring); the cursor moves past the string's bytes
    /// but stays on the terminator.
    pub fn read_cstring_next(&self, cursor: &mut Cursor, encoding: Encoding) -> Result<String> {
        let raw = self.read_null_terminated_bytes(cursor.offset())?;
        cursor.move_forward(raw.len());
        Ok(Decoder::new(encoding).decode(raw).into_owned())
    }

    pub fn read_shift_jis_string(&self, offset: usize, len: usize) -> Result<String> {
        let raw = self.slice(offset, len)?;
        Ok(Decoder::new(Encoding::ShiftJis).decode(raw).into_owned())
    }

    /// 7-bit text; returns `hex:<bytes>` when any byte has the high bit set.
    pub fn read_ascii_string(&self, offset: usize, len: usize) -> Result<String> {
        let raw = self.slice(offset, len)?;
        Ok(Decoder::new(Encoding::Ascii).decode(raw).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [u8; 10] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0xfe, 0xff];

    #[test]
    fn little_endian_by_default() {
        let r = AssetReader::new(&SAMPLE);
        assert_eq!(r.read_u16(0).unwrap(), 0x0201);
        assert_eq!(r.read_u32(0).unwrap(), 0x04030201);
        assert_eq!(r.read_u64(0).unwrap(), 0x0807060504030201);
        assert_eq!(r.read_i16(8).unwrap(), -2);
        assert_eq!(r.read_i8(9).unwrap(), -1);
    }

    #[test]
    fn big_endian_on_request() {
        let r = AssetReader::new(&SAMPLE);
        assert_eq!(r.read::<u16>(0, Endianness::Big).unwrap(), 0x0102);
        assert_eq!(r.read::<u32>(0, Endianness::Big).unwrap(), 0x01020304);
        assert_eq!(r.read::<i16>(8, Endianness::Big).unwrap(), -257);
    }

    #[test]
    fn floats() {
        let mut bytes = 1.5f32.to_le_bytes().to_vec();
        bytes.extend_from_slice(&(-2.25f64).to_be_bytes());
        let r = AssetReader::new(&bytes);
        assert_eq!(r.read_f32(0).unwrap(), 1.5);
        assert_eq!(r.read::<f64>(4, Endianness::Big).unwrap(), -2.25);
    }

    #[test]
    fn cursor_reads_match_direct_reads() {
        let r = AssetReader::new(&SAMPLE);
        for offset in 0..SAMPLE.len() - 3 {
            let mut c = r.start_reading(offset);
            assert_eq!(r.next_u32(&mut c).unwrap(), r.read_u32(offset).unwrap());
            assert_eq!(c.offset(), offset + 4);
        }

        let mut c = Cursor::default();
        r.next_u8(&mut c).unwrap();
        r.next_u16(&mut c).unwrap();
        r.next_i32(&mut c).unwrap();
        assert_eq!(c.offset(), 7);
    }

    #[test]
    fn out_of_range_reads_fail_without_moving_the_cursor() {
        let r = AssetReader::new(&SAMPLE);
        assert!(matches!(
            r.read_u32(7),
            Err(AssetError::OutOfRange { offset: 7, len: 4, .. })
        ));
        assert!(r.read_u8(10).is_err());
        assert!(r.read_u64(usize::MAX).is_err());
        assert!(r.read_bytes(8, 3).is_err());

        let mut c = r.start_reading(8);
        assert!(r.next_u32(&mut c).is_err());
        assert_eq!(c.offset(), 8);
    }

    #[test]
    fn bytes_are_copied() {
        let r = AssetReader::new(&SAMPLE);
        let mut c = r.start_reading(1);
        assert_eq!(r.read_bytes_next(&mut c, 3).unwrap(), vec![2, 3, 4]);
        assert_eq!(c.offset(), 4);
        assert_eq!(r.read_bytes(10, 0).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn variable_width_integers() {
        let r = AssetReader::new(&SAMPLE);
        assert_eq!(r.read_uint(0, 3, Endianness::Little).unwrap(), 0x030201);
        assert_eq!(r.read_uint(0, 3, Endianness::Big).unwrap(), 0x010203);
        assert_eq!(r.read_int(8, 2, Endianness::Little).unwrap(), -2);
        assert!(matches!(
            r.read_uint(0, 0, Endianness::Little),
            Err(AssetError::UnsupportedWidth(0))
        ));
        assert!(matches!(
            r.read_int(0, 9, Endianness::Little),
            Err(AssetError::UnsupportedWidth(9))
        ));
    }

    #[test]
    fn rebased_views_use_local_offsets() {
        let r = AssetReader::new(&SAMPLE);
        let view = r.with_offset(4).unwrap();
        assert_eq!(view.base(), 4);
        assert_eq!(view.len(), 6);
        assert_eq!(view.read_u8(0).unwrap(), 0x05);

        let nested = view.with_offset(2).unwrap();
        assert_eq!(nested.base(), 6);
        assert_eq!(nested.read_u16(0).unwrap(), 0x0807);
        assert!(nested.read_u32(2).is_err());
    }

    #[test]
    fn rebase_bounds() {
        let r = AssetReader::new(&SAMPLE);
        assert!(r.with_offset(10).unwrap().is_empty());
        assert!(matches!(
            r.with_offset(11),
            Err(AssetError::OutOfRange { offset: 11, .. })
        ));
    }

    #[test]
    fn null_terminated_bytes() {
        let data = b"Hi\0there";
        let r = AssetReader::new(data);
        assert_eq!(r.read_null_terminated_bytes(0).unwrap(), b"Hi");
        assert_eq!(r.read_null_terminated_bytes(2).unwrap(), b"");
        // the end of the buffer terminates too
        assert_eq!(r.read_null_terminated_bytes(3).unwrap(), b"there");
        assert!(r.read_null_terminated_bytes(8).is_err());
    }

    #[test]
    fn cstrings() {
        let data = [b'A', b'B', 0, 0x82, 0xa0, 0, b'x', 0x90];
        let r = AssetReader::new(&data);
        assert_eq!(r.read_cstring(0, Encoding::Ascii).unwrap(), "AB");
        assert_eq!(r.read_cstring(3, Encoding::ShiftJis).unwrap(), "あ");
        assert_eq!(r.read_cstring(6, Encoding::Ascii).unwrap(), "hex:7890");

        let mut c = Cursor::default();
        assert_eq!(r.read_cstring_next(&mut c, Encoding::Utf8).unwrap(), "AB");
        assert_eq!(c.offset(), 2);
    }

    #[test]
    fn fixed_length_strings() {
        let data = [0x82, 0xa0, b'o', b'k'];
        let r = AssetReader::new(&data);
        assert_eq!(r.read_shift_jis_string(0, 2).unwrap(), "あ");
        assert_eq!(r.read_ascii_string(2, 2).unwrap(), "ok");
        assert_eq!(r.read_ascii_string(0, 2).unwrap(), "hex:82A0");
    }
}
