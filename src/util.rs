use byteorder::BigEndian;
use byteorder::ByteOrder;
use byteorder::LittleEndian;

use super::error::Error;
use super::error::Result;

/// Borrow `size` bytes at `position`, or fail without touching the slice
#[inline(always)]
fn field(buf: &[u8], position: usize, size: usize) -> Result<&[u8]> {
    match position.checked_add(size) {
        Some(end) if end <= buf.len() => Ok(&buf[position..end]),
        _ => Err(Error::short_read(
            "header field",
            position.saturating_add(size),
            buf.len(),
        )),
    }
}

/// read an u32 from buffer at position
/// The number is in little endian format in buffer
#[inline(always)]
pub fn read_le_u32(buf: &[u8], position: usize) -> Result<u32> {
    Ok(LittleEndian::read_u32(field(buf, position, 4)?))
}

/// read an u16 from buffer at position
/// The number is in little endian format in buffer
#[inline(always)]
pub fn read_le_u16(buf: &[u8], position: usize) -> Result<u16> {
    Ok(LittleEndian::read_u16(field(buf, position, 2)?))
}

/// read an u16 from buffer at position, first byte most significant
#[inline(always)]
pub fn read_be_u16(buf: &[u8], position: usize) -> Result<u16> {
    Ok(BigEndian::read_u16(field(buf, position, 2)?))
}

/// write an u32 number into buffer in little endian at position
#[inline(always)]
pub fn write_le_u32(buf: &mut [u8], position: usize, number: u32) {
    LittleEndian::write_u32(&mut buf[position..position + 4], number);
}

/// write an u16 number into buffer in little endian at position
#[inline(always)]
pub fn write_le_u16(buf: &mut [u8], position: usize, number: u16) {
    LittleEndian::write_u16(&mut buf[position..position + 2], number);
}

#[inline(always)]
pub fn write_be_u16(buf: &mut [u8], position: usize, number: u16) {
    BigEndian::write_u16(&mut buf[position..position + 2], number);
}
