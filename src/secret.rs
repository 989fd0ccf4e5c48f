use std::io::Read;
use std::io::Result as IoResult;

use super::bitmap::consts;
use super::bitmap::row_stride;
use super::bitmap::Bitmap;
use super::error::Error;
use super::error::Result;
use super::error::Stage;

/// How message bits are laid out over the rows of the pixel array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLayout {
    /// Every pixel byte from the start of the array carries a bit, row
    /// padding included. Only exact when `3 * width` is a multiple of 4.
    Packed,
    /// Padding at the end of each row is skipped.
    Padded,
}

impl Default for RowLayout {
    fn default() -> RowLayout {
        RowLayout::Packed
    }
}

#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    pub layout: RowLayout,
}

/// Message geometry of a bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// pixel bytes that carry one message bit each, `3 * width * height`
    pub byte_count: u64,
    /// whole message bytes, `byte_count / 8`
    pub char_count: u64,
}

impl Geometry {
    pub fn of(bitmap: &Bitmap) -> Result<Geometry> {
        let (width, height) = match bitmap.dib_header().dimensions() {
            Some(dimensions) => dimensions,
            None => {
                return Err(Error::UnsupportedDibVariant(
                    bitmap.dib_header().declared_size(),
                ))
            }
        };

        let byte_count = consts::BYTES_PER_PIXEL
            .checked_mul(u64::from(width))
            .and_then(|n| n.checked_mul(u64::from(height)))
            .ok_or(Error::Allocation {
                stage: Stage::Decode,
                bytes: u64::max_value(),
            })?;

        Ok(Geometry {
            byte_count,
            char_count: byte_count / 8,
        })
    }
}

/// Pixel bytes in message order
struct Carrier<'a> {
    pixels: &'a [u8],
    pos: usize,
    /// carrier bytes left to hand out
    remaining: u64,
    /// message bytes per row and the full row stride, when padding is skipped
    rows: Option<(u64, u64)>,
    column: u64,
}

impl<'a> Iterator for Carrier<'a> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.remaining == 0 || self.pos >= self.pixels.len() {
            return None;
        }

        let byte = self.pixels[self.pos];
        self.remaining -= 1;
        self.pos += 1;

        if let Some((row_bytes, stride)) = self.rows {
            self.column += 1;
            if self.column == row_bytes {
                self.column = 0;
                let skip = (stride - row_bytes) as usize;
                self.pos = self.pos.saturating_add(skip);
            }
        }

        Some(byte)
    }
}

/// Reads the hidden message out of a bitmap's pixel array.
///
/// Bit 0 of each message byte is the least significant bit of the first of
/// its eight pixel bytes. Reading stops after `char_count` bytes or when the
/// pixels run out; a trailing group of fewer than eight bits is dropped.
pub struct MessageReader<'a> {
    carrier: Carrier<'a>,
    /// message bytes not yet produced
    remaining: u64,
}

impl<'a> MessageReader<'a> {

    /// Assumes `bitmap` passed `Bitmap::check_decodable`
    pub fn new(bitmap: &'a Bitmap, options: &DecodeOptions) -> Result<MessageReader<'a>> {
        let geometry = Geometry::of(bitmap)?;
        debug!(
            "decoding {} message bytes from {} pixel bytes ({:?})",
            geometry.char_count, geometry.byte_count, options.layout
        );

        let rows = match options.layout {
            RowLayout::Packed => None,
            RowLayout::Padded => {
                let width = bitmap.dib_header().width().unwrap_or(0);
                let row_bytes = consts::BYTES_PER_PIXEL * u64::from(width);
                let stride = row_stride(consts::MESSAGE_PIXEL_DEPTH, width).unwrap_or(row_bytes);
                Some((row_bytes, stride))
            }
        };

        Ok(MessageReader {
            carrier: Carrier {
                pixels: bitmap.pixels().as_bytes(),
                pos: 0,
                remaining: geometry.byte_count,
                rows,
                column: 0,
            },
            remaining: geometry.char_count,
        })
    }

    /// Message bytes still to come, if the pixels hold out
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    fn next_byte(&mut self) -> Option<u8> {
        let mut byte = 0u8;
        for bit in 0..8 {
            match self.carrier.next() {
                Some(pixel) => byte |= (pixel & 1) << bit,
                None => {
                    // partial group, nothing more to read
                    self.remaining = 0;
                    return None;
                }
            }
        }
        trace!("read byte {:x}", byte);
        Some(byte)
    }
}

impl<'a> Read for MessageReader<'a> {
    fn read(&mut self, buf: &mut [u8]) -> IoResult<usize> {
        let mut read_bytes = 0usize;

        while read_bytes != buf.len() && self.remaining > 0 {
            match self.next_byte() {
                Some(byte) => {
                    buf[read_bytes] = byte;
                    read_bytes += 1;
                    self.remaining -= 1;
                }
                None => break,
            }
        }

        Ok(read_bytes)
    }
}

/// Decode the hidden message of a decodable bitmap
pub fn decode_message(bitmap: &Bitmap) -> Result<Vec<u8>> {
    decode_message_with(bitmap, &DecodeOptions::default())
}

pub fn decode_message_with(bitmap: &Bitmap, options: &DecodeOptions) -> Result<Vec<u8>> {
    let mut reader = MessageReader::new(bitmap, options)?;

    // the output can't outgrow one byte per eight pixel bytes
    let capacity = reader.remaining().min(bitmap.pixels().len() as u64 / 8);
    let mut message = Vec::new();
    if message.try_reserve_exact(capacity as usize).is_err() {
        return Err(Error::Allocation {
            stage: Stage::Decode,
            bytes: capacity,
        });
    }

    reader.read_to_end(&mut message)?;
    debug!("decoded {} message bytes", message.len());
    Ok(message)
}
