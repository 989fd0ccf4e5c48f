use std::fmt::Display;
use std::fmt::Formatter;

use super::consts;
use super::super::error::Error;
use super::super::error::Result;
use super::super::util::read_be_u16;
use super::super::util::read_le_u16;
use super::super::util::read_le_u32;
use super::super::util::write_be_u16;
use super::super::util::write_le_u16;
use super::super::util::write_le_u32;

/// The fixed 14 byte header every bitmap file starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// two signature bytes read as a big endian code, `BM` is 0x424D
    pub signature: u16,
    pub file_size: u32,
    pub reserved0: u16,
    pub reserved1: u16,
    /// offset of the pixel array from the start of file
    pub pixel_offset: u32,
}

impl FileHeader {
    /// Parse the first 14 bytes of `buf`
    pub fn parse(buf: &[u8]) -> Result<FileHeader> {
        if buf.len() < consts::FILE_HEADER_SIZE {
            return Err(Error::short_read(
                "file header",
                consts::FILE_HEADER_SIZE,
                buf.len(),
            ));
        }

        Ok(FileHeader {
            signature: read_be_u16(buf, 0)?,
            file_size: read_le_u32(buf, consts::FILE_SIZE_POSITION)?,
            reserved0: read_le_u16(buf, consts::RESERVED0_POSITION)?,
            reserved1: read_le_u16(buf, consts::RESERVED1_POSITION)?,
            pixel_offset: read_le_u32(buf, consts::OFFSET_TO_PIXELS_POSITION)?,
        })
    }

    pub fn to_bytes(&self) -> [u8; consts::FILE_HEADER_SIZE] {
        let mut buf = [0u8; consts::FILE_HEADER_SIZE];
        write_be_u16(&mut buf, 0, self.signature);
        write_le_u32(&mut buf, consts::FILE_SIZE_POSITION, self.file_size);
        write_le_u16(&mut buf, consts::RESERVED0_POSITION, self.reserved0);
        write_le_u16(&mut buf, consts::RESERVED1_POSITION, self.reserved1);
        write_le_u32(&mut buf, consts::OFFSET_TO_PIXELS_POSITION, self.pixel_offset);
        buf
    }
}

/// Read the declared DIB header size that follows the file header.
///
/// `buf` holds the file start, at least 18 bytes.
pub fn dib_header_size(buf: &[u8]) -> Result<u32> {
    read_le_u32(buf, consts::DIB_SIZE_POSITION)
}

/// BITMAPCOREHEADER, also OS21XBITMAPHEADER
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreHeader {
    pub width: u16,
    pub height: u16,
    pub color_planes: u16,
    pub bits_per_pixel: u16,
}

/// BITMAPINFOHEADER
///
/// Width and height are signed on disk; they are kept unsigned and the
/// orientation of the rows is never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoHeader {
    pub width: u32,
    pub height: u32,
    pub color_planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
    pub horizontal_res: u32,
    pub vertical_res: u32,
    pub palette_colors: u32,
    pub important_colors: u32,
}

/// The DIB header, one variant per supported layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DibHeader {
    Core(CoreHeader),
    Info(InfoHeader),
    /// Any other declared size, kept for diagnostics
    Unsupported { declared_size: u32 },
}

impl DibHeader {
    /// Parse a DIB header body.
    ///
    /// `body` starts right after the 4 byte size field, so a declared size of
    /// `n` has `n - 4` bytes of body. Sizes other than 12 and 40 give
    /// `DibHeader::Unsupported` without reading `body` at all.
    pub fn parse(declared_size: u32, body: &[u8]) -> Result<DibHeader> {
        match declared_size {
            consts::BITMAPCOREHEADER => Self::parse_core(body),
            consts::BITMAPINFOHEADER => Self::parse_info(body),
            _ => {
                warn!(
                    "bitmap format with header size {} ({}) not yet supported",
                    declared_size,
                    consts::header_name(declared_size).unwrap_or("unknown")
                );
                Ok(DibHeader::Unsupported { declared_size })
            }
        }
    }

    /// Whether `declared_size` names a layout `parse` populates
    pub fn is_supported_size(declared_size: u32) -> bool {
        match declared_size {
            consts::BITMAPCOREHEADER | consts::BITMAPINFOHEADER => true,
            _ => false,
        }
    }

    fn parse_core(body: &[u8]) -> Result<DibHeader> {
        let needed = (consts::BITMAPCOREHEADER as usize) - consts::DIB_SIZE_FIELD;
        if body.len() < needed {
            return Err(Error::short_read("core header", needed, body.len()));
        }
        let body = &body[..needed];

        let header = CoreHeader {
            width: read_le_u16(body, consts::CORE_WIDTH_POSITION)?,
            height: read_le_u16(body, consts::CORE_HEIGHT_POSITION)?,
            color_planes: read_le_u16(body, consts::CORE_PLANES_POSITION)?,
            bits_per_pixel: read_le_u16(body, consts::CORE_PIXEL_DEPTH_POSITION)?,
        };
        debug!("core header {:?}", header);
        Ok(DibHeader::Core(header))
    }

    fn parse_info(body: &[u8]) -> Result<DibHeader> {
        let needed = (consts::BITMAPINFOHEADER as usize) - consts::DIB_SIZE_FIELD;
        if body.len() < needed {
            return Err(Error::short_read("info header", needed, body.len()));
        }
        let body = &body[..needed];

        let header = InfoHeader {
            width: read_le_u32(body, consts::INFO_WIDTH_POSITION)?,
            height: read_le_u32(body, consts::INFO_HEIGHT_POSITION)?,
            color_planes: read_le_u16(body, consts::INFO_PLANES_POSITION)?,
            bits_per_pixel: read_le_u16(body, consts::INFO_PIXEL_DEPTH_POSITION)?,
            compression: read_le_u32(body, consts::INFO_COMPRESSION_POSITION)?,
            image_size: read_le_u32(body, consts::INFO_IMAGE_SIZE_POSITION)?,
            horizontal_res: read_le_u32(body, consts::INFO_HORIZONTAL_RES_POSITION)?,
            vertical_res: read_le_u32(body, consts::INFO_VERTICAL_RES_POSITION)?,
            palette_colors: read_le_u32(body, consts::INFO_PALETTE_POSITION)?,
            important_colors: read_le_u32(body, consts::INFO_IMPORTANT_COLORS_POSITION)?,
        };
        debug!("info header {:?}", header);
        Ok(DibHeader::Info(header))
    }

    /// The size this header was declared with
    pub fn declared_size(&self) -> u32 {
        match *self {
            DibHeader::Core(_) => consts::BITMAPCOREHEADER,
            DibHeader::Info(_) => consts::BITMAPINFOHEADER,
            DibHeader::Unsupported { declared_size } => declared_size,
        }
    }

    pub fn width(&self) -> Option<u32> {
        match *self {
            DibHeader::Core(ref h) => Some(u32::from(h.width)),
            DibHeader::Info(ref h) => Some(h.width),
            DibHeader::Unsupported { .. } => None,
        }
    }

    pub fn height(&self) -> Option<u32> {
        match *self {
            DibHeader::Core(ref h) => Some(u32::from(h.height)),
            DibHeader::Info(ref h) => Some(h.height),
            DibHeader::Unsupported { .. } => None,
        }
    }

    pub fn bits_per_pixel(&self) -> Option<u16> {
        match *self {
            DibHeader::Core(ref h) => Some(h.bits_per_pixel),
            DibHeader::Info(ref h) => Some(h.bits_per_pixel),
            DibHeader::Unsupported { .. } => None,
        }
    }

    /// Width and height, unless the layout is unsupported
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match (self.width(), self.height()) {
            (Some(w), Some(h)) => Some((w, h)),
            _ => None,
        }
    }
}

impl Display for FileHeader {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match consts::signature_name(self.signature) {
            Some(name) => writeln!(f, "Signature: 0x{:X} ({})", self.signature, name)?,
            None => writeln!(f, "Signature: 0x{:X}", self.signature)?,
        }
        writeln!(f, "File Size: {}", self.file_size)?;
        writeln!(f, "Reserved: 0x{:X}{:X}", self.reserved0, self.reserved1)?;
        writeln!(f, "Image Offset: {}", self.pixel_offset)
    }
}

impl Display for DibHeader {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match *self {
            DibHeader::Core(ref h) => {
                writeln!(f, "DIB Header size: {}", consts::BITMAPCOREHEADER)?;
                writeln!(f, "Width in pixels: {}", h.width)?;
                writeln!(f, "Height in pixels: {}", h.height)?;
                writeln!(f, "Color planes: {}", h.color_planes)?;
                writeln!(f, "Bits per pixel: {}", h.bits_per_pixel)
            }
            DibHeader::Info(ref h) => {
                writeln!(f, "DIB Header size: {}", consts::BITMAPINFOHEADER)?;
                writeln!(f, "Width in pixels: {}", h.width)?;
                writeln!(f, "Height in pixels: {}", h.height)?;
                writeln!(f, "Color planes: {}", h.color_planes)?;
                writeln!(f, "Bits per pixel: {}", h.bits_per_pixel)?;
                match consts::compression_name(h.compression) {
                    Some(name) => writeln!(f, "Compression method: {} ({})", h.compression, name)?,
                    None => writeln!(f, "Compression method: {}", h.compression)?,
                }
                writeln!(f, "Image size: {}", h.image_size)?;
                writeln!(f, "Horizontal res: {}", h.horizontal_res)?;
                writeln!(f, "Vertical res: {}", h.vertical_res)?;
                writeln!(f, "Colors in palette: {}", h.palette_colors)?;
                writeln!(f, "Important colors: {}", h.important_colors)
            }
            DibHeader::Unsupported { declared_size } => match consts::header_name(declared_size) {
                Some(name) => writeln!(
                    f,
                    "Bitmap format with header size {} ({}) not yet supported for print.",
                    declared_size, name
                ),
                None => writeln!(
                    f,
                    "Bitmap format with header size {} not yet supported for print.",
                    declared_size
                ),
            },
        }
    }
}
