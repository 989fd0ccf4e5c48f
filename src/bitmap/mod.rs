use std::fmt::Display;
use std::fmt::Formatter;
use std::io::Cursor;
use std::io::Read;
use std::io::Seek;

pub mod consts;
mod header;
mod pixel;

pub use self::header::dib_header_size;
pub use self::header::CoreHeader;
pub use self::header::DibHeader;
pub use self::header::FileHeader;
pub use self::header::InfoHeader;
pub use self::pixel::pixel_array_size;
pub use self::pixel::row_stride;
pub use self::pixel::PixelBuffer;
use super::error::Error;
use super::error::Reason;
use super::error::Result;
use super::error::Stage;
use super::io::source::ByteSource;

/// A parsed bitmap file: both headers plus its pixel array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    file_header: FileHeader,
    dib_header: DibHeader,
    pixels: PixelBuffer,
}

impl Bitmap {

    /// Read a bitmap from a seekable source.
    ///
    /// Reads the 14 byte file header and the size lookahead, then the rest of
    /// the DIB header, then seeks to the pixel offset and reads the whole
    /// pixel array. Anything between the DIB header and the pixel offset,
    /// a color table for instance, is skipped.
    pub fn read<T: Read + Seek>(input: &mut T) -> Result<Bitmap> {
        let mut source = ByteSource::from(input);

        let mut head = [0u8; consts::FILE_HEADER_SIZE + consts::DIB_SIZE_FIELD];
        source.read_exact(&mut head, "file header")?;

        let file_header = FileHeader::parse(&head)?;
        let declared_size = dib_header_size(&head)?;
        debug!("file header {:?}, DIB header size {}", file_header, declared_size);

        // only implemented layouts have their body read
        let body = if DibHeader::is_supported_size(declared_size) {
            let len = u64::from(declared_size) - consts::DIB_SIZE_FIELD as u64;
            source.read_vec(len, "DIB header")?
        } else {
            Vec::new()
        };
        let dib_header = DibHeader::parse(declared_size, &body)?;

        let size = Self::pixel_array_len(&dib_header)?;

        source.seek(u64::from(file_header.pixel_offset))?;
        let pixels = source.read_vec(size, "pixel array")?;
        debug!("read {} pixel bytes", pixels.len());

        Ok(Bitmap {
            file_header,
            dib_header,
            pixels: PixelBuffer::from(pixels),
        })
    }

    /// Read a bitmap held in memory
    pub fn from_bytes(data: &[u8]) -> Result<Bitmap> {
        Self::read(&mut Cursor::new(data))
    }

    /// Assemble a bitmap from already parsed parts.
    ///
    /// `pixels` must be exactly as long as the pixel array the DIB header
    /// describes; unsupported headers are refused like in `read`.
    pub fn from_parts(file_header: FileHeader, dib_header: DibHeader, pixels: Vec<u8>) -> Result<Bitmap> {
        let size = Self::pixel_array_len(&dib_header)?;
        if pixels.len() as u64 != size {
            return Err(Error::ShortRead {
                stage: "pixel array",
                needed: size,
                available: pixels.len() as u64,
            });
        }

        Ok(Bitmap {
            file_header,
            dib_header,
            pixels: PixelBuffer::from(pixels),
        })
    }

    /// `from_parts` without the pixel array length check
    #[cfg(test)]
    pub(crate) fn assemble(file_header: FileHeader, dib_header: DibHeader, pixels: Vec<u8>) -> Bitmap {
        Bitmap {
            file_header,
            dib_header,
            pixels: PixelBuffer::from(pixels),
        }
    }

    fn pixel_array_len(dib_header: &DibHeader) -> Result<u64> {
        let (bpp, width, height) = match *dib_header {
            DibHeader::Core(ref h) => (h.bits_per_pixel, u32::from(h.width), u32::from(h.height)),
            DibHeader::Info(ref h) => (h.bits_per_pixel, h.width, h.height),
            DibHeader::Unsupported { declared_size } => {
                return Err(Error::UnsupportedDibVariant(declared_size))
            }
        };

        match pixel_array_size(bpp, width, height) {
            Some(size) => Ok(size),
            None => Err(Error::Allocation {
                stage: Stage::HeaderRead,
                bytes: u64::max_value(),
            }),
        }
    }

    #[inline(always)]
    pub fn file_header(&self) -> &FileHeader {
        &self.file_header
    }

    #[inline(always)]
    pub fn dib_header(&self) -> &DibHeader {
        &self.dib_header
    }

    #[inline(always)]
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    /// Whether an LSB message can be read from this bitmap
    pub fn is_decodable(&self) -> bool {
        self.check_decodable().is_ok()
    }

    /// Like `is_decodable`, reporting the first condition that failed.
    ///
    /// The signature must be `BM`, there must be a single color plane of 24
    /// bits per pixel and, for info headers, no compression and no palette.
    pub fn check_decodable(&self) -> Result<()> {
        let reason = self.rejection();
        match reason {
            None => Ok(()),
            Some(reason) => {
                warn!("file not decodable: {}", reason);
                Err(Error::NotDecodable(reason))
            }
        }
    }

    fn rejection(&self) -> Option<Reason> {
        if self.file_header.signature != consts::SIGNATURE_BM {
            return Some(Reason::Signature(self.file_header.signature));
        }

        let (planes, bpp) = match self.dib_header {
            DibHeader::Core(ref h) => (h.color_planes, h.bits_per_pixel),
            DibHeader::Info(ref h) => {
                if h.compression != consts::BI_RGB_COMPRESSION {
                    return Some(Reason::Compression(h.compression));
                }
                if h.palette_colors != 0 {
                    return Some(Reason::Palette(h.palette_colors));
                }
                (h.color_planes, h.bits_per_pixel)
            }
            DibHeader::Unsupported { declared_size } => {
                return Some(Reason::UnsupportedHeader(declared_size))
            }
        };

        if planes != 1 {
            return Some(Reason::ColorPlanes(planes));
        }
        if bpp != consts::MESSAGE_PIXEL_DEPTH {
            return Some(Reason::BitsPerPixel(bpp));
        }
        None
    }
}

impl Display for Bitmap {
    /// Dump both headers, one field per line
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.file_header, self.dib_header)
    }
}
