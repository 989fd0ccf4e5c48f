/// Size of bitmap file header, identical for every DIB variant
pub const FILE_HEADER_SIZE: usize = 14;

/// Bytes of the size field at the start of every DIB header
pub const DIB_SIZE_FIELD: usize = 4;

/// Position of file size field in file header
pub const FILE_SIZE_POSITION: usize = 0x2;

/// Position of the two reserved fields in file header
pub const RESERVED0_POSITION: usize = 0x6;
pub const RESERVED1_POSITION: usize = 0x8;

/// Position of offset to pixels field in file header
pub const OFFSET_TO_PIXELS_POSITION: usize = 0xA;

/// Position of size of DIB Header, right after the file header
pub const DIB_SIZE_POSITION: usize = 0xE;

/*
 * File signatures, the two ASCII bytes read as one big endian code
 */

pub const SIGNATURE_BM: u16 = 0x424D;
pub const SIGNATURE_BA: u16 = 0x4241;
pub const SIGNATURE_CI: u16 = 0x4349;
pub const SIGNATURE_CP: u16 = 0x4350;
pub const SIGNATURE_IC: u16 = 0x4943;
pub const SIGNATURE_PT: u16 = 0x5054;

/*
 * DIB header variants, identified by their total size in bytes
 */

pub const BITMAPCOREHEADER: u32 = 12;
pub const OS22XBITMAPHEADER_S: u32 = 16;
pub const BITMAPINFOHEADER: u32 = 40;
pub const BITMAPV2INFOHEADER: u32 = 52;
pub const BITMAPV3INFOHEADER: u32 = 56;
pub const OS22XBITMAPHEADER: u32 = 64;
pub const BITMAPV4HEADER: u32 = 108;
pub const BITMAPV5HEADER: u32 = 124;

/*
 * Field positions inside the DIB header body, i.e. after the size field
 */

/// BITMAPCOREHEADER: u16 width, u16 height, u16 planes, u16 depth
pub const CORE_WIDTH_POSITION: usize = 0x0;
pub const CORE_HEIGHT_POSITION: usize = 0x2;
pub const CORE_PLANES_POSITION: usize = 0x4;
pub const CORE_PIXEL_DEPTH_POSITION: usize = 0x6;

/// BITMAPINFOHEADER fields
pub const INFO_WIDTH_POSITION: usize = 0x0;
pub const INFO_HEIGHT_POSITION: usize = 0x4;
pub const INFO_PLANES_POSITION: usize = 0x8;
pub const INFO_PIXEL_DEPTH_POSITION: usize = 0xA;
pub const INFO_COMPRESSION_POSITION: usize = 0xC;
/// Raw bitmap data size in bytes with padding
pub const INFO_IMAGE_SIZE_POSITION: usize = 0x10;
pub const INFO_HORIZONTAL_RES_POSITION: usize = 0x14;
pub const INFO_VERTICAL_RES_POSITION: usize = 0x18;
pub const INFO_PALETTE_POSITION: usize = 0x1C;
pub const INFO_IMPORTANT_COLORS_POSITION: usize = 0x20;

/*
 * Compression types of BITMAPINFOHEADER
 */

/// BI_RGB compression type
pub const BI_RGB_COMPRESSION: u32 = 0;
pub const BI_RLE8_COMPRESSION: u32 = 1;
pub const BI_RLE4_COMPRESSION: u32 = 2;
/// BI_BITFIELDS compression type
pub const BI_BITFIELDS_COMPRESSION: u32 = 3;
pub const BI_JPEG_COMPRESSION: u32 = 4;
pub const BI_PNG_COMPRESSION: u32 = 5;
pub const BI_ALPHABITFIELDS_COMPRESSION: u32 = 6;
pub const BI_CMYK_COMPRESSION: u32 = 11;
pub const BI_CMYKRLE8_COMPRESSION: u32 = 12;
pub const BI_CMYKRLE4_COMPRESSION: u32 = 13;

/// Only depth an LSB message is read from
pub const MESSAGE_PIXEL_DEPTH: u16 = 24;

/// Color channel bytes per 24 bit pixel
pub const BYTES_PER_PIXEL: u64 = 3;

/// Name of a file signature, when it is a known one
pub fn signature_name(signature: u16) -> Option<&'static str> {
    match signature {
        SIGNATURE_BM => Some("BM"),
        SIGNATURE_BA => Some("BA"),
        SIGNATURE_CI => Some("CI"),
        SIGNATURE_CP => Some("CP"),
        SIGNATURE_IC => Some("IC"),
        SIGNATURE_PT => Some("PT"),
        _ => None,
    }
}

/// Name of a DIB header variant, when its size is a known one
pub fn header_name(size: u32) -> Option<&'static str> {
    match size {
        BITMAPCOREHEADER => Some("BITMAPCOREHEADER"),
        OS22XBITMAPHEADER_S => Some("OS22XBITMAPHEADER (short)"),
        BITMAPINFOHEADER => Some("BITMAPINFOHEADER"),
        BITMAPV2INFOHEADER => Some("BITMAPV2INFOHEADER"),
        BITMAPV3INFOHEADER => Some("BITMAPV3INFOHEADER"),
        OS22XBITMAPHEADER => Some("OS22XBITMAPHEADER"),
        BITMAPV4HEADER => Some("BITMAPV4HEADER"),
        BITMAPV5HEADER => Some("BITMAPV5HEADER"),
        _ => None,
    }
}

pub fn compression_name(method: u32) -> Option<&'static str> {
    match method {
        BI_RGB_COMPRESSION => Some("BI_RGB"),
        BI_RLE8_COMPRESSION => Some("BI_RLE8"),
        BI_RLE4_COMPRESSION => Some("BI_RLE4"),
        BI_BITFIELDS_COMPRESSION => Some("BI_BITFIELDS"),
        BI_JPEG_COMPRESSION => Some("BI_JPEG"),
        BI_PNG_COMPRESSION => Some("BI_PNG"),
        BI_ALPHABITFIELDS_COMPRESSION => Some("BI_ALPHABITFIELDS"),
        BI_CMYK_COMPRESSION => Some("BI_CMYK"),
        BI_CMYKRLE8_COMPRESSION => Some("BI_CMYKRLE8"),
        BI_CMYKRLE4_COMPRESSION => Some("BI_CMYKRLE4"),
        _ => None,
    }
}
