use std::io::Cursor;

use bmpunveil::bitmap::consts;
use bmpunveil::bitmap::InfoHeader;
use bmpunveil::*;
use pretty_assertions::assert_eq;

/// Build a BITMAPINFOHEADER file around `pixels`
fn info_bitmap(width: u32, height: u32, bpp: u16, compression: u32, pixels: &[u8]) -> Vec<u8> {
    let mut data = Vec::new();
    let file_size = 54 + pixels.len() as u32;
    data.extend_from_slice(b"BM");
    data.extend_from_slice(&file_size.to_le_bytes());
    data.extend_from_slice(&[0, 0, 0, 0]);
    data.extend_from_slice(&54u32.to_le_bytes());
    data.extend_from_slice(&40u32.to_le_bytes());
    data.extend_from_slice(&width.to_le_bytes());
    data.extend_from_slice(&height.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes());
    data.extend_from_slice(&bpp.to_le_bytes());
    data.extend_from_slice(&compression.to_le_bytes());
    data.extend_from_slice(&(pixels.len() as u32).to_le_bytes());
    data.extend_from_slice(&[0u8; 16]);
    assert_eq!(data.len(), 54);
    data.extend_from_slice(pixels);
    data
}

/// Build a BITMAPCOREHEADER file with `gap` bytes before the pixels
fn core_bitmap(width: u16, height: u16, gap: usize, pixels: &[u8]) -> Vec<u8> {
    let offset = (26 + gap) as u32;
    let mut data = Vec::new();
    data.extend_from_slice(b"BM");
    data.extend_from_slice(&(offset + pixels.len() as u32).to_le_bytes());
    data.extend_from_slice(&[0, 0, 0, 0]);
    data.extend_from_slice(&offset.to_le_bytes());
    data.extend_from_slice(&12u32.to_le_bytes());
    data.extend_from_slice(&width.to_le_bytes());
    data.extend_from_slice(&height.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes());
    data.extend_from_slice(&24u16.to_le_bytes());
    data.extend(std::iter::repeat(0xAB).take(gap));
    data.extend_from_slice(pixels);
    data
}

fn embed(message: &[u8], carrier: &mut [u8]) {
    for (i, byte) in message.iter().enumerate() {
        for bit in 0..8 {
            let pixel = &mut carrier[i * 8 + bit];
            *pixel = (*pixel & 0xFE) | ((byte >> bit) & 1);
        }
    }
}

#[test]
fn two_by_one_bitmap_has_no_message() {
    let data = info_bitmap(2, 1, 24, 0, &[0x01, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00]);
    let bitmap = Bitmap::read(&mut Cursor::new(data)).unwrap();
    assert!(bitmap.is_decodable());
    assert_eq!(bitmap.pixels().len(), 8);
    assert_eq!(decode_message(&bitmap).unwrap(), Vec::<u8>::new());
}

#[test]
fn message_round_trips_through_info_bitmap() {
    // 4 pixels per row keeps the rows free of padding
    let text = b"The quick brown fox jumps over the lazy dog";
    let (width, height) = (4u32, 40u32);
    let mut pixels: Vec<u8> = (0..width * height * 3).map(|i| (i * 7) as u8).collect();
    embed(text, &mut pixels);

    let bitmap = Bitmap::from_bytes(&info_bitmap(width, height, 24, 0, &pixels)).unwrap();
    bitmap.check_decodable().unwrap();
    let message = decode_message(&bitmap).unwrap();

    assert_eq!(message.len(), (3 * width * height / 8) as usize);
    assert_eq!(&message[..text.len()], &text[..]);
}

#[test]
fn core_bitmap_skips_color_table_gap() {
    let mut pixels = vec![0u8; 8 * 3];
    embed(b"ok!", &mut pixels);
    let bitmap = Bitmap::from_bytes(&core_bitmap(8, 1, 12, &pixels)).unwrap();

    match *bitmap.dib_header() {
        DibHeader::Core(ref core) => assert_eq!((core.width, core.height), (8, 1)),
        ref other => panic!("unexpected header {:?}", other),
    }
    assert!(bitmap.is_decodable());
    assert_eq!(decode_message(&bitmap).unwrap(), b"ok!".to_vec());
}

#[test]
fn padded_rows_need_the_padded_layout() {
    // 1 pixel per row: 3 carrier bytes and 1 padding byte per row
    let text = b"pad";
    let mut carrier = vec![0u8; 24];
    embed(text, &mut carrier);
    let mut pixels = Vec::new();
    for row in carrier.chunks(3) {
        pixels.extend_from_slice(row);
        pixels.push(0xFF);
    }

    let bitmap = Bitmap::from_bytes(&info_bitmap(1, 8, 24, 0, &pixels)).unwrap();
    let packed = decode_message(&bitmap).unwrap();
    assert_ne!(packed, text.to_vec());

    let options = DecodeOptions { layout: RowLayout::Padded };
    assert_eq!(decode_message_with(&bitmap, &options).unwrap(), text.to_vec());
}

#[test]
fn compressed_bitmap_is_not_decodable() {
    let data = info_bitmap(2, 1, 24, consts::BI_RLE8_COMPRESSION, &[0u8; 8]);
    let bitmap = Bitmap::from_bytes(&data).unwrap();
    let err = bitmap.check_decodable().unwrap_err();
    assert_eq!(err.stage(), Stage::Decodability);
    match err {
        Error::NotDecodable(Reason::Compression(1)) => {}
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn eight_bit_bitmap_is_not_decodable() {
    // 8 bpp rows of 2 pixels still pad to 4 bytes
    let bitmap = Bitmap::from_bytes(&info_bitmap(2, 2, 8, 0, &[0u8; 8])).unwrap();
    assert!(!bitmap.is_decodable());
}

#[test]
fn v5_header_is_unsupported_not_malformed() {
    let mut data = info_bitmap(2, 1, 24, 0, &[0u8; 8]);
    data[14..18].copy_from_slice(&124u32.to_le_bytes());
    let err = Bitmap::from_bytes(&data).unwrap_err();
    assert_eq!(err.stage(), Stage::FormatSupport);
}

#[test]
fn truncated_file_is_a_header_read_failure() {
    let data = info_bitmap(4, 4, 24, 0, &[0u8; 48]);
    for &len in &[0usize, 13, 17, 40, 54, 80] {
        let err = Bitmap::from_bytes(&data[..len]).unwrap_err();
        assert_eq!(err.stage(), Stage::HeaderRead, "truncated to {}", len);
    }
}

#[test]
fn pixel_offset_past_the_end_fails() {
    let mut data = info_bitmap(2, 1, 24, 0, &[0u8; 8]);
    data[10..14].copy_from_slice(&1000u32.to_le_bytes());
    match Bitmap::from_bytes(&data) {
        Err(Error::ShortRead { .. }) => {}
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn header_dump_matches_fields() {
    let bitmap = Bitmap::from_bytes(&info_bitmap(2, 1, 24, 0, &[0u8; 8])).unwrap();
    let expected = "Signature: 0x424D (BM)\n\
                    File Size: 62\n\
                    Reserved: 0x00\n\
                    Image Offset: 54\n\
                    DIB Header size: 40\n\
                    Width in pixels: 2\n\
                    Height in pixels: 1\n\
                    Color planes: 1\n\
                    Bits per pixel: 24\n\
                    Compression method: 0 (BI_RGB)\n\
                    Image size: 8\n\
                    Horizontal res: 0\n\
                    Vertical res: 0\n\
                    Colors in palette: 0\n\
                    Important colors: 0\n";
    assert_eq!(bitmap.to_string(), expected);
    assert_eq!(
        *bitmap.dib_header(),
        DibHeader::Info(InfoHeader {
            width: 2,
            height: 1,
            color_planes: 1,
            bits_per_pixel: 24,
            compression: 0,
            image_size: 8,
            horizontal_res: 0,
            vertical_res: 0,
            palette_colors: 0,
            important_colors: 0,
        })
    );
}

#[test]
fn huge_geometry_is_an_allocation_failure() {
    let data = info_bitmap(0xFFFF_FFFF, 0xFFFF_FFFF, 24, 0, &[0u8; 8]);
    match Bitmap::from_bytes(&data) {
        Err(Error::Allocation { stage: Stage::HeaderRead, .. }) => {}
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn negative_height_fails_without_abort() {
    // -2 read unsigned asks for 34 GB of pixels
    let data = info_bitmap(2, (-2i32) as u32, 24, 0, &[0u8; 16]);
    let err = Bitmap::from_bytes(&data).unwrap_err();
    assert_eq!(err.stage(), Stage::HeaderRead);
    match err {
        Error::Allocation { bytes, .. } => assert_eq!(bytes, 8 * 0xFFFF_FFFE),
        Error::ShortRead { needed, available, .. } => {
            assert_eq!((needed, available), (8 * 0xFFFF_FFFE, 16));
        }
        other => panic!("unexpected {:?}", other),
    }
}
