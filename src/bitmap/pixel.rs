use std::ops::Deref;

/// Size in bytes of a pixel array whose rows are aligned to 4 bytes.
///
/// `ceil(bits_per_pixel * width / 32) * 4 * height`, or `None` on overflow.
pub fn pixel_array_size(bits_per_pixel: u16, width: u32, height: u32) -> Option<u64> {
    row_stride(bits_per_pixel, width)?.checked_mul(u64::from(height))
}

/// Bytes of one row including its padding
pub fn row_stride(bits_per_pixel: u16, width: u32) -> Option<u64> {
    let row_bits = u64::from(bits_per_pixel).checked_mul(u64::from(width))?;
    Some((row_bits + 31) / 32 * 4)
}

/// The raw pixel array, exactly as long as its headers declare
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelBuffer {
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

impl From<Vec<u8>> for PixelBuffer {
    fn from(data: Vec<u8>) -> PixelBuffer {
        PixelBuffer { data }
    }
}

impl Deref for PixelBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_padded_to_four_bytes() {
        assert_eq!(row_stride(24, 1), Some(4));
        assert_eq!(row_stride(24, 2), Some(8));
        assert_eq!(row_stride(24, 4), Some(12));
        assert_eq!(row_stride(1, 33), Some(8));
        assert_eq!(pixel_array_size(24, 2, 1), Some(8));
        assert_eq!(pixel_array_size(24, 3, 3), Some(36));
        assert_eq!(pixel_array_size(24, 0, 10), Some(0));
    }

    #[test]
    fn huge_geometry_does_not_wrap() {
        let size = pixel_array_size(u16::max_value(), u32::max_value(), u32::max_value());
        assert_eq!(size, None);
        assert_eq!(
            pixel_array_size(24, u32::max_value(), 1),
            Some((24 * u64::from(u32::max_value()) + 31) / 32 * 4)
        );
    }

    #[test]
    fn buffer_derefs_to_bytes() {
        let pixels = PixelBuffer::from(vec![1u8, 2, 3]);
        assert_eq!(pixels.len(), 3);
        assert_eq!(&pixels[1..], &[2, 3]);
        assert_eq!(pixels.into_inner(), vec![1, 2, 3]);
    }
}
