use crate::errors::{HistogramError, Result};
use super::sample::ImageSample;

pub const CHANNELS: usize = 4;

/// Raw RGBA samples of one image, row-major, four bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelSamples {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelSamples {
    /// Wraps an existing buffer. The length has to be exactly `width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = surface_len(width, height)?;
        if data.len() != expected {
            return Err(HistogramError::SampleLayout {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len() / CHANNELS
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

/// Draws the image onto a fresh RGBA surface of exactly its own size and hands back
/// the surface's bytes.
pub fn extract_pixels(sample: &ImageSample) -> Result<PixelSamples> {
    let (width, height) = (sample.width(), sample.height());
    if width == 0 || height == 0 {
        return Err(HistogramError::EmptyImage { width, height });
    }

    surface_len(width, height)?;
    let surface = sample.image().to_rgba8();
    log::trace!("Extracted {}x{} RGBA surface for '{}'", width, height, sample.name());

    PixelSamples::from_raw(width, height, surface.into_raw())
}

fn surface_len(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or_else(|| HistogramError::SurfaceUnavailable {
            message: format!("{}x{} RGBA surface does not fit in memory", width, height),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, GrayImage, Rgba, RgbaImage};

    #[test]
    fn test_extract_row_major_rgba() {
        let mut img = RgbaImage::new(2, 2);
        img.put_pixel(0, 0, Rgba([1, 2, 3, 4]));
        img.put_pixel(1, 0, Rgba([5, 6, 7, 8]));
        img.put_pixel(0, 1, Rgba([9, 10, 11, 12]));
        img.put_pixel(1, 1, Rgba([13, 14, 15, 16]));
        let sample = ImageSample::new("grid.png", DynamicImage::ImageRgba8(img));

        let pixels = extract_pixels(&sample).unwrap();
        assert_eq!(pixels.as_bytes(), &(1..=16).collect::<Vec<u8>>()[..]);
        assert_eq!(pixels.pixel_count(), 4);
    }

    #[test]
    fn test_extract_expands_gray_to_rgba() {
        let gray = GrayImage::from_pixel(3, 1, image::Luma([77]));
        let sample = ImageSample::new("gray.png", DynamicImage::ImageLuma8(gray));

        let pixels = extract_pixels(&sample).unwrap();
        assert_eq!(pixels.as_bytes().len(), 3 * 4);
        assert!(pixels.as_bytes().chunks_exact(4).all(|p| p == [77, 77, 77, 255]));
    }

    #[test]
    fn test_extract_zero_sized_image() {
        let sample = ImageSample::new("empty.png", DynamicImage::new_rgba8(0, 5));
        assert!(matches!(
            extract_pixels(&sample),
            Err(HistogramError::EmptyImage { width: 0, height: 5 })
        ));
    }

    #[test]
    fn test_from_raw_rejects_short_buffer() {
        let err = PixelSamples::from_raw(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(err, HistogramError::SampleLayout { expected: 16, actual: 15 }));
        assert!(!err.is_recoverable());
    }
}
