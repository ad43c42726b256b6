//! Per-channel intensity histograms.
//!
//! One pass over RGBA samples fills three 256-bin tables, one per color channel. The
//! bin index is the 8-bit intensity itself. Alpha is skipped.

use crate::errors::{HistogramError, Result};
use crate::image_loader::{extract_pixels, ImageSample, PixelSamples, CHANNELS};

pub const NUM_BINS: usize = 256;

/// Extracts the pixels of a decoded image and counts them. The extraction surface is
/// dropped before this returns.
pub fn compute_histogram(sample: &ImageSample) -> Result<RgbHistogram> {
    let samples = extract_pixels(sample)?;
    let histogram = RgbHistogram::from_samples(&samples)?;
    log::debug!(
        "Histogram for '{}': {} pixels",
        sample.name(),
        histogram.pixel_count()
    );
    Ok(histogram)
}

/// Counts for one channel, indexed by intensity 0..=255.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelHistogram {
    bins: [u32; NUM_BINS],
}

impl Default for ChannelHistogram {
    fn default() -> Self {
        Self {
            bins: [0; NUM_BINS],
        }
    }
}

impl ChannelHistogram {
    #[inline]
    pub fn record(&mut self, value: u8) {
        self.bins[value as usize] += 1;
    }

    pub fn count(&self, value: u8) -> u32 {
        self.bins[value as usize]
    }

    pub fn bins(&self) -> &[u32; NUM_BINS] {
        &self.bins
    }

    pub fn total(&self) -> u64 {
        self.bins.iter().map(|&c| c as u64).sum()
    }

    pub fn max_count(&self) -> u32 {
        self.bins.iter().copied().max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.bins.iter().all(|&c| c == 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
        }
    }

    /// Byte offset of this channel inside an RGBA pixel
    pub fn offset(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RgbHistogram {
    pub red: ChannelHistogram,
    pub green: ChannelHistogram,
    pub blue: ChannelHistogram,
}

impl RgbHistogram {
    /// Counts every pixel of an extracted image. The sample buffer has to line up with
    /// the image dimensions; a mismatch means extraction went wrong upstream.
    pub fn from_samples(samples: &PixelSamples) -> Result<Self> {
        let expected = samples.width() as usize * samples.height() as usize * CHANNELS;
        let bytes = samples.as_bytes();
        if bytes.len() != expected {
            return Err(HistogramError::SampleLayout {
                expected,
                actual: bytes.len(),
            });
        }
        Self::from_rgba(bytes)
    }

    /// Counts interleaved RGBA bytes. An empty slice gives three empty histograms.
    pub fn from_rgba(data: &[u8]) -> Result<Self> {
        if data.len() % CHANNELS != 0 {
            return Err(HistogramError::SampleLayout {
                expected: data.len() - data.len() % CHANNELS,
                actual: data.len(),
            });
        }

        let mut histogram = Self::default();
        for pixel in data.chunks_exact(CHANNELS) {
            histogram.red.record(pixel[0]);
            histogram.green.record(pixel[1]);
            histogram.blue.record(pixel[2]);
        }

        Ok(histogram)
    }

    pub fn channel(&self, channel: Channel) -> &ChannelHistogram {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    /// Number of pixels counted (the same for every channel)
    pub fn pixel_count(&self) -> u64 {
        self.red.total()
    }

    pub fn max_count(&self) -> u32 {
        Channel::ALL
            .iter()
            .map(|&c| self.channel(c).max_count())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pixel() {
        let hist = RgbHistogram::from_rgba(&[10, 200, 0, 255]).unwrap();

        assert_eq!(hist.red.count(10), 1);
        assert_eq!(hist.green.count(200), 1);
        assert_eq!(hist.blue.count(0), 1);
        for channel in Channel::ALL {
            assert_eq!(hist.channel(channel).total(), 1);
        }
    }

    #[test]
    fn test_alpha_is_ignored() {
        let opaque = RgbHistogram::from_rgba(&[1, 2, 3, 255, 4, 5, 6, 255]).unwrap();
        let clear = RgbHistogram::from_rgba(&[1, 2, 3, 0, 4, 5, 6, 17]).unwrap();
        assert_eq!(opaque, clear);
    }

    #[test]
    fn test_empty_input() {
        let hist = RgbHistogram::from_rgba(&[]).unwrap();
        assert!(hist.red.is_empty() && hist.green.is_empty() && hist.blue.is_empty());
        assert_eq!(hist.pixel_count(), 0);
        assert_eq!(hist.max_count(), 0);
    }

    #[test]
    fn test_partial_pixel_is_a_layout_error() {
        let err = RgbHistogram::from_rgba(&[1, 2, 3, 4, 5]).unwrap_err();
        assert!(matches!(err, HistogramError::SampleLayout { expected: 4, actual: 5 }));
    }

    #[test]
    fn test_max_count_across_channels() {
        let data = [0, 0, 9, 255, 0, 1, 9, 255, 0, 2, 9, 255];
        let hist = RgbHistogram::from_rgba(&data).unwrap();
        assert_eq!(hist.max_count(), 3);
        assert_eq!(hist.green.max_count(), 1);
    }
}
