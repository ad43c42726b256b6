use crate::errors::{HistogramError, Result};
use image::{DynamicImage, GenericImageView};

/// A decoded image together with the library name it was selected under.
#[derive(Debug, Clone)]
pub struct ImageSample {
    name: String,
    image: DynamicImage,
}

impl ImageSample {
    pub fn new(name: impl Into<String>, image: DynamicImage) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel_count(&self) -> u64 {
        let (w, h) = self.image.dimensions();
        w as u64 * h as u64
    }
}

/// What the app currently holds for the selected image.
#[derive(Debug, Clone, Default)]
pub enum ImageSlot {
    #[default]
    Empty,
    Loading {
        name: String,
    },
    Ready(ImageSample),
    Failed {
        name: String,
        message: String,
    },
}

impl ImageSlot {
    pub fn name(&self) -> Option<&str> {
        match self {
            ImageSlot::Empty => None,
            ImageSlot::Loading { name } | ImageSlot::Failed { name, .. } => Some(name),
            ImageSlot::Ready(sample) => Some(sample.name()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ImageSlot::Loading { .. })
    }

    /// The decoded image, or an error if nothing is selected or decoding hasn't finished.
    pub fn sample(&self) -> Result<&ImageSample> {
        match self {
            ImageSlot::Ready(sample) => Ok(sample),
            ImageSlot::Empty => Err(HistogramError::NoImageSelected),
            ImageSlot::Loading { name } | ImageSlot::Failed { name, .. } => {
                Err(HistogramError::ImageNotReady { name: name.clone() })
            }
        }
    }
}
