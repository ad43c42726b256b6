use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("Image unavailable '{path}': {message}")]
    ImageUnavailable { path: PathBuf, message: String },

    #[error("Image too large '{path}': {message}")]
    ImageTooLarge { path: PathBuf, message: String },

    #[error("No image selected")]
    NoImageSelected,

    #[error("Image '{name}' is not loaded yet")]
    ImageNotReady { name: String },

    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("Drawing surface unavailable: {message}")]
    SurfaceUnavailable { message: String },

    #[error("Sample buffer holds {actual} bytes, expected {expected}")]
    SampleLayout { expected: usize, actual: usize },

    #[error("Settings error: {message}")]
    SettingsError { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON parsing error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, HistogramError>;

impl HistogramError {
    pub fn image_unavailable(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        HistogramError::ImageUnavailable {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Returns true if the user can pick another image (or the same one) and try again.
    /// A broken sample layout means the extractor and builder disagree, which retrying
    /// won't fix.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, HistogramError::SampleLayout { .. })
    }

    /// Errors the user caused and can act on get an alert; the rest only go to the log.
    pub fn is_user_visible(&self) -> bool {
        matches!(
            self,
            HistogramError::ImageUnavailable { .. }
                | HistogramError::ImageTooLarge { .. }
                | HistogramError::NoImageSelected
                | HistogramError::ImageNotReady { .. }
                | HistogramError::EmptyImage { .. }
        )
    }

    /// Returns a user-friendly error message with recovery suggestions
    pub fn user_message(&self) -> String {
        let suggestion = match self {
            HistogramError::ImageUnavailable { .. } => {
                "Error: Image not found! Check the filename or the image folder."
            }
            HistogramError::ImageTooLarge { .. } => {
                "The image is too large to load. Pick a smaller one."
            }
            HistogramError::NoImageSelected => "Pick an image from the list first.",
            HistogramError::ImageNotReady { .. } => {
                "Wait for the image to finish loading and try again."
            }
            HistogramError::EmptyImage { .. } => {
                "The image has zero width or height, so there is nothing to count."
            }
            HistogramError::SurfaceUnavailable { .. } => {
                "There is no room to draw the histogram. Enlarge the window."
            }
            HistogramError::SampleLayout { .. } => {
                "Internal error while reading pixels. Please report this."
            }
            HistogramError::SettingsError { .. }
            | HistogramError::IoError { .. }
            | HistogramError::JsonError { .. } => "Settings could not be read or written.",
        };

        format!("{}\n\n{}", self, suggestion)
    }

    /// Returns an error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            HistogramError::ImageUnavailable { .. } => "IMAGE_UNAVAILABLE",
            HistogramError::ImageTooLarge { .. } => "IMAGE_TOO_LARGE",
            HistogramError::NoImageSelected => "NO_IMAGE_SELECTED",
            HistogramError::ImageNotReady { .. } => "IMAGE_NOT_READY",
            HistogramError::EmptyImage { .. } => "EMPTY_IMAGE",
            HistogramError::SurfaceUnavailable { .. } => "SURFACE_UNAVAILABLE",
            HistogramError::SampleLayout { .. } => "SAMPLE_LAYOUT",
            HistogramError::SettingsError { .. } => "SETTINGS_ERROR",
            HistogramError::IoError { .. } => "IO_ERROR",
            HistogramError::JsonError { .. } => "JSON_ERROR",
        }
    }

    /// Logs the error at a level matching its severity
    pub fn log(&self) {
        let code = self.error_code();
        if !self.is_recoverable() {
            log::error!("[{}] {}", code, self);
        } else if self.is_user_visible() {
            log::warn!("[{}] {}", code, self);
        } else {
            log::warn!("[{}] diagnostic: {}", code, self);
        }
    }
}
