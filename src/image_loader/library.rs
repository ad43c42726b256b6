use crate::errors::{HistogramError, Result};
use super::sample::ImageSample;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "tiff", "tif", "webp", "ico", "pnm", "pbm", "pgm", "ppm",
    "tga", "qoi",
];

// Checked against the file and the header, before any pixel is decoded
const MAX_FILE_SIZE: u64 = 500 * 1024 * 1024;
pub const MAX_PIXELS: u64 = 100_000_000;

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// The fixed set of images a user can pick from: every supported file directly
/// inside one folder, enumerated once and addressed by file name.
#[derive(Debug, Clone)]
pub struct ImageLibrary {
    root: PathBuf,
    images: Vec<String>,
}

impl ImageLibrary {
    pub fn scan(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let entries = std::fs::read_dir(&root)
            .map_err(|e| HistogramError::image_unavailable(&root, e))?;

        let mut images: Vec<String> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && is_supported_image(path))
            .filter_map(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();

        images.sort_by(|a, b| natural_cmp(a, b));
        log::debug!("Found {} images in {:?}", images.len(), root);

        Ok(Self { root, images })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.images.iter().any(|n| n == name)
    }

    /// Maps a selected name to its file. Only names that came out of `scan` resolve,
    /// so a name can never reach outside the library folder.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        let path = self.root.join(name);
        if !self.contains(name) {
            return Err(HistogramError::image_unavailable(
                path,
                "not one of the images in this folder",
            ));
        }
        Ok(path)
    }

    pub fn load(&self, name: &str) -> Result<ImageSample> {
        let path = self.resolve(name)?;
        let image = decode_image(&path)?;
        Ok(ImageSample::new(name, image))
    }
}

pub fn decode_image(path: &Path) -> Result<image::DynamicImage> {
    decode_image_limited(path, MAX_PIXELS)
}

/// Decodes `path` unless its header announces more than `max_pixels` pixels.
pub fn decode_image_limited(path: &Path, max_pixels: u64) -> Result<image::DynamicImage> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| HistogramError::image_unavailable(path, e))?;

    if metadata.len() > MAX_FILE_SIZE {
        return Err(HistogramError::ImageTooLarge {
            path: path.to_path_buf(),
            message: format!("file is {}MB (max 500MB)", metadata.len() / (1024 * 1024)),
        });
    }

    let (width, height) = open_reader(path)?
        .into_dimensions()
        .map_err(|e| HistogramError::image_unavailable(path, e))?;

    let pixels = width as u64 * height as u64;
    if pixels > max_pixels {
        return Err(HistogramError::ImageTooLarge {
            path: path.to_path_buf(),
            message: format!("{}x{} is {} pixels (max {})", width, height, pixels, max_pixels),
        });
    }

    let image = open_reader(path)?
        .decode()
        .map_err(|e| HistogramError::image_unavailable(path, e))?;

    log::debug!("Decoded {:?} ({}x{})", path, image.width(), image.height());
    Ok(image)
}

fn open_reader(path: &Path) -> Result<image::ImageReader<std::io::BufReader<std::fs::File>>> {
    image::ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| HistogramError::image_unavailable(path, e))
}

fn natural_cmp(a: &str, b: &str) -> Ordering {
    natord::compare_ignore_case(a, b).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
        RgbaImage::from_pixel(width, height, Rgba([10, 200, 0, 255]))
            .save(dir.join(name))
            .unwrap();
    }

    #[test]
    fn test_scan_sorts_naturally_and_skips_other_files() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "img10.png", 1, 1);
        write_png(dir.path(), "img2.png", 1, 1);
        write_png(dir.path(), "Img1.png", 1, 1);
        std::fs::write(dir.path().join("notes.txt"), "not an image").unwrap();
        std::fs::create_dir(dir.path().join("nested.png")).unwrap();

        let library = ImageLibrary::scan(dir.path()).unwrap();
        assert_eq!(library.images(), &["Img1.png", "img2.png", "img10.png"]);
    }

    #[test]
    fn test_scan_missing_folder() {
        let dir = tempfile::tempdir().unwrap();
        let err = ImageLibrary::scan(dir.path().join("missing")).unwrap_err();
        assert_eq!(err.error_code(), "IMAGE_UNAVAILABLE");
    }

    #[test]
    fn test_resolve_rejects_unknown_names() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "cat.png", 1, 1);
        let library = ImageLibrary::scan(dir.path()).unwrap();

        assert!(library.resolve("cat.png").is_ok());
        assert!(library.resolve("dog.png").is_err());
        assert!(library.resolve("../cat.png").is_err());
    }

    #[test]
    fn test_load_decodes_listed_image() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "cat.png", 3, 2);
        let library = ImageLibrary::scan(dir.path()).unwrap();

        let sample = library.load("cat.png").unwrap();
        assert_eq!(sample.name(), "cat.png");
        assert_eq!((sample.width(), sample.height()), (3, 2));
    }

    #[test]
    fn test_load_file_removed_after_scan() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "cat.png", 1, 1);
        let library = ImageLibrary::scan(dir.path()).unwrap();
        std::fs::remove_file(dir.path().join("cat.png")).unwrap();

        let err = library.load("cat.png").unwrap_err();
        assert!(err.is_user_visible());
        assert_eq!(err.error_code(), "IMAGE_UNAVAILABLE");
    }

    #[test]
    fn test_load_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.png"), b"definitely not a png").unwrap();
        let library = ImageLibrary::scan(dir.path()).unwrap();

        assert!(matches!(
            library.load("broken.png"),
            Err(HistogramError::ImageUnavailable { .. })
        ));
    }

    #[test]
    fn test_oversized_image_refused_before_decoding() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "wide.png", 20, 10);
        let path = dir.path().join("wide.png");

        let err = decode_image_limited(&path, 199).unwrap_err();
        assert_eq!(err.error_code(), "IMAGE_TOO_LARGE");
        assert!(err.is_user_visible());
        assert!(!err.user_message().contains("not found"));
        assert!(err.to_string().contains("20x10"));

        let image = decode_image_limited(&path, 200).unwrap();
        assert_eq!((image.width(), image.height()), (20, 10));
    }

    #[test]
    fn test_content_decides_format_not_extension() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "actually_png.jpg", 2, 2);
        let library = ImageLibrary::scan(dir.path()).unwrap();

        let sample = library.load("actually_png.jpg").unwrap();
        assert_eq!(sample.pixel_count(), 4);
    }
}
