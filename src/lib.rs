//! histoview: pick an image from a folder and see how its red, green and blue
//! intensities are distributed.
//!
//! The counting lives in [`histogram`], pixel access in [`image_loader`], and the chart
//! model in [`chart`]; [`app`] and [`ui`] wire them into an eframe window.

pub mod app;
pub mod chart;
pub mod errors;
pub mod histogram;
pub mod image_loader;
pub mod logging;
pub mod settings;
pub mod ui;


pub use errors::{HistogramError, Result};
pub use histogram::{compute_histogram, ChannelHistogram, RgbHistogram};
