pub mod library;
pub mod pixels;
pub mod sample;

pub use library::*;
pub use pixels::*;
pub use sample::*;
