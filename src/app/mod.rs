pub mod image_loading;
pub mod state;

pub use state::*;
