mod common;
mod dialogs;
mod histogram;
mod image_view;
pub mod main;
mod sidebar;
