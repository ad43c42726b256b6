pub mod main_ui;
pub mod message_processing;
pub mod statusbar;
pub mod theme;
