pub mod command_palette;
pub mod confirm;
pub mod context_menu;
pub mod error;
pub mod help;
pub mod helpers;
pub mod manager;
pub mod text_input;
pub mod theme_selection;

pub use manager::ModalManager;
