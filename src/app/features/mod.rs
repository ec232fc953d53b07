pub mod buttons;
pub mod navigation;
pub mod ui;
