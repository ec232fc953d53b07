pub mod button_list;
pub mod footer;
pub mod header;
pub mod modals;
