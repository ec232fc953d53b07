pub mod models;
pub mod notifier;
pub mod palette;
pub mod storage;
pub mod store;
pub mod terminal;
