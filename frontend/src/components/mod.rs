pub mod error;
pub mod footer;
pub mod layout;
pub mod navigation;
