pub mod modal;
pub mod navbar;
pub mod toast;
pub mod ui;
