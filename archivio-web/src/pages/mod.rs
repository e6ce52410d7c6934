pub mod admin;
pub mod archive;
pub mod background;
pub mod dashboard;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod register;
