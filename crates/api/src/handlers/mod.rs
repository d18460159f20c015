pub mod header;
pub mod home;
