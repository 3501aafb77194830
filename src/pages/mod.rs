pub mod detail;
pub mod home;
