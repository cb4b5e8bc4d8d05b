pub mod auth;
pub mod dashboard;
pub mod helpers;
pub mod home;
pub mod overlay;
