pub mod health;
pub mod index;

/// Name reported by both endpoints.
pub const APP_NAME: &str = "Expert Potato";
