pub mod api;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod image;
pub mod reply;

pub use api::{IdCardSide, LicenseKind};
pub use client::YoutuClient;
pub use endpoint::Domain;
pub use error::{Error, Result};
pub use image::ImageSource;

// Re-export signing types for convenience
pub use youtu_sign::{sign, AppSign, SignError};
