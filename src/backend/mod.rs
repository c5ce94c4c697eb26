//! Client side of the detection / recipe backend

pub mod api;
pub mod error;
pub mod types;

pub use api::{BackendClient, ImageUpload};
pub use error::ApiError;
