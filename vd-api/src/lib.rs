pub mod client;
pub mod error;
pub mod models;
pub mod source;

pub use client::{ApiClient, DEFAULT_BACKEND_URL};
pub use error::{ApiError, Result};
