//! Enrollment API client module

pub mod client;
pub mod traits;

pub use client::{ApiError, HttpClient};
#[cfg(test)]
pub use traits::MockApiClient;
pub use traits::ApiClient;
