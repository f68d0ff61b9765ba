//! Trait abstraction for the enrollment API client to enable mocking in tests

use crate::state::{Dependent, NewUser};
use async_trait::async_trait;

use super::client::ApiError;

/// Trait for enrollment API operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Fetch the dependents collection (`GET /ousers`)
    async fn fetch_dependents(&self) -> Result<Vec<Dependent>, ApiError>;

    /// Register a new user (`POST /users`)
    async fn create_user(&self, user: &NewUser) -> Result<(), ApiError>;
}
