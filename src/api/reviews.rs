//! Review Endpoints

use async_trait::async_trait;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::Review;

#[async_trait(?Send)]
pub trait ReviewApi {
    /// Reviews created within the last `days` days
    async fn list_reviews(&self, days: u32) -> Result<Vec<Review>, ApiError>;
}

#[async_trait(?Send)]
impl ReviewApi for ApiClient {
    async fn list_reviews(&self, days: u32) -> Result<Vec<Review>, ApiError> {
        self.get_json(self.url(&format!("/reviews?days={}", days))).await
    }
}
