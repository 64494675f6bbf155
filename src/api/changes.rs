//! Change / Announcement Endpoints

use async_trait::async_trait;
use reqwest::Method;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{Change, ChangeDraft, ChangeUpdate};

#[async_trait(?Send)]
pub trait ChangeApi {
    async fn list_changes(&self) -> Result<Vec<Change>, ApiError>;

    async fn create_change(&self, draft: &ChangeDraft) -> Result<Change, ApiError>;

    async fn update_change(&self, change_id: &str, update: &ChangeUpdate) -> Result<Change, ApiError>;

    async fn delete_change(&self, change_id: &str) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
impl ChangeApi for ApiClient {
    async fn list_changes(&self) -> Result<Vec<Change>, ApiError> {
        self.get_json(self.url("/changes")).await
    }

    async fn create_change(&self, draft: &ChangeDraft) -> Result<Change, ApiError> {
        self.send_json(Method::POST, self.url("/changes"), draft).await
    }

    async fn update_change(&self, change_id: &str, update: &ChangeUpdate) -> Result<Change, ApiError> {
        self.send_json(Method::PUT, self.item_url("/changes", change_id), update).await
    }

    async fn delete_change(&self, change_id: &str) -> Result<(), ApiError> {
        self.delete(self.item_url("/changes", change_id)).await
    }
}
