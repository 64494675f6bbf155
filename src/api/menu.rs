//! Menu Endpoints
//!
//! Menu items are the lookup source for inventory rows.

use async_trait::async_trait;
use reqwest::Method;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{MenuDraft, MenuItem, MenuUpdate};

#[async_trait(?Send)]
pub trait MenuApi {
    async fn list_menu(&self) -> Result<Vec<MenuItem>, ApiError>;

    async fn create_menu_item(&self, draft: &MenuDraft) -> Result<MenuItem, ApiError>;

    async fn update_menu_item(&self, item_id: &str, update: &MenuUpdate) -> Result<MenuItem, ApiError>;

    async fn delete_menu_item(&self, item_id: &str) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
impl MenuApi for ApiClient {
    async fn list_menu(&self) -> Result<Vec<MenuItem>, ApiError> {
        self.get_json(self.url("/menu")).await
    }

    async fn create_menu_item(&self, draft: &MenuDraft) -> Result<MenuItem, ApiError> {
        self.send_json(Method::POST, self.url("/menu"), draft).await
    }

    async fn update_menu_item(&self, item_id: &str, update: &MenuUpdate) -> Result<MenuItem, ApiError> {
        self.send_json(Method::PUT, self.item_url("/menu", item_id), update).await
    }

    async fn delete_menu_item(&self, item_id: &str) -> Result<(), ApiError> {
        self.delete(self.item_url("/menu", item_id)).await
    }
}
