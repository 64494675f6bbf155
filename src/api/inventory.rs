//! Inventory Endpoints
//!
//! The 86 board: list, create, update, delete and CSV bulk upload.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Method;

use super::{read_json, ApiClient};
use crate::error::ApiError;
use crate::models::{InventoryDraft, InventoryItem, InventoryUpdate, UploadSummary};

#[async_trait(?Send)]
pub trait InventoryApi {
    async fn list_inventory(&self) -> Result<Vec<InventoryItem>, ApiError>;

    async fn create_inventory(&self, draft: &InventoryDraft) -> Result<InventoryItem, ApiError>;

    async fn update_inventory(&self, id: u32, update: &InventoryUpdate) -> Result<InventoryItem, ApiError>;

    async fn delete_inventory(&self, id: u32) -> Result<(), ApiError>;

    /// Multipart upload of a CSV file under the form field `file`
    async fn upload_inventory_csv(&self, file_name: &str, contents: Vec<u8>) -> Result<UploadSummary, ApiError>;
}

#[async_trait(?Send)]
impl InventoryApi for ApiClient {
    async fn list_inventory(&self) -> Result<Vec<InventoryItem>, ApiError> {
        self.get_json(self.url("/inventory")).await
    }

    async fn create_inventory(&self, draft: &InventoryDraft) -> Result<InventoryItem, ApiError> {
        self.send_json(Method::POST, self.url("/inventory"), draft).await
    }

    async fn update_inventory(&self, id: u32, update: &InventoryUpdate) -> Result<InventoryItem, ApiError> {
        let url = self.item_url("/inventory", &id.to_string());
        self.send_json(Method::PUT, url, update).await
    }

    async fn delete_inventory(&self, id: u32) -> Result<(), ApiError> {
        self.delete(self.item_url("/inventory", &id.to_string())).await
    }

    async fn upload_inventory_csv(&self, file_name: &str, contents: Vec<u8>) -> Result<UploadSummary, ApiError> {
        let url = self.url("/inventory/upload");
        log::debug!("[API] POST {} ({} bytes)", url, contents.len());

        let part = Part::bytes(contents)
            .file_name(file_name.to_string())
            .mime_str("text/csv")?;
        let form = Form::new().part("file", part);

        let response = self.http.post(&url).multipart(form).send().await?;
        read_json(response).await
    }
}
