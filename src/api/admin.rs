//! Admin Endpoints
//!
//! Bulk operations on the backend store: counts, fixture seeding, wipe and
//! full JSON export.

use async_trait::async_trait;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{AdminStats, ClearSummary, InjectSummary};

#[async_trait(?Send)]
pub trait AdminApi {
    async fn admin_stats(&self) -> Result<AdminStats, ApiError>;

    async fn inject_data(&self) -> Result<InjectSummary, ApiError>;

    async fn clear_data(&self) -> Result<ClearSummary, ApiError>;

    /// Raw JSON export of every table
    async fn export_data(&self) -> Result<Vec<u8>, ApiError>;
}

#[async_trait(?Send)]
impl AdminApi for ApiClient {
    async fn admin_stats(&self) -> Result<AdminStats, ApiError> {
        self.get_json(self.url("/admin/stats")).await
    }

    async fn inject_data(&self) -> Result<InjectSummary, ApiError> {
        self.post_empty(self.url("/admin/inject-data")).await
    }

    async fn clear_data(&self) -> Result<ClearSummary, ApiError> {
        self.post_empty(self.url("/admin/clear-data")).await
    }

    async fn export_data(&self) -> Result<Vec<u8>, ApiError> {
        self.get_bytes(self.url("/admin/export-data")).await
    }
}
