//! Pre-Shift Brief Endpoints

use async_trait::async_trait;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::BriefData;

#[async_trait(?Send)]
pub trait BriefApi {
    /// Today's brief as one composed snapshot
    async fn get_brief(&self) -> Result<BriefData, ApiError>;

    /// Rendered PDF of today's brief
    async fn download_brief_pdf(&self) -> Result<Vec<u8>, ApiError>;
}

impl ApiClient {
    /// Direct link to the backend-rendered PDF, for anchor downloads
    pub fn brief_pdf_url(&self) -> String {
        self.url("/brief/today/pdf")
    }
}

#[async_trait(?Send)]
impl BriefApi for ApiClient {
    async fn get_brief(&self) -> Result<BriefData, ApiError> {
        self.get_json(self.url("/brief/today")).await
    }

    async fn download_brief_pdf(&self) -> Result<Vec<u8>, ApiError> {
        self.get_bytes(self.brief_pdf_url()).await
    }
}
