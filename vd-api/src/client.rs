use crate::error::{ApiError, Result};
use crate::models::{
    ChartConfig, ChartRequest, CreateSalesRequest, DatasetIndex, DatasetRows, HealthStatus,
    ToolResponse,
};
use log::{info, warn};
use reqwest::{multipart, Client, Response};
use serde::{de::DeserializeOwned, Serialize};

/// Backend used when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

/// Client for the dashboard backend's REST surface.
///
/// Works on both native targets and `wasm32` (where reqwest uses `fetch`).
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    backend_url: String,
}

impl ApiClient {
    pub fn new(backend_url: &str) -> Self {
        ApiClient {
            client: Client::new(),
            backend_url: backend_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Absolute URL of an `/api` path, e.g. `endpoint("/datasets")`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/api{}", self.backend_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let err = ApiError::from_status(status.as_u16(), &body);
            warn!("{}", err);
            return Err(err);
        }
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path);
        info!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.endpoint(path);
        info!("POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;
        Self::decode(response).await
    }

    /// `GET /api/health`
    pub async fn health(&self) -> Result<HealthStatus> {
        self.get_json("/health").await
    }

    /// `GET /api/health`, undecoded
    pub async fn health_raw(&self) -> Result<serde_json::Value> {
        self.get_json("/health").await
    }

    /// `GET /api/datasets`
    pub async fn datasets(&self) -> Result<DatasetIndex> {
        self.get_json("/datasets").await
    }

    /// `GET /api/ai/datasets`
    pub async fn ai_datasets(&self) -> Result<ToolResponse> {
        self.get_json("/ai/datasets").await
    }

    /// `GET /api/data/{name}`
    pub async fn dataset(&self, name: &str) -> Result<DatasetRows> {
        if name.trim().is_empty() {
            return Err(ApiError::Invalid("dataset name is empty".to_string()));
        }
        self.get_json(&format!("/data/{}", name)).await
    }

    /// `POST /api/ai/create-sales-data`
    pub async fn create_sales_data(&self, request: &CreateSalesRequest) -> Result<ToolResponse> {
        self.post_json("/ai/create-sales-data", request).await
    }

    /// `POST /api/ai/upload-csv` as multipart `file` + `dataset_name`.
    pub async fn upload_csv(
        &self,
        dataset_name: &str,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<ToolResponse> {
        if dataset_name.trim().is_empty() {
            return Err(ApiError::Invalid("dataset name is empty".to_string()));
        }
        let part = multipart::Part::bytes(contents)
            .file_name(file_name.to_string())
            .mime_str("text/csv")?;
        let form = multipart::Form::new()
            .part("file", part)
            .text("dataset_name", dataset_name.to_string());
        let url = self.endpoint("/ai/upload-csv");
        info!("POST {} ({})", url, file_name);
        let response = self.client.post(&url).multipart(form).send().await?;
        Self::decode(response).await
    }

    /// `POST /api/ai/generate-chart`
    pub async fn generate_chart(&self, request: &ChartRequest) -> Result<ToolResponse> {
        self.post_json("/ai/generate-chart", request).await
    }

    /// `GET /api/charts/{id}`
    pub async fn chart(&self, chart_id: &str) -> Result<ChartConfig> {
        self.get_json(&format!("/charts/{}", chart_id)).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        ApiClient::new(DEFAULT_BACKEND_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_api_prefix() {
        let client = ApiClient::new("http://localhost:8001/");
        assert_eq!(client.backend_url(), "http://localhost:8001");
        assert_eq!(
            client.endpoint("/data/sales_data"),
            "http://localhost:8001/api/data/sales_data"
        );
    }

    #[test]
    fn test_empty_dataset_name_is_rejected_without_request() {
        let client = ApiClient::default();
        let result = futures::executor::block_on(client.dataset("  "));
        assert!(matches!(result, Err(ApiError::Invalid(_))));
        let result =
            futures::executor::block_on(client.upload_csv("", "a.csv", b"month\nJan\n".to_vec()));
        assert!(matches!(result, Err(ApiError::Invalid(_))));
    }
}
