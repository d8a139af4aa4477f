//! What a form shows after a submission.

use crate::preview::{preview_input, preview_size};
use vd_api::models::{ChartConfig, CreatedDataset, ToolResponse, UploadSummary};
use vd_api::ApiError;
use vd_chart::{ChartInput, Size};

/// Which form produced an outcome; selects headings and the fallback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    CreateDataset,
    Upload,
    GenerateChart,
}

impl FormKind {
    /// Shown when a failure carries no backend `detail`.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            FormKind::CreateDataset => "Failed to create dataset",
            FormKind::Upload => "Upload failed",
            FormKind::GenerateChart => "Failed to generate chart",
        }
    }

    pub fn heading(&self, success: bool) -> &'static str {
        match (self, success) {
            (FormKind::CreateDataset, true) => "Success",
            (FormKind::CreateDataset, false) => "Error",
            (FormKind::Upload, true) => "Upload Successful",
            (FormKind::Upload, false) => "Upload Failed",
            (FormKind::GenerateChart, true) => "Chart Generated Successfully",
            (FormKind::GenerateChart, false) => "Generation Failed",
        }
    }
}

/// A submission result ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutcome {
    pub kind: FormKind,
    pub success: bool,
    pub message: String,
    /// `(label, value)` lines under the message.
    pub details: Vec<(String, String)>,
    /// Pretty-printed JSON block: an uploaded sample row or a chart configuration.
    pub json: Option<String>,
    /// Chart rendered from a generated configuration, at its requested size.
    pub preview: Option<(ChartInput, Size)>,
}

impl ToolOutcome {
    fn failed(kind: FormKind, message: String) -> Self {
        ToolOutcome {
            kind,
            success: false,
            message,
            details: Vec::new(),
            json: None,
            preview: None,
        }
    }

    pub fn heading(&self) -> &'static str {
        self.kind.heading(self.success)
    }

    /// Build the outcome of a finished request.
    pub fn from_result(kind: FormKind, result: Result<ToolResponse, ApiError>) -> Self {
        match result {
            Ok(response) => ToolOutcome::from_response(kind, response),
            Err(e) => {
                log::error!("{:?} request failed: {}", kind, e);
                let message = e
                    .detail()
                    .map(str::to_string)
                    .unwrap_or_else(|| kind.fallback_message().to_string());
                ToolOutcome::failed(kind, message)
            }
        }
    }

    pub fn from_response(kind: FormKind, response: ToolResponse) -> Self {
        let mut outcome = ToolOutcome::failed(kind, response.message.clone());
        outcome.success = response.success;
        if !response.success {
            return outcome;
        }
        match kind {
            FormKind::CreateDataset => {
                if let Some(created) = response.data_as::<CreatedDataset>() {
                    outcome.details = vec![
                        ("API Endpoint".to_string(), created.api_endpoint),
                        ("Records".to_string(), created.records.to_string()),
                    ];
                }
            }
            FormKind::Upload => {
                if let Some(summary) = response.data_as::<UploadSummary>() {
                    outcome.details = vec![
                        ("Rows".to_string(), summary.rows.to_string()),
                        ("Columns".to_string(), summary.columns.join(", ")),
                        ("API Endpoint".to_string(), summary.api_endpoint),
                    ];
                    outcome.json = summary
                        .sample
                        .first()
                        .and_then(|row| serde_json::to_string_pretty(row).ok());
                }
            }
            FormKind::GenerateChart => {
                if let Some(url) = &response.chart_url {
                    outcome.details.push(("Chart URL".to_string(), url.clone()));
                }
                if let Some(url) = &response.export_url {
                    outcome.details.push(("Export URL".to_string(), url.clone()));
                }
                outcome.json = response
                    .data
                    .as_ref()
                    .and_then(|data| serde_json::to_string_pretty(data).ok());
                outcome.preview = response
                    .data_as::<ChartConfig>()
                    .and_then(|config| Some((preview_input(&config)?, preview_size(&config))));
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> ToolResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_failure_uses_backend_detail() {
        let err = ApiError::from_status(400, r#"{"detail": "Dataset 'x' already exists"}"#);
        let outcome = ToolOutcome::from_result(FormKind::CreateDataset, Err(err));
        assert!(!outcome.success);
        assert_eq!(outcome.message, "Dataset 'x' already exists");
        assert_eq!(outcome.heading(), "Error");
    }

    #[test]
    fn test_failure_fallbacks() {
        for (kind, message) in [
            (FormKind::CreateDataset, "Failed to create dataset"),
            (FormKind::Upload, "Upload failed"),
            (FormKind::GenerateChart, "Failed to generate chart"),
        ] {
            let err = ApiError::from_status(500, "Internal Server Error");
            assert_eq!(ToolOutcome::from_result(kind, Err(err)).message, message);
        }
    }

    #[test]
    fn test_created_dataset_details() {
        let outcome = ToolOutcome::from_response(
            FormKind::CreateDataset,
            response(json!({
                "success": true,
                "message": "Dataset 'q4' created successfully",
                "data": {"filename": "q4.csv", "records": 3, "api_endpoint": "/api/data/q4"}
            })),
        );
        assert_eq!(outcome.heading(), "Success");
        assert_eq!(
            outcome.details,
            vec![
                ("API Endpoint".to_string(), "/api/data/q4".to_string()),
                ("Records".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_upload_sample_is_pretty_printed() {
        let outcome = ToolOutcome::from_response(
            FormKind::Upload,
            response(json!({
                "success": true,
                "message": "uploaded",
                "data": {
                    "rows": 2,
                    "columns": ["month", "sales"],
                    "api_endpoint": "/api/data/q4",
                    "sample": [{"month": "Oct", "sales": 100}]
                }
            })),
        );
        assert_eq!(outcome.details[1].1, "month, sales");
        assert_eq!(
            outcome.json.as_deref(),
            Some("{\n  \"month\": \"Oct\",\n  \"sales\": 100\n}")
        );
    }

    #[test]
    fn test_generated_chart_preview() {
        let outcome = ToolOutcome::from_response(
            FormKind::GenerateChart,
            response(json!({
                "success": true,
                "message": "Chart generated",
                "data": {
                    "type": "bar",
                    "data": [{"month": "Jan", "sales": 1}],
                    "title": "Bar Chart - Sales Data",
                    "width": 500,
                    "height": 300
                },
                "chart_url": "/api/charts/abc",
                "export_url": "/api/exports/chart_abc.json"
            })),
        );
        assert_eq!(outcome.heading(), "Chart Generated Successfully");
        assert_eq!(outcome.details.len(), 2);
        assert!(outcome.json.is_some());
        assert!(matches!(
            outcome.preview,
            Some((ChartInput::Bar(_), size)) if size == Size::new(500.0, 300.0)
        ));
    }

    #[test]
    fn test_unsuccessful_response_keeps_message() {
        let outcome = ToolOutcome::from_response(
            FormKind::Upload,
            response(json!({"success": false, "message": "Empty CSV"})),
        );
        assert!(!outcome.success);
        assert_eq!(outcome.message, "Empty CSV");
        assert_eq!(outcome.heading(), "Upload Failed");
    }
}
