//! Form and view logic of the visualization dashboard, free of any UI toolkit.
//!
//! This crate turns backend payloads into what the dashboard shows, and
//! user input into backend requests:
//! - `dashboard`: typed inputs of the six dashboard charts
//! - `forms`: dataset creator, CSV uploader and chart generator state
//! - `outcome`: the result panel shown after a submission
//! - `preview`: chart inputs inferred from generated configurations
//! - `refresh`: ordering of overlapping refreshes
//! - `sample`: random sample rows and the demo network graph

pub mod dashboard;
pub mod error;
pub mod forms;
pub mod outcome;
pub mod preview;
pub mod refresh;
pub mod sample;

pub use dashboard::DashboardCharts;
pub use error::FormError;
pub use outcome::{FormKind, ToolOutcome};
pub use refresh::FetchGeneration;

/// Shown when the initial batch of dashboard requests fails.
pub const LOAD_ERROR_MESSAGE: &str =
    "Failed to load data. Please check if the backend server is running.";

/// Example `curl` invocations shown under each form.
pub mod curl {
    use vd_api::models::ChartRequest;

    pub fn create_sales(backend_url: &str) -> String {
        format!(
            "curl -X POST \"{}/api/ai/create-sales-data\" \\\n  -H \"Content-Type: application/json\" \\\n  -d '{{\"name\": \"my_sales\", \"data\": [{{\"month\": \"Jan\", \"sales\": 10000, \"expenses\": 5000}}]}}'",
            backend_url
        )
    }

    pub fn upload_csv(backend_url: &str) -> String {
        format!(
            "curl -X POST \"{}/api/ai/upload-csv\" \\\n  -F \"file=@data.csv\" \\\n  -F \"dataset_name=my_dataset\"",
            backend_url
        )
    }

    /// Mirrors the chart generator's current settings, with placeholders
    /// for a missing dataset or title.
    pub fn generate_chart(backend_url: &str, request: &ChartRequest) -> String {
        let or = |value: &str, fallback: &'static str| {
            if value.is_empty() {
                fallback.to_string()
            } else {
                value.to_string()
            }
        };
        format!(
            "curl -X POST \"{}/api/ai/generate-chart\" \\\n  -H \"Content-Type: application/json\" \\\n  -d '{{\n    \"chart_type\": \"{}\",\n    \"dataset_name\": \"{}\",\n    \"title\": \"{}\",\n    \"width\": {},\n    \"height\": {}\n  }}'",
            backend_url,
            request.chart_type,
            or(&request.dataset_name, "sales_data"),
            or(&request.title, "My Chart"),
            request.width,
            request.height
        )
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use vd_api::models::ChartType;

        #[test]
        fn test_generate_chart_placeholders() {
            let request = ChartRequest {
                chart_type: ChartType::Line,
                dataset_name: String::new(),
                title: String::new(),
                width: 500,
                height: 300,
            };
            let example = generate_chart("http://localhost:8001", &request);
            assert!(example.starts_with("curl -X POST \"http://localhost:8001/api/ai/generate-chart\""));
            assert!(example.contains("\"chart_type\": \"line\""));
            assert!(example.contains("\"dataset_name\": \"sales_data\""));
            assert!(example.contains("\"title\": \"My Chart\""));
        }

        #[test]
        fn test_upload_example() {
            assert!(upload_csv("http://x").contains("-F \"dataset_name=my_dataset\""));
            assert!(create_sales("http://x").contains("/api/ai/create-sales-data"));
        }
    }
}
