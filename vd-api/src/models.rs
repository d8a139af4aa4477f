use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// One row of a dataset, keyed by column name in backend order.
pub type Record = serde_json::Map<String, Value>;

/// Response of `GET /api/data/{name}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRows {
    pub data: Vec<Record>,
    #[serde(default)]
    pub metadata: Option<DatasetMetadata>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub rows: usize,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub recommended_charts: Vec<String>,
}

/// Metadata describing a single stored dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub name: String,
    pub rows: usize,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub sample: Vec<Record>,
    #[serde(default)]
    pub chart_types: Vec<String>,
    #[serde(default)]
    pub api_endpoint: Option<String>,
}

impl DatasetInfo {
    pub fn new(name: &str, rows: usize) -> Self {
        DatasetInfo {
            name: name.to_string(),
            rows,
            filename: format!("{}.csv", name),
            columns: Vec::new(),
            sample: Vec::new(),
            chart_types: Vec::new(),
            api_endpoint: None,
        }
    }
}

/// Response of `GET /api/datasets`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DatasetIndex {
    pub datasets: Vec<DatasetInfo>,
}

/// The envelope every `/api/ai/*` endpoint answers with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub chart_url: Option<String>,
    #[serde(default)]
    pub export_url: Option<String>,
}

impl ToolResponse {
    /// Decode the `data` payload into a typed summary, if present and well formed.
    pub fn data_as<T: DeserializeOwned>(&self) -> Option<T> {
        let data = self.data.clone()?;
        match serde_json::from_value(data) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Unexpected tool response payload: {}", e);
                None
            }
        }
    }
}

/// `data` of a successful create-sales-data call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedDataset {
    #[serde(default)]
    pub filename: String,
    pub records: usize,
    pub api_endpoint: String,
}

/// `data` of a successful CSV upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadSummary {
    #[serde(default)]
    pub filename: String,
    pub rows: usize,
    pub columns: Vec<String>,
    pub api_endpoint: String,
    #[serde(default)]
    pub sample: Vec<Record>,
}

/// `data` of the AI dataset listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiDatasetList {
    pub datasets: Vec<DatasetInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPoint {
    pub month: String,
    pub sales: f64,
    pub expenses: f64,
}

/// Body of `POST /api/ai/create-sales-data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSalesRequest {
    pub name: String,
    pub description: String,
    pub data: Vec<SalesPoint>,
}

/// Chart kinds known to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Line,
    Scatter,
    Pie,
    Area,
    Network,
}

impl ChartType {
    pub const ALL: [ChartType; 6] = [
        ChartType::Bar,
        ChartType::Line,
        ChartType::Scatter,
        ChartType::Pie,
        ChartType::Area,
        ChartType::Network,
    ];

    /// The kinds a chart can be generated for from a stored dataset.
    pub const GENERATOR: [ChartType; 5] = [
        ChartType::Bar,
        ChartType::Line,
        ChartType::Scatter,
        ChartType::Pie,
        ChartType::Area,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Scatter => "scatter",
            ChartType::Pie => "pie",
            ChartType::Area => "area",
            ChartType::Network => "network",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Bar => "Bar Chart",
            ChartType::Line => "Line Chart",
            ChartType::Scatter => "Scatter Plot",
            ChartType::Pie => "Pie Chart",
            ChartType::Area => "Area Chart",
            ChartType::Network => "Network Graph",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ChartType::Bar => "Compare categories",
            ChartType::Line => "Show trends over time",
            ChartType::Scatter => "Show correlations",
            ChartType::Pie => "Show proportions",
            ChartType::Area => "Stacked time series",
            ChartType::Network => "Show relationships",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown chart type: {}", s))
    }
}

/// Body of `POST /api/ai/generate-chart`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub chart_type: ChartType,
    pub dataset_name: String,
    pub title: String,
    pub width: u32,
    pub height: u32,
}

/// A generated chart configuration, as returned in the generate response
/// and by `GET /api/charts/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: String,
    #[serde(default)]
    pub data: Vec<Record>,
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_width() -> u32 {
    500
}

fn default_height() -> u32 {
    300
}

impl ChartConfig {
    pub fn kind(&self) -> Option<ChartType> {
        self.chart_type.parse().ok()
    }
}

/// Response of `GET /api/health`. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub datasets_count: usize,
    #[serde(default)]
    pub server: String,
}
