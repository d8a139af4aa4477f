//! State and validation of the three dashboard forms.
//!
//! Each form turns its fields into a request body, or a [`FormError`] when
//! the submission must not reach the backend. Failed submissions leave the
//! fields untouched so the user can correct them.

use crate::error::FormError;
use crate::sample::sample_sales;
use vd_api::models::{ChartRequest, ChartType, CreateSalesRequest, DatasetInfo, SalesPoint};
use vd_utils::text::humanize;

/// One editable row of the dataset creator.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftRow {
    pub month: String,
    pub sales: f64,
    pub expenses: f64,
}

impl DraftRow {
    pub fn new(month: &str, sales: f64, expenses: f64) -> Self {
        DraftRow {
            month: month.to_string(),
            sales,
            expenses,
        }
    }

    /// Rows without a label or without positive sales are not sent.
    pub fn is_submittable(&self) -> bool {
        !self.month.trim().is_empty() && self.sales > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalesField {
    Month,
    Sales,
    Expenses,
}

fn default_rows() -> Vec<DraftRow> {
    vec![
        DraftRow::new("Jan", 10000.0, 6000.0),
        DraftRow::new("Feb", 12000.0, 7000.0),
        DraftRow::new("Mar", 15000.0, 8000.0),
    ]
}

/// The dataset creator: a name, a description and editable sales rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesDraft {
    pub name: String,
    pub description: String,
    pub rows: Vec<DraftRow>,
}

impl Default for SalesDraft {
    fn default() -> Self {
        SalesDraft {
            name: String::new(),
            description: String::new(),
            rows: default_rows(),
        }
    }
}

impl SalesDraft {
    pub fn add_row(&mut self) {
        self.rows.push(DraftRow::new("", 0.0, 0.0));
    }

    /// Set one field of row `index` from text input. Numbers that do not
    /// parse become 0, like an emptied number input.
    pub fn update(&mut self, index: usize, field: SalesField, value: &str) {
        let Some(row) = self.rows.get_mut(index) else {
            return;
        };
        let number = || value.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0);
        match field {
            SalesField::Month => row.month = value.to_string(),
            SalesField::Sales => row.sales = number(),
            SalesField::Expenses => row.expenses = number(),
        }
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
        }
    }

    /// Replace the rows with twelve months of random figures.
    pub fn fill_sample(&mut self, random: impl FnMut() -> f64) {
        self.rows = sample_sales(random);
    }

    /// The request body, with unsubmittable rows filtered out.
    pub fn request(&self) -> Result<CreateSalesRequest, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        Ok(CreateSalesRequest {
            name: self.name.clone(),
            description: self.description.clone(),
            data: self
                .rows
                .iter()
                .filter(|r| r.is_submittable())
                .map(|r| SalesPoint {
                    month: r.month.clone(),
                    sales: r.sales,
                    expenses: r.expenses,
                })
                .collect(),
        })
    }

    /// Back to the initial state after a successful submission.
    pub fn reset(&mut self) {
        *self = SalesDraft::default();
    }
}

/// Whether `file_name` looks like a CSV file.
pub fn is_csv(file_name: &str) -> bool {
    file_name.to_ascii_lowercase().ends_with(".csv")
}

/// The CSV uploader's dataset name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UploadForm {
    pub dataset_name: String,
}

impl UploadForm {
    /// Check a selection of files; returns the one file to upload.
    pub fn accept<'a>(&self, file_names: &[&'a str]) -> Result<&'a str, FormError> {
        if self.dataset_name.trim().is_empty() {
            return Err(FormError::MissingUploadName);
        }
        match file_names {
            [] => Err(FormError::MissingFile),
            [name] if is_csv(name) => Ok(*name),
            [name] => Err(FormError::NotCsv(name.to_string())),
            _ => Err(FormError::TooManyFiles),
        }
    }

    pub fn reset(&mut self) {
        self.dataset_name.clear();
    }
}

pub const DEFAULT_CHART_WIDTH: u32 = 500;
pub const DEFAULT_CHART_HEIGHT: u32 = 300;

/// `(value, label)` entries of the dataset dropdown.
pub fn dataset_options(datasets: &[DatasetInfo]) -> Vec<(String, String)> {
    datasets
        .iter()
        .map(|d| (d.name.clone(), format!("{} ({} rows)", d.name, d.rows)))
        .collect()
}

/// The chart generator's configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartForm {
    pub chart_type: ChartType,
    pub dataset_name: String,
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for ChartForm {
    fn default() -> Self {
        ChartForm {
            chart_type: ChartType::Bar,
            dataset_name: String::new(),
            title: String::new(),
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
        }
    }
}

impl ChartForm {
    pub fn can_generate(&self) -> bool {
        !self.dataset_name.is_empty()
    }

    /// `"{Chart Type Label} - {Humanized Dataset}"`, when a dataset is chosen.
    pub fn auto_title(&self) -> Option<String> {
        if self.dataset_name.is_empty() {
            return None;
        }
        Some(format!(
            "{} - {}",
            self.chart_type.label(),
            humanize(&self.dataset_name)
        ))
    }

    /// Replace the title with the derived one; no-op without a dataset.
    pub fn apply_auto_title(&mut self) {
        if let Some(title) = self.auto_title() {
            self.title = title;
        }
    }

    /// Parse a dimension input; anything but a positive integer is ignored.
    pub fn parse_dimension(value: &str) -> Option<u32> {
        value.trim().parse::<u32>().ok().filter(|v| *v > 0)
    }

    pub fn request(&self) -> Result<ChartRequest, FormError> {
        if self.dataset_name.is_empty() {
            return Err(FormError::MissingDataset);
        }
        if self.width == 0 || self.height == 0 {
            return Err(FormError::InvalidSize);
        }
        Ok(self.to_request())
    }

    /// The current settings as a request, without validation.
    pub fn to_request(&self) -> ChartRequest {
        ChartRequest {
            chart_type: self.chart_type,
            dataset_name: self.dataset_name.clone(),
            title: self.title.clone(),
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft_rows() {
        let draft = SalesDraft::default();
        assert_eq!(draft.rows.len(), 3);
        assert_eq!(draft.rows[1], DraftRow::new("Feb", 12000.0, 7000.0));
    }

    #[test]
    fn test_edit_rows() {
        let mut draft = SalesDraft::default();
        draft.add_row();
        assert_eq!(draft.rows[3], DraftRow::new("", 0.0, 0.0));
        draft.update(3, SalesField::Month, "Apr");
        draft.update(3, SalesField::Sales, "9000");
        draft.update(3, SalesField::Expenses, "abc");
        assert_eq!(draft.rows[3], DraftRow::new("Apr", 9000.0, 0.0));
        draft.remove(0);
        assert_eq!(draft.rows[0].month, "Feb");
        draft.remove(99);
        draft.update(99, SalesField::Month, "x");
        assert_eq!(draft.rows.len(), 3);
    }

    #[test]
    fn test_request_requires_name() {
        let mut draft = SalesDraft::default();
        draft.name = "   ".to_string();
        assert_eq!(draft.request(), Err(FormError::MissingName));
    }

    #[test]
    fn test_request_filters_rows() {
        let mut draft = SalesDraft {
            name: "q4_sales_2024".to_string(),
            ..SalesDraft::default()
        };
        draft.add_row();
        draft.rows.push(DraftRow::new("  ", 5.0, 1.0));
        draft.rows.push(DraftRow::new("May", -1.0, 1.0));
        let request = draft.request().unwrap();
        assert_eq!(request.data.len(), 3);
        assert_eq!(request.data[2].month, "Mar");
        assert_eq!(request.description, "");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut draft = SalesDraft {
            name: "x".to_string(),
            description: "y".to_string(),
            rows: Vec::new(),
        };
        draft.reset();
        assert_eq!(draft, SalesDraft::default());
    }

    #[test]
    fn test_upload_validation() {
        let mut form = UploadForm::default();
        assert_eq!(form.accept(&["data.csv"]), Err(FormError::MissingUploadName));
        form.dataset_name = "customer_data".to_string();
        assert_eq!(form.accept(&[]), Err(FormError::MissingFile));
        assert_eq!(form.accept(&["DATA.CSV"]), Ok("DATA.CSV"));
        assert_eq!(
            form.accept(&["data.xlsx"]),
            Err(FormError::NotCsv("data.xlsx".to_string()))
        );
        assert_eq!(form.accept(&["a.csv", "b.csv"]), Err(FormError::TooManyFiles));
        form.reset();
        assert!(form.dataset_name.is_empty());
    }

    #[test]
    fn test_dataset_options() {
        let options = dataset_options(&[DatasetInfo::new("sales_data", 12)]);
        assert_eq!(
            options,
            vec![("sales_data".to_string(), "sales_data (12 rows)".to_string())]
        );
    }

    #[test]
    fn test_auto_title() {
        let mut form = ChartForm::default();
        assert_eq!(form.auto_title(), None);
        form.apply_auto_title();
        assert_eq!(form.title, "");
        form.dataset_name = "sales_data".to_string();
        form.apply_auto_title();
        assert_eq!(form.title, "Bar Chart - Sales Data");
        form.chart_type = ChartType::Scatter;
        assert_eq!(form.auto_title().as_deref(), Some("Scatter Plot - Sales Data"));
    }

    #[test]
    fn test_chart_request() {
        let mut form = ChartForm::default();
        assert!(!form.can_generate());
        assert_eq!(form.request(), Err(FormError::MissingDataset));
        form.dataset_name = "user_data".to_string();
        form.chart_type = ChartType::Pie;
        let request = form.request().unwrap();
        assert_eq!((request.width, request.height), (500, 300));
        assert_eq!(request.chart_type, ChartType::Pie);
        form.width = 0;
        assert_eq!(form.request(), Err(FormError::InvalidSize));
    }

    #[test]
    fn test_parse_dimension() {
        assert_eq!(ChartForm::parse_dimension(" 640 "), Some(640));
        assert_eq!(ChartForm::parse_dimension("0"), None);
        assert_eq!(ChartForm::parse_dimension("-5"), None);
    }
}
