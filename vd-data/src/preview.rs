//! Inferring a chart input from a generated chart configuration.
//!
//! Columns are classified from the first row, in backend order: a column
//! holding a number (or numeric string) is a series, anything else is text.

use vd_api::models::{ChartConfig, ChartType, Record};
use vd_chart::input::{
    label, number, slices_from_records, CategorySeries, ScatterData, ScatterField, Slice,
    StackedSeries, DEFAULT_SLICE_COLOR,
};
use vd_chart::{ChartInput, Size};

/// Text and numeric column names of a dataset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Columns {
    pub text: Vec<String>,
    pub numeric: Vec<String>,
}

impl Columns {
    pub fn of(records: &[Record]) -> Self {
        let mut columns = Columns::default();
        let Some(first) = records.first() else {
            return columns;
        };
        for key in first.keys() {
            if number(first, key).is_some() {
                columns.numeric.push(key.clone());
            } else if label(first, key).is_some() {
                columns.text.push(key.clone());
            }
        }
        columns
    }

    fn numeric_refs(&self) -> Vec<&str> {
        self.numeric.iter().map(String::as_str).collect()
    }
}

fn category_series(records: &[Record], columns: &Columns, limit: usize) -> Option<CategorySeries> {
    let category = columns.text.first()?;
    let series: Vec<&str> = columns.numeric_refs().into_iter().take(limit).collect();
    if series.is_empty() {
        return None;
    }
    Some(CategorySeries::from_records(records, category, &series))
}

fn pie_slices(records: &[Record], columns: &Columns) -> Option<Vec<Slice>> {
    let has = |key: &str| records.first().is_some_and(|r| r.contains_key(key));
    if has("category") && has("value") {
        return Some(slices_from_records(records));
    }
    let category = columns.text.first()?;
    let value = columns.numeric.first()?;
    Some(
        records
            .iter()
            .filter_map(|r| {
                Some(Slice {
                    label: label(r, category)?,
                    value: number(r, value)?,
                    color: DEFAULT_SLICE_COLOR.to_string(),
                })
            })
            .collect(),
    )
}

fn scatter(records: &[Record], columns: &Columns) -> Option<ScatterData> {
    let numeric = columns.numeric_refs();
    let (x, y) = match numeric.as_slice() {
        [x, y, ..] => (*x, *y),
        _ => return None,
    };
    let value = numeric.get(2).copied().unwrap_or(y);
    Some(ScatterData::from_records(
        records,
        ScatterField::new(x),
        ScatterField::new(y),
        ScatterField::new(value),
    ))
}

fn stacked(records: &[Record], columns: &Columns) -> Option<StackedSeries> {
    let date = columns.text.iter().find(|c| c.as_str() == "date")?;
    let keys = columns.numeric_refs();
    if keys.is_empty() {
        return None;
    }
    Some(StackedSeries::from_records(records, date, &keys))
}

/// Typed chart input for `chart_type` over `records`, when the columns fit.
pub fn infer_input(chart_type: ChartType, records: &[Record]) -> Option<ChartInput> {
    let columns = Columns::of(records);
    let input = match chart_type {
        ChartType::Bar => ChartInput::Bar(category_series(records, &columns, usize::MAX)?),
        ChartType::Line => ChartInput::Line(category_series(records, &columns, 1)?),
        ChartType::Pie => ChartInput::Pie(pie_slices(records, &columns)?),
        ChartType::Scatter => ChartInput::Scatter(scatter(records, &columns)?),
        ChartType::Area => ChartInput::Area(stacked(records, &columns)?),
        ChartType::Network => return None,
    };
    Some(input)
}

/// Preview input for a generated configuration.
pub fn preview_input(config: &ChartConfig) -> Option<ChartInput> {
    let Some(kind) = config.kind() else {
        log::warn!("No preview for chart type {}", config.chart_type);
        return None;
    };
    infer_input(kind, &config.data)
}

/// The canvas a configuration asks for.
pub fn preview_size(config: &ChartConfig) -> Size {
    Size::new(config.width as f64, config.height as f64)
}
