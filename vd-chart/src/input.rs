//! Typed chart inputs and adapters from backend records.
//!
//! Records are JSON objects keyed by column name. Adapters skip rows whose
//! fields are missing or not numeric rather than failing the whole chart.

use chrono::NaiveDate;
use log::warn;
use serde_json::{Map, Value};
use vd_utils::dates::parse_date;
use vd_utils::text::humanize;

pub type Record = Map<String, Value>;

/// A numeric field, accepting JSON numbers and numeric strings.
pub fn number(record: &Record, key: &str) -> Option<f64> {
    let value: Option<f64> = match record.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    value.filter(|v| v.is_finite())
}

/// A field rendered as a label; numbers are printed as-is.
pub fn label(record: &Record, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn skipped(chart: &str, dropped: usize) {
    if dropped > 0 {
        warn!("{}: skipped {} malformed rows", chart, dropped);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub category: String,
    pub values: Vec<f64>,
}

/// Categories with one or more numeric series each.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategorySeries {
    pub series: Vec<String>,
    pub rows: Vec<CategoryRow>,
}

impl CategorySeries {
    pub fn from_records(records: &[Record], category_key: &str, series: &[&str]) -> Self {
        let rows: Vec<CategoryRow> = records
            .iter()
            .filter_map(|r| {
                let category = label(r, category_key)?;
                let values = series
                    .iter()
                    .map(|s| number(r, s))
                    .collect::<Option<Vec<f64>>>()?;
                Some(CategoryRow { category, values })
            })
            .collect();
        skipped("category series", records.len() - rows.len());
        CategorySeries {
            series: series.iter().map(|s| s.to_string()).collect(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.series.is_empty()
    }

    pub fn categories(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.category.clone()).collect()
    }
}

/// One numeric field of a scatter plot and how it is described.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterField {
    pub key: String,
    /// Used in tooltips and legends, e.g. "Income".
    pub name: String,
    /// Axis caption, e.g. "Income ($)".
    pub caption: String,
    pub currency: bool,
    /// Multiplier applied when reading the record.
    pub factor: f64,
}

impl ScatterField {
    pub fn new(key: &str) -> Self {
        let name = humanize(key);
        ScatterField {
            key: key.to_string(),
            caption: name.clone(),
            name,
            currency: false,
            factor: 1.0,
        }
    }

    pub fn named(mut self, name: &str, caption: &str) -> Self {
        self.name = name.to_string();
        self.caption = caption.to_string();
        self
    }

    pub fn currency(mut self) -> Self {
        self.currency = true;
        self
    }

    pub fn scaled(mut self, factor: f64) -> Self {
        self.factor = factor;
        self
    }

    fn read(&self, record: &Record) -> Option<f64> {
        number(record, &self.key).map(|v| v * self.factor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

/// Points on two numeric axes, colored by a third value.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterData {
    pub x: ScatterField,
    pub y: ScatterField,
    pub value: ScatterField,
    pub points: Vec<ScatterPoint>,
}

impl ScatterData {
    pub fn from_records(
        records: &[Record],
        x: ScatterField,
        y: ScatterField,
        value: ScatterField,
    ) -> Self {
        let points: Vec<ScatterPoint> = records
            .iter()
            .filter_map(|r| {
                Some(ScatterPoint {
                    x: x.read(r)?,
                    y: y.read(r)?,
                    value: value.read(r)?,
                })
            })
            .collect();
        skipped("scatter", records.len() - points.len());
        ScatterData {
            x,
            y,
            value,
            points,
        }
    }

    /// The age / income / satisfaction layout of user demographics.
    pub fn demographics(records: &[Record]) -> Self {
        ScatterData::from_records(
            records,
            ScatterField::new("age").named("Age", "Age (years)"),
            ScatterField::new("income").named("Income", "Income ($)").currency(),
            ScatterField::new("satisfaction").named("Satisfaction", "Satisfaction"),
        )
    }
}

pub const DEFAULT_SLICE_COLOR: &str = "#4F46E5";

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub color: String,
}

/// Reads `category`, `value` and an optional `color` column.
pub fn slices_from_records(records: &[Record]) -> Vec<Slice> {
    let slices: Vec<Slice> = records
        .iter()
        .filter_map(|r| {
            Some(Slice {
                label: label(r, "category")?,
                value: number(r, "value")?,
                color: label(r, "color").unwrap_or_else(|| DEFAULT_SLICE_COLOR.to_string()),
            })
        })
        .collect();
    skipped("pie", records.len() - slices.len());
    slices
}

#[derive(Debug, Clone, PartialEq)]
pub struct StackedRow {
    pub date: NaiveDate,
    pub values: Vec<f64>,
}

/// Dated rows of series stacked in key order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StackedSeries {
    pub keys: Vec<String>,
    pub rows: Vec<StackedRow>,
}

impl StackedSeries {
    /// Rows whose date does not parse as `YYYY-MM-DD` are dropped.
    pub fn from_records(records: &[Record], date_key: &str, keys: &[&str]) -> Self {
        let rows: Vec<StackedRow> = records
            .iter()
            .filter_map(|r| {
                let date = parse_date(&label(r, date_key)?).ok()?;
                let values = keys
                    .iter()
                    .map(|k| number(r, k))
                    .collect::<Option<Vec<f64>>>()?;
                Some(StackedRow { date, values })
            })
            .collect();
        skipped("stacked series", records.len() - rows.len());
        StackedSeries {
            keys: keys.iter().map(|k| k.to_string()).collect(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.keys.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub id: String,
    pub group: i64,
    pub size: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

impl Graph {
    /// Links as index pairs; links naming unknown nodes are dropped.
    pub fn resolved_links(&self) -> Vec<(usize, usize, &GraphLink)> {
        let index = |id: &str| self.nodes.iter().position(|n| n.id == id);
        self.links
            .iter()
            .filter_map(|link| match (index(&link.source), index(&link.target)) {
                (Some(s), Some(t)) => Some((s, t, link)),
                _ => {
                    warn!(
                        "network: dropping link {} -> {} with unknown node",
                        link.source, link.target
                    );
                    None
                }
            })
            .collect()
    }
}

/// Input for any of the chart kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartInput {
    Bar(CategorySeries),
    Line(CategorySeries),
    Scatter(ScatterData),
    Pie(Vec<Slice>),
    Area(StackedSeries),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(value: Value) -> Vec<Record> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_category_series_skips_bad_rows() {
        let rows = records(json!([
            {"month": "Jan", "sales": 12000, "expenses": 8000},
            {"month": "Feb", "sales": "19000", "expenses": 12000},
            {"month": "Mar", "sales": null, "expenses": 9000},
            {"sales": 1, "expenses": 1}
        ]));
        let data = CategorySeries::from_records(&rows, "month", &["sales", "expenses"]);
        assert_eq!(data.categories(), vec!["Jan", "Feb"]);
        assert_eq!(data.rows[1].values, vec![19000.0, 12000.0]);
    }

    #[test]
    fn test_scatter_factor() {
        let rows = records(json!([{"units_sold": 850, "sales": 85000, "profit_margin": 0.35}]));
        let data = ScatterData::from_records(
            &rows,
            ScatterField::new("units_sold"),
            ScatterField::new("sales").currency(),
            ScatterField::new("profit_margin").scaled(10.0),
        );
        assert_eq!(data.points.len(), 1);
        assert!((data.points[0].value - 3.5).abs() < 1e-12);
        assert_eq!(data.x.name, "Units Sold");
    }

    #[test]
    fn test_slices_default_color() {
        let rows = records(json!([
            {"category": "Tech", "value": 350, "color": "#ff6b6b"},
            {"category": "Other", "value": 10}
        ]));
        let slices = slices_from_records(&rows);
        assert_eq!(slices[0].color, "#ff6b6b");
        assert_eq!(slices[1].color, DEFAULT_SLICE_COLOR);
    }

    #[test]
    fn test_stacked_drops_bad_dates() {
        let rows = records(json!([
            {"date": "2024-01-01", "visitors": 100, "page_views": 300, "conversions": 10},
            {"date": "01/02/2024", "visitors": 105, "page_views": 315, "conversions": 12}
        ]));
        let data = StackedSeries::from_records(&rows, "date", &["visitors", "page_views", "conversions"]);
        assert_eq!(data.rows.len(), 1);
        assert_eq!(data.rows[0].values, vec![100.0, 300.0, 10.0]);
    }

    #[test]
    fn test_unknown_link_endpoints_are_dropped() {
        let graph = Graph {
            nodes: vec![
                GraphNode {
                    id: "A".into(),
                    group: 1,
                    size: None,
                },
                GraphNode {
                    id: "B".into(),
                    group: 1,
                    size: None,
                },
            ],
            links: vec![
                GraphLink {
                    source: "A".into(),
                    target: "B".into(),
                    value: 1.0,
                },
                GraphLink {
                    source: "B".into(),
                    target: "Z".into(),
                    value: 2.0,
                },
            ],
        };
        let links = graph.resolved_links();
        assert_eq!(links.len(), 1);
        assert_eq!((links[0].0, links[0].1), (0, 1));
    }
}
