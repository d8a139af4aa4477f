use vd_api::source::DashboardSnapshot;
use vd_chart::charts::area::TRAFFIC_KEYS;
use vd_chart::input::{
    slices_from_records, CategorySeries, ScatterData, ScatterField, Slice, StackedSeries,
};

/// Typed inputs of the six dashboard charts.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardCharts {
    /// Monthly sales and expenses.
    pub sales: CategorySeries,
    /// Quarterly sales trend.
    pub quarterly: CategorySeries,
    /// Units sold against sales, colored by profit margin.
    pub products: ScatterData,
    pub categories: Vec<Slice>,
    /// Age against income, colored by satisfaction.
    pub users: ScatterData,
    /// Visitors, page views and conversions over time.
    pub traffic: StackedSeries,
}

/// Products are drawn on a 0-10 scale like satisfaction scores.
const MARGIN_SCALE: f64 = 10.0;

impl DashboardCharts {
    pub fn from_snapshot(snapshot: &DashboardSnapshot) -> Self {
        DashboardCharts {
            sales: CategorySeries::from_records(&snapshot.sales, "month", &["sales", "expenses"]),
            quarterly: CategorySeries::from_records(&snapshot.quarterly, "quarter", &["sales"]),
            products: ScatterData::from_records(
                &snapshot.products,
                ScatterField::new("units_sold"),
                ScatterField::new("sales").currency(),
                ScatterField::new("profit_margin")
                    .named("Profit Margin", "Profit Margin")
                    .scaled(MARGIN_SCALE),
            ),
            categories: slices_from_records(&snapshot.categories),
            users: ScatterData::demographics(&snapshot.users),
            traffic: StackedSeries::from_records(&snapshot.time_series, "date", &TRAFFIC_KEYS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_snapshot() {
        let rows = |v| serde_json::from_value(v).unwrap();
        let snapshot = DashboardSnapshot {
            sales: rows(json!([{"month": "Jan", "sales": 12000, "expenses": 8000, "profit": 4000}])),
            quarterly: rows(json!([{"quarter": "Q1 2024", "sales": 44000}])),
            products: rows(json!([{"product": "Laptop", "units_sold": 850, "sales": 85000, "profit_margin": 0.35}])),
            users: rows(json!([{"age": 23, "income": 35000, "satisfaction": 7.2}])),
            categories: rows(json!([{"category": "Technology", "value": 350, "color": "#ff6b6b"}])),
            time_series: rows(json!([{"date": "2024-01-01", "visitors": 1200, "page_views": 3400, "conversions": 45}])),
            index: Vec::new(),
        };
        let charts = DashboardCharts::from_snapshot(&snapshot);
        assert_eq!(charts.sales.rows[0].values, vec![12000.0, 8000.0]);
        assert_eq!(charts.quarterly.categories(), vec!["Q1 2024"]);
        assert!((charts.products.points[0].value - 3.5).abs() < 1e-12);
        assert!(charts.products.y.currency);
        assert_eq!(charts.users.x.caption, "Age (years)");
        assert_eq!(charts.categories[0].color, "#ff6b6b");
        assert_eq!(charts.traffic.rows[0].values, vec![1200.0, 3400.0, 45.0]);
    }

    #[test]
    fn test_empty_snapshot() {
        let charts = DashboardCharts::from_snapshot(&DashboardSnapshot::default());
        assert!(charts.sales.is_empty());
        assert!(charts.products.points.is_empty());
        assert!(charts.traffic.is_empty());
    }
}
