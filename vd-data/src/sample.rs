//! Client-side placeholder data.

use crate::forms::DraftRow;
use vd_chart::input::{Graph, GraphLink, GraphNode};

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Integer in `[low, low + span)` from a uniform sample in `[0, 1)`.
fn whole(random: &mut impl FnMut() -> f64, low: f64, span: f64) -> f64 {
    let t = random().clamp(0.0, 1.0);
    (t * span).floor().min(span - 1.0) + low
}

/// Twelve months with sales in `[10000, 60000)` and expenses in `[5000, 35000)`.
pub fn sample_sales(mut random: impl FnMut() -> f64) -> Vec<DraftRow> {
    MONTHS
        .iter()
        .map(|month| {
            let sales = whole(&mut random, 10000.0, 50000.0);
            let expenses = whole(&mut random, 5000.0, 30000.0);
            DraftRow::new(month, sales, expenses)
        })
        .collect()
}

/// The three-node graph shown in the network demo.
pub fn demo_graph() -> Graph {
    let node = |id: &str, group, size| GraphNode {
        id: id.to_string(),
        group,
        size: Some(size),
    };
    let link = |source: &str, target: &str, value| GraphLink {
        source: source.to_string(),
        target: target.to_string(),
        value,
    };
    Graph {
        nodes: vec![node("A", 1, 10.0), node("B", 1, 15.0), node("C", 2, 12.0)],
        links: vec![link("A", "B", 1.0), link("B", "C", 2.0)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_sales_bounds() {
        let mut values = [0.0, 0.999_999_9, 0.5].into_iter().cycle();
        let rows = sample_sales(|| values.next().unwrap_or(0.0));
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].month, "Jan");
        assert_eq!(rows[11].month, "Dec");
        for row in &rows {
            assert!((10000.0..60000.0).contains(&row.sales));
            assert!((5000.0..35000.0).contains(&row.expenses));
            assert_eq!(row.sales.fract(), 0.0);
            assert_eq!(row.expenses.fract(), 0.0);
        }
        assert_eq!(rows[0].sales, 10000.0);
        assert_eq!(rows[0].expenses, 34999.0);
    }

    #[test]
    fn test_sample_sales_clamps_out_of_range() {
        let rows = sample_sales(|| 1.0);
        assert_eq!(rows[0].sales, 59999.0);
    }

    #[test]
    fn test_demo_graph() {
        let graph = demo_graph();
        assert_eq!(graph.nodes.len(), 3);
        assert_eq!(graph.resolved_links().len(), 2);
        assert_eq!(graph.links[1].value, 2.0);
    }
}
