use super::legend;
use crate::axis::Axis;
use crate::color::{OrdinalScale, SERIES_COLORS};
use crate::frame::{Margin, Size};
use crate::input::StackedSeries;
use crate::scale::{LinearScale, TimeScale};
use crate::scene::{Emphasis, Mark, Scene, Shape, Style};
use crate::shape::{monotone_area, stack};
use vd_utils::text::{humanize, shout};

pub const DEFAULT_SIZE: Size = Size::new(800.0, 300.0);
const MARGIN: Margin = Margin::new(20.0, 30.0, 40.0, 50.0);
const AREA_COLORS: [&str; 3] = ["#4F46E5", "#06B6D4", "#10B981"];
const AREA_OPACITY: f64 = 0.8;

/// Series keys the dashboard stacks from the time series dataset.
pub const TRAFFIC_KEYS: [&str; 3] = ["visitors", "page_views", "conversions"];

fn palette() -> Vec<&'static str> {
    AREA_COLORS
        .iter()
        .chain(SERIES_COLORS.iter().filter(|c| !AREA_COLORS.contains(c)))
        .copied()
        .collect()
}

/// Stacked smooth areas over a date axis, first key at the bottom.
pub fn render(data: &StackedSeries, size: Size) -> Scene {
    let mut scene = Scene::new(size);
    if data.is_empty() {
        return scene;
    }
    let plot = MARGIN.plot(size);

    let mut rows: Vec<_> = data.rows.iter().collect();
    rows.sort_by_key(|r| r.date);
    let (Some(first), Some(last)) = (rows.first(), rows.last()) else {
        return scene;
    };
    let x = TimeScale::new((first.date, last.date), plot.x_range());
    let max_total = rows
        .iter()
        .map(|r| r.values.iter().filter(|v| v.is_finite()).sum::<f64>())
        .fold(f64::NEG_INFINITY, f64::max);
    let y = LinearScale::new((0.0, max_total), plot.y_range());

    scene.extend(Axis::bottom(plot.bottom(), plot.x_range(), x.ticks(10)).marks());
    scene.extend(Axis::left(plot.left, plot.y_range(), y.ticks(10)).marks());

    let values: Vec<Vec<f64>> = rows.iter().map(|r| r.values.clone()).collect();
    let layers = stack(&values, data.keys.len());
    let mut color = OrdinalScale::new(&palette());

    for (j, (key, layer)) in data.keys.iter().zip(&layers).enumerate() {
        let (top, base): (Vec<(f64, f64)>, Vec<(f64, f64)>) = rows
            .iter()
            .zip(layer)
            .map(|(row, &(lo, hi))| {
                let px = x.scale(&row.date);
                ((px, y.scale(hi)), (px, y.scale(lo)))
            })
            .unzip();
        scene.push(
            Mark::new(
                Shape::Path {
                    d: monotone_area(&top, &base),
                },
                Style::fill(&color.color(key)).with_opacity(AREA_OPACITY),
            )
            .class("area")
            .hover(
                format!("area:{}", j),
                vec![format!("Metric: {}", shout(key))],
                Emphasis::Opacity(1.0),
            ),
        );
    }

    let items: Vec<(String, String)> = data
        .keys
        .iter()
        .map(|k| (color.color(k), humanize(k)))
        .collect();
    scene.extend(legend(plot.right() - 150.0, plot.top + 20.0, &items));
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::StackedRow;
    use crate::svg::to_svg;
    use chrono::NaiveDate;

    fn traffic() -> StackedSeries {
        let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        StackedSeries {
            keys: TRAFFIC_KEYS.iter().map(|k| k.to_string()).collect(),
            rows: vec![
                StackedRow {
                    date: day(3),
                    values: vec![1300.0, 3100.0, 50.0],
                },
                StackedRow {
                    date: day(1),
                    values: vec![1200.0, 3400.0, 45.0],
                },
                StackedRow {
                    date: day(2),
                    values: vec![1350.0, 3600.0, 52.0],
                },
            ],
        }
    }

    #[test]
    fn test_empty_input_renders_nothing() {
        assert!(render(&StackedSeries::default(), DEFAULT_SIZE).is_empty());
    }

    #[test]
    fn test_one_area_per_key_in_order() {
        let scene = render(&traffic(), DEFAULT_SIZE);
        let areas: Vec<&Mark> = scene.marks_of("area").collect();
        assert_eq!(areas.len(), 3);
        let fills: Vec<&str> = areas.iter().filter_map(|m| m.style.fill.as_deref()).collect();
        assert_eq!(fills, vec!["#4F46E5", "#06B6D4", "#10B981"]);
        assert!(areas.iter().all(|m| m.style.opacity == Some(0.8)));
        // rows are drawn in date order, starting at the left edge
        assert!(matches!(&areas[0].shape, Shape::Path { d } if d.starts_with("M50,") && d.ends_with('Z')));
    }

    #[test]
    fn test_top_layer_reaches_max_total() {
        let scene = render(&traffic(), DEFAULT_SIZE);
        let top = scene.marks_of("area").last().unwrap();
        // the Jan 2 total is the largest, so the top edge touches y = 20 there
        assert!(matches!(&top.shape, Shape::Path { d } if d.contains(",20")));
    }

    #[test]
    fn test_tooltip_and_legend() {
        let scene = render(&traffic(), DEFAULT_SIZE);
        let hover = scene.hover("area:1").unwrap();
        assert_eq!(hover.tooltip, vec!["Metric: PAGE VIEWS"]);
        assert_eq!(hover.emphasis, Emphasis::Opacity(1.0));
        let labels: Vec<String> = scene
            .marks_of("legend")
            .filter_map(|m| match &m.shape {
                Shape::Text { content, .. } => Some(content.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["Visitors", "Page Views", "Conversions"]);
    }

    #[test]
    fn test_date_ticks() {
        let scene = render(&traffic(), DEFAULT_SIZE);
        let labels: Vec<String> = scene
            .marks_of("axis")
            .filter_map(|m| match &m.shape {
                Shape::Text { content, .. } => Some(content.clone()),
                _ => None,
            })
            .collect();
        assert!(labels.contains(&"01/01".to_string()));
        assert!(labels.contains(&"01/03".to_string()));
    }

    #[test]
    fn test_render_is_idempotent() {
        let first = render(&traffic(), DEFAULT_SIZE);
        let second = render(&traffic(), DEFAULT_SIZE);
        assert_eq!(first, second);
        assert_eq!(to_svg(&first), to_svg(&second));
    }
}
