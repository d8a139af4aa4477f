use super::legend;
use crate::axis::Axis;
use crate::color::SERIES_COLORS;
use crate::frame::{Margin, Size};
use crate::input::CategorySeries;
use crate::scale::{BandScale, LinearScale};
use crate::scene::{Emphasis, Mark, Scene, Shape, Style};
use vd_utils::numbers::locale;
use vd_utils::text::capitalize;

pub const DEFAULT_SIZE: Size = Size::new(500.0, 300.0);
const MARGIN: Margin = Margin::new(20.0, 30.0, 40.0, 40.0);

fn series_color(j: usize) -> &'static str {
    SERIES_COLORS[j % SERIES_COLORS.len()]
}

/// Grouped bars: one group per category, one bar per series.
pub fn render(data: &CategorySeries, size: Size) -> Scene {
    let mut scene = Scene::new(size);
    if data.is_empty() {
        return scene;
    }
    let plot = MARGIN.plot(size);

    let x0 = BandScale::new(data.categories(), plot.x_range()).padding(0.1);
    let x1 = BandScale::new(data.series.clone(), (0.0, x0.bandwidth())).padding(0.05);
    let max = data
        .rows
        .iter()
        .flat_map(|r| r.values.iter().copied())
        .fold(f64::NEG_INFINITY, f64::max);
    let y = LinearScale::new((0.0, max), plot.y_range());

    scene.extend(Axis::bottom(plot.bottom(), plot.x_range(), x0.ticks()).marks());
    scene.extend(Axis::left(plot.left, plot.y_range(), y.ticks(10)).marks());

    for (i, row) in data.rows.iter().enumerate() {
        let Some(group_x) = x0.position(&row.category) else {
            continue;
        };
        for (j, (series, &value)) in data.series.iter().zip(&row.values).enumerate() {
            let offset = x1.position(series).unwrap_or(0.0);
            let top = y.scale(value);
            scene.push(
                Mark::new(
                    Shape::Rect {
                        x: group_x + offset,
                        y: top,
                        width: x1.bandwidth(),
                        height: (plot.bottom() - top).max(0.0),
                    },
                    Style::fill(series_color(j)),
                )
                .class("bar")
                .hover(
                    format!("bar:{}:{}", i, j),
                    vec![
                        row.category.clone(),
                        format!("{}: ${}", series, locale(value)),
                    ],
                    Emphasis::Opacity(0.7),
                ),
            );
        }
    }

    let items: Vec<(String, String)> = data
        .series
        .iter()
        .enumerate()
        .map(|(j, s)| (series_color(j).to_string(), capitalize(s)))
        .collect();
    scene.extend(legend(plot.right() - 100.0, plot.top + 20.0, &items));
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::CategoryRow;
    use crate::svg::to_svg;

    fn monthly() -> CategorySeries {
        CategorySeries {
            series: vec!["sales".to_string(), "expenses".to_string()],
            rows: vec![
                CategoryRow {
                    category: "Jan".to_string(),
                    values: vec![12000.0, 8000.0],
                },
                CategoryRow {
                    category: "Feb".to_string(),
                    values: vec![19000.0, 12000.0],
                },
            ],
        }
    }

    #[test]
    fn test_empty_input_renders_nothing() {
        let scene = render(&CategorySeries::default(), DEFAULT_SIZE);
        assert!(scene.is_empty());
        assert_eq!(scene.size, DEFAULT_SIZE);
    }

    #[test]
    fn test_one_bar_per_series_and_category() {
        let scene = render(&monthly(), DEFAULT_SIZE);
        let bars: Vec<&Mark> = scene.marks_of("bar").collect();
        assert_eq!(bars.len(), 4);
        // the tallest bar reaches the top of the plot
        let tallest = bars
            .iter()
            .filter_map(|m| match m.shape {
                Shape::Rect { y, height, .. } => Some((y, height)),
                _ => None,
            })
            .fold((f64::INFINITY, 0.0), |acc, (y, h)| if y < acc.0 { (y, h) } else { acc });
        assert_eq!(tallest, (20.0, 240.0));
        assert_eq!(bars[1].style.fill.as_deref(), Some("#EF4444"));
    }

    #[test]
    fn test_tooltip_and_legend() {
        let scene = render(&monthly(), DEFAULT_SIZE);
        let hover = scene.hover("bar:1:0").unwrap();
        assert_eq!(hover.tooltip, vec!["Feb", "sales: $19,000"]);
        assert_eq!(hover.emphasis, Emphasis::Opacity(0.7));
        let labels: Vec<String> = scene
            .marks_of("legend")
            .filter_map(|m| match &m.shape {
                Shape::Text { content, .. } => Some(content.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["Sales", "Expenses"]);
    }

    #[test]
    fn test_render_is_idempotent() {
        let first = render(&monthly(), DEFAULT_SIZE);
        let second = render(&monthly(), DEFAULT_SIZE);
        assert_eq!(first, second);
        assert_eq!(to_svg(&first), to_svg(&second));
    }
}
