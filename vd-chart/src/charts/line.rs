use crate::axis::Axis;
use crate::frame::{Margin, Size};
use crate::input::CategorySeries;
use crate::scale::{BandScale, LinearScale};
use crate::scene::{Emphasis, Mark, Scene, Shape, Style};
use crate::shape::monotone_line;
use vd_utils::numbers::locale;
use vd_utils::text::capitalize;

pub const DEFAULT_SIZE: Size = Size::new(500.0, 300.0);
const MARGIN: Margin = Margin::new(20.0, 30.0, 40.0, 50.0);
const LINE_COLOR: &str = "#4F46E5";
const DOT_RADIUS: f64 = 4.0;
const DOT_RADIUS_HOVER: f64 = 6.0;

/// Smooth line over the first series, with a dot per category.
pub fn render(data: &CategorySeries, size: Size) -> Scene {
    let mut scene = Scene::new(size);
    if data.is_empty() {
        return scene;
    }
    let plot = MARGIN.plot(size);
    let series = capitalize(&data.series[0]);

    let x = BandScale::point(data.categories(), plot.x_range());
    let max = data
        .rows
        .iter()
        .filter_map(|r| r.values.first().copied())
        .fold(f64::NEG_INFINITY, f64::max);
    let y = LinearScale::new((0.0, max), plot.y_range());

    let x_axis = Axis::bottom(plot.bottom(), plot.x_range(), x.ticks());
    let y_axis = Axis::left(plot.left, plot.y_range(), y.ticks(10));
    scene.extend(x_axis.marks());
    scene.extend(y_axis.marks());
    scene.extend(x_axis.grid_marks(plot.height));
    scene.extend(y_axis.grid_marks(plot.width));

    let points: Vec<(f64, f64, &str, f64)> = data
        .rows
        .iter()
        .filter_map(|r| {
            let value = *r.values.first()?;
            Some((x.position(&r.category)?, y.scale(value), r.category.as_str(), value))
        })
        .collect();
    let path: Vec<(f64, f64)> = points.iter().map(|p| (p.0, p.1)).collect();
    scene.push(
        Mark::new(
            Shape::Path {
                d: monotone_line(&path),
            },
            Style::stroke(LINE_COLOR, 3.0),
        )
        .class("line"),
    );

    for (i, (cx, cy, category, value)) in points.into_iter().enumerate() {
        scene.push(
            Mark::new(Shape::Circle { cx, cy, r: DOT_RADIUS }, Style::fill(LINE_COLOR))
                .class("dot")
                .hover(
                    format!("dot:{}", i),
                    vec![
                        category.to_string(),
                        format!("{}: ${}", series, locale(value)),
                    ],
                    Emphasis::Grow {
                        r: DOT_RADIUS_HOVER,
                        stroke_width: None,
                    },
                ),
        );
    }
    scene
}
