//! One renderer per chart kind. Each is a pure function of its input and
//! canvas size; empty input renders an empty scene.

pub mod area;
pub mod bar;
pub mod line;
pub mod network;
pub mod pie;
pub mod scatter;

use crate::frame::Size;
use crate::input::ChartInput;
use crate::scene::{Mark, Scene, Shape, Style};

/// Color of labels, captions and legend text.
pub const TEXT_COLOR: &str = "#374151";

const LEGEND_SWATCH: f64 = 15.0;
const LEGEND_ROW: f64 = 20.0;

/// Swatch-and-label rows stacked downward from `(x, y)`.
pub(crate) fn legend(x: f64, y: f64, items: &[(String, String)]) -> Vec<Mark> {
    let mut marks = Vec::with_capacity(items.len() * 2);
    for (i, (color, text)) in items.iter().enumerate() {
        let top = y + i as f64 * LEGEND_ROW;
        marks.push(
            Mark::new(
                Shape::Rect {
                    x,
                    y: top,
                    width: LEGEND_SWATCH,
                    height: LEGEND_SWATCH,
                },
                Style::fill(color),
            )
            .class("legend"),
        );
        marks.push(
            Mark::new(
                Shape::text(x + 20.0, top + 12.0, text.clone()),
                Style::label(12.0, TEXT_COLOR),
            )
            .class("legend"),
        );
    }
    marks
}

/// Render any chart input at the given size.
pub fn render(input: &ChartInput, size: Size) -> Scene {
    match input {
        ChartInput::Bar(data) => bar::render(data, size),
        ChartInput::Line(data) => line::render(data, size),
        ChartInput::Scatter(data) => scatter::render(data, size),
        ChartInput::Pie(data) => pie::render(data, size),
        ChartInput::Area(data) => area::render(data, size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legend_rows() {
        let marks = legend(
            10.0,
            20.0,
            &[
                ("#4F46E5".to_string(), "Sales".to_string()),
                ("#EF4444".to_string(), "Expenses".to_string()),
            ],
        );
        assert_eq!(marks.len(), 4);
        assert_eq!(
            marks[2].shape,
            Shape::Rect {
                x: 10.0,
                y: 40.0,
                width: 15.0,
                height: 15.0
            }
        );
    }
}
