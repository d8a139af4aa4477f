use super::TEXT_COLOR;
use crate::axis::Axis;
use crate::color::{viridis, SequentialScale};
use crate::frame::{Margin, Size};
use crate::input::{ScatterData, ScatterField};
use crate::scale::{extent, LinearScale};
use crate::scene::{
    Anchor, Emphasis, GradientStop, LinearGradient, Mark, Scene, Shape, Style,
};
use vd_utils::numbers::{locale, trimmed};

pub const DEFAULT_SIZE: Size = Size::new(500.0, 300.0);
const MARGIN: Margin = Margin::new(20.0, 30.0, 40.0, 60.0);
const DOT_RADIUS: f64 = 5.0;
const LEGEND_WIDTH: f64 = 200.0;
const LEGEND_HEIGHT: f64 = 10.0;

fn describe(field: &ScatterField, value: f64) -> String {
    if field.currency {
        format!("{}: ${}", field.name, locale(value))
    } else {
        format!("{}: {}", field.name, trimmed(value, 3))
    }
}

/// Points placed by two fields and colored by a third on the viridis ramp.
pub fn render(data: &ScatterData, size: Size) -> Scene {
    let mut scene = Scene::new(size);
    let (Some(x_extent), Some(y_extent), Some(v_extent)) = (
        extent(data.points.iter().map(|p| p.x)),
        extent(data.points.iter().map(|p| p.y)),
        extent(data.points.iter().map(|p| p.value)),
    ) else {
        return scene;
    };
    let plot = MARGIN.plot(size);
    let x = LinearScale::new(x_extent, plot.x_range());
    let y = LinearScale::new(y_extent, plot.y_range());
    let color = SequentialScale::new(v_extent);

    scene.extend(Axis::bottom(plot.bottom(), plot.x_range(), x.ticks(10)).marks());
    scene.extend(Axis::left(plot.left, plot.y_range(), y.ticks(10)).marks());

    scene.push(
        Mark::new(
            Shape::Text {
                x: plot.left - MARGIN.left,
                y: plot.top + plot.height / 2.0,
                content: data.y.caption.clone(),
                anchor: Anchor::Middle,
                dy: 1.0,
                rotate: -90.0,
            },
            Style::label(12.0, TEXT_COLOR),
        )
        .class("caption"),
    );
    scene.push(
        Mark::new(
            Shape::Text {
                x: plot.left + plot.width / 2.0,
                y: plot.bottom() + MARGIN.bottom,
                content: data.x.caption.clone(),
                anchor: Anchor::Middle,
                dy: 0.0,
                rotate: 0.0,
            },
            Style::label(12.0, TEXT_COLOR),
        )
        .class("caption"),
    );

    for (i, p) in data.points.iter().enumerate() {
        scene.push(
            Mark::new(
                Shape::Circle {
                    cx: x.scale(p.x),
                    cy: y.scale(p.y),
                    r: DOT_RADIUS,
                },
                Style::fill(&color.color(p.value)).with_stroke("#fff", 1.0),
            )
            .class("scatter-dot")
            .hover(
                format!("point:{}", i),
                vec![
                    describe(&data.x, p.x),
                    describe(&data.y, p.y),
                    describe(&data.value, p.value),
                ],
                Emphasis::Grow {
                    r: 7.0,
                    stroke_width: Some(2.0),
                },
            ),
        );
    }

    let gradient_id = format!("{}-gradient", data.value.key.replace('_', "-"));
    scene.gradients.push(LinearGradient {
        id: gradient_id.clone(),
        stops: vec![
            GradientStop {
                offset: 0.0,
                color: viridis(0.0),
            },
            GradientStop {
                offset: 1.0,
                color: viridis(1.0),
            },
        ],
    });
    let lx = plot.right() - LEGEND_WIDTH - 20.0;
    let ly = plot.bottom() - 40.0;
    scene.push(
        Mark::new(
            Shape::Rect {
                x: lx,
                y: ly,
                width: LEGEND_WIDTH,
                height: LEGEND_HEIGHT,
            },
            Style::fill(&format!("url(#{})", gradient_id)),
        )
        .class("legend"),
    );
    scene.push(
        Mark::new(
            Shape::text(lx, ly + LEGEND_HEIGHT + 15.0, format!("Low {}", data.value.name)),
            Style::label(10.0, TEXT_COLOR),
        )
        .class("legend"),
    );
    scene.push(
        Mark::new(
            Shape::Text {
                x: lx + LEGEND_WIDTH,
                y: ly + LEGEND_HEIGHT + 15.0,
                content: format!("High {}", data.value.name),
                anchor: Anchor::End,
                dy: 0.0,
                rotate: 0.0,
            },
            Style::label(10.0, TEXT_COLOR),
        )
        .class("legend"),
    );
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScatterPoint;
    use crate::svg::to_svg;

    fn users(points: Vec<(f64, f64, f64)>) -> ScatterData {
        ScatterData {
            x: ScatterField::new("age").named("Age", "Age (years)"),
            y: ScatterField::new("income").named("Income", "Income ($)").currency(),
            value: ScatterField::new("satisfaction").named("Satisfaction", "Satisfaction"),
            points: points
                .into_iter()
                .map(|(x, y, value)| ScatterPoint { x, y, value })
                .collect(),
        }
    }

    #[test]
    fn test_empty_input_renders_nothing() {
        let scene = render(&users(Vec::new()), DEFAULT_SIZE);
        assert!(scene.is_empty());
        assert!(scene.gradients.is_empty());
    }

    #[test]
    fn test_points_cover_extents() {
        let scene = render(
            &users(vec![(23.0, 35000.0, 7.2), (78.0, 82000.0, 8.4), (45.0, 65000.0, 6.7)]),
            DEFAULT_SIZE,
        );
        let dots: Vec<&Mark> = scene.marks_of("scatter-dot").collect();
        assert_eq!(dots.len(), 3);
        assert!(matches!(dots[0].shape, Shape::Circle { cx, cy, .. } if cx == 60.0 && cy == 260.0));
        assert!(matches!(dots[1].shape, Shape::Circle { cx, cy, .. } if cx == 470.0 && cy == 20.0));
        assert_eq!(dots[2].style.fill.as_deref(), Some("#440154"));
        assert_eq!(dots[1].style.fill.as_deref(), Some("#fde725"));
    }

    #[test]
    fn test_tooltip_fields() {
        let scene = render(&users(vec![(23.0, 35000.0, 7.2)]), DEFAULT_SIZE);
        assert_eq!(
            scene.hover("point:0").unwrap().tooltip,
            vec!["Age: 23", "Income: $35,000", "Satisfaction: 7.2"]
        );
    }

    #[test]
    fn test_gradient_legend() {
        let scene = render(&users(vec![(23.0, 35000.0, 7.2)]), DEFAULT_SIZE);
        assert_eq!(scene.gradients[0].id, "satisfaction-gradient");
        let texts: Vec<String> = scene
            .marks_of("legend")
            .filter_map(|m| match &m.shape {
                Shape::Text { content, .. } => Some(content.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["Low Satisfaction", "High Satisfaction"]);
    }

    #[test]
    fn test_render_is_idempotent() {
        let data = users(vec![(23.0, 35000.0, 7.2), (78.0, 82000.0, 8.4), (45.0, 65000.0, 6.7)]);
        let first = render(&data, DEFAULT_SIZE);
        let second = render(&data, DEFAULT_SIZE);
        assert_eq!(first, second);
        assert_eq!(to_svg(&first), to_svg(&second));
    }
}
