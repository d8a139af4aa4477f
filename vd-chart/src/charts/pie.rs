use super::TEXT_COLOR;
use crate::color::OrdinalScale;
use crate::frame::Size;
use crate::input::Slice;
use crate::scene::{Anchor, Emphasis, Mark, Scene, Shape, Style};
use crate::shape::{centroid, pie, sector};
use std::f64::consts::PI;
use vd_utils::numbers::trimmed;

pub const DEFAULT_SIZE: Size = Size::new(400.0, 300.0);
const HOVER_GROWTH: f64 = 10.0;

/// Wedges in input order, labelled outside the pie with leader lines.
pub fn render(data: &[Slice], size: Size) -> Scene {
    let mut scene = Scene::new(size);
    if data.is_empty() {
        return scene;
    }
    let center = (size.width / 2.0, size.height / 2.0);
    let radius = (size.width.min(size.height) / 2.0 - 10.0).max(0.0);
    let label_radius = radius * 0.9;

    let labels: Vec<String> = data.iter().map(|s| s.label.clone()).collect();
    let colors: Vec<String> = data.iter().map(|s| s.color.clone()).collect();
    let mut color = OrdinalScale::with_domain(&labels, &colors);

    let values: Vec<f64> = data.iter().map(|s| s.value).collect();
    let total: f64 = values.iter().sum();

    for arc in pie(&values) {
        let slice = &data[arc.index];
        let (a0, a1) = (arc.start_angle, arc.end_angle);
        let mid = arc.mid_angle();
        let side = if mid < PI { 1.0 } else { -1.0 };
        let percentage = if total != 0.0 {
            slice.value / total * 100.0
        } else {
            0.0
        };

        scene.push(
            Mark::new(
                Shape::Path {
                    d: sector(center, radius, a0, a1),
                },
                Style::fill(&color.color(&slice.label))
                    .with_stroke("#fff", 2.0)
                    .with_pointer(),
            )
            .class("pie-slice")
            .hover(
                format!("slice:{}", arc.index),
                vec![
                    slice.label.clone(),
                    format!("Value: {}", trimmed(slice.value, 3)),
                    format!("Percentage: {:.1}%", percentage),
                ],
                Emphasis::Reshape(sector(center, radius + HOVER_GROWTH, a0, a1)),
            ),
        );

        let outer = centroid(center, label_radius, label_radius, a0, a1);
        scene.push(
            Mark::new(
                Shape::Text {
                    x: center.0 + radius * side,
                    y: outer.1,
                    content: slice.label.clone(),
                    anchor: if side > 0.0 { Anchor::Start } else { Anchor::End },
                    dy: 0.35,
                    rotate: 0.0,
                },
                Style::label(12.0, TEXT_COLOR),
            )
            .class("pie-label"),
        );
        scene.push(
            Mark::new(
                Shape::Polyline {
                    points: vec![
                        centroid(center, 0.0, radius, a0, a1),
                        outer,
                        (center.0 + radius * 0.95 * side, outer.1),
                    ],
                },
                Style::stroke(TEXT_COLOR, 1.0),
            )
            .class("pie-leader"),
        );
    }
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::to_svg;

    fn categories() -> Vec<Slice> {
        [
            ("Technology", 350.0, "#ff6b6b"),
            ("Healthcare", 280.0, "#4ecdc4"),
            ("Finance", 220.0, "#45b7d1"),
            ("Education", 150.0, "#96ceb4"),
        ]
        .iter()
        .map(|(label, value, color)| Slice {
            label: label.to_string(),
            value: *value,
            color: color.to_string(),
        })
        .collect()
    }

    #[test]
    fn test_empty_input_renders_nothing() {
        assert!(render(&[], DEFAULT_SIZE).is_empty());
    }

    #[test]
    fn test_slice_marks_in_input_order() {
        let scene = render(&categories(), DEFAULT_SIZE);
        let slices: Vec<&Mark> = scene.marks_of("pie-slice").collect();
        assert_eq!(slices.len(), 4);
        assert_eq!(slices[0].style.fill.as_deref(), Some("#ff6b6b"));
        // the first wedge starts at 12 o'clock on the 140px radius
        assert!(matches!(&slices[0].shape, Shape::Path { d } if d.starts_with("M200,10A140,140,")));
        assert_eq!(scene.marks_of("pie-leader").count(), 4);
    }

    #[test]
    fn test_labels_anchor_by_side() {
        let scene = render(&categories(), DEFAULT_SIZE);
        let anchors: Vec<Anchor> = scene
            .marks_of("pie-label")
            .filter_map(|m| match m.shape {
                Shape::Text { anchor, .. } => Some(anchor),
                _ => None,
            })
            .collect();
        assert_eq!(anchors[0], Anchor::Start);
        assert_eq!(anchors[3], Anchor::End);
    }

    #[test]
    fn test_tooltip_percentage() {
        let scene = render(&categories(), DEFAULT_SIZE);
        let hover = scene.hover("slice:0").unwrap();
        assert_eq!(
            hover.tooltip,
            vec!["Technology", "Value: 350", "Percentage: 35.0%"]
        );
        assert!(matches!(&hover.emphasis, Emphasis::Reshape(d) if d.starts_with("M200,0A150,150,")));
    }

    #[test]
    fn test_zero_values_still_render() {
        let zeros = vec![
            Slice {
                label: "a".into(),
                value: 0.0,
                color: "#000".into(),
            },
            Slice {
                label: "b".into(),
                value: 0.0,
                color: "#111".into(),
            },
        ];
        let scene = render(&zeros, DEFAULT_SIZE);
        assert_eq!(scene.marks_of("pie-slice").count(), 2);
        assert_eq!(
            scene.hover("slice:1").unwrap().tooltip[2],
            "Percentage: 0.0%"
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let first = render(&categories(), DEFAULT_SIZE);
        let second = render(&categories(), DEFAULT_SIZE);
        assert_eq!(first, second);
        assert_eq!(to_svg(&first), to_svg(&second));
    }
}
