//! The flat mark model every chart renders into.
//!
//! A [`Scene`] is an ordered list of [`Mark`]s in absolute canvas
//! coordinates, drawn back to front. Rendering the same input twice yields
//! equal scenes, so scenes double as test snapshots.

use crate::frame::Size;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    Path {
        d: String,
    },
    Polyline {
        points: Vec<(f64, f64)>,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        anchor: Anchor,
        /// Baseline shift in `em`.
        dy: f64,
        /// Rotation in degrees around `(x, y)`.
        rotate: f64,
    },
}

impl Shape {
    pub fn text(x: f64, y: f64, content: impl Into<String>) -> Self {
        Shape::Text {
            x,
            y,
            content: content.into(),
            anchor: Anchor::Start,
            dy: 0.0,
            rotate: 0.0,
        }
    }
}

/// Presentation attributes; `None` leaves the SVG default.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub stroke_opacity: Option<f64>,
    pub opacity: Option<f64>,
    pub font_size: Option<f64>,
    pub pointer: bool,
    pub passive: bool,
}

impl Style {
    pub fn fill(color: &str) -> Self {
        Style {
            fill: Some(color.to_string()),
            ..Style::default()
        }
    }

    pub fn stroke(color: &str, width: f64) -> Self {
        Style {
            fill: Some("none".to_string()),
            stroke: Some(color.to_string()),
            stroke_width: Some(width),
            ..Style::default()
        }
    }

    /// Label text: size in px plus fill.
    pub fn label(size: f64, color: &str) -> Self {
        Style {
            fill: Some(color.to_string()),
            font_size: Some(size),
            ..Style::default()
        }
    }

    pub fn with_stroke(mut self, color: &str, width: f64) -> Self {
        self.stroke = Some(color.to_string());
        self.stroke_width = Some(width);
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_stroke_opacity(mut self, opacity: f64) -> Self {
        self.stroke_opacity = Some(opacity);
        self
    }

    pub fn with_pointer(mut self) -> Self {
        self.pointer = true;
        self
    }

    /// Ignore pointer events.
    pub fn passive(mut self) -> Self {
        self.passive = true;
        self
    }
}

/// How a mark changes while hovered.
#[derive(Debug, Clone, PartialEq)]
pub enum Emphasis {
    Opacity(f64),
    Grow { r: f64, stroke_width: Option<f64> },
    Reshape(String),
}

/// Hover behavior of an interactive mark.
#[derive(Debug, Clone, PartialEq)]
pub struct Hover {
    /// Unique within the scene.
    pub key: String,
    pub tooltip: Vec<String>,
    pub emphasis: Emphasis,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    pub shape: Shape,
    pub style: Style,
    pub class: Option<&'static str>,
    pub hover: Option<Hover>,
}

impl Mark {
    pub fn new(shape: Shape, style: Style) -> Self {
        Mark {
            shape,
            style,
            class: None,
            hover: None,
        }
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn hover(mut self, key: String, tooltip: Vec<String>, emphasis: Emphasis) -> Self {
        self.hover = Some(Hover {
            key,
            tooltip,
            emphasis,
        });
        self
    }

    pub fn key(&self) -> Option<&str> {
        self.hover.as_ref().map(|h| h.key.as_str())
    }

    /// This mark as drawn while hovered.
    pub fn emphasized(&self) -> Mark {
        let mut mark = self.clone();
        let Some(hover) = &self.hover else {
            return mark;
        };
        match (&hover.emphasis, &mut mark.shape) {
            (Emphasis::Opacity(o), _) => mark.style.opacity = Some(*o),
            (Emphasis::Grow { r, stroke_width }, Shape::Circle { r: radius, .. }) => {
                *radius = *r;
                if let Some(w) = stroke_width {
                    mark.style.stroke_width = Some(*w);
                }
            }
            (Emphasis::Reshape(d), Shape::Path { d: path }) => *path = d.clone(),
            _ => {}
        }
        mark
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    /// 0.0 to 1.0
    pub offset: f64,
    pub color: String,
}

/// Horizontal gradient referenced as `url(#id)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub id: String,
    pub stops: Vec<GradientStop>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub size: Size,
    pub gradients: Vec<LinearGradient>,
    pub marks: Vec<Mark>,
}

impl Scene {
    pub fn new(size: Size) -> Self {
        Scene {
            size,
            gradients: Vec::new(),
            marks: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn push(&mut self, mark: Mark) {
        self.marks.push(mark);
    }

    pub fn extend(&mut self, marks: impl IntoIterator<Item = Mark>) {
        self.marks.extend(marks);
    }

    pub fn hover(&self, key: &str) -> Option<&Hover> {
        self.marks
            .iter()
            .filter_map(|m| m.hover.as_ref())
            .find(|h| h.key == key)
    }

    /// Marks of one class, in drawing order.
    pub fn marks_of<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Mark> + 'a {
        self.marks.iter().filter(move |m| m.class == Some(class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot() -> Mark {
        Mark::new(
            Shape::Circle {
                cx: 1.0,
                cy: 2.0,
                r: 4.0,
            },
            Style::fill("#4F46E5").with_stroke("#fff", 1.0),
        )
        .class("dot")
        .hover(
            "dot:0".to_string(),
            vec!["Jan".to_string()],
            Emphasis::Grow {
                r: 6.0,
                stroke_width: Some(2.0),
            },
        )
    }

    #[test]
    fn test_grow_emphasis() {
        let hovered = dot().emphasized();
        assert!(matches!(hovered.shape, Shape::Circle { r, .. } if r == 6.0));
        assert_eq!(hovered.style.stroke_width, Some(2.0));
    }

    #[test]
    fn test_opacity_emphasis_keeps_shape() {
        let bar = Mark::new(
            Shape::Rect {
                x: 0.0,
                y: 0.0,
                width: 5.0,
                height: 5.0,
            },
            Style::fill("#EF4444"),
        )
        .hover("bar".to_string(), Vec::new(), Emphasis::Opacity(0.7));
        let hovered = bar.emphasized();
        assert_eq!(hovered.shape, bar.shape);
        assert_eq!(hovered.style.opacity, Some(0.7));
    }

    #[test]
    fn test_lookup_by_key_and_class() {
        let mut scene = Scene::new(Size::new(10.0, 10.0));
        assert!(scene.is_empty());
        scene.push(dot());
        assert_eq!(scene.hover("dot:0").map(|h| h.tooltip.len()), Some(1));
        assert!(scene.hover("dot:1").is_none());
        assert_eq!(scene.marks_of("dot").count(), 1);
    }
}
