use crate::scale::Tick;
use crate::scene::{Anchor, Mark, Shape, Style};
use vd_utils::numbers::svg_number;

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;
const AXIS_COLOR: &str = "currentColor";
const GRID_COLOR: &str = "#e5e7eb";
const AXIS_FONT_SIZE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

/// An axis drawn along one edge of the plot.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    orient: Orient,
    /// Absolute y of a bottom axis, or x of a left axis.
    offset: f64,
    range: (f64, f64),
    ticks: Vec<Tick>,
}

impl Axis {
    pub fn bottom(y: f64, range: (f64, f64), ticks: Vec<Tick>) -> Self {
        Axis {
            orient: Orient::Bottom,
            offset: y,
            range,
            ticks,
        }
    }

    pub fn left(x: f64, range: (f64, f64), ticks: Vec<Tick>) -> Self {
        Axis {
            orient: Orient::Left,
            offset: x,
            range,
            ticks,
        }
    }

    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    fn domain_path(&self) -> String {
        let (r0, r1) = (svg_number(self.range.0), svg_number(self.range.1));
        let o = self.offset;
        match self.orient {
            Orient::Bottom => format!(
                "M{},{}V{}H{}V{}",
                r0,
                svg_number(o + TICK_SIZE),
                svg_number(o),
                r1,
                svg_number(o + TICK_SIZE)
            ),
            Orient::Left => format!(
                "M{},{}H{}V{}H{}",
                svg_number(o - TICK_SIZE),
                r0,
                svg_number(o),
                r1,
                svg_number(o - TICK_SIZE)
            ),
        }
    }

    /// Domain line, tick lines and labels.
    pub fn marks(&self) -> Vec<Mark> {
        let mut marks = vec![Mark::new(
            Shape::Path {
                d: self.domain_path(),
            },
            Style::stroke(AXIS_COLOR, 1.0),
        )
        .class("axis")];
        for tick in &self.ticks {
            let p = tick.position;
            let (line, label) = match self.orient {
                Orient::Bottom => (
                    Shape::Line {
                        x1: p,
                        y1: self.offset,
                        x2: p,
                        y2: self.offset + TICK_SIZE,
                    },
                    Shape::Text {
                        x: p,
                        y: self.offset + TICK_SIZE + TICK_PADDING,
                        content: tick.label.clone(),
                        anchor: Anchor::Middle,
                        dy: 0.71,
                        rotate: 0.0,
                    },
                ),
                Orient::Left => (
                    Shape::Line {
                        x1: self.offset,
                        y1: p,
                        x2: self.offset - TICK_SIZE,
                        y2: p,
                    },
                    Shape::Text {
                        x: self.offset - TICK_SIZE - TICK_PADDING,
                        y: p,
                        content: tick.label.clone(),
                        anchor: Anchor::End,
                        dy: 0.32,
                        rotate: 0.0,
                    },
                ),
            };
            marks.push(Mark::new(line, Style::stroke(AXIS_COLOR, 1.0)).class("axis"));
            marks.push(Mark::new(label, Style::label(AXIS_FONT_SIZE, AXIS_COLOR)).class("axis"));
        }
        marks
    }

    /// Unlabelled tick lines stretched `length` across the plot.
    pub fn grid_marks(&self, length: f64) -> Vec<Mark> {
        self.ticks
            .iter()
            .map(|tick| {
                let p = tick.position;
                let line = match self.orient {
                    Orient::Bottom => Shape::Line {
                        x1: p,
                        y1: self.offset,
                        x2: p,
                        y2: self.offset - length,
                    },
                    Orient::Left => Shape::Line {
                        x1: self.offset,
                        y1: p,
                        x2: self.offset + length,
                        y2: p,
                    },
                };
                Mark::new(line, Style::stroke(GRID_COLOR, 1.0)).class("grid")
            })
            .collect()
    }
}
