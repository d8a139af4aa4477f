//! Shape generators: smooth lines and areas, pie arcs, stacking.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use vd_utils::numbers::svg_number;

const EPSILON: f64 = 1e-12;

/// Accumulates SVG path data.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PathBuilder {
    d: String,
}

impl PathBuilder {
    pub fn new() -> Self {
        PathBuilder::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.d.push_str(&format!("M{},{}", svg_number(x), svg_number(y)));
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.d.push_str(&format!("L{},{}", svg_number(x), svg_number(y)));
    }

    pub fn bezier_to(&mut self, c1: (f64, f64), c2: (f64, f64), to: (f64, f64)) {
        self.d.push_str(&format!(
            "C{},{},{},{},{},{}",
            svg_number(c1.0),
            svg_number(c1.1),
            svg_number(c2.0),
            svg_number(c2.1),
            svg_number(to.0),
            svg_number(to.1)
        ));
    }

    /// Elliptical arc command with equal radii.
    pub fn arc_to(&mut self, r: f64, large: bool, sweep: bool, x: f64, y: f64) {
        self.d.push_str(&format!(
            "A{},{},0,{},{},{},{}",
            svg_number(r),
            svg_number(r),
            large as u8,
            sweep as u8,
            svg_number(x),
            svg_number(y)
        ));
    }

    pub fn close(&mut self) {
        self.d.push('Z');
    }

    pub fn is_empty(&self) -> bool {
        self.d.is_empty()
    }

    pub fn finish(self) -> String {
        self.d
    }
}

/// Slope of the chord from `a` to `b`; vertical chords count as flat.
fn secant(a: (f64, f64), b: (f64, f64)) -> f64 {
    let h = b.0 - a.0;
    if h == 0.0 {
        0.0
    } else {
        (b.1 - a.1) / h
    }
}

/// Tangent at every point of a cubic that stays monotone in y between
/// neighbouring points (Steffen's method). `points` needs at least three
/// entries and must be ordered by x.
fn monotone_tangents(points: &[(f64, f64)]) -> Vec<f64> {
    let n = points.len();
    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        let (prev, here, next) = (points[i - 1], points[i], points[i + 1]);
        let (h0, h1) = (here.0 - prev.0, next.0 - here.0);
        let (s0, s1) = (secant(prev, here), secant(here, next));
        let p = (s0 * h1 + s1 * h0) / (h0 + h1);
        let t = (s0.signum() + s1.signum()) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
        tangents[i] = if t.is_finite() { t } else { 0.0 };
    }
    // one-sided tangents at the ends
    tangents[0] = (3.0 * secant(points[0], points[1]) - tangents[1]) / 2.0;
    tangents[n - 1] = (3.0 * secant(points[n - 2], points[n - 1]) - tangents[n - 2]) / 2.0;
    tangents
}

/// Append a monotone run through `points` to `path`, starting with a move or,
/// when `join` is set, a line from the current point.
fn monotone_run(path: &mut PathBuilder, points: &[(f64, f64)], join: bool) {
    let mut points: Vec<(f64, f64)> = points.to_vec();
    points.dedup();
    let Some(&(x0, y0)) = points.first() else {
        return;
    };
    if join {
        path.line_to(x0, y0);
    } else {
        path.move_to(x0, y0);
    }
    match points.len() {
        1 => {}
        2 => path.line_to(points[1].0, points[1].1),
        _ => {
            let tangents = monotone_tangents(&points);
            for (i, pair) in points.windows(2).enumerate() {
                let (a, b) = (pair[0], pair[1]);
                let dx = (b.0 - a.0) / 3.0;
                path.bezier_to(
                    (a.0 + dx, a.1 + dx * tangents[i]),
                    (b.0 - dx, b.1 - dx * tangents[i + 1]),
                    b,
                );
            }
        }
    }
}

/// Smooth line through `points`. A lone point yields a closed zero-length path.
pub fn monotone_line(points: &[(f64, f64)]) -> String {
    let mut path = PathBuilder::new();
    monotone_run(&mut path, points, false);
    let lone = points.windows(2).all(|w| w[0] == w[1]);
    if !points.is_empty() && lone {
        path.close();
    }
    path.finish()
}

/// Closed band between a smooth top edge and a smooth base edge.
///
/// `top` and `base` are given left to right and must be the same length.
pub fn monotone_area(top: &[(f64, f64)], base: &[(f64, f64)]) -> String {
    let mut path = PathBuilder::new();
    if top.is_empty() {
        return path.finish();
    }
    monotone_run(&mut path, top, false);
    let reversed: Vec<(f64, f64)> = base.iter().rev().copied().collect();
    monotone_run(&mut path, &reversed, true);
    path.close();
    path.finish()
}

/// One slice of a pie, angles in radians clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub index: usize,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl PieSlice {
    pub fn mid_angle(&self) -> f64 {
        self.start_angle + (self.end_angle - self.start_angle) / 2.0
    }
}

/// Lay values out around the full circle in input order.
///
/// Values that are not positive get a zero sweep.
pub fn pie(values: &[f64]) -> Vec<PieSlice> {
    let sum: f64 = values.iter().filter(|v| **v > 0.0).sum();
    let k = if sum > 0.0 { TAU / sum } else { 0.0 };
    let mut angle = 0.0;
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let sweep = if value > 0.0 { value * k } else { 0.0 };
            let slice = PieSlice {
                index,
                value,
                start_angle: angle,
                end_angle: angle + sweep,
            };
            angle += sweep;
            slice
        })
        .collect()
}

/// Point at `radius` along `angle` (clockwise from 12 o'clock) around `center`.
pub fn polar(center: (f64, f64), radius: f64, angle: f64) -> (f64, f64) {
    let a = angle - FRAC_PI_2;
    (center.0 + radius * a.cos(), center.1 + radius * a.sin())
}

/// Filled wedge from `center` out to `radius`.
pub fn sector(center: (f64, f64), radius: f64, start: f64, end: f64) -> String {
    let mut path = PathBuilder::new();
    let sweep = (end - start).abs();
    let clockwise = end > start;
    if radius <= EPSILON {
        path.move_to(center.0, center.1);
    } else if sweep > TAU - EPSILON {
        // a full circle needs two half arcs
        let (x0, y0) = polar(center, radius, start);
        let (xm, ym) = polar(center, radius, start + PI);
        path.move_to(x0, y0);
        path.arc_to(radius, true, clockwise, xm, ym);
        path.arc_to(radius, true, clockwise, x0, y0);
    } else {
        let (x0, y0) = polar(center, radius, start);
        path.move_to(x0, y0);
        if sweep > EPSILON {
            let (x1, y1) = polar(center, radius, end);
            path.arc_to(radius, sweep >= PI, clockwise, x1, y1);
        }
        path.line_to(center.0, center.1);
    }
    path.close();
    path.finish()
}

/// Label anchor of a wedge between `inner` and `outer` radii.
pub fn centroid(center: (f64, f64), inner: f64, outer: f64, start: f64, end: f64) -> (f64, f64) {
    polar(center, (inner + outer) / 2.0, (start + end) / 2.0)
}

/// Lower and upper bound of one series at one row.
pub type Band = (f64, f64);

/// Stack series on top of each other, first series at the bottom.
///
/// `rows[i][j]` is series `j` at row `i`; the result is indexed `[series][row]`.
pub fn stack(rows: &[Vec<f64>], series: usize) -> Vec<Vec<Band>> {
    let mut out = vec![Vec::with_capacity(rows.len()); series];
    for row in rows {
        let mut base = 0.0;
        for (j, layer) in out.iter_mut().enumerate() {
            let value = row.get(j).copied().unwrap_or(0.0);
            let value = if value.is_finite() { value } else { 0.0 };
            layer.push((base, base + value));
            base += value;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_points_are_a_straight_line() {
        assert_eq!(monotone_line(&[(0.0, 0.0), (10.0, 5.0)]), "M0,0L10,5");
    }

    #[test]
    fn test_single_point_line() {
        assert_eq!(monotone_line(&[(3.0, 4.0)]), "M3,4Z");
        assert_eq!(monotone_line(&[]), "");
    }

    #[test]
    fn test_monotone_line_three_points() {
        // slopes 1 and 1, so tangents are 1 everywhere
        let d = monotone_line(&[(0.0, 0.0), (3.0, 3.0), (6.0, 6.0)]);
        assert_eq!(d, "M0,0C1,1,2,2,3,3C4,4,5,5,6,6");
    }

    #[test]
    fn test_monotone_flattens_at_extremum() {
        // a peak in the middle gets a horizontal tangent
        let d = monotone_line(&[(0.0, 0.0), (3.0, 3.0), (6.0, 0.0)]);
        assert_eq!(d, "M0,0C1,1.5,2,3,3,3C4,3,5,1.5,6,0");
    }

    #[test]
    fn test_duplicate_points_are_ignored() {
        assert_eq!(
            monotone_line(&[(0.0, 0.0), (0.0, 0.0), (10.0, 5.0)]),
            "M0,0L10,5"
        );
    }

    #[test]
    fn test_area_closes_over_reversed_base() {
        let d = monotone_area(&[(0.0, 0.0), (10.0, 0.0)], &[(0.0, 5.0), (10.0, 5.0)]);
        assert_eq!(d, "M0,0L10,0L10,5L0,5Z");
    }

    #[test]
    fn test_pie_keeps_order_and_skips_non_positive() {
        let slices = pie(&[1.0, 0.0, -2.0, 3.0]);
        assert_eq!(slices.len(), 4);
        assert_eq!(slices[0].start_angle, 0.0);
        assert!((slices[0].end_angle - TAU / 4.0).abs() < 1e-12);
        assert_eq!(slices[1].start_angle, slices[1].end_angle);
        assert_eq!(slices[2].start_angle, slices[2].end_angle);
        assert!((slices[3].end_angle - TAU).abs() < 1e-12);
    }

    #[test]
    fn test_pie_of_zeros() {
        let slices = pie(&[0.0, 0.0]);
        assert!(slices.iter().all(|s| s.end_angle == 0.0));
    }

    #[test]
    fn test_quarter_sector() {
        let d = sector((0.0, 0.0), 10.0, 0.0, FRAC_PI_2);
        assert_eq!(d, "M0,-10A10,10,0,0,1,10,0L0,0Z");
    }

    #[test]
    fn test_full_circle_sector() {
        let d = sector((0.0, 0.0), 10.0, 0.0, TAU);
        assert_eq!(d, "M0,-10A10,10,0,1,1,0,10A10,10,0,1,1,0,-10Z");
    }

    #[test]
    fn test_empty_sector() {
        assert_eq!(sector((5.0, 5.0), 10.0, 1.0, 1.0).matches('A').count(), 0);
    }

    #[test]
    fn test_centroid() {
        let (x, y) = centroid((0.0, 0.0), 0.0, 10.0, 0.0, PI);
        assert!((x - 5.0).abs() < 1e-9);
        assert!(y.abs() < 1e-9);
    }

    #[test]
    fn test_stack() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        let layers = stack(&rows, 3);
        assert_eq!(layers[0], vec![(0.0, 1.0), (0.0, 4.0)]);
        assert_eq!(layers[2], vec![(3.0, 6.0), (9.0, 15.0)]);
    }
}
