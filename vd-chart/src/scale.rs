//! Scales map data values to canvas positions.

use chrono::NaiveDate;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::{Ranged, RangedDate};
use vd_utils::dates::{day_number, format_month_day};
use vd_utils::numbers::{format_grouped, precision_for_step};

/// A labelled axis position.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

fn dedup(domain: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(domain.len());
    for d in domain {
        if !seen.contains(&d) {
            seen.push(d);
        }
    }
    seen
}

/// Discrete scale giving each category an equal band of the range.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
    step: f64,
    bandwidth: f64,
    start: f64,
}

impl BandScale {
    pub fn new(domain: Vec<String>, range: (f64, f64)) -> Self {
        let mut scale = BandScale {
            domain: dedup(domain),
            range,
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
            step: 0.0,
            bandwidth: 0.0,
            start: range.0,
        };
        scale.rescale();
        scale
    }

    /// Evenly spaced points rather than bands.
    pub fn point(domain: Vec<String>, range: (f64, f64)) -> Self {
        let mut scale = BandScale::new(domain, range);
        scale.padding_inner = 1.0;
        scale.rescale();
        scale
    }

    /// Same inner and outer padding, as a fraction of the step.
    pub fn padding(mut self, padding: f64) -> Self {
        self.padding_inner = padding.clamp(0.0, 1.0);
        self.padding_outer = padding.max(0.0);
        self.rescale();
        self
    }

    fn rescale(&mut self) {
        let n = self.domain.len() as f64;
        let (r0, r1) = self.range;
        let (lo, hi) = if r1 < r0 { (r1, r0) } else { (r0, r1) };
        self.step = (hi - lo) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        self.start = lo + (hi - lo - self.step * (n - self.padding_inner)) * self.align;
        self.bandwidth = self.step * (1.0 - self.padding_inner);
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Start of the band for `key`.
    pub fn position(&self, key: &str) -> Option<f64> {
        let i = self.domain.iter().position(|d| d == key)?;
        let (r0, r1) = self.range;
        // reversed ranges count down from the far end
        if r1 < r0 {
            let n = self.domain.len();
            Some(self.start + self.step * (n - 1 - i) as f64)
        } else {
            Some(self.start + self.step * i as f64)
        }
    }

    /// Centre of the band for `key`.
    pub fn center(&self, key: &str) -> Option<f64> {
        self.position(key).map(|p| p + self.bandwidth / 2.0)
    }

    /// One tick per category, at the band centre.
    pub fn ticks(&self) -> Vec<Tick> {
        self.domain
            .iter()
            .filter_map(|d| {
                self.center(d).map(|position| Tick {
                    position,
                    label: d.clone(),
                })
            })
            .collect()
    }
}

/// Round tick values covering `[start, stop]` in steps of 1, 2 or 5 times a
/// power of ten, at most `count` of them, ascending.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let range: RangedCoordf64 = (lo..hi).into();
    range.key_points(count)
}

/// Distance between consecutive values of `ticks`, or 0 for fewer than two.
fn spacing(ticks: &[f64]) -> f64 {
    match ticks {
        [a, b, ..] => (b - a).abs(),
        _ => 0.0,
    }
}

/// Continuous linear mapping from a numeric domain to a range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        LinearScale { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// A collapsed domain maps everything to the middle of the range.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn tick_values(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }

    /// Ticks labelled with thousands separators and just enough decimals.
    pub fn ticks(&self, count: usize) -> Vec<Tick> {
        let values = self.tick_values(count);
        let precision = precision_for_step(spacing(&values));
        values
            .into_iter()
            .map(|v| Tick {
                position: self.scale(v),
                label: format_grouped(v, precision),
            })
            .collect()
    }
}

/// Min and max of a sequence, ignoring non-finite values.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Linear scale over calendar days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    start: NaiveDate,
    end: NaiveDate,
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> Self {
        TimeScale {
            start: domain.0,
            end: domain.1,
            linear: LinearScale::new((day_number(&domain.0), day_number(&domain.1)), range),
        }
    }

    pub fn scale(&self, date: &NaiveDate) -> f64 {
        self.linear.scale(day_number(date))
    }

    /// Dates within the domain, about `count` of them: every day for short
    /// spans, otherwise whole weeks from the first date.
    pub fn tick_values(&self, count: usize) -> Vec<NaiveDate> {
        let (lo, hi) = if self.end < self.start {
            (self.end, self.start)
        } else {
            (self.start, self.end)
        };
        if count == 0 {
            return Vec::new();
        }
        if lo == hi {
            return vec![lo];
        }
        let range: RangedDate<NaiveDate> = (lo..hi).into();
        range
            .key_points(count)
            .into_iter()
            .filter(|d| *d >= lo && *d <= hi)
            .collect()
    }

    /// Ticks labelled `MM/DD`.
    pub fn ticks(&self, count: usize) -> Vec<Tick> {
        self.tick_values(count)
            .iter()
            .map(|d| Tick {
                position: self.scale(d),
                label: format_month_day(d),
            })
            .collect()
    }
}
