//! Color schemes and scales.

/// The ten-color categorical scheme used for groups.
pub const CATEGORY10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Series colors for bar and area charts; further series wrap around.
pub const SERIES_COLORS: [&str; 6] = [
    "#4F46E5", "#EF4444", "#10B981", "#F59E0B", "#06B6D4", "#8B5CF6",
];

/// Samples of the viridis ramp at t = 0.0, 0.1, ..., 1.0.
const VIRIDIS: [(u8, u8, u8); 11] = [
    (0x44, 0x01, 0x54),
    (0x48, 0x24, 0x75),
    (0x41, 0x44, 0x87),
    (0x35, 0x5f, 0x8d),
    (0x2a, 0x78, 0x8e),
    (0x21, 0x91, 0x8c),
    (0x22, 0xa8, 0x84),
    (0x44, 0xbf, 0x70),
    (0x7a, 0xd1, 0x51),
    (0xbd, 0xdf, 0x26),
    (0xfd, 0xe7, 0x25),
];

fn hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Perceptually uniform dark-purple to yellow ramp; `t` is clamped to [0, 1].
pub fn viridis(t: f64) -> String {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let scaled = t * (VIRIDIS.len() - 1) as f64;
    let i = (scaled.floor() as usize).min(VIRIDIS.len() - 2);
    let f = scaled - i as f64;
    let (a, b) = (VIRIDIS[i], VIRIDIS[i + 1]);
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * f).round() as u8;
    hex(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// Maps a numeric domain onto the viridis ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequentialScale {
    domain: (f64, f64),
}

impl SequentialScale {
    pub fn new(domain: (f64, f64)) -> Self {
        SequentialScale { domain }
    }

    pub fn color(&self, value: f64) -> String {
        let (d0, d1) = self.domain;
        let t = if d1 == d0 { 0.0 } else { (value - d0) / (d1 - d0) };
        viridis(t)
    }
}

/// Assigns colors to keys in order of first use, wrapping around the range.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinalScale {
    domain: Vec<String>,
    range: Vec<String>,
}

impl OrdinalScale {
    pub fn new(range: &[&str]) -> Self {
        OrdinalScale {
            domain: Vec::new(),
            range: range.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Pair an explicit domain with an explicit range, first mapping wins.
    pub fn with_domain(domain: &[String], range: &[String]) -> Self {
        let mut scale = OrdinalScale {
            domain: Vec::new(),
            range: Vec::new(),
        };
        for (key, color) in domain.iter().zip(range) {
            if !scale.domain.contains(key) {
                scale.domain.push(key.clone());
                scale.range.push(color.clone());
            }
        }
        scale
    }

    pub fn color(&mut self, key: &str) -> String {
        let i = match self.domain.iter().position(|d| d == key) {
            Some(i) => i,
            None => {
                self.domain.push(key.to_string());
                self.domain.len() - 1
            }
        };
        if self.range.is_empty() {
            return CATEGORY10[0].to_string();
        }
        self.range[i % self.range.len()].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viridis_ends() {
        assert_eq!(viridis(0.0), "#440154");
        assert_eq!(viridis(1.0), "#fde725");
        assert_eq!(viridis(0.5), "#21918c");
        assert_eq!(viridis(-3.0), "#440154");
        assert_eq!(viridis(f64::NAN), "#440154");
    }

    #[test]
    fn test_sequential_degenerate_domain() {
        let scale = SequentialScale::new((7.0, 7.0));
        assert_eq!(scale.color(7.0), viridis(0.0));
        let scale = SequentialScale::new((0.0, 10.0));
        assert_eq!(scale.color(10.0), viridis(1.0));
    }

    #[test]
    fn test_ordinal_first_use_order() {
        let mut scale = OrdinalScale::new(&CATEGORY10);
        assert_eq!(scale.color("3"), CATEGORY10[0]);
        assert_eq!(scale.color("1"), CATEGORY10[1]);
        assert_eq!(scale.color("3"), CATEGORY10[0]);
    }

    #[test]
    fn test_ordinal_explicit_domain() {
        let domain = vec!["Tech".to_string(), "Tech".to_string(), "Retail".to_string()];
        let range = vec!["#111111".to_string(), "#222222".to_string(), "#333333".to_string()];
        let mut scale = OrdinalScale::with_domain(&domain, &range);
        assert_eq!(scale.color("Tech"), "#111111");
        assert_eq!(scale.color("Retail"), "#333333");
    }
}
