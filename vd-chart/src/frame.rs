/// Outer size of a chart canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Margin {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The plotting area left inside `size` once the margin is removed.
    pub fn plot(&self, size: Size) -> Plot {
        Plot {
            left: self.left,
            top: self.top,
            width: (size.width - self.left - self.right).max(0.0),
            height: (size.height - self.top - self.bottom).max(0.0),
        }
    }
}

/// Inner plotting rectangle in absolute canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plot {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Plot {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn x_range(&self) -> (f64, f64) {
        (self.left, self.right())
    }

    /// Vertical range, bottom first so larger values sit higher.
    pub fn y_range(&self) -> (f64, f64) {
        (self.bottom(), self.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_area() {
        let plot = Margin::new(20.0, 30.0, 40.0, 40.0).plot(Size::new(500.0, 300.0));
        assert_eq!(plot.width, 430.0);
        assert_eq!(plot.height, 240.0);
        assert_eq!(plot.x_range(), (40.0, 470.0));
        assert_eq!(plot.y_range(), (260.0, 20.0));
    }

    #[test]
    fn test_tiny_canvas_does_not_go_negative() {
        let plot = Margin::new(20.0, 30.0, 40.0, 40.0).plot(Size::new(50.0, 50.0));
        assert_eq!(plot.width, 0.0);
        assert_eq!(plot.height, 0.0);
    }
}
