use crate::scene::Scene;

/// Tooltip position relative to the pointer.
pub const TOOLTIP_OFFSET: (f64, f64) = (10.0, -28.0);

/// The one tooltip a chart may show.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub key: String,
    pub lines: Vec<String>,
    pub pointer: (f64, f64),
}

impl Tooltip {
    /// Where the tooltip box is drawn.
    pub fn position(&self) -> (f64, f64) {
        (
            self.pointer.0 + TOOLTIP_OFFSET.0,
            self.pointer.1 + TOOLTIP_OFFSET.1,
        )
    }
}

/// Owner of a chart's transient tooltip.
///
/// Entering a mark replaces any tooltip already shown; leaving only removes
/// it if the mark being left is still the active one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HoverState {
    active: Option<Tooltip>,
}

impl HoverState {
    pub fn enter(&mut self, key: &str, lines: Vec<String>, pointer: (f64, f64)) {
        self.active = Some(Tooltip {
            key: key.to_string(),
            lines,
            pointer,
        });
    }

    pub fn move_to(&mut self, pointer: (f64, f64)) {
        if let Some(tooltip) = self.active.as_mut() {
            tooltip.pointer = pointer;
        }
    }

    /// Returns whether a tooltip was removed.
    pub fn leave(&mut self, key: &str) -> bool {
        if self.active_key() == Some(key) {
            self.active = None;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Whether the tooltip shown, if any, still belongs to a mark of `scene`
    /// with the same text. Marks that only moved still fit.
    pub fn fits(&self, scene: &Scene) -> bool {
        match &self.active {
            None => true,
            Some(tooltip) => scene
                .hover(&tooltip.key)
                .is_some_and(|hover| hover.tooltip == tooltip.lines),
        }
    }

    /// Drop the tooltip when a rebuilt scene no longer fits it.
    pub fn sync(&mut self, scene: &Scene) {
        if !self.fits(scene) {
            self.active = None;
        }
    }

    pub fn active_key(&self) -> Option<&str> {
        self.active.as_ref().map(|t| t.key.as_str())
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.active.as_ref()
    }
}
