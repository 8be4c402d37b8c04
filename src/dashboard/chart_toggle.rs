use serde::Serialize;

/// Visibility of the comparison chart panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartVisibility {
    visible: bool,
}

impl ChartVisibility {
    pub fn new() -> Self {
        Self { visible: true }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flips the visibility and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// Label of the toggle button for the current state.
    pub fn button_label(&self) -> &'static str {
        if self.visible {
            "Hide Chart"
        } else {
            "Show Chart"
        }
    }
}

impl Default for ChartVisibility {
    fn default() -> Self {
        Self::new()
    }
}
