//! # Panel State
//!
//! Presentation-only state: whether the history panel is open and which way
//! the keypad is laid out. None of it reaches the calculator.

use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use calc_core::ValidationError;

/// Keypad layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Pending line above the current line.
    #[default]
    Portrait,

    /// Pending and current side by side.
    Landscape,
}

impl Orientation {
    /// The other layout.
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Portrait => Orientation::Landscape,
            Orientation::Landscape => Orientation::Portrait,
        }
    }

    /// Label for the button that switches away from this layout.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Orientation::Portrait => "Switch to Landscape",
            Orientation::Landscape => "Switch to Portrait",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Portrait => write!(f, "portrait"),
            Orientation::Landscape => write!(f, "landscape"),
        }
    }
}

impl std::str::FromStr for Orientation {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "portrait" => Ok(Orientation::Portrait),
            "landscape" => Ok(Orientation::Landscape),
            other => Err(ValidationError::InvalidFormat {
                field: "orientation".to_string(),
                reason: format!("'{}' is not portrait or landscape", other),
            }),
        }
    }
}

/// Snapshot of the panel toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    /// History panel is open.
    pub history_visible: bool,

    /// Current keypad layout.
    pub orientation: Orientation,
}

impl Panel {
    /// Label for the history toggle button.
    pub fn history_label(&self) -> &'static str {
        if self.history_visible {
            "Hide History"
        } else {
            "Show History"
        }
    }
}

/// Shared panel state.
#[derive(Debug, Default)]
pub struct PanelState {
    panel: Mutex<Panel>,
}

impl PanelState {
    pub fn new(panel: Panel) -> Self {
        PanelState {
            panel: Mutex::new(panel),
        }
    }

    /// Copy of the current toggles.
    pub fn get(&self) -> Panel {
        *self.panel.lock().expect("Panel mutex poisoned")
    }

    /// Executes a function with write access to the panel.
    pub fn with_panel_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Panel) -> R,
    {
        let mut panel = self.panel.lock().expect("Panel mutex poisoned");
        f(&mut panel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_flip() {
        assert_eq!(Orientation::Portrait.flipped(), Orientation::Landscape);
        assert_eq!(Orientation::Landscape.flipped(), Orientation::Portrait);
        assert_eq!(
            Orientation::Portrait.toggle_label(),
            "Switch to Landscape"
        );
    }

    #[test]
    fn test_orientation_parse() {
        assert_eq!(
            "Landscape".parse::<Orientation>().unwrap(),
            Orientation::Landscape
        );
        assert!("sideways".parse::<Orientation>().is_err());
    }

    #[test]
    fn test_panel_state_mutation() {
        let state = PanelState::default();
        assert!(!state.get().history_visible);

        state.with_panel_mut(|p| p.history_visible = true);
        assert!(state.get().history_visible);
        assert_eq!(state.get().history_label(), "Hide History");
    }
}
