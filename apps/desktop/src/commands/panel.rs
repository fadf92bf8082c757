//! # Panel Commands
//!
//! Presentation toggles. These never change what the calculator computes.

use tracing::debug;

use crate::state::{CalculatorState, Panel, PanelState};

/// Gets the current panel toggles.
pub fn get_panel(panel: &PanelState) -> Panel {
    debug!("get_panel command");
    panel.get()
}

/// Shows or hides the history panel.
///
/// Opening the panel re-renders the history so it is never stale.
pub fn toggle_history(calculator: &CalculatorState, panel: &PanelState) -> Panel {
    let toggles = panel.with_panel_mut(|p| {
        p.history_visible = !p.history_visible;
        *p
    });
    debug!(visible = toggles.history_visible, "toggle_history command");

    if toggles.history_visible {
        calculator.with_calculator_mut(|c| c.render_history());
    }

    toggles
}

/// Switches between portrait and landscape keypads.
pub fn toggle_orientation(panel: &PanelState) -> Panel {
    let toggles = panel.with_panel_mut(|p| {
        p.orientation = p.orientation.flipped();
        *p
    });
    debug!(orientation = %toggles.orientation, "toggle_orientation command");
    toggles
}
