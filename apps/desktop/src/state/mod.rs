//! # State Module
//!
//! Manages application state for the calculator shell.
//!
//! Each state type has one job, so each command asks only for what it needs:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────┐      │
//! │  │ CalculatorState  │  │   PanelState     │  │   ConfigState    │      │
//! │  │                  │  │                  │  │                  │      │
//! │  │  Arc<Mutex<      │  │  Mutex<Panel>    │  │  error_clear_ms  │      │
//! │  │    Accumulator   │  │  • history open  │  │  display_width   │      │
//! │  │  >>              │  │  • orientation   │  │  orientation     │      │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────┘      │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CalculatorState: shared with the error-clear timer task             │
//! │  • PanelState: Mutex, touched only by the input loop                   │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod calculator;
mod config;
mod panel;

pub use calculator::CalculatorState;
pub use config::{ConfigState, MAX_DISPLAY_WIDTH, MIN_DISPLAY_WIDTH};
pub use panel::{Orientation, Panel, PanelState};
