//! # Commands Module
//!
//! Every operation a front end can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports)
//! ├── calculator.rs  ◄─── Keypad: digits, operators, =, C, delete
//! ├── history.rs     ◄─── History list, clear, export
//! └── panel.rs       ◄─── History panel and orientation toggles
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Front end (terminal screen)                                            │
//! │  ───────────────────────────                                            │
//! │  user types "12*3="                                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  press_keys(&calculator, &panel, "12*3=")                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  CalculatorState::with_calculator_mut ──► Accumulator                   │
//! │         │                                    │                          │
//! │         │                                    ├──► DisplaySink           │
//! │         │                                    └──► HistoryView           │
//! │         ▼                                                               │
//! │  Result<DisplayResponse, ApiError>                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands only take the state they need:
//! ```rust,ignore
//! // Only needs the calculator
//! fn press_equals(calculator: &CalculatorState) -> DisplayResponse
//!
//! // Only needs the panel
//! fn toggle_orientation(panel: &PanelState) -> Panel
//!
//! // Needs both
//! fn toggle_history(calculator: &CalculatorState, panel: &PanelState) -> Panel
//! ```

pub mod calculator;
pub mod history;
pub mod panel;
