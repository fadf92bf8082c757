//! # calc-core: Pure Calculator Logic
//!
//! This crate is the **heart** of Calc. It holds the whole calculator state
//! machine with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Calc Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Front end (browser / terminal)                 │   │
//! │  │     Keypad ──► Display ──► History panel ──► Orientation        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ key presses                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  calc-desktop commands                          │   │
//! │  │    press_digit, press_operator, press_equals, clear_history     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ calc-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────┐    │   │
//! │  │   │accumulator │ │  entry   │ │  format  │ │   history    │    │   │
//! │  │   │ state      │ │ editing  │ │ grouping │ │   records    │    │   │
//! │  │   │ machine    │ │ rules    │ │ numbers  │ │   log        │    │   │
//! │  │   └────────────┘ └──────────┘ └──────────┘ └──────────────┘    │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO GLOBALS                               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`accumulator`] - The state machine and its collaborator traits
//! - [`entry`] - Current-entry editing rules and the error sentinel
//! - [`operator`] - The four operators and their glyphs
//! - [`format`] - Display grouping and result formatting
//! - [`history`] - History records and log
//! - [`keys`] - Key presses mapped to operations
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use calc_core::{Accumulator, Operator};
//!
//! let mut calc = Accumulator::default();
//! calc.append_digit('3').unwrap();
//! calc.choose_operator(Operator::Add);
//! calc.append_digit('4').unwrap();
//! calc.compute();
//!
//! assert_eq!(calc.snapshot().current, "7");
//! assert_eq!(calc.history()[0].line, "3 + 4 = 7");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod accumulator;
pub mod entry;
pub mod error;
pub mod format;
pub mod history;
pub mod keys;
pub mod operator;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use accumulator::{
    Accumulator, AccumulatorConfig, ClearScheduler, ClearTicket, DisplaySink, DisplaySnapshot,
    HistoryView, ManualScheduler, Mode, NoopDisplay, NoopHistory, NoopScheduler,
    DEFAULT_ERROR_CLEAR_DELAY,
};
pub use entry::Entry;
pub use error::{CoreError, CoreResult, ValidationError};
pub use format::{format_for_display, format_number, parse_numeral};
pub use history::{HistoryLog, HistoryRecord, Outcome};
pub use keys::Key;
pub use operator::Operator;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Upper bound accepted for the error clear delay, in milliseconds.
pub const MAX_ERROR_CLEAR_MS: u64 = 60_000;
