//! # Calc Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                              Calc                                       │
//! │                                                                         │
//! │  main.rs ────► calls run(), maps failure to exit code 1                 │
//! │                                                                         │
//! │  lib.rs ─────► logging, config, runtime, session                        │
//! │                                                                         │
//! │  commands/ ──► press_digit, press_operator, toggle_history              │
//! │                                                                         │
//! │  state/ ─────► CalculatorState, PanelState, ConfigState                 │
//! │                                                                         │
//! │  calc-core ──► Accumulator (all arithmetic)                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match calc_desktop_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("calc: {err}");
            ExitCode::FAILURE
        }
    }
}
