//! # Calculator Commands
//!
//! Keypad commands: digits, operators, `=`, clear and delete.
//!
//! ## Keypad Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Keypad Lifecycle                                     │
//! │                                                                         │
//! │  ┌──────────┐  operator  ┌──────────┐   =    ┌──────────┐               │
//! │  │   Idle   │───────────►│ Pending  │───────►│   Idle   │               │
//! │  │  "12"    │            │ "12 *"   │        │  "36"    │               │
//! │  └──────────┘            └──────────┘        └──────────┘               │
//! │       ▲                       │                                         │
//! │       │                  ÷ 0 or overflow                                │
//! │       │                       ▼                                         │
//! │       │                  ┌──────────┐                                   │
//! │       └──── C / timer ───│  Error   │                                   │
//! │                          │ "Error"  │                                   │
//! │                          └──────────┘                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, info, warn};

use calc_core::{Accumulator, DisplaySnapshot, Key, Mode, Operator, Outcome};

use crate::error::ApiError;
use crate::state::{CalculatorState, PanelState};

/// What the display shows after a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayResponse {
    pub display: DisplaySnapshot,
    pub mode: Mode,

    /// Set when the command ran a computation.
    pub outcome: Option<Outcome>,
}

impl DisplayResponse {
    fn read(calc: &Accumulator, outcome: Option<Outcome>) -> Self {
        DisplayResponse {
            display: calc.snapshot(),
            mode: calc.mode(),
            outcome,
        }
    }
}

/// Gets the current display.
pub fn get_display(calculator: &CalculatorState) -> DisplayResponse {
    debug!("get_display command");
    calculator.with_calculator(|c| DisplayResponse::read(c, None))
}

/// Appends a digit or the decimal separator.
///
/// ## Behavior
/// - `"0"` followed by `7` shows `"7"`
/// - A second `.` is ignored
/// - Ignored while an error is showing
///
/// ## Errors
/// `INVALID_INPUT` for anything but `0`-`9` and `.`
pub fn press_digit(calculator: &CalculatorState, digit: char) -> Result<DisplayResponse, ApiError> {
    debug!(%digit, "press_digit command");

    calculator.with_calculator_mut(|c| {
        c.append_digit(digit)?;
        Ok::<_, ApiError>(DisplayResponse::read(c, None))
    })
}

/// Chooses an operator, folding any pending operation first.
///
/// ## Arguments
/// * `operator` - Key (`+`, `-`, `*`, `/`), glyph (`×`, `÷`) or name (`times`)
///
/// ## Errors
/// `INVALID_INPUT` if `operator` names none of the four
pub fn press_operator(
    calculator: &CalculatorState,
    operator: &str,
) -> Result<DisplayResponse, ApiError> {
    debug!(%operator, "press_operator command");

    let operator: Operator = operator.parse()?;
    Ok(calculator.with_calculator_mut(|c| {
        let outcome = c.choose_operator(operator);
        log_outcome(c, outcome);
        DisplayResponse::read(c, outcome)
    }))
}

/// Runs the pending operation.
///
/// With nothing pending this is a no-op and `outcome` is `None`.
pub fn press_equals(calculator: &CalculatorState) -> DisplayResponse {
    debug!("press_equals command");

    calculator.with_calculator_mut(|c| {
        let outcome = c.compute();
        log_outcome(c, outcome);
        DisplayResponse::read(c, outcome)
    })
}

/// Resets the entry to `"0"` and drops the pending operation.
pub fn press_clear(calculator: &CalculatorState) -> DisplayResponse {
    debug!("press_clear command");

    calculator.with_calculator_mut(|c| {
        c.clear();
        DisplayResponse::read(c, None)
    })
}

/// Deletes the last character of the entry.
pub fn press_delete(calculator: &CalculatorState) -> DisplayResponse {
    debug!("press_delete command");

    calculator.with_calculator_mut(|c| {
        c.delete_last_character();
        DisplayResponse::read(c, None)
    })
}

/// Applies a line of key characters in order.
///
/// The whole line is parsed before any key runs, so a typo leaves the
/// calculator untouched. Panel keys (`h`, `o`) go to the panel.
///
/// ## Returns
/// The display after the last key, with the outcome of the last
/// computation in the line
pub fn press_keys(
    calculator: &CalculatorState,
    panel: &PanelState,
    line: &str,
) -> Result<DisplayResponse, ApiError> {
    debug!(%line, "press_keys command");

    let keys = Key::parse_line(line)?;
    let mut last_outcome = None;

    for key in keys {
        match key {
            Key::ToggleHistory => {
                super::panel::toggle_history(calculator, panel);
            }
            Key::ToggleOrientation => {
                super::panel::toggle_orientation(panel);
            }
            key => {
                let outcome = calculator.with_calculator_mut(|c| {
                    let outcome = key.apply(c)?;
                    log_outcome(c, outcome);
                    Ok::<_, ApiError>(outcome)
                })?;
                last_outcome = outcome.or(last_outcome);
            }
        }
    }

    Ok(calculator.with_calculator(|c| DisplayResponse::read(c, last_outcome)))
}

fn log_outcome(calc: &Accumulator, outcome: Option<Outcome>) {
    let Some(outcome) = outcome else {
        return;
    };
    let line = calc.history().last().map_or("", |r| r.line.as_str());

    match outcome {
        Outcome::Success => info!(%line, "Calculation completed"),
        Outcome::DivisionByZero | Outcome::Overflow => {
            warn!(%line, ?outcome, "Calculation failed")
        }
    }
}
