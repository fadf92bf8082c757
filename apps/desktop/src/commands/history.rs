//! # History Commands
//!
//! Read, clear and export the calculation history.

use tracing::{debug, info};

use calc_core::HistoryRecord;

use crate::error::ApiError;
use crate::state::CalculatorState;

/// Gets every history record, oldest first.
pub fn get_history(calculator: &CalculatorState) -> Vec<HistoryRecord> {
    debug!("get_history command");
    calculator.with_calculator(|c| c.get_history())
}

/// Empties the history log.
///
/// The display and any pending operation are untouched.
pub fn clear_history(calculator: &CalculatorState) -> Vec<HistoryRecord> {
    debug!("clear_history command");

    calculator.with_calculator_mut(|c| {
        let removed = c.history().len();
        c.clear_history();
        info!(removed, "History cleared");
        c.get_history()
    })
}

/// Serializes the history log as pretty-printed JSON.
///
/// ## Output
/// ```json
/// [
///   {
///     "line": "3 + 4 = 7",
///     "operator": "add",
///     "outcome": "success",
///     "recordedAt": "2024-05-01T12:00:00Z"
///   }
/// ]
/// ```
pub fn export_history(calculator: &CalculatorState) -> Result<String, ApiError> {
    debug!("export_history command");

    let records = calculator.with_calculator(|c| c.get_history());
    Ok(serde_json::to_string_pretty(&records)?)
}
