//! # History
//!
//! Append-only log of completed (and failed) calculations.
//!
//! ## Record Format
//! ```text
//! "3 + 4 = 7"
//! "5 × 4 = 20"
//! "5 ÷ 0 = Error: Division by zero"
//! ```
//!
//! Operands are written with [`format_number`], so `"3."` typed by the user
//! is logged as `3` and `".5"` as `0.5`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::format::format_number;
use crate::operator::Operator;

/// How a calculation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Outcome {
    /// A finite result.
    Success,

    /// Divisor was zero.
    DivisionByZero,

    /// Result overflowed to infinity or was not a number.
    Overflow,
}

impl Outcome {
    /// Right-hand side text for failed outcomes.
    pub const fn error_message(&self) -> Option<&'static str> {
        match self {
            Outcome::Success => None,
            Outcome::DivisionByZero => Some("Error: Division by zero"),
            Outcome::Overflow => Some("Error: Overflow"),
        }
    }
}

/// One line of the history log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HistoryRecord {
    /// Rendered line, e.g. `"3 + 4 = 7"`.
    pub line: String,

    /// Operator that was applied.
    pub operator: Operator,

    /// How the calculation ended.
    pub outcome: Outcome,

    /// When the record was appended.
    #[ts(as = "String")]
    pub recorded_at: DateTime<Utc>,
}

impl HistoryRecord {
    /// Record for a successful calculation.
    pub fn success(lhs: f64, operator: Operator, rhs: f64, result: f64) -> Self {
        Self::with_rhs(lhs, operator, rhs, format_number(result), Outcome::Success)
    }

    /// Record for a failed calculation.
    pub fn failure(lhs: f64, operator: Operator, rhs: f64, outcome: Outcome) -> Self {
        let message = outcome.error_message().unwrap_or_default().to_string();
        Self::with_rhs(lhs, operator, rhs, message, outcome)
    }

    fn with_rhs(lhs: f64, operator: Operator, rhs: f64, result: String, outcome: Outcome) -> Self {
        HistoryRecord {
            line: format!(
                "{} {} {} = {}",
                format_number(lhs),
                operator.symbol(),
                format_number(rhs),
                result
            ),
            operator,
            outcome,
            recorded_at: Utc::now(),
        }
    }

    /// Returns true when the calculation produced a number.
    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }
}

impl fmt::Display for HistoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

/// Ordered log of history records.
///
/// Grows only through [`push`](Self::push); shrinks only through
/// [`clear`](Self::clear).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryLog {
    records: Vec<HistoryRecord>,
}

impl HistoryLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.
    pub fn push(&mut self, record: HistoryRecord) {
        self.records.push(record);
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Records in append order.
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Owned copy of the records; changes to it never reach the log.
    pub fn to_vec(&self) -> Vec<HistoryRecord> {
        self.records.clone()
    }

    /// Most recent record.
    pub fn last(&self) -> Option<&HistoryRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
