//! # Entry
//!
//! The operand being typed, plus the editing rules for it.
//!
//! An entry is either numeral text or the error sentinel. Keeping the error
//! as its own variant means `Number` text is always a (possibly partial)
//! numeral: digits, an optional leading `-`, at most one `.`, or the exponent
//! form produced by [`format_number`](crate::format::format_number).
//!
//! ## Editing Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  before    key    after      rule                                       │
//! │  ──────    ───    ─────      ────                                       │
//! │  "0"       7      "7"        leading zero is replaced                   │
//! │  "0"       0      "0"        ...and stays a single zero                 │
//! │  "0"       .      "0."       separator keeps the zero                   │
//! │  "1.5"     .      "1.5"      second separator ignored                   │
//! │  "12"      ⌫      "1"        pop last character                         │
//! │  "7"       ⌫      "0"        single character falls back to zero       │
//! │  "0"       ⌫      "0"        nothing to delete                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::format::{format_number, parse_numeral, DECIMAL_SEPARATOR};

/// Text shown in place of a number while the entry is in the error state.
pub const ERROR_TEXT: &str = "Error";

/// Zero numeral every entry starts from.
const ZERO: &str = "0";

/// The operand currently being typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Entry {
    /// Numeral text, complete or still being typed.
    Number(String),

    /// Error sentinel left behind by a failed computation.
    Error,
}

impl Entry {
    /// The `"0"` entry.
    pub fn zero() -> Self {
        Entry::Number(ZERO.to_string())
    }

    /// Builds an entry from a computed value.
    ///
    /// Non-finite values cannot be typed back in, so they become the error
    /// sentinel.
    pub fn from_value(value: f64) -> Self {
        if value.is_finite() {
            Entry::Number(format_number(value))
        } else {
            Entry::Error
        }
    }

    /// Returns true for the error sentinel.
    pub fn is_error(&self) -> bool {
        matches!(self, Entry::Error)
    }

    /// Numeral text, or `None` for the error sentinel.
    pub fn numeral(&self) -> Option<&str> {
        match self {
            Entry::Number(text) => Some(text),
            Entry::Error => None,
        }
    }

    /// Parses the longest numeral prefix.
    ///
    /// Partial numerals like `"3."` or `"1e+21."` parse; a lone `"-"` or the
    /// error sentinel do not.
    pub fn value(&self) -> Option<f64> {
        self.numeral().and_then(parse_numeral)
    }

    /// Appends a digit or the decimal separator.
    ///
    /// Returns whether the entry changed. The error sentinel ignores input.
    ///
    /// ## Errors
    /// `CoreError::InvalidDigit` when `token` is not `0`-`9` or `.`.
    pub fn push(&mut self, token: char) -> CoreResult<bool> {
        if !token.is_ascii_digit() && token != DECIMAL_SEPARATOR {
            return Err(CoreError::InvalidDigit(token));
        }

        let Entry::Number(text) = self else {
            return Ok(false);
        };

        if token == DECIMAL_SEPARATOR && text.contains(DECIMAL_SEPARATOR) {
            return Ok(false);
        }

        if text == ZERO && token != DECIMAL_SEPARATOR {
            let changed = token != '0';
            text.clear();
            text.push(token);
            return Ok(changed);
        }

        text.push(token);
        Ok(true)
    }

    /// Deletes the last character.
    ///
    /// Returns whether the entry changed. The error sentinel ignores input.
    pub fn pop(&mut self) -> bool {
        let Entry::Number(text) = self else {
            return false;
        };

        if text == ZERO {
            return false;
        }

        if text.chars().count() <= 1 {
            *text = ZERO.to_string();
        } else {
            text.pop();
        }
        true
    }
}

impl Default for Entry {
    fn default() -> Self {
        Entry::zero()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Number(text) => f.write_str(text),
            Entry::Error => f.write_str(ERROR_TEXT),
        }
    }
}
