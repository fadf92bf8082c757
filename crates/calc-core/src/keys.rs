//! # Keys
//!
//! Maps key presses to calculator operations.
//!
//! ## Key Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  key             Key variant           effect                          │
//! │  ───             ───────────           ──────                          │
//! │  0-9 .           Digit                 append_digit                    │
//! │  + - * / × ÷     Operator              choose_operator                 │
//! │  =               Equals                compute                         │
//! │  c C             Clear                 clear                           │
//! │  < ⌫             Delete                delete_last_character           │
//! │  x               ClearHistory          clear_history                   │
//! │  h               ToggleHistory         (front end: show/hide panel)    │
//! │  o               ToggleOrientation     (front end: layout flip)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two toggles never reach the accumulator; the front end owns that
//! state. [`Key::apply`] leaves the accumulator alone for them.

use serde::{Deserialize, Serialize};

use crate::accumulator::Accumulator;
use crate::error::{CoreError, CoreResult};
use crate::format::DECIMAL_SEPARATOR;
use crate::history::Outcome;
use crate::operator::Operator;

/// One user gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "value")]
pub enum Key {
    Digit(char),
    Operator(Operator),
    Equals,
    Clear,
    Delete,
    ClearHistory,
    ToggleHistory,
    ToggleOrientation,
}

impl Key {
    /// Parses one key character.
    ///
    /// ## Example
    /// ```rust
    /// use calc_core::{Key, Operator};
    ///
    /// assert_eq!(Key::from_char('7').unwrap(), Key::Digit('7'));
    /// assert_eq!(Key::from_char('×').unwrap(), Key::Operator(Operator::Multiply));
    /// assert!(Key::from_char('?').is_err());
    /// ```
    pub fn from_char(c: char) -> CoreResult<Self> {
        match c {
            d if d.is_ascii_digit() || d == DECIMAL_SEPARATOR => Ok(Key::Digit(d)),
            '=' => Ok(Key::Equals),
            'c' | 'C' => Ok(Key::Clear),
            '<' | '\u{8}' | '\u{7f}' => Ok(Key::Delete),
            'x' | 'X' => Ok(Key::ClearHistory),
            'h' | 'H' => Ok(Key::ToggleHistory),
            'o' | 'O' => Ok(Key::ToggleOrientation),
            other => Operator::from_key(other)
                .map(Key::Operator)
                .map_err(|_| CoreError::UnknownKey(other)),
        }
    }

    /// Parses every non-whitespace character of `line`.
    ///
    /// Stops at the first unknown character.
    pub fn parse_line(line: &str) -> CoreResult<Vec<Self>> {
        line.chars()
            .filter(|c| !c.is_whitespace())
            .map(Key::from_char)
            .collect()
    }

    /// Applies the key to `calc`.
    ///
    /// Returns the outcome when a computation ran (`=` or an operator that
    /// folded a pending operation).
    pub fn apply(self, calc: &mut Accumulator) -> CoreResult<Option<Outcome>> {
        match self {
            Key::Digit(d) => calc.append_digit(d).map(|()| None),
            Key::Operator(op) => Ok(calc.choose_operator(op)),
            Key::Equals => Ok(calc.compute()),
            Key::Clear => {
                calc.clear();
                Ok(None)
            }
            Key::Delete => {
                calc.delete_last_character();
                Ok(None)
            }
            Key::ClearHistory => {
                calc.clear_history();
                Ok(None)
            }
            Key::ToggleHistory | Key::ToggleOrientation => Ok(None),
        }
    }
}
