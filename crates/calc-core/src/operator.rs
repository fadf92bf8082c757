//! # Operator
//!
//! The four binary operators, as a closed enum.
//!
//! ## One Table, Three Views
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operator   │ key │ history symbol │ arithmetic                          │
//! │  ───────────┼─────┼────────────────┼───────────────                      │
//! │  Add        │  +  │       +        │ a + b                               │
//! │  Subtract   │  -  │       -        │ a - b                               │
//! │  Multiply   │  *  │       ×        │ a × b                               │
//! │  Divide     │  /  │       ÷        │ a ÷ b  (b == 0 handled by caller)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The key glyph is what the pending display shows next to the first operand
//! (`"12 *"`); the history symbol is what the history log shows
//! (`"12 × 3 = 36"`).

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators, in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Parses an operator key.
    ///
    /// Both the ASCII keys and the typographic glyphs are accepted.
    ///
    /// ## Example
    /// ```rust
    /// use calc_core::Operator;
    ///
    /// assert_eq!(Operator::from_key('*').unwrap(), Operator::Multiply);
    /// assert_eq!(Operator::from_key('÷').unwrap(), Operator::Divide);
    /// assert!(Operator::from_key('%').is_err());
    /// ```
    pub fn from_key(key: char) -> CoreResult<Self> {
        match key {
            '+' => Ok(Operator::Add),
            '-' | '−' => Ok(Operator::Subtract),
            '*' | '×' => Ok(Operator::Multiply),
            '/' | '÷' => Ok(Operator::Divide),
            other => Err(CoreError::UnknownOperator(other)),
        }
    }

    /// Key glyph shown beside the pending operand.
    pub const fn key(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Symbol used in history records.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Applies the operator.
    ///
    /// Division follows IEEE semantics here; the accumulator intercepts a zero
    /// divisor before it gets this far.
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl std::str::FromStr for Operator {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" | "plus" => Ok(Operator::Add),
            "subtract" | "minus" => Ok(Operator::Subtract),
            "multiply" | "times" => Ok(Operator::Multiply),
            "divide" => Ok(Operator::Divide),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Operator::from_key(c),
                    (Some(c), Some(_)) => Err(CoreError::UnknownOperator(c)),
                    (None, _) => Err(CoreError::UnknownOperator(' ')),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply() {
        assert_eq!(Operator::Add.apply(3.0, 4.0), 7.0);
        assert_eq!(Operator::Subtract.apply(3.0, 4.0), -1.0);
        assert_eq!(Operator::Multiply.apply(5.0, 4.0), 20.0);
        assert_eq!(Operator::Divide.apply(9.0, 3.0), 3.0);
    }

    #[test]
    fn test_symbols_and_keys() {
        let symbols: Vec<&str> = Operator::ALL.iter().map(Operator::symbol).collect();
        assert_eq!(symbols, vec!["+", "-", "×", "÷"]);

        let keys: String = Operator::ALL.iter().map(Operator::key).collect();
        assert_eq!(keys, "+-*/");
    }

    #[test]
    fn test_from_key_round_trips_key_glyph() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_key(op.key()).unwrap(), op);
        }
    }

    #[test]
    fn test_from_str_names() {
        assert_eq!("Add".parse::<Operator>().unwrap(), Operator::Add);
        assert_eq!("divide".parse::<Operator>().unwrap(), Operator::Divide);
        assert_eq!("×".parse::<Operator>().unwrap(), Operator::Multiply);
        assert_eq!(
            "modulo".parse::<Operator>(),
            Err(CoreError::UnknownOperator('m'))
        );
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Operator::Multiply).unwrap();
        assert_eq!(json, "\"multiply\"");
    }
}
