//! # Calculator State
//!
//! Owns one calculator session.
//!
//! ## Thread Safety
//! The accumulator is wrapped in `Arc<Mutex<T>>` because:
//! 1. The input loop mutates it on every key press
//! 2. The error-clear timer mutates it from a spawned task
//! 3. Only one of them may touch it at a time
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Calculator State Operations                          │
//! │                                                                         │
//! │  Front end Action        Command                 Accumulator Change     │
//! │  ────────────────        ───────                 ──────────────────     │
//! │                                                                         │
//! │  Press 7 ────────────────► press_digit() ───────► append_digit('7')     │
//! │                                                                         │
//! │  Press × ────────────────► press_operator() ────► choose_operator(×)    │
//! │                                                                         │
//! │  Press = ────────────────► press_equals() ──────► compute()             │
//! │                                                                         │
//! │  (1.5 s after ÷ 0) ──────► TokioScheduler ──────► run_scheduled_clear() │
//! │                                                                         │
//! │  NOTE: All operations acquire the Mutex lock exclusively and release   │
//! │        it before returning.                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use calc_core::{Accumulator, ClearScheduler, DisplaySink, HistoryView};
use tokio::runtime::Handle;
use uuid::Uuid;

use super::config::ConfigState;
use crate::timer::TokioScheduler;

/// Shared calculator session.
#[derive(Debug, Clone)]
pub struct CalculatorState {
    session_id: Uuid,
    calculator: Arc<Mutex<Accumulator>>,
}

impl CalculatorState {
    /// Wraps an already-configured accumulator.
    ///
    /// The accumulator keeps whatever scheduler it was built with; use this
    /// with a [`ManualScheduler`](calc_core::ManualScheduler) in tests.
    pub fn new(accumulator: Accumulator) -> Self {
        CalculatorState {
            session_id: Uuid::new_v4(),
            calculator: Arc::new(Mutex::new(accumulator)),
        }
    }

    /// Builds a session whose error clears run on `runtime`.
    pub fn with_runtime(
        config: &ConfigState,
        display: impl DisplaySink + 'static,
        history_view: impl HistoryView + 'static,
        runtime: Handle,
    ) -> Self {
        Self::build(config, display, history_view, |weak| {
            TokioScheduler::new(weak, runtime)
        })
    }

    /// Builds a session, handing `scheduler` a weak handle to the
    /// calculator it will clear.
    pub fn build<S, F>(
        config: &ConfigState,
        display: impl DisplaySink + 'static,
        history_view: impl HistoryView + 'static,
        scheduler: F,
    ) -> Self
    where
        S: ClearScheduler + 'static,
        F: FnOnce(std::sync::Weak<Mutex<Accumulator>>) -> S,
    {
        let calculator = Arc::new_cyclic(|weak| {
            let accumulator = Accumulator::new(config.accumulator_config())
                .with_display(display)
                .with_history_view(history_view)
                .with_scheduler(scheduler(weak.clone()));
            Mutex::new(accumulator)
        });

        CalculatorState {
            session_id: Uuid::new_v4(),
            calculator,
        }
    }

    /// Identifier of this session, used in log spans.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Executes a function with read access to the calculator.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let display = calculator.with_calculator(|c| c.snapshot());
    /// ```
    pub fn with_calculator<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Accumulator) -> R,
    {
        let calc = self.calculator.lock().expect("Calculator mutex poisoned");
        f(&calc)
    }

    /// Executes a function with write access to the calculator.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// calculator.with_calculator_mut(|c| c.append_digit('7'))?;
    /// ```
    pub fn with_calculator_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Accumulator) -> R,
    {
        let mut calc = self.calculator.lock().expect("Calculator mutex poisoned");
        f(&mut calc)
    }
}

/// Session with no display, no history view and no auto clear: an error
/// stays until `clear()`.
impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(Accumulator::default())
    }
}
