//! # Accumulator
//!
//! The calculator state machine: current entry, pending operand and operator,
//! history log, and the auto clear that follows an error.
//!
//! ## States
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Accumulator Modes                                 │
//! │                                                                         │
//! │                 choose_operator                                         │
//! │   ┌────────┐ ─────────────────────► ┌──────────┐ ──┐ choose_operator   │
//! │   │  Idle  │                        │ Pending  │   │ (folds: compute,  │
//! │   └────────┘ ◄───────────────────── └──────────┘ ◄─┘  then re-enter)   │
//! │      ▲            compute (ok)            │                             │
//! │      │                                    │ compute (÷ 0, overflow)     │
//! │      │      scheduled clear fires    ┌────▼─────┐                       │
//! │      └────────────────────────────── │  Error   │                       │
//! │                                      └──────────┘                       │
//! │                                                                         │
//! │  append_digit / delete_last_character edit the entry in Idle and        │
//! │  Pending without changing mode; they are ignored in Error.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Collaborators
//! The accumulator never touches a screen or a clock directly. Callers plug
//! in three capabilities:
//!
//! - [`DisplaySink`] receives a [`DisplaySnapshot`] after every operation.
//! - [`HistoryView`] receives the full record list whenever it changes.
//! - [`ClearScheduler`] is asked to call [`Accumulator::run_scheduled_clear`]
//!   once, after a delay, when an error is shown.
//!
//! Closures implement all three, which keeps tests short:
//! ```rust
//! use calc_core::{Accumulator, DisplaySnapshot, Operator};
//! use std::sync::{Arc, Mutex};
//!
//! let shown = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&shown);
//! let mut calc = Accumulator::default()
//!     .with_display(move |s: &DisplaySnapshot| sink.lock().unwrap().push(s.clone()));
//!
//! calc.append_digit('3').unwrap();
//! calc.choose_operator(Operator::Add);
//! calc.append_digit('4').unwrap();
//! calc.compute();
//!
//! assert_eq!(shown.lock().unwrap().last().unwrap().current, "7");
//! ```
//!
//! ## Stale Timers
//! Each scheduled clear carries a [`ClearTicket`] stamped with a generation
//! number. Only the ticket issued last, and not yet invalidated by `clear()`
//! or another computation, clears anything when it fires.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use ts_rs::TS;

use crate::entry::{Entry, ERROR_TEXT};
use crate::error::CoreResult;
use crate::format::{format_for_display, parse_numeral};
use crate::history::{HistoryLog, HistoryRecord, Outcome};
use crate::operator::Operator;

/// Delay between showing an error and clearing it.
pub const DEFAULT_ERROR_CLEAR_DELAY: Duration = Duration::from_millis(1500);

// =============================================================================
// Snapshot & Mode
// =============================================================================

/// The two display strings, recomputed after every operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DisplaySnapshot {
    /// Formatted current entry (`"1,234.5"`, `"Error"`).
    pub current: String,

    /// Formatted pending operand plus operator key (`"12 *"`), or empty.
    pub pending: String,
}

/// Which state the accumulator is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Mode {
    /// No operator chosen.
    Idle,

    /// Operator chosen; the current entry is the second operand.
    Pending,

    /// Showing an error until the scheduled clear fires.
    Error,
}

/// Handle for one scheduled auto clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClearTicket {
    generation: u64,
}

impl ClearTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

// =============================================================================
// Collaborator Traits
// =============================================================================

/// Receives display snapshots.
pub trait DisplaySink: Send {
    fn show(&mut self, snapshot: &DisplaySnapshot);
}

/// Receives the history list whenever it changes. An empty slice means the
/// view should show its empty state.
pub trait HistoryView: Send {
    fn render(&mut self, records: &[HistoryRecord]);
}

/// Arranges for [`Accumulator::run_scheduled_clear`] to be called with
/// `ticket` once `delay` has elapsed.
pub trait ClearScheduler: Send {
    fn schedule(&mut self, ticket: ClearTicket, delay: Duration);
}

impl<F> DisplaySink for F
where
    F: FnMut(&DisplaySnapshot) + Send,
{
    fn show(&mut self, snapshot: &DisplaySnapshot) {
        self(snapshot)
    }
}

impl<F> HistoryView for F
where
    F: FnMut(&[HistoryRecord]) + Send,
{
    fn render(&mut self, records: &[HistoryRecord]) {
        self(records)
    }
}

impl<F> ClearScheduler for F
where
    F: FnMut(ClearTicket, Duration) + Send,
{
    fn schedule(&mut self, ticket: ClearTicket, delay: Duration) {
        self(ticket, delay)
    }
}

/// Display that drops every snapshot.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDisplay;

impl DisplaySink for NoopDisplay {
    fn show(&mut self, _snapshot: &DisplaySnapshot) {}
}

/// History view that renders nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHistory;

impl HistoryView for NoopHistory {
    fn render(&mut self, _records: &[HistoryRecord]) {}
}

/// Scheduler that drops every ticket.
///
/// With this scheduler an error stays on screen until `clear()`; there is no
/// auto clear.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopScheduler;

impl ClearScheduler for NoopScheduler {
    fn schedule(&mut self, _ticket: ClearTicket, _delay: Duration) {}
}

/// Scheduler that only remembers what was scheduled.
///
/// The caller decides when a ticket "fires" by passing it to
/// [`Accumulator::run_scheduled_clear`]. Clones share the same queue, so a
/// test can keep one clone and hand the other to the accumulator.
#[derive(Debug, Default, Clone)]
pub struct ManualScheduler {
    queue: Arc<Mutex<Vec<(ClearTicket, Duration)>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything scheduled so far, oldest first.
    pub fn take(&self) -> Vec<(ClearTicket, Duration)> {
        let mut queue = self.queue.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *queue)
    }

    /// Number of tickets waiting.
    pub fn len(&self) -> usize {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ClearScheduler for ManualScheduler {
    fn schedule(&mut self, ticket: ClearTicket, delay: Duration) {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((ticket, delay));
    }
}

// =============================================================================
// Accumulator
// =============================================================================

/// Tunables for an accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccumulatorConfig {
    /// How long an error stays on screen before the automatic clear.
    pub error_clear_delay: Duration,
}

impl Default for AccumulatorConfig {
    fn default() -> Self {
        AccumulatorConfig {
            error_clear_delay: DEFAULT_ERROR_CLEAR_DELAY,
        }
    }
}

/// First operand and operator, held while the second operand is typed.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingOperation {
    operand: String,
    operator: Operator,
}

/// Two-operand calculator.
///
/// ## Invariants
/// - `current` is always a numeral (at most one separator) or `Entry::Error`
/// - pending operand and operator are set and cleared together
/// - `scheduled_clear` is `Some` only while an error is showing
/// - history is only appended by `compute` and only emptied by
///   `clear_history`
pub struct Accumulator {
    current: Entry,
    pending: Option<PendingOperation>,
    history: HistoryLog,
    config: AccumulatorConfig,

    scheduled_clear: Option<ClearTicket>,
    generation: u64,

    display: Box<dyn DisplaySink>,
    history_view: Box<dyn HistoryView>,
    scheduler: Box<dyn ClearScheduler>,
}

impl Accumulator {
    /// Creates a cleared accumulator with no-op collaborators.
    ///
    /// The default [`NoopScheduler`] never fires, so errors are not cleared
    /// automatically until a real scheduler is attached with
    /// [`with_scheduler`](Self::with_scheduler).
    pub fn new(config: AccumulatorConfig) -> Self {
        Accumulator {
            current: Entry::zero(),
            pending: None,
            history: HistoryLog::new(),
            config,
            scheduled_clear: None,
            generation: 0,
            display: Box::new(NoopDisplay),
            history_view: Box::new(NoopHistory),
            scheduler: Box::new(NoopScheduler),
        }
    }

    /// Attaches a display and shows it the current state.
    pub fn with_display(mut self, display: impl DisplaySink + 'static) -> Self {
        self.display = Box::new(display);
        self.refresh_display();
        self
    }

    /// Attaches a history view and renders the current log into it.
    pub fn with_history_view(mut self, view: impl HistoryView + 'static) -> Self {
        self.history_view = Box::new(view);
        self.render_history();
        self
    }

    /// Attaches the scheduler used for the auto clear after an error.
    pub fn with_scheduler(mut self, scheduler: impl ClearScheduler + 'static) -> Self {
        self.scheduler = Box::new(scheduler);
        self
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Resets the entry to `"0"` and drops any pending operation.
    ///
    /// Also invalidates a scheduled clear; the history log is untouched.
    pub fn clear(&mut self) {
        self.current = Entry::zero();
        self.pending = None;
        self.scheduled_clear = None;
        self.refresh_display();
    }

    /// Deletes the last character of the current entry.
    ///
    /// `"0"` stays `"0"`; a single character becomes `"0"`.
    pub fn delete_last_character(&mut self) {
        self.current.pop();
        self.refresh_display();
    }

    /// Appends a digit or the decimal separator to the current entry.
    ///
    /// A second separator is ignored and a leading zero is replaced.
    ///
    /// ## Errors
    /// `CoreError::InvalidDigit` for anything but `0`-`9` and `.`; the state
    /// is left unchanged.
    pub fn append_digit(&mut self, token: char) -> CoreResult<()> {
        self.current.push(token)?;
        self.refresh_display();
        Ok(())
    }

    /// Chooses the operator for the next computation.
    ///
    /// If an operation is already pending it is folded first, so `2 + 3 *`
    /// computes `2 + 3` before holding `5 *`. Returns the outcome of that
    /// fold, if one ran.
    pub fn choose_operator(&mut self, operator: Operator) -> Option<Outcome> {
        if !self.holds_operand() {
            self.refresh_display();
            return None;
        }

        let folded = if self.pending.is_some() {
            self.compute()
        } else {
            None
        };

        // A fold that ended in an error leaves nothing to hold.
        if let Entry::Number(text) = &self.current {
            self.pending = Some(PendingOperation {
                operand: text.clone(),
                operator,
            });
            self.current = Entry::zero();
        }

        self.refresh_display();
        folded
    }

    /// Applies the pending operator to the pending operand and the current
    /// entry.
    ///
    /// Does nothing (and returns `None`) unless both operands parse. A zero
    /// divisor or a non-finite result shows the error sentinel and schedules
    /// the auto clear; the failure is still logged in history.
    pub fn compute(&mut self) -> Option<Outcome> {
        let pending = self.pending.as_ref()?;
        let lhs = parse_numeral(&pending.operand)?;
        let rhs = self.current.value()?;
        let operator = pending.operator;

        self.pending = None;
        self.scheduled_clear = None;

        if operator == Operator::Divide && rhs == 0.0 {
            self.fail(lhs, operator, rhs, Outcome::DivisionByZero);
            return Some(Outcome::DivisionByZero);
        }

        let result = operator.apply(lhs, rhs);
        if !result.is_finite() {
            self.fail(lhs, operator, rhs, Outcome::Overflow);
            return Some(Outcome::Overflow);
        }

        self.record(HistoryRecord::success(lhs, operator, rhs, result));
        self.current = Entry::from_value(result);
        self.refresh_display();
        Some(Outcome::Success)
    }

    /// Called by the scheduler when a ticket's delay has elapsed.
    ///
    /// Clears only if `ticket` is the one currently outstanding; returns
    /// whether it did.
    pub fn run_scheduled_clear(&mut self, ticket: ClearTicket) -> bool {
        if self.scheduled_clear != Some(ticket) {
            return false;
        }
        self.clear();
        true
    }

    /// Copy of the history log.
    pub fn get_history(&self) -> Vec<HistoryRecord> {
        self.history.to_vec()
    }

    /// Empties the history log and re-renders the history view.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.render_history();
    }

    /// Pushes the current log to the history view, e.g. when a hidden
    /// panel becomes visible.
    pub fn render_history(&mut self) {
        self.history_view.render(self.history.records());
    }

    // -------------------------------------------------------------------------
    // Read Access
    // -------------------------------------------------------------------------

    /// Current display strings.
    pub fn snapshot(&self) -> DisplaySnapshot {
        let current = match &self.current {
            Entry::Number(text) => format_for_display(text),
            Entry::Error => ERROR_TEXT.to_string(),
        };
        let pending = match &self.pending {
            Some(op) => format!("{} {}", format_for_display(&op.operand), op.operator.key()),
            None => String::new(),
        };
        DisplaySnapshot { current, pending }
    }

    pub fn mode(&self) -> Mode {
        if self.current.is_error() {
            Mode::Error
        } else if self.pending.is_some() {
            Mode::Pending
        } else {
            Mode::Idle
        }
    }

    pub fn current_entry(&self) -> &Entry {
        &self.current
    }

    /// Pending operand text; empty when no operator is pending.
    pub fn pending_entry(&self) -> &str {
        self.pending.as_ref().map_or("", |op| op.operand.as_str())
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.as_ref().map(|op| op.operator)
    }

    pub fn history(&self) -> &[HistoryRecord] {
        self.history.records()
    }

    /// Ticket of the auto clear that is still outstanding, if any.
    pub fn scheduled_clear(&self) -> Option<ClearTicket> {
        self.scheduled_clear
    }

    pub fn config(&self) -> &AccumulatorConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn holds_operand(&self) -> bool {
        matches!(&self.current, Entry::Number(text) if !text.is_empty())
    }

    fn refresh_display(&mut self) {
        let snapshot = self.snapshot();
        self.display.show(&snapshot);
    }

    fn record(&mut self, record: HistoryRecord) {
        self.history.push(record);
        self.render_history();
    }

    fn fail(&mut self, lhs: f64, operator: Operator, rhs: f64, outcome: Outcome) {
        self.record(HistoryRecord::failure(lhs, operator, rhs, outcome));
        self.current = Entry::Error;
        self.refresh_display();

        self.generation += 1;
        let ticket = ClearTicket {
            generation: self.generation,
        };
        self.scheduled_clear = Some(ticket);
        self.scheduler.schedule(ticket, self.config.error_clear_delay);
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Accumulator::new(AccumulatorConfig::default())
    }
}

impl fmt::Debug for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accumulator")
            .field("current", &self.current)
            .field("pending", &self.pending)
            .field("history", &self.history.len())
            .field("scheduled_clear", &self.scheduled_clear)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn press(calc: &mut Accumulator, digits: &str) {
        for d in digits.chars() {
            calc.append_digit(d).unwrap();
        }
    }

    fn lines(calc: &Accumulator) -> Vec<String> {
        calc.get_history().into_iter().map(|r| r.line).collect()
    }

    fn assert_cleared(calc: &Accumulator) {
        assert_eq!(calc.current_entry(), &Entry::zero());
        assert_eq!(calc.pending_entry(), "");
        assert_eq!(calc.pending_operator(), None);
        assert_eq!(calc.mode(), Mode::Idle);
    }

    #[test]
    fn test_new_is_cleared() {
        let calc = Accumulator::default();
        assert_cleared(&calc);
        assert_eq!(
            calc.snapshot(),
            DisplaySnapshot {
                current: "0".into(),
                pending: String::new()
            }
        );
    }

    #[test]
    fn test_separator_guard() {
        let mut calc = Accumulator::default();
        press(&mut calc, "1.2.3..4");
        let text = calc.current_entry().to_string();
        assert_eq!(text.matches('.').count(), 1);
        assert_eq!(text, "1.234");
    }

    #[test]
    fn test_zero_on_fresh_state_stays_zero() {
        let mut calc = Accumulator::default();
        calc.append_digit('0').unwrap();
        assert_eq!(calc.current_entry(), &Entry::zero());
        calc.append_digit('0').unwrap();
        assert_eq!(calc.current_entry(), &Entry::zero());
    }

    #[test]
    fn test_delete_undoes_append() {
        let mut calc = Accumulator::default();
        press(&mut calc, "42");
        calc.append_digit('7').unwrap();
        calc.delete_last_character();
        assert_eq!(calc.current_entry().to_string(), "42");
    }

    #[test]
    fn test_delete_rules() {
        let mut calc = Accumulator::default();
        calc.delete_last_character();
        assert_eq!(calc.current_entry().to_string(), "0");

        press(&mut calc, "9");
        calc.delete_last_character();
        assert_eq!(calc.current_entry().to_string(), "0");
    }

    #[test]
    fn test_invalid_digit_leaves_state() {
        let mut calc = Accumulator::default();
        press(&mut calc, "12");
        assert!(calc.append_digit('+').is_err());
        assert_eq!(calc.current_entry().to_string(), "12");
    }

    #[test]
    fn test_double_operator_folds_zero() {
        let mut calc = Accumulator::default();
        calc.clear();
        calc.choose_operator(Operator::Add);
        let folded = calc.choose_operator(Operator::Subtract);

        assert_eq!(folded, Some(Outcome::Success));
        assert_eq!(calc.pending_operator(), Some(Operator::Subtract));
        assert_eq!(calc.pending_entry(), "0");
        assert_eq!(lines(&calc), vec!["0 + 0 = 0"]);
    }

    #[test]
    fn test_standard_addition() {
        let mut calc = Accumulator::default();
        calc.clear();
        press(&mut calc, "3");
        calc.choose_operator(Operator::Add);
        press(&mut calc, "4");
        assert_eq!(calc.compute(), Some(Outcome::Success));

        assert_eq!(calc.current_entry().to_string(), "7");
        assert_eq!(lines(&calc).last().unwrap(), "3 + 4 = 7");
        assert_eq!(calc.mode(), Mode::Idle);
    }

    #[test]
    fn test_chained_operations_fold_left_to_right() {
        let mut calc = Accumulator::default();
        calc.clear();
        press(&mut calc, "2");
        calc.choose_operator(Operator::Add);
        press(&mut calc, "3");
        calc.choose_operator(Operator::Multiply);
        assert_eq!(calc.snapshot().pending, "5 *");
        press(&mut calc, "4");
        calc.compute();

        assert_eq!(lines(&calc), vec!["2 + 3 = 5", "5 × 4 = 20"]);
        assert_eq!(calc.current_entry().to_string(), "20");
    }

    #[test]
    fn test_compute_without_operator_is_noop() {
        let mut calc = Accumulator::default();
        press(&mut calc, "8");
        assert_eq!(calc.compute(), None);
        assert_eq!(calc.current_entry().to_string(), "8");
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_compute_with_unparsable_operand_is_noop() {
        let mut calc = Accumulator::default();
        press(&mut calc, "5");
        calc.choose_operator(Operator::Subtract);
        press(&mut calc, "8");
        calc.compute();
        assert_eq!(calc.current_entry().to_string(), "-3");
        calc.delete_last_character();
        assert_eq!(calc.current_entry().to_string(), "-");

        calc.choose_operator(Operator::Add);
        press(&mut calc, "1");
        assert_eq!(calc.compute(), None);
        assert_eq!(calc.history().len(), 1);
        assert_eq!(calc.pending_entry(), "-");
        assert_eq!(calc.current_entry().to_string(), "1");
    }

    #[test]
    fn test_divide_by_zero_then_scheduled_clear() {
        let scheduler = ManualScheduler::new();
        let mut calc = Accumulator::default().with_scheduler(scheduler.clone());
        calc.clear();
        press(&mut calc, "5");
        calc.choose_operator(Operator::Divide);
        press(&mut calc, "0");
        assert_eq!(calc.compute(), Some(Outcome::DivisionByZero));

        assert_eq!(calc.current_entry(), &Entry::Error);
        assert_eq!(calc.snapshot().current, "Error");
        assert_eq!(calc.mode(), Mode::Error);
        assert_eq!(
            lines(&calc).last().unwrap(),
            "5 ÷ 0 = Error: Division by zero"
        );

        let scheduled = scheduler.take();
        assert_eq!(scheduled.len(), 1);
        let (ticket, delay) = scheduled[0];
        assert_eq!(delay, DEFAULT_ERROR_CLEAR_DELAY);

        assert!(calc.run_scheduled_clear(ticket));
        assert_cleared(&calc);
    }

    #[test]
    fn test_error_state_ignores_editing() {
        let mut calc = Accumulator::default();
        press(&mut calc, "1");
        calc.choose_operator(Operator::Divide);
        press(&mut calc, "0");
        calc.compute();

        press(&mut calc, "5");
        calc.delete_last_character();
        calc.choose_operator(Operator::Add);

        assert_eq!(calc.current_entry(), &Entry::Error);
        assert_eq!(calc.pending_operator(), None);
    }

    #[test]
    fn test_clear_invalidates_scheduled_clear() {
        let scheduler = ManualScheduler::new();
        let mut calc = Accumulator::default().with_scheduler(scheduler.clone());
        press(&mut calc, "1");
        calc.choose_operator(Operator::Divide);
        press(&mut calc, "0");
        calc.compute();
        calc.clear();

        press(&mut calc, "42");
        let (ticket, _) = scheduler.take()[0];
        assert!(!calc.run_scheduled_clear(ticket));
        assert_eq!(calc.current_entry().to_string(), "42");
    }

    #[test]
    fn test_only_latest_ticket_fires() {
        let scheduler = ManualScheduler::new();
        let mut calc = Accumulator::default().with_scheduler(scheduler.clone());

        for _ in 0..2 {
            calc.clear();
            press(&mut calc, "3");
            calc.choose_operator(Operator::Divide);
            press(&mut calc, "0");
            calc.compute();
        }

        let scheduled = scheduler.take();
        assert_eq!(scheduled.len(), 2);
        let (first, _) = scheduled[0];
        let (second, _) = scheduled[1];
        assert_ne!(first, second);

        assert!(!calc.run_scheduled_clear(first));
        assert_eq!(calc.mode(), Mode::Error);
        assert!(calc.run_scheduled_clear(second));
        assert_cleared(&calc);
        assert!(!calc.run_scheduled_clear(second));
    }

    #[test]
    fn test_overflow_takes_error_path() {
        let scheduler = ManualScheduler::new();
        let mut calc = Accumulator::default().with_scheduler(scheduler.clone());
        calc.current = Entry::Number("1e+308".into());
        calc.choose_operator(Operator::Multiply);
        press(&mut calc, "10");
        assert_eq!(calc.compute(), Some(Outcome::Overflow));

        assert_eq!(calc.current_entry(), &Entry::Error);
        assert_eq!(lines(&calc).last().unwrap(), "1e+308 × 10 = Error: Overflow");
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn test_fold_ending_in_error_holds_no_operator() {
        let scheduler = ManualScheduler::new();
        let mut calc = Accumulator::default().with_scheduler(scheduler.clone());
        press(&mut calc, "5");
        calc.choose_operator(Operator::Divide);
        press(&mut calc, "0");

        assert_eq!(
            calc.choose_operator(Operator::Add),
            Some(Outcome::DivisionByZero)
        );
        assert_eq!(calc.mode(), Mode::Error);
        assert_eq!(calc.pending_operator(), None);
        assert_eq!(calc.pending_entry(), "");
        assert_eq!(calc.snapshot().pending, "");

        let scheduled = scheduler.take();
        assert_eq!(scheduled.len(), 1);
        assert!(calc.run_scheduled_clear(scheduled[0].0));
        assert_cleared(&calc);
    }

    #[test]
    fn test_edited_exponent_result_still_computes() {
        let mut calc = Accumulator::default();
        press(&mut calc, "100000000000000000000");
        calc.choose_operator(Operator::Multiply);
        press(&mut calc, "10");
        calc.compute();
        assert_eq!(calc.current_entry().to_string(), "1e+21");

        press(&mut calc, ".");
        calc.choose_operator(Operator::Add);
        press(&mut calc, "1");
        assert_eq!(calc.compute(), Some(Outcome::Success));

        assert_eq!(
            lines(&calc),
            vec!["100000000000000000000 × 10 = 1e+21", "1e+21 + 1 = 1e+21"]
        );
        assert_eq!(calc.pending_operator(), None);
    }

    #[test]
    fn test_trimmed_exponent_operand_uses_its_prefix() {
        let mut calc = Accumulator::default();
        calc.current = Entry::Number("1e+21".into());
        calc.delete_last_character();
        calc.delete_last_character();
        assert_eq!(calc.current_entry().to_string(), "1e+");

        calc.choose_operator(Operator::Add);
        press(&mut calc, "2");
        assert_eq!(calc.compute(), Some(Outcome::Success));
        assert_eq!(calc.current_entry().to_string(), "3");
    }

    #[test]
    fn test_default_scheduler_never_clears() {
        let mut calc = Accumulator::default();
        for _ in 0..3 {
            calc.clear();
            press(&mut calc, "5");
            calc.choose_operator(Operator::Divide);
            press(&mut calc, "0");
            calc.compute();
        }

        assert_eq!(calc.mode(), Mode::Error);
        assert!(calc.scheduled_clear().is_some());

        calc.clear();
        assert_cleared(&calc);
        assert_eq!(calc.scheduled_clear(), None);
    }

    #[test]
    fn test_fractional_results() {
        let mut calc = Accumulator::default();
        press(&mut calc, "0.1");
        calc.choose_operator(Operator::Add);
        press(&mut calc, "0.2");
        calc.compute();
        assert_eq!(calc.current_entry().to_string(), "0.30000000000000004");

        calc.clear();
        press(&mut calc, "3.");
        calc.choose_operator(Operator::Divide);
        press(&mut calc, ".5");
        calc.compute();
        assert_eq!(lines(&calc).last().unwrap(), "3 ÷ 0.5 = 6");
    }

    #[test]
    fn test_pending_display_is_grouped() {
        let mut calc = Accumulator::default();
        press(&mut calc, "1234567.5");
        assert_eq!(calc.snapshot().current, "1,234,567.5");
        calc.choose_operator(Operator::Subtract);
        assert_eq!(
            calc.snapshot(),
            DisplaySnapshot {
                current: "0".into(),
                pending: "1,234,567.5 -".into()
            }
        );
    }

    #[test]
    fn test_history_copy_and_clear() {
        let rendered = Arc::new(Mutex::new(Vec::<usize>::new()));
        let sink = Arc::clone(&rendered);
        let mut calc = Accumulator::default()
            .with_history_view(move |records: &[HistoryRecord]| {
                sink.lock().unwrap().push(records.len())
            });

        press(&mut calc, "1");
        calc.choose_operator(Operator::Add);
        press(&mut calc, "1");
        calc.compute();

        let mut copy = calc.get_history();
        copy.clear();
        assert_eq!(calc.get_history().len(), 1);

        calc.clear();
        assert_eq!(calc.history().len(), 1, "clear keeps history");

        calc.clear_history();
        assert!(calc.get_history().is_empty());
        assert_eq!(*rendered.lock().unwrap(), vec![0, 1, 0]);
    }

    #[test]
    fn test_every_operation_refreshes_display() {
        let shown = Arc::new(Mutex::new(Vec::<DisplaySnapshot>::new()));
        let sink = Arc::clone(&shown);
        let mut calc = Accumulator::default()
            .with_display(move |s: &DisplaySnapshot| sink.lock().unwrap().push(s.clone()));

        calc.append_digit('.').unwrap();
        calc.append_digit('.').unwrap();
        calc.delete_last_character();
        calc.choose_operator(Operator::Add);
        calc.compute();
        calc.clear();

        let shown = shown.lock().unwrap();
        // attach + six operations; the compute is a plain 0 + 0
        assert_eq!(shown.len(), 7);
        assert_eq!(shown[1].current, "0.");
        assert_eq!(shown[4].pending, "0 +");
    }
}
