//! # Error Clear Timer
//!
//! [`ClearScheduler`] backed by the tokio runtime.
//!
//! ```text
//! compute() hits ÷ 0
//!      │
//!      ▼
//! schedule(ticket #7, 1.5s) ──► tokio::spawn(sleep 1.5s)
//!                                      │
//!           user presses C ──► ticket #7 invalidated
//!                                      │
//!                                      ▼
//!                              run_scheduled_clear(#7) ──► false, nothing happens
//! ```
//!
//! The task only holds a `Weak` handle, so a session that ends while an error
//! is showing is simply dropped.

use std::sync::{Mutex, Weak};
use std::time::Duration;

use calc_core::{Accumulator, ClearScheduler, ClearTicket};
use tokio::runtime::Handle;
use tracing::{debug, trace};

/// Runs scheduled clears on a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    calculator: Weak<Mutex<Accumulator>>,
    runtime: Handle,
}

impl TokioScheduler {
    pub fn new(calculator: Weak<Mutex<Accumulator>>, runtime: Handle) -> Self {
        TokioScheduler {
            calculator,
            runtime,
        }
    }
}

impl ClearScheduler for TokioScheduler {
    fn schedule(&mut self, ticket: ClearTicket, delay: Duration) {
        let calculator = self.calculator.clone();
        trace!(generation = ticket.generation(), ?delay, "scheduling error clear");

        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;

            let Some(calculator) = calculator.upgrade() else {
                trace!("session ended before error clear");
                return;
            };

            let fired = match calculator.lock() {
                Ok(mut calc) => calc.run_scheduled_clear(ticket),
                Err(_) => false,
            };

            if fired {
                debug!(generation = ticket.generation(), "error cleared");
            } else {
                trace!(generation = ticket.generation(), "stale error clear ignored");
            }
        });
    }
}
