//! # Terminal Front End
//!
//! Line-driven keypad on stdin, display box on stdout.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Terminal Session                                     │
//! │                                                                         │
//! │  stdin "12*3=" ──► press_keys() ──► Accumulator                         │
//! │                                        │                                │
//! │                     TerminalDisplay ◄──┤                                │
//! │                     TerminalHistory ◄──┘                                │
//! │                            │                                            │
//! │                            ▼ ScreenEvent (mpsc)                         │
//! │  TokioScheduler ──► Accumulator ──► ... same channel                    │
//! │                            │                                            │
//! │                            ▼                                            │
//! │                    Screen::render() ──► stdout                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Screen Layout (portrait, history open)
//! ```text
//! ┌────────────────────────┐
//! │                    12 *│
//! │                       3│
//! └────────────────────────┘
//! [h] Hide History  [o] Switch to Landscape
//! History:
//! 1. 3 + 4 = 7
//! ```

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{info, info_span, Instrument};

use calc_core::{DisplaySink, DisplaySnapshot, HistoryRecord, HistoryView};

use crate::commands;
use crate::state::{CalculatorState, ConfigState, Orientation, Panel, PanelState};

/// Shown in the history panel when the log is empty.
pub const EMPTY_HISTORY_TEXT: &str = "No calculations yet";

// =============================================================================
// Sinks
// =============================================================================

/// Something the screen must redraw.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenEvent {
    Display(DisplaySnapshot),
    History(Vec<HistoryRecord>),
}

/// [`DisplaySink`] that forwards snapshots to the screen.
#[derive(Debug, Clone)]
pub struct TerminalDisplay {
    tx: UnboundedSender<ScreenEvent>,
}

impl DisplaySink for TerminalDisplay {
    fn show(&mut self, snapshot: &DisplaySnapshot) {
        // A closed channel means the screen is gone; nothing left to draw.
        let _ = self.tx.send(ScreenEvent::Display(snapshot.clone()));
    }
}

/// [`HistoryView`] that forwards the history list to the screen.
#[derive(Debug, Clone)]
pub struct TerminalHistory {
    tx: UnboundedSender<ScreenEvent>,
}

impl HistoryView for TerminalHistory {
    fn render(&mut self, records: &[HistoryRecord]) {
        let _ = self.tx.send(ScreenEvent::History(records.to_vec()));
    }
}

/// Creates a display and history view feeding the same receiver.
pub fn channel() -> (TerminalDisplay, TerminalHistory, UnboundedReceiver<ScreenEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        TerminalDisplay { tx: tx.clone() },
        TerminalHistory { tx },
        rx,
    )
}

// =============================================================================
// Screen
// =============================================================================

/// Last state pushed by the sinks.
#[derive(Debug, Clone, Default)]
pub struct Screen {
    display: DisplaySnapshot,
    history: Vec<HistoryRecord>,
}

impl Screen {
    pub fn apply(&mut self, event: ScreenEvent) {
        match event {
            ScreenEvent::Display(snapshot) => self.display = snapshot,
            ScreenEvent::History(records) => self.history = records,
        }
    }

    /// Applies every event already queued on `events`.
    pub fn drain(&mut self, events: &mut UnboundedReceiver<ScreenEvent>) {
        while let Ok(event) = events.try_recv() {
            self.apply(event);
        }
    }

    /// Draws the display box, the toggle labels, and the history panel if
    /// open. `width` is the inner width of the box.
    pub fn render(&self, panel: Panel, width: usize) -> String {
        let border = "─".repeat(width);
        let mut out = format!("┌{border}┐\n");

        match panel.orientation {
            Orientation::Portrait => {
                out.push_str(&boxed_row(&self.display.pending, width));
                out.push_str(&boxed_row(&self.display.current, width));
            }
            Orientation::Landscape => {
                let row = if self.display.pending.is_empty() {
                    self.display.current.clone()
                } else {
                    format!("{}  {}", self.display.pending, self.display.current)
                };
                out.push_str(&boxed_row(&row, width));
            }
        }

        out.push_str(&format!("└{border}┘\n"));
        out.push_str(&format!(
            "[h] {}  [o] {}\n",
            panel.history_label(),
            panel.orientation.toggle_label()
        ));

        if panel.history_visible {
            out.push_str("History:\n");
            if self.history.is_empty() {
                out.push_str(EMPTY_HISTORY_TEXT);
                out.push('\n');
            }
            for (i, record) in self.history.iter().enumerate() {
                out.push_str(&format!("{}. {}\n", i + 1, record.line));
            }
        }

        out
    }
}

/// Right-aligns `text` in a box row, keeping the rightmost characters when
/// it does not fit.
fn boxed_row(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let visible: String = if len > width {
        text.chars().skip(len - width).collect()
    } else {
        text.to_string()
    };
    format!("│{visible:>width$}│\n")
}

// =============================================================================
// Session Loop
// =============================================================================

/// Runs one calculator session until `q` or end of input.
///
/// Each input line is a sequence of keys (see [`calc_core::Key`]); `q`
/// quits after the keys before it are applied. Rejected lines print
/// `! <message>` and change nothing. Error clears fired by the timer redraw
/// the screen without waiting for input.
pub async fn run_session<R, W>(config: &ConfigState, input: R, mut output: W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (display, history, mut events) = channel();
    let calculator = CalculatorState::with_runtime(config, display, history, Handle::current());
    let panel = PanelState::new(config.initial_panel());
    let width = config.display_width;
    let span = info_span!("session", id = %calculator.session_id());

    async move {
        info!("Session started");

        let mut screen = Screen::default();
        let mut lines = input.lines();

        screen.drain(&mut events);
        write_screen(&mut output, &screen, panel.get(), width).await?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        break;
                    };

                    let (keys, quit) = match line.find(|c: char| c.eq_ignore_ascii_case(&'q')) {
                        Some(at) => (&line[..at], true),
                        None => (line.as_str(), false),
                    };

                    if let Err(err) = commands::calculator::press_keys(&calculator, &panel, keys) {
                        output.write_all(format!("! {}\n", err.message).as_bytes()).await?;
                    }

                    screen.drain(&mut events);
                    write_screen(&mut output, &screen, panel.get(), width).await?;

                    if quit {
                        break;
                    }
                }
                Some(event) = events.recv() => {
                    screen.apply(event);
                    screen.drain(&mut events);
                    write_screen(&mut output, &screen, panel.get(), width).await?;
                }
            }
        }

        info!("Session ended");
        Ok::<_, io::Error>(())
    }
    .instrument(span)
    .await
}

async fn write_screen<W>(output: &mut W, screen: &Screen, panel: Panel, width: usize) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output
        .write_all(screen.render(panel, width).as_bytes())
        .await?;
    output.flush().await
}
