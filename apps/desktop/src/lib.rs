//! # Calc Desktop Library
//!
//! Session shell for Calc: configuration, logging, state, commands and the
//! terminal front end. All arithmetic lives in `calc-core`.
//!
//! ## Module Organization
//! ```text
//! calc_desktop_lib/
//! ├── lib.rs           ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs       ◄─── State type exports
//! │   ├── calculator.rs◄─── Shared accumulator + session id
//! │   ├── panel.rs     ◄─── History panel / orientation toggles
//! │   └── config.rs    ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs       ◄─── Command exports
//! │   ├── calculator.rs◄─── Keypad commands
//! │   ├── history.rs   ◄─── History commands
//! │   └── panel.rs     ◄─── Toggle commands
//! ├── timer.rs         ◄─── Error auto clear on tokio
//! ├── terminal.rs      ◄─── Screen rendering + input loop
//! └── error.rs         ◄─── API / config / app errors
//! ```

pub mod commands;
pub mod error;
pub mod state;
pub mod terminal;
pub mod timer;

use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::AppError;
use state::ConfigState;

/// Runs the calculator on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: DEBUG for calc crates; override with RUST_LOG            │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → calc.toml → CALC_* env vars → validate                 │
/// │                                                                         │
/// │  3. Start Runtime ────────────────────────────────────────────────────► │
/// │     • multi-threaded tokio runtime for input and timers                 │
/// │                                                                         │
/// │  4. Run Session ──────────────────────────────────────────────────────► │
/// │     • build CalculatorState / PanelState                                │
/// │     • read keys until `q` or end of input                               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), AppError> {
    init_tracing();

    info!("Starting Calc");

    let config = ConfigState::load(None)?;
    info!(
        error_clear_ms = config.error_clear_ms,
        orientation = %config.orientation,
        "Configuration loaded"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(terminal::run_session(
        &config,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    ));

    // A blocked stdin read must not hold shutdown open.
    runtime.shutdown_background();
    info!("Calc stopped");

    Ok(result?)
}

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,calc_core=debug,calc_desktop_lib=debug";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=calc_desktop_lib=trace` - Show timer scheduling too
/// - Default: [`DEFAULT_LOG_FILTER`] (INFO, DEBUG for calc crates)
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
