//! # Crexy&Nilo Storefront Library
//!
//! Session host for the storefront. Owns the shopper's session and answers
//! invoke requests from the presentation layer.
//!
//! ## Module Organization
//! ```text
//! crexy_storefront/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── invoke.rs       ◄─── JSON-lines request/response bridge
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Session state (screen, filter, selection, bag)
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Catalog and shop tab commands
//! │   ├── view.rs     ◄─── Screen navigation commands
//! │   ├── builder.rs  ◄─── Studio configurator commands
//! │   ├── cart.rs     ◄─── Bag commands
//! │   └── config.rs   ◄─── Config command
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod invoke;
pub mod state;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crexy_core::Catalog;
use state::{ConfigState, SessionState};

/// Everything a request can touch.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: &'static Catalog,
    session: SessionState,
    config: ConfigState,
}

impl Storefront {
    /// Creates a storefront over the built-in catalog with a fresh session.
    pub fn new(config: ConfigState) -> Self {
        let catalog = crexy_core::catalog();
        Storefront {
            catalog,
            session: SessionState::new(catalog, &config.default_filter),
            config,
        }
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }
}

/// Runs the storefront host over stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: info,crexy=debug; override with RUST_LOG                 │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • CREXY_* environment variables over defaults                       │
/// │                                                                         │
/// │  3. Initialize State ─────────────────────────────────────────────────► │
/// │     • Built-in catalog (built once, read-only)                          │
/// │     • Session on the home screen with an empty bag                      │
/// │                                                                         │
/// │  4. Serve ────────────────────────────────────────────────────────────► │
/// │     • One JSON request per stdin line until EOF                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> io::Result<()> {
    init_tracing();

    let config = ConfigState::from_env();
    info!(store = %config.store_name, filter = %config.default_filter, "Starting storefront");

    let storefront = Storefront::new(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    storefront.serve(stdin.lock(), stdout.lock())?;

    let (items, total) = storefront
        .session()
        .with_session(|s| (s.cart().item_count(), s.cart().total()));
    info!(items, %total, "Input closed, session ended");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// stdout carries responses, so logs go to stderr.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=crexy=trace` - Show trace for crexy crates only
/// - Default: INFO, DEBUG for crexy crates
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,crexy=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
