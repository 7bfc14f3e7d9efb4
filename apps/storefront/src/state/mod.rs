//! # State Module
//!
//! Application state for the storefront host.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┬──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │   Catalog    │  │ SessionState │  │   ConfigState    │              │
//! │  │  (&'static)  │  │  Arc<Mutex<  │  │  store_name      │              │
//! │  │              │  │    Session   │  │  currency        │              │
//! │  │              │  │  >>          │  │  default_filter  │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Catalog: immutable, built once                                      │
//! │  • SessionState: Protected by Arc<Mutex<T>> for exclusive access       │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::ConfigState;
pub use session::SessionState;
