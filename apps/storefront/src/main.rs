//! # Crexy&Nilo Storefront Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Presentation layer ──stdin──► crexy-storefront ──stdout──► responses   │
//! │                                       │                                 │
//! │                                       └──stderr──► logs                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The actual setup is in lib.rs so it can be tested.

fn main() -> std::io::Result<()> {
    crexy_storefront::run()
}
