//! # Session State
//!
//! Holds the shopper's [`Session`] for the lifetime of the process.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` so that each request is applied
//! to completion before the next one sees the state.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Operations                             │
//! │                                                                         │
//! │  Invoke                     Access              Session Change          │
//! │  ──────                     ──────              ──────────────          │
//! │                                                                         │
//! │  navigate ───────────────► with_session_mut ──► screen = ...           │
//! │                                                                         │
//! │  select_material ────────► with_session_mut ──► selection replaced     │
//! │                                                                         │
//! │  add_product_to_cart ────► with_session_mut ──► cart push, screen=cart │
//! │                                                                         │
//! │  get_cart ───────────────► with_session ──────► (read only)            │
//! │                                                                         │
//! │  NOTE: reads and writes both take the lock; neither holds it long.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use crexy_core::{Catalog, Session};

/// Process-wide session state.
///
/// ## Poisoning
/// No session operation panics half-way, so a poisoned lock still guards a
/// consistent session and is recovered rather than propagated.
#[derive(Debug, Clone)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
}

impl SessionState {
    /// Creates a fresh session on the home screen, showing `default_filter`
    /// in the shop.
    pub fn new(catalog: &Catalog, default_filter: &str) -> Self {
        let mut session = Session::new(catalog);
        session.set_filter(default_filter);
        SessionState {
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = session_state.with_session(|s| s.cart().item_count());
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&session)
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// session_state.with_session_mut(|s| s.dispatch(catalog, action))?;
    /// ```
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crexy_core::{catalog, Screen};

    #[test]
    fn test_new_session_uses_default_filter() {
        let state = SessionState::new(catalog(), "Belts");
        state.with_session(|s| {
            assert_eq!(s.active_filter(), "Belts");
            assert_eq!(s.screen(), Screen::Home);
        });
    }

    #[test]
    fn test_clones_share_one_session() {
        let state = SessionState::new(catalog(), "All");
        let other = state.clone();

        other.with_session_mut(|s| s.add_product(catalog(), 5)).unwrap();

        assert_eq!(state.with_session(|s| s.cart().item_count()), 1);
        assert_eq!(state.with_session(|s| s.screen()), Screen::Cart);
    }
}
