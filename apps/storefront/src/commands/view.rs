//! # View Commands
//!
//! Commands for reading and switching the top-level screen.

use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::SessionState;
use crexy_core::{Catalog, Screen, SessionAction};

/// What the shell needs to draw the navbar and pick a screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResponse {
    pub screen: Screen,
    pub active_filter: String,
    /// Badge on the bag icon; hidden when zero.
    pub cart_count: usize,
}

impl ViewResponse {
    fn snapshot(session: &SessionState) -> Self {
        session.with_session(|s| ViewResponse {
            screen: s.screen(),
            active_filter: s.active_filter().to_string(),
            cart_count: s.cart().item_count(),
        })
    }
}

/// Gets the current screen.
pub fn get_view(session: &SessionState) -> ViewResponse {
    debug!("get_view command");
    ViewResponse::snapshot(session)
}

/// Switches to `screen`. Every screen is reachable from every other.
pub fn navigate(
    catalog: &Catalog,
    session: &SessionState,
    screen: Screen,
) -> Result<ViewResponse, ApiError> {
    debug!(?screen, "navigate command");

    session.with_session_mut(|s| s.dispatch(catalog, SessionAction::Navigate(screen)))?;
    Ok(ViewResponse::snapshot(session))
}
