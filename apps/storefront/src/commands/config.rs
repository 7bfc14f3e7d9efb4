//! # Config Commands

use tracing::debug;

use crate::state::ConfigState;

/// Gets the store configuration (name and currency display settings).
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
