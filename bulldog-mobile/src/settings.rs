//! Locally stored pull-to-refresh settings

use bulldog_common::PullToRefreshConfig;
use gloo_storage::{LocalStorage, Storage};

const CONFIG_KEY: &str = "bulldog_pull_to_refresh";

/// Load the stored config, falling back to defaults when missing or invalid
pub fn load_pull_config() -> PullToRefreshConfig {
    match LocalStorage::get::<PullToRefreshConfig>(CONFIG_KEY) {
        Ok(config) => match config.validate() {
            Ok(()) => config,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring stored pull-to-refresh config");
                PullToRefreshConfig::default()
            }
        },
        Err(_) => PullToRefreshConfig::default(),
    }
}

