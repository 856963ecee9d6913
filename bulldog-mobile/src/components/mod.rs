//! Reusable mobile UI components

pub mod header;
pub mod pull_to_refresh;
pub mod refresh_indicator;

pub use header::Header;
pub use pull_to_refresh::PullToRefresh;
pub use refresh_indicator::RefreshIndicator;
