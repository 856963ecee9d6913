//! Pull-to-refresh gesture recognition
//!
//! Recognizes a downward touch drag that starts near the top of a scrolled-to-top
//! viewport, keeps it apart from ordinary scrolling, and fires a refresh action
//! once the pull crosses a threshold.
//!
//! The pieces stack bottom-up:
//! - [`config`]: thresholds and policies
//! - [`event`]: typed host events, responses and effects
//! - [`machine`]: the pure `(state, event) -> (state, effects)` transition function
//! - [`indicator`]: what a view should draw for the current phase
//! - [`host`]: the capability trait a UI runtime implements
//! - [`controller`]: owns the state, talks to the host, runs the refresh action

pub mod config;
pub mod controller;
pub mod event;
pub mod host;
pub mod indicator;
pub mod machine;

pub use config::{MultiTouchPolicy, PullToRefreshConfig};
pub use controller::PullToRefreshController;
pub use event::{Effect, EndKind, EventResponse, GestureEvent, ScrollOffsets, TouchPoint};
pub use host::{GestureHandler, GestureHost};
pub use indicator::PullIndicator;
pub use machine::{GestureState, Phase, Transition};

/// Tracing target used by every gesture log line
pub(crate) const LOG_TARGET: &str = "bulldog::gesture";
