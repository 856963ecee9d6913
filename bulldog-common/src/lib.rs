//! Common types and utilities shared by the Bulldog CO Manager front ends
//!
//! The only piece of first-party logic with real design decisions is the
//! pull-to-refresh gesture controller, which lives in [`gesture`]. It has no
//! dependency on a UI runtime; `bulldog-mobile` plugs it into the DOM.

pub mod gesture;

pub use gesture::{
    EndKind, Effect, EventResponse, GestureEvent, GestureHandler, GestureHost, GestureState,
    MultiTouchPolicy, Phase, PullIndicator, PullToRefreshConfig, PullToRefreshController,
    ScrollOffsets, TouchPoint, Transition,
};

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Host platform error: {0}")]
    Host(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidConfig("threshold must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: threshold must be positive"
        );

        let err = Error::Host("addEventListener failed".to_string());
        assert!(err.to_string().contains("addEventListener"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse_err = toml::from_str::<PullToRefreshConfig>("threshold = [").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Parse(_)));
    }
}
