//! Typed host events and the controller's responses

use serde::{Deserialize, Serialize};

/// Vertical scroll offsets read from the host
///
/// Browsers disagree on whether the window or the document root carries the
/// scroll position, so both readings are kept and the larger one wins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct ScrollOffsets {
    pub window: f64,
    pub document: f64,
}

impl ScrollOffsets {
    pub fn new(window: f64, document: f64) -> Self {
        Self { window, document }
    }

    /// Both surfaces scrolled to the very top
    pub fn top() -> Self {
        Self::default()
    }

    /// Larger of the two readings; NaN readings are ignored
    pub fn max(&self) -> f64 {
        self.window.max(self.document)
    }

    pub fn is_at_top(&self, tolerance: f64) -> bool {
        self.max() <= tolerance
    }
}

/// One touch sample
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TouchPoint {
    /// Vertical coordinate of the first touch, relative to the viewport
    pub y: f64,
    /// Number of fingers currently on the surface
    pub touches: u32,
}

impl TouchPoint {
    pub fn new(y: f64) -> Self {
        Self { y, touches: 1 }
    }

    pub fn with_touches(y: f64, touches: u32) -> Self {
        Self { y, touches }
    }
}

/// How a gesture ended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EndKind {
    Up,
    Cancel,
}

/// Events the host delivers to the controller
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GestureEvent {
    Scroll(ScrollOffsets),
    Start(TouchPoint),
    Move(TouchPoint),
    End { kind: EndKind },
}

impl GestureEvent {
    pub fn start(y: f64) -> Self {
        GestureEvent::Start(TouchPoint::new(y))
    }

    pub fn move_to(y: f64) -> Self {
        GestureEvent::Move(TouchPoint::new(y))
    }

    pub fn up() -> Self {
        GestureEvent::End { kind: EndKind::Up }
    }

    pub fn cancel() -> Self {
        GestureEvent::End {
            kind: EndKind::Cancel,
        }
    }

    pub fn scroll(window: f64, document: f64) -> Self {
        GestureEvent::Scroll(ScrollOffsets::new(window, document))
    }

    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            GestureEvent::Scroll(_) => "scroll",
            GestureEvent::Start(_) => "start",
            GestureEvent::Move(_) => "move",
            GestureEvent::End {
                kind: EndKind::Up, ..
            } => "up",
            GestureEvent::End {
                kind: EndKind::Cancel,
                ..
            } => "cancel",
        }
    }
}

/// What the host should do with the event it just delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    /// Suppress the platform's default scroll/bounce for this event
    pub prevent_default: bool,
}

impl EventResponse {
    pub fn prevent() -> Self {
        Self {
            prevent_default: true,
        }
    }
}

/// Side effects produced by a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Register scroll and touch listeners with the host
    Subscribe,
    /// Remove every listener registered by `Subscribe`
    Unsubscribe,
    /// Suppress the default action of the current event
    PreventDefault,
    /// Run the refresh action
    Refresh,
}
