//! Host capability interface
//!
//! A host is whatever owns the real input streams: the browser DOM in
//! `bulldog-mobile`, a fake event bus in tests. The controller never reaches
//! for platform globals; it only talks to this trait.

use std::rc::Rc;

use super::event::{EventResponse, GestureEvent, ScrollOffsets};
use crate::Result;

/// Callback the host invokes for every scroll and touch event it observes
///
/// The host must honour the returned [`EventResponse`], calling its native
/// `preventDefault` when asked.
pub type GestureHandler = Rc<dyn Fn(&GestureEvent) -> EventResponse>;

/// Source of scroll and touch events for one scrollable surface
pub trait GestureHost {
    /// Handle that keeps listeners registered until passed to `unsubscribe`
    type Subscription;

    /// Touch-start support or a nonzero max touch points count
    fn is_touch_capable(&self) -> bool;

    /// Current vertical scroll offsets of the window and the document root
    fn scroll_offsets(&self) -> ScrollOffsets;

    /// Register scroll, start, move and end listeners that forward to `handler`
    fn subscribe(&mut self, handler: GestureHandler) -> Result<Self::Subscription>;

    /// Remove every listener registered by the matching `subscribe`
    fn unsubscribe(&mut self, subscription: Self::Subscription);
}
