//! Browser implementation of the gesture host
//!
//! Scroll listeners go on both the window and the document root because
//! browsers disagree on which one scrolls. Touch listeners go on the document
//! and are registered non-passive so `preventDefault` can stop the native
//! overscroll bounce.

use bulldog_common::{
    EndKind, Error, GestureEvent, GestureHandler, GestureHost, Result, ScrollOffsets, TouchPoint,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Event, EventTarget, TouchEvent, Window};

/// Gesture host backed by the global `window` and `document`
pub struct DomHost {
    window: Window,
    document: Document,
}

impl DomHost {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| Error::Host("no global window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| Error::Host("window has no document".to_string()))?;
        Ok(Self { window, document })
    }
}

impl GestureHost for DomHost {
    type Subscription = DomSubscription;

    fn is_touch_capable(&self) -> bool {
        let has_touch_start = js_sys::Reflect::has(&self.window, &JsValue::from_str("ontouchstart"))
            .unwrap_or(false);
        has_touch_start || self.window.navigator().max_touch_points() > 0
    }

    fn scroll_offsets(&self) -> ScrollOffsets {
        read_offsets(&self.window, &self.document)
    }

    fn subscribe(&mut self, handler: GestureHandler) -> Result<DomSubscription> {
        let mut subscription = DomSubscription::default();

        let scroll_targets: [&EventTarget; 2] = [self.window.as_ref(), self.document.as_ref()];
        for target in scroll_targets {
            let handler = handler.clone();
            let window = self.window.clone();
            let document = self.document.clone();
            subscription.listen(target, "scroll", true, move |_event: Event| {
                handler(&GestureEvent::Scroll(read_offsets(&window, &document)));
            })?;
        }

        let touch_target: &EventTarget = self.document.as_ref();

        {
            let handler = handler.clone();
            subscription.listen(touch_target, "touchstart", false, move |event: Event| {
                if let Some(point) = first_touch(&event) {
                    dispatch(&handler, &event, GestureEvent::Start(point));
                }
            })?;
        }

        {
            let handler = handler.clone();
            subscription.listen(touch_target, "touchmove", false, move |event: Event| {
                if let Some(point) = first_touch(&event) {
                    dispatch(&handler, &event, GestureEvent::Move(point));
                }
            })?;
        }

        for (event_type, kind) in [("touchend", EndKind::Up), ("touchcancel", EndKind::Cancel)] {
            let handler = handler.clone();
            subscription.listen(touch_target, event_type, true, move |event: Event| {
                dispatch(&handler, &event, GestureEvent::End { kind });
            })?;
        }

        Ok(subscription)
    }

    fn unsubscribe(&mut self, mut subscription: DomSubscription) {
        subscription.remove_all();
    }
}

/// Registered DOM listeners; removed on unsubscribe or drop
#[derive(Default)]
pub struct DomSubscription {
    listeners: Vec<Listener>,
}

struct Listener {
    target: EventTarget,
    event_type: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl DomSubscription {
    fn listen<F>(
        &mut self,
        target: &EventTarget,
        event_type: &'static str,
        passive: bool,
        callback: F,
    ) -> Result<()>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::<dyn FnMut(Event)>::new(callback);

        let options = AddEventListenerOptions::new();
        options.set_passive(passive);

        if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
            event_type,
            closure.as_ref().unchecked_ref(),
            &options,
        ) {
            // listeners registered so far go with the failed subscription
            self.remove_all();
            return Err(Error::Host(format!(
                "failed to add {} listener: {:?}",
                event_type, e
            )));
        }

        self.listeners.push(Listener {
            target: target.clone(),
            event_type,
            closure,
        });
        Ok(())
    }

    fn remove_all(&mut self) {
        for listener in self.listeners.drain(..) {
            if let Err(e) = listener.target.remove_event_listener_with_callback(
                listener.event_type,
                listener.closure.as_ref().unchecked_ref(),
            ) {
                tracing::warn!(event_type = listener.event_type, "failed to remove listener: {:?}", e);
            }
        }
    }
}

impl Drop for DomSubscription {
    fn drop(&mut self) {
        self.remove_all();
    }
}

fn read_offsets(window: &Window, document: &Document) -> ScrollOffsets {
    let window_offset = window.scroll_y().unwrap_or(0.0);
    let document_offset = document
        .document_element()
        .map(|root| root.scroll_top() as f64)
        .unwrap_or(0.0);
    ScrollOffsets::new(window_offset, document_offset)
}

/// Coordinate of the first touch; further touches only contribute to the count
fn first_touch(event: &Event) -> Option<TouchPoint> {
    let touch_event = event.dyn_ref::<TouchEvent>()?;
    let touches = touch_event.touches();
    let first = touches.get(0)?;
    Some(TouchPoint::with_touches(first.client_y() as f64, touches.length()))
}

fn dispatch(handler: &GestureHandler, event: &Event, gesture: GestureEvent) {
    let response = handler(&gesture);
    if response.prevent_default && event.cancelable() {
        event.prevent_default();
    }
}
