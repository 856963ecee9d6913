//! Common test utilities and helpers

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use bulldog_common::{
    Error, EventResponse, GestureEvent, GestureHandler, GestureHost, ScrollOffsets, TouchPoint,
};

/// Install a test-writer subscriber once; `RUST_LOG=bulldog=trace` shows transitions
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Default)]
struct Bus {
    handlers: BTreeMap<u64, GestureHandler>,
    next_id: u64,
    subscribe_calls: usize,
    unsubscribe_calls: usize,
    offsets: ScrollOffsets,
    prevented: usize,
}

/// In-memory event bus standing in for the window/document listeners
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Rc<RefCell<Bus>>,
}

impl EventBus {
    /// Deliver an event to every registered listener
    pub fn dispatch(&self, event: GestureEvent) -> EventResponse {
        let handlers: Vec<GestureHandler> = self.inner.borrow().handlers.values().cloned().collect();

        let mut response = EventResponse::default();
        for handler in handlers {
            if handler(&event).prevent_default {
                response.prevent_default = true;
            }
        }

        if response.prevent_default {
            self.inner.borrow_mut().prevented += 1;
        }
        response
    }

    pub fn scroll_to(&self, window: f64, document: f64) {
        let offsets = ScrollOffsets::new(window, document);
        self.inner.borrow_mut().offsets = offsets;
        self.dispatch(GestureEvent::Scroll(offsets));
    }

    pub fn touch_start(&self, y: f64) -> EventResponse {
        self.dispatch(GestureEvent::Start(TouchPoint::new(y)))
    }

    pub fn touch_move(&self, y: f64) -> EventResponse {
        self.dispatch(GestureEvent::Move(TouchPoint::new(y)))
    }

    pub fn touch_end(&self) -> EventResponse {
        self.dispatch(GestureEvent::up())
    }

    pub fn touch_cancel(&self) -> EventResponse {
        self.dispatch(GestureEvent::cancel())
    }

    /// Full single-finger gesture: start, each move, up
    pub fn gesture(&self, start: f64, moves: &[f64]) {
        self.touch_start(start);
        for y in moves {
            self.touch_move(*y);
        }
        self.touch_end();
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().handlers.len()
    }

    pub fn subscribe_calls(&self) -> usize {
        self.inner.borrow().subscribe_calls
    }

    pub fn unsubscribe_calls(&self) -> usize {
        self.inner.borrow().unsubscribe_calls
    }

    pub fn prevented(&self) -> usize {
        self.inner.borrow().prevented
    }
}

/// Fake host backed by an [`EventBus`]
pub struct FakeHost {
    bus: EventBus,
    touch_capable: bool,
    fail_subscribe: bool,
}

impl FakeHost {
    pub fn new(bus: &EventBus) -> Self {
        Self {
            bus: bus.clone(),
            touch_capable: true,
            fail_subscribe: false,
        }
    }

    pub fn without_touch(bus: &EventBus) -> Self {
        Self {
            touch_capable: false,
            ..Self::new(bus)
        }
    }

    pub fn failing(bus: &EventBus) -> Self {
        Self {
            fail_subscribe: true,
            ..Self::new(bus)
        }
    }
}

impl GestureHost for FakeHost {
    type Subscription = u64;

    fn is_touch_capable(&self) -> bool {
        self.touch_capable
    }

    fn scroll_offsets(&self) -> ScrollOffsets {
        self.bus.inner.borrow().offsets
    }

    fn subscribe(&mut self, handler: GestureHandler) -> bulldog_common::Result<u64> {
        let mut bus = self.bus.inner.borrow_mut();
        bus.subscribe_calls += 1;
        if self.fail_subscribe {
            return Err(Error::Host("listener registration refused".to_string()));
        }
        let id = bus.next_id;
        bus.next_id += 1;
        bus.handlers.insert(id, handler);
        Ok(id)
    }

    fn unsubscribe(&mut self, subscription: u64) {
        let mut bus = self.bus.inner.borrow_mut();
        bus.unsubscribe_calls += 1;
        bus.handlers.remove(&subscription);
    }
}

/// Counts refresh invocations
#[derive(Clone, Default)]
pub struct RefreshCounter {
    count: Rc<Cell<usize>>,
}

impl RefreshCounter {
    pub fn callback(&self) -> impl Fn() + 'static {
        let count = self.count.clone();
        move || count.set(count.get() + 1)
    }

    pub fn get(&self) -> usize {
        self.count.get()
    }
}
