//! Pull-to-refresh controller
//!
//! Binds the pure state machine to a [`GestureHost`]. The controller owns the
//! subscription; the host owns a handler that holds only a weak reference to
//! the shared state, so dropping the controller is always enough to make any
//! leftover listener inert.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{trace, warn};

use super::config::PullToRefreshConfig;
use super::event::{Effect, EventResponse, GestureEvent};
use super::host::{GestureHandler, GestureHost};
use super::indicator::PullIndicator;
use super::machine::{GestureState, Phase, Transition};
use super::LOG_TARGET;
use crate::Result;

type PhaseObserver = Rc<dyn Fn(Phase)>;

struct Shared {
    state: GestureState,
    config: PullToRefreshConfig,
    observer: Option<PhaseObserver>,
}

/// Recognizes pull-to-refresh gestures on one host surface
pub struct PullToRefreshController<H: GestureHost> {
    host: H,
    shared: Rc<RefCell<Shared>>,
    handler: GestureHandler,
    subscription: Option<H::Subscription>,
}

impl<H: GestureHost> PullToRefreshController<H> {
    /// Validate `config` and subscribe to `host`
    ///
    /// Nothing is subscribed when the config is disabled or the host has no
    /// touch support; the controller is then inert until re-enabled.
    pub fn new<F>(host: H, config: PullToRefreshConfig, on_refresh: F) -> Result<Self>
    where
        F: Fn() + 'static,
    {
        config.validate()?;

        let shared = Rc::new(RefCell::new(Shared {
            state: GestureState::default(),
            config,
            observer: None,
        }));
        let handler = make_handler(Rc::downgrade(&shared), Rc::new(on_refresh));

        let mut controller = Self {
            host,
            shared,
            handler,
            subscription: None,
        };
        controller.attach()?;
        Ok(controller)
    }

    /// Subscribe to the host if enabled, touch capable and not yet attached
    pub fn attach(&mut self) -> Result<()> {
        let touch_capable = self.host.is_touch_capable();
        let offsets = self.host.scroll_offsets();

        let transition = {
            let shared = self.shared.borrow();
            shared.state.attach(touch_capable, offsets, &shared.config)
        };

        if transition.has(Effect::Subscribe) {
            match self.host.subscribe(self.handler.clone()) {
                Ok(subscription) => self.subscription = Some(subscription),
                Err(e) => {
                    warn!(target: LOG_TARGET, error = %e, "failed to subscribe to host events");
                    return Err(e);
                }
            }
        }

        self.apply(transition);
        Ok(())
    }

    /// Unsubscribe and abandon any tracked gesture; safe to call repeatedly
    pub fn detach(&mut self) {
        let transition = self.shared.borrow().state.detach();

        if transition.has(Effect::Unsubscribe) {
            if let Some(subscription) = self.subscription.take() {
                self.host.unsubscribe(subscription);
            }
        }

        self.apply(transition);
    }

    /// Enable or disable the controller at runtime
    pub fn set_enabled(&mut self, enabled: bool) -> Result<()> {
        self.shared.borrow_mut().config.enabled = enabled;
        if enabled {
            self.attach()
        } else {
            self.detach();
            Ok(())
        }
    }

    /// Feed an event directly, exactly as a host listener would
    pub fn handle(&self, event: &GestureEvent) -> EventResponse {
        (self.handler)(event)
    }

    /// Leave the refreshing phase once the embedding view has reloaded its data
    pub fn reset(&self) {
        let transition = self.shared.borrow().state.reset();
        self.apply(transition);
    }

    /// Called with the new phase after every phase change
    pub fn set_observer<F>(&self, observer: F)
    where
        F: Fn(Phase) + 'static,
    {
        self.shared.borrow_mut().observer = Some(Rc::new(observer));
    }

    pub fn state(&self) -> GestureState {
        self.shared.borrow().state
    }

    pub fn phase(&self) -> Phase {
        self.shared.borrow().state.phase
    }

    pub fn is_refreshing(&self) -> bool {
        self.phase().is_refreshing()
    }

    pub fn is_attached(&self) -> bool {
        self.shared.borrow().state.attached
    }

    pub fn indicator(&self) -> PullIndicator {
        let shared = self.shared.borrow();
        PullIndicator::from_phase(&shared.state.phase, shared.config.threshold)
    }

    pub fn config(&self) -> PullToRefreshConfig {
        self.shared.borrow().config.clone()
    }

    fn apply(&self, transition: Transition) {
        commit(&self.shared, transition);
    }
}

impl<H: GestureHost> Drop for PullToRefreshController<H> {
    fn drop(&mut self) {
        self.detach();
    }
}

impl<H: GestureHost> fmt::Debug for PullToRefreshController<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = self.shared.borrow();
        f.debug_struct("PullToRefreshController")
            .field("state", &shared.state)
            .field("config", &shared.config)
            .field("subscribed", &self.subscription.is_some())
            .finish()
    }
}

/// Store the new state and notify the observer on a phase change
///
/// The observer runs after the borrow is released so it may query the
/// controller.
fn commit(shared: &RefCell<Shared>, transition: Transition) -> Transition {
    let notify = {
        let mut guard = shared.borrow_mut();
        let previous = guard.state.phase;
        guard.state = transition.state;
        if previous != transition.state.phase {
            guard.observer.clone()
        } else {
            None
        }
    };

    if let Some(observer) = notify {
        observer(transition.state.phase);
    }
    transition
}

fn make_handler(shared: Weak<RefCell<Shared>>, on_refresh: Rc<dyn Fn()>) -> GestureHandler {
    Rc::new(move |event: &GestureEvent| {
        let Some(shared) = shared.upgrade() else {
            trace!(target: LOG_TARGET, event = event.name(), "event after controller drop");
            return EventResponse::default();
        };

        let transition = match shared.try_borrow() {
            Ok(guard) => guard.state.step(event, &guard.config),
            Err(_) => {
                trace!(target: LOG_TARGET, event = event.name(), "re-entrant event dropped");
                return EventResponse::default();
            }
        };

        let transition = commit(&shared, transition);
        if transition.has(Effect::Refresh) {
            on_refresh();
        }
        transition.response()
    })
}
