//! Pull-to-refresh state machine
//!
//! Transitions are plain functions from a [`GestureState`] and an input to a
//! new state plus a list of [`Effect`]s. Nothing here touches a host, so every
//! gesture sequence can be replayed in a test without a DOM.
//!
//! Phase flow: `Idle -> Tracking -> {Idle, Refreshing}`. `Refreshing` only
//! leaves through [`GestureState::reset`].

use tracing::{debug, info, trace};

use super::config::{MultiTouchPolicy, PullToRefreshConfig};
use super::event::{Effect, EndKind, EventResponse, GestureEvent, ScrollOffsets, TouchPoint};
use super::LOG_TARGET;

/// Current gesture phase
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// A gesture has been claimed; coordinates exist only in this phase
    Tracking { start_y: f64, current_y: f64 },
    /// The refresh action has fired and the caller has not reset yet
    Refreshing,
}

impl Phase {
    /// `current_y - start_y` while tracking
    pub fn pull_distance(&self) -> Option<f64> {
        match *self {
            Phase::Tracking { start_y, current_y } => Some(current_y - start_y),
            _ => None,
        }
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self, Phase::Tracking { .. })
    }

    pub fn is_refreshing(&self) -> bool {
        matches!(self, Phase::Refreshing)
    }

    fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Tracking { .. } => "tracking",
            Phase::Refreshing => "refreshing",
        }
    }
}

/// Full controller state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    pub phase: Phase,
    /// Result of the most recent scroll sample
    pub was_at_top: bool,
    /// Whether host listeners are currently registered
    pub attached: bool,
}

/// Outcome of one transition
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: GestureState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn unchanged(state: GestureState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    fn to(state: GestureState) -> Self {
        Self::unchanged(state)
    }

    fn with(state: GestureState, effect: Effect) -> Self {
        Self {
            state,
            effects: vec![effect],
        }
    }

    pub fn has(&self, effect: Effect) -> bool {
        self.effects.contains(&effect)
    }

    /// Host-facing response for the event that produced this transition
    pub fn response(&self) -> EventResponse {
        EventResponse {
            prevent_default: self.has(Effect::PreventDefault),
        }
    }
}

impl GestureState {
    /// Register with the host
    ///
    /// Nothing is subscribed when the controller is disabled, the host has
    /// no touch support, or listeners are already registered.
    pub fn attach(
        self,
        touch_capable: bool,
        offsets: ScrollOffsets,
        config: &PullToRefreshConfig,
    ) -> Transition {
        if self.attached {
            trace!(target: LOG_TARGET, "attach ignored, already attached");
            return Transition::unchanged(self);
        }

        if !config.enabled {
            debug!(target: LOG_TARGET, "pull-to-refresh disabled, not subscribing");
            return Transition::unchanged(self);
        }

        if !touch_capable {
            debug!(target: LOG_TARGET, "host has no touch support, not subscribing");
            return Transition::unchanged(self);
        }

        let state = GestureState {
            attached: true,
            was_at_top: offsets.is_at_top(config.at_top_tolerance),
            ..self
        };
        debug!(target: LOG_TARGET, was_at_top = state.was_at_top, "subscribing to host events");
        Transition::with(state, Effect::Subscribe)
    }

    /// Remove host listeners and abandon any in-flight gesture
    pub fn detach(self) -> Transition {
        if !self.attached {
            trace!(target: LOG_TARGET, "detach ignored, not attached");
            return Transition::unchanged(self);
        }

        let phase = match self.phase {
            Phase::Tracking { .. } => {
                debug!(target: LOG_TARGET, "abandoning tracked gesture on detach");
                Phase::Idle
            }
            other => other,
        };

        Transition::with(
            GestureState {
                phase,
                attached: false,
                ..self
            },
            Effect::Unsubscribe,
        )
    }

    /// Leave `Refreshing` so a new gesture can be recognized
    pub fn reset(self) -> Transition {
        if self.phase.is_refreshing() {
            debug!(target: LOG_TARGET, "refresh cycle reset");
            return Transition::to(GestureState {
                phase: Phase::Idle,
                ..self
            });
        }
        Transition::unchanged(self)
    }

    /// Apply one host event
    pub fn step(self, event: &GestureEvent, config: &PullToRefreshConfig) -> Transition {
        if !self.attached {
            trace!(target: LOG_TARGET, event = event.name(), "event ignored while detached");
            return Transition::unchanged(self);
        }

        let transition = match *event {
            GestureEvent::Scroll(offsets) => Transition::to(GestureState {
                was_at_top: offsets.is_at_top(config.at_top_tolerance),
                ..self
            }),
            GestureEvent::Start(point) => self.on_start(point, config),
            GestureEvent::Move(point) => self.on_move(point, config),
            GestureEvent::End { kind } => self.on_end(kind, config),
        };

        if transition.state.phase.name() != self.phase.name() {
            debug!(
                target: LOG_TARGET,
                event = event.name(),
                from = self.phase.name(),
                to = transition.state.phase.name(),
                "phase transition"
            );
        }

        transition
    }

    fn on_start(self, point: TouchPoint, config: &PullToRefreshConfig) -> Transition {
        if self.phase != Phase::Idle {
            trace!(target: LOG_TARGET, phase = self.phase.name(), "start ignored, gesture already claimed");
            return Transition::unchanged(self);
        }

        if !point.y.is_finite() {
            trace!(target: LOG_TARGET, "start ignored, malformed coordinate");
            return Transition::unchanged(self);
        }

        if config.multi_touch == MultiTouchPolicy::Cancel && point.touches > 1 {
            trace!(target: LOG_TARGET, touches = point.touches, "start ignored, multi-touch");
            return Transition::unchanged(self);
        }

        if !self.was_at_top || point.y >= config.activation_band {
            trace!(
                target: LOG_TARGET,
                y = point.y,
                was_at_top = self.was_at_top,
                "start not claimed"
            );
            return Transition::unchanged(self);
        }

        Transition::to(GestureState {
            phase: Phase::Tracking {
                start_y: point.y,
                current_y: point.y,
            },
            ..self
        })
    }

    fn on_move(self, point: TouchPoint, config: &PullToRefreshConfig) -> Transition {
        let Phase::Tracking { start_y, .. } = self.phase else {
            return Transition::unchanged(self);
        };

        let abandon = GestureState {
            phase: Phase::Idle,
            ..self
        };

        if !point.y.is_finite() {
            trace!(target: LOG_TARGET, "malformed move, abandoning gesture");
            return Transition::to(abandon);
        }

        if config.multi_touch == MultiTouchPolicy::Cancel && point.touches > 1 {
            trace!(target: LOG_TARGET, touches = point.touches, "second touch, abandoning gesture");
            return Transition::to(abandon);
        }

        let pull_distance = point.y - start_y;
        if pull_distance <= 0.0 {
            // Upward motion cancels for the rest of this touch
            return Transition::to(abandon);
        }

        let state = GestureState {
            phase: Phase::Tracking {
                start_y,
                current_y: point.y,
            },
            ..self
        };

        if pull_distance > config.engage_dead_zone && self.was_at_top {
            Transition::with(state, Effect::PreventDefault)
        } else {
            Transition::to(state)
        }
    }

    fn on_end(self, kind: EndKind, config: &PullToRefreshConfig) -> Transition {
        match self.phase {
            Phase::Tracking { start_y, current_y } => {
                let pull_distance = current_y - start_y;
                if pull_distance >= config.threshold && self.was_at_top {
                    info!(
                        target: LOG_TARGET,
                        pull_distance,
                        threshold = config.threshold,
                        "pull-to-refresh triggered"
                    );
                    Transition::with(
                        GestureState {
                            phase: Phase::Refreshing,
                            ..self
                        },
                        Effect::Refresh,
                    )
                } else {
                    trace!(
                        target: LOG_TARGET,
                        ?kind,
                        pull_distance,
                        was_at_top = self.was_at_top,
                        "gesture ended without refresh"
                    );
                    Transition::to(GestureState {
                        phase: Phase::Idle,
                        ..self
                    })
                }
            }
            // Refreshing is only left through reset()
            Phase::Refreshing | Phase::Idle => Transition::unchanged(self),
        }
    }
}
