//! Visual feedback derived from the gesture phase

use super::machine::Phase;

/// Largest visual translation applied to pulled content, in pixels
pub const DEFAULT_MAX_OFFSET: f64 = 150.0;

/// What the pull indicator should show
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PullIndicator {
    #[default]
    Hidden,
    /// Pulling, not yet far enough to refresh
    Pulling { distance: f64, progress: f64 },
    /// Releasing now would refresh
    Armed { distance: f64 },
    Refreshing,
}

impl PullIndicator {
    pub fn from_phase(phase: &Phase, threshold: f64) -> Self {
        match *phase {
            Phase::Idle => PullIndicator::Hidden,
            Phase::Refreshing => PullIndicator::Refreshing,
            Phase::Tracking { start_y, current_y } => {
                let distance = current_y - start_y;
                if distance <= 0.0 {
                    PullIndicator::Hidden
                } else if distance >= threshold {
                    PullIndicator::Armed { distance }
                } else {
                    PullIndicator::Pulling {
                        distance,
                        progress: (distance / threshold).clamp(0.0, 1.0),
                    }
                }
            }
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, PullIndicator::Hidden)
    }

    /// Indicator opacity, 0.0 to 1.0
    pub fn progress(&self) -> f64 {
        match *self {
            PullIndicator::Hidden => 0.0,
            PullIndicator::Pulling { progress, .. } => progress,
            PullIndicator::Armed { .. } | PullIndicator::Refreshing => 1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PullIndicator::Hidden => "",
            PullIndicator::Pulling { .. } => "Pull to refresh",
            PullIndicator::Armed { .. } => "Release to refresh",
            PullIndicator::Refreshing => "Refreshing...",
        }
    }

    /// Content translation, clamped to `max`
    pub fn offset(&self, max: f64) -> f64 {
        match *self {
            PullIndicator::Pulling { distance, .. } | PullIndicator::Armed { distance } => {
                distance.clamp(0.0, max)
            }
            PullIndicator::Hidden | PullIndicator::Refreshing => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracking(start_y: f64, current_y: f64) -> Phase {
        Phase::Tracking { start_y, current_y }
    }

    #[test]
    fn test_hidden_when_idle_or_not_pulled() {
        assert_eq!(PullIndicator::from_phase(&Phase::Idle, 80.0), PullIndicator::Hidden);
        assert_eq!(
            PullIndicator::from_phase(&tracking(50.0, 50.0), 80.0),
            PullIndicator::Hidden
        );
        assert!(!PullIndicator::Hidden.is_visible());
    }

    #[test]
    fn test_pulling_progress() {
        let indicator = PullIndicator::from_phase(&tracking(10.0, 50.0), 80.0);
        assert_eq!(
            indicator,
            PullIndicator::Pulling {
                distance: 40.0,
                progress: 0.5
            }
        );
        assert_eq!(indicator.label(), "Pull to refresh");
        assert_eq!(indicator.offset(DEFAULT_MAX_OFFSET), 40.0);
    }

    #[test]
    fn test_armed_at_threshold() {
        let indicator = PullIndicator::from_phase(&tracking(10.0, 90.0), 80.0);
        assert_eq!(indicator, PullIndicator::Armed { distance: 80.0 });
        assert_eq!(indicator.label(), "Release to refresh");
        assert_eq!(indicator.progress(), 1.0);
    }

    #[test]
    fn test_offset_is_clamped() {
        let indicator = PullIndicator::from_phase(&tracking(0.0, 400.0), 80.0);
        assert_eq!(indicator.offset(DEFAULT_MAX_OFFSET), 150.0);
    }

    #[test]
    fn test_refreshing() {
        let indicator = PullIndicator::from_phase(&Phase::Refreshing, 80.0);
        assert!(indicator.is_visible());
        assert_eq!(indicator.offset(DEFAULT_MAX_OFFSET), 0.0);
        assert_eq!(indicator.label(), "Refreshing...");
    }
}
