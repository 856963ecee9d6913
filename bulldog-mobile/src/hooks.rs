//! Yew hook wiring the pull-to-refresh controller to the DOM

use std::cell::RefCell;
use std::rc::Rc;

use bulldog_common::{PullIndicator, PullToRefreshConfig, PullToRefreshController, Result};
use yew::prelude::*;

use crate::host::DomHost;

type SharedController = Rc<RefCell<Option<PullToRefreshController<DomHost>>>>;

/// State exposed to the embedding view
#[derive(Clone, PartialEq)]
pub struct UsePullToRefreshHandle {
    pub indicator: PullIndicator,
    /// Ends the refreshing phase for refresh actions that do not reload the page
    pub reset: Callback<()>,
}

impl UsePullToRefreshHandle {
    pub fn is_refreshing(&self) -> bool {
        self.indicator == PullIndicator::Refreshing
    }
}

/// Attach a pull-to-refresh controller for the lifetime of the component
///
/// The controller is rebuilt whenever `on_refresh` or `config` changes and
/// torn down on unmount.
#[hook]
pub fn use_pull_to_refresh(
    on_refresh: Callback<()>,
    config: PullToRefreshConfig,
) -> UsePullToRefreshHandle {
    let indicator = use_state_eq(PullIndicator::default);
    let controller: SharedController = use_mut_ref(|| None);

    {
        let indicator = indicator.clone();
        let controller = controller.clone();

        use_effect_with((on_refresh, config), move |(on_refresh, config)| {
            match build_controller(on_refresh.clone(), config.clone(), indicator.clone()) {
                Ok(built) => {
                    indicator.set(built.indicator());
                    *controller.borrow_mut() = Some(built);
                }
                Err(e) => tracing::warn!(error = %e, "pull-to-refresh unavailable"),
            }

            move || {
                // dropping the controller removes its listeners
                controller.borrow_mut().take();
            }
        });
    }

    let reset = {
        let controller = controller.clone();
        Callback::from(move |_: ()| {
            if let Some(controller) = controller.borrow().as_ref() {
                controller.reset();
            }
        })
    };

    UsePullToRefreshHandle {
        indicator: *indicator,
        reset,
    }
}

fn build_controller(
    on_refresh: Callback<()>,
    config: PullToRefreshConfig,
    indicator: UseStateHandle<PullIndicator>,
) -> Result<PullToRefreshController<DomHost>> {
    let threshold = config.threshold;
    let controller = PullToRefreshController::new(DomHost::new()?, config, move || {
        on_refresh.emit(())
    })?;

    controller.set_observer(move |phase| {
        indicator.set(PullIndicator::from_phase(&phase, threshold));
    });
    Ok(controller)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_refreshing_follows_indicator() {
        let handle = UsePullToRefreshHandle {
            indicator: PullIndicator::Refreshing,
            reset: Callback::noop(),
        };
        assert!(handle.is_refreshing());

        let handle = UsePullToRefreshHandle {
            indicator: PullIndicator::Armed { distance: 90.0 },
            reset: Callback::noop(),
        };
        assert!(!handle.is_refreshing());
    }
}
