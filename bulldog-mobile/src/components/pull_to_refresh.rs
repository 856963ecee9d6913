//! Pull-to-refresh component for mobile

use bulldog_common::gesture::indicator::DEFAULT_MAX_OFFSET;
use bulldog_common::PullToRefreshConfig;
use yew::prelude::*;

use crate::components::RefreshIndicator;
use crate::hooks::use_pull_to_refresh;

#[derive(Properties, PartialEq)]
pub struct PullToRefreshProps {
    #[prop_or_default]
    pub children: Children,
    pub on_refresh: Callback<()>,
    #[prop_or_default]
    pub config: PullToRefreshConfig,
}

#[function_component(PullToRefresh)]
pub fn pull_to_refresh(props: &PullToRefreshProps) -> Html {
    let handle = use_pull_to_refresh(props.on_refresh.clone(), props.config.clone());
    let indicator = handle.indicator;

    // no transition while the finger is down so the content tracks it exactly
    let transition = if indicator.offset(DEFAULT_MAX_OFFSET) > 0.0 {
        "none"
    } else {
        "transform 0.2s"
    };
    let style = format!(
        "transform: translateY({}px); transition: {};",
        indicator.offset(DEFAULT_MAX_OFFSET),
        transition
    );

    html! {
        <div class="pull-to-refresh-container">
            <RefreshIndicator indicator={indicator} />
            <div style={style}>
                {props.children.clone()}
            </div>
        </div>
    }
}
