//! Pull-to-refresh indicator: spinner plus label

use bulldog_common::PullIndicator;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RefreshIndicatorProps {
    pub indicator: PullIndicator,
}

#[function_component(RefreshIndicator)]
pub fn refresh_indicator(props: &RefreshIndicatorProps) -> Html {
    let indicator = props.indicator;
    if !indicator.is_visible() {
        return html! {};
    }

    let class = match indicator {
        PullIndicator::Armed { .. } => "pull-indicator armed",
        PullIndicator::Refreshing => "pull-indicator refreshing",
        _ => "pull-indicator",
    };

    html! {
        <div class={class} style={format!("opacity: {}", indicator.progress())}>
            {if indicator == PullIndicator::Refreshing {
                html! { <div class="spinner"></div> }
            } else {
                html! {}
            }}
            <p>{indicator.label()}</p>
        </div>
    }
}
