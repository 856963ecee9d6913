//! Header component

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: String,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="mobile-header">
            <h1 class="header-title">{&props.title}</h1>
            <div class="header-spacer"></div>
        </header>
    }
}
