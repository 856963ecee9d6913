//! Bulldog CO Manager mobile shell
//!
//! Touch-optimized front end built with Yew. Wraps the current view in a
//! pull-to-refresh surface whose refresh action reloads the page.

pub mod components;
pub mod hooks;
pub mod host;
pub mod settings;

use yew::prelude::*;

use components::{Header, PullToRefresh};

/// Reload the whole page, the default refresh action
pub fn reload_page() {
    let reloaded = web_sys::window()
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("no global window"))
        .and_then(|window| window.location().reload());

    if let Err(e) = reloaded {
        tracing::warn!("page reload failed: {:?}", e);
    }
}

/// Main mobile application component
#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| settings::load_pull_config());
    let on_refresh = use_callback((), |_: (), _| reload_page());

    html! {
        <div class="mobile-app">
            <Header title="Bulldog CO Manager" />
            <PullToRefresh on_refresh={on_refresh} config={(*config).clone()}>
                <main id="view-root" class="page-content"></main>
            </PullToRefresh>
        </div>
    }
}

/// Entry point for WASM
#[cfg(target_arch = "wasm32")]
pub fn run_app() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
