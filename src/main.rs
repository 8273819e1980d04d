//! Entry point for the countdown timer application.

use countdown_timer::{config::LOG_LEVEL, CountdownTimer};
use yew::prelude::*;

#[function_component]
pub fn App() -> Html {
    html! {
        <main class="app">
            <CountdownTimer />
        </main>
    }
}

/// Entry point: installs the panic hook and console logger, then renders the App.
fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(LOG_LEVEL));
    yew::Renderer::<App>::new().render();
}
