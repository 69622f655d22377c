mod api;
mod app;
mod components;
mod config;
mod containers;
mod models;
mod pages;
mod routes;

#[cfg(test)]
mod api_test;
#[cfg(test)]
mod routes_test;

use app::App;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(Root)]
fn root() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

fn main() {
    // Surface panic payloads in the browser console instead of losing them.
    std::panic::set_hook(Box::new(|info| {
        if let Some(s) = info.payload().downcast_ref::<String>() {
            web_sys::console::error_1(&format!("Panic: {s}").into());
        } else if let Some(s) = info.payload().downcast_ref::<&str>() {
            web_sys::console::error_1(&format!("Panic: {s}").into());
        } else {
            web_sys::console::error_1(&"Unknown panic".into());
        }
        if let Some(location) = info.location() {
            web_sys::console::error_1(
                &format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
                .into(),
            );
        }
    }));

    web_sys::console::log_1(&"Starting Limelight Intelligence".into());

    Renderer::<Root>::new().render();
}
