use wasm_bindgen_futures::spawn_local;
use yew::{Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::api::LimelightClient;
use crate::components::loading::Loading;
use crate::models::session::SessionState;
use crate::routes::{MainRoute, switch};

/// Application shell: runs the bootstrap session check once on mount, then
/// hands off to the router.
#[function_component(App)]
pub fn app() -> Html {
    let (session, dispatch) = use_store::<SessionState>();

    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |()| {
            dispatch.set(SessionState::begin_bootstrap());
            spawn_local(async move {
                let client = LimelightClient::shared();
                match client.current_user().await {
                    Ok(user) => {
                        dispatch.set(SessionState::bootstrap_resolved(Some(user)));
                    }
                    Err(err) => {
                        // Not a user-facing error: an expired or missing
                        // cookie simply means anonymous.
                        web_sys::console::log_1(
                            &format!("Authentication check failed: {err}").into(),
                        );
                        dispatch.set(SessionState::bootstrap_resolved(None));
                    }
                }
            });
            || ()
        });
    }

    if session.is_loading() {
        return html! { <Loading /> };
    }

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={switch} />
        </BrowserRouter>
    }
}
