use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

use limelight_shared::models::{LoginRequest, RegisterRequest};

use crate::api::LimelightClient;
use crate::models::session::SessionState;
use crate::routes::MainRoute;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthTab {
    SignIn,
    Register,
}

/// Combined sign-in / register page.
///
/// By design nothing is validated client-side; any input reaches the
/// server, which is the only judge of credentials.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (session, dispatch) = use_store::<SessionState>();
    let active_tab = use_state(|| AuthTab::SignIn);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let username = use_state(String::new);
    let busy = use_state(|| false);
    let navigator = use_navigator();

    let submit_login = {
        let email = email.clone();
        let password = password.clone();
        let busy = busy.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = LoginRequest {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            busy.set(true);
            let busy = busy.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let client = LimelightClient::shared();
                match client.login(&request).await {
                    Ok(user) => {
                        dispatch.set(SessionState::signed_in(user));
                        if let Some(nav) = navigator {
                            nav.push(&MainRoute::Home);
                        }
                    }
                    Err(err) => {
                        web_sys::console::log_1(&format!("Login failed: {err}").into());
                        dispatch.reduce(move |state| state.rejected(err.to_string()).into());
                    }
                }
                busy.set(false);
            });
        })
    };

    let submit_register = {
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let busy = busy.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = RegisterRequest {
                username: (*username).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
            };
            busy.set(true);
            let busy = busy.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let client = LimelightClient::shared();
                match client.register(&request).await {
                    Ok(user) => {
                        dispatch.set(SessionState::signed_in(user));
                        if let Some(nav) = navigator {
                            nav.push(&MainRoute::Home);
                        }
                    }
                    Err(err) => {
                        web_sys::console::log_1(&format!("Registration failed: {err}").into());
                        dispatch.reduce(move |state| state.rejected(err.to_string()).into());
                    }
                }
                busy.set(false);
            });
        })
    };

    let field = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };
    let on_email = field(&email);
    let on_password = field(&password);
    let on_username = field(&username);

    let select_tab = |tab: AuthTab| {
        let active_tab = active_tab.clone();
        Callback::from(move |_| active_tab.set(tab))
    };

    let is_busy = *busy;

    let form = match *active_tab {
        AuthTab::SignIn => html! {
            <form class="space-y-4 mt-4" onsubmit={submit_login}>
                <div class="form-control">
                    <label class="label" for="email">
                        <span class="label-text">{ "Email" }</span>
                    </label>
                    <input
                        id="email"
                        class="input input-bordered w-full"
                        type="text"
                        placeholder="Enter anything (no validation)"
                        value={(*email).clone()}
                        oninput={on_email.clone()}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="password">
                        <span class="label-text">{ "Password" }</span>
                    </label>
                    <input
                        id="password"
                        class="input input-bordered w-full"
                        type="password"
                        placeholder="Enter anything (no validation)"
                        value={(*password).clone()}
                        oninput={on_password.clone()}
                    />
                </div>
                <button class="btn btn-primary w-full" type="submit" disabled={is_busy}>
                    { if is_busy { "Signing in..." } else { "Sign in" } }
                </button>
            </form>
        },
        AuthTab::Register => html! {
            <form class="space-y-4 mt-4" onsubmit={submit_register}>
                <div class="form-control">
                    <label class="label" for="username">
                        <span class="label-text">{ "Username" }</span>
                    </label>
                    <input
                        id="username"
                        class="input input-bordered w-full"
                        type="text"
                        value={(*username).clone()}
                        oninput={on_username}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="email">
                        <span class="label-text">{ "Email" }</span>
                    </label>
                    <input
                        id="email"
                        class="input input-bordered w-full"
                        type="text"
                        value={(*email).clone()}
                        oninput={on_email}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="password">
                        <span class="label-text">{ "Password" }</span>
                    </label>
                    <input
                        id="password"
                        class="input input-bordered w-full"
                        type="password"
                        value={(*password).clone()}
                        oninput={on_password}
                    />
                </div>
                <button class="btn btn-primary w-full" type="submit" disabled={is_busy}>
                    { if is_busy { "Creating account..." } else { "Register" } }
                </button>
            </form>
        },
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-base-200 px-4">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <div class="card-body">
                    <div class="text-center">
                        <h2 class="text-3xl font-bold flex items-center justify-center gap-2">
                            <Icon icon_id={IconId::HeroiconsOutlineChatBubbleLeftRight} class="w-8 h-8 text-primary" />
                            { "Limelight Intelligence" }
                        </h2>
                        <p class="mt-2 text-sm text-base-content/70">{ "Sign in to access your dashboard" }</p>
                    </div>

                    if let Some(message) = &session.error {
                        <div class="alert alert-error mt-4">
                            <span>{ message.clone() }</span>
                        </div>
                    }

                    <div role="tablist" class="tabs tabs-boxed mt-4">
                        <a
                            role="tab"
                            class={if *active_tab == AuthTab::SignIn { "tab tab-active" } else { "tab" }}
                            onclick={select_tab(AuthTab::SignIn)}
                        >
                            { "Login" }
                        </a>
                        <a
                            role="tab"
                            class={if *active_tab == AuthTab::Register { "tab tab-active" } else { "tab" }}
                            onclick={select_tab(AuthTab::Register)}
                        >
                            { "Register" }
                        </a>
                    </div>

                    { form }

                    <div class="text-center text-sm text-base-content/60 mt-2">
                        <p>{ "Demo mode: credentials are not validated client-side" }</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
