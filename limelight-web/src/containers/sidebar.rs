use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::api::LimelightClient;
use crate::models::session::SessionState;
use crate::routes::MainRoute;
use limelight_shared::format::initials;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub current_route: MainRoute,
}

/// Fixed navigation rail: brand, page links, signed-in user with logout.
#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let navigator = use_navigator();
    let (session, dispatch) = use_store::<SessionState>();

    let on_logout = {
        let dispatch = dispatch;
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let client = LimelightClient::shared();
                if let Err(err) = client.logout().await {
                    // The local session is cleared regardless.
                    web_sys::console::log_1(&format!("Logout failed: {err}").into());
                }
                dispatch.set(SessionState::signed_out());
                if let Some(nav) = navigator {
                    nav.push(&MainRoute::Login);
                }
            });
        })
    };

    let current = if props.current_route == MainRoute::Home {
        MainRoute::Dashboard
    } else {
        props.current_route.clone()
    };

    let nav_items = MainRoute::iter()
        .filter_map(|route| route.nav_label().map(|label| (route, label)))
        .map(|(route, label)| {
            let classes = if route == current {
                classes!("active")
            } else {
                classes!()
            };
            html! {
                <li>
                    <Link<MainRoute> to={route.clone()} {classes}>
                        <Icon icon_id={route.nav_icon()} class="w-5 h-5" />
                        { label }
                    </Link<MainRoute>>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <aside class="w-64 min-h-screen bg-base-200 flex flex-col border-r border-base-300">
            <div class="p-4 border-b border-base-300">
                <span class="text-lg font-bold flex items-center gap-2">
                    <Icon icon_id={IconId::HeroiconsOutlineChatBubbleLeftRight} class="w-6 h-6 text-primary" />
                    { "Limelight Intelligence" }
                </span>
            </div>
            <ul class="menu p-4 flex-1 gap-1">
                { nav_items }
            </ul>
            {
                session.user.as_ref().map_or_else(|| html! {}, |user| html! {
                    <div class="p-4 border-t border-base-300 flex items-center gap-3">
                        <div class="avatar placeholder">
                            <div class="bg-primary text-primary-content rounded-full w-10">
                                <span>{ initials(&user.username) }</span>
                            </div>
                        </div>
                        <div class="flex-1 min-w-0">
                            <p class="text-sm font-semibold truncate">{ &user.username }</p>
                            <p class="text-xs text-base-content/70 truncate">{ &user.email }</p>
                        </div>
                        <button class="btn btn-ghost btn-sm btn-circle" onclick={on_logout} title="Sign out">
                            <Icon icon_id={IconId::HeroiconsOutlineArrowRightOnRectangle} class="w-5 h-5" />
                        </button>
                    </div>
                })
            }
        </aside>
    }
}
