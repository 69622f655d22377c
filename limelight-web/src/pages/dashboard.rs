use chrono::Utc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

use limelight_shared::format::{initials, time_ago};
use limelight_shared::models::{StatusSummary, recent_chats, recent_products};
use limelight_shared::sample;

use crate::api::LimelightClient;
use crate::config::FrontendConfig;
use crate::routes::MainRoute;

/// Dashboard page: account stats from the accounts service plus recent
/// catalog activity.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let summary = use_state(StatusSummary::default);
    let is_loading = use_state(|| true);

    {
        let summary = summary.clone();
        let is_loading = is_loading.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let client = LimelightClient::shared();
                let config = FrontendConfig::new();
                match client.status_summary(config.org_id).await {
                    Ok(counts) => summary.set(counts),
                    Err(err) => {
                        // Stats stay at zero when the service is unreachable.
                        web_sys::console::log_1(
                            &format!("Error fetching account stats: {err}").into(),
                        );
                    }
                }
                is_loading.set(false);
            });
            || ()
        });
    }

    let products = sample::products();
    let chats = sample::chats();
    let newest_products = recent_products(&products, 3);
    let active_chats = recent_chats(&chats, 3);
    let now = Utc::now();

    let product_rows = newest_products
        .iter()
        .map(|product| {
            html! {
                <tr key={product.id.to_string()} class="hover">
                    <td class="font-medium">{ &product.name }</td>
                    <td class="text-base-content/70">{ &product.brand }</td>
                    <td class="text-base-content/70">{ &product.price }</td>
                </tr>
            }
        })
        .collect::<Html>();

    let chat_rows = active_chats
        .iter()
        .map(|chat| {
            let avatar = chat.avatar.clone().unwrap_or_else(|| initials(&chat.name));
            html! {
                <div key={chat.id.to_string()} class="flex items-start p-3 hover:bg-base-200 rounded-lg">
                    <div class="avatar placeholder">
                        <div class="bg-info/20 text-info rounded-full w-10">
                            <span class="text-sm">{ avatar }</span>
                        </div>
                    </div>
                    <div class="ml-3 flex-1 min-w-0">
                        <div class="flex justify-between items-baseline">
                            <h3 class="text-sm font-semibold">{ &chat.name }</h3>
                            <span class="text-xs text-base-content/60">
                                { time_ago(chat.last_message_at, now) }
                            </span>
                        </div>
                        <p class="text-sm text-base-content/70 truncate">
                            { chat.last_message.clone().unwrap_or_default() }
                        </p>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="p-6 space-y-6">
            <div>
                <h1 class="text-2xl font-bold">{ "Dashboard" }</h1>
                <p class="text-base-content/70 mt-1">{ "Overview of your Limelight Intelligence" }</p>
            </div>

            <div class="stats shadow w-full">
                <div class="stat">
                    <div class="stat-figure text-success">
                        <Icon icon_id={IconId::HeroiconsOutlineDevicePhoneMobile} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{ "Active Accounts" }</div>
                    <div class="stat-value text-success">
                        {
                            if *is_loading {
                                html! { <span class="loading loading-spinner loading-md"></span> }
                            } else {
                                html! { { summary.active.to_string() } }
                            }
                        }
                    </div>
                    <div class="stat-desc">
                        {
                            if *is_loading {
                                "Loading...".to_string()
                            } else {
                                format!("{} linked in total", summary.total())
                            }
                        }
                    </div>
                </div>

                <div class="stat">
                    <div class="stat-figure text-info">
                        <Icon icon_id={IconId::HeroiconsOutlineChatBubbleLeftRight} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{ "Active Chats" }</div>
                    <div class="stat-value text-info">{ chats.len().to_string() }</div>
                    <div class="stat-desc">{ "Monitored supplier chats" }</div>
                </div>

                <div class="stat">
                    <div class="stat-figure text-secondary">
                        <Icon icon_id={IconId::HeroiconsOutlineShoppingBag} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{ "Products" }</div>
                    <div class="stat-value text-secondary">{ products.len().to_string() }</div>
                    <div class="stat-desc">{ "In the catalog" }</div>
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title text-lg">{ "Recent Products" }</h2>
                        <div class="overflow-x-auto">
                            <table class="table table-sm">
                                <thead>
                                    <tr>
                                        <th>{ "Product" }</th>
                                        <th>{ "Brand" }</th>
                                        <th>{ "Price" }</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { product_rows }
                                </tbody>
                            </table>
                        </div>
                        <div class="card-actions justify-end">
                            <Link<MainRoute> to={MainRoute::Products} classes="link link-primary text-sm">
                                { "View all products →" }
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>

                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title text-lg">{ "Recent Chat Activity" }</h2>
                        <div class="space-y-2">
                            { chat_rows }
                        </div>
                        <div class="card-actions justify-end">
                            <Link<MainRoute> to={MainRoute::Chats} classes="link link-primary text-sm">
                                { "View all chats →" }
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
