use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

use limelight_shared::models::LinkedAccount;

use crate::api::{LimelightClient, silently_empty};
use crate::components::account_card::AccountCard;
use crate::components::qr_code_modal::QrCodeModal;
use crate::config::FrontendConfig;

const LOAD_ERROR: &str = "Failed to load accounts. Please try again later.";
const DISCONNECT_ERROR: &str = "Failed to disconnect account. Please try again later.";
const QR_ERROR: &str = "Failed to connect to authentication service";

/// Accounts page: linked accounts from the accounts service, disconnect,
/// and the QR-code linking flow.
#[function_component(AccountsPage)]
pub fn accounts_page() -> Html {
    let accounts = use_state(Vec::<LinkedAccount>::new);
    let is_loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let qr_open = use_state(|| false);
    let qr_data_url = use_state(|| None::<String>);
    let is_fetching_qr = use_state(|| false);
    let reload = use_state(|| 0_u32);

    {
        let accounts = accounts.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();
        use_effect_with(*reload, move |_| {
            is_loading.set(true);
            spawn_local(async move {
                let client = LimelightClient::shared();
                let config = FrontendConfig::new();
                match client.list_accounts(config.org_id).await {
                    Ok(list) => {
                        accounts.set(list);
                        error.set(None);
                    }
                    Err(err) => {
                        web_sys::console::log_1(
                            &format!("Error fetching accounts: {err}").into(),
                        );
                        // Unreachable or misbehaving backends render as the
                        // empty state so the dashboard stays usable.
                        if silently_empty(err.status()) {
                            error.set(None);
                        } else {
                            error.set(Some(LOAD_ERROR.to_string()));
                        }
                        accounts.set(Vec::new());
                    }
                }
                is_loading.set(false);
            });
            || ()
        });
    }

    let on_disconnect = {
        let error = error.clone();
        let reload = reload.clone();
        Callback::from(move |account_id: i64| {
            let error = error.clone();
            let reload = reload.clone();
            spawn_local(async move {
                let client = LimelightClient::shared();
                match client.disconnect_account(account_id).await {
                    Ok(()) => reload.set(*reload + 1),
                    Err(err) => {
                        web_sys::console::log_1(
                            &format!("Error disconnecting account: {err}").into(),
                        );
                        error.set(Some(DISCONNECT_ERROR.to_string()));
                    }
                }
            });
        })
    };

    let on_add_account = {
        let error = error.clone();
        let qr_open = qr_open.clone();
        let qr_data_url = qr_data_url.clone();
        let is_fetching_qr = is_fetching_qr.clone();
        Callback::from(move |_| {
            let error = error.clone();
            let qr_open = qr_open.clone();
            let qr_data_url = qr_data_url.clone();
            let is_fetching_qr = is_fetching_qr.clone();
            is_fetching_qr.set(true);
            spawn_local(async move {
                let client = LimelightClient::shared();
                match client.fetch_qr_code().await {
                    Ok(qr) => {
                        qr_data_url.set(Some(qr.qr_data_url));
                        qr_open.set(true);
                    }
                    Err(err) => {
                        web_sys::console::log_1(
                            &format!("Error fetching QR code: {err}").into(),
                        );
                        error.set(Some(QR_ERROR.to_string()));
                    }
                }
                is_fetching_qr.set(false);
            });
        })
    };

    let on_qr_close = {
        let qr_open = qr_open.clone();
        Callback::from(move |()| qr_open.set(false))
    };

    let on_scan_complete = {
        let qr_open = qr_open.clone();
        let reload = reload.clone();
        Callback::from(move |()| {
            qr_open.set(false);
            // The new account shows up on the next listing.
            reload.set(*reload + 1);
        })
    };

    let add_button = |extra_class: &'static str| {
        let label = if *is_fetching_qr {
            html! {
                <>
                    <span class="loading loading-spinner loading-sm"></span>
                    { "Generating QR..." }
                </>
            }
        } else {
            html! {
                <>
                    <Icon icon_id={IconId::HeroiconsOutlineDevicePhoneMobile} class="w-5 h-5" />
                    { "Add WhatsApp Number" }
                </>
            }
        };
        html! {
            <button
                class={format!("btn btn-primary {extra_class}")}
                onclick={on_add_account.clone()}
                disabled={*is_fetching_qr}
            >
                { label }
            </button>
        }
    };

    html! {
        <div class="p-6">
            <div class="mb-6 flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                <div>
                    <h1 class="text-2xl font-bold">{ "Limelight Accounts" }</h1>
                    <p class="text-base-content/70 mt-1">{ "Manage your connected Limelight numbers" }</p>
                </div>
                { add_button("") }
            </div>

            if let Some(message) = &*error {
                <div class="alert alert-error mb-6">
                    <Icon icon_id={IconId::HeroiconsOutlineExclamationTriangle} class="w-5 h-5" />
                    <span>{ message.clone() }</span>
                </div>
            }

            if *is_loading {
                <div class="card bg-base-200 p-8">
                    <div class="flex flex-col items-center justify-center space-y-4">
                        <span class="loading loading-spinner loading-lg"></span>
                        <h3 class="text-lg font-medium">{ "Loading Accounts" }</h3>
                        <p class="text-base-content/60">{ "Please wait while we fetch your accounts" }</p>
                    </div>
                </div>
            } else if error.is_none() && !accounts.is_empty() {
                <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6">
                    {
                        accounts.iter().map(|account| html! {
                            <AccountCard
                                key={account.id.to_string()}
                                account={account.clone()}
                                on_disconnect={on_disconnect.clone()}
                            />
                        }).collect::<Html>()
                    }
                </div>
            } else if error.is_none() {
                <div class="card bg-base-200 p-8">
                    <div class="flex flex-col items-center justify-center space-y-4">
                        <Icon icon_id={IconId::HeroiconsOutlineDevicePhoneMobile} class="w-12 h-12 text-base-content/40" />
                        <h3 class="text-lg font-medium">{ "No Account found" }</h3>
                        <p class="text-base-content/60">{ "Connect your first WhatsApp account to get started" }</p>
                        { add_button("mt-2") }
                    </div>
                </div>
            }

            <QrCodeModal
                open={*qr_open}
                qr_data_url={(*qr_data_url).clone()}
                on_close={on_qr_close}
                on_scan_complete={on_scan_complete}
            />
        </div>
    }
}
