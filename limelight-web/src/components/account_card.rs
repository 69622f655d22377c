use chrono::Utc;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

use limelight_shared::format::{format_date, time_ago};
use limelight_shared::models::LinkedAccount;

#[derive(Properties, PartialEq)]
pub struct AccountCardProps {
    pub account: LinkedAccount,
    pub on_disconnect: Callback<i64>,
}

/// A connected account with its status badge and a two-step disconnect.
#[function_component(AccountCard)]
pub fn account_card(props: &AccountCardProps) -> Html {
    let account = &props.account;
    let show_confirm = use_state(|| false);

    let on_disconnect = {
        let show_confirm = show_confirm.clone();
        let callback = props.on_disconnect.clone();
        let account_id = account.id;
        Callback::from(move |_| {
            if *show_confirm {
                callback.emit(account_id);
                show_confirm.set(false);
            } else {
                show_confirm.set(true);
            }
        })
    };

    let (badge_class, badge_label) = if account.is_active {
        ("badge badge-success gap-1", "Active")
    } else {
        ("badge badge-ghost gap-1", "Inactive")
    };

    html! {
        <div class="card bg-base-200 shadow-xl overflow-hidden">
            <div class="border-b border-base-300 p-4 flex justify-between items-center">
                <div class="flex items-center">
                    <div class="avatar placeholder">
                        <div class="bg-success text-success-content rounded-full w-10">
                            <Icon icon_id={IconId::HeroiconsOutlineDevicePhoneMobile} class="w-6 h-6" />
                        </div>
                    </div>
                    <div class="ml-3">
                        <h3 class="font-medium">{ &account.name }</h3>
                        <p class="text-sm text-base-content/70">{ &account.phone_number }</p>
                    </div>
                </div>
                <span class={badge_class}>{ badge_label }</span>
            </div>

            <div class="card-body p-4">
                <div class="grid grid-cols-2 gap-4 mb-4">
                    <div>
                        <p class="text-sm text-base-content/60">{ "Connected" }</p>
                        <p class="text-sm font-medium">
                            { format_date(account.connected_at, "MMM D, YYYY") }
                        </p>
                    </div>
                    <div>
                        <p class="text-sm text-base-content/60">{ "Last Activity" }</p>
                        <p class="text-sm font-medium">
                            { time_ago(account.last_activity, Utc::now()) }
                        </p>
                    </div>
                </div>

                <div class="border-t border-base-300 pt-4 flex justify-end">
                    <button
                        class={if *show_confirm { "btn btn-error btn-sm" } else { "btn btn-ghost btn-sm text-error" }}
                        onclick={on_disconnect}
                    >
                        <Icon icon_id={IconId::HeroiconsOutlineArrowRightOnRectangle} class="w-4 h-4" />
                        { if *show_confirm { "Confirm" } else { "Disconnect" } }
                    </button>
                </div>
            </div>
        </div>
    }
}
