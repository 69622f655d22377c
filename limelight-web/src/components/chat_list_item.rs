use chrono::Utc;
use yew::prelude::*;

use limelight_shared::format::{initials, time_ago, truncate_text};
use limelight_shared::models::Chat;

#[derive(Properties, PartialEq)]
pub struct ChatListItemProps {
    pub chat: Chat,
    pub is_selected: bool,
    pub onclick: Callback<()>,
}

/// One entry in the chat list panel.
#[function_component(ChatListItem)]
pub fn chat_list_item(props: &ChatListItemProps) -> Html {
    let chat = &props.chat;
    let onclick = {
        let callback = props.onclick.clone();
        Callback::from(move |_| callback.emit(()))
    };

    let container = if props.is_selected {
        "flex items-start p-3 rounded-lg cursor-pointer bg-primary/10"
    } else {
        "flex items-start p-3 rounded-lg cursor-pointer hover:bg-base-200"
    };

    let avatar = chat
        .avatar
        .clone()
        .unwrap_or_else(|| initials(&chat.name));

    html! {
        <div class={container} {onclick}>
            <div class="avatar placeholder">
                <div class="bg-info/20 text-info rounded-full w-10">
                    <span class="text-sm">{ avatar }</span>
                </div>
            </div>
            <div class="ml-3 flex-1 min-w-0">
                <div class="flex justify-between items-baseline">
                    <h3 class="text-sm font-semibold truncate">{ &chat.name }</h3>
                    <span class="text-xs text-base-content/60 whitespace-nowrap ml-2">
                        { time_ago(chat.last_message_at, Utc::now()) }
                    </span>
                </div>
                <p class="text-sm text-base-content/70 truncate">
                    { truncate_text(chat.last_message.as_deref().unwrap_or_default(), 50) }
                </p>
                {
                    if chat.is_subscribed {
                        html! { <span class="badge badge-primary badge-xs mt-1">{ "Subscribed" }</span> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}
