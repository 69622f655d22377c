use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

use limelight_shared::models::{Chat, ChatFilter};
use limelight_shared::sample;

use crate::components::chat_detail::ChatDetail;
use crate::components::chat_list_item::ChatListItem;

/// Chats page: searchable list with All/Subscribed tabs and a detail panel
/// for the selected chat.
#[function_component(ChatsPage)]
pub fn chats_page() -> Html {
    let search = use_state(String::new);
    let subscribed_only = use_state(|| false);
    let selected_id = use_state(|| None::<i64>);

    let chats = sample::chats();
    let filter = ChatFilter {
        search: (*search).clone(),
        subscribed_only: *subscribed_only,
    };
    let filtered: Vec<Chat> = filter.apply(&chats);

    // Fall back to the first visible chat when nothing is selected or the
    // selection was filtered away.
    let selected: Option<&Chat> = (*selected_id)
        .and_then(|id| filtered.iter().find(|chat| chat.id == id))
        .or_else(|| filtered.first());

    let on_search = {
        let search = search.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                search.set(input.value());
            }
        })
    };

    let show_all = {
        let subscribed_only = subscribed_only.clone();
        Callback::from(move |_| subscribed_only.set(false))
    };
    let show_subscribed = {
        let subscribed_only = subscribed_only.clone();
        Callback::from(move |_| subscribed_only.set(true))
    };

    let list = filtered
        .iter()
        .map(|chat| {
            let on_select = {
                let selected_id = selected_id.clone();
                let id = chat.id;
                Callback::from(move |()| selected_id.set(Some(id)))
            };
            html! {
                <ChatListItem
                    key={chat.id.to_string()}
                    chat={chat.clone()}
                    is_selected={selected.is_some_and(|s| s.id == chat.id)}
                    onclick={on_select}
                />
            }
        })
        .collect::<Html>();

    html! {
        <div class="p-6">
            <div class="mb-6">
                <h1 class="text-2xl font-bold">{ "Limelight Chats" }</h1>
                <p class="text-base-content/70 mt-1">
                    { "Manage and extract information from your connected chats" }
                </p>
            </div>

            <div class="grid grid-cols-1 xl:grid-cols-3 gap-6">
                <div class="card bg-base-200 shadow-xl xl:col-span-1">
                    <div class="card-body p-4">
                        <label class="input input-bordered flex items-center gap-2 mb-4">
                            <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="w-4 h-4 opacity-60" />
                            <input
                                type="text"
                                class="grow"
                                placeholder="Search chats..."
                                value={(*search).clone()}
                                oninput={on_search}
                            />
                        </label>

                        <div role="tablist" class="tabs tabs-boxed mb-2">
                            <a
                                role="tab"
                                class={if *subscribed_only { "tab" } else { "tab tab-active" }}
                                onclick={show_all}
                            >
                                { "All Chats" }
                            </a>
                            <a
                                role="tab"
                                class={if *subscribed_only { "tab tab-active" } else { "tab" }}
                                onclick={show_subscribed}
                            >
                                { "Subscribed" }
                            </a>
                        </div>

                        <div class="overflow-y-auto max-h-[32rem]">
                            { list }
                            {
                                if filtered.is_empty() {
                                    html! {
                                        <div class="text-center py-8 text-base-content/60">
                                            { "No chats found matching your search." }
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    </div>
                </div>

                <div class="card bg-base-200 shadow-xl xl:col-span-2">
                    {
                        selected.map_or_else(|| html! {
                            <div class="card-body items-center justify-center min-h-[400px]">
                                <p class="text-base-content/60">{ "Select a chat to view details" }</p>
                            </div>
                        }, |chat| html! {
                            <ChatDetail key={chat.id.to_string()} chat={chat.clone()} />
                        })
                    }
                </div>
            </div>
        </div>
    }
}
