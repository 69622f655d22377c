use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use limelight_shared::format::{initials, time_ago};
use limelight_shared::models::Chat;
use limelight_shared::sample;

use crate::components::prompt_template_card::PromptTemplateCard;

const PROCESSING_DELAY_MS: u32 = 1_500;

#[derive(Properties, PartialEq)]
pub struct ChatDetailProps {
    pub chat: Chat,
}

/// Detail panel for the selected chat: subscription toggle, extraction
/// prompt editor, recent messages, and the demo extraction result.
///
/// Parents should key this component by chat id so the editor state resets
/// when the selection changes.
#[function_component(ChatDetail)]
pub fn chat_detail(props: &ChatDetailProps) -> Html {
    let chat = &props.chat;
    let prompt = use_state(|| chat.prompt.clone().unwrap_or_default());
    let is_subscribed = use_state(|| chat.is_subscribed);
    let is_processing = use_state(|| false);
    let show_extracted = use_state(|| false);
    let notice = use_state(|| None::<String>);

    let on_prompt_input = {
        let prompt = prompt.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlTextAreaElement>() {
                prompt.set(input.value());
            }
        })
    };

    let on_process = {
        let prompt = prompt.clone();
        let is_processing = is_processing.clone();
        let show_extracted = show_extracted.clone();
        let notice = notice.clone();
        Callback::from(move |_| {
            if prompt.trim().is_empty() {
                notice.set(Some("Please enter a prompt before processing".to_string()));
                return;
            }
            notice.set(None);
            is_processing.set(true);
            let is_processing = is_processing.clone();
            let show_extracted = show_extracted.clone();
            spawn_local(async move {
                // Extraction is simulated client-side.
                TimeoutFuture::new(PROCESSING_DELAY_MS).await;
                is_processing.set(false);
                show_extracted.set(true);
            });
        })
    };

    let on_save_prompt = {
        let notice = notice.clone();
        Callback::from(move |_| {
            notice.set(Some("Your prompt has been saved for this chat".to_string()));
        })
    };

    let on_toggle_subscription = {
        let is_subscribed = is_subscribed.clone();
        Callback::from(move |_| {
            is_subscribed.set(!*is_subscribed);
        })
    };

    let on_select_template = {
        let prompt = prompt.clone();
        Callback::from(move |content: String| {
            prompt.set(content);
        })
    };

    let now = Utc::now();
    let messages = sample::messages(chat.id);
    let templates = sample::prompt_templates();
    let extracted = sample::extracted_demo();
    let avatar = chat.avatar.clone().unwrap_or_else(|| initials(&chat.name));

    html! {
        <>
            <div class="border-b border-base-300 p-4 flex items-center justify-between">
                <div class="flex items-center">
                    <div class="avatar placeholder">
                        <div class="bg-info/20 text-info rounded-full w-12">
                            <span>{ avatar }</span>
                        </div>
                    </div>
                    <div class="ml-3">
                        <h3 class="text-lg font-semibold">{ &chat.name }</h3>
                        <p class="text-sm text-base-content/70">{ &chat.phone_number }</p>
                    </div>
                </div>
                <label class="flex items-center gap-2 cursor-pointer">
                    <span class="text-sm">{ "Subscribed" }</span>
                    <input
                        type="checkbox"
                        class="toggle toggle-primary"
                        checked={*is_subscribed}
                        onchange={on_toggle_subscription}
                    />
                </label>
            </div>

            <div class="p-6">
                if let Some(message) = &*notice {
                    <div class="alert alert-info mb-4">
                        <span>{ message.clone() }</span>
                    </div>
                }

                <div class="mb-6">
                    <label class="block text-sm font-medium mb-2">{ "Intelligence Prompt" }</label>
                    <div class="flex flex-col md:flex-row gap-2">
                        <textarea
                            rows="3"
                            class="textarea textarea-bordered flex-1"
                            placeholder="Add a prompt for extracting information..."
                            value={(*prompt).clone()}
                            oninput={on_prompt_input}
                        />
                        <div class="flex flex-row md:flex-col gap-2">
                            <button
                                class="btn btn-primary whitespace-nowrap"
                                onclick={on_process}
                                disabled={*is_processing}
                            >
                                { if *is_processing { "Processing..." } else { "Process Now" } }
                            </button>
                            <button class="btn btn-outline whitespace-nowrap" onclick={on_save_prompt}>
                                { "Save Prompt" }
                            </button>
                        </div>
                    </div>
                </div>

                <div class="mb-6">
                    <h3 class="text-sm font-medium mb-2">{ "Prompt Templates" }</h3>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
                        {
                            templates.into_iter().map(|template| {
                                let key = template.id.to_string();
                                html! {
                                    <PromptTemplateCard
                                        {key}
                                        {template}
                                        on_select={on_select_template.clone()}
                                    />
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <div class="border border-base-300 rounded-lg mb-6">
                    <div class="border-b border-base-300 px-4 py-3 bg-base-200">
                        <h3 class="text-sm font-medium">{ "Recent Messages" }</h3>
                    </div>
                    <div class="p-4 space-y-4 max-h-80 overflow-y-auto">
                        {
                            messages.iter().map(|message| {
                                let bubble = if message.is_sent_by_me {
                                    "chat chat-end"
                                } else {
                                    "chat chat-start"
                                };
                                html! {
                                    <div key={message.id.to_string()} class={bubble}>
                                        <div class="chat-bubble text-sm">{ &message.content }</div>
                                        <div class="chat-footer text-xs text-base-content/60">
                                            { time_ago(Some(message.sent_at), now) }
                                        </div>
                                    </div>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                if *show_extracted {
                    <div class="border border-base-300 rounded-lg">
                        <div class="border-b border-base-300 px-4 py-3 bg-base-200">
                            <h3 class="text-sm font-medium">{ "Extracted Product Data" }</h3>
                        </div>
                        <div class="p-4 grid grid-cols-2 gap-4">
                            { extraction_field("Product Name", &extracted.product_name) }
                            { extraction_field("Brand", &extracted.brand) }
                            { extraction_field("Material", &extracted.material) }
                            { extraction_field("Color", &extracted.color) }
                            { extraction_field("Hardware", &extracted.hardware) }
                            { extraction_field("Condition", &extracted.condition) }
                            { extraction_field("Price", &extracted.price) }
                            { extraction_field("Includes", &extracted.includes) }
                        </div>
                    </div>
                }
            </div>
        </>
    }
}

fn extraction_field(label: &'static str, value: &str) -> Html {
    html! {
        <div>
            <p class="text-xs text-base-content/60">{ label }</p>
            <p class="text-sm font-medium">{ value.to_string() }</p>
        </div>
    }
}
