use gloo_storage::{LocalStorage, Storage};
use web_sys::{HtmlInputElement, HtmlSelectElement, window};
use yew::prelude::*;
use yew_icons::{Icon, IconId};

use limelight_shared::models::WorkspaceSettings;

const STORAGE_KEY: &str = "limelight.settings";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsTab {
    General,
    Ai,
    Notifications,
}

impl SettingsTab {
    fn label(self) -> &'static str {
        match self {
            SettingsTab::General => "General",
            SettingsTab::Ai => "AI Settings",
            SettingsTab::Notifications => "Notifications",
        }
    }

    fn icon(self) -> IconId {
        match self {
            SettingsTab::General => IconId::HeroiconsOutlineCog6Tooth,
            SettingsTab::Ai => IconId::HeroiconsOutlineSparkles,
            SettingsTab::Notifications => IconId::HeroiconsOutlineBell,
        }
    }
}

/// Settings page: workspace preferences, persisted best-effort in browser
/// local storage.
#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let settings = use_state(|| {
        LocalStorage::get::<WorkspaceSettings>(STORAGE_KEY).unwrap_or_default()
    });
    let active_tab = use_state(|| SettingsTab::General);
    let saved = use_state(|| false);

    let update = {
        let settings = settings.clone();
        let saved = saved.clone();
        move |apply: fn(WorkspaceSettings, String) -> WorkspaceSettings, value: String| {
            settings.set(apply((*settings).clone(), value));
            saved.set(false);
        }
    };

    let on_save = {
        let settings = settings.clone();
        let saved = saved.clone();
        Callback::from(move |_| {
            if let Err(err) = LocalStorage::set(STORAGE_KEY, &*settings) {
                web_sys::console::log_1(&format!("Failed to persist settings: {err}").into());
            }
            // Theme applies immediately; everything else is read lazily.
            let theme = if settings.dark_mode { "dark" } else { "light" };
            if let Some(window) = window()
                && let Some(document) = window.document()
                && let Some(html_element) = document.document_element()
            {
                let _ = html_element.set_attribute("data-theme", theme);
            }
            saved.set(true);
        })
    };

    let select_handler = |apply: fn(WorkspaceSettings, String) -> WorkspaceSettings| {
        let update = update.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                update(apply, select.value());
            }
        })
    };

    let toggle_handler = |apply: fn(WorkspaceSettings, bool) -> WorkspaceSettings| {
        let settings = settings.clone();
        let saved = saved.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                settings.set(apply((*settings).clone(), input.checked()));
                saved.set(false);
            }
        })
    };

    let on_temperature = {
        let settings = settings.clone();
        let saved = saved.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                if let Ok(value) = input.value().parse::<u8>() {
                    settings.set(WorkspaceSettings {
                        temperature: value,
                        ..(*settings).clone()
                    });
                    saved.set(false);
                }
            }
        })
    };

    let tabs = [
        SettingsTab::General,
        SettingsTab::Ai,
        SettingsTab::Notifications,
    ]
    .into_iter()
    .map(|tab| {
        let class = if tab == *active_tab {
            "flex items-center gap-3 px-4 py-3 rounded-lg w-full text-left bg-primary/10 text-primary"
        } else {
            "flex items-center gap-3 px-4 py-3 rounded-lg w-full text-left hover:bg-base-300"
        };
        let onclick = {
            let active_tab = active_tab.clone();
            Callback::from(move |_| active_tab.set(tab))
        };
        html! {
            <button key={tab.label()} {class} {onclick}>
                <Icon icon_id={tab.icon()} class="w-5 h-5" />
                { tab.label() }
            </button>
        }
    })
    .collect::<Html>();

    let panel = match *active_tab {
        SettingsTab::General => html! {
            <div class="space-y-4">
                { select_row("Language", &settings.language, &[("en", "English"), ("fr", "Français"), ("it", "Italiano"), ("zh", "中文")],
                    select_handler(|s, v| WorkspaceSettings { language: v, ..s })) }
                { select_row("Timezone", &settings.timezone, &[("UTC-8", "UTC-8 (Pacific)"), ("UTC-5", "UTC-5 (Eastern)"), ("UTC", "UTC"), ("UTC+1", "UTC+1 (Central Europe)"), ("UTC+8", "UTC+8 (Hong Kong)")],
                    select_handler(|s, v| WorkspaceSettings { timezone: v, ..s })) }
                { select_row("Date Format", &settings.date_format, &[("MM/DD/YYYY", "MM/DD/YYYY"), ("DD/MM/YYYY", "DD/MM/YYYY"), ("YYYY/MM/DD", "YYYY/MM/DD"), ("MMM D, YYYY", "MMM D, YYYY")],
                    select_handler(|s, v| WorkspaceSettings { date_format: v, ..s })) }
                { toggle_row("Dark Mode", settings.dark_mode,
                    toggle_handler(|s, v| WorkspaceSettings { dark_mode: v, ..s })) }
                { toggle_row("Compact Mode", settings.compact_mode,
                    toggle_handler(|s, v| WorkspaceSettings { compact_mode: v, ..s })) }
            </div>
        },
        SettingsTab::Ai => html! {
            <div class="space-y-4">
                { select_row("AI Model", &settings.ai_model, &[("gpt-4", "GPT-4"), ("gpt-3.5-turbo", "GPT-3.5 Turbo"), ("claude-3", "Claude 3")],
                    select_handler(|s, v| WorkspaceSettings { ai_model: v, ..s })) }
                <div>
                    <div class="flex justify-between items-baseline mb-1">
                        <span class="text-sm font-medium">{ "Temperature" }</span>
                        <span class="text-sm text-base-content/70">{ settings.temperature.to_string() }</span>
                    </div>
                    <input
                        type="range"
                        min="0"
                        max="100"
                        class="range range-primary"
                        value={settings.temperature.to_string()}
                        oninput={on_temperature}
                    />
                </div>
                { toggle_row("Auto Processing", settings.auto_processing,
                    toggle_handler(|s, v| WorkspaceSettings { auto_processing: v, ..s })) }
            </div>
        },
        SettingsTab::Notifications => html! {
            <div class="space-y-4">
                { toggle_row("Email Notifications", settings.email_notifications,
                    toggle_handler(|s, v| WorkspaceSettings { email_notifications: v, ..s })) }
                { toggle_row("Browser Notifications", settings.browser_notifications,
                    toggle_handler(|s, v| WorkspaceSettings { browser_notifications: v, ..s })) }
            </div>
        },
    };

    html! {
        <div class="p-6">
            <div class="mb-6">
                <h1 class="text-2xl font-bold">{ "Settings" }</h1>
                <p class="text-base-content/70 mt-1">{ "Configure your Limelight Intelligence settings" }</p>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="card bg-base-200 shadow-xl lg:col-span-1">
                    <div class="card-body p-0">
                        <div class="p-4 border-b border-base-300">
                            <h2 class="font-medium">{ "Settings Categories" }</h2>
                        </div>
                        <nav class="p-2 space-y-1">
                            { tabs }
                        </nav>
                    </div>
                </div>

                <div class="card bg-base-200 shadow-xl lg:col-span-2">
                    <div class="card-body">
                        <h2 class="card-title text-lg">{ active_tab.label() }</h2>
                        { panel }
                        <div class="card-actions justify-end mt-4 items-center gap-3">
                            if *saved {
                                <span class="text-sm text-success">
                                    { "Your settings have been updated successfully" }
                                </span>
                            }
                            <button class="btn btn-primary" onclick={on_save}>{ "Save Changes" }</button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn select_row(
    label: &'static str,
    current: &str,
    options: &[(&'static str, &'static str)],
    onchange: Callback<Event>,
) -> Html {
    html! {
        <div class="flex items-center justify-between gap-4">
            <span class="text-sm font-medium">{ label }</span>
            <select class="select select-bordered select-sm min-w-[200px]" {onchange}>
                {
                    options.iter().map(|(value, text)| html! {
                        <option key={*value} value={*value} selected={current == *value}>
                            { *text }
                        </option>
                    }).collect::<Html>()
                }
            </select>
        </div>
    }
}

fn toggle_row(label: &'static str, checked: bool, onchange: Callback<Event>) -> Html {
    html! {
        <div class="flex items-center justify-between gap-4">
            <span class="text-sm font-medium">{ label }</span>
            <input type="checkbox" class="toggle toggle-primary" {checked} {onchange} />
        </div>
    }
}
