use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const SCAN_HANDOFF_DELAY_MS: u32 = 1_500;

#[derive(Properties, PartialEq)]
pub struct QrCodeModalProps {
    pub open: bool,
    pub qr_data_url: Option<String>,
    pub on_close: Callback<()>,
    pub on_scan_complete: Callback<()>,
}

/// Modal showing the linking QR code.
///
/// The scan itself happens on the phone; "Scan Complete" simulates the
/// handoff delay before the parent refetches the account list.
#[function_component(QrCodeModal)]
pub fn qr_code_modal(props: &QrCodeModalProps) -> Html {
    let is_scanning = use_state(|| false);

    let on_close = {
        let callback = props.on_close.clone();
        Callback::from(move |_| callback.emit(()))
    };

    let on_scan_complete = {
        let is_scanning = is_scanning.clone();
        let callback = props.on_scan_complete.clone();
        Callback::from(move |_| {
            is_scanning.set(true);
            let is_scanning = is_scanning.clone();
            let callback = callback.clone();
            spawn_local(async move {
                TimeoutFuture::new(SCAN_HANDOFF_DELAY_MS).await;
                is_scanning.set(false);
                callback.emit(());
            });
        })
    };

    if !props.open {
        return html! {};
    }

    html! {
        <div class="modal modal-open">
            <div class="modal-box max-w-md">
                <h3 class="text-lg font-semibold">{ "Connect WhatsApp" }</h3>
                <p class="text-base-content/70">
                    { "Scan this QR code from your WhatsApp app to connect your number" }
                </p>

                <div class="flex justify-center py-4">
                    {
                        props.qr_data_url.as_ref().map_or_else(|| html! {
                            <div class="w-64 h-64 border border-base-300 rounded-lg flex items-center justify-center bg-base-200">
                                <span class="loading loading-spinner loading-lg"></span>
                            </div>
                        }, |qr| html! {
                            <img src={qr.clone()} alt="WhatsApp QR Code" class="w-64 h-64 border border-base-300 rounded-lg" />
                        })
                    }
                </div>

                <div class="text-center text-sm text-base-content/70 space-y-1">
                    <p>{ "1. Open WhatsApp on your phone" }</p>
                    <p>{ "2. Tap Menu or Settings and select WhatsApp Web" }</p>
                    <p>{ "3. Point your phone camera to this screen to scan the code" }</p>
                </div>

                <div class="modal-action justify-center">
                    <button
                        class="btn btn-primary w-full"
                        onclick={on_scan_complete}
                        disabled={*is_scanning || props.qr_data_url.is_none()}
                    >
                        { if *is_scanning { "Scanning..." } else { "Scan Complete" } }
                    </button>
                </div>
            </div>
            <div class="modal-backdrop" onclick={on_close}></div>
        </div>
    }
}
