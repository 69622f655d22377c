use yew::{Html, function_component, html};

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-screen">
            <div class="bg-base-200 p-6 rounded-lg shadow-md flex flex-col items-center">
                <div class="text-xl font-medium">
                    { "Limelight Intelligence" }
                </div>
                <div class="mt-3 flex items-center gap-2">
                    <span class="loading loading-spinner loading-sm"></span>
                    <span>{ "Loading" }</span>
                </div>
            </div>
        </div>
    }
}
