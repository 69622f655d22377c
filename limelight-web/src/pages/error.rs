use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::MainRoute;

/// Fallback page for unknown routes.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] space-y-4">
            <h1 class="text-5xl font-bold">{ "404" }</h1>
            <p class="text-base-content/70">{ "The page you are looking for does not exist." }</p>
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary">
                { "Back to Dashboard" }
            </Link<MainRoute>>
        </div>
    }
}
