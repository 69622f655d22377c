use yew::{Children, Html, Properties, function_component, html};

use crate::containers::sidebar::Sidebar;
use crate::routes::MainRoute;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub current_route: MainRoute,
}

/// Sidebar plus scrollable main pane.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="flex h-screen overflow-hidden bg-base-100">
            <Sidebar current_route={props.current_route.clone()} />
            <main class="flex-1 overflow-x-hidden overflow-y-auto">
                { props.children.clone() }
            </main>
        </div>
    }
}
