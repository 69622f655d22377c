use strum::EnumIter;
use yew::prelude::*;
use yew_icons::IconId;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::containers::layout::Layout;
use crate::models::session::SessionState;
use crate::pages::{
    AccountsPage, ChatsPage, DashboardPage, LoginPage, NotFoundPage, ProductsPage, SettingsPage,
    SuppliersPage,
};

/// The dashboard routes.
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/products")]
    Products,
    #[at("/chats")]
    Chats,
    #[at("/suppliers")]
    Suppliers,
    #[at("/accounts")]
    Accounts,
    #[at("/settings")]
    Settings,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Sidebar label, for the routes that appear in the sidebar.
    pub fn nav_label(&self) -> Option<&'static str> {
        match self {
            MainRoute::Dashboard => Some("Dashboard"),
            MainRoute::Products => Some("Products"),
            MainRoute::Chats => Some("Chats"),
            MainRoute::Suppliers => Some("Suppliers"),
            MainRoute::Accounts => Some("Accounts"),
            MainRoute::Settings => Some("Settings"),
            MainRoute::Home | MainRoute::Login | MainRoute::NotFound => None,
        }
    }

    /// Sidebar icon.
    pub fn nav_icon(&self) -> IconId {
        match self {
            MainRoute::Products => IconId::HeroiconsOutlineShoppingBag,
            MainRoute::Chats => IconId::HeroiconsOutlineChatBubbleLeftRight,
            MainRoute::Suppliers => IconId::HeroiconsOutlineUserGroup,
            MainRoute::Accounts => IconId::HeroiconsOutlineDevicePhoneMobile,
            MainRoute::Settings => IconId::HeroiconsOutlineCog6Tooth,
            _ => IconId::HeroiconsOutlineHome,
        }
    }
}

#[derive(Properties, PartialEq)]
struct MainRouteViewProps {
    route: MainRoute,
}

/// Gate every route behind the session: anonymous visitors land on the
/// login page, and a signed-in visit to `/login` bounces home.
#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let (session, _) = use_store::<SessionState>();
    let is_authenticated = session.is_authenticated();

    if let MainRoute::Login = props.route {
        return if is_authenticated {
            html! { <Redirect<MainRoute> to={MainRoute::Home} /> }
        } else {
            html! { <LoginPage /> }
        };
    }

    if !is_authenticated {
        return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
    }

    let page = match props.route {
        MainRoute::Home | MainRoute::Dashboard => html! { <DashboardPage /> },
        MainRoute::Products => html! { <ProductsPage /> },
        MainRoute::Chats => html! { <ChatsPage /> },
        MainRoute::Suppliers => html! { <SuppliersPage /> },
        MainRoute::Accounts => html! { <AccountsPage /> },
        MainRoute::Settings => html! { <SettingsPage /> },
        MainRoute::NotFound => html! { <NotFoundPage /> },
        // Handled before the authentication gate.
        MainRoute::Login => html! {},
    };

    html! {
        <Layout current_route={props.route.clone()}>
            {page}
        </Layout>
    }
}

/// Switch function for the router.
pub fn switch(route: MainRoute) -> Html {
    html! { <MainRouteView {route} /> }
}
