//! Tests for the routing table.
//!
//! Validates route paths, the sidebar navigation subset, and recognition of
//! the dashboard URLs.

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;
    use yew_router::Routable;

    use crate::routes::MainRoute;

    #[test]
    fn route_paths_match_the_dashboard_urls() {
        assert_eq!(MainRoute::Home.to_path(), "/");
        assert_eq!(MainRoute::Dashboard.to_path(), "/dashboard");
        assert_eq!(MainRoute::Products.to_path(), "/products");
        assert_eq!(MainRoute::Chats.to_path(), "/chats");
        assert_eq!(MainRoute::Suppliers.to_path(), "/suppliers");
        assert_eq!(MainRoute::Accounts.to_path(), "/accounts");
        assert_eq!(MainRoute::Settings.to_path(), "/settings");
        assert_eq!(MainRoute::Login.to_path(), "/login");
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(MainRoute::not_found_route(), Some(MainRoute::NotFound));
    }

    #[test]
    fn recognize_maps_paths_back_to_routes() {
        assert_eq!(MainRoute::recognize("/"), Some(MainRoute::Home));
        assert_eq!(MainRoute::recognize("/dashboard"), Some(MainRoute::Dashboard));
        assert_eq!(MainRoute::recognize("/accounts"), Some(MainRoute::Accounts));
        assert_eq!(MainRoute::recognize("/login"), Some(MainRoute::Login));
    }

    #[test]
    fn sidebar_shows_exactly_the_six_pages() {
        let nav: Vec<&'static str> = MainRoute::iter()
            .filter_map(|route| route.nav_label())
            .collect();

        assert_eq!(
            nav,
            vec![
                "Dashboard",
                "Products",
                "Chats",
                "Suppliers",
                "Accounts",
                "Settings",
            ]
        );
    }

    #[test]
    fn home_and_login_stay_out_of_the_sidebar() {
        assert!(MainRoute::Home.nav_label().is_none());
        assert!(MainRoute::Login.nav_label().is_none());
        assert!(MainRoute::NotFound.nav_label().is_none());
    }

    #[test]
    fn route_equality_and_cloning() {
        let route = MainRoute::Products;
        let cloned = route.clone();

        assert_eq!(route, cloned);
        assert_ne!(MainRoute::Products, MainRoute::Chats);
        assert!(format!("{route:?}").contains("Products"));
    }
}
