mod accounts;
mod chats;
mod dashboard;
mod error;
mod login;
mod products;
mod settings;
mod suppliers;

pub use accounts::AccountsPage;
pub use chats::ChatsPage;
pub use dashboard::DashboardPage;
pub use error::NotFoundPage;
pub use login::LoginPage;
pub use products::ProductsPage;
pub use settings::SettingsPage;
pub use suppliers::SuppliersPage;
