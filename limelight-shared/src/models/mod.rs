//! Wire types and catalog records shared between the dashboard crates.

pub mod account;
pub mod chat;
pub mod product;
pub mod settings;
pub mod supplier;
pub mod user;

pub use account::{AccountRecord, Envelope, LinkedAccount, QrCode, StatusSummary, map_accounts};
pub use chat::{Chat, ChatFilter, ExtractedProduct, Message, PromptTemplate, recent_chats};
pub use product::{
    Product, ProductFilter, ProductSort, page_count, page_slice, recent_products, unique_brands,
};
pub use settings::WorkspaceSettings;
pub use supplier::{Supplier, SupplierFilter, unique_locations};
pub use user::{ApiMessage, LoginRequest, RegisterRequest, User};
