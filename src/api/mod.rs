mod cache;
mod client;
mod error;
pub mod models;

pub use cache::OrderCache;
pub use client::{HttpOrderApi, OrderApi};
pub use error::ApiError;
pub use models::{AdminUser, LoginRequest, LoginResponse, OrdersPage, PageQuery};
