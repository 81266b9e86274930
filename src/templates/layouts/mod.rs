pub mod auth;
pub mod desktop;

pub use auth::auth_layout;
pub use desktop::{desktop_layout, Nav};
