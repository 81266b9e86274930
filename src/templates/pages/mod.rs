pub mod dashboard;
pub mod login;
pub mod orders;
pub mod revenue;

pub use dashboard::{dashboard_content, dashboard_page, order_modal, order_modal_error};
pub use login::{login_page, LoginForm};
pub use orders::{orders_page, orders_table_fragment};
pub use revenue::{revenue_content, revenue_page};
