pub mod order;
pub mod order_list;
pub mod summary;

pub use order::{format_amount, Order};
pub use order_list::{OrderListViewModel, VisiblePage, PAGE_SIZE};
pub use summary::{DashboardSummary, RevenueReport};
