use crate::api::{ApiError, OrdersPage};
use crate::domain::{OrderListViewModel, VisiblePage};
use std::sync::Arc;
use tracing::{debug, warn};

/// Outcome of a screen's data fetch as far as rendering is concerned.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Failed,
    Loaded(T),
}

impl<T> FetchState<T> {
    /// Logs and collapses the error; screens only show a generic message.
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => FetchState::Loaded(value),
            Err(e) => {
                warn!(error = %e, "fetch failed");
                FetchState::Failed
            }
        }
    }

    pub fn as_ref(&self) -> FetchState<&T> {
        match self {
            FetchState::Loading => FetchState::Loading,
            FetchState::Failed => FetchState::Failed,
            FetchState::Loaded(value) => FetchState::Loaded(value),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchState<U> {
        match self {
            FetchState::Loading => FetchState::Loading,
            FetchState::Failed => FetchState::Failed,
            FetchState::Loaded(value) => FetchState::Loaded(f(value)),
        }
    }
}

/// Everything the order list template needs.
#[derive(Debug)]
pub struct OrderListSnapshot<'a> {
    pub visible: VisiblePage<'a>,
    pub search_term: &'a str,
    /// `pagination.totalCount` reported by the API.
    pub total_count: u64,
}

/// The "All Orders" screen: one view model fed by order fetches.
#[derive(Debug)]
pub struct OrdersScreen {
    view: OrderListViewModel,
    applied: Option<Arc<OrdersPage>>,
    failed: bool,
}

impl OrdersScreen {
    pub fn new() -> Self {
        let mut view = OrderListViewModel::new();
        view.subscribe(|vm| {
            let page = vm.visible_page();
            debug!(
                page = page.page,
                total_pages = page.total_pages,
                total_filtered = page.total_filtered,
                "order list changed"
            );
        });

        Self {
            view,
            applied: None,
            failed: false,
        }
    }

    /// Feeds a completed fetch into the screen.
    ///
    /// A response already applied (same cached page) is not re-sorted; any other
    /// success replaces the orders wholesale. A failure flips the screen to the
    /// error state until the next success.
    pub fn apply(&mut self, result: Result<Arc<OrdersPage>, ApiError>) {
        match result {
            Ok(page) => {
                self.failed = false;
                let already_applied = self
                    .applied
                    .as_ref()
                    .is_some_and(|current| Arc::ptr_eq(current, &page));
                if !already_applied {
                    self.view.set_orders(page.data.clone());
                    self.applied = Some(page);
                }
            }
            Err(e) => {
                warn!(error = %e, "order list fetch failed");
                self.failed = true;
            }
        }
    }

    /// Only a changed term goes to the view model, so the page survives repeats.
    pub fn search(&mut self, term: &str) {
        if term != self.view.search_term() {
            self.view.set_search_term(term);
        }
    }

    pub fn go_to(&mut self, page: usize) {
        self.view.set_page(page);
    }

    pub fn view(&self) -> &OrderListViewModel {
        &self.view
    }

    pub fn snapshot(&self) -> FetchState<OrderListSnapshot<'_>> {
        if self.failed {
            return FetchState::Failed;
        }
        match &self.applied {
            None => FetchState::Loading,
            Some(source) => FetchState::Loaded(OrderListSnapshot {
                visible: self.view.visible_page(),
                search_term: self.view.search_term(),
                total_count: source.total_count(),
            }),
        }
    }
}

impl Default for OrdersScreen {
    fn default() -> Self {
        Self::new()
    }
}
