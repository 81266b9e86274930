//! Search, sort and pagination over an already fetched set of orders.
//!
//! [`OrderListViewModel`] is the state behind the "All Orders" screen. It owns the
//! fetched orders (newest first), the search term typed by the admin and the page
//! being shown. Every mutation recomputes the filtered subset synchronously and
//! then notifies subscribers, which re-pull [`OrderListViewModel::visible_page`].

use crate::domain::order::{sort_most_recent_first, Order};
use std::fmt;

/// Rows per page on the order list.
pub const PAGE_SIZE: usize = 10;

pub type SubscriptionId = u64;

type Listener = Box<dyn FnMut(&OrderListViewModel) + Send>;

/// What the table shows for the current state.
#[derive(Debug, Clone, PartialEq)]
pub struct VisiblePage<'a> {
    pub rows: Vec<&'a Order>,
    pub page: usize,
    pub total_pages: usize,
    pub total_filtered: usize,
}

pub struct OrderListViewModel {
    orders: Vec<Order>,
    /// Indices into `orders`, ascending, so relative order is preserved.
    filtered: Vec<usize>,
    search_term: String,
    page: usize,
    page_size: usize,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: SubscriptionId,
}

impl OrderListViewModel {
    pub fn new() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            orders: Vec::new(),
            filtered: Vec::new(),
            search_term: String::new(),
            page: 1,
            page_size: page_size.max(1),
            listeners: Vec::new(),
            next_subscription: 1,
        }
    }

    /// Replaces the backing collection with a freshly fetched one.
    ///
    /// Orders are sorted by `created_at` descending; ties keep fetch order.
    /// The search term survives, the page is clamped to the new page count.
    pub fn set_orders(&mut self, orders: Vec<Order>) {
        self.orders = orders;
        sort_most_recent_first(&mut self.orders);
        self.refilter();
        self.page = self.clamp_page(self.page);
        self.notify();
    }

    /// Stores the term verbatim and goes back to page 1.
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.refilter();
        self.page = 1;
        self.notify();
    }

    /// Out-of-range pages are clamped, never rejected.
    pub fn set_page(&mut self, page: usize) {
        self.page = self.clamp_page(page);
        self.notify();
    }

    pub fn visible_page(&self) -> VisiblePage<'_> {
        let start = (self.page - 1) * self.page_size;
        let rows = self
            .filtered
            .iter()
            .skip(start)
            .take(self.page_size)
            .map(|&idx| &self.orders[idx])
            .collect();

        VisiblePage {
            rows,
            page: self.page,
            total_pages: self.total_pages(),
            total_filtered: self.filtered.len(),
        }
    }

    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn all_orders(&self) -> &[Order] {
        &self.orders
    }

    /// Registers a change hook, called after every mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&OrderListViewModel) + Send + 'static,
    {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn refilter(&mut self) {
        let needle = self.search_term.to_lowercase();
        self.filtered = self
            .orders
            .iter()
            .enumerate()
            .filter(|(_, order)| order.customer_matches(&needle))
            .map(|(idx, _)| idx)
            .collect();
    }

    fn clamp_page(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages().max(1))
    }

    fn notify(&mut self) {
        // Listeners get `&self`, so they are moved out for the duration of the call.
        let mut listeners = std::mem::take(&mut self.listeners);
        for (_, listener) in listeners.iter_mut() {
            listener(self);
        }
        self.listeners = listeners;
    }
}

impl Default for OrderListViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OrderListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderListViewModel")
            .field("orders", &self.orders.len())
            .field("filtered", &self.filtered.len())
            .field("search_term", &self.search_term)
            .field("page", &self.page)
            .field("page_size", &self.page_size)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
