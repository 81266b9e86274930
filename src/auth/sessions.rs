// src/auth/sessions.rs
//! Signed-in admins, keyed by the SHA-256 of their `session` cookie.
//!
//! A [`Session`] is the explicit context every order fetch goes through: it
//! carries the bearer credential, the per-session order cache and the state of
//! the order list screen. Nothing outside the session reads the credential.

use crate::api::{AdminUser, ApiError, OrderApi, OrderCache, OrdersPage, PageQuery};
use crate::auth::token::{hash_token, new_session_token};
use crate::screens::OrdersScreen;
use astra::Request;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub const SESSION_COOKIE: &str = "session";

pub struct Session {
    credential: Option<String>,
    user: Option<AdminUser>,
    orders: OrderCache,
    order_list: Mutex<OrdersScreen>,
    created_at: Instant,
}

impl Session {
    pub fn authenticated(credential: String, user: Option<AdminUser>, cache_ttl: Duration) -> Self {
        Self {
            credential: Some(credential),
            user,
            orders: OrderCache::new(cache_ttl),
            order_list: Mutex::new(OrdersScreen::new()),
            created_at: Instant::now(),
        }
    }

    /// Request-scoped stand-in for visitors without a cookie. Fetches go out
    /// without a bearer header and the API decides what to do with them.
    pub fn anonymous(cache_ttl: Duration) -> Self {
        Self {
            credential: None,
            user: None,
            orders: OrderCache::new(cache_ttl),
            order_list: Mutex::new(OrdersScreen::new()),
            created_at: Instant::now(),
        }
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    pub fn user(&self) -> Option<&AdminUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    pub fn orders(&self) -> &OrderCache {
        &self.orders
    }

    /// Cached `GET /api/orders` with this session's credential.
    pub fn fetch_orders(
        &self,
        api: &dyn OrderApi,
        query: PageQuery,
    ) -> Result<Arc<OrdersPage>, ApiError> {
        self.orders.get_or_fetch(query, || {
            debug!(signed_in = self.is_authenticated(), "fetching orders");
            api.fetch_orders(self.credential(), query)
        })
    }

    pub fn order_list(&self) -> MutexGuard<'_, OrdersScreen> {
        self.order_list.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub struct SessionStore {
    ttl: Duration,
    cache_ttl: Duration,
    sessions: Mutex<HashMap<[u8; 32], Arc<Session>>>,
}

impl SessionStore {
    pub fn new(ttl: Duration, cache_ttl: Duration) -> Self {
        Self {
            ttl,
            cache_ttl,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Stores a new session and returns the raw token for the cookie.
    pub fn create(&self, credential: String, user: Option<AdminUser>) -> String {
        let raw_token = new_session_token();
        let session = Session::authenticated(credential, user, self.cache_ttl);

        let mut sessions = self.lock();
        sessions.retain(|_, s| s.created_at.elapsed() < self.ttl);
        sessions.insert(hash_token(&raw_token), Arc::new(session));
        info!(active = sessions.len(), "session created");

        raw_token
    }

    pub fn load(&self, raw_token: &str) -> Option<Arc<Session>> {
        let hash = hash_token(raw_token);
        let mut sessions = self.lock();

        match sessions.get(&hash) {
            Some(session) if session.created_at.elapsed() < self.ttl => Some(session.clone()),
            Some(_) => {
                debug!("session expired");
                sessions.remove(&hash);
                None
            }
            None => None,
        }
    }

    /// Drops the session. Requests still holding it lose its cached orders.
    pub fn revoke(&self, raw_token: &str) -> bool {
        let removed = self.lock().remove(&hash_token(raw_token));
        if let Some(session) = &removed {
            session.orders().clear();
            info!("session revoked");
        }
        removed.is_some()
    }

    /// Session named by the request's `session` cookie, if it is still live.
    pub fn from_request(&self, req: &Request) -> Option<Arc<Session>> {
        session_cookie(req).and_then(|token| self.load(&token))
    }

    /// The signed-in session, or a fresh anonymous one for this request.
    pub fn resolve(&self, req: &Request) -> Arc<Session> {
        self.from_request(req)
            .unwrap_or_else(|| Arc::new(Session::anonymous(self.cache_ttl)))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<[u8; 32], Arc<Session>>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Value of the `session` cookie, scanning every `Cookie` header.
pub fn session_cookie(req: &Request) -> Option<String> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

pub fn session_set_cookie(raw_token: &str, ttl: Duration) -> String {
    format!(
        "{SESSION_COOKIE}={raw_token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        ttl.as_secs()
    )
}

pub fn session_clear_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
