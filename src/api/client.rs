// client.rs
use crate::api::models::{ApiMessage, LoginRequest, LoginResponse, OrdersPage, PageQuery};
use crate::api::ApiError;
use reqwest::blocking::{Client, Request, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

const USER_AGENT: &str = concat!("hotel-admin/", env!("CARGO_PKG_VERSION"));

const LOGIN_PATH: &str = "api/auth/login";
const ORDERS_PATH: &str = "api/orders";

/// The external order/auth API as seen by the admin panel.
///
/// The credential is passed per call, taken from the caller's session; an
/// implementation never holds one itself.
pub trait OrderApi: Send + Sync {
    fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    fn fetch_orders(
        &self,
        credential: Option<&str>,
        query: PageQuery,
    ) -> Result<OrdersPage, ApiError>;
}

pub struct HttpOrderApi {
    client: Client,
    base_url: Url,
}

impl HttpOrderApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let mut base_url = Url::parse(base_url).map_err(|e| ApiError::Config(e.to_string()))?;
        // Without the trailing slash `join` would replace the last path segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::Config(e.to_string()))
    }

    /// Builds `GET /api/orders?page=..&limit=..`, with a bearer header only
    /// when a credential is present.
    pub fn orders_request(
        &self,
        credential: Option<&str>,
        query: PageQuery,
    ) -> Result<Request, ApiError> {
        let mut builder = self
            .client
            .get(self.endpoint(ORDERS_PATH)?)
            .query(&[("page", query.page), ("limit", query.limit)]);

        if let Some(token) = credential {
            builder = builder.bearer_auth(token);
        }

        builder.build().map_err(|e| ApiError::Config(e.to_string()))
    }

    pub fn login_request(&self, request: &LoginRequest) -> Result<Request, ApiError> {
        self.client
            .post(self.endpoint(LOGIN_PATH)?)
            .json(request)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))
    }

    fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        let resp = self
            .client
            .execute(request)
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode(resp)
    }
}

impl OrderApi for HttpOrderApi {
    #[instrument(skip_all)]
    fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        debug!("Sending login request");
        self.execute(self.login_request(request)?)
    }

    #[instrument(
        skip(self, credential),
        fields(page = query.page, limit = query.limit, authenticated = credential.is_some())
    )]
    fn fetch_orders(
        &self,
        credential: Option<&str>,
        query: PageQuery,
    ) -> Result<OrdersPage, ApiError> {
        debug!("Fetching orders");
        let page: OrdersPage = self.execute(self.orders_request(credential, query)?)?;
        debug!(orders = page.data.len(), "Orders fetched");
        Ok(page)
    }
}

fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    let text = resp
        .text()
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !status.is_success() {
        let message = serde_json::from_str::<ApiMessage>(&text)
            .ok()
            .and_then(|m| m.message);
        warn!(status = status.as_u16(), ?message, "API request rejected");
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}
