use crate::api::{
    AdminUser, ApiError, LoginRequest, LoginResponse, OrderApi, OrdersPage, PageQuery,
};
use crate::config::AppConfig;
use crate::router::handle;
use crate::state::AppState;
use crate::templates::html_error_response;
use astra::{Body, Request, Response};
use http::Method;
use serde_json::{json, Value};
use std::io::Read;
use std::sync::{Arc, Mutex};

/// Stand-in for the external order API. Records every order fetch.
pub struct StubApi {
    login: Result<LoginResponse, ApiError>,
    orders: Mutex<Result<OrdersPage, ApiError>>,
    calls: Mutex<Vec<(Option<String>, PageQuery)>>,
}

impl StubApi {
    pub fn new(orders: Result<OrdersPage, ApiError>) -> Self {
        Self {
            login: Ok(LoginResponse {
                token: "api-token".to_string(),
                user: Some(AdminUser {
                    id: Some("u1".into()),
                    name: Some("Front Desk".into()),
                    phone: Some("9000000000".into()),
                    email: None,
                }),
            }),
            orders: Mutex::new(orders),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn serving(body: Value) -> Arc<Self> {
        Arc::new(Self::new(Ok(orders_page(body))))
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self::new(Err(ApiError::Status {
            status: 500,
            message: Some("boom".into()),
        })))
    }

    pub fn with_login(mut self, login: Result<LoginResponse, ApiError>) -> Self {
        self.login = login;
        self
    }

    pub fn set_orders(&self, orders: Result<OrdersPage, ApiError>) {
        *self.orders.lock().unwrap() = orders;
    }

    pub fn order_calls(&self) -> Vec<(Option<String>, PageQuery)> {
        self.calls.lock().unwrap().clone()
    }
}

impl OrderApi for StubApi {
    fn login(&self, _request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.login.clone()
    }

    fn fetch_orders(
        &self,
        credential: Option<&str>,
        query: PageQuery,
    ) -> Result<OrdersPage, ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push((credential.map(str::to_string), query));
        self.orders.lock().unwrap().clone()
    }
}

pub fn orders_page(body: Value) -> OrdersPage {
    serde_json::from_value(body).expect("fixture should decode")
}

/// `{ data, pagination }` with one order per name; later names are newer.
pub fn orders_body(names: &[Option<&str>]) -> Value {
    let data: Vec<Value> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            json!({
                "_id": format!("o{i}"),
                "customer": { "name": name },
                "items": [{ "name": "Room Service", "quantity": 1 }],
                "grandTotal": 100 * (i + 1),
                "createdAt": format!("2024-07-01T{:02}:{:02}:00Z", i / 60, i % 60)
            })
        })
        .collect();

    json!({
        "data": data,
        "pagination": {
            "totalCount": names.len(),
            "totalPages": 1,
            "currentPage": 1,
            "hasNextPage": false,
            "hasPrevPage": false
        }
    })
}

pub fn guests(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("Guest {i}")).collect()
}

pub fn named(names: &[String]) -> Vec<Option<&str>> {
    names.iter().map(|n| Some(n.as_str())).collect()
}

pub fn test_state(api: Arc<StubApi>) -> AppState {
    AppState::new(AppConfig::default(), api)
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request {
    let mut builder = http::Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, form: &str, cookie: Option<&str>) -> Request {
    let mut builder = http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    builder.body(Body::from(form.to_string())).unwrap()
}

/// Runs the request the way the server does, error pages included.
pub fn send(req: Request, state: &AppState) -> Response {
    match handle(req, state) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    }
}

pub fn read_body(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn header(resp: &Response, name: &str) -> String {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

/// Signs in through `/login` and returns the `session=...` cookie pair.
pub fn sign_in(state: &AppState) -> String {
    let resp = send(post_form("/login", "phone=9000000000&password=secret", None), state);
    assert_eq!(resp.status(), 302, "login should redirect");

    let set_cookie = header(&resp, "Set-Cookie");
    set_cookie
        .split(';')
        .next()
        .expect("cookie pair")
        .to_string()
}
