use crate::api::{LoginRequest, PageQuery};
use crate::auth::sessions::{session_clear_cookie, session_cookie, session_set_cookie};
use crate::domain::{DashboardSummary, RevenueReport, PAGE_SIZE};
use crate::errors::ServerError;
use crate::responses::{
    html_response, html_response_with_status, redirect, redirect_with_cookie, ResultResp,
};
use crate::screens::FetchState;
use crate::state::AppState;
use crate::templates::pages::{self, LoginForm};
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use tracing::{info, instrument, warn};
use url::form_urlencoded;

#[instrument(skip_all, fields(method = %req.method(), path = %req.uri().path()))]
pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let query = parse_query(&req);

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => login_form(&req, state),
        ("POST", "/login") => login(req, state),
        ("POST", "/logout") => logout(&req, state),

        ("GET", "/dashboard") => {
            let session = state.sessions.resolve(&req);
            html_response(pages::dashboard_page(session.user()))
        }
        ("GET", "/dashboard/content") => dashboard_content(&req, state),
        ("GET", "/dashboard/order") => order_detail(&req, state, &query),

        ("GET", "/myorders") => {
            let session = state.sessions.resolve(&req);
            let term = session.order_list().view().search_term().to_string();
            html_response(pages::orders_page(session.user(), &term))
        }
        ("GET", "/myorders/table") => orders_table(&req, state, &query),

        ("GET", "/totalrevenue") => {
            let session = state.sessions.resolve(&req);
            html_response(pages::revenue_page(session.user()))
        }
        ("GET", "/totalrevenue/content") => revenue_content(&req, state),

        _ => Err(ServerError::NotFound),
    }
}

fn login_form(req: &Request, state: &AppState) -> ResultResp {
    if state.sessions.from_request(req).is_some() {
        return redirect("/dashboard");
    }
    html_response(pages::login_page(&LoginForm::default()))
}

fn login(req: Request, state: &AppState) -> ResultResp {
    let form = read_form(req)?;
    let phone = form.get("phone").cloned().unwrap_or_default();
    let password = form.get("password").cloned().unwrap_or_default();

    let mut view = LoginForm {
        phone: phone.clone(),
        ..LoginForm::default()
    };
    if phone.trim().is_empty() {
        view.phone_error = Some("Phone Number is required".into());
    }
    if password.trim().is_empty() {
        view.password_error = Some("Password is required".into());
    }
    if view.has_errors() {
        return html_response(pages::login_page(&view));
    }

    match state.api.login(&LoginRequest { phone, password }) {
        Ok(resp) => {
            let raw_token = state.sessions.create(resp.token, resp.user);
            info!("admin signed in");
            redirect_with_cookie(
                "/dashboard",
                &session_set_cookie(&raw_token, state.sessions.ttl()),
            )
        }
        Err(e) => {
            warn!(error = %e, "login rejected");
            view.api_error = Some(e.api_message().unwrap_or("Invalid credentials").to_string());
            html_response_with_status(401, pages::login_page(&view))
        }
    }
}

fn logout(req: &Request, state: &AppState) -> ResultResp {
    if let Some(token) = session_cookie(req) {
        state.sessions.revoke(&token);
    }
    redirect_with_cookie("/", &session_clear_cookie())
}

fn dashboard_content(req: &Request, state: &AppState) -> ResultResp {
    let session = state.sessions.resolve(req);
    let latest = session.fetch_orders(state.api.as_ref(), dashboard_query());

    let view = FetchState::from_result(latest)
        .map(|page| DashboardSummary::new(page.summary.as_ref(), &page.data));
    html_response(pages::dashboard_content(&view))
}

fn order_detail(req: &Request, state: &AppState, query: &HashMap<String, String>) -> ResultResp {
    let id = query
        .get("id")
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ServerError::BadRequest("missing order id".into()))?;

    // Rendered into `#modal` by htmx, so failures stay 200 fragments.
    let session = state.sessions.resolve(req);
    let modal = match session.fetch_orders(state.api.as_ref(), dashboard_query()) {
        Ok(latest) => match latest.find(id) {
            Some(order) => pages::order_modal(order),
            None => pages::order_modal_error("Order not found"),
        },
        Err(e) => {
            warn!(error = %e, "order detail fetch failed");
            pages::order_modal_error("Failed to load orders")
        }
    };

    html_response(modal)
}

fn orders_table(req: &Request, state: &AppState, query: &HashMap<String, String>) -> ResultResp {
    let session = state.sessions.resolve(req);
    let fetched = session.fetch_orders(
        state.api.as_ref(),
        PageQuery::new(1, state.config.report_fetch_limit),
    );

    let mut screen = session.order_list();
    screen.apply(fetched);
    if let Some(term) = query.get("q") {
        screen.search(term);
    }
    if let Some(page) = query.get("page") {
        screen.go_to(page.trim().parse().unwrap_or(1));
    }

    html_response(pages::orders_table_fragment(&screen.snapshot()))
}

fn revenue_content(req: &Request, state: &AppState) -> ResultResp {
    let session = state.sessions.resolve(req);
    let fetched = FetchState::from_result(session.fetch_orders(
        state.api.as_ref(),
        PageQuery::new(1, state.config.report_fetch_limit),
    ));

    let report = fetched.as_ref().map(|page| RevenueReport::new(&page.data));
    html_response(pages::revenue_content(&report))
}

/// The dashboard shows the first page of ten, newest first.
fn dashboard_query() -> PageQuery {
    PageQuery::new(1, PAGE_SIZE as u32)
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn read_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = req.into_body();
    let mut buf = Vec::new();
    body.reader()
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    Ok(form_urlencoded::parse(&buf).into_owned().collect())
}
