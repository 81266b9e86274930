use crate::errors::ServerError;
use crate::templates::layouts::auth_layout;
use astra::{Body, Response, ResponseBuilder};
use maud::html;
use tracing::warn;

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();
    let message = match &err {
        ServerError::NotFound => "Not Found".to_string(),
        ServerError::BadRequest(msg) => msg.clone(),
        ServerError::InternalError => "Internal Server Error".to_string(),
    };

    if status >= 500 {
        warn!(status, error = %err, "request failed");
    }

    render_error(status, &message)
}

/// Build a basic HTML error page
fn render_error(status: u16, message: &str) -> Response {
    let page = auth_layout(
        &format!("Error {status}"),
        html! {
            h2 { "Error " (status) }
            p class="error" { (message) }
            p { a href="/dashboard" { "← Back to dashboard" } }
        },
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
