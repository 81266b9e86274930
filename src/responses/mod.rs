use crate::errors::ServerError;
use astra::Response;

pub mod html;
pub mod redirect;

pub type ResultResp = Result<Response, ServerError>;

pub use html::{html_response, html_response_with_status};
pub use redirect::{redirect, redirect_with_cookie};
