// errors.rs
use thiserror::Error;

/// Errors a route handler can end with. The serve loop turns them into HTML
/// error pages. Order API failures never get here: every screen renders its
/// own "failed to load" fragment instead.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::InternalError => 500,
        }
    }
}
