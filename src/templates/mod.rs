pub mod components;
pub mod layouts;
pub mod pages;

pub use components::html_error_response;
