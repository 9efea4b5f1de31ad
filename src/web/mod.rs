//! HTTP boundary: axum router, pages and form handling.

pub mod form;
pub mod pages;
mod routes;

pub use form::PredictForm;
pub use routes::{AppState, router, serve};
