//! Custom Axum extractors.

pub mod json;
pub mod params;
pub mod principal;

pub use json::ValidatedJson;
pub use params::{ApiPath, ApiQuery};
pub use principal::CurrentPrincipal;
