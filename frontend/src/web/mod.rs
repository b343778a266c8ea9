//! Thin wrappers over browser APIs
//!
//! Everything that touches `window` lives here so the rest of the crate can be
//! exercised on native targets.

pub mod http;
pub mod route;
pub mod router;
pub mod storage;

pub use http::{FetchClient, HttpClient, HttpRequest, HttpResponse};
pub use storage::{Entries, LocalStorage};
