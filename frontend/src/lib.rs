//! VibeCommerce storefront
//!
//! Context-driven layout:
//! - `session`: token/user id persistence behind the `SessionStore` seam
//! - `api`: the gateway client that attaches the bearer token to every call
//! - `web`: thin wrappers over browser APIs (fetch, local storage, history)
//! - `components`: one view per route plus the navigation bar

// =========================================================
// Cross-target logging macros
// =========================================================

#[cfg(target_arch = "wasm32")]
macro_rules! log_info {
    ($($t:tt)*) => (web_sys::console::log_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! log_info {
    ($($t:tt)*) => (println!($($t)*))
}

#[cfg(target_arch = "wasm32")]
macro_rules! log_warn {
    ($($t:tt)*) => (web_sys::console::warn_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! log_warn {
    ($($t:tt)*) => (eprintln!($($t)*))
}

#[cfg(target_arch = "wasm32")]
macro_rules! log_error {
    ($($t:tt)*) => (web_sys::console::error_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! log_error {
    ($($t:tt)*) => (eprintln!($($t)*))
}

mod api;
mod config;
mod error;
mod session;
pub(crate) mod web;

mod components {
    pub mod auth;
    pub mod cart;
    pub mod catalog;
    pub mod navbar;
    pub mod notice;
    pub mod orders;
}

use crate::api::BrowserApi;
use crate::components::auth::{AuthMode, AuthPage};
use crate::components::cart::CartPage;
use crate::components::catalog::CatalogPage;
use crate::components::navbar::Navbar;
use crate::components::notice::{NoticeToast, Notifier};
use crate::components::orders::OrdersPage;
use crate::session::{BrowserSessionStore, SessionContext, SessionStore};
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

use leptos::prelude::*;

/// Maps the current route to its view.
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Catalog => view! { <CatalogPage /> }.into_any(),
        AppRoute::Cart => view! { <CartPage /> }.into_any(),
        AppRoute::Orders => view! { <OrdersPage /> }.into_any(),
        AppRoute::Login => view! { <AuthPage initial_mode=AuthMode::Login /> }.into_any(),
        AppRoute::Register => view! { <AuthPage initial_mode=AuthMode::Register /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center h-[80vh]">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-gray-400">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. Gateway client, shared by every view
    provide_context(BrowserApi::browser());

    // 2. Session mirror, seeded from local storage
    provide_context(SessionContext::new(BrowserSessionStore.load()));

    // 3. Toast notifications
    provide_context(Notifier::new());

    view! {
        <Router>
            <Navbar />
            <NoticeToast />
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
