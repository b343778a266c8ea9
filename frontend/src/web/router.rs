//! Router service
//!
//! Wraps the History API: every `window.history` call lives in this module.
//! Views read the current route from a signal and navigate through
//! `RouterService::navigate_to`.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
}

impl RouterService {
    fn new() -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// Pushes a history entry and swaps the mounted view.
    pub fn navigate_to(&self, route: AppRoute) {
        log_info!("[Router] navigating to {}", route);
        push_history_state(route.to_path());
        self.set_route.set(route);
    }

    /// Keeps the route signal in sync with the back/forward buttons.
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;

        let closure = Closure::<dyn Fn()>::new(move || {
            set_route.set(AppRoute::from_path(&current_path()));
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // The listener lives as long as the page.
        closure.forget();
    }
}

fn provide_router() -> RouterService {
    let router = RouterService::new();
    router.init_popstate_listener();
    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI components
// ============================================================================

/// Provides the router context; wrap the whole app in it.
#[component]
pub fn Router(children: Children) -> impl IntoView {
    provide_router();

    children()
}

/// Renders the view for the current route.
#[component]
pub fn RouterOutlet(
    /// Maps a route to its view
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// In-app link that navigates without reloading the page.
#[component]
pub fn Link(
    to: AppRoute,
    #[prop(into, optional)] class: String,
    /// Runs after navigation, e.g. to close the mobile menu
    #[prop(optional)]
    on_navigate: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate_to(to);
        if let Some(callback) = on_navigate {
            callback.run(());
        }
    };

    view! {
        <a href=to.to_path() class=class on:click=on_click>
            {children()}
        </a>
    }
}
