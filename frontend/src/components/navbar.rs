use crate::components::notice::use_notifier;
use crate::session::{BrowserSessionStore, SessionContext, SessionStore, use_session};
use crate::web::route::AppRoute;
use crate::web::router::{Link, RouterService, use_router};
use leptos::prelude::*;

/// Clears the stored session and sends the user to the login view.
pub fn logout(session: SessionContext, store: &impl SessionStore, router: RouterService) {
    store.clear();
    session.refresh(store);
    log_info!("[Session] logged out");
    router.navigate_to(AppRoute::after_logout());
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let notifier = use_notifier();
    let signed_in = session.is_signed_in();

    // Mobile menu state is never persisted.
    let (menu_open, set_menu_open) = signal(false);
    let close_menu = Callback::new(move |_: ()| set_menu_open.set(false));

    let on_logout = move |_: leptos::ev::MouseEvent| {
        logout(session, &BrowserSessionStore, router);
        set_menu_open.set(false);
        notifier.success("Logged out");
    };

    let links = move |class: &'static str| {
        AppRoute::nav_links(signed_in.get())
            .iter()
            .map(|route| {
                view! {
                    <Link to=*route class=class on_navigate=close_menu>
                        {route.label()}
                    </Link>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="bg-gray-900 text-white shadow-lg">
            <div class="max-w-6xl mx-auto px-4">
                <div class="flex justify-between items-center h-16">
                    <Link to=AppRoute::Catalog class="text-2xl font-semibold tracking-wide">
                        "VibeCommerce"
                    </Link>

                    <button
                        class="md:hidden focus:outline-none"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <svg xmlns="http://www.w3.org/2000/svg" class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d=move || if menu_open.get() { "M6 18L18 6M6 6l12 12" } else { "M4 6h16M4 12h16M4 18h16" }
                            />
                        </svg>
                    </button>

                    <div class="hidden md:flex items-center space-x-6">
                        {move || links("hover:text-gray-300")}
                        <Show when=move || signed_in.get()>
                            <button on:click=on_logout class="bg-red-500 px-3 py-1 rounded-lg hover:bg-red-600 transition">
                                "Logout"
                            </button>
                        </Show>
                    </div>
                </div>
            </div>

            <div class=move || {
                if menu_open.get() {
                    "md:hidden bg-gray-800 transition-all duration-300 overflow-hidden max-h-60 p-4"
                } else {
                    "md:hidden bg-gray-800 transition-all duration-300 overflow-hidden max-h-0"
                }
            }>
                <div class="flex flex-col space-y-3">
                    {move || links("hover:text-gray-300")}
                    <Show when=move || signed_in.get()>
                        <button on:click=on_logout class="bg-red-500 px-3 py-1 rounded-lg hover:bg-red-600 transition">
                            "Logout"
                        </button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
