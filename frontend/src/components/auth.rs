mod state;

pub use state::AuthMode;

use crate::api::use_api;
use crate::components::notice::use_notifier;
use crate::session::{BrowserSessionStore, use_session};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use state::{AuthFlow, AuthOutcome};
use vibecommerce_shared::Credentials;

const MISSING_USER_ID_NOTICE: &str =
    "Logged in, but the server sent no user id. Cart and orders may be unavailable.";

#[component]
pub fn AuthPage(initial_mode: AuthMode) -> impl IntoView {
    let flow = StoredValue::new(AuthFlow::new(use_api()));
    let session = use_session();
    let router = use_router();
    let notifier = use_notifier();

    let (mode, set_mode) = signal(initial_mode);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials::new(email.get(), password.get());
        if !credentials.is_complete() {
            notifier.error("Please fill in email and password.");
            return;
        }

        set_is_submitting.set(true);
        let current_mode = mode.get();
        let flow = flow.get_value();
        spawn_local(async move {
            match flow.submit(current_mode, &credentials).await {
                Ok(AuthOutcome::SignedIn { user_id_missing }) => {
                    session.refresh(&BrowserSessionStore);
                    if user_id_missing {
                        notifier.error(MISSING_USER_ID_NOTICE);
                    } else {
                        notifier.success("Logged in successfully!");
                    }
                    router.navigate_to(AppRoute::after_login());
                }
                Ok(AuthOutcome::Registered) => {
                    notifier.success("Registered successfully! Please log in.");
                    set_mode.set(AuthMode::Login);
                }
                Err(_) => notifier.error("Invalid credentials or server error."),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="flex justify-center items-center h-[80vh] bg-gray-50">
            <div class="bg-white p-8 shadow-lg rounded-lg w-96">
                <h2 class="text-2xl font-semibold mb-6 text-center text-gray-800">
                    {move || mode.get().title()}
                </h2>

                <form on:submit=on_submit class="space-y-4">
                    <input
                        type="email"
                        placeholder="Email"
                        class="w-full border p-2 rounded outline-none focus:ring-2 focus:ring-blue-500"
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        prop:value=email
                        required
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        class="w-full border p-2 rounded outline-none focus:ring-2 focus:ring-blue-500"
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        prop:value=password
                        required
                    />

                    <button
                        type="submit"
                        class="w-full bg-blue-600 text-white py-2 rounded hover:bg-blue-700 transition"
                        disabled=move || is_submitting.get()
                    >
                        {move || mode.get().title()}
                    </button>
                </form>

                <p
                    class="text-blue-500 text-center mt-4 cursor-pointer hover:underline"
                    on:click=move |_| set_mode.update(|m| *m = m.toggled())
                >
                    {move || mode.get().switch_prompt()}
                </p>
            </div>
        </div>
    }
}
