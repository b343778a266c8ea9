mod state;

use crate::api::use_api;
use leptos::prelude::*;
use leptos::task::spawn_local;
use state::{LOAD_FAILED_NOTICE, MISSING_USER_NOTICE, OrderHistory, Orders};
use vibecommerce_shared::format_price;

#[component]
pub fn OrdersPage() -> impl IntoView {
    let orders = Orders::new(use_api());
    let history = RwSignal::new(None::<OrderHistory>);

    spawn_local(async move {
        let loaded = orders.load().await;
        history.set(Some(loaded));
    });

    move || match history.get() {
        None => view! { <p class="text-center mt-10">"Loading orders..."</p> }.into_any(),
        Some(OrderHistory::MissingUser) => view! {
            <p class="text-center mt-10 text-gray-500">{MISSING_USER_NOTICE}</p>
        }
        .into_any(),
        Some(OrderHistory::Failed) => view! {
            <p role="alert" class="text-center mt-10 text-red-600">{LOAD_FAILED_NOTICE}</p>
        }
        .into_any(),
        Some(loaded) => {
            let orders = loaded.orders().to_vec();
            view! {
                <div class="max-w-3xl mx-auto mt-8 p-6 bg-white shadow rounded-lg">
                    <h2 class="text-2xl font-semibold mb-4">"My Orders"</h2>
                    {if orders.is_empty() {
                        view! { <p class="text-gray-500 text-center">"No orders yet."</p> }.into_any()
                    } else {
                        orders
                            .into_iter()
                            .map(|order| {
                                let placed_on = order.placed_on();
                                view! {
                                    <div class="border rounded-lg p-4 mb-4">
                                        <h4 class="font-semibold mb-2">"Receipt: " {order.receipt_id}</h4>
                                        <p class="text-gray-600 mb-2">"Total: " {format_price(order.total)}</p>
                                        <ul class="text-gray-700 mb-2">
                                            {order
                                                .items
                                                .into_iter()
                                                .map(|line| view! {
                                                    <li>
                                                        {line.name} " × " {line.quantity} " = "
                                                        {format_price(line.subtotal)}
                                                    </li>
                                                })
                                                .collect_view()}
                                        </ul>
                                        {placed_on.map(|date| view! {
                                            <p class="text-sm text-gray-500">"Placed on " {date}</p>
                                        })}
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            }
            .into_any()
        }
    }
}
