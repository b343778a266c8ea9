mod state;

use crate::api::use_api;
use crate::components::notice::use_notifier;
use crate::error::{ClientError, ClientResult};
use leptos::prelude::*;
use leptos::task::spawn_local;
use state::{CartController, CartLoad, ITEM_PLACEHOLDER_IMAGE, demo_products};
use vibecommerce_shared::{CartItem, format_price};

#[component]
pub fn CartPage() -> impl IntoView {
    let cart = StoredValue::new(CartController::new(use_api()));
    let notifier = use_notifier();
    let items = RwSignal::new(Vec::<CartItem>::new());
    let loading = RwSignal::new(true);
    // Set when the last load was signed out or failed; never shown as an empty cart.
    let load_notice = RwSignal::new(None::<&'static str>);

    let show = move |load: CartLoad| {
        load_notice.set(load.notice());
        items.update(|list| load.apply(list));
    };

    // Initial fetch; loading is cleared whatever the outcome.
    spawn_local(async move {
        let load = cart.get_value().load().await;
        if let Some(notice) = load.notice() {
            notifier.error(notice);
        }
        show(load);
        loading.set(false);
    });

    let apply = move |result: ClientResult<CartLoad>, failure: &'static str| match result {
        Ok(load) => show(load),
        Err(_) => notifier.error(failure),
    };

    let add = move |product_id: String| {
        let cart = cart.get_value();
        spawn_local(async move {
            apply(cart.add(&product_id).await, "Could not add the item to your cart.");
        });
    };

    let change_quantity = move |product_id: String, qty: i64| {
        let cart = cart.get_value();
        spawn_local(async move {
            match cart.update_quantity(&product_id, qty).await {
                // Below 1 nothing was sent; the row just stays as it is.
                Err(ClientError::InvalidQuantity(_)) => {}
                result => apply(result, "Could not update the quantity."),
            }
        });
    };

    let remove = move |product_id: String| {
        let cart = cart.get_value();
        spawn_local(async move {
            apply(cart.remove(&product_id).await, "Could not remove the item.");
        });
    };

    let place_order = move |_: leptos::ev::MouseEvent| {
        let cart = cart.get_value();
        spawn_local(async move {
            match cart.place_order().await {
                Ok(load) => {
                    show(load);
                    notifier.success("Order placed successfully!");
                }
                Err(_) => notifier.error("Failed to place order. Try again."),
            }
        });
    };

    let products_section = move || {
        demo_products()
            .into_iter()
            .map(|product| {
                let id = product.id.clone();
                view! {
                    <div class="border rounded-lg p-4 flex items-center justify-between shadow-md bg-white">
                        <div class="flex items-center gap-4">
                            <img src=product.image.clone() alt=product.name.clone() class="w-16 h-16 rounded-md" />
                            <div>
                                <h3 class="font-medium text-gray-800">{product.name.clone()}</h3>
                                <p class="text-gray-500">{format_price(product.price)}</p>
                            </div>
                        </div>
                        <button
                            on:click=move |_| add(id.clone())
                            class="bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-lg"
                        >
                            "Add to Cart"
                        </button>
                    </div>
                }
            })
            .collect_view()
    };

    let cart_row = move |item: CartItem| {
        let product_id = item.product_id().to_string();
        let details = item.product_details().cloned();
        let image = details
            .as_ref()
            .map(|p| p.image.clone())
            .filter(|src| !src.is_empty())
            .unwrap_or_else(|| ITEM_PLACEHOLDER_IMAGE.to_string());
        let name = details.as_ref().map(|p| p.name.clone()).unwrap_or_default();
        let price = details.as_ref().map(|p| format_price(p.price)).unwrap_or_default();
        let qty = i64::from(item.quantity);

        let (dec_id, inc_id, remove_id) = (product_id.clone(), product_id.clone(), product_id);

        view! {
            <div class="flex justify-between items-center bg-white p-4 mb-3 rounded-lg shadow-sm">
                <div class="flex items-center gap-4">
                    <img src=image alt=name.clone() class="w-16 h-16 rounded-md" />
                    <div>
                        <h3 class="font-semibold text-gray-800">{name}</h3>
                        <p class="text-gray-500 text-sm">{price}</p>
                    </div>
                </div>

                <div class="flex items-center gap-3">
                    <button
                        on:click=move |_| change_quantity(dec_id.clone(), qty - 1)
                        class="px-3 py-1 bg-gray-200 rounded"
                    >
                        "-"
                    </button>
                    <span>{item.quantity}</span>
                    <button
                        on:click=move |_| change_quantity(inc_id.clone(), qty + 1)
                        class="px-3 py-1 bg-gray-200 rounded"
                    >
                        "+"
                    </button>
                    <button
                        on:click=move |_| remove(remove_id.clone())
                        class="bg-red-500 hover:bg-red-600 text-white px-3 py-1 rounded-md"
                    >
                        "Remove"
                    </button>
                </div>
            </div>
        }
    };

    move || {
        if loading.get() {
            return view! { <div class="text-center mt-10 text-xl">"Loading..."</div> }.into_any();
        }

        view! {
            <div class="p-6 bg-gray-50 min-h-screen">
                <h1 class="text-3xl font-bold text-center text-gray-700 mb-6">"Shopping Cart"</h1>

                <div class="max-w-3xl mx-auto mb-10">
                    <h2 class="text-xl font-semibold mb-3">"Products"</h2>
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">{products_section}</div>
                </div>

                <div class="max-w-3xl mx-auto">
                    <h2 class="text-xl font-semibold mb-3">"Your Cart"</h2>
                    {move || load_notice.get().map(|notice| view! {
                        <p role="alert" class="text-red-600 text-center mb-4">{notice}</p>
                    })}
                    <Show
                        when=move || items.with(|list| !list.is_empty())
                        fallback=move || {
                            load_notice
                                .with(Option::is_none)
                                .then(|| view! { <p class="text-gray-500 text-center">"Your cart is empty."</p> })
                        }
                    >
                        <For each=move || items.get() key=|item| (item.id.clone(), item.quantity) children=cart_row />
                        <div class="text-center mt-6">
                            <button
                                on:click=place_order
                                class="bg-green-600 hover:bg-green-700 text-white px-6 py-3 rounded-lg font-semibold"
                            >
                                "Place Order"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        }
        .into_any()
    }
}
