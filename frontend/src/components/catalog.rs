mod state;

use crate::api::use_api;
use crate::components::notice::use_notifier;
use leptos::prelude::*;
use leptos::task::spawn_local;
use state::Catalog;
use vibecommerce_shared::{Product, format_price};

#[component]
pub fn CatalogPage() -> impl IntoView {
    let catalog = StoredValue::new(Catalog::new(use_api()));
    let notifier = use_notifier();
    let products = RwSignal::new(Vec::<Product>::new());

    // Fetched once per mount; no refresh.
    spawn_local(async move {
        let loaded = catalog.get_value().load().await;
        products.set(loaded);
    });

    let add_to_cart = move |product_id: String| {
        let catalog = catalog.get_value();
        spawn_local(async move {
            match catalog.add_to_cart(&product_id).await {
                Ok(()) => notifier.success("Added to cart"),
                Err(_) => notifier.error("Please login first"),
            }
        });
    };

    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-6 p-6">
            <For
                each=move || products.get()
                key=|p| p.id.clone()
                children=move |product| {
                    let id = product.id.clone();
                    view! {
                        <div class="bg-white rounded-xl shadow-md p-4 hover:shadow-lg transition">
                            <img
                                src=product.image.clone()
                                alt=product.name.clone()
                                class="h-40 w-full object-cover rounded-lg mb-3"
                            />
                            <h3 class="text-lg font-semibold">{product.name.clone()}</h3>
                            <p class="text-gray-700 mb-2">{format_price(product.price)}</p>
                            <button
                                on:click=move |_| add_to_cart(id.clone())
                                class="bg-blue-600 text-white w-full py-2 rounded-lg hover:bg-blue-700"
                            >
                                "Add to Cart"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
