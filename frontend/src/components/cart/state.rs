//! Cart controller
//!
//! The server owns the cart. Every mutation goes through
//! `mutate_then_refresh`, so the displayed items always come from a fresh
//! `GET /cart/:userId` rather than a locally patched copy.

use crate::api::StorefrontApi;
use crate::error::{ClientError, ClientResult};
use crate::session::SessionStore;
use crate::web::HttpClient;
use vibecommerce_shared::{CartItem, Product};

#[cfg(test)]
mod tests;

const DEMO_IMAGE: &str = "https://placehold.co/80x80";
pub const ITEM_PLACEHOLDER_IMAGE: &str = "https://placehold.co/60x60";

pub const SIGNED_OUT_NOTICE: &str = "Please login first to see your cart.";
pub const LOAD_FAILED_NOTICE: &str = "Could not load your cart. Try again later.";

/// Fixed products offered next to the live cart; never fetched.
pub fn demo_products() -> Vec<Product> {
    vec![
        Product::new("1", "Headphones", 999.0, DEMO_IMAGE),
        Product::new("2", "Smartwatch", 1499.0, DEMO_IMAGE),
        Product::new("3", "Keyboard", 699.0, DEMO_IMAGE),
    ]
}

/// Result of fetching the cart.
#[derive(Debug, Clone, PartialEq)]
pub enum CartLoad {
    /// Token or user id missing; nothing was requested.
    SignedOut,
    Loaded(Vec<CartItem>),
    /// The fetch failed; whatever is displayed stays as it was.
    Failed,
}

impl CartLoad {
    /// Applies the result to the displayed items.
    pub fn apply(self, items: &mut Vec<CartItem>) {
        match self {
            CartLoad::Loaded(fresh) => *items = fresh,
            CartLoad::SignedOut => items.clear(),
            CartLoad::Failed => {}
        }
    }

    /// Message to show in place of the item list, if any.
    ///
    /// A signed-out or failed load must never read as an empty cart.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            CartLoad::SignedOut => Some(SIGNED_OUT_NOTICE),
            CartLoad::Failed => Some(LOAD_FAILED_NOTICE),
            CartLoad::Loaded(_) => None,
        }
    }
}

/// Cart operations for the signed-in user.
///
/// Generic over the transport and the session store so tests can drive it
/// with `MockHttpClient` and `MemorySessionStore`.
#[derive(Debug, Clone)]
pub struct CartController<C, S> {
    api: StorefrontApi<C, S>,
}

impl<C: HttpClient, S: SessionStore> CartController<C, S> {
    pub fn new(api: StorefrontApi<C, S>) -> Self {
        Self { api }
    }

    /// Fetches the cart, provided both a token and a user id are stored.
    pub async fn load(&self) -> CartLoad {
        let Some(user_id) = self.api.session().load().and_then(|s| s.user_id) else {
            log_warn!("[Cart] userId or token missing in local storage");
            return CartLoad::SignedOut;
        };

        match self.api.get_cart(&user_id).await {
            Ok(items) => CartLoad::Loaded(items),
            Err(e) => {
                log_error!("[Cart] failed to fetch cart: {}", e);
                CartLoad::Failed
            }
        }
    }

    /// Runs a mutation and, only if it succeeded, re-fetches the cart exactly once.
    pub async fn mutate_then_refresh<F>(&self, action: &str, mutation: F) -> ClientResult<CartLoad>
    where
        F: Future<Output = ClientResult<()>>,
    {
        if let Err(e) = mutation.await {
            log_error!("[Cart] {} failed: {}", action, e);
            return Err(e);
        }
        Ok(self.load().await)
    }

    /// Adds one unit of `product_id`, then re-fetches.
    pub async fn add(&self, product_id: &str) -> ClientResult<CartLoad> {
        self.mutate_then_refresh("add item", self.api.add_to_cart(product_id))
            .await
    }

    /// Quantities below 1 are rejected before anything is sent.
    pub async fn update_quantity(&self, product_id: &str, qty: i64) -> ClientResult<CartLoad> {
        let qty = match u32::try_from(qty) {
            Ok(qty) if qty >= 1 => qty,
            _ => return Err(ClientError::InvalidQuantity(qty)),
        };
        self.mutate_then_refresh("update quantity", self.api.update_cart_item(product_id, qty))
            .await
    }

    /// Deletes the line for `product_id`, then re-fetches.
    pub async fn remove(&self, product_id: &str) -> ClientResult<CartLoad> {
        log_info!("[Cart] removing product {}", product_id);
        self.mutate_then_refresh("remove item", self.api.remove_cart_item(product_id))
            .await
    }

    /// Checks out the cart. Success yields an empty cart for display without a
    /// re-fetch; the receipt is only logged.
    pub async fn place_order(&self) -> ClientResult<CartLoad> {
        match self.api.place_order().await {
            Ok(receipt) => {
                log_info!("[Cart] order placed: {}", receipt);
                Ok(CartLoad::Loaded(Vec::new()))
            }
            Err(e) => {
                log_error!("[Cart] placing order failed: {}", e);
                Err(e)
            }
        }
    }
}
