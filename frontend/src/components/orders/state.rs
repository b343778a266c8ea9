use crate::api::StorefrontApi;
use crate::session::SessionStore;
use crate::web::HttpClient;
use vibecommerce_shared::Order;

pub const MISSING_USER_NOTICE: &str = "Please login to see your orders.";
pub const LOAD_FAILED_NOTICE: &str = "Could not load your orders. Try again later.";

/// Result of fetching the order history.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderHistory {
    /// No stored user id; nothing was requested.
    MissingUser,
    Loaded(Vec<Order>),
    /// The fetch failed; distinct from an empty history.
    Failed,
}

impl OrderHistory {
    /// Orders to list; empty unless the fetch succeeded.
    pub fn orders(&self) -> &[Order] {
        match self {
            OrderHistory::Loaded(orders) => orders,
            OrderHistory::MissingUser | OrderHistory::Failed => &[],
        }
    }

    /// Message to show instead of the list, if any.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            OrderHistory::MissingUser => Some(MISSING_USER_NOTICE),
            OrderHistory::Failed => Some(LOAD_FAILED_NOTICE),
            OrderHistory::Loaded(_) => None,
        }
    }
}

/// Loads the order history of the stored user.
#[derive(Debug, Clone)]
pub struct Orders<C, S> {
    api: StorefrontApi<C, S>,
}

impl<C: HttpClient, S: SessionStore> Orders<C, S> {
    pub fn new(api: StorefrontApi<C, S>) -> Self {
        Self { api }
    }

    /// Fetches `GET /orders/:userId`; without a stored user id nothing is sent.
    pub async fn load(&self) -> OrderHistory {
        let user_id = self
            .api
            .session()
            .load()
            .and_then(|session| session.user_id);
        let Some(user_id) = user_id else {
            log_error!("[Orders] user id not found in local storage");
            return OrderHistory::MissingUser;
        };

        match self.api.list_orders(&user_id).await {
            Ok(orders) => OrderHistory::Loaded(orders),
            Err(e) => {
                log_error!("[Orders] failed to load orders: {}", e);
                OrderHistory::Failed
            }
        }
    }
}
