//! API gateway
//!
//! One client for every backend call. The stored token is read at request
//! time and sent as `Authorization: Bearer <token>`; nothing is retried and
//! non-2xx responses come back as `ClientError::Status`.

use crate::config::ApiConfig;
use crate::error::{ClientError, ClientResult};
use crate::session::{BrowserSessionStore, SessionStore};
use crate::web::{FetchClient, HttpClient, HttpRequest, HttpResponse};
use leptos::prelude::use_context;
use serde::de::DeserializeOwned;
use vibecommerce_shared::protocol::{
    AddToCartRequest, ApiRequest, GetCartRequest, ListOrdersRequest, ListProductsRequest,
    LoginRequest, PlaceOrderRequest, RegisterRequest, RemoveCartItemRequest,
    UpdateCartItemRequest,
};
use vibecommerce_shared::{
    CONTENT_TYPE_JSON, CartItem, Credentials, HEADER_AUTHORIZATION, HEADER_CONTENT_TYPE,
    LoginResponse, Order, Product, bearer,
};

/// Gateway to the storefront backend, generic over transport and session store.
#[derive(Debug, Clone)]
pub struct StorefrontApi<C, S> {
    client: C,
    session: S,
    config: ApiConfig,
}

/// The gateway as wired in the browser build.
pub type BrowserApi = StorefrontApi<FetchClient, BrowserSessionStore>;

impl BrowserApi {
    pub fn browser() -> Self {
        Self::new(FetchClient, BrowserSessionStore, ApiConfig::from_build_env())
    }
}

pub fn use_api() -> BrowserApi {
    use_context::<BrowserApi>().expect("BrowserApi should be provided")
}

impl<C: HttpClient, S: SessionStore> StorefrontApi<C, S> {
    pub fn new(client: C, session: S, config: ApiConfig) -> Self {
        Self {
            client,
            session,
            config,
        }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// Request-time hook: attaches the bearer token when one is stored.
    fn authorize(&self, req: HttpRequest) -> HttpRequest {
        match self.session.load() {
            Some(session) => req.with_header(HEADER_AUTHORIZATION, &bearer(&session.token)),
            None => req,
        }
    }

    /// Sends a request and checks the status, leaving the body undecoded.
    pub async fn dispatch<R: ApiRequest>(&self, request: &R) -> ClientResult<HttpResponse> {
        let url = self.config.url(R::SCOPE, &request.path());
        let mut req = HttpRequest::new(&url, R::METHOD);

        if R::METHOD.has_body() {
            let body =
                serde_json::to_string(request).map_err(|e| ClientError::Encode(e.to_string()))?;
            req = req
                .with_header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON)
                .with_body(body);
        }

        let res = self.client.send(self.authorize(req)).await?;
        if !res.ok() {
            return Err(ClientError::Status {
                status: res.status,
                body: res.body,
            });
        }
        Ok(res)
    }

    /// Sends a request and decodes the response body.
    pub async fn send<R: ApiRequest>(&self, request: &R) -> ClientResult<R::Response> {
        let res = self.dispatch(request).await?;
        decode(&res.body)
    }

    // =========================================================
    // Endpoints
    // =========================================================

    /// `POST /users/login` at the auth base.
    pub async fn login(&self, credentials: &Credentials) -> ClientResult<LoginResponse> {
        self.send(&LoginRequest(credentials.clone())).await
    }

    /// `POST /users/register`; the response body is ignored.
    pub async fn register(&self, credentials: &Credentials) -> ClientResult<()> {
        self.dispatch(&RegisterRequest(credentials.clone())).await?;
        Ok(())
    }

    pub async fn list_products(&self) -> ClientResult<Vec<Product>> {
        self.send(&ListProductsRequest).await
    }

    /// `GET /cart/:userId`, unwrapped to its items.
    pub async fn get_cart(&self, user_id: &str) -> ClientResult<Vec<CartItem>> {
        let cart = self
            .send(&GetCartRequest {
                user_id: user_id.to_string(),
            })
            .await?;
        Ok(cart.items)
    }

    /// `POST /cart` with a quantity of one.
    pub async fn add_to_cart(&self, product_id: &str) -> ClientResult<()> {
        self.dispatch(&AddToCartRequest::single(product_id)).await?;
        Ok(())
    }

    pub async fn update_cart_item(&self, product_id: &str, qty: u32) -> ClientResult<()> {
        self.dispatch(&UpdateCartItemRequest {
            product_id: product_id.to_string(),
            qty,
        })
        .await?;
        Ok(())
    }

    pub async fn remove_cart_item(&self, product_id: &str) -> ClientResult<()> {
        self.dispatch(&RemoveCartItemRequest {
            product_id: product_id.to_string(),
        })
        .await?;
        Ok(())
    }

    /// Returns the raw receipt body; callers only log it.
    pub async fn place_order(&self) -> ClientResult<String> {
        let res = self.dispatch(&PlaceOrderRequest::default()).await?;
        Ok(res.body)
    }

    pub async fn list_orders(&self, user_id: &str) -> ClientResult<Vec<Order>> {
        self.send(&ListOrdersRequest {
            user_id: user_id.to_string(),
        })
        .await
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> ClientResult<T> {
    serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))
}

// =========================================================
// Test fixtures
// =========================================================
