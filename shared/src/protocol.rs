use crate::{ADD_TO_CART_QUANTITY, Cart, Credentials, LoginResponse, Order, Product};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether requests with this method carry a JSON body.
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }
}

/// Which base address an endpoint lives under.
///
/// The user endpoints sit at the backend origin, everything else under `/api`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiScope {
    Auth,
    Api,
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// Path parameters are carried as `#[serde(skip)]` fields so that serializing the
/// request yields exactly the JSON body the endpoint expects.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// The base address the path is resolved against.
    const SCOPE: ApiScope = ApiScope::Api;

    /// The URL path, with any path parameters filled in.
    fn path(&self) -> String;
}

// =========================================================
// Authentication
// =========================================================

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct LoginRequest(pub Credentials);

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    const SCOPE: ApiScope = ApiScope::Auth;

    fn path(&self) -> String {
        "/users/login".to_string()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct RegisterRequest(pub Credentials);

impl ApiRequest for RegisterRequest {
    // Only success or failure matters.
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Post;
    const SCOPE: ApiScope = ApiScope::Auth;

    fn path(&self) -> String {
        "/users/register".to_string()
    }
}

// =========================================================
// Catalog
// =========================================================

#[derive(Debug, Clone, Serialize)]
pub struct ListProductsRequest;

impl ApiRequest for ListProductsRequest {
    type Response = Vec<Product>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/products".to_string()
    }
}

// =========================================================
// Cart
// =========================================================

#[derive(Debug, Clone, Serialize)]
pub struct GetCartRequest {
    #[serde(skip)]
    pub user_id: String,
}

impl ApiRequest for GetCartRequest {
    type Response = Cart;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/cart/{}", self.user_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddToCartRequest {
    #[serde(rename = "productId")]
    pub product_id: String,
    pub qty: u32,
}

impl AddToCartRequest {
    /// Adds a single unit of the product.
    pub fn single(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            qty: ADD_TO_CART_QUANTITY,
        }
    }
}

impl ApiRequest for AddToCartRequest {
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/cart".to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateCartItemRequest {
    #[serde(rename = "productId")]
    pub product_id: String,
    pub qty: u32,
}

impl ApiRequest for UpdateCartItemRequest {
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/cart/{}", self.product_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RemoveCartItemRequest {
    #[serde(skip)]
    pub product_id: String,
}

impl ApiRequest for RemoveCartItemRequest {
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/cart/{}", self.product_id)
    }
}

// =========================================================
// Orders
// =========================================================

/// Checks out the caller's cart; the backend identifies the user from the token.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlaceOrderRequest {}

impl ApiRequest for PlaceOrderRequest {
    // The receipt is not displayed, so its shape is never relied upon.
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/orders".to_string()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListOrdersRequest {
    #[serde(skip)]
    pub user_id: String,
}

impl ApiRequest for ListOrdersRequest {
    type Response = Vec<Order>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/orders/{}", self.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_paths_and_bodies() {
        let add = AddToCartRequest::single("p1");
        assert_eq!(add.path(), "/cart");
        assert_eq!(
            serde_json::to_string(&add).unwrap(),
            r#"{"productId":"p1","qty":1}"#
        );

        let update = UpdateCartItemRequest {
            product_id: "p1".to_string(),
            qty: 3,
        };
        assert_eq!(update.path(), "/cart/p1");
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"productId":"p1","qty":3}"#
        );

        let remove = RemoveCartItemRequest {
            product_id: "p1".to_string(),
        };
        assert_eq!(remove.path(), "/cart/p1");
        assert!(!RemoveCartItemRequest::METHOD.has_body());
    }

    #[test]
    fn test_path_parameters_stay_out_of_body() {
        let cart = GetCartRequest {
            user_id: "U1".to_string(),
        };
        assert_eq!(cart.path(), "/cart/U1");
        assert_eq!(serde_json::to_string(&cart).unwrap(), "{}");

        let orders = ListOrdersRequest {
            user_id: "U1".to_string(),
        };
        assert_eq!(orders.path(), "/orders/U1");
    }

    #[test]
    fn test_auth_requests_use_auth_scope() {
        assert_eq!(LoginRequest::SCOPE, ApiScope::Auth);
        assert_eq!(RegisterRequest::SCOPE, ApiScope::Auth);
        assert_eq!(ListProductsRequest::SCOPE, ApiScope::Api);

        let login = LoginRequest(Credentials::new("a@b.com", "pw"));
        assert_eq!(
            serde_json::to_string(&login).unwrap(),
            r#"{"email":"a@b.com","password":"pw"}"#
        );
    }

    #[test]
    fn test_place_order_sends_empty_object() {
        assert_eq!(serde_json::to_string(&PlaceOrderRequest::default()).unwrap(), "{}");
        assert!(PlaceOrderRequest::METHOD.has_body());
    }
}
