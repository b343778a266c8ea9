use super::*;
use crate::api::fixtures::*;
use crate::session::{MemorySessionStore, Session};
use crate::web::http::MockHttpClient;
use vibecommerce_shared::HEADER_AUTHORIZATION;
use vibecommerce_shared::protocol::HttpMethod;

// =========================================================
// Helpers
// =========================================================

const CART_BODY: &str = r#"{"items": [
    {"_id": "line-1",
     "productId": {"_id": "p1", "name": "Headphones", "price": 999, "image": "h.png"},
     "qty": 2}
]}"#;

fn signed_in() -> MemorySessionStore {
    MemorySessionStore::signed_in("T", Some("U1"))
}

fn cart_url() -> String {
    api_url("/cart/U1")
}

fn client_with_cart() -> MockHttpClient {
    let client = MockHttpClient::new();
    client.mock_response(HttpMethod::Get, &cart_url(), 200, CART_BODY);
    client
}

fn cart_fetches(client: &MockHttpClient) -> usize {
    client.count(HttpMethod::Get, &cart_url())
}

// =========================================================
// load
// =========================================================

#[tokio::test]
async fn test_signed_out_load_issues_no_request() {
    let client = MockHttpClient::new();
    let cart = CartController::new(test_api(&client, &MemorySessionStore::default()));

    let load = cart.load().await;
    assert_eq!(load, CartLoad::SignedOut);
    assert_eq!(load.notice(), Some(SIGNED_OUT_NOTICE));
    assert!(client.requests().is_empty());
}

#[tokio::test]
async fn test_token_without_user_id_issues_no_request() {
    let client = MockHttpClient::new();
    let cart = CartController::new(test_api(&client, &MemorySessionStore::signed_in("T", None)));

    assert_eq!(cart.load().await, CartLoad::SignedOut);
    assert!(client.requests().is_empty());
}

#[tokio::test]
async fn test_login_then_cart_uses_stored_session() {
    let client = client_with_cart();
    client.mock_response(
        HttpMethod::Post,
        &auth_url("/users/login"),
        200,
        r#"{"token": "T", "user": {"_id": "U1"}}"#,
    );
    let session = MemorySessionStore::default();
    let api = test_api(&client, &session);

    let res = api
        .login(&vibecommerce_shared::Credentials::new("a@b.com", "pw"))
        .await
        .unwrap();
    session
        .save(&Session::new(res.token.clone(), res.user_id().map(str::to_string)))
        .unwrap();

    let load = CartController::new(api).load().await;

    let fetch = client.requests().pop().unwrap();
    assert_eq!(fetch.method, HttpMethod::Get);
    assert_eq!(fetch.url, "https://shop.test/api/cart/U1");
    assert_eq!(fetch.header(HEADER_AUTHORIZATION), Some("Bearer T"));
    match load {
        CartLoad::Loaded(items) => {
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].product_id(), "p1");
            assert_eq!(items[0].quantity, 2);
        }
        other => panic!("expected loaded cart, got {:?}", other),
    }
}

#[tokio::test]
async fn test_failed_fetch_reports_failure() {
    let client = MockHttpClient::new();
    client.mock_response(HttpMethod::Get, &cart_url(), 500, "db down");
    let cart = CartController::new(test_api(&client, &signed_in()));

    let load = cart.load().await;
    assert_eq!(load, CartLoad::Failed);
    assert_eq!(load.notice(), Some(LOAD_FAILED_NOTICE));
}

#[tokio::test]
async fn test_empty_cart_has_no_notice() {
    let client = MockHttpClient::new();
    client.mock_response(HttpMethod::Get, &cart_url(), 200, r#"{"items": []}"#);
    let cart = CartController::new(test_api(&client, &signed_in()));

    let load = cart.load().await;
    assert_eq!(load, CartLoad::Loaded(Vec::new()));
    assert_eq!(load.notice(), None);
}

// =========================================================
// mutations
// =========================================================

#[tokio::test]
async fn test_add_refetches_exactly_once() {
    let client = client_with_cart();
    client.mock_response(HttpMethod::Post, &api_url("/cart"), 200, "{}");
    let cart = CartController::new(test_api(&client, &signed_in()));

    let load = cart.add("1").await.unwrap();

    assert!(matches!(load, CartLoad::Loaded(_)));
    assert_eq!(cart_fetches(&client), 1);
    let post = &client.requests()[0];
    assert_eq!(post.method, HttpMethod::Post);
    assert_eq!(post.body.as_deref(), Some(r#"{"productId":"1","qty":1}"#));
}

#[tokio::test]
async fn test_update_quantity_puts_then_refetches() {
    let client = client_with_cart();
    client.mock_response(HttpMethod::Put, &api_url("/cart/p1"), 200, "");
    let cart = CartController::new(test_api(&client, &signed_in()));

    cart.update_quantity("p1", 3).await.unwrap();

    let requests = client.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, HttpMethod::Put);
    assert_eq!(requests[0].body.as_deref(), Some(r#"{"productId":"p1","qty":3}"#));
    assert_eq!(requests[1].url, cart_url());
}

#[tokio::test]
async fn test_quantity_below_one_is_rejected_locally() {
    let client = client_with_cart();
    let cart = CartController::new(test_api(&client, &signed_in()));

    assert_eq!(
        cart.update_quantity("p1", 0).await.unwrap_err(),
        ClientError::InvalidQuantity(0)
    );
    assert_eq!(
        cart.update_quantity("p1", -4).await.unwrap_err(),
        ClientError::InvalidQuantity(-4)
    );
    assert!(client.requests().is_empty());
}

#[tokio::test]
async fn test_remove_deletes_then_refetches_once() {
    let client = client_with_cart();
    client.mock_response(HttpMethod::Delete, &api_url("/cart/p1"), 200, "");
    let cart = CartController::new(test_api(&client, &signed_in()));

    cart.remove("p1").await.unwrap();

    assert_eq!(client.count(HttpMethod::Delete, &api_url("/cart/p1")), 1);
    assert_eq!(cart_fetches(&client), 1);
}

#[tokio::test]
async fn test_failed_mutation_does_not_refetch() {
    let client = client_with_cart();
    client.mock_response(HttpMethod::Delete, &api_url("/cart/p1"), 500, "nope");
    let cart = CartController::new(test_api(&client, &signed_in()));

    let err = cart.remove("p1").await.unwrap_err();

    assert!(matches!(err, ClientError::Status { status: 500, .. }));
    assert_eq!(cart_fetches(&client), 0);
}

#[tokio::test]
async fn test_refresh_failure_after_successful_mutation_keeps_items() {
    let client = MockHttpClient::new();
    client.mock_response(HttpMethod::Post, &api_url("/cart"), 200, "{}");
    client.mock_network_failure(HttpMethod::Get, &cart_url());
    let cart = CartController::new(test_api(&client, &signed_in()));

    let load = cart.add("2").await.unwrap();
    assert_eq!(load, CartLoad::Failed);

    let mut displayed = vec![CartItem {
        id: "line-9".to_string(),
        product: None,
        quantity: 1,
    }];
    load.apply(&mut displayed);
    assert_eq!(displayed.len(), 1);
}

#[tokio::test]
async fn test_logout_makes_cart_signed_out() {
    let client = client_with_cart();
    let session = signed_in();
    let cart = CartController::new(test_api(&client, &session));
    assert!(matches!(cart.load().await, CartLoad::Loaded(_)));

    session.clear();

    assert_eq!(cart.load().await, CartLoad::SignedOut);
    assert_eq!(cart_fetches(&client), 1);
}

// =========================================================
// place_order
// =========================================================

#[tokio::test]
async fn test_place_order_succeeds_regardless_of_body_shape() {
    let client = client_with_cart();
    client.mock_response(HttpMethod::Post, &api_url("/orders"), 201, "<receipt/>");
    let cart = CartController::new(test_api(&client, &signed_in()));

    let load = cart.place_order().await.unwrap();

    let mut displayed = vec![CartItem {
        id: "line-1".to_string(),
        product: None,
        quantity: 1,
    }];
    load.apply(&mut displayed);
    assert!(displayed.is_empty());
    assert_eq!(cart_fetches(&client), 0, "orders and cart are not re-fetched");
}

#[tokio::test]
async fn test_place_order_failure_is_reported() {
    let client = MockHttpClient::new();
    client.mock_response(HttpMethod::Post, &api_url("/orders"), 400, "Cart is empty");
    let cart = CartController::new(test_api(&client, &signed_in()));

    assert!(cart.place_order().await.is_err());
}

// =========================================================
// demo catalog & apply
// =========================================================

#[test]
fn test_demo_products_are_fixed() {
    let products = demo_products();
    let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Headphones", "Smartwatch", "Keyboard"]);
    assert_eq!(products[1].price, 1499.0);
}

#[test]
fn test_signed_out_apply_clears_items() {
    let mut displayed = vec![CartItem {
        id: "line-1".to_string(),
        product: None,
        quantity: 1,
    }];
    CartLoad::SignedOut.apply(&mut displayed);
    assert!(displayed.is_empty());
}
