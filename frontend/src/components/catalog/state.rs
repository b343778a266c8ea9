use crate::api::StorefrontApi;
use crate::error::ClientResult;
use crate::session::SessionStore;
use crate::web::HttpClient;
use vibecommerce_shared::Product;

/// Product listing and add-to-cart for the catalog view.
#[derive(Debug, Clone)]
pub struct Catalog<C, S> {
    api: StorefrontApi<C, S>,
}

impl<C: HttpClient, S: SessionStore> Catalog<C, S> {
    pub fn new(api: StorefrontApi<C, S>) -> Self {
        Self { api }
    }

    /// Fetches the product list once; a failure is logged and shows as an empty catalog.
    pub async fn load(&self) -> Vec<Product> {
        match self.api.list_products().await {
            Ok(products) => products,
            Err(e) => {
                log_error!("[Catalog] failed to load products: {}", e);
                Vec::new()
            }
        }
    }

    /// Adds one unit. Any failure is read as "not signed in" by the page.
    pub async fn add_to_cart(&self, product_id: &str) -> ClientResult<()> {
        self.api.add_to_cart(product_id).await.inspect_err(|e| {
            log_error!("[Catalog] add to cart failed for {}: {}", product_id, e);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fixtures::*;
    use crate::session::MemorySessionStore;
    use crate::web::http::MockHttpClient;
    use vibecommerce_shared::HEADER_AUTHORIZATION;
    use vibecommerce_shared::protocol::HttpMethod;

    #[tokio::test]
    async fn test_load_products() {
        let client = MockHttpClient::new();
        client.mock_response(
            HttpMethod::Get,
            &api_url("/products"),
            200,
            r#"[{"_id": "p1", "name": "Lamp", "price": 450, "image": "lamp.png"}]"#,
        );
        let catalog = Catalog::new(test_api(&client, &MemorySessionStore::default()));

        let products = catalog.load().await;

        assert_eq!(products, vec![Product::new("p1", "Lamp", 450.0, "lamp.png")]);
    }

    #[tokio::test]
    async fn test_failed_load_is_empty() {
        let client = MockHttpClient::new();
        client.mock_response(HttpMethod::Get, &api_url("/products"), 500, "boom");
        let catalog = Catalog::new(test_api(&client, &MemorySessionStore::default()));

        assert!(catalog.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_add_to_cart_posts_single_unit_with_token() {
        let client = MockHttpClient::new();
        client.mock_response(HttpMethod::Post, &api_url("/cart"), 200, "{}");
        let session = MemorySessionStore::signed_in("T", Some("U1"));
        let catalog = Catalog::new(test_api(&client, &session));

        catalog.add_to_cart("p1").await.unwrap();

        let req = &client.requests()[0];
        assert_eq!(req.body.as_deref(), Some(r#"{"productId":"p1","qty":1}"#));
        assert_eq!(req.header(HEADER_AUTHORIZATION), Some("Bearer T"));
    }

    #[tokio::test]
    async fn test_add_to_cart_signed_out_fails() {
        let client = MockHttpClient::new();
        client.mock_response(HttpMethod::Post, &api_url("/cart"), 401, "No token");
        let catalog = Catalog::new(test_api(&client, &MemorySessionStore::default()));

        assert!(catalog.add_to_cart("p1").await.is_err());
        assert_eq!(client.requests()[0].header(HEADER_AUTHORIZATION), None);
    }
}
