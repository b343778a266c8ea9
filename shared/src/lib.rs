use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod protocol;

// =========================================================
// Constants
// =========================================================

/// Local storage key holding the bearer token
pub const STORAGE_TOKEN_KEY: &str = "token";
/// Local storage key holding the backend user id
pub const STORAGE_USER_ID_KEY: &str = "userId";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";
/// Every "add to cart" action adds exactly one unit
pub const ADD_TO_CART_QUANTITY: u32 = 1;

/// Builds the value of the `Authorization` header for a token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Formats an amount in rupees, dropping the fraction for whole values.
pub fn format_price(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("₹{:.0}", amount)
    } else {
        format!("₹{:.2}", amount)
    }
}

// =========================================================
// Domain Models
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image: String,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
        }
    }
}

/// A cart line's product, either populated by the backend or left as a bare id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductRef {
    Populated(Product),
    Id(String),
}

impl ProductRef {
    pub fn id(&self) -> &str {
        match self {
            ProductRef::Populated(product) => &product.id,
            ProductRef::Id(id) => id,
        }
    }

    pub fn product(&self) -> Option<&Product> {
        match self {
            ProductRef::Populated(product) => Some(product),
            ProductRef::Id(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "productId", default)]
    pub product: Option<ProductRef>,
    #[serde(rename = "qty")]
    pub quantity: u32,
}

impl CartItem {
    /// Id used by the update/remove endpoints; falls back to the line id.
    pub fn product_id(&self) -> &str {
        self.product.as_ref().map(ProductRef::id).unwrap_or(&self.id)
    }

    pub fn product_details(&self) -> Option<&Product> {
        self.product.as_ref().and_then(ProductRef::product)
    }
}

/// Body of `GET /cart/:userId`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    #[serde(rename = "qty")]
    pub quantity: u32,
    #[serde(default)]
    pub subtotal: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "receiptId", default)]
    pub receipt_id: String,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub items: Vec<OrderLine>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Placement date as `dd/mm/yyyy`, if the backend sent one.
    pub fn placed_on(&self) -> Option<String> {
        self.created_at.map(|at| at.format("%d/%m/%Y").to_string())
    }
}

// =========================================================
// Authentication
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginUser {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<LoginUser>,
}

impl LoginResponse {
    pub fn user_id(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|u| u.id.as_deref())
            .filter(|id| !id.is_empty())
    }
}
