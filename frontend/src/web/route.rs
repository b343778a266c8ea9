//! Route definitions
//!
//! Pure data, no DOM access: maps URL paths to views and decides which links
//! the navigation bar offers.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Product listing (default route)
    #[default]
    Catalog,
    Cart,
    Orders,
    Login,
    /// The auth view opened in registration mode
    Register,
    NotFound,
}

const SIGNED_IN_LINKS: &[AppRoute] = &[AppRoute::Catalog, AppRoute::Cart, AppRoute::Orders];
const SIGNED_OUT_LINKS: &[AppRoute] = &[AppRoute::Catalog, AppRoute::Login, AppRoute::Register];

impl AppRoute {
    pub fn from_path(path: &str) -> Self {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        match path {
            "/" => Self::Catalog,
            "/cart" => Self::Cart,
            "/orders" => Self::Orders,
            "/login" => Self::Login,
            "/register" => Self::Register,
            _ => Self::NotFound,
        }
    }

    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Catalog => "/",
            Self::Cart => "/cart",
            Self::Orders => "/orders",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::NotFound => "/404",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Catalog => "Products",
            Self::Cart => "Cart",
            Self::Orders => "Orders",
            Self::Login => "Login",
            Self::Register => "Register",
            Self::NotFound => "Not found",
        }
    }

    /// Navigation links for the current session state. Logout is rendered separately.
    pub fn nav_links(signed_in: bool) -> &'static [AppRoute] {
        if signed_in {
            SIGNED_IN_LINKS
        } else {
            SIGNED_OUT_LINKS
        }
    }

    /// Where a successful login lands.
    pub fn after_login() -> Self {
        Self::Catalog
    }

    /// Where logout lands.
    pub fn after_logout() -> Self {
        Self::Login
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}
