//! Backend address configuration
//!
//! Both base URLs are fixed at build time. `STOREFRONT_API_URL` and
//! `STOREFRONT_AUTH_URL` override the defaults when set during compilation.

use vibecommerce_shared::protocol::ApiScope;

const DEFAULT_API_URL: &str = "https://ecommarce-backend-mu.vercel.app/api";
const DEFAULT_AUTH_URL: &str = "https://ecommarce-backend-mu.vercel.app";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    api_base: String,
    auth_base: String,
}

impl ApiConfig {
    pub fn new(api_base: impl Into<String>, auth_base: impl Into<String>) -> Self {
        Self {
            api_base: trim_base(api_base.into()),
            auth_base: trim_base(auth_base.into()),
        }
    }

    /// Reads the compile-time overrides, falling back to the hosted backend.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("STOREFRONT_API_URL").unwrap_or(DEFAULT_API_URL),
            option_env!("STOREFRONT_AUTH_URL").unwrap_or(DEFAULT_AUTH_URL),
        )
    }

    pub fn base(&self, scope: ApiScope) -> &str {
        match scope {
            ApiScope::Api => &self.api_base,
            ApiScope::Auth => &self.auth_base,
        }
    }

    /// Joins a path onto the base for `scope`.
    pub fn url(&self, scope: ApiScope, path: &str) -> String {
        let base = self.base(scope);
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }
}

fn trim_base(base: String) -> String {
    base.trim_end_matches('/').to_string()
}
