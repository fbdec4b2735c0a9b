//! Storefront cart collaborator.
//!
//! Cart creation sits behind [`CartService`] so the storefront can be
//! swapped. [`StorefrontClient`] does not call the storefront API; it checks
//! the selection and builds a cart URL under the configured shop.

use rand::Rng;
use tracing::debug;

use crate::error::{Result, WuxingError};
use crate::models::CartItem;

/// Storefront API version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "2023-07";

const CART_TOKEN_LEN: usize = 6;
const CART_TOKEN_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Creates carts from product selections.
pub trait CartService {
    /// Create a cart and return its URL.
    fn create_cart(&self, items: &[CartItem]) -> Result<String>;
}

/// Storefront credentials and shop settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub api_key: String,
    pub api_secret: String,
    pub shop_name: String,
    pub api_version: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_secret: String::new(),
            shop_name: String::new(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorefrontClient {
    config: StorefrontConfig,
}

impl StorefrontClient {
    pub fn new(config: StorefrontConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    fn shop_base_url(&self) -> String {
        format!("https://{}.myshopify.com", self.config.shop_name)
    }

    /// Whether the credentials and shop name are all present.
    pub fn check_connection(&self) -> bool {
        !self.config.api_key.is_empty()
            && !self.config.api_secret.is_empty()
            && !self.config.shop_name.is_empty()
    }

    /// Admin API URL of a storefront product.
    pub fn product_admin_url(&self, product_id: &str) -> String {
        format!(
            "{}/admin/api/{}/products/{}.json",
            self.shop_base_url(),
            self.config.api_version,
            product_id
        )
    }
}

impl CartService for StorefrontClient {
    fn create_cart(&self, items: &[CartItem]) -> Result<String> {
        if items.is_empty() {
            return Err(WuxingError::CartError(
                "Select at least one product".to_string(),
            ));
        }
        if let Some(item) = items.iter().find(|item| item.quantity == 0) {
            return Err(WuxingError::CartError(format!(
                "Quantity for product '{}' must be at least 1",
                item.id
            )));
        }

        let url = format!("{}/cart/{}", self.shop_base_url(), cart_token());
        debug!(items = items.len(), %url, "created cart");
        Ok(url)
    }
}

fn cart_token() -> String {
    let mut rng = rand::rng();
    (0..CART_TOKEN_LEN)
        .map(|_| char::from(CART_TOKEN_ALPHABET[rng.random_range(0..CART_TOKEN_ALPHABET.len())]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> StorefrontClient {
        StorefrontClient::new(StorefrontConfig {
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            shop_name: "jade-house".to_string(),
            ..StorefrontConfig::default()
        })
    }

    #[test]
    fn default_config_uses_default_api_version() {
        let config = StorefrontConfig::default();
        assert_eq!(config.api_version, "2023-07");
        assert!(!StorefrontClient::new(config).check_connection());
    }

    #[test]
    fn connection_check_needs_all_credentials() {
        assert!(client().check_connection());

        let mut config = client().config().clone();
        config.api_secret.clear();
        assert!(!StorefrontClient::new(config).check_connection());
    }

    #[test]
    fn cart_url_is_under_shop() {
        let url = client()
            .create_cart(&[CartItem::new("1", 1), CartItem::new("6", 2)])
            .unwrap();
        let token = url
            .strip_prefix("https://jade-house.myshopify.com/cart/")
            .expect("unexpected cart url");
        assert_eq!(token.len(), CART_TOKEN_LEN);
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
        );
    }

    #[test]
    fn empty_cart_is_rejected() {
        let result = client().create_cart(&[]);
        assert!(matches!(result, Err(WuxingError::CartError(_))));
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let result = client().create_cart(&[CartItem::new("1", 1), CartItem::new("2", 0)]);
        match result {
            Err(WuxingError::CartError(msg)) => assert!(msg.contains("'2'")),
            other => panic!("Expected CartError, got {:?}", other),
        }
    }

    #[test]
    fn product_admin_url_uses_api_version() {
        assert_eq!(
            client().product_admin_url("42"),
            "https://jade-house.myshopify.com/admin/api/2023-07/products/42.json"
        );
    }
}
