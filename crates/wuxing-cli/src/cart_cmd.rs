use std::process::ExitCode;

use serde::Serialize;
use tracing::{info, warn};
use wuxing_core::{CartItem, CartService, Catalog, StorefrontClient, StorefrontConfig};

use crate::cli::CartArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat, print_json};

#[derive(Debug, Serialize)]
struct CartOutput {
    cart_url: String,
    items: Vec<CartItem>,
}

pub fn run_cart(args: CartArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    if args.shop_name.trim().is_empty() {
        return Err(CliError::input(
            "Missing shop name. Set SHOPIFY_SHOP_NAME or pass --shop-name",
        ));
    }
    if args.quantity == 0 {
        return Err(CliError::input("Quantity must be at least 1"));
    }

    let items = selected_items(&args.products, args.quantity, Catalog::builtin())?;

    let client = StorefrontClient::new(StorefrontConfig {
        api_key: args.api_key,
        api_secret: args.api_secret,
        shop_name: args.shop_name,
        api_version: args.api_version,
    });
    if !client.check_connection() {
        warn!("storefront credentials are incomplete");
    }

    let cart_url = create_cart(&client, &items)?;
    info!(%cart_url, "cart created");

    match output_format {
        OutputFormat::Json => print_json(&CartOutput { cart_url, items })?,
        OutputFormat::Text => println!("{}", cart_url),
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn create_cart(service: &dyn CartService, items: &[CartItem]) -> CliResult<String> {
    Ok(service.create_cart(items)?)
}

/// Turn product ids into cart lines, rejecting unknown ids and merging repeats.
fn selected_items(ids: &[String], quantity: u32, catalog: Catalog<'_>) -> CliResult<Vec<CartItem>> {
    let mut items: Vec<CartItem> = Vec::new();

    for id in ids {
        if catalog.product_by_id(id).is_none() {
            return Err(CliError::input(format!("Unknown product id '{}'", id)));
        }
        match items.iter_mut().find(|item| &item.id == id) {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity),
            None => items.push(CartItem::new(id.clone(), quantity)),
        }
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn repeated_ids_are_merged() {
        let items = selected_items(&ids(&["1", "6", "1"]), 2, Catalog::builtin()).unwrap();
        assert_eq!(items, vec![CartItem::new("1", 4), CartItem::new("6", 2)]);
    }

    #[test]
    fn unknown_ids_are_input_errors() {
        let err = selected_items(&ids(&["1", "404"]), 1, Catalog::builtin()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("404"));
    }

    struct FailingCart;

    impl CartService for FailingCart {
        fn create_cart(&self, _items: &[CartItem]) -> wuxing_core::Result<String> {
            Err(wuxing_core::WuxingError::CartError("storefront unavailable".to_string()))
        }
    }

    #[test]
    fn cart_failures_are_runtime_errors() {
        let err = create_cart(&FailingCart, &[CartItem::new("1", 1)]).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
