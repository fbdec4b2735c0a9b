use std::process::ExitCode;

use serde::Serialize;
use wuxing_core::{Catalog, Element, Product};

use crate::cli::ProductsArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat, print_json};
use crate::shared::{parse_element, print_product_line};

#[derive(Debug, Serialize)]
struct ElementGroup<'a> {
    element: Element,
    label: &'static str,
    products: Vec<&'a Product>,
}

pub fn run_products(args: ProductsArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let catalog = Catalog::builtin();

    if args.grouped {
        let groups: Vec<ElementGroup<'_>> = catalog
            .products_by_element()
            .into_iter()
            .map(|(element, products)| ElementGroup {
                element,
                label: element.label(),
                products,
            })
            .collect();
        print_groups(&groups, output_format)?;
        return Ok(ExitCode::from(EXIT_SUCCESS));
    }

    let products: Vec<&Product> = if let Some(id) = &args.id {
        let product = catalog
            .product_by_id(id)
            .ok_or_else(|| CliError::input(format!("Unknown product id '{}'", id)))?;
        vec![product]
    } else if let Some(element) = &args.element {
        catalog.products_for_element(parse_element(element)?)
    } else if let Some(limit) = args.featured {
        catalog.featured_products(limit).iter().collect()
    } else {
        catalog.all_products().iter().collect()
    };

    match output_format {
        OutputFormat::Json => print_json(&products)?,
        OutputFormat::Text => {
            for product in products {
                print_product_line(product);
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn print_groups(groups: &[ElementGroup<'_>], output_format: OutputFormat) -> CliResult<()> {
    match output_format {
        OutputFormat::Json => print_json(&groups)?,
        OutputFormat::Text => {
            for group in groups {
                println!("{} ({}):", group.label, group.element);
                for product in &group.products {
                    print_product_line(product);
                }
            }
        }
    }

    Ok(())
}
