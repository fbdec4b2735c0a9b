use std::process::ExitCode;

use serde::Serialize;
use tracing::{debug, warn};
use wuxing_core::format::{format_display, format_iso};
use wuxing_core::{
    Catalog, ClassificationResult, Product, combine_date_time, calculate, recommendation_reason,
};

use crate::cli::CalculateArgs;
use crate::error::{CliResult, EXIT_SUCCESS, OutputFormat, print_json};
use crate::shared::print_product_line;

#[derive(Debug, Serialize)]
struct CalculateOutput<'a> {
    country: &'a str,
    region: &'a str,
    birth: String,
    #[serde(flatten)]
    result: ClassificationResult,
    label: &'static str,
    reason: &'static str,
    products: Vec<&'a Product>,
}

pub fn run_calculate(args: CalculateArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let birth = combine_date_time(&args.date, &args.time)?;
    let result = calculate(birth, &args.country, &args.region);
    debug!(?result, "classified birth moment");

    if result.offset_hours.is_none() {
        warn!(
            country = %args.country,
            region = %args.region,
            "no regional adjustment found, classifying the unadjusted birth moment"
        );
    }

    let products = Catalog::builtin().products_for_element(result.element);
    let output = CalculateOutput {
        country: &args.country,
        region: &args.region,
        birth: format_iso(&birth),
        label: result.element.label(),
        reason: recommendation_reason(result.element),
        products,
        result,
    };

    match output_format {
        OutputFormat::Json => print_json(&output)?,
        OutputFormat::Text => print_text(&output),
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn print_text(output: &CalculateOutput<'_>) {
    let result = &output.result;
    let adjustment = match result.offset_hours {
        Some(hours) => format!("{:+}h", hours),
        None => "no regional adjustment".to_string(),
    };

    println!("Country: {}", output.country);
    println!("Region: {}", output.region);
    println!(
        "Adjusted birth moment: {} ({})",
        format_display(&result.adjusted),
        adjustment
    );
    println!(
        "Fields: year={} month={} day={} hour={}",
        result.fields.year, result.fields.month, result.fields.day, result.fields.hour
    );
    println!("Element: {} ({})", output.label, result.element);
    println!();
    println!("{}", output.reason);
    println!();

    if output.products.is_empty() {
        println!("No products found for this element.");
    } else {
        println!("Recommended products:");
        for product in &output.products {
            print_product_line(product);
        }
    }
}
