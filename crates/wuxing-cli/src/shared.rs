use wuxing_core::{Element, Product};

use crate::error::{CliError, CliResult};

pub fn parse_element(s: &str) -> CliResult<Element> {
    s.parse::<Element>().map_err(CliError::from)
}

/// Price with thousands separators, e.g. `¥2,999`.
pub fn format_price(price: u32) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    out.push('¥');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn element_tags(elements: &[Element]) -> String {
    elements.iter().map(|e| e.label()).collect::<Vec<_>>().join("")
}

pub fn print_product_line(product: &Product) {
    println!(
        "  {}. {} {} [{}] {}",
        product.id,
        product.name,
        format_price(product.price),
        element_tags(&product.elements),
        product.description
    );
}
