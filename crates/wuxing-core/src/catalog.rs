//! Product catalog and recommendations.
//!
//! The catalog is a fixed in-memory list. [`Catalog`] borrows any product
//! slice so callers can recommend from their own listings.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::models::{Element, Product};

/// Number of products returned by [`Catalog::featured_products`] by default.
pub const DEFAULT_FEATURED_LIMIT: usize = 3;

const FALLBACK_REASON: &str =
    "根据您的五行属性，我们推荐以下产品，它们可以帮助您平衡五行能量。";

fn product(
    id: &str,
    name: &str,
    description: &str,
    elements: &[Element],
    image_url: &str,
    price: u32,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        elements: elements.to_vec(),
        image_url: image_url.to_string(),
        price,
        storefront_product_id: None,
    }
}

/// The built-in product list.
pub static PRODUCTS: LazyLock<Vec<Product>> = LazyLock::new(|| {
    vec![
        product(
            "1",
            "翡翠手镯",
            "天然A货翡翠手镯，增强木属性，适合缺木之人",
            &[Element::Wood],
            "/products/jade-bracelet.jpg",
            2999,
        ),
        product(
            "2",
            "红玛瑙吊坠",
            "天然红玛瑙，增强火属性，适合缺火之人",
            &[Element::Fire],
            "/products/red-agate-pendant.jpg",
            999,
        ),
        product(
            "3",
            "黑曜石手链",
            "天然黑曜石，增强水属性，适合缺水之人",
            &[Element::Water],
            "/products/obsidian-bracelet.jpg",
            799,
        ),
        product(
            "4",
            "白玉吊坠",
            "天然和田白玉，增强金属性，适合缺金之人",
            &[Element::Metal],
            "/products/white-jade-pendant.jpg",
            1999,
        ),
        product(
            "5",
            "黄水晶项链",
            "天然黄水晶，增强土属性，适合缺土之人",
            &[Element::Earth],
            "/products/yellow-crystal-necklace.jpg",
            1299,
        ),
        product(
            "6",
            "五行平衡手链",
            "融合五种宝石，平衡五行能量",
            &Element::ALL,
            "/products/five-elements-bracelet.jpg",
            3999,
        ),
    ]
});

/// Read-only view over a product list.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    products: &'a [Product],
}

impl Catalog<'static> {
    /// Catalog over [`PRODUCTS`].
    pub fn builtin() -> Self {
        Self::new(&PRODUCTS)
    }
}

impl<'a> Catalog<'a> {
    pub fn new(products: &'a [Product]) -> Self {
        Self { products }
    }

    /// Products tagged with `element`, in catalog order.
    pub fn products_for_element(&self, element: Element) -> Vec<&'a Product> {
        self.products.iter().filter(|p| p.suits(element)).collect()
    }

    pub fn all_products(&self) -> &'a [Product] {
        self.products
    }

    pub fn product_by_id(&self, id: &str) -> Option<&'a Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// The first `limit` products of the catalog.
    pub fn featured_products(&self, limit: usize) -> &'a [Product] {
        &self.products[..limit.min(self.products.len())]
    }

    /// Products grouped by element. Every element is present as a key.
    ///
    /// A product tagged with several elements appears under each of them.
    pub fn products_by_element(&self) -> BTreeMap<Element, Vec<&'a Product>> {
        let mut groups: BTreeMap<Element, Vec<&'a Product>> =
            Element::ALL.into_iter().map(|e| (e, Vec::new())).collect();

        for product in self.products {
            for element in &product.elements {
                if let Some(group) = groups.get_mut(element) {
                    if !group.iter().any(|p| p.id == product.id) {
                        group.push(product);
                    }
                }
            }
        }

        groups
    }
}

/// Explanation shown next to the recommendations for an element.
pub fn recommendation_reason(element: Element) -> &'static str {
    match element {
        Element::Metal => {
            "您的五行属性偏向于金，适合使用能够增强或平衡金属性的产品。这些产品可以帮助您增强决断力和自信心。"
        }
        Element::Wood => {
            "您的五行属性偏向于木，适合使用能够增强或平衡木属性的产品。这些产品可以帮助您增强创造力和成长能力。"
        }
        Element::Water => {
            "您的五行属性偏向于水，适合使用能够增强或平衡水属性的产品。这些产品可以帮助您增强智慧和适应能力。"
        }
        Element::Fire => {
            "您的五行属性偏向于火，适合使用能够增强或平衡火属性的产品。这些产品可以帮助您增强热情和表达能力。"
        }
        Element::Earth => {
            "您的五行属性偏向于土，适合使用能够增强或平衡土属性的产品。这些产品可以帮助您增强稳定性和踏实感。"
        }
    }
}

/// Generic explanation for callers without a classified element.
pub fn fallback_reason() -> &'static str {
    FALLBACK_REASON
}

/// Copy of `product` linked to a storefront product id.
pub fn link_storefront_product(product: &Product, storefront_id: impl Into<String>) -> Product {
    Product {
        storefront_product_id: Some(storefront_id.into()),
        ..product.clone()
    }
}
