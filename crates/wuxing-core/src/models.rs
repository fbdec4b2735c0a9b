//! Core data types for wuxing.
//!
//! - [`Element`] - One of the five symbolic categories
//! - [`BirthFields`] - Calendar fields fed to the classifier
//! - [`Adjustment`] - An adjusted timestamp plus the offset that was applied
//! - [`ClassificationResult`] - Complete result of a classification
//! - [`Product`] - A catalog entry tagged with elements
//! - [`CartItem`] - A product selection forwarded to the cart service

use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::{Result, WuxingError};

/// The five symbolic elements.
///
/// The declaration order matches the classifier's ordinal table, which also
/// makes it the iteration and sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    /// 金
    Metal,
    /// 木
    Wood,
    /// 水
    Water,
    /// 火
    Fire,
    /// 土
    Earth,
}

impl Element {
    /// All elements in ordinal order (`0 -> Metal` ... `4 -> Earth`).
    pub const ALL: [Element; 5] = [
        Element::Metal,
        Element::Wood,
        Element::Water,
        Element::Fire,
        Element::Earth,
    ];

    /// Map a classifier ordinal to its element.
    ///
    /// The ordinal is reduced mod 5 first, so every integer maps somewhere.
    pub fn from_ordinal(ordinal: i64) -> Element {
        Self::ALL[ordinal.rem_euclid(5) as usize]
    }

    /// Traditional single-character label.
    pub fn label(self) -> &'static str {
        match self {
            Element::Metal => "金",
            Element::Wood => "木",
            Element::Water => "水",
            Element::Fire => "火",
            Element::Earth => "土",
        }
    }

    /// Lowercase English name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Element::Metal => "metal",
            Element::Wood => "wood",
            Element::Water => "water",
            Element::Fire => "fire",
            Element::Earth => "earth",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Element {
    type Err = WuxingError;

    /// Accepts the English name (any case) or the traditional label.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|e| e.label() == trimmed || e.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                WuxingError::UnknownElement(format!(
                    "'{}'. Expected one of: metal, wood, water, fire, earth (or 金, 木, 水, 火, 土)",
                    s
                ))
            })
    }
}

/// Calendar fields extracted from an adjusted birth moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthFields {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
}

/// Result of shifting a timestamp by its region offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjustment {
    /// The shifted timestamp, or the input when nothing was applied.
    pub adjusted: NaiveDateTime,
    /// The applied offset in hours; `None` when no region entry matched.
    pub offset_hours: Option<i64>,
}

impl Adjustment {
    /// Whether a region offset was found and applied.
    pub fn is_applied(&self) -> bool {
        self.offset_hours.is_some()
    }
}

/// Complete result of a classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    /// The derived element.
    pub element: Element,
    /// The birth moment after region adjustment.
    #[serde(serialize_with = "crate::format::serialize_iso")]
    pub adjusted: NaiveDateTime,
    /// Fields of `adjusted` that were fed to the classifier.
    pub fields: BirthFields,
    /// Offset applied by the region lookup, if any.
    pub offset_hours: Option<i64>,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Elements this product suits.
    pub elements: Vec<Element>,
    pub image_url: String,
    /// Price in whole yuan.
    pub price: u32,
    /// Identifier of the linked storefront product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storefront_product_id: Option<String>,
}

impl Product {
    /// Whether this product is tagged with `element`.
    pub fn suits(&self, element: Element) -> bool {
        self.elements.contains(&element)
    }
}

/// A single cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItem {
    pub id: String,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(id: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: id.into(),
            quantity,
        }
    }
}
