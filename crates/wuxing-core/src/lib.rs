//! # wuxing-core
//!
//! Five-element birth classification with product recommendations.
//!
//! A birth moment is shifted by the flat hour offset of its birth region,
//! then its year, month, day and hour are reduced into one of five elements
//! (金 Metal, 木 Wood, 水 Water, 火 Fire, 土 Earth). The element selects
//! products from a static catalog, which can be forwarded to a storefront
//! cart.
//!
//! ## Features
//!
//! - **Pure classification**: no clock, no randomness, no I/O.
//! - **Calendar-correct adjustment**: hour shifts roll over days, months and
//!   years via chrono.
//! - **Explicit lookup outcome**: [`region::adjust_with_lookup`] reports
//!   whether a region offset was applied.
//! - **Swappable cart backend** behind [`cart::CartService`].
//!
//! ## Example
//!
//! ```rust
//! use wuxing_core::prelude::*;
//!
//! let birth = parse_birth_moment("2023-03-07T14:00").unwrap();
//! let result = calculate(birth, "Atlantis", "nowhere");
//!
//! assert_eq!(result.element, Element::Water);
//! assert_eq!(result.offset_hours, None);
//!
//! for product in Catalog::builtin().products_for_element(result.element) {
//!     println!("{} ({})", product.name, product.price);
//! }
//! ```

pub mod cart;
pub mod catalog;
pub mod compute;
pub mod error;
pub mod format;
pub mod models;
pub mod parse;
pub mod region;

// Re-export commonly used types at the crate root
pub use cart::{CartService, StorefrontClient, StorefrontConfig};
pub use catalog::{Catalog, recommendation_reason};
pub use compute::{calculate, calculate_from_strings, classify};
pub use error::{Result, WuxingError};
pub use models::{Adjustment, BirthFields, CartItem, ClassificationResult, Element, Product};
pub use parse::{combine_date_time, parse_birth_moment};
pub use region::{adjust, adjust_with_lookup};

/// Prelude module for convenient imports.
///
/// ```
/// use wuxing_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::cart::{CartService, StorefrontClient, StorefrontConfig};
    pub use crate::catalog::{Catalog, recommendation_reason};
    pub use crate::compute::{calculate, calculate_from_strings, classify};
    pub use crate::error::{Result, WuxingError};
    pub use crate::format::{format_display, format_iso};
    pub use crate::models::*;
    pub use crate::parse::{combine_date_time, parse_birth_moment};
    pub use crate::region::{
        adjust, adjust_with_lookup, available_countries, region_offset, regions_for_country,
    };
}
