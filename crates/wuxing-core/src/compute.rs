//! Element classification.
//!
//! The classifier reduces year, month, day and hour by fixed moduli, sums the
//! remainders and maps the sum mod 5 onto [`Element::ALL`]. The orchestrator
//! adjusts a birth moment by its region first and classifies the result.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::models::{BirthFields, ClassificationResult, Element};
use crate::parse::combine_date_time;
use crate::region::adjust_with_lookup;

const YEAR_MODULUS: i64 = 10;
const FIELD_MODULUS: i64 = 5;

/// Classify calendar fields into an element.
///
/// Total over all integers. Every field is reduced with the Euclidean
/// (non-negative) remainder, so negative inputs also land in the table.
///
/// # Examples
///
/// ```
/// use wuxing_core::compute::classify;
/// use wuxing_core::models::Element;
///
/// // 4 + 0 + 0 + 0 = 4
/// assert_eq!(classify(2024, 5, 15, 10), Element::Earth);
/// // 3 + 3 + 2 + 4 = 12, 12 mod 5 = 2
/// assert_eq!(classify(2023, 3, 7, 14), Element::Water);
/// ```
pub fn classify(year: i64, month: i64, day: i64, hour: i64) -> Element {
    let year_mod = year.rem_euclid(YEAR_MODULUS);
    let month_mod = month.rem_euclid(FIELD_MODULUS);
    let day_mod = day.rem_euclid(FIELD_MODULUS);
    let hour_mod = hour.rem_euclid(FIELD_MODULUS);

    Element::from_ordinal((year_mod + month_mod + day_mod + hour_mod) % FIELD_MODULUS)
}

/// Decompose a timestamp into the fields the classifier consumes.
pub fn birth_fields(ts: &NaiveDateTime) -> BirthFields {
    BirthFields {
        year: ts.year(),
        month: ts.month(),
        day: ts.day(),
        hour: ts.hour(),
    }
}

/// Classify the fields of an already adjusted timestamp.
pub fn classify_fields(fields: BirthFields) -> Element {
    classify(
        i64::from(fields.year),
        i64::from(fields.month),
        i64::from(fields.day),
        i64::from(fields.hour),
    )
}

/// Adjust a birth moment by its region and classify it.
///
/// Never fails. An unknown country or region classifies the unadjusted
/// moment and reports `offset_hours: None`.
///
/// # Examples
///
/// ```
/// use wuxing_core::compute::calculate;
/// use wuxing_core::models::Element;
/// use wuxing_core::parse::parse_birth_moment;
///
/// let birth = parse_birth_moment("2024-01-01T20:00").unwrap();
/// let result = calculate(birth, "中国", "北京");
///
/// assert_eq!(result.fields.day, 2);
/// assert_eq!(result.fields.hour, 4);
/// assert_eq!(result.offset_hours, Some(8));
/// // 4 + 1 + 2 + 4 = 11, 11 mod 5 = 1
/// assert_eq!(result.element, Element::Wood);
/// ```
pub fn calculate(birth: NaiveDateTime, country: &str, region: &str) -> ClassificationResult {
    let adjustment = adjust_with_lookup(birth, country, region);
    let fields = birth_fields(&adjustment.adjusted);
    let element = classify_fields(fields);

    ClassificationResult {
        element,
        adjusted: adjustment.adjusted,
        fields,
        offset_hours: adjustment.offset_hours,
    }
}

/// Compute a classification from separately entered date and time strings.
///
/// This is a convenience wrapper that parses the inputs and calls
/// [`calculate`].
pub fn calculate_from_strings(
    date: &str,
    time: &str,
    country: &str,
    region: &str,
) -> crate::error::Result<ClassificationResult> {
    let birth = combine_date_time(date, time)?;
    Ok(calculate(birth, country, region))
}
