//! Region hour offsets and the birth-moment adjuster.
//!
//! Each supported country carries a fixed list of regions with a flat hour
//! offset. The adjustment is plain hour arithmetic on a naive timestamp, not
//! a timezone conversion; chrono handles the calendar rollover.

use chrono::{NaiveDateTime, TimeDelta};
use tracing::{debug, warn};

use crate::models::Adjustment;

/// A named region and its hour offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionOffset {
    pub name: &'static str,
    pub offset_hours: i64,
}

const fn region(name: &'static str, offset_hours: i64) -> RegionOffset {
    RegionOffset { name, offset_hours }
}

/// Country -> regions table, in display order.
pub static REGIONS: &[(&str, &[RegionOffset])] = &[
    (
        "中国",
        &[region("北京", 8), region("上海", 8), region("广州", 8)],
    ),
    (
        "美国",
        &[region("纽约", -5), region("洛杉矶", -8), region("芝加哥", -6)],
    ),
    ("日本", &[region("东京", 9), region("大阪", 9)]),
];

fn country_regions(country: &str) -> Option<&'static [RegionOffset]> {
    REGIONS
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, regions)| *regions)
}

/// Look up the hour offset of a (country, region) pair.
///
/// Matching is exact and case-sensitive.
pub fn region_offset(country: &str, region: &str) -> Option<i64> {
    country_regions(country)?
        .iter()
        .find(|r| r.name == region)
        .map(|r| r.offset_hours)
}

/// Shift `timestamp` by the region's offset, reporting whether one applied.
///
/// An unknown country or region leaves the timestamp unchanged. So does a
/// shift that would leave chrono's representable range.
pub fn adjust_with_lookup(timestamp: NaiveDateTime, country: &str, region: &str) -> Adjustment {
    let Some(offset_hours) = region_offset(country, region) else {
        debug!(country, region, "no region offset found");
        return Adjustment {
            adjusted: timestamp,
            offset_hours: None,
        };
    };

    match TimeDelta::try_hours(offset_hours).and_then(|d| timestamp.checked_add_signed(d)) {
        Some(adjusted) => Adjustment {
            adjusted,
            offset_hours: Some(offset_hours),
        },
        None => {
            warn!(%timestamp, offset_hours, "region offset out of range, leaving timestamp unchanged");
            Adjustment {
                adjusted: timestamp,
                offset_hours: None,
            }
        }
    }
}

/// Shift `timestamp` by the hour offset of (country, region).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use wuxing_core::region::adjust;
///
/// let ts = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(20, 0, 0).unwrap();
/// let adjusted = adjust(ts, "中国", "北京");
/// assert_eq!(adjusted.to_string(), "2024-01-02 04:00:00");
/// ```
pub fn adjust(timestamp: NaiveDateTime, country: &str, region: &str) -> NaiveDateTime {
    adjust_with_lookup(timestamp, country, region).adjusted
}

/// Countries with configured regions, in table order.
pub fn available_countries() -> Vec<&'static str> {
    REGIONS.iter().map(|(name, _)| *name).collect()
}

/// Region names of a country; empty for an unknown country.
pub fn regions_for_country(country: &str) -> Vec<&'static str> {
    country_regions(country)
        .map(|regions| regions.iter().map(|r| r.name).collect())
        .unwrap_or_default()
}

/// Regions with their offsets for a country.
pub fn region_offsets_for_country(country: &str) -> &'static [RegionOffset] {
    country_regions(country).unwrap_or(&[])
}
