//! Timestamp formatting helpers.

use chrono::NaiveDateTime;
use serde::Serializer;

/// Format a birth moment as `YYYY-MM-DDTHH:MM:SS`.
pub fn format_iso(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Format a birth moment for display, e.g. `2024年01月02日 04:00`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use wuxing_core::format::format_display;
///
/// let ts = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(4, 0, 0).unwrap();
/// assert_eq!(format_display(&ts), "2024年01月02日 04:00");
/// ```
pub fn format_display(ts: &NaiveDateTime) -> String {
    ts.format("%Y年%m月%d日 %H:%M").to_string()
}

pub(crate) fn serialize_iso<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_iso(ts))
}
