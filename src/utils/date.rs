use chrono::NaiveDate;

use crate::consts::STAMP_FORMAT;

/// Check the `YYYYMMDD` shape: exactly 8 ASCII digits, no calendar check
pub(crate) fn is_stamp_shape(s: &str) -> bool {
    s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a shape-checked stamp into a calendar date
pub(crate) fn parse_stamp(s: &str) -> Option<NaiveDate> {
    if !is_stamp_shape(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, STAMP_FORMAT).ok()
}

pub(crate) fn format_stamp(date: NaiveDate) -> String {
    date.format(STAMP_FORMAT).to_string()
}
