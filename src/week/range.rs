//! Report week types
//!
//! A week is named by its first and last day as `YYYYMMDD` stamps, and each
//! week has two Markdown reports whose file names derive from that range.

use std::fmt;

use chrono::{Days, NaiveDate};

use crate::consts::WEEK_SPAN_DAYS;
use crate::error::AppError;
use crate::utils::{format_stamp, is_stamp_shape, parse_stamp};

/// An 8-digit `YYYYMMDD` string that passed the shape check
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DateStamp(String);

impl DateStamp {
    /// Shape check only; calendar validity is checked by [`DateRange::from_start`]
    pub(crate) fn parse(input: &str) -> Result<Self, AppError> {
        if is_stamp_shape(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(AppError::Format {
                input: input.to_string(),
            })
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Inclusive seven-day window starting at `start`
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DateRange {
    pub(crate) start: DateStamp,
    pub(crate) end: DateStamp,
}

impl DateRange {
    pub(crate) fn from_start(start: DateStamp) -> Result<Self, AppError> {
        let calendar_error = || AppError::Calendar {
            input: start.to_string(),
        };
        let first: NaiveDate = parse_stamp(start.as_str()).ok_or_else(calendar_error)?;
        let last = first
            .checked_add_days(Days::new(WEEK_SPAN_DAYS))
            .ok_or_else(calendar_error)?;
        // past year 9999 the end no longer fits in eight digits
        let end = format_stamp(last);
        if !is_stamp_shape(&end) {
            return Err(calendar_error());
        }
        Ok(Self {
            start,
            end: DateStamp(end),
        })
    }

    /// File name of the given report for this week
    pub(crate) fn report_file(&self, kind: ReportKind) -> String {
        format!("{}-{}_{}.md", self.start, self.end, kind.suffix())
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// The two weekly reports the processor reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReportKind {
    MemberList,
    PracticeRecords,
}

impl ReportKind {
    /// Check order: member list before practice records
    pub(crate) const ALL: [ReportKind; 2] = [ReportKind::MemberList, ReportKind::PracticeRecords];

    pub(crate) fn suffix(self) -> &'static str {
        match self {
            ReportKind::MemberList => "在群人员名单",
            ReportKind::PracticeRecords => "打卡记录",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: &str) -> Result<DateRange, AppError> {
        DateRange::from_start(DateStamp::parse(start)?)
    }

    #[test]
    fn stamp_rejects_bad_shapes() {
        for input in ["abc", "2025031", "202503177", "", "2025/3/1"] {
            match DateStamp::parse(input) {
                Err(AppError::Format { input: got }) => assert_eq!(got, input),
                other => panic!("expected format error for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn stamp_accepts_shape_without_calendar_check() {
        assert_eq!(DateStamp::parse("20259999").unwrap().as_str(), "20259999");
    }

    #[test]
    fn end_is_six_days_later() {
        assert_eq!(range("20250317").unwrap().end.as_str(), "20250323");
    }

    #[test]
    fn end_rolls_over_month_in_non_leap_year() {
        assert_eq!(range("20250228").unwrap().end.as_str(), "20250306");
    }

    #[test]
    fn end_rolls_over_month_in_leap_year() {
        assert_eq!(range("20240225").unwrap().end.as_str(), "20240302");
    }

    #[test]
    fn end_rolls_over_year() {
        assert_eq!(range("20251229").unwrap().end.as_str(), "20260104");
    }

    #[test]
    fn start_keeps_original_string() {
        assert_eq!(range("20250317").unwrap().start.as_str(), "20250317");
    }

    #[test]
    fn impossible_date_is_calendar_error() {
        for input in ["20250230", "20259999", "20250001"] {
            match range(input) {
                Err(AppError::Calendar { input: got }) => assert_eq!(got, input),
                other => panic!("expected calendar error for {input}, got {other:?}"),
            }
        }
    }

    #[test]
    fn end_past_year_9999_is_calendar_error() {
        match range("99991228") {
            Err(AppError::Calendar { input }) => assert_eq!(input, "99991228"),
            other => panic!("expected calendar error, got {other:?}"),
        }
        assert_eq!(range("99991225").unwrap().end.as_str(), "99991231");
    }

    #[test]
    fn report_file_names() {
        let r = range("20250317").unwrap();
        assert_eq!(r.to_string(), "20250317-20250323");
        assert_eq!(
            r.report_file(ReportKind::MemberList),
            "20250317-20250323_在群人员名单.md"
        );
        assert_eq!(
            r.report_file(ReportKind::PracticeRecords),
            "20250317-20250323_打卡记录.md"
        );
    }
}
