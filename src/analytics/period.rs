// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Period tags and the date ranges they select.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A reporting period.
///
/// `Week`, `Month` and `Year` snap to the calendar unit containing the
/// reference date (weeks start on Monday). The rolling tags end at the
/// reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "week")]
    Week,
    #[default]
    #[serde(rename = "month")]
    Month,
    #[serde(rename = "year")]
    Year,
    #[serde(rename = "7d")]
    Last7Days,
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "90d")]
    Last90Days,
    #[serde(rename = "1y")]
    LastYear,
    #[serde(rename = "all")]
    All,
}

impl Period {
    pub const ALL: [Period; 8] = [
        Period::Week,
        Period::Month,
        Period::Year,
        Period::Last7Days,
        Period::Last30Days,
        Period::Last90Days,
        Period::LastYear,
        Period::All,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
            Period::Last7Days => "7d",
            Period::Last30Days => "30d",
            Period::Last90Days => "90d",
            Period::LastYear => "1y",
            Period::All => "all",
        }
    }

    /// Window length for rolling tags.
    fn rolling_days(&self) -> Option<i64> {
        match self {
            Period::Last7Days => Some(7),
            Period::Last30Days => Some(30),
            Period::Last90Days => Some(90),
            Period::LastYear => Some(365),
            _ => None,
        }
    }

    /// Inclusive date range selected by this period around `reference`.
    ///
    /// Bounds saturate at the representable calendar limits.
    pub fn range(&self, reference: NaiveDate) -> DateRange {
        if let Some(days) = self.rolling_days() {
            return DateRange::Between {
                start: days_before(reference, days),
                end: reference,
            };
        }

        match self {
            Period::Week => {
                let start = days_before(
                    reference,
                    reference.weekday().num_days_from_monday() as i64,
                );
                DateRange::Between {
                    start,
                    end: days_after(start, 6),
                }
            }
            Period::Month => DateRange::Between {
                start: reference.with_day(1).unwrap_or(reference),
                end: last_day_of_month(reference.year(), reference.month())
                    .unwrap_or(NaiveDate::MAX),
            },
            Period::Year => DateRange::Between {
                start: reference.with_ordinal(1).unwrap_or(reference),
                end: last_day_of_month(reference.year(), 12).unwrap_or(NaiveDate::MAX),
            },
            _ => DateRange::Unbounded,
        }
    }
}

impl std::str::FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("Unknown period: {}", s))
    }
}

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DateRange {
    /// No filtering
    Unbounded,
    Between { start: NaiveDate, end: NaiveDate },
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            DateRange::Unbounded => true,
            DateRange::Between { start, end } => *start <= date && date <= *end,
        }
    }

    pub fn start(&self) -> Option<NaiveDate> {
        match self {
            DateRange::Unbounded => None,
            DateRange::Between { start, .. } => Some(*start),
        }
    }

    pub fn end(&self) -> Option<NaiveDate> {
        match self {
            DateRange::Unbounded => None,
            DateRange::Between { end, .. } => Some(*end),
        }
    }
}

/// Earliest year accepted from clients.
pub const MIN_SUPPORTED_YEAR: i32 = 1900;
/// Latest year accepted from clients.
pub const MAX_SUPPORTED_YEAR: i32 = 9999;

/// Whether `date` falls within the years clients may log or query.
pub fn is_supported_date(date: NaiveDate) -> bool {
    (MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&date.year())
}

fn days_before(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_sub_signed(Duration::days(days))
        .unwrap_or(NaiveDate::MIN)
}

fn days_after(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days))
        .unwrap_or(NaiveDate::MAX)
}

/// Last day of a month (1-based). `None` for an invalid month.
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)?;
    if month == 12 {
        return NaiveDate::from_ymd_opt(year, 12, 31);
    }
    NaiveDate::from_ymd_opt(year, month + 1, 1)?.pred_opt()
}

/// Number of days in a month (1-based). Returns 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    last_day_of_month(year, month).map_or(0, |last| last.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn bounds(range: DateRange) -> (NaiveDate, NaiveDate) {
        (range.start().unwrap(), range.end().unwrap())
    }

    #[test]
    fn test_parse_tags() {
        for period in Period::ALL {
            assert_eq!(period.as_str().parse::<Period>(), Ok(period));
        }
        assert!("fortnight".parse::<Period>().is_err());
    }

    #[test]
    fn test_week_starts_monday() {
        // 2024-01-07 is a Sunday
        assert_eq!(
            bounds(Period::Week.range(d("2024-01-07"))),
            (d("2024-01-01"), d("2024-01-07"))
        );
        assert_eq!(
            bounds(Period::Week.range(d("2024-01-08"))),
            (d("2024-01-08"), d("2024-01-14"))
        );
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(
            bounds(Period::Month.range(d("2024-02-15"))),
            (d("2024-02-01"), d("2024-02-29"))
        );
        assert_eq!(
            bounds(Period::Month.range(d("2023-02-01"))),
            (d("2023-02-01"), d("2023-02-28"))
        );
        assert_eq!(
            bounds(Period::Month.range(d("2024-12-31"))),
            (d("2024-12-01"), d("2024-12-31"))
        );
    }

    #[test]
    fn test_year_bounds() {
        assert_eq!(
            bounds(Period::Year.range(d("2024-07-04"))),
            (d("2024-01-01"), d("2024-12-31"))
        );
    }

    #[test]
    fn test_rolling_windows_end_at_reference() {
        let reference = d("2024-03-10");
        assert_eq!(
            bounds(Period::Last7Days.range(reference)),
            (d("2024-03-03"), reference)
        );
        assert_eq!(
            bounds(Period::Last30Days.range(reference)),
            (d("2024-02-09"), reference)
        );
        assert_eq!(
            bounds(Period::LastYear.range(reference)),
            (d("2023-03-11"), reference)
        );
    }

    #[test]
    fn test_all_is_unbounded() {
        let range = Period::All.range(d("2024-03-10"));
        assert_eq!(range, DateRange::Unbounded);
        assert!(range.contains(d("1999-01-01")));
    }

    #[test]
    fn test_every_bounded_range_is_ordered() {
        for reference in ["2024-01-01", "2024-02-29", "2023-12-31", "2024-06-15"] {
            let reference = d(reference);
            for period in Period::ALL {
                if let DateRange::Between { start, end } = period.range(reference) {
                    assert!(start <= end, "{:?} at {}", period, reference);
                    assert!(period.range(reference).contains(reference));
                    if period.rolling_days().is_some() {
                        assert!(end <= reference);
                    }
                }
            }
        }
    }

    #[test]
    fn test_ranges_saturate_at_calendar_limits() {
        let low = NaiveDate::MIN;
        let high = NaiveDate::MAX;

        for period in Period::ALL {
            for reference in [low, high] {
                let range = period.range(reference);
                assert!(range.contains(reference), "{:?} at {}", period, reference);
            }
        }
        assert_eq!(bounds(Period::Last7Days.range(low)), (low, low));
        assert_eq!(bounds(Period::Week.range(high)).1, high);
        assert_eq!(bounds(Period::Year.range(high)).1, high);
    }

    #[test]
    fn test_extreme_dates_parse_but_are_unsupported() {
        let low: NaiveDate = serde_json::from_str("\"-262143-01-01\"").unwrap();
        let high: NaiveDate = serde_json::from_str("\"+262142-12-31\"").unwrap();
        assert!(!is_supported_date(low));
        assert!(!is_supported_date(high));
        assert!(is_supported_date(d("2024-02-29")));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 13), 0);
        assert_eq!(days_in_month(2024, 0), 0);
    }

    #[test]
    fn test_period_tags_deserialize() {
        let period: Period = serde_json::from_str("\"30d\"").unwrap();
        assert_eq!(period, Period::Last30Days);
        assert!(serde_json::from_str::<Period>("\"fortnight\"").is_err());
        for period in Period::ALL {
            let json = serde_json::to_string(&period).unwrap();
            assert_eq!(json, format!("\"{}\"", period.as_str()));
        }
    }
}
