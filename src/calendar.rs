//! Calendar rules deciding which log file a date routes to and when the weekend file goes stale

use chrono::{Datelike as _, Days, NaiveDate, NaiveDateTime, Weekday};

/// Kind of day, governing the file name strategy
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum DayKind {
    /// Monday to Friday
    Weekday,
    /// Saturday or Sunday
    Weekend,
}

/// How an archived weekend file is dated
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ArchiveNaming {
    /// Sunday ending the weekend before the current one
    #[default]
    Boundary,
    /// Sunday ending the weekend the stale content was last written in
    Content,
}

/// Classify a date as weekday or weekend
#[must_use]
pub fn classify(date: NaiveDate) -> DayKind {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => DayKind::Weekend,
        Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu | Weekday::Fri => {
            DayKind::Weekday
        }
    }
}

/// Sunday ending the previous weekend period, or `None` if `today` is not a weekend day
///
/// Saturday maps to 6 days earlier, Sunday to 7 days earlier.
#[must_use]
pub fn boundary_sunday(today: NaiveDate) -> Option<NaiveDate> {
    let days_back = match today.weekday() {
        Weekday::Sat => 6,
        Weekday::Sun => 7,
        Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu | Weekday::Fri => return None,
    };
    today.checked_sub_days(Days::new(days_back))
}

/// First Sunday on or after `date`
#[must_use]
pub fn closing_sunday(date: NaiveDate) -> Option<NaiveDate> {
    let days_ahead = (7 - date.weekday().num_days_from_sunday()) % 7;
    date.checked_add_days(Days::new(days_ahead.into()))
}

/// Test if weekend content last written at `last_write` must be archived before writing on `today`
///
/// Stale means written on or before the boundary Sunday, 23:59:59 included.
#[must_use]
pub fn is_stale(today: NaiveDate, last_write: NaiveDateTime) -> bool {
    boundary_sunday(today).is_some_and(|boundary| last_write.date() <= boundary)
}

/// Date to stamp the archive with, or `None` if the weekend file written at `last_write` is not stale
#[must_use]
pub fn archive_date(
    naming: ArchiveNaming,
    today: NaiveDate,
    last_write: NaiveDateTime,
) -> Option<NaiveDate> {
    if !is_stale(today, last_write) {
        return None;
    }
    match naming {
        ArchiveNaming::Boundary => boundary_sunday(today),
        ArchiveNaming::Content => closing_sunday(last_write.date()),
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use chrono::{Datelike as _, NaiveTime};

    use super::*;
    use crate::tests::date;

    /// Build a timestamp from a date and a wall clock time
    fn at(d: NaiveDate, h: u32, m: u32, s: u32) -> NaiveDateTime {
        d.and_time(NaiveTime::from_hms_opt(h, m, s).unwrap())
    }

    #[test]
    fn classify_week() {
        // 2022-03-07 is a Monday
        let kinds: Vec<DayKind> = (7..=13).map(|d| classify(date(2022, 3, d))).collect();
        assert_eq!(
            kinds,
            vec![
                DayKind::Weekday,
                DayKind::Weekday,
                DayKind::Weekday,
                DayKind::Weekday,
                DayKind::Weekday,
                DayKind::Weekend,
                DayKind::Weekend,
            ]
        );
    }

    #[test]
    fn day_kind_display() {
        assert_eq!(DayKind::Weekday.to_string(), "weekday");
        assert_eq!(DayKind::Weekend.to_string(), "weekend");
    }

    #[test]
    fn boundary_sunday_weekend() {
        assert_eq!(boundary_sunday(date(2022, 3, 12)), Some(date(2022, 3, 6)));
        assert_eq!(boundary_sunday(date(2022, 3, 13)), Some(date(2022, 3, 6)));
        // Across a year change
        assert_eq!(boundary_sunday(date(2022, 1, 1)), Some(date(2021, 12, 26)));
        assert_eq!(boundary_sunday(date(2022, 1, 2)), Some(date(2021, 12, 26)));
    }

    #[test]
    fn boundary_sunday_weekday() {
        for d in 7..=11 {
            assert_eq!(boundary_sunday(date(2022, 3, d)), None);
        }
    }

    #[test]
    fn boundary_sunday_is_always_sunday() {
        let mut d = date(2020, 1, 1);
        while d < date(2021, 1, 1) {
            if let Some(b) = boundary_sunday(d) {
                assert_eq!(b.weekday(), Weekday::Sun);
                assert!(b < d);
                assert!((d - b).num_days() <= 7);
            }
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn closing_sunday_of_dates() {
        assert_eq!(closing_sunday(date(2022, 1, 22)), Some(date(2022, 1, 23)));
        assert_eq!(closing_sunday(date(2022, 1, 23)), Some(date(2022, 1, 23)));
        assert_eq!(closing_sunday(date(2022, 1, 17)), Some(date(2022, 1, 23)));
    }

    #[test]
    fn stale_at_boundary() {
        let saturday = date(2022, 3, 12);
        let sunday = date(2022, 3, 13);
        let boundary = date(2022, 3, 6);
        assert!(is_stale(saturday, at(boundary, 23, 59, 59)));
        assert!(is_stale(sunday, at(boundary, 23, 59, 59)));
        assert!(is_stale(saturday, at(boundary, 0, 0, 0)));
        assert!(!is_stale(saturday, at(date(2022, 3, 7), 0, 0, 0)));
    }

    #[test]
    fn not_stale_within_current_weekend() {
        let saturday = date(2022, 3, 12);
        let sunday = date(2022, 3, 13);
        assert!(!is_stale(sunday, at(saturday, 18, 0, 0)));
        assert!(!is_stale(saturday, at(saturday, 8, 0, 0)));
        // Written during the preceding week
        assert!(!is_stale(saturday, at(date(2022, 3, 11), 23, 0, 0)));
    }

    #[test]
    fn never_stale_on_weekday() {
        assert!(!is_stale(date(2022, 3, 14), at(date(2021, 1, 1), 0, 0, 0)));
    }

    #[test]
    fn archive_date_boundary_naming() {
        let saturday = date(2022, 3, 12);
        let old = at(date(2022, 1, 23), 23, 59, 59);
        assert_eq!(
            archive_date(ArchiveNaming::Boundary, saturday, old),
            Some(date(2022, 3, 6))
        );
        assert_eq!(
            archive_date(
                ArchiveNaming::Boundary,
                saturday,
                at(date(2022, 3, 12), 1, 0, 0)
            ),
            None
        );
    }

    #[test]
    fn archive_date_content_naming() {
        let saturday = date(2022, 3, 12);
        assert_eq!(
            archive_date(
                ArchiveNaming::Content,
                saturday,
                at(date(2022, 1, 23), 23, 59, 59)
            ),
            Some(date(2022, 1, 23))
        );
        assert_eq!(
            archive_date(
                ArchiveNaming::Content,
                saturday,
                at(date(2022, 1, 22), 10, 0, 0)
            ),
            Some(date(2022, 1, 23))
        );
    }

    #[test]
    fn archive_naming_parse() {
        assert_eq!(
            ArchiveNaming::from_str("boundary").unwrap(),
            ArchiveNaming::Boundary
        );
        assert_eq!(
            ArchiveNaming::from_str("content").unwrap(),
            ArchiveNaming::Content
        );
        assert!(ArchiveNaming::from_str("weekly").is_err());
        assert_eq!(ArchiveNaming::default().to_string(), "boundary");
    }
}
