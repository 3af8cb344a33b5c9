//! Care scheduling: plant age, next care date and overdue detection.
//!
//! All calculations work on calendar dates. The current date comes from a
//! [`Clock`] so that callers (and tests) control what "today" means.

use crate::model::Plant;
use chrono::{DateTime, Duration, Local, NaiveDate, Utc};

/// Source of the current date and time.
pub trait Clock {
    fn today(&self) -> NaiveDate;
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock, using the local calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen on one day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn now(&self) -> DateTime<Utc> {
        self.today
            .and_hms_opt(12, 0, 0)
            .map(|dt| dt.and_utc())
            .unwrap_or_else(Utc::now)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextCare {
    /// No care has been recorded yet.
    NeverCared,
    Scheduled {
        date: NaiveDate,
        is_overdue: bool,
        /// Negative once overdue.
        days_until: i64,
    },
}

impl NextCare {
    pub const NEVER_CARED_MESSAGE: &'static str = "Care needed - no previous care recorded";
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("{} {}", n, unit)
    } else {
        format!("{} {}s", n, unit)
    }
}

/// Human readable age of a plant planted on `date_planted`.
pub fn age(date_planted: NaiveDate, today: NaiveDate) -> String {
    let days = (today - date_planted).num_days().abs();

    if days < 30 {
        plural(days, "day")
    } else if days < 365 {
        plural(days / 30, "month")
    } else {
        let years = days / 365;
        let months = (days % 365) / 30;
        if months > 0 {
            format!("{}, {}", plural(years, "year"), plural(months, "month"))
        } else {
            plural(years, "year")
        }
    }
}

pub fn next_care(plant: &Plant, today: NaiveDate) -> NextCare {
    let Some(last_care) = plant.last_care_date else {
        return NextCare::NeverCared;
    };

    // Past the end of the calendar the date saturates, so it is never overdue.
    let date = last_care
        .checked_add_signed(Duration::days(plant.care_schedule.interval_days()))
        .unwrap_or(NaiveDate::MAX);
    NextCare::Scheduled {
        date,
        is_overdue: date < today,
        days_until: (date - today).num_days(),
    }
}

/// True only for plants with recorded care whose next date has passed.
/// Plants that were never cared for do not count.
pub fn needs_attention(plant: &Plant, today: NaiveDate) -> bool {
    matches!(
        next_care(plant, today),
        NextCare::Scheduled {
            is_overdue: true,
            ..
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CareSchedule;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn days_ago(n: i64) -> NaiveDate {
        today() - Duration::days(n)
    }

    fn plant() -> Plant {
        Plant::new(
            "plant-1".to_string(),
            "Basil".to_string(),
            "Sweet Basil".to_string(),
            days_ago(100),
        )
    }

    #[test]
    fn test_age_in_days() {
        assert_eq!(age(days_ago(0), today()), "0 days");
        assert_eq!(age(days_ago(1), today()), "1 day");
        assert_eq!(age(days_ago(12), today()), "12 days");
        assert_eq!(age(days_ago(29), today()), "29 days");
    }

    #[test]
    fn test_age_in_months() {
        assert_eq!(age(days_ago(30), today()), "1 month");
        assert_eq!(age(days_ago(59), today()), "1 month");
        assert_eq!(age(days_ago(60), today()), "2 months");
        assert_eq!(age(days_ago(364), today()), "12 months");
    }

    #[test]
    fn test_age_in_years_and_months() {
        assert_eq!(age(days_ago(365), today()), "1 year");
        assert_eq!(age(days_ago(400), today()), "1 year, 1 month");
        assert_eq!(age(days_ago(425), today()), "1 year, 2 months");
        assert_eq!(age(days_ago(730), today()), "2 years");
        assert_eq!(age(days_ago(760), today()), "2 years, 1 month");
    }

    #[test]
    fn test_age_of_future_date_uses_absolute_difference() {
        assert_eq!(age(today() + Duration::days(3), today()), "3 days");
    }

    #[test]
    fn test_next_care_never_cared() {
        assert_eq!(next_care(&plant(), today()), NextCare::NeverCared);
    }

    #[test]
    fn test_next_care_upcoming() {
        let mut p = plant();
        p.care_schedule = CareSchedule::Biweekly;
        p.last_care_date = Some(days_ago(4));

        assert_eq!(
            next_care(&p, today()),
            NextCare::Scheduled {
                date: today() + Duration::days(10),
                is_overdue: false,
                days_until: 10,
            }
        );
    }

    #[test]
    fn test_next_care_overdue_has_negative_days() {
        let mut p = plant();
        p.care_schedule = CareSchedule::Daily;
        p.last_care_date = Some(days_ago(3));

        match next_care(&p, today()) {
            NextCare::Scheduled {
                is_overdue,
                days_until,
                ..
            } => {
                assert!(is_overdue);
                assert_eq!(days_until, -2);
            }
            NextCare::NeverCared => panic!("expected a scheduled date"),
        }
    }

    #[test]
    fn test_due_today_is_not_overdue() {
        let mut p = plant();
        p.care_schedule = CareSchedule::Weekly;
        p.last_care_date = Some(days_ago(7));
        assert!(!needs_attention(&p, today()));
    }

    #[test]
    fn test_needs_attention() {
        let mut p = plant();
        assert!(!needs_attention(&p, today()), "never cared for is not flagged");

        p.care_schedule = CareSchedule::Monthly;
        p.last_care_date = Some(days_ago(31));
        assert!(needs_attention(&p, today()));

        p.last_care_date = Some(days_ago(29));
        assert!(!needs_attention(&p, today()));
    }

    #[test]
    fn test_next_care_saturates_at_end_of_calendar() {
        let mut p = plant();
        p.care_schedule = CareSchedule::Monthly;
        p.last_care_date = Some(NaiveDate::MAX);

        match next_care(&p, today()) {
            NextCare::Scheduled {
                date,
                is_overdue,
                days_until,
            } => {
                assert_eq!(date, NaiveDate::MAX);
                assert!(!is_overdue);
                assert!(days_until > 0);
            }
            NextCare::NeverCared => panic!("expected a scheduled date"),
        }
        assert!(!needs_attention(&p, today()));
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::new(today());
        assert_eq!(clock.today(), today());
        assert_eq!(clock.now().date_naive(), today());
    }
}
