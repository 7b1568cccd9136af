use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};

/// The five boundary instants every time filter is evaluated against,
/// recomputed from `now` on each evaluation (never cached across renders).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start_of_day: NaiveDateTime,
    pub end_of_day: NaiveDateTime,
    pub end_of_week: NaiveDateTime,
    pub end_of_month: NaiveDateTime,
    pub end_of_next_month: NaiveDateTime,
}

impl DateWindow {
    pub fn from_now(now: NaiveDateTime) -> Self {
        let today = now.date();
        let start_of_day = start_of(today);

        Self {
            start_of_day,
            end_of_day: end_of(today),
            end_of_week: end_of_week(today),
            end_of_month: end_of(last_day_of_month(today.year(), today.month())),
            end_of_next_month: end_of(last_day_of_next_month(today.year(), today.month())),
        }
    }
}

fn start_of(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).expect("midnight is always valid")
}

fn end_of(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .expect("end of day is always valid")
}

/// The Sunday closing the current week, at midnight. A Sunday advances a full
/// seven days, so its week runs through *next* Sunday 00:00. Quirk inherited
/// from the original front end and kept on purpose.
fn end_of_week(today: NaiveDate) -> NaiveDateTime {
    let days_until_sunday = 7 - today.weekday().num_days_from_sunday() as u64;

    start_of(
        today
            .checked_add_days(Days::new(days_until_sunday))
            .expect("week boundary stays in range"),
    )
}

// Day zero of month N+1 is the last day of month N.
fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = roll_month(year, month);

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("first of month is always valid")
        .pred_opt()
        .expect("month has a predecessor day")
}

fn last_day_of_next_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = roll_month(year, month);

    last_day_of_month(next_year, next_month)
}

fn roll_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test_log::test]
    fn now_should_sit_between_start_and_end_of_day() {
        let now = at(2025, 6, 15, 12, 0);
        let window = DateWindow::from_now(now);

        assert!(window.start_of_day <= now);
        assert!(now <= window.end_of_day);
    }

    #[test_log::test]
    fn boundaries_should_be_ordered() {
        let now = at(2025, 6, 18, 9, 30);
        let window = DateWindow::from_now(now);

        assert!(window.start_of_day <= window.end_of_day);
        assert!(window.end_of_day < window.end_of_week);
        assert!(window.end_of_day <= window.end_of_month);
        assert!(window.end_of_month < window.end_of_next_month);
    }

    #[test_log::test]
    fn a_wednesday_week_should_end_on_sunday_midnight() {
        // 2025-06-18 is a Wednesday
        let window = DateWindow::from_now(at(2025, 6, 18, 9, 30));

        assert_eq!(window.end_of_week, at(2025, 6, 22, 0, 0));
    }

    #[test_log::test]
    fn a_sunday_week_should_jump_to_next_sunday() {
        // 2025-06-15 is a Sunday; the inherited boundary rule advances a full week
        let window = DateWindow::from_now(at(2025, 6, 15, 12, 0));

        assert_eq!(window.end_of_week, at(2025, 6, 22, 0, 0));
    }

    #[test_log::test]
    fn month_end_should_roll_over_short_months() {
        let window = DateWindow::from_now(at(2025, 1, 31, 8, 0));

        assert_eq!(window.end_of_month.date(), NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
        assert_eq!(
            window.end_of_next_month.date(),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
    }

    #[test_log::test]
    fn december_should_roll_into_the_next_year() {
        let window = DateWindow::from_now(at(2025, 12, 10, 20, 0));

        assert_eq!(
            window.end_of_month.date(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
        );
        assert_eq!(
            window.end_of_next_month.date(),
            NaiveDate::from_ymd_opt(2026, 1, 31).unwrap()
        );
    }

    #[test_log::test]
    fn leap_february_should_have_twenty_nine_days() {
        let window = DateWindow::from_now(at(2024, 2, 10, 10, 0));

        assert_eq!(
            window.end_of_month.date(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }
}
