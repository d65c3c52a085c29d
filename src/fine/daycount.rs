use chrono::{Datelike, NaiveDate};

/// days a payment may run late before fines start accruing within its month
pub const GRACE_PERIOD_DAYS: i64 = 15;

/// chargeable overdue days between an overdue reference date and the date the
/// fine was paid
///
/// `paid` covers its whole calendar day, so internally the boundary instant is
/// the following midnight. Within the overdue month the grace period is
/// anchored to the 15th; across month boundaries the exact elapsed days are
/// corrected by the unused part of the grace window.
pub fn chargeable_days(overdue: NaiveDate, paid: NaiveDate) -> i64 {
    if overdue == paid {
        return 0;
    }

    let (paid_year, paid_month, paid_day) = next_day(paid.year(), paid.month(), paid.day());

    // still inside the overdue month
    if paid_year == overdue.year() && paid_month == overdue.month() {
        let day = paid_day as i64;
        if day >= GRACE_PERIOD_DAYS {
            return day - GRACE_PERIOD_DAYS;
        }
        return 0;
    }

    let elapsed = serial_day(paid_year, paid_month, paid_day)
        - serial_day(overdue.year(), overdue.month(), overdue.day());
    elapsed - (GRACE_PERIOD_DAYS - overdue.day() as i64).abs() - 1
}

/// quadrennial leap rule used by the historical fine tables: every fourth
/// year, century years included
pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 4 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => unreachable!("month out of range: {month}"),
    }
}

fn next_day(year: i32, month: u32, day: u32) -> (i32, u32, u32) {
    if day < days_in_month(year, month) {
        (year, month, day + 1)
    } else if month < 12 {
        (year, month + 1, 1)
    } else {
        (year + 1, 1, 1)
    }
}

/// day number from 0000-01-01 under the quadrennial leap rule
fn serial_day(year: i32, month: u32, day: u32) -> i64 {
    let y = i64::from(year);
    let mut days = 365 * y + (y + 3).div_euclid(4);
    for m in 1..month {
        days += i64::from(days_in_month(year, m));
    }
    days + i64::from(day) - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_regression_oracle() {
        let overdue = date(2009, 5, 3);
        let cases = [
            (date(2009, 5, 3), 0),
            (date(2009, 5, 4), 0),
            (date(2009, 5, 20), 6),
            (date(2009, 8, 4), 81),
            (date(2010, 5, 2), 352),
            (date(2011, 8, 4), 811),
        ];
        for (paid, expected) in cases {
            assert_eq!(
                chargeable_days(overdue, paid),
                expected,
                "paid {paid} expected {expected}"
            );
        }
    }

    #[test]
    fn test_same_day_identity() {
        for paid in [
            date(2009, 5, 3),
            date(2009, 12, 31),
            date(2012, 2, 29),
            date(2018, 8, 31),
        ] {
            assert_eq!(chargeable_days(paid, paid), 0);
        }
    }

    #[test]
    fn test_within_grace_period() {
        let overdue = date(2009, 5, 1);
        // chargeable from the day the 15-day grace window closes
        assert_eq!(chargeable_days(overdue, date(2009, 5, 13)), 0);
        assert_eq!(chargeable_days(overdue, date(2009, 5, 14)), 0);
        assert_eq!(chargeable_days(overdue, date(2009, 5, 15)), 1);
        assert_eq!(chargeable_days(overdue, date(2009, 5, 16)), 2);
    }

    #[test]
    fn test_overdue_after_the_fifteenth() {
        // the grace anchor stays at the 15th even when the overdue date falls
        // after it, so the correction term uses the absolute distance
        let overdue = date(2009, 5, 20);
        assert_eq!(chargeable_days(overdue, date(2009, 5, 25)), 11);
        // elapsed 77 - |15 - 20| - 1
        assert_eq!(chargeable_days(overdue, date(2009, 8, 4)), 71);
    }

    #[test]
    fn test_monotone_and_continuous_across_month_boundary() {
        let overdue = date(2009, 5, 3);
        let mut paid = overdue;
        let mut previous = 0;
        // one full year forward, one day at a time
        for _ in 0..365 {
            paid = paid.succ_opt().unwrap();
            let days = chargeable_days(overdue, paid);
            assert!(
                days == previous || days == previous + 1,
                "jump at {paid}: {previous} -> {days}"
            );
            previous = days;
        }
        assert_eq!(previous, chargeable_days(overdue, date(2010, 5, 3)));
    }

    #[test]
    fn test_counts_leap_february() {
        // 2012 is a leap year, so february contributes 29 days
        assert_eq!(chargeable_days(date(2012, 1, 3), date(2012, 3, 5)), 50);
        // 2011 is not
        assert_eq!(chargeable_days(date(2011, 1, 3), date(2011, 3, 5)), 49);
    }

    #[test]
    fn test_century_year_follows_quadrennial_rule() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2100));
        assert!(!is_leap_year(2009));
        // february 2100 counts 29 days under the table's rule
        assert_eq!(chargeable_days(date(2100, 2, 1), date(2100, 3, 1)), 15);
        assert_eq!(chargeable_days(date(2099, 2, 1), date(2099, 3, 1)), 14);
    }
}
