//! Calendar helpers

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Oldest age accepted as plausible
pub const MAX_AGE: u32 = 150;

/// `YYYY-MM-DD` in UTC
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Whole years between `birth_date` and `today`
///
/// Returns a negative number when `birth_date` is in the future.
pub fn calculate_age(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();

    let birthday_pending = (today.month(), today.day()) < (birth_date.month(), birth_date.day());
    if birthday_pending {
        age -= 1;
    }

    age
}

/// Age as of the current UTC date
pub fn age_today(birth_date: NaiveDate) -> i32 {
    calculate_age(birth_date, Utc::now().date_naive())
}

pub fn is_valid_age(age: i32) -> bool {
    age > 0 && (age as u32) < MAX_AGE
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 7, 23, 59, 1).unwrap();
        assert_eq!(format_date(dt), "2024-03-07");
    }

    #[test]
    fn test_age_after_birthday() {
        assert_eq!(calculate_age(date(1990, 5, 10), date(2024, 6, 1)), 34);
    }

    #[test]
    fn test_age_on_birthday() {
        assert_eq!(calculate_age(date(1990, 5, 10), date(2024, 5, 10)), 34);
    }

    #[test]
    fn test_age_before_birthday() {
        assert_eq!(calculate_age(date(1990, 5, 10), date(2024, 5, 9)), 33);
        assert_eq!(calculate_age(date(1990, 12, 1), date(2024, 1, 15)), 33);
    }

    #[test]
    fn test_leap_day_birthday() {
        assert_eq!(calculate_age(date(2000, 2, 29), date(2023, 2, 28)), 22);
        assert_eq!(calculate_age(date(2000, 2, 29), date(2023, 3, 1)), 23);
    }

    #[test]
    fn test_age_today_is_non_negative_for_past_dates() {
        assert!(age_today(date(1970, 1, 1)) >= 54);
    }

    #[test]
    fn test_is_valid_age() {
        assert!(is_valid_age(1));
        assert!(is_valid_age(149));
        assert!(!is_valid_age(0));
        assert!(!is_valid_age(-3));
        assert!(!is_valid_age(150));
    }
}
