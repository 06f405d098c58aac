//! Calendar constants and Gregorian month lengths.

/// First year covered by the station archives.
pub const FIRST_YEAR: i32 = 1995;
/// Last year covered by the station archives.
pub const LAST_YEAR: i32 = 2023;
/// Number of years between `FIRST_YEAR` and `LAST_YEAR` inclusive.
pub const YEAR_COUNT: usize = (LAST_YEAR - FIRST_YEAR + 1) as usize;

pub const MONTHS_PER_YEAR: usize = 12;
pub const DAY_SLOTS: usize = 31;

pub fn is_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-based) of `year`.
pub fn days_in_month(year: i32, month: usize) -> usize {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap(year) => 29,
        2 => 28,
        _ => 31,
    }
}

pub fn days_in_year(year: i32) -> usize {
    if is_leap(year) {
        366
    } else {
        365
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn should_apply_gregorian_leap_rule() {
        assert!(is_leap(2000));
        assert!(!is_leap(1900));
        assert!(is_leap(2004));
        assert!(!is_leap(2023));
        assert!(is_leap(1996));
        assert!(!is_leap(1997));
    }

    #[test]
    fn should_sum_month_lengths_to_year_length() {
        for year in FIRST_YEAR..=LAST_YEAR {
            let total: usize = (1..=MONTHS_PER_YEAR).map(|m| days_in_month(year, m)).sum();
            assert_eq!(total, days_in_year(year), "year {}", year);
        }
    }

    #[test]
    fn should_cover_twenty_nine_years() {
        assert_eq!(YEAR_COUNT, 29);
    }

    #[test]
    fn should_give_february_length_by_leap_status() {
        assert_eq!(days_in_month(1996, 2), 29);
        assert_eq!(days_in_month(1997, 2), 28);
        assert_eq!(days_in_month(1997, 4), 30);
        assert_eq!(days_in_month(1997, 12), 31);
    }
}
