use chrono::NaiveDate;
use subtle::ConstantTimeEq;

/// Today's organizer password: the date as `YYYYMMDD` followed by the suffix.
pub fn daily_password(today: NaiveDate, suffix: &str) -> String {
    format!("{}{}", today.format("%Y%m%d"), suffix)
}

pub fn verify_password(input: &str, today: NaiveDate, suffix: &str) -> bool {
    let expected = daily_password(today, suffix);
    // Slices of different length compare unequal
    input.as_bytes().ct_eq(expected.as_bytes()).unwrap_u8() == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 9).unwrap()
    }

    #[test]
    fn password_is_date_plus_suffix() {
        assert_eq!(daily_password(day(), "pen"), "20251209pen");
        assert_eq!(daily_password(day(), "컹"), "20251209컹");
    }

    #[test]
    fn only_todays_combination_is_accepted() {
        assert!(verify_password("20251209pen", day(), "pen"));
        assert!(!verify_password("20251208pen", day(), "pen"));
        assert!(!verify_password("20251209", day(), "pen"));
        assert!(!verify_password("20251209pen ", day(), "pen"));
        assert!(!verify_password("", day(), "pen"));
    }

    #[test]
    fn comparison_covers_every_byte() {
        assert!(!verify_password("20251209peN", day(), "pen"));
        assert!(!verify_password("X0251209pen", day(), "pen"));
        assert!(verify_password("20251209컹", day(), "컹"));
    }
}
