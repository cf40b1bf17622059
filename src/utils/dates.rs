use chrono::{Local, NaiveDate};

const ISO_DATE: &str = "%Y-%m-%d";
const STORED_DATE_FORMATS: &[&str] = &[ISO_DATE, "%Y/%m/%d", "%Y.%m.%d"];

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_DATE).to_string()
}

/// Read a date column written by this tool or typed into the store by hand.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD` and `YYYY.MM.DD`, optionally followed
/// by a time part after a space or `T`. Anything else is `None`.
pub fn parse_stored_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let head = match raw.get(..10) {
        Some(head) if raw.len() > 10 => {
            let rest = &raw[10..];
            if !(rest.starts_with(' ') || rest.starts_with('T')) {
                return None;
            }
            head
        }
        _ => raw,
    };
    STORED_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(head, fmt).ok())
}

/// `value_parser` for date arguments on the command line.
pub fn parse_cli_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), ISO_DATE)
        .map_err(|e| format!("'{}' is not a YYYY-MM-DD date: {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, day).unwrap()
    }

    #[test]
    fn accepts_common_layouts() {
        assert_eq!(parse_stored_date("2025-12-09"), Some(dec(9)));
        assert_eq!(parse_stored_date("2025/12/09"), Some(dec(9)));
        assert_eq!(parse_stored_date("2025.12.09"), Some(dec(9)));
        assert_eq!(parse_stored_date(" 2025-12-09 "), Some(dec(9)));
        assert_eq!(parse_stored_date("2025-12-09 21:30:00"), Some(dec(9)));
        assert_eq!(parse_stored_date("2025-12-09T21:30:00"), Some(dec(9)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_stored_date(""), None);
        assert_eq!(parse_stored_date("yesterday"), None);
        assert_eq!(parse_stored_date("2025-13-01"), None);
        assert_eq!(parse_stored_date("2025-12-09junk"), None);
        assert_eq!(parse_stored_date("2025년 12월 9일"), None);
    }

    #[test]
    fn iso_formatting_round_trips() {
        assert_eq!(format_iso(dec(9)), "2025-12-09");
        assert_eq!(parse_cli_date("2025-12-09"), Ok(dec(9)));
        assert!(parse_cli_date("12/09/2025").is_err());
    }
}
