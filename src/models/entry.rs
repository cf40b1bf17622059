use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One journal row as stored: the day it was written for and the raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub date: NaiveDate,
    pub text: String,
}

impl Entry {
    pub fn new(date: NaiveDate, text: impl Into<String>) -> Self {
        Self {
            date,
            text: text.into(),
        }
    }

    /// Only entries with non-blank text count toward a written day.
    pub fn is_written(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, d).unwrap()
    }

    #[test]
    fn whitespace_only_text_is_not_written() {
        assert!(!Entry::new(day(9), "").is_written());
        assert!(!Entry::new(day(9), "  \n\t ").is_written());
        assert!(Entry::new(day(9), "  draft  ").is_written());
    }

    #[test]
    fn serializes_date_as_iso() {
        let json = serde_json::to_string(&Entry::new(day(9), "hi")).unwrap();
        assert_eq!(json, r#"{"date":"2025-12-09","text":"hi"}"#);
    }
}
