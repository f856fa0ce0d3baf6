use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

pub const VIEW_KEY: &str = "calls";

/// Filter state of the call-history screen; non-default fields travel in the
/// URL. Empty date bounds mean "no bound".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallsFilter {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub from: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub to: String,
    /// "", "completed", "busy", "no_answer" or "failed"
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    /// "", "inbound" or "outbound"
    #[serde(skip_serializing_if = "String::is_empty")]
    pub direction: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
}

/// First and last day of the current month, for the quick-range button.
pub fn current_month_range() -> (String, String) {
    let now = Utc::now().date_naive();
    let year = now.year();
    let month = now.month();
    let month_start =
        chrono::NaiveDate::from_ymd_opt(year, month, 1).expect("Invalid month start date");
    let month_end = if month == 12 {
        chrono::NaiveDate::from_ymd_opt(year + 1, 1, 1)
            .map(|d| d - chrono::Duration::days(1))
            .expect("Invalid month end date")
    } else {
        chrono::NaiveDate::from_ymd_opt(year, month + 1, 1)
            .map(|d| d - chrono::Duration::days(1))
            .expect("Invalid month end date")
    };
    (
        month_start.format("%Y-%m-%d").to_string(),
        month_end.format("%Y-%m-%d").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::{decode_filter, encode_filter, encode_state};

    #[test]
    fn test_filter_round_trips_through_query_string() {
        let filter = CallsFilter {
            from: "2026-07-01".to_string(),
            to: "2026-07-31".to_string(),
            status: "no_answer".to_string(),
            direction: "inbound".to_string(),
            search: "+4930".to_string(),
        };
        let decoded: CallsFilter = decode_filter(&encode_filter(&filter));
        assert_eq!(decoded, filter);
    }

    #[test]
    fn test_default_filter_encodes_empty() {
        assert_eq!(encode_filter(&CallsFilter::default()), "");
        assert_eq!(encode_state(&CallsFilter::default(), 1), "");
    }

    #[test]
    fn test_current_month_range_shape() {
        let (from, to) = current_month_range();
        assert_eq!(from.len(), 10);
        assert_eq!(to.len(), 10);
        assert!(from.ends_with("-01"));
        assert!(from < to);
    }
}
