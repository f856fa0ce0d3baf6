use serde::{Deserialize, Serialize};

pub const VIEW_KEY: &str = "payments";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentsFilter {
    /// "", "pending", "completed", "failed" or "refunded"
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub from: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub to: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::{decode_filter, encode_filter};

    #[test]
    fn test_filter_round_trips_through_query_string() {
        let filter = PaymentsFilter {
            status: "refunded".to_string(),
            from: "2026-01-01".to_string(),
            to: "2026-06-30".to_string(),
        };
        let decoded: PaymentsFilter = decode_filter(&encode_filter(&filter));
        assert_eq!(decoded, filter);
        assert_eq!(encode_filter(&PaymentsFilter::default()), "");
    }
}
