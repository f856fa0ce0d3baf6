use serde::{Deserialize, Serialize};

pub const VIEW_KEY: &str = "subscriptions";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionsFilter {
    /// "", "active", "past_due" or "cancelled"
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::{decode_filter, encode_filter};

    #[test]
    fn test_filter_round_trips_through_query_string() {
        let filter = SubscriptionsFilter {
            status: "past_due".to_string(),
            search: "acme".to_string(),
        };
        let decoded: SubscriptionsFilter = decode_filter(&encode_filter(&filter));
        assert_eq!(decoded, filter);
        assert_eq!(encode_filter(&SubscriptionsFilter::default()), "");
    }
}
