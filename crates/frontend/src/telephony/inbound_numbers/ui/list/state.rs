use serde::{Deserialize, Serialize};

pub const VIEW_KEY: &str = "inbound-numbers";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InboundNumbersFilter {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub provider: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::{decode_filter, encode_filter};

    #[test]
    fn test_filter_round_trips_through_query_string() {
        let filter = InboundNumbersFilter {
            provider: "telnyx".to_string(),
            search: "+49".to_string(),
        };
        let decoded: InboundNumbersFilter = decode_filter(&encode_filter(&filter));
        assert_eq!(decoded, filter);
        assert_eq!(encode_filter(&InboundNumbersFilter::default()), "");
    }
}
