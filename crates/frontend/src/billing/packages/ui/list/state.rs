use serde::{Deserialize, Serialize};

pub const VIEW_KEY: &str = "packages";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackagesFilter {
    /// "", "true" or "false"
    #[serde(skip_serializing_if = "String::is_empty")]
    pub active: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::{decode_filter, encode_filter};

    #[test]
    fn test_filter_round_trips_through_query_string() {
        let filter = PackagesFilter {
            active: "true".to_string(),
        };
        let decoded: PackagesFilter = decode_filter(&encode_filter(&filter));
        assert_eq!(decoded, filter);
        assert_eq!(encode_filter(&PackagesFilter::default()), "");
    }
}
