use serde::{Deserialize, Serialize};

pub const VIEW_KEY: &str = "users";

/// Filter state of the users screen; non-default fields travel in the URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsersFilter {
    /// "", "active" or "inactive"
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
        let filter = UsersFilter {
            status: "inactive".to_string(),
            search: "alice".to_string(),
        };
        let decoded: UsersFilter = decode_filter(&encode_filter(&filter));
        assert_eq!(decoded, filter);
        assert_eq!(encode_filter(&UsersFilter::default()), "");
    }
}
