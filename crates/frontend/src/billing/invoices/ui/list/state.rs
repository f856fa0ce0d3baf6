use serde::{Deserialize, Serialize};

pub const VIEW_KEY: &str = "invoices";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoicesFilter {
    /// "", "draft", "sent", "paid" or "cancelled"
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
        let filter = InvoicesFilter {
            status: "draft".to_string(),
            search: "INV-2026".to_string(),
        };
        let decoded: InvoicesFilter = decode_filter(&encode_filter(&filter));
        assert_eq!(decoded, filter);
        assert_eq!(encode_filter(&InvoicesFilter::default()), "");
    }
}
