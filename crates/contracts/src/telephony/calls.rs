use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    pub id: Uuid,
    /// "inbound" or "outbound"
    pub direction: String,
    pub from_number: String,
    pub to_number: String,
    pub user_name: String,
    pub started_at: String,
    pub duration_secs: u64,
    /// "completed", "busy", "no_answer" or "failed"
    pub status: String,
    pub cost: f64,
    pub currency: String,
    pub recording_url: Option<String>,
}

/// `/api/telephony/calls` list shape: the total comes back at the top level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallListResponse {
    pub calls: Vec<CallRecord>,
    pub total: usize,
}
