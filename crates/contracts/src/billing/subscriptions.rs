use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::pagination::Pagination;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub package_id: Uuid,
    pub package_name: String,
    /// "active", "past_due" or "cancelled"
    pub status: String,
    pub started_at: String,
    pub renews_at: Option<String>,
    pub cancelled_at: Option<String>,
}

/// `/api/billing/subscriptions` list shape: the total is nested under
/// `pagination`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionListResponse {
    pub subscriptions: Vec<Subscription>,
    pub pagination: Pagination,
}
