use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    /// Signed amount; positive is a top-up, negative a deduction.
    pub delta: f64,
    pub balance_after: f64,
    pub reason: String,
    pub operator_name: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustCreditDto {
    pub user_id: Uuid,
    pub amount: f64,
    pub reason: String,
}

/// `/api/billing/credits` list shape: the total comes back at the top level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditListResponse {
    pub credits: Vec<CreditEntry>,
    pub total: usize,
}
