use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::pagination::Pagination;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub amount: f64,
    pub currency: String,
    /// "card", "bank_transfer", "credit" ...
    pub method: String,
    /// "pending", "completed", "failed" or "refunded"
    pub status: String,
    pub invoice_number: Option<String>,
    pub created_at: String,
}

/// `/api/billing/payments` list shape: the total is nested under `pagination`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentListResponse {
    pub payments: Vec<Payment>,
    pub pagination: Pagination,
}
