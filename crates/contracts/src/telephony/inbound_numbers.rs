use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::pagination::Pagination;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundNumber {
    pub id: Uuid,
    pub phone_number: String,
    pub provider: String,
    pub user_id: Uuid,
    pub user_name: String,
    pub sip_host: String,
    pub sip_username: String,
    pub is_active: bool,
    pub created_at: String,
}

/// SIP credential set entered in the provisioning wizard. Sent to the
/// verification endpoint and, once verified, to the create endpoint. Never
/// persisted by the console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipCredential {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCredentialResponse {
    pub ok: bool,
    pub message: Option<String>,
    /// Server-side verification timestamp, echoed back to the console.
    pub verified_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInboundNumberDto {
    pub phone_number: String,
    pub provider: String,
    pub user_id: Uuid,
    pub credential: SipCredential,
}

/// `/api/telephony/inbound-numbers` list shape: the total is nested under
/// `pagination`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundNumberListResponse {
    pub numbers: Vec<InboundNumber>,
    pub pagination: Pagination,
}
