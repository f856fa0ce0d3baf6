use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::pagination::Pagination;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: Uuid,
    pub code: String,
    pub description: Option<String>,
    /// "percent" or "fixed"
    pub discount_type: String,
    pub discount_value: f64,
    pub max_redemptions: Option<usize>,
    pub redemption_count: usize,
    pub is_active: bool,
    pub valid_from: Option<String>,
    pub valid_until: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCouponDto {
    pub code: String,
    pub description: Option<String>,
    pub discount_type: String,
    pub discount_value: f64,
    pub max_redemptions: Option<usize>,
    pub valid_from: Option<String>,
    pub valid_until: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCouponDto {
    pub id: Uuid,
    pub description: Option<String>,
    pub discount_type: String,
    pub discount_value: f64,
    pub max_redemptions: Option<usize>,
    pub valid_from: Option<String>,
    pub valid_until: Option<String>,
}

/// `/api/billing/coupons` list shape: the total is nested under `pagination`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponListResponse {
    pub coupons: Vec<Coupon>,
    pub pagination: Pagination,
}
