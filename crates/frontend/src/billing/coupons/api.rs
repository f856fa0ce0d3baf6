use contracts::billing::coupons::{
    Coupon, CouponListResponse, CreateCouponDto, UpdateCouponDto,
};
use contracts::shared::pagination::PageQuery;
use uuid::Uuid;

use super::ui::list::state::CouponsFilter;
use crate::shared::api::{self, ApiError};
use crate::shared::list_controller::ListPage;
use crate::shared::query;

const BASE: &str = "/api/billing/coupons";

/// Fetch one page of coupons. This endpoint nests the total under
/// `pagination`.
pub async fn fetch_coupons(
    filter: &CouponsFilter,
    page: PageQuery,
) -> Result<ListPage<Coupon>, ApiError> {
    let path = query::list_path(BASE, filter, page);
    let response: CouponListResponse = api::get_json(&path).await?;
    Ok(ListPage {
        items: response.coupons,
        total_count: response.pagination.total,
    })
}

pub async fn create_coupon(dto: &CreateCouponDto) -> Result<Coupon, ApiError> {
    api::post_json(BASE, dto).await
}

pub async fn update_coupon(dto: &UpdateCouponDto) -> Result<Coupon, ApiError> {
    api::put_json(&format!("{}/{}", BASE, dto.id), dto).await
}

/// Soft delete: the coupon stops being redeemable but stays in history.
pub async fn deactivate_coupon(id: Uuid) -> Result<(), ApiError> {
    api::post_action(&format!("{}/{}/deactivate", BASE, id)).await
}
