use contracts::billing::payments::{Payment, PaymentListResponse};
use contracts::shared::pagination::PageQuery;
use uuid::Uuid;

use super::ui::list::state::PaymentsFilter;
use crate::shared::api::{self, ApiError};
use crate::shared::list_controller::ListPage;
use crate::shared::query;

const BASE: &str = "/api/billing/payments";

/// Fetch one page of payments. This endpoint nests the total under
/// `pagination`.
pub async fn fetch_payments(
    filter: &PaymentsFilter,
    page: PageQuery,
) -> Result<ListPage<Payment>, ApiError> {
    let path = query::list_path(BASE, filter, page);
    let response: PaymentListResponse = api::get_json(&path).await?;
    Ok(ListPage {
        items: response.payments,
        total_count: response.pagination.total,
    })
}

/// Flags a completed payment as refunded; the record itself is kept.
pub async fn mark_refunded(id: Uuid) -> Result<(), ApiError> {
    api::post_action(&format!("{}/{}/refund", BASE, id)).await
}
