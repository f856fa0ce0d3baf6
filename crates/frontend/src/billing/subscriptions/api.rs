use contracts::billing::subscriptions::{Subscription, SubscriptionListResponse};
use contracts::shared::pagination::PageQuery;
use uuid::Uuid;

use super::ui::list::state::SubscriptionsFilter;
use crate::shared::api::{self, ApiError};
use crate::shared::list_controller::ListPage;
use crate::shared::query;

const BASE: &str = "/api/billing/subscriptions";

/// Fetch one page of subscriptions. This endpoint nests the total under
/// `pagination`.
pub async fn fetch_subscriptions(
    filter: &SubscriptionsFilter,
    page: PageQuery,
) -> Result<ListPage<Subscription>, ApiError> {
    let path = query::list_path(BASE, filter, page);
    let response: SubscriptionListResponse = api::get_json(&path).await?;
    Ok(ListPage {
        items: response.subscriptions,
        total_count: response.pagination.total,
    })
}

/// Soft cancel: no further renewals; the subscription record is kept with its
/// cancellation timestamp.
pub async fn cancel_subscription(id: Uuid) -> Result<(), ApiError> {
    api::post_action(&format!("{}/{}/cancel", BASE, id)).await
}
