use contracts::billing::credits::{AdjustCreditDto, CreditEntry, CreditListResponse};
use contracts::shared::pagination::PageQuery;

use super::ui::list::state::CreditsFilter;
use crate::shared::api::{self, ApiError};
use crate::shared::list_controller::ListPage;
use crate::shared::query;

const BASE: &str = "/api/billing/credits";

/// Fetch one page of the credit ledger. This endpoint reports the total at
/// the top level.
pub async fn fetch_credits(
    filter: &CreditsFilter,
    page: PageQuery,
) -> Result<ListPage<CreditEntry>, ApiError> {
    let path = query::list_path(BASE, filter, page);
    let response: CreditListResponse = api::get_json(&path).await?;
    Ok(ListPage {
        items: response.credits,
        total_count: response.total,
    })
}

/// Book a manual credit adjustment for a user; the ledger entry records the
/// acting operator.
pub async fn adjust_credit(dto: &AdjustCreditDto) -> Result<CreditEntry, ApiError> {
    api::post_json(&format!("{}/adjust", BASE), dto).await
}
