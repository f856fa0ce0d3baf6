use contracts::shared::pagination::PageQuery;
use contracts::telephony::calls::{CallListResponse, CallRecord};

use super::ui::list::state::CallsFilter;
use crate::shared::api::{self, ApiError};
use crate::shared::list_controller::ListPage;
use crate::shared::query;

const BASE: &str = "/api/telephony/calls";

/// Fetch one page of call history. This endpoint reports the total at the top
/// level.
pub async fn fetch_calls(
    filter: &CallsFilter,
    page: PageQuery,
) -> Result<ListPage<CallRecord>, ApiError> {
    let path = query::list_path(BASE, filter, page);
    let response: CallListResponse = api::get_json(&path).await?;
    Ok(ListPage {
        items: response.calls,
        total_count: response.total,
    })
}
