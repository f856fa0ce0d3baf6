use contracts::shared::pagination::PageQuery;
use contracts::telephony::inbound_numbers::{
    CreateInboundNumberDto, InboundNumber, InboundNumberListResponse, SipCredential,
    TestCredentialResponse,
};
use uuid::Uuid;

use super::ui::list::state::InboundNumbersFilter;
use crate::shared::api::{self, ApiError};
use crate::shared::list_controller::ListPage;
use crate::shared::query;

const BASE: &str = "/api/telephony/inbound-numbers";

/// Fetch one page of inbound numbers. This endpoint nests the total under
/// `pagination`.
pub async fn fetch_inbound_numbers(
    filter: &InboundNumbersFilter,
    page: PageQuery,
) -> Result<ListPage<InboundNumber>, ApiError> {
    let path = query::list_path(BASE, filter, page);
    let response: InboundNumberListResponse = api::get_json(&path).await?;
    Ok(ListPage {
        items: response.numbers,
        total_count: response.pagination.total,
    })
}

/// Ask the backend to register against the SIP host with this credential set.
pub async fn test_credential(
    credential: &SipCredential,
) -> Result<TestCredentialResponse, ApiError> {
    api::post_json(&format!("{}/test-credential", BASE), credential).await
}

pub async fn create_inbound_number(
    dto: &CreateInboundNumberDto,
) -> Result<InboundNumber, ApiError> {
    api::post_json(BASE, dto).await
}

/// Soft release: the number is returned to the provider pool and the record
/// flagged inactive, nothing is removed.
pub async fn release_inbound_number(id: Uuid) -> Result<(), ApiError> {
    api::post_action(&format!("{}/{}/release", BASE, id)).await
}
