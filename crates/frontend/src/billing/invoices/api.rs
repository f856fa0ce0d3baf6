use contracts::billing::invoices::{
    CreateInvoiceDto, Invoice, InvoiceListResponse, UpdateInvoiceDto,
};
use contracts::shared::pagination::PageQuery;
use uuid::Uuid;

use super::ui::list::state::InvoicesFilter;
use crate::shared::api::{self, ApiError};
use crate::shared::list_controller::ListPage;
use crate::shared::query;

const BASE: &str = "/api/billing/invoices";

/// Fetch one page of invoices. This endpoint nests the total under
/// `pagination`.
pub async fn fetch_invoices(
    filter: &InvoicesFilter,
    page: PageQuery,
) -> Result<ListPage<Invoice>, ApiError> {
    let path = query::list_path(BASE, filter, page);
    let response: InvoiceListResponse = api::get_json(&path).await?;
    Ok(ListPage {
        items: response.invoices,
        total_count: response.pagination.total,
    })
}

pub async fn create_invoice(dto: &CreateInvoiceDto) -> Result<Invoice, ApiError> {
    api::post_json(BASE, dto).await
}

pub async fn update_invoice(dto: &UpdateInvoiceDto) -> Result<Invoice, ApiError> {
    api::put_json(&format!("{}/{}", BASE, dto.id), dto).await
}

/// Soft cancel: the invoice is flagged cancelled, never deleted.
pub async fn cancel_invoice(id: Uuid) -> Result<(), ApiError> {
    api::post_action(&format!("{}/{}/cancel", BASE, id)).await
}
