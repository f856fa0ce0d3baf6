use contracts::billing::packages::{
    CreatePackageDto, Package, PackageListResponse, UpdatePackageDto,
};
use contracts::shared::pagination::PageQuery;
use uuid::Uuid;

use super::ui::list::state::PackagesFilter;
use crate::shared::api::{self, ApiError};
use crate::shared::list_controller::ListPage;
use crate::shared::query;

const BASE: &str = "/api/billing/packages";

/// Fetch one page of packages. This endpoint reports the total at the top
/// level.
pub async fn fetch_packages(
    filter: &PackagesFilter,
    page: PageQuery,
) -> Result<ListPage<Package>, ApiError> {
    let path = query::list_path(BASE, filter, page);
    let response: PackageListResponse = api::get_json(&path).await?;
    Ok(ListPage {
        items: response.packages,
        total_count: response.total,
    })
}

pub async fn create_package(dto: &CreatePackageDto) -> Result<Package, ApiError> {
    api::post_json(BASE, dto).await
}

pub async fn update_package(dto: &UpdatePackageDto) -> Result<Package, ApiError> {
    api::put_json(&format!("{}/{}", BASE, dto.id), dto).await
}

/// Soft delete: existing subscriptions keep the package, new ones cannot
/// select it.
pub async fn deactivate_package(id: Uuid) -> Result<(), ApiError> {
    api::post_action(&format!("{}/{}/deactivate", BASE, id)).await
}
