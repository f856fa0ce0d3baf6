use contracts::shared::pagination::PageQuery;
use contracts::system::users::{CreateUserDto, UpdateUserDto, User, UserListResponse};
use uuid::Uuid;

use super::ui::list::state::UsersFilter;
use crate::shared::api::{self, ApiError};
use crate::shared::list_controller::ListPage;
use crate::shared::query;

const BASE: &str = "/api/system/users";

/// Fetch one page of users. This endpoint reports the total at the top level.
pub async fn fetch_users(filter: &UsersFilter, page: PageQuery) -> Result<ListPage<User>, ApiError> {
    let path = query::list_path(BASE, filter, page);
    let response: UserListResponse = api::get_json(&path).await?;
    Ok(ListPage {
        items: response.users,
        total_count: response.total,
    })
}

/// Free-text search used by the user pickers.
pub async fn search_users(query: &str) -> Result<Vec<User>, ApiError> {
    let path = format!("{}/search?q={}", BASE, urlencoding::encode(query));
    let response: UserListResponse = api::get_json(&path).await?;
    Ok(response.users)
}

/// Fetch one user by id. The provisioning wizard uses this to re-verify a
/// picked search result before accepting it.
pub async fn get_user(id: Uuid) -> Result<User, ApiError> {
    api::get_json(&format!("{}/{}", BASE, id)).await
}

pub async fn create_user(dto: &CreateUserDto) -> Result<User, ApiError> {
    api::post_json(BASE, dto).await
}

pub async fn update_user(dto: &UpdateUserDto) -> Result<User, ApiError> {
    api::put_json(&format!("{}/{}", BASE, dto.id), dto).await
}

/// Soft delete: flags the account inactive, nothing is removed.
pub async fn deactivate_user(id: Uuid) -> Result<(), ApiError> {
    api::post_action(&format!("{}/{}/deactivate", BASE, id)).await
}
