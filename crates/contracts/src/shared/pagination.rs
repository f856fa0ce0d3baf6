use serde::{Deserialize, Serialize};

/// Paging parameters sent to every list endpoint.
///
/// `page` is zero-based on the wire; the console shows pages one-based and
/// subtracts one when building this query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: usize,
    pub limit: usize,
}

/// Count envelope used by the endpoints that nest the total
/// (`{"pagination": {"total": N}}`). Other endpoints return `total` at the top
/// level; both shapes exist in the backend and are decoded per endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pagination {
    pub total: usize,
}
