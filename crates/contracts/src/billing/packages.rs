use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub included_minutes: usize,
    pub price: f64,
    pub currency: String,
    pub is_active: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePackageDto {
    pub name: String,
    pub description: Option<String>,
    pub included_minutes: usize,
    pub price: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePackageDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub included_minutes: usize,
    pub price: f64,
}

/// `/api/billing/packages` list shape: the total comes back at the top level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageListResponse {
    pub packages: Vec<Package>,
    pub total: usize,
}
