use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::pagination::Pagination;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    pub number: String,
    pub user_id: Uuid,
    pub user_name: String,
    /// "draft", "sent", "paid" or "cancelled"
    pub status: String,
    pub currency: String,
    pub items: Vec<InvoiceItem>,
    pub discount_amount: f64,
    pub tax_rate: f64,
    pub subtotal: f64,
    pub tax_amount: f64,
    pub total: f64,
    pub due_date: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInvoiceDto {
    pub user_id: Uuid,
    pub currency: String,
    pub items: Vec<InvoiceItem>,
    pub discount_amount: f64,
    pub tax_rate: f64,
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateInvoiceDto {
    pub id: Uuid,
    pub items: Vec<InvoiceItem>,
    pub discount_amount: f64,
    pub tax_rate: f64,
    pub due_date: Option<String>,
}

/// `/api/billing/invoices` list shape: the total is nested under `pagination`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceListResponse {
    pub invoices: Vec<Invoice>,
    pub pagination: Pagination,
}
