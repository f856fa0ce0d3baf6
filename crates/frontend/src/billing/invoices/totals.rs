//! Client-side invoice arithmetic.
//!
//! Recomputed on every edit so the editor reflects totals immediately. The
//! backend recomputes on write and stays authoritative; nothing here is
//! treated as persisted truth.

use contracts::billing::invoices::InvoiceItem;

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn line_total(quantity: f64, unit_price: f64) -> f64 {
    round2(quantity * unit_price)
}

pub fn subtotal(items: &[InvoiceItem]) -> f64 {
    round2(items.iter().map(|i| i.total).sum())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvoiceTotals {
    pub subtotal: f64,
    pub discount_amount: f64,
    pub tax_amount: f64,
    pub grand_total: f64,
}

/// `subtotal − discount + tax`, with tax applied to the subtotal.
pub fn compute_totals(items: &[InvoiceItem], discount_amount: f64, tax_rate: f64) -> InvoiceTotals {
    let subtotal = subtotal(items);
    let tax_amount = round2(subtotal * tax_rate);
    let grand_total = round2(subtotal - discount_amount + tax_amount);
    InvoiceTotals {
        subtotal,
        discount_amount,
        tax_amount,
        grand_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: f64, unit_price: f64) -> InvoiceItem {
        InvoiceItem {
            description: "Minutes bundle".to_string(),
            quantity,
            unit_price,
            total: line_total(quantity, unit_price),
        }
    }

    #[test]
    fn test_totals_for_a_single_line() {
        let items = vec![item(2.0, 500.0)];
        let totals = compute_totals(&items, 0.0, 0.1);
        assert_eq!(totals.subtotal, 1000.0);
        assert_eq!(totals.tax_amount, 100.0);
        assert_eq!(totals.grand_total, 1100.0);
    }

    #[test]
    fn test_quantity_edit_recomputes_immediately() {
        let items = vec![item(3.0, 500.0)];
        assert_eq!(items[0].total, 1500.0);
        assert_eq!(compute_totals(&items, 0.0, 0.0).grand_total, 1500.0);
    }

    #[test]
    fn test_discount_is_subtracted_before_totaling() {
        let items = vec![item(2.0, 500.0), item(1.0, 250.0)];
        let totals = compute_totals(&items, 50.0, 0.2);
        assert_eq!(totals.subtotal, 1250.0);
        assert_eq!(totals.tax_amount, 250.0);
        assert_eq!(totals.grand_total, 1450.0);
    }

    #[test]
    fn test_rounding_to_cents() {
        assert_eq!(line_total(3.0, 0.1), 0.3);
        let items = vec![item(1.0, 0.335)];
        assert_eq!(items[0].total, 0.34);
        let totals = compute_totals(&items, 0.0, 0.19);
        assert_eq!(totals.tax_amount, 0.06);
    }
}
