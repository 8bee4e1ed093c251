//! Billing ledger.
//!
//! Invoice status transitions (pending/overdue -> paid) plus aggregate
//! sums. Aggregates are pure reductions recomputed on every call; list
//! sizes are small, so correctness wins over caching.

use crate::error::DomainError;
use crate::models::enums::InvoiceStatus;
use crate::models::Invoice;

#[derive(Debug, Default)]
pub struct BillingLedger {
    invoices: Vec<Invoice>,
}

impl BillingLedger {
    pub fn new(invoices: Vec<Invoice>) -> Self {
        Self { invoices }
    }

    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    /// Pay an invoice. Unknown ids fail with `NotFound`; paying an
    /// already-paid invoice returns it unchanged (idempotent, paid is
    /// terminal).
    pub fn pay(&mut self, id: &str) -> Result<Invoice, DomainError> {
        let invoice = self
            .invoices
            .iter_mut()
            .find(|inv| inv.id == id)
            .ok_or_else(|| DomainError::not_found("invoice", id))?;

        if invoice.status != InvoiceStatus::Paid {
            invoice.status = InvoiceStatus::Paid;
            tracing::info!(invoice_id = %id, amount = invoice.amount, "invoice paid");
        }
        Ok(invoice.clone())
    }

    pub fn total_amount(&self) -> u32 {
        self.invoices.iter().map(|inv| inv.amount).sum()
    }

    pub fn paid_amount(&self) -> u32 {
        self.sum_where(|inv| inv.status == InvoiceStatus::Paid)
    }

    /// Pending + overdue, the "outstanding" card on the billing page.
    pub fn outstanding_amount(&self) -> u32 {
        self.sum_where(|inv| inv.status != InvoiceStatus::Paid)
    }

    fn sum_where(&self, pred: impl Fn(&Invoice) -> bool) -> u32 {
        self.invoices
            .iter()
            .filter(|inv| pred(inv))
            .map(|inv| inv.amount)
            .sum()
    }
}
