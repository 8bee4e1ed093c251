use serde::{Deserialize, Serialize};

use super::enums::InvoiceStatus;

/// A billing invoice. Amounts are whole currency units; `Paid` is terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub date: String,
    pub amount: u32,
    pub status: InvoiceStatus,
    pub description: String,
}
