use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which side of the transaction a breakdown is computed for. Determines
/// whether the settlement fee is added on top (buyer) or deducted from the
/// payout (seller).
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum TransactionParty {
    Buyer,
    Seller,
}

impl TransactionParty {
    /// Display label the breakdown carries for this perspective.
    pub fn settlement_label(&self) -> &'static str {
        match self {
            TransactionParty::Buyer => "Amount Due",
            TransactionParty::Seller => "Net Payout",
        }
    }
}

/// Payment lifecycle of an invoice. The progression is one-directional
/// (`PaymentRequired` -> `DealFunded` -> `PaymentComplete`) and owned by the
/// surrounding application; this crate only reads it.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    PaymentRequired,
    DealFunded,
    PaymentComplete,
}

/// An invoice record as supplied by the upstream transaction store.
///
/// `deadline` is fixed when the invoice enters `PaymentRequired` and never
/// mutated afterwards; countdowns are recomputed against it on demand.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Invoice {
    pub id: u32,
    pub subtotal: Money,
    pub deadline: DateTime<Utc>,
    pub status: InvoiceStatus,
}
