use crate::countdown::{CountdownState, compute_countdown};
use crate::error::{FinanceError, Result};
use crate::fees::{FeeBreakdown, compute_fee_breakdown};
use crate::transaction::{Invoice, InvoiceStatus, TransactionParty};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything the invoice view needs in one record: the itemized charges for
/// the requested party and the live countdown to the payment deadline.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct InvoiceSummary {
    pub fees: FeeBreakdown,
    pub countdown: CountdownState,
}

/// Derives the financial summary of an invoice as seen at `now`.
///
/// Only an invoice awaiting payment has a live deadline; once the deal is
/// funded or complete there is nothing left to count down or collect, so any
/// other status is rejected rather than summarized with stale figures.
pub fn summarize_invoice(
    invoice: &Invoice,
    party: TransactionParty,
    now: DateTime<Utc>,
) -> Result<InvoiceSummary> {
    if invoice.status != InvoiceStatus::PaymentRequired {
        return Err(FinanceError::NotAwaitingPayment(invoice.status));
    }

    Ok(InvoiceSummary {
        fees: compute_fee_breakdown(invoice.subtotal, party),
        countdown: compute_countdown(invoice.deadline, now),
    })
}
