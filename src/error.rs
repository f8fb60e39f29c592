use thiserror::Error;

use crate::transaction::InvoiceStatus;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum FinanceError {
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("invalid deadline: {0}")]
    InvalidDeadline(String),
    #[error("invoice is not awaiting payment (status: {0:?})")]
    NotAwaitingPayment(InvoiceStatus),
}

pub type Result<T> = std::result::Result<T, FinanceError>;
