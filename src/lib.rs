//! Pure financial computations for the auction marketplace: fee and payout
//! breakdowns, walk-away penalties, and payment-deadline countdowns.
//!
//! Everything here is stateless and side-effect free. Callers supply invoice
//! data and the current time; the crate owns no clock, no storage and no
//! status transitions.

pub mod countdown;
pub mod error;
pub mod fees;
pub mod money;
pub mod summary;
pub mod transaction;
