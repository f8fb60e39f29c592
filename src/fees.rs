use crate::money::Money;
use crate::transaction::TransactionParty;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

/// GST charged on every settled transaction.
pub const GST_RATE: Decimal = dec!(0.05);
/// Platform settlement fee rate, charged to both sides.
pub const SETTLEMENT_FEE_RATE: Decimal = dec!(0.025);
/// Flat cap on the settlement fee regardless of subtotal size.
pub const SETTLEMENT_FEE_CAP: Decimal = dec!(125);

/// Below this amount the walk-away penalty uses the high-rate tier.
pub const WALK_AWAY_TIER_THRESHOLD: Decimal = dec!(1000);
pub const WALK_AWAY_LOW_TIER_RATE: Decimal = dec!(0.25);
pub const WALK_AWAY_HIGH_TIER_RATE: Decimal = dec!(0.10);
pub const WALK_AWAY_FEE_CAP: Decimal = dec!(2500);

/// Itemized charges for one side of a settled transaction.
///
/// All values are full precision: no rounding is applied here so that every
/// consumer formatting the same breakdown arrives at the same display figures.
/// Recomputed from scratch on every call; nothing is cached.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct FeeBreakdown {
    pub subtotal: Money,
    pub gst_amount: Money,
    pub settlement_fee: Money,
    /// Amount due (buyer) or net payout (seller).
    pub total: Money,
    pub label: &'static str,
}

/// Computes the GST, capped settlement fee and final total for one party.
///
/// The buyer pays subtotal, tax and fee on top; the seller collects subtotal
/// plus tax from the counterparty and the platform deducts its fee from the
/// payout. Invalid subtotals are unrepresentable: `Money` rejects them at
/// construction.
pub fn compute_fee_breakdown(subtotal: Money, party: TransactionParty) -> FeeBreakdown {
    let subtotal_raw = subtotal.value();
    let gst = subtotal_raw * GST_RATE;
    let settlement_fee = (subtotal_raw * SETTLEMENT_FEE_RATE).min(SETTLEMENT_FEE_CAP);

    // Seller total stays non-negative: the fee is at most 2.5% of the
    // subtotal while GST adds 5%.
    let total = match party {
        TransactionParty::Buyer => subtotal_raw + gst + settlement_fee,
        TransactionParty::Seller => subtotal_raw + gst - settlement_fee,
    };

    FeeBreakdown {
        subtotal,
        gst_amount: Money::from_raw(gst),
        settlement_fee: Money::from_raw(settlement_fee),
        total: Money::from_raw(total),
        label: party.settlement_label(),
    }
}

/// Penalty charged when a party backs out of a won auction.
///
/// Tiered: 25% under $1000, otherwise 10% capped at $2500. Unlike
/// [`compute_fee_breakdown`] this rounds half-up to the nearest whole
/// currency unit, matching how the penalty is invoiced.
pub fn compute_walk_away_fee(amount: Money) -> Money {
    let amount_raw = amount.value();
    let fee = if amount_raw < WALK_AWAY_TIER_THRESHOLD {
        round_to_whole_unit(amount_raw * WALK_AWAY_LOW_TIER_RATE)
    } else {
        round_to_whole_unit(amount_raw * WALK_AWAY_HIGH_TIER_RATE).min(WALK_AWAY_FEE_CAP)
    };
    Money::from_raw(fee)
}

fn round_to_whole_unit(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
