use rust_decimal::Decimal;
use serde::Serialize;

use crate::ledger::Transaction;

/// Unrealized gain/loss in both absolute and percentage form.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GainLoss {
    pub dollar: Decimal,
    pub percent: Decimal,
}

impl GainLoss {
    pub const ZERO: GainLoss = GainLoss {
        dollar: Decimal::ZERO,
        percent: Decimal::ZERO,
    };

    /// Percent is defined as 0 when nothing is invested.
    pub fn from_invested(invested: Decimal, current_value: Decimal) -> Self {
        let dollar = current_value - invested;
        let percent = if invested.is_zero() {
            Decimal::ZERO
        } else {
            dollar / invested * Decimal::ONE_HUNDRED
        };
        Self { dollar, percent }
    }
}

/// One holding valued against the latest quote.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionValuation {
    pub symbol: String,
    pub quantity: i64,
    pub average_cost: Decimal,
    pub invested: Decimal,
    /// Live quote, or the cost basis when none was available.
    pub current_price: Decimal,
    pub current_value: Decimal,
    pub gain_loss: GainLoss,
    /// True when no live quote was available and `current_price` fell back to
    /// the cost basis; the valuation understates real market movement.
    pub price_stale: bool,
}

/// Aggregated portfolio view for one user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Derived trading balance.
    pub wallet_balance: Decimal,
    pub total_invested: Decimal,
    pub total_current_value: Decimal,
    pub total_gain_loss: GainLoss,
    pub holdings: Vec<PositionValuation>,
    /// Full trade history, most recent first.
    pub transactions: Vec<Transaction>,
}
