use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Simulated starting capital every account trades against.
///
/// The spendable trading balance is always derived from this figure minus the
/// capital currently invested in open holdings; it is never stored.
pub const BASE_WALLET_BALANCE: Decimal = dec!(10000);

/// Decimal precision for valuation calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
