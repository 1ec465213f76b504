//! Market data provider implementations.

pub mod fmp;
pub mod null;
pub mod traits;

pub use fmp::FmpProvider;
pub use null::NullProvider;
pub use traits::MarketDataProvider;
