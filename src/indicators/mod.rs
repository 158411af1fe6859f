//! Indicator bank: pure functions from price series to aligned derived
//! series.

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;

pub use momentum::*;
pub use structure::*;
pub use trend::*;
pub use volatility::*;
