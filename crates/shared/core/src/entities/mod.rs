mod holding;
mod portfolio;
mod side;
mod trade;

pub use holding::Holding;
pub use portfolio::{Portfolio, PortfolioSummary};
pub use side::Side;
pub use trade::{TradeIntent, TradeRecord};
