//! Endpoint wrappers, one per service resource.
//!
//! | Resource | Paths |
//! |----------|-------|
//! | [`StockResource`] | `stocks…` |
//! | [`TradingCalendarResource`] | `tradingcalendars/{year}` |
//! | [`CorporateActionResource`] | `stocks/{stock}/corporateactions…` |
//! | [`PortfolioResource`] | `portfolio…` |
//! | [`HoldingResource`] | `portfolio/{portfolio}/holdings…` |
//! | [`TransactionResource`] | `portfolio/{portfolio}/transactions…` |
//! | [`UserResource`] | `users/authenticate` |
//!
//! Each wrapper borrows the client's transport and session, builds the path
//! and query string, and hands typed payloads to the transport.

mod corporate_actions;
mod holdings;
mod portfolios;
mod stocks;
mod trading_calendars;
mod transactions;
mod users;

pub use corporate_actions::CorporateActionResource;
pub use holdings::HoldingResource;
pub use portfolios::PortfolioResource;
pub use stocks::StockResource;
pub use trading_calendars::TradingCalendarResource;
pub use transactions::TransactionResource;
pub use users::UserResource;

use crate::domain::{Date, DateRange, ValueFrequency};
use crate::serialization::wire_name;

fn date_query(date: Date) -> String {
    format!("date={date}")
}

fn range_query(range: &DateRange) -> String {
    format!("fromdate={}&todate={}", range.from_date, range.to_date)
}

fn frequency_query(frequency: ValueFrequency) -> String {
    format!("frequency={}", wire_name(&frequency).unwrap_or_default())
}
