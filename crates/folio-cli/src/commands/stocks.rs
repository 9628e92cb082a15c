use folio_core::RestClient;
use serde_json::Value;

use crate::cli::{PricesArgs, StockArgs, StocksArgs};
use crate::error::CliError;

use super::{date_range, to_document};

pub async fn list(args: &StocksArgs, client: &RestClient) -> Result<Value, CliError> {
    let stocks = client.stocks();
    let query = args.query.as_deref().map(str::trim).filter(|query| !query.is_empty());

    let found = match (query, args.date) {
        (Some(query), Some(date)) => stocks.find_on(query, date).await?,
        (Some(query), None) => stocks.find(query).await?,
        (None, Some(date)) => stocks.get_all_on(date).await?,
        (None, None) => stocks.get_all().await?,
    };
    tracing::debug!(count = found.len(), "stocks returned");

    to_document(&found)
}

pub async fn show(args: &StockArgs, client: &RestClient) -> Result<Value, CliError> {
    let stocks = client.stocks();

    if args.history {
        return to_document(&stocks.history(args.id).await?);
    }
    let stock = match args.date {
        Some(date) => stocks.get_on(args.id, date).await?,
        None => stocks.get(args.id).await?,
    };
    to_document(&stock)
}

pub async fn prices(args: &PricesArgs, client: &RestClient) -> Result<Value, CliError> {
    let range = date_range(&args.range)?;
    let prices = client.stocks().closing_prices(args.id, &range).await?;
    to_document(&prices)
}
