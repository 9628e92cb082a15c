use folio_core::{Date, RestClient};
use serde_json::Value;

use crate::cli::{DateArgs, RangeArgs, TransactionArgs};
use crate::error::CliError;

use super::{date_range, to_document};

pub async fn transactions(args: &RangeArgs, client: &RestClient) -> Result<Value, CliError> {
    let range = date_range(args)?;
    to_document(&client.portfolio().transactions(&range).await?)
}

pub async fn transaction(args: &TransactionArgs, client: &RestClient) -> Result<Value, CliError> {
    to_document(&client.transactions().get(args.id).await?)
}

pub async fn summary(args: &DateArgs, client: &RestClient) -> Result<Value, CliError> {
    let date = args.date.unwrap_or_else(Date::today);
    to_document(&client.portfolio().summary(date).await?)
}

pub async fn holdings(args: &DateArgs, client: &RestClient) -> Result<Value, CliError> {
    let date = args.date.unwrap_or_else(Date::today);
    to_document(&client.holdings().get_all(date).await?)
}
