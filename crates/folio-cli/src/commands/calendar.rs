use folio_core::RestClient;
use serde_json::Value;

use crate::cli::CalendarArgs;
use crate::error::CliError;

use super::to_document;

pub async fn run(args: &CalendarArgs, client: &RestClient) -> Result<Value, CliError> {
    let calendar = client.trading_calendars().get(args.year).await?;
    to_document(&calendar)
}
