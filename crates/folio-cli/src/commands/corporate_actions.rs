use folio_core::RestClient;
use serde_json::Value;

use crate::cli::CorporateActionsArgs;
use crate::error::CliError;

use super::to_document;

pub async fn run(args: &CorporateActionsArgs, client: &RestClient) -> Result<Value, CliError> {
    let actions = client.corporate_actions().get_all(args.stock).await?;
    tracing::debug!(stock = %args.stock, count = actions.len(), "corporate actions returned");
    to_document(&actions)
}
