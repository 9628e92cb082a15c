mod calendar;
mod corporate_actions;
mod portfolio;
mod stocks;

use std::io::Write;

use folio_core::client::config::ENV_API_URL;
use folio_core::{ClientConfig, DateRange, PayloadSerializer, RestClient, RestError};
use serde::Serialize;
use serde_json::Value;

use crate::cli::{Cli, Command, RangeArgs};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<Value, CliError> {
    let client = connect(cli).await?;

    match &cli.command {
        Command::Stocks(args) => stocks::list(args, &client).await,
        Command::Stock(args) => stocks::show(args, &client).await,
        Command::Prices(args) => stocks::prices(args, &client).await,
        Command::Calendar(args) => calendar::run(args, &client).await,
        Command::CorporateActions(args) => corporate_actions::run(args, &client).await,
        Command::Transactions(args) => portfolio::transactions(args, &client).await,
        Command::Transaction(args) => portfolio::transaction(args, &client).await,
        Command::Summary(args) => portfolio::summary(args, &client).await,
        Command::Holdings(args) => portfolio::holdings(args, &client).await,
    }
}

/// Write one JSON document to stdout through the payload serializer.
pub fn render(document: &Value, pretty: bool) -> Result<(), CliError> {
    let serializer = PayloadSerializer::new()?;
    let mut stdout = std::io::stdout().lock();

    if pretty {
        serializer.serialize_to_writer_pretty(&mut stdout, document)?;
    } else {
        serializer.serialize_to_writer(&mut stdout, document)?;
    }
    writeln!(stdout)?;
    Ok(())
}

async fn connect(cli: &Cli) -> Result<RestClient, CliError> {
    let url = cli.url.as_deref().ok_or_else(|| {
        RestError::InvalidConfig(format!("--url or {ENV_API_URL} is required"))
    })?;
    let config = ClientConfig::new(url)?.with_timeout_ms(cli.timeout_ms);
    let mut client = RestClient::new(config)?;

    if let (Some(user), Some(password)) = (cli.user.as_deref(), cli.password.as_deref()) {
        tracing::info!(user, "authenticating");
        client = client.authenticate(user, password).await?;
    }
    if let Some(portfolio) = cli.portfolio {
        client = client.with_portfolio(portfolio);
    }

    Ok(client)
}

fn to_document<T>(value: &T) -> Result<Value, CliError>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_value(value)?)
}

fn date_range(args: &RangeArgs) -> Result<DateRange, CliError> {
    Ok(DateRange::new(args.from, args.to)?)
}

#[cfg(test)]
mod tests {
    use folio_core::Date;

    use super::*;

    #[test]
    fn inverted_range_is_rejected() {
        let args = RangeArgs {
            from: Date::new(2021, 6, 30).expect("valid"),
            to: Date::new(2020, 7, 1).expect("valid"),
        };
        let err = date_range(&args).expect_err("must fail");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn documents_keep_decimal_text() {
        let value: Value = serde_json::from_str(r#"{"price":12.00}"#).expect("must parse");
        let document = to_document(&value).expect("must encode");
        assert_eq!(
            PayloadSerializer::new()
                .expect("must build")
                .serialize(&document)
                .expect("must encode"),
            r#"{"price":12.00}"#
        );
    }
}
