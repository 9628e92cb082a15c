//! CLI argument definitions for folio.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `stocks` | List or search stocks |
//! | `stock` | One stock, optionally its history |
//! | `prices` | Closing prices for a stock over a date range |
//! | `calendar` | Non-trading days for a year |
//! | `corporate-actions` | Corporate actions for a stock |
//! | `transactions` | Portfolio transactions over a date range |
//! | `transaction` | One portfolio transaction |
//! | `summary` | Portfolio summary on a date |
//! | `holdings` | Portfolio holdings on a date |
//!
//! # Global Options
//!
//! | Option | Env | Default | Description |
//! |--------|-----|---------|-------------|
//! | `--url` | `FOLIO_API_URL` | | Service base URL |
//! | `--user` | `FOLIO_USER` | | Sign in as this user |
//! | `--password` | `FOLIO_PASSWORD` | | Password for `--user` |
//! | `--portfolio` | | | Portfolio id for portfolio commands |
//! | `--timeout-ms` | `FOLIO_TIMEOUT_MS` | `30000` | Request timeout in ms |
//! | `--pretty` | | `false` | Pretty-print JSON output |
//! | `-v`, `--verbose` | | `false` | Debug logging on stderr |
//!
//! # Examples
//!
//! ```bash
//! folio --url http://localhost:5000/api/v2 stocks --query ARG
//! folio --user joe --password secret --portfolio 5D5DE669-726C-4C5D-BB2E-6BDF36AF9ABA \
//!     transactions --from 2020-07-01 --to 2021-06-30 --pretty
//! ```

use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

use folio_core::client::config::{DEFAULT_TIMEOUT_MS, ENV_API_URL, ENV_TIMEOUT_MS};
use folio_core::Date;

/// Command-line client for the portfolio service.
#[derive(Debug, Parser)]
#[command(name = "folio", author, version, about = "Portfolio service client")]
pub struct Cli {
    /// Service base URL, for example http://localhost:5000/api/v2.
    #[arg(long, global = true, env = ENV_API_URL)]
    pub url: Option<String>,

    /// User to authenticate as before running the command.
    #[arg(long, global = true, env = "FOLIO_USER", requires = "password")]
    pub user: Option<String>,

    #[arg(long, global = true, env = "FOLIO_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Portfolio used by portfolio-scoped commands.
    #[arg(long, global = true)]
    pub portfolio: Option<Uuid>,

    /// Request timeout budget in milliseconds.
    #[arg(long, global = true, env = ENV_TIMEOUT_MS, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Log requests and responses at debug level.
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List stocks, or search by ASX code or name.
    ///
    /// # Examples
    ///
    ///   folio stocks
    ///   folio stocks --query ARG --date 2020-01-31
    Stocks(StocksArgs),

    /// Show one stock.
    Stock(StockArgs),

    /// Closing prices for a stock between two dates.
    Prices(PricesArgs),

    /// Non-trading days for a calendar year.
    Calendar(CalendarArgs),

    /// Corporate actions recorded against a stock.
    CorporateActions(CorporateActionsArgs),

    /// Transactions in the selected portfolio between two dates.
    Transactions(RangeArgs),

    /// One transaction by id.
    Transaction(TransactionArgs),

    /// Summary of the selected portfolio.
    Summary(DateArgs),

    /// Holdings of the selected portfolio.
    Holdings(DateArgs),
}

/// Arguments for the `stocks` command.
#[derive(Debug, Args)]
pub struct StocksArgs {
    /// Free-form search on ASX code or name.
    #[arg(long)]
    pub query: Option<String>,

    /// Report stock properties as at this date (YYYY-MM-DD).
    #[arg(long)]
    pub date: Option<Date>,
}

/// Arguments for the `stock` command.
#[derive(Debug, Args)]
pub struct StockArgs {
    pub id: Uuid,

    /// Show the full property and dividend-rule history instead.
    #[arg(long, default_value_t = false, conflicts_with = "date")]
    pub history: bool,

    #[arg(long)]
    pub date: Option<Date>,
}

/// Arguments for the `prices` command.
#[derive(Debug, Args)]
pub struct PricesArgs {
    pub id: Uuid,

    #[command(flatten)]
    pub range: RangeArgs,
}

#[derive(Debug, Args)]
pub struct CalendarArgs {
    pub year: i32,
}

#[derive(Debug, Args)]
pub struct CorporateActionsArgs {
    pub stock: Uuid,
}

/// Inclusive date range.
#[derive(Debug, Args)]
pub struct RangeArgs {
    /// First day (YYYY-MM-DD).
    #[arg(long)]
    pub from: Date,

    /// Last day (YYYY-MM-DD).
    #[arg(long)]
    pub to: Date,
}

#[derive(Debug, Args)]
pub struct TransactionArgs {
    pub id: Uuid,
}

/// Single report date; defaults to today.
#[derive(Debug, Args)]
pub struct DateArgs {
    #[arg(long)]
    pub date: Option<Date>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_dates_and_ids() {
        let cli = Cli::try_parse_from([
            "folio",
            "--url",
            "http://localhost:5000/api/v2",
            "prices",
            "5d5de669-726c-4c5d-bb2e-6bdf36af9aba",
            "--from",
            "2020-01-01",
            "--to",
            "2020-01-31",
        ])
        .expect("must parse");

        let Command::Prices(args) = cli.command else {
            panic!("expected prices command");
        };
        assert_eq!(args.range.from, Date::new(2020, 1, 1).expect("valid"));
        assert_eq!(args.range.to.to_iso_string(), "2020-01-31");
    }

    #[test]
    fn rejects_malformed_dates() {
        let result = Cli::try_parse_from(["folio", "summary", "--date", "31/01/2020"]);
        assert!(result.is_err());
    }

    #[test]
    fn user_requires_password() {
        let result = Cli::try_parse_from(["folio", "--user", "joe", "stocks"]);
        assert!(result.is_err());
    }
}
