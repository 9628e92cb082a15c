//! # Folio Core
//!
//! Typed client SDK for the portfolio-management REST service.
//!
//! ## Overview
//!
//! - **Calendar scalars** with fixed wire forms (`YYYY-MM-DD`, `HH:MM:SS`)
//! - **Domain payloads** for stocks, portfolios, holdings and trading calendars
//! - **Polymorphic families** ([`Transaction`], [`CorporateAction`]) selected by a
//!   `type` discriminator through a per-family registry
//! - **Serializer facade** applying the wire conventions in one place
//! - **REST client** with immutable sessions over a pluggable HTTP transport
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, session, configuration and resource wrappers |
//! | [`domain`] | Scalars and payload types |
//! | [`error`] | Error types |
//! | [`http_client`] | HTTP transport abstraction and reqwest implementation |
//! | [`serialization`] | Naming, registry, polymorphic codec and facade |
//!
//! ## Wire conventions
//!
//! | Rule | Example |
//! |------|---------|
//! | Members are lowerCamelCase | `transactionDate` |
//! | Enumerants are lowerCamelCase strings | `"roundDown"` |
//! | Absent optional members are omitted on write | no `"comment"` key |
//! | Missing or `null` members read as defaults | `0`, `""`, `0001-01-01` |
//! | Unknown members are ignored on read | |
//! | Family members always carry `type` | `"type":"capitalReturn"` |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use folio_core::{ClientConfig, Date, RestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RestClient::new(ClientConfig::from_env()?)?
//!         .authenticate("JoeBlogs", "secret")
//!         .await?;
//!
//!     for stock in client.stocks().get_all_on(Date::today()).await? {
//!         println!("{:?} {}", stock.asx_code, stock.last_price);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod serialization;

pub use client::{ClientConfig, RestClient, RestTransport, Session};
pub use domain::{
    CorporateAction, CorporateActionDetails, CorporateActionType, Date, DateRange, DateTime, Time,
    Transaction, TransactionDetails, TransactionType,
};
pub use error::{CodecError, DecodeError, FormatError, RegistryBuildError, RestError};
pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient,
};
pub use serialization::{PayloadSerializer, Polymorphic};
