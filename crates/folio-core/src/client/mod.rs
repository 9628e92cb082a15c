//! REST client for the portfolio service.
//!
//! [`RestClient`] pairs a shared [`RestTransport`] with an immutable
//! [`Session`]. Signing in, signing out and selecting a portfolio return new
//! clients; the transport is shared between them.

pub mod config;
pub mod resources;
pub mod session;
pub mod transport;

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use uuid::Uuid;

pub use config::ClientConfig;
pub use resources::{
    CorporateActionResource, HoldingResource, PortfolioResource, StockResource,
    TradingCalendarResource, TransactionResource, UserResource,
};
pub use session::Session;
pub use transport::RestTransport;

use crate::http_client::{HttpClient, ReqwestHttpClient};
use crate::RestError;

#[derive(Clone)]
pub struct RestClient {
    transport: Arc<RestTransport>,
    session: Session,
}

impl RestClient {
    /// Client over reqwest with an anonymous session.
    pub fn new(config: ClientConfig) -> Result<Self, RestError> {
        let http = Arc::new(ReqwestHttpClient::new(&config.user_agent));
        Self::with_http_client(config, http)
    }

    pub fn with_http_client(
        config: ClientConfig,
        http: Arc<dyn HttpClient>,
    ) -> Result<Self, RestError> {
        Ok(Self {
            transport: Arc::new(RestTransport::new(config, http)?),
            session: Session::anonymous(),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn transport(&self) -> &RestTransport {
        &self.transport
    }

    /// Sign in and return a client carrying the issued token.
    ///
    /// On failure `self` is unchanged and keeps whatever session it had.
    pub async fn authenticate(&self, user_name: &str, password: &str) -> Result<Self, RestError> {
        let session = self.users().authenticate(user_name, password).await?;
        Ok(self.with_session(session))
    }

    pub fn sign_out(&self) -> Self {
        self.with_session(self.session.signed_out())
    }

    pub fn with_portfolio(&self, portfolio: Uuid) -> Self {
        self.with_session(self.session.with_portfolio(portfolio))
    }

    pub fn stocks(&self) -> StockResource<'_> {
        StockResource::new(&self.transport, &self.session)
    }

    pub fn trading_calendars(&self) -> TradingCalendarResource<'_> {
        TradingCalendarResource::new(&self.transport, &self.session)
    }

    pub fn corporate_actions(&self) -> CorporateActionResource<'_> {
        CorporateActionResource::new(&self.transport, &self.session)
    }

    pub fn portfolio(&self) -> PortfolioResource<'_> {
        PortfolioResource::new(&self.transport, &self.session)
    }

    pub fn holdings(&self) -> HoldingResource<'_> {
        HoldingResource::new(&self.transport, &self.session)
    }

    pub fn transactions(&self) -> TransactionResource<'_> {
        TransactionResource::new(&self.transport, &self.session)
    }

    pub fn users(&self) -> UserResource<'_> {
        UserResource::new(&self.transport, &self.session)
    }

    fn with_session(&self, session: Session) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            session,
        }
    }
}

impl Debug for RestClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.transport.config().base_url)
            .field("session", &self.session)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_shows_endpoint_and_hides_token() {
        let config = ClientConfig::new("http://portfolio.test/api/v2").expect("valid");
        let client = RestClient::new(config).expect("must build");
        let scoped = client
            .with_session(Session::anonymous().with_token("secret-token"))
            .with_portfolio(Uuid::from_u128(7));

        let rendered = format!("{scoped:?}");
        assert!(rendered.contains("http://portfolio.test/api/v2"), "{rendered}");
        assert!(rendered.contains("authenticated: true"), "{rendered}");
        assert!(!rendered.contains("secret-token"), "{rendered}");
    }
}
