use std::fmt::{Debug, Formatter};

use uuid::Uuid;

use crate::http_client::HttpAuth;
use crate::RestError;

/// Credentials and portfolio selection carried by a client.
///
/// Sessions are values: every change produces a new session and leaves the
/// original untouched.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    portfolio: Option<Uuid>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_token(&self, token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            portfolio: self.portfolio,
        }
    }

    pub fn with_portfolio(&self, portfolio: Uuid) -> Self {
        Self {
            token: self.token.clone(),
            portfolio: Some(portfolio),
        }
    }

    /// Drops the token and keeps the portfolio selection.
    pub fn signed_out(&self) -> Self {
        Self {
            token: None,
            portfolio: self.portfolio,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn portfolio(&self) -> Option<Uuid> {
        self.portfolio
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn require_portfolio(&self) -> Result<Uuid, RestError> {
        self.portfolio.ok_or(RestError::PortfolioNotSelected)
    }

    pub fn auth(&self) -> HttpAuth {
        match &self.token {
            Some(token) => HttpAuth::BearerToken(token.clone()),
            None => HttpAuth::None,
        }
    }
}

impl Debug for Session {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .field("portfolio", &self.portfolio)
            .finish()
    }
}
