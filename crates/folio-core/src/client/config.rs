use crate::RestError;

pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const ENV_API_URL: &str = "FOLIO_API_URL";
pub const ENV_TIMEOUT_MS: &str = "FOLIO_TIMEOUT_MS";

/// Connection settings for [`RestClient`](crate::client::RestClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, RestError> {
        let base_url = base_url.into();
        let trimmed = base_url.trim();
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(RestError::InvalidConfig(format!(
                "base url must start with http:// or https://: '{base_url}'"
            )));
        }

        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_owned(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: String::from(concat!("folio/", env!("CARGO_PKG_VERSION"))),
        })
    }

    /// Read `FOLIO_API_URL` and optional `FOLIO_TIMEOUT_MS` from the process environment.
    pub fn from_env() -> Result<Self, RestError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, RestError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(ENV_API_URL)
            .ok_or_else(|| RestError::InvalidConfig(format!("{ENV_API_URL} is not set")))?;
        let mut config = Self::new(base_url)?;

        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            let timeout_ms = raw.trim().parse::<u64>().map_err(|_| {
                RestError::InvalidConfig(format!("{ENV_TIMEOUT_MS} must be an integer: '{raw}'"))
            })?;
            config = config.with_timeout_ms(timeout_ms);
        }

        Ok(config)
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Absolute URL for a service-relative path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths_without_doubling_slashes() {
        let config = ClientConfig::new("https://portfolio.test/api/v2/").expect("valid");
        assert_eq!(
            config.endpoint("stocks?date=2001-02-03"),
            "https://portfolio.test/api/v2/stocks?date=2001-02-03"
        );
        assert_eq!(
            config.endpoint("/portfolio/x/holdings"),
            "https://portfolio.test/api/v2/portfolio/x/holdings"
        );
    }

    #[test]
    fn rejects_non_http_base_url() {
        let err = ClientConfig::new("ftp://portfolio.test").expect_err("must fail");
        assert!(matches!(err, RestError::InvalidConfig(_)));
    }

    #[test]
    fn reads_settings_from_lookup() {
        let config = ClientConfig::from_lookup(|key| match key {
            ENV_API_URL => Some(String::from("http://localhost:5000/api/v2")),
            ENV_TIMEOUT_MS => Some(String::from("1500")),
            _ => None,
        })
        .expect("valid");
        assert_eq!(config.base_url, "http://localhost:5000/api/v2");
        assert_eq!(config.timeout_ms, 1_500);

        let err = ClientConfig::from_lookup(|_| None).expect_err("must fail");
        assert!(err.to_string().contains(ENV_API_URL));
    }
}
