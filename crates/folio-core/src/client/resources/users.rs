use crate::client::session::Session;
use crate::client::transport::RestTransport;
use crate::domain::{AuthenticationRequest, AuthenticationResponse};
use crate::RestError;

pub struct UserResource<'a> {
    transport: &'a RestTransport,
    session: &'a Session,
}

impl<'a> UserResource<'a> {
    pub(crate) fn new(transport: &'a RestTransport, session: &'a Session) -> Self {
        Self { transport, session }
    }

    /// Exchange credentials for a session carrying a bearer token.
    ///
    /// The request is always sent without a token. The returned session keeps
    /// the current portfolio selection.
    pub async fn authenticate(&self, user_name: &str, password: &str) -> Result<Session, RestError> {
        let request = AuthenticationRequest::new(user_name, password);
        let response: AuthenticationResponse = self
            .transport
            .post_for(&Session::anonymous(), "users/authenticate", &request)
            .await?;

        tracing::debug!(user = user_name, "authenticated");
        Ok(self.session.with_token(response.token))
    }
}
