use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::config::ClientConfig;
use crate::client::session::Session;
use crate::http_client::{HttpClient, HttpRequest, HttpResponse};
use crate::serialization::PayloadSerializer;
use crate::RestError;

const JSON_MEDIA_TYPE: &str = "application/json";

/// Moves serialized payloads between the resource wrappers and an [`HttpClient`].
pub struct RestTransport {
    config: ClientConfig,
    http: Arc<dyn HttpClient>,
    serializer: PayloadSerializer,
}

impl RestTransport {
    pub fn new(config: ClientConfig, http: Arc<dyn HttpClient>) -> Result<Self, RestError> {
        Ok(Self {
            config,
            http,
            serializer: PayloadSerializer::new()?,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn serializer(&self) -> PayloadSerializer {
        self.serializer
    }

    /// GET and decode a JSON body.
    pub async fn get<T>(&self, session: &Session, path: &str) -> Result<T, RestError>
    where
        T: DeserializeOwned,
    {
        let request = HttpRequest::get(self.config.endpoint(path));
        let response = self.send(session, request).await?;

        match response.media_type() {
            Some(media_type) if media_type == JSON_MEDIA_TYPE => {}
            other => {
                return Err(RestError::UnsupportedMediaType {
                    content_type: other.unwrap_or_default(),
                });
            }
        }

        Ok(self.serializer.deserialize_slice(&response.body)?)
    }

    /// POST a JSON body, ignoring whatever the server returns.
    pub async fn post<D>(&self, session: &Session, path: &str, body: &D) -> Result<(), RestError>
    where
        D: Serialize + ?Sized,
    {
        let request = self.json_request(path, body)?;
        self.send(session, request).await?;
        Ok(())
    }

    /// POST a JSON body and decode the JSON reply.
    pub async fn post_for<T, D>(&self, session: &Session, path: &str, body: &D) -> Result<T, RestError>
    where
        T: DeserializeOwned,
        D: Serialize + ?Sized,
    {
        let request = self.json_request(path, body)?;
        let response = self.send(session, request).await?;
        Ok(self.serializer.deserialize_slice(&response.body)?)
    }

    pub async fn delete(&self, session: &Session, path: &str) -> Result<(), RestError> {
        let request = HttpRequest::delete(self.config.endpoint(path));
        self.send(session, request).await?;
        Ok(())
    }

    fn json_request<D>(&self, path: &str, body: &D) -> Result<HttpRequest, RestError>
    where
        D: Serialize + ?Sized,
    {
        let payload = self.serializer.serialize_to_vec(body)?;
        Ok(HttpRequest::post(self.config.endpoint(path))
            .with_header("content-type", JSON_MEDIA_TYPE)
            .with_body(payload))
    }

    async fn send(&self, session: &Session, request: HttpRequest) -> Result<HttpResponse, RestError> {
        let request = request
            .with_header("accept", JSON_MEDIA_TYPE)
            .with_auth(&session.auth())
            .with_timeout_ms(self.config.timeout_ms);

        tracing::debug!(
            method = %request.method,
            url = %request.url,
            authenticated = session.is_authenticated(),
            "sending request"
        );
        let response = self.http.execute(request).await?;
        tracing::debug!(status = response.status, "received response");

        if !response.is_success() {
            tracing::warn!(
                status = response.status,
                reason = %response.reason,
                "request rejected"
            );
            return Err(RestError::Status {
                status: response.status,
                reason: response.reason,
            });
        }

        Ok(response)
    }
}
