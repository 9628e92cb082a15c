// Shared fixtures for the behavior tests
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

pub use folio_core::{
    ClientConfig, Date, HttpClient, HttpError, HttpRequest, HttpResponse, PayloadSerializer,
    RestClient,
};
use serde_json::Value;

pub const BASE_URL: &str = "http://portfolio.test/api/v2";

/// Records every request and answers from a queue of canned replies.
///
/// Once the queue is empty each request gets `204 No Content`.
#[derive(Default)]
pub struct RecordingHttpClient {
    requests: Mutex<Vec<HttpRequest>>,
    replies: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
}

impl RecordingHttpClient {
    pub fn reply(self, response: HttpResponse) -> Self {
        self.replies
            .lock()
            .expect("lock")
            .push_back(Ok(response));
        self
    }

    pub fn fail(self, error: HttpError) -> Self {
        self.replies.lock().expect("lock").push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("lock").clone()
    }
}

impl HttpClient for RecordingHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        Box::pin(async move {
            self.requests.lock().expect("lock").push(request);
            self.replies
                .lock()
                .expect("lock")
                .pop_front()
                .unwrap_or_else(|| Ok(HttpResponse::new(204, "No Content")))
        })
    }
}

pub fn client_over(http: &Arc<RecordingHttpClient>) -> RestClient {
    let config = ClientConfig::new(BASE_URL).expect("valid config");
    RestClient::with_http_client(config, Arc::clone(http) as Arc<dyn HttpClient>)
        .expect("client must build")
}

pub fn serializer() -> PayloadSerializer {
    PayloadSerializer::new().expect("registries must build")
}

pub fn date(year: i32, month: u8, day: u8) -> Date {
    Date::new(year, month, day).expect("valid date")
}

pub fn parsed(text: &str) -> Value {
    serde_json::from_str(text).expect("fixture must parse")
}

pub fn body_json(request: &HttpRequest) -> Value {
    serde_json::from_slice(request.body.as_deref().expect("request body")).expect("json body")
}
