//! Client layer: credentials, HTTP dispatch and the public operations.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::{
    ApiKey, ApiSecret, CallRequest, CallResponse, SmsRequest, SmsResponse, TtsRequest,
    TtsResponse, ValidationError,
};
use crate::endpoint::{Endpoint, EndpointRegistry, HttpMethod, Operation};
use crate::transport::{CallJsonResponse, SmsJsonResponse, TtsJsonResponse, encode_params};

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: std::fmt::Debug + Send + Sync {
    fn send<'a>(
        &'a self,
        method: HttpMethod,
        url: &'a Url,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        method: HttpMethod,
        url: &'a Url,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let method = match method {
                HttpMethod::Get => reqwest::Method::GET,
                HttpMethod::Post => reqwest::Method::POST,
            };
            let response = self.client.request(method, url.as_str()).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Nexmo API key/secret pair.
///
/// Both halves are validated on construction and are immutable afterwards.
pub struct Credentials {
    key: ApiKey,
    secret: ApiSecret,
}

impl Credentials {
    /// Validate both halves; the error names the field that was empty.
    pub fn new(
        key: impl Into<String>,
        secret: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            key: ApiKey::new(key)?,
            secret: ApiSecret::new(secret)?,
        })
    }

    pub fn key(&self) -> &ApiKey {
        &self.key
    }

    pub fn secret(&self) -> &ApiSecret {
        &self.secret
    }

    /// Replace any credential-named parameters with the stored pair.
    fn apply_query_params(&self, params: &mut Vec<(String, String)>) {
        params.retain(|(key, _)| key != ApiKey::FIELD && key != ApiSecret::FIELD);
        params.push((ApiKey::FIELD.to_owned(), self.key.as_str().to_owned()));
        params.push((ApiSecret::FIELD.to_owned(), self.secret.as_str().to_owned()));
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`NexmoClient`].
///
/// `BadRequest` and `EmptyResponse` mean Nexmo answered and the answer was a
/// failure. `Transport` and `Decode` mean no usable answer was obtained.
pub enum NexmoError {
    /// API key or secret is empty.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(#[from] ValidationError),

    /// No registry entry exists for the operation. No request was sent.
    #[error("operation {operation:?} is not supported by the endpoint registry")]
    UnsupportedOperation { operation: String },

    /// Nexmo returned a status other than 200. The body is not decoded.
    /// `doc_url` is the API reference of the endpoint that was called.
    #[error("bad request: HTTP status {status}")]
    BadRequest { status: u16, doc_url: String },

    /// Message-send returned no delivery records.
    #[error("response contains no messages")]
    EmptyResponse,

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Response body is not the expected JSON. `body` holds the raw text.
    #[error("invalid JSON response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// The request model could not be flattened into query parameters.
    #[error("request encoding error: {0}")]
    Encode(#[source] Box<dyn StdError + Send + Sync>),

    /// A registry base URL is not a valid absolute URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[derive(Debug, Clone)]
/// Builder for [`NexmoClient`].
///
/// Use this when you need to customize endpoints, the timeout, or the user-agent.
pub struct NexmoClientBuilder {
    credentials: Credentials,
    endpoints: Arc<EndpointRegistry>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl NexmoClientBuilder {
    /// Create a builder with the default registry and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoints: EndpointRegistry::shared_default(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Replace the whole endpoint registry.
    pub fn endpoints(mut self, registry: EndpointRegistry) -> Self {
        self.endpoints = Arc::new(registry);
        self
    }

    /// Add or replace the endpoint for a single operation.
    pub fn endpoint(mut self, operation: Operation, endpoint: Endpoint) -> Self {
        let registry = Arc::unwrap_or_clone(self.endpoints);
        self.endpoints = Arc::new(registry.insert(operation.as_str(), endpoint));
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`NexmoClient`].
    pub fn build(self) -> Result<NexmoClient, NexmoError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| NexmoError::Transport(Box::new(err)))?;

        Ok(NexmoClient {
            credentials: self.credentials,
            endpoints: self.endpoints,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Debug, Clone)]
/// High-level Nexmo client.
///
/// Each operation is one HTTP round trip: the request model is flattened
/// into query parameters (empty fields dropped), `api_key`/`api_secret` are
/// appended, and the JSON reply is decoded into the matching response type.
/// Clones share the HTTP connection pool and the endpoint registry.
pub struct NexmoClient {
    credentials: Credentials,
    endpoints: Arc<EndpointRegistry>,
    http: Arc<dyn HttpTransport>,
}

impl NexmoClient {
    /// Create a client using the default endpoints and the given timeout.
    ///
    /// Fails with [`NexmoError::InvalidCredentials`] if `key` or `secret` is empty.
    pub fn new(
        key: impl Into<String>,
        secret: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, NexmoError> {
        let credentials = Credentials::new(key, secret)?;
        Self::builder(credentials).timeout(timeout).build()
    }

    /// Like [`NexmoClient::new`], but panics if the client cannot be built.
    ///
    /// Intended for start-up code where missing credentials are unrecoverable.
    pub fn must(key: impl Into<String>, secret: impl Into<String>, timeout: Duration) -> Self {
        match Self::new(key, secret, timeout) {
            Ok(client) => client,
            Err(err) => panic!("nexmo: {err}"),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> NexmoClientBuilder {
        NexmoClientBuilder::new(credentials)
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn endpoints(&self) -> &EndpointRegistry {
        &self.endpoints
    }

    /// Send a message with only the required fields set.
    ///
    /// See [`NexmoClient::send_sms`] for the error contract.
    pub async fn send_basic_sms(
        &self,
        to: impl Into<String>,
        from: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<SmsResponse, NexmoError> {
        self.send_sms(SmsRequest::new(to, from, text)).await
    }

    /// Send a message.
    ///
    /// Errors:
    /// - [`NexmoError::BadRequest`] for any HTTP status other than 200,
    /// - [`NexmoError::EmptyResponse`] when Nexmo accepted the call but
    ///   returned no delivery records,
    /// - [`NexmoError::Transport`] / [`NexmoError::Decode`] when no usable
    ///   answer was received.
    ///
    /// Per-recipient failures are reported through
    /// [`crate::MessageStatus`] on each record, not as errors.
    pub async fn send_sms(&self, request: SmsRequest) -> Result<SmsResponse, NexmoError> {
        let response: SmsResponse = self
            .dispatch::<_, SmsJsonResponse>(Operation::SendMessage.as_str(), &request)
            .await?
            .into();

        if response.messages.is_empty() {
            return Err(NexmoError::EmptyResponse);
        }
        Ok(response)
    }

    /// Place an outbound voice call that fetches its script from `answer_url`.
    pub async fn call(&self, request: CallRequest) -> Result<CallResponse, NexmoError> {
        let response = self
            .dispatch::<_, CallJsonResponse>(Operation::Call.as_str(), &request)
            .await?;
        Ok(response.into())
    }

    /// Place a call that reads `text` to the recipient.
    pub async fn text_to_speech(&self, request: TtsRequest) -> Result<TtsResponse, NexmoError> {
        let response = self
            .dispatch::<_, TtsJsonResponse>(Operation::TextToSpeech.as_str(), &request)
            .await?;
        Ok(response.into())
    }

    async fn dispatch<Req, Wire>(&self, operation: &str, request: &Req) -> Result<Wire, NexmoError>
    where
        Req: Serialize,
        Wire: DeserializeOwned,
    {
        let endpoint =
            self.endpoints
                .get(operation)
                .ok_or_else(|| NexmoError::UnsupportedOperation {
                    operation: operation.to_owned(),
                })?;

        let mut params = encode_params(request).map_err(|err| NexmoError::Encode(Box::new(err)))?;
        self.credentials.apply_query_params(&mut params);
        let url = Url::parse_with_params(&endpoint.base_url, &params)?;

        tracing::debug!(
            operation,
            method = endpoint.method.as_str(),
            endpoint = %endpoint.base_url,
            doc = %endpoint.doc_url,
            params = params.len(),
            "dispatching nexmo request"
        );

        let response = self
            .http
            .send(endpoint.method, &url)
            .await
            .map_err(NexmoError::Transport)?;

        tracing::debug!(operation, status = response.status, "nexmo response received");

        if response.status != 200 {
            return Err(NexmoError::BadRequest {
                status: response.status,
                doc_url: endpoint.doc_url.clone(),
            });
        }

        match serde_json::from_str::<Wire>(&response.body) {
            Ok(parsed) => Ok(parsed),
            Err(source) => {
                tracing::warn!(
                    operation,
                    body_len = response.body.len(),
                    error = %source,
                    "nexmo response is not valid JSON"
                );
                Err(NexmoError::Decode {
                    source,
                    body: response.body,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io;
    use std::sync::Mutex;

    use crate::domain::{KnownMessageStatus, MessageType};

    use super::*;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        calls: usize,
        last_method: Option<HttpMethod>,
        last_url: Option<Url>,
        response_status: u16,
        response_body: String,
        fail: bool,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    calls: 0,
                    last_method: None,
                    last_url: None,
                    response_status,
                    response_body: response_body.into(),
                    fail: false,
                })),
            }
        }

        fn failing() -> Self {
            let transport = Self::new(0, "");
            transport.state.lock().unwrap().fail = true;
            transport
        }

        fn calls(&self) -> usize {
            self.state.lock().unwrap().calls
        }

        fn last_request(&self) -> (Option<HttpMethod>, Option<Url>) {
            let state = self.state.lock().unwrap();
            (state.last_method, state.last_url.clone())
        }

        fn last_params(&self) -> Vec<(String, String)> {
            let (_, url) = self.last_request();
            url.map(|url| url.query_pairs().into_owned().collect())
                .unwrap_or_default()
        }
    }

    impl HttpTransport for FakeTransport {
        fn send<'a>(
            &'a self,
            method: HttpMethod,
            url: &'a Url,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let (fail, status, body) = {
                    let mut state = self.state.lock().unwrap();
                    state.calls += 1;
                    state.last_method = Some(method);
                    state.last_url = Some(url.clone());
                    (
                        state.fail,
                        state.response_status,
                        state.response_body.clone(),
                    )
                };
                if fail {
                    let err = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
                    return Err(Box::new(err) as Box<dyn StdError + Send + Sync>);
                }
                Ok(HttpResponse { status, body })
            })
        }
    }

    fn assert_param(params: &[(String, String)], key: &str, value: &str) {
        assert!(
            params.iter().any(|(k, v)| k == key && v == value),
            "missing param {key}={value}; got: {params:?}"
        );
    }

    fn test_registry() -> EndpointRegistry {
        EndpointRegistry::nexmo()
            .with_base_url("https://example.invalid")
            .unwrap()
    }

    fn make_client(transport: FakeTransport) -> NexmoClient {
        make_client_with(test_registry(), transport)
    }

    fn make_client_with(registry: EndpointRegistry, transport: FakeTransport) -> NexmoClient {
        NexmoClient {
            credentials: Credentials::new("123", "123").unwrap(),
            endpoints: Arc::new(registry),
            http: Arc::new(transport),
        }
    }

    const ONE_MESSAGE: &str = r#"
    {
      "message-count": "1",
      "messages": [
        {
          "status": "0",
          "message-id": "abc",
          "to": "5215522334455",
          "network": "N/A"
        }
      ]
    }
    "#;

    #[tokio::test]
    async fn send_sms_returns_delivery_records() {
        let transport = FakeTransport::new(200, ONE_MESSAGE);
        let client = make_client(transport.clone());

        let response = client
            .send_basic_sms("5215522334455", "nexmotest", "Hi nexmo test")
            .await
            .unwrap();

        assert_eq!(response.message_count.as_deref(), Some("1"));
        assert_eq!(response.messages.len(), 1);
        let message = &response.messages[0];
        assert_eq!(message.status.as_str(), "0");
        assert_eq!(message.status.known(), Some(KnownMessageStatus::Delivered));
        assert_eq!(message.message_id.as_deref(), Some("abc"));
        assert_eq!(message.network.as_deref(), Some("N/A"));

        let (method, url) = transport.last_request();
        assert_eq!(method, Some(HttpMethod::Get));
        let url = url.unwrap();
        assert_eq!(url.path(), "/sms/json");

        let params = transport.last_params();
        assert_param(&params, "api_key", "123");
        assert_param(&params, "api_secret", "123");
        assert_param(&params, "to", "5215522334455");
        assert_param(&params, "from", "nexmotest");
        assert_param(&params, "text", "Hi nexmo test");
    }

    #[tokio::test]
    async fn send_sms_omits_empty_fields_from_the_wire() {
        let transport = FakeTransport::new(200, ONE_MESSAGE);
        let client = make_client(transport.clone());

        let request = SmsRequest {
            message_type: Some(MessageType::Unicode),
            client_ref: Some(String::new()),
            callback: Some("https://example.invalid/dlr".to_owned()),
            ..SmsRequest::new("5215522334455", "", "hola")
        };
        client.send_sms(request).await.unwrap();

        let params = transport.last_params();
        let keys: Vec<&str> = params.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec!["to", "text", "type", "callback", "api_key", "api_secret"]
        );
        assert_param(&params, "type", "unicode");
        assert_param(&params, "callback", "https://example.invalid/dlr");
    }

    #[tokio::test]
    async fn send_sms_maps_non_200_status_to_bad_request() {
        let transport = FakeTransport::new(500, "not json at all");
        let client = make_client(transport);

        let err = client
            .send_basic_sms("5215522334455", "nexmotest", "Hi nexmo test")
            .await
            .unwrap_err();
        match err {
            NexmoError::BadRequest { status, doc_url } => {
                assert_eq!(status, 500);
                assert_eq!(
                    doc_url,
                    "https://docs.nexmo.com/messaging/sms-api/api-reference"
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn bad_request_carries_doc_url_of_the_called_endpoint() {
        let transport = FakeTransport::new(403, "");
        let client = make_client(transport);

        let err = client
            .call(CallRequest::new("5215522334455", "http://localhost/answer.xml"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            NexmoError::BadRequest { status: 403, ref doc_url }
                if doc_url == "https://docs.nexmo.com/voice/call"
        ));
    }

    #[tokio::test]
    async fn other_2xx_statuses_are_bad_requests_too() {
        let transport = FakeTransport::new(204, ONE_MESSAGE);
        let client = make_client(transport);

        let err = client
            .send_basic_sms("5215522334455", "nexmotest", "Hi nexmo test")
            .await
            .unwrap_err();
        assert!(matches!(err, NexmoError::BadRequest { status: 204, .. }));
    }

    #[tokio::test]
    async fn send_sms_maps_zero_messages_to_empty_response() {
        let transport = FakeTransport::new(200, r#"{"message-count":"0","messages":[]}"#);
        let client = make_client(transport);

        let err = client
            .send_basic_sms("5215522334455", "nexmotest", "Hi nexmo test")
            .await
            .unwrap_err();
        assert!(matches!(err, NexmoError::EmptyResponse));
    }

    #[tokio::test]
    async fn decode_errors_keep_the_raw_body() {
        let transport = FakeTransport::new(200, "<html>maintenance</html>");
        let client = make_client(transport);

        let err = client
            .send_basic_sms("5215522334455", "nexmotest", "Hi nexmo test")
            .await
            .unwrap_err();
        match err {
            NexmoError::Decode { body, .. } => assert_eq!(body, "<html>maintenance</html>"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn transport_errors_are_propagated() {
        let transport = FakeTransport::failing();
        let client = make_client(transport.clone());

        let err = client
            .send_basic_sms("5215522334455", "nexmotest", "Hi nexmo test")
            .await
            .unwrap_err();
        match err {
            NexmoError::Transport(source) => {
                let io = source.downcast_ref::<io::Error>().unwrap();
                assert_eq!(io.kind(), io::ErrorKind::ConnectionRefused);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn missing_registry_entry_is_unsupported_and_sends_nothing() {
        let transport = FakeTransport::new(200, ONE_MESSAGE);
        let client = make_client_with(EndpointRegistry::empty(), transport.clone());

        let err = client
            .send_basic_sms("5215522334455", "nexmotest", "Hi nexmo test")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            NexmoError::UnsupportedOperation { ref operation } if operation == "sms"
        ));

        let err = client
            .call(CallRequest::new("5215522334455", "http://localhost/answer.xml"))
            .await
            .unwrap_err();
        assert!(matches!(err, NexmoError::UnsupportedOperation { .. }));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn callers_cannot_override_credentials() {
        #[derive(Serialize)]
        struct Sneaky {
            to: &'static str,
            api_key: &'static str,
            api_secret: &'static str,
        }

        let transport = FakeTransport::new(200, ONE_MESSAGE);
        let client = make_client(transport.clone());

        let _: SmsJsonResponse = client
            .dispatch(
                "sms",
                &Sneaky {
                    to: "5215522334455",
                    api_key: "attacker",
                    api_secret: "attacker",
                },
            )
            .await
            .unwrap();

        let params = transport.last_params();
        let credentials: HashMap<&str, Vec<&str>> =
            params.iter().fold(HashMap::new(), |mut acc, (k, v)| {
                acc.entry(k.as_str()).or_default().push(v.as_str());
                acc
            });
        assert_eq!(credentials.get("api_key"), Some(&vec!["123"]));
        assert_eq!(credentials.get("api_secret"), Some(&vec!["123"]));
    }

    #[tokio::test]
    async fn call_posts_to_call_endpoint() {
        let json = r#"
        {
          "call-id": "call-1",
          "to": "5215522334455",
          "status": 0,
          "error-text": ""
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());

        let response = client
            .call(CallRequest::new("5215522334455", "http://localhost/answer.xml"))
            .await
            .unwrap();
        assert_eq!(response.call_id.as_deref(), Some("call-1"));
        assert_eq!(response.status, 0);

        let (method, url) = transport.last_request();
        assert_eq!(method, Some(HttpMethod::Post));
        assert_eq!(url.unwrap().path(), "/call/json");

        let params = transport.last_params();
        assert_param(&params, "answer_url", "http://localhost/answer.xml");
        assert!(!params.iter().any(|(k, _)| k == "from"));
    }

    #[tokio::test]
    async fn text_to_speech_posts_to_tts_endpoint() {
        let json = r#"{"call_id":"tts-1","to":"5215522334455","status":"0","error_text":"Success"}"#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());

        let request = TtsRequest {
            repeat: Some(2),
            ..TtsRequest::new("5215522334455", "", "hello there", "en-us", "female")
        };
        let response = client.text_to_speech(request).await.unwrap();
        assert_eq!(response.call_id.as_deref(), Some("tts-1"));
        assert_eq!(response.status, "0");
        assert_eq!(response.error_text.as_deref(), Some("Success"));

        let (method, url) = transport.last_request();
        assert_eq!(method, Some(HttpMethod::Post));
        assert_eq!(url.unwrap().path(), "/tts/json");

        let params = transport.last_params();
        assert_param(&params, "text", "hello there");
        assert_param(&params, "lg", "en-us");
        assert_param(&params, "voice", "female");
        assert_param(&params, "repeat", "2");
        assert!(!params.iter().any(|(k, _)| k == "from"));
    }

    #[tokio::test]
    async fn text_to_speech_does_not_require_messages() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(transport);

        let response = client
            .text_to_speech(TtsRequest::new("5215522334455", "", "hi", "", ""))
            .await
            .unwrap();
        assert_eq!(response, TtsResponse::default());
    }

    #[test]
    fn new_rejects_empty_key_or_secret() {
        let err = NexmoClient::new("", "", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(
            err,
            NexmoError::InvalidCredentials(ValidationError::Empty {
                field: ApiKey::FIELD
            })
        ));

        let err = NexmoClient::new("123", "", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(
            err,
            NexmoError::InvalidCredentials(ValidationError::Empty {
                field: ApiSecret::FIELD
            })
        ));

    }

    #[test]
    fn whitespace_credentials_are_accepted_and_kept_verbatim() {
        let client = NexmoClient::new(" k ", " ", Duration::from_secs(1)).unwrap();
        assert_eq!(client.credentials().key().as_str(), " k ");
        assert_eq!(client.credentials().secret().as_str(), " ");
    }

    #[test]
    fn new_accepts_non_empty_credentials() {
        let client = NexmoClient::new("123", "456", Duration::from_secs(10)).unwrap();
        assert_eq!(client.credentials().key().as_str(), "123");
        assert_eq!(client.credentials().secret().as_str(), "456");
        assert_eq!(client.endpoints().len(), 3);

        let _ = NexmoClient::must("123", "456", Duration::from_secs(1));
    }

    #[test]
    #[should_panic(expected = "api_secret must not be empty")]
    fn must_panics_on_invalid_credentials() {
        let _ = NexmoClient::must("123", "", Duration::from_secs(1));
    }

    #[test]
    fn builder_endpoint_overrides_are_applied() {
        let credentials = Credentials::new("key", "secret").unwrap();
        let client = NexmoClient::builder(credentials.clone())
            .endpoint(
                Operation::SendMessage,
                Endpoint::new(HttpMethod::Post, "https://example.invalid/sms"),
            )
            .timeout(Duration::from_secs(5))
            .user_agent("nexmo-tests")
            .build()
            .unwrap();
        let sms = client.endpoints().get("sms").unwrap();
        assert_eq!(sms.method, HttpMethod::Post);
        assert_eq!(sms.base_url, "https://example.invalid/sms");
        assert!(client.endpoints().get("tts").is_some());
        assert_eq!(
            EndpointRegistry::shared_default().get("sms").unwrap().method,
            HttpMethod::Get
        );

        let client = NexmoClient::builder(credentials)
            .endpoints(EndpointRegistry::empty())
            .build()
            .unwrap();
        assert!(client.endpoints().is_empty());
    }

    #[test]
    fn client_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<NexmoClient>();
    }
}
