mod request;

pub use self::request::{ApiRequest, RequestBody};

use self::request::http_method;
use crate::abstract_trait::session::DynSessionStore;
use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{SpanKind, Status as SpanStatus, TraceContextExt, Tracer},
};
use reqwest::{
    Client,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{
    errors::{ClientError, ErrorResponse},
    utils::{Method, Metrics, Status as StatusUtils, TracingContext},
};
use tokio::time::Instant;
use tracing::{debug, error, info};

const USER_AGENT: &str = concat!("storefront-client/", env!("CARGO_PKG_VERSION"));

/// Gateway to the storefront REST backend.
///
/// Every call is a single attempt: no retry, no timeout, no cancellation.
/// The bearer token is read from the session on each call, so a login or
/// logout takes effect on the next request.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: DynSessionStore,
    metrics: Metrics,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .finish()
    }
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        session: DynSessionStore,
        metrics: Metrics,
    ) -> Result<Self, ClientError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
            metrics,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &DynSessionStore {
        &self.session
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer("storefront-client")
    }

    fn start_tracing(&self, operation_name: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = self.get_tracer();
        let span = tracer
            .span_builder(operation_name.to_string())
            .with_kind(SpanKind::Client)
            .with_attributes(attributes)
            .start(&tracer);

        debug!("Starting request: {operation_name}");

        let cx = Context::current_with_span(span);
        TracingContext { cx, start_time }
    }

    fn complete_tracing(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        http_status: Option<u16>,
        outcome: Result<(), &str>,
    ) {
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();
        let span = tracing_ctx.cx.span();

        let mut attributes = vec![KeyValue::new("duration_secs", elapsed.to_string())];
        if let Some(code) = http_status {
            attributes.push(KeyValue::new("http.status_code", i64::from(code)));
        }

        let status = match outcome {
            Ok(()) => {
                attributes.push(KeyValue::new("status", "SUCCESS"));
                StatusUtils::Success
            }
            Err(message) => {
                attributes.push(KeyValue::new("status", "ERROR"));
                attributes.push(KeyValue::new("message", message.to_string()));
                span.set_status(SpanStatus::error(message.to_string()));
                StatusUtils::Error
            }
        };

        span.add_event("Request completed", attributes);
        self.metrics.record(method, status, elapsed);
        span.end();
    }

    fn build_headers(
        &self,
        body: &RequestBody,
        extra: HeaderMap,
        token: Option<String>,
    ) -> Result<HeaderMap, ClientError> {
        let mut headers = HeaderMap::new();
        if !body.is_multipart() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        headers.extend(extra);

        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| ClientError::Transport(format!("invalid bearer token: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    /// Sends the request and returns the parsed JSON body untouched.
    ///
    /// A non-2xx status fails with the body's `message`, or `"API Error"`
    /// when the body carries none. An empty 2xx body yields `Value::Null`.
    pub async fn call(&self, request: ApiRequest) -> Result<Value, ClientError> {
        let ApiRequest {
            method,
            endpoint,
            query,
            headers,
            body,
        } = request;

        let token = self.session.token().await?;
        let headers = self.build_headers(&body, headers, token)?;

        let url = format!("{}{}", self.base_url, endpoint);
        let operation = format!("{:?} {}", method, endpoint);

        let tracing_ctx = self.start_tracing(
            &operation,
            vec![
                KeyValue::new("component", "storefront-client"),
                KeyValue::new("http.method", format!("{method:?}").to_uppercase()),
                KeyValue::new("http.route", endpoint.clone()),
            ],
        );

        let mut builder = self
            .http
            .request(http_method(&method), &url)
            .headers(headers);

        if !query.is_empty() {
            builder = builder.query(&query);
        }

        builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.body(serde_json::to_vec(&value)?),
            RequestBody::Multipart(form) => builder.multipart(form),
        };

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                let message = format!("request to {endpoint} failed: {e}");
                error!("{message}");
                self.complete_tracing(&tracing_ctx, method, None, Err(&message));
                return Err(ClientError::Transport(message));
            }
        };

        let status = response.status();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                let message = format!("reading response from {endpoint} failed: {e}");
                error!("{message}");
                self.complete_tracing(&tracing_ctx, method, Some(status.as_u16()), Err(&message));
                return Err(ClientError::Transport(message));
            }
        };

        if !status.is_success() {
            let message = ErrorResponse::message_or_fallback(&bytes);
            error!("{operation} failed with {status}: {message}");
            self.complete_tracing(&tracing_ctx, method, Some(status.as_u16()), Err(&message));
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            self.complete_tracing(&tracing_ctx, method, Some(status.as_u16()), Ok(()));
            return Ok(Value::Null);
        }

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(value) => {
                info!("{operation} succeeded with {status}");
                self.complete_tracing(&tracing_ctx, method, Some(status.as_u16()), Ok(()));
                Ok(value)
            }
            Err(e) => {
                let message = format!("{operation} returned a non-JSON body: {e}");
                error!("{message}");
                self.complete_tracing(&tracing_ctx, method, Some(status.as_u16()), Err(&message));
                Err(ClientError::Decode(message))
            }
        }
    }

    pub async fn call_json<T>(&self, request: ApiRequest) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let value = self.call(request).await?;
        serde_json::from_value(value).map_err(ClientError::from)
    }
}
