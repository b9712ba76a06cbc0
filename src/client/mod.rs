//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use base64::Engine;

use crate::domain::{
    Account, ApiHost, ApiPassword, Delivery, DeliveryId, LastMessages, Message, Schedule,
    ScheduleMessage, SendMessage, User, Username, ValidationError,
};
use crate::transport;

/// Value of the `X-API-Source` header identifying this client.
const API_SOURCE: &str = concat!("elibom-rust-", env!("CARGO_PKG_VERSION"));

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HttpMethod {
    Get,
    Post,
    Delete,
}

#[derive(Debug, Clone)]
struct HttpRequest {
    method: HttpMethod,
    url: String,
    headers: Vec<(&'static str, String)>,
    body: Option<String>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut builder = match request.method {
                HttpMethod::Get => self.client.get(&request.url),
                HttpMethod::Post => self.client.post(&request.url),
                HttpMethod::Delete => self.client.delete(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(*name, value);
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`ElibomClient`].
///
/// Callers branch on the four kinds: a failed precondition (nothing was
/// sent), a non-200 response, a response body that does not match the
/// schema, and an I/O-level failure. Kinds are never masked as one another.
pub enum ElibomError {
    /// One of the domain constructors rejected an invalid value; no request
    /// was made.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The server responded with a status code other than `200 OK`. The
    /// error body is decoded best-effort; absent or unparsable bodies yield
    /// `None`.
    #[error("The server returned with status {status} {}", status_description(.status))]
    Server {
        status: u16,
        body: Option<serde_json::Value>,
    },

    /// A `200 OK` body did not match the expected schema (malformed JSON,
    /// missing field, unparseable timestamp).
    #[error("decoding error: {0}")]
    Decoding(#[source] Box<dyn StdError + Send + Sync>),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),
}

fn status_description(status: &u16) -> &'static str {
    match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        409 => "Conflict",
        500 => "Internal Server Error",
        _ => "",
    }
}

fn decoding(err: transport::DecodeError) -> ElibomError {
    ElibomError::Decoding(Box::new(err))
}

fn build_authorization(username: &Username, api_password: &ApiPassword) -> String {
    let credentials = format!("{}:{}", username.as_str(), api_password.as_str());
    format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode(credentials)
    )
}

#[derive(Debug, Clone)]
/// Builder for [`ElibomClient`].
///
/// Use this when you need to point the client at another host (tests) or
/// customize the timeout or user-agent.
pub struct ElibomClientBuilder {
    username: Username,
    api_password: ApiPassword,
    host: ApiHost,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ElibomClientBuilder {
    /// Create a builder with the production host and no timeout/user-agent
    /// override.
    pub fn new(username: Username, api_password: ApiPassword) -> Self {
        Self {
            username,
            api_password,
            host: ApiHost::default(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the host requests are sent to.
    pub fn host(mut self, host: ApiHost) -> Self {
        self.host = host;
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

    /// Build an [`ElibomClient`].
    pub fn build(self) -> Result<ElibomClient, ElibomError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| ElibomError::Transport(Box::new(err)))?;

        let authorization = build_authorization(&self.username, &self.api_password);
        Ok(ElibomClient {
            username: self.username,
            authorization,
            host: self.host,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Elibom REST client.
///
/// The client holds only immutable state: the host, the username, and the
/// Basic authorization header computed once at construction. It is cheap to
/// clone and safe to share across tasks; every operation performs exactly
/// one request/response exchange with no retries.
pub struct ElibomClient {
    username: Username,
    authorization: String,
    host: ApiHost,
    http: Arc<dyn HttpTransport>,
}

impl ElibomClient {
    /// Create a client for the production host.
    ///
    /// For more customization, use [`ElibomClient::builder`].
    pub fn new(username: Username, api_password: ApiPassword) -> Self {
        let authorization = build_authorization(&username, &api_password);
        Self {
            username,
            authorization,
            host: ApiHost::default(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(username: Username, api_password: ApiPassword) -> ElibomClientBuilder {
        ElibomClientBuilder::new(username, api_password)
    }

    /// Send an SMS message to one or more destinations.
    ///
    /// Returns a delivery token that [`ElibomClient::delivery`] accepts.
    pub async fn send_message(&self, request: SendMessage) -> Result<String, ElibomError> {
        let body = transport::encode_send_message_body(&request);
        let response = self.execute(HttpMethod::Post, "/messages", Some(body)).await?;
        transport::decode_send_message_response(&response.body).map_err(decoding)
    }

    /// Schedule an SMS message to be sent at a later date.
    ///
    /// Returns the schedule id, which [`ElibomClient::scheduled_message`] and
    /// [`ElibomClient::unschedule`] accept.
    pub async fn schedule_message(&self, request: ScheduleMessage) -> Result<i64, ElibomError> {
        let body = transport::encode_schedule_message_body(&request);
        let response = self.execute(HttpMethod::Post, "/messages", Some(body)).await?;
        transport::decode_schedule_message_response(&response.body).map_err(decoding)
    }

    /// Query the most recent messages sent by the account user, newest
    /// first as reported by the server.
    pub async fn last_messages(&self, request: LastMessages) -> Result<Vec<Message>, ElibomError> {
        let path = transport::encode_last_messages_query(&request, &self.username);
        let response = self.execute(HttpMethod::Get, &path, None).await?;
        transport::decode_last_messages_response(&response.body).map_err(decoding)
    }

    /// Query a delivery and its messages.
    pub async fn delivery(&self, id: &DeliveryId) -> Result<Delivery, ElibomError> {
        let path = format!("/messages/{}", id.as_str());
        let response = self.execute(HttpMethod::Get, &path, None).await?;
        transport::decode_delivery_response(&response.body).map_err(decoding)
    }

    /// Query all pending scheduled messages.
    pub async fn scheduled_messages(&self) -> Result<Vec<Schedule>, ElibomError> {
        let response = self
            .execute(HttpMethod::Get, "/schedules/scheduled", None)
            .await?;
        transport::decode_schedule_list_response(&response.body).map_err(decoding)
    }

    /// Query a single scheduled message.
    pub async fn scheduled_message(&self, id: i64) -> Result<Schedule, ElibomError> {
        let path = format!("/schedules/{id}");
        let response = self.execute(HttpMethod::Get, &path, None).await?;
        transport::decode_schedule_response(&response.body).map_err(decoding)
    }

    /// Cancel a scheduled message.
    pub async fn unschedule(&self, id: i64) -> Result<(), ElibomError> {
        let path = format!("/schedules/{id}");
        self.execute(HttpMethod::Delete, &path, None).await?;
        Ok(())
    }

    /// Query the account users (those who have access to the account).
    pub async fn users(&self) -> Result<Vec<User>, ElibomError> {
        let response = self.execute(HttpMethod::Get, "/users", None).await?;
        transport::decode_user_list_response(&response.body).map_err(decoding)
    }

    /// Query a single account user.
    pub async fn user(&self, id: i64) -> Result<User, ElibomError> {
        let path = format!("/users/{id}");
        let response = self.execute(HttpMethod::Get, &path, None).await?;
        transport::decode_user_response(&response.body).map_err(decoding)
    }

    /// Query the account info.
    pub async fn account(&self) -> Result<Account, ElibomError> {
        let response = self.execute(HttpMethod::Get, "/account", None).await?;
        transport::decode_account_response(&response.body).map_err(decoding)
    }

    async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
    ) -> Result<HttpResponse, ElibomError> {
        let url = build_url(self.host.as_str(), path);
        let mut headers = vec![
            ("Authorization", self.authorization.clone()),
            ("Accept", "application/json".to_owned()),
            ("X-API-Source", API_SOURCE.to_owned()),
        ];
        if body.is_some() {
            headers.push(("Content-Type", "application/json; charset=UTF-8".to_owned()));
        }

        let response = self
            .http
            .execute(HttpRequest {
                method,
                url,
                headers,
                body,
            })
            .await
            .map_err(ElibomError::Transport)?;

        if response.status != 200 {
            return Err(ElibomError::Server {
                status: response.status,
                body: serde_json::from_str(&response.body).ok(),
            });
        }

        Ok(response)
    }
}

fn build_url(host: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{host}{path}")
    } else {
        format!("{host}/{path}")
    }
}
