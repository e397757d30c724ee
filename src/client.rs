//! HTTP client wrapper applying a User-Agent policy.
//!
//! # Responsibilities
//! - Build a `reqwest::Client` with timeouts and no built-in User-Agent
//! - Apply the policy to every request it sends
//! - Expose prepared requests for callers that edit headers further
//!
//! # Design Decisions
//! - The policy runs per request, so rotation happens on every send
//! - Non-success statuses are errors for `get_json`, not for `get`

use std::time::Duration;

use reqwest::header::{HeaderMap, USER_AGENT};
use reqwest::{Client, Method, Request, Response};
use serde_json::Value;
use url::Url;

use crate::config::schema::TimeoutConfig;
use crate::error::ClientError;
use crate::policy::UserAgentPolicy;
use crate::selector::UserAgent;

/// An HTTP client whose requests carry a policy-chosen `User-Agent`.
#[derive(Debug)]
pub struct RotatingClient {
    client: Client,
    policy: UserAgentPolicy,
}

impl RotatingClient {
    /// Build a client with the given timeouts.
    pub fn new(policy: UserAgentPolicy, timeouts: &TimeoutConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .timeout(Duration::from_secs(timeouts.request_secs))
            .build()
            .map_err(ClientError::Build)?;
        Ok(Self::with_client(client, policy))
    }

    /// Wrap an existing client. It must not set its own default `User-Agent`
    /// if `Unset` is expected to take effect.
    pub fn with_client(client: Client, policy: UserAgentPolicy) -> Self {
        Self { client, policy }
    }

    pub fn policy(&self) -> &UserAgentPolicy {
        &self.policy
    }

    /// Build a request with the policy already applied to its headers.
    pub fn prepare(&self, method: Method, url: Url) -> Request {
        let mut request = Request::new(method, url);
        let applied = self.policy.apply(request.headers_mut());
        log_applied(request.url(), applied);
        request
    }

    /// Send a prepared request as-is.
    pub async fn execute(&self, request: Request) -> Result<Response, ClientError> {
        tracing::info!(
            method = %request.method(),
            url = %request.url(),
            user_agent = ?request.headers().get(USER_AGENT),
            "Sending request"
        );
        let response = self.client.execute(request).await?;
        tracing::debug!(status = %response.status(), "Response received");
        Ok(response)
    }

    /// GET `url` with the policy applied.
    pub async fn get(&self, url: Url) -> Result<Response, ClientError> {
        let request = self.prepare(Method::GET, url);
        self.execute(request).await
    }

    /// GET `url` and decode the body as JSON.
    pub async fn get_json(&self, url: Url) -> Result<Value, ClientError> {
        let response = self.get(url).await?;
        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!(%status, error = %e, "Failed to read error response body");
                    String::new()
                }
            };
            tracing::warn!(%status, "Server returned non-success status");
            return Err(ClientError::Status { status, body });
        }
        Ok(response.json().await?)
    }
}

/// Build a plain client whose every request carries `user_agent`.
///
/// This is the client-wide ("session") way of setting the header; per-request
/// headers set later still take precedence.
pub fn session(user_agent: &UserAgent, timeouts: &TimeoutConfig) -> Result<Client, ClientError> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, user_agent.header_value().clone());
    Client::builder()
        .default_headers(headers)
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .timeout(Duration::from_secs(timeouts.request_secs))
        .build()
        .map_err(ClientError::Build)
}

fn log_applied(url: &Url, applied: Option<&UserAgent>) {
    match applied {
        Some(ua) => tracing::debug!(url = %url, user_agent = %ua, "User-Agent applied"),
        None => tracing::debug!(url = %url, "User-Agent unset"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::CandidateList;

    fn url() -> Url {
        Url::parse("http://127.0.0.1:9/headers").unwrap()
    }

    #[test]
    fn test_prepare_applies_fixed_value() {
        let policy = UserAgentPolicy::fixed("my-app/0.0.1").unwrap();
        let client = RotatingClient::new(policy, &TimeoutConfig::default()).unwrap();
        let request = client.prepare(Method::GET, url());
        assert_eq!(request.headers().get(USER_AGENT).unwrap(), "my-app/0.0.1");
        assert_eq!(request.method(), &Method::GET);
    }

    #[test]
    fn test_prepare_unset_has_no_header() {
        let client = RotatingClient::new(UserAgentPolicy::Unset, &TimeoutConfig::default()).unwrap();
        let request = client.prepare(Method::GET, url());
        assert!(request.headers().get(USER_AGENT).is_none());
    }

    #[test]
    fn test_prepare_rotates_within_candidates() {
        let list = CandidateList::new(["A", "B", "C"]).unwrap();
        let client =
            RotatingClient::new(UserAgentPolicy::random(list), &TimeoutConfig::default()).unwrap();
        for _ in 0..20 {
            let request = client.prepare(Method::GET, url());
            let sent = request.headers().get(USER_AGENT).unwrap().to_str().unwrap();
            assert!(["A", "B", "C"].contains(&sent));
        }
    }
}
