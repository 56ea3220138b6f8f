use log::debug;
use reqwest::Method;
use serde::Serialize;
use std::time::Duration;

use crate::credentials::Credentials;
use crate::datacenter::{DedicatedServer, VirtualServer};
use crate::error::Error;
use crate::job::Job;
use crate::response::ApiResponse;
use crate::software::Software;

/// Timeout applied to every call made through the default transport.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Ordered key/value parameters for a single request.
///
/// The pipeline places these in the query string for GET calls and in a
/// form-encoded body for everything else. Values are formatted at the
/// facade boundary, so only flat string pairs ever reach the wire.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one wire field.
    pub fn add(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.0.push((key.into(), value.to_string()));
        self
    }
}

/// Client for the reseller API, holding the resolved credentials and the
/// HTTP transport shared by all resource facades.
///
/// One client is safe to share across tasks: the credentials are immutable
/// and `reqwest::Client` handles its own connection reuse.
#[derive(Debug, Clone)]
pub struct HosterApi {
    credentials: Credentials,
    http: reqwest::Client,
}

impl HosterApi {
    /// Creates a client for the production API, or the sandbox when the
    /// flag is set. Equivalent to `HosterApi::builder(token).sandbox(sandbox).build()`.
    pub fn new(token: &str, sandbox: bool) -> Result<Self, Error> {
        Self::builder(token).sandbox(sandbox).build()
    }

    pub fn builder(token: &str) -> HosterApiBuilder {
        HosterApiBuilder::new(token)
    }

    /// Creates a client around already-resolved credentials, with the
    /// default transport.
    pub fn with_credentials(credentials: Credentials) -> Result<Self, Error> {
        Ok(Self {
            credentials,
            http: default_http_client(false)?,
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn token(&self) -> &str {
        self.credentials.token()
    }

    pub fn is_sandbox(&self) -> bool {
        self.credentials.is_sandbox()
    }

    pub fn http_client(&self) -> &reqwest::Client {
        &self.http
    }

    /// Issues a GET request for `action_path` and normalizes the response.
    pub async fn get(&self, action_path: &str, params: Params) -> Result<ApiResponse, Error> {
        self.request(Method::GET, action_path, params).await
    }

    pub async fn post(&self, action_path: &str, params: Params) -> Result<ApiResponse, Error> {
        self.request(Method::POST, action_path, params).await
    }

    pub async fn put(&self, action_path: &str, params: Params) -> Result<ApiResponse, Error> {
        self.request(Method::PUT, action_path, params).await
    }

    pub async fn delete(&self, action_path: &str, params: Params) -> Result<ApiResponse, Error> {
        self.request(Method::DELETE, action_path, params).await
    }

    /// Builds and dispatches one request, then normalizes the body.
    ///
    /// `action_path` is relative to the resolved base URL and is appended
    /// as-is; callers supply canonical paths without a leading slash.
    /// Verbs outside GET/POST/PUT/DELETE fail with
    /// [`Error::UnsupportedMethod`] before anything is sent, and non-2xx
    /// statuses are propagated as [`Error::Transport`].
    pub async fn request(
        &self,
        method: Method,
        action_path: &str,
        params: Params,
    ) -> Result<ApiResponse, Error> {
        let request = self.build_request(method, action_path, params)?;
        debug!("dispatching {} {}", request.method(), request.url().path());

        let response = self.http.execute(request).await?;
        let response = response.error_for_status()?;
        let status = response.status();
        let body = response.text().await?;
        debug!("received {} ({} bytes)", status, body.len());

        Ok(ApiResponse::normalize(&body))
    }

    fn build_request(
        &self,
        method: Method,
        action_path: &str,
        params: Params,
    ) -> Result<reqwest::Request, Error> {
        if method != Method::GET
            && method != Method::POST
            && method != Method::PUT
            && method != Method::DELETE
        {
            return Err(Error::UnsupportedMethod(method));
        }

        let url = format!("{}{}", self.credentials.url(), action_path);
        let bearer = format!("Bearer {}", self.credentials.token());

        // The upstream API has only ever seen the bearer value twice per
        // request: once as a header and once inside the parameter set.
        // Keep feeding it both.
        let params = params.add("Authorization", bearer.as_str());

        let builder = self
            .http
            .request(method.clone(), url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header("Authorization", bearer.as_str());

        let builder = if method == Method::GET {
            builder.query(&params)
        } else {
            builder.form(&params)
        };

        Ok(builder.build()?)
    }

    /// Job queue lookups.
    pub fn job(&self) -> Job<'_> {
        Job::new(self)
    }

    /// Dedicated server market, provisioning and power control.
    pub fn dedicated(&self) -> DedicatedServer<'_> {
        DedicatedServer::new(self)
    }

    /// Virtual server provisioning, power control and backups.
    pub fn virtual_server(&self) -> VirtualServer<'_> {
        VirtualServer::new(self)
    }

    /// Managed software installation.
    pub fn software(&self) -> Software<'_> {
        Software::new(self)
    }
}

/// Builder for a [`HosterApi`] client.
///
/// The defaults match the upstream API contract: production endpoint,
/// 120-second timeout, redirects never followed, TLS verification on.
/// The historical client shipped with certificate verification disabled;
/// that behavior now has to be requested explicitly via
/// [`accept_invalid_certs`](HosterApiBuilder::accept_invalid_certs).
#[derive(Debug)]
pub struct HosterApiBuilder {
    token: String,
    sandbox: bool,
    accept_invalid_certs: bool,
    base_url: Option<String>,
    http_client: Option<reqwest::Client>,
}

impl HosterApiBuilder {
    fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
            sandbox: false,
            accept_invalid_certs: false,
            base_url: None,
            http_client: None,
        }
    }

    /// Targets the sandbox environment instead of production.
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Disables TLS certificate verification, restoring the behavior of
    /// the historical client. Leave this off unless the endpoint you talk
    /// to genuinely serves an untrusted certificate.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Overrides the resolved endpoint, e.g. to point at a mock server in
    /// tests or at a self-hosted gateway. The sandbox flag is ignored for
    /// URL resolution when an override is present.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Injects a preconfigured transport. The client is used as-is, so it
    /// is then responsible for its own timeout and redirect policy.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<HosterApi, Error> {
        let mut credentials = Credentials::new(&self.token, self.sandbox)?;
        if let Some(url) = self.base_url {
            credentials.set_url(url);
        }

        let http = match self.http_client {
            Some(client) => client,
            None => default_http_client(self.accept_invalid_certs)?,
        };

        Ok(HosterApi { credentials, http })
    }
}

fn default_http_client(accept_invalid_certs: bool) -> Result<reqwest::Client, Error> {
    Ok(reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(REQUEST_TIMEOUT)
        .danger_accept_invalid_certs(accept_invalid_certs)
        .build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> HosterApi {
        HosterApi::new("abc", false).unwrap()
    }

    fn form_pairs(request: &reqwest::Request) -> Vec<(String, String)> {
        let body = request.body().unwrap().as_bytes().unwrap();
        url::form_urlencoded::parse(body).into_owned().collect()
    }

    #[test]
    fn get_places_params_in_query() {
        let request = client()
            .build_request(
                Method::GET,
                "datacenter/dedicated",
                Params::new().add("page", 2),
            )
            .unwrap();

        assert_eq!(request.method(), &Method::GET);
        assert!(request.body().is_none());

        let pairs: Vec<(String, String)> = request.url().query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("page".to_string(), "2".to_string()),
                ("Authorization".to_string(), "Bearer abc".to_string()),
            ]
        );
    }

    #[test]
    fn post_places_params_in_form_body() {
        let request = client()
            .build_request(
                Method::POST,
                "datacenter/dedicated/order",
                Params::new()
                    .add("id", 7)
                    .add("template", "debian11")
                    .add("ipCount", 1)
                    .add("hostname", "node01.example.net"),
            )
            .unwrap();

        assert!(request.url().query().is_none());
        assert_eq!(
            form_pairs(&request),
            vec![
                ("id".to_string(), "7".to_string()),
                ("template".to_string(), "debian11".to_string()),
                ("ipCount".to_string(), "1".to_string()),
                ("hostname".to_string(), "node01.example.net".to_string()),
                ("Authorization".to_string(), "Bearer abc".to_string()),
            ]
        );
    }

    #[test]
    fn put_and_delete_use_form_bodies_too() {
        for method in [Method::PUT, Method::DELETE] {
            let request = client()
                .build_request(method.clone(), "datacenter/server/5/change", Params::new())
                .unwrap();
            assert_eq!(request.method(), &method);
            assert!(request.body().is_some());
            assert!(request.url().query().is_none());
        }
    }

    #[test]
    fn headers_and_params_carry_identical_bearer_value() {
        for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE] {
            let request = client()
                .build_request(method.clone(), "job/1", Params::new())
                .unwrap();

            let header = request.headers().get("Authorization").unwrap();
            assert_eq!(header, "Bearer abc");

            let duplicated = if method == Method::GET {
                request
                    .url()
                    .query_pairs()
                    .find(|(key, _)| key == "Authorization")
                    .map(|(_, value)| value.into_owned())
            } else {
                form_pairs(&request)
                    .into_iter()
                    .find(|(key, _)| key == "Authorization")
                    .map(|(_, value)| value)
            };
            assert_eq!(duplicated.as_deref(), Some("Bearer abc"));
        }
    }

    #[test]
    fn json_content_type_survives_form_encoding() {
        let request = client()
            .build_request(Method::POST, "software/install", Params::new())
            .unwrap();
        assert_eq!(
            request.headers().get("Content-Type").unwrap(),
            "application/json"
        );
        assert_eq!(request.headers().get("Accept").unwrap(), "application/json");
    }

    #[test]
    fn url_is_base_plus_relative_path() {
        let request = client()
            .build_request(Method::GET, "job/42", Params::new())
            .unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://reseller.hosterapi.de/api/v1/job/42?Authorization=Bearer+abc"
        );
    }

    #[test]
    fn sandbox_client_targets_sandbox_host() {
        let api = HosterApi::new("abc", true).unwrap();
        let request = api
            .build_request(Method::GET, "job/42", Params::new())
            .unwrap();
        assert_eq!(
            request.url().host_str(),
            Some("reseller-sandbox.hosterapi.de")
        );
    }

    #[test]
    fn unsupported_method_is_rejected_before_building() {
        let err = client()
            .build_request(Method::PATCH, "job/1", Params::new())
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedMethod(method) if method == Method::PATCH));

        let err = client()
            .build_request(Method::HEAD, "job/1", Params::new())
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedMethod(_)));
    }

    #[test]
    fn base_url_override_wins_over_sandbox_flag() {
        let api = HosterApi::builder("abc")
            .sandbox(true)
            .base_url("http://localhost:8080/api/v1/")
            .build()
            .unwrap();
        let request = api
            .build_request(Method::GET, "job/1", Params::new())
            .unwrap();
        assert!(request.url().as_str().starts_with("http://localhost:8080/api/v1/job/1"));
    }

    #[test]
    fn empty_token_fails_construction() {
        let err = HosterApi::new("", false).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
