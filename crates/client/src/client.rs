//! The shared client context: authentication, transport and version
//! metadata.
//!
//! [`Swarm`] owns the authenticated HTTP client and the API version
//! negotiated from the configured URL. Endpoint groups borrow it and
//! funnel every call through [`Swarm::request`], which is the only place
//! a request is encoded and a response decoded.

use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method};
use serde::Deserialize;
use serde_json::Value;

use swarm_core::error::CompatibilityError;
use swarm_core::params::Params;
use swarm_core::version;

use crate::config::SwarmConfig;
use crate::endpoints::activity::Activity;
use crate::endpoints::comments::Comments;
use crate::endpoints::groups::Groups;
use crate::endpoints::projects::Projects;
use crate::endpoints::reviews::Reviews;
use crate::endpoints::users::Users;
use crate::error::SwarmError;

/// Server version metadata returned by `GET version`.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionInfo {
    /// Every API version the server accepts, oldest first.
    #[serde(rename = "apiVersions", default)]
    pub api_versions: Vec<u32>,
    /// Full server version string, e.g. `SWARM/2022.1/2268622`.
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
}

/// Request body encoding, chosen per operation.
#[derive(Debug, Clone)]
pub(crate) enum Body {
    Form(Vec<(String, String)>),
    Json(Value),
}

/// Shared client context handed to every endpoint group.
///
/// All state is immutable after construction: the API root, the version
/// parsed from it, and a pooled `reqwest` client with the Basic-auth
/// header installed once.
#[derive(Debug, Clone)]
pub struct Swarm {
    base_url: String,
    api_version: u32,
    http: Client,
}

impl Swarm {
    /// Build a client from explicit settings.
    pub fn new(config: SwarmConfig) -> Result<Self, SwarmError> {
        let base_url = config.url.trim_end_matches('/').to_string();
        let api_version = parse_api_version(&base_url)?;
        let http = build_http_client(&config)?;

        Ok(Self {
            base_url,
            api_version,
            http,
        })
    }

    /// The major API version negotiated from the configured URL.
    pub fn api_version(&self) -> u32 {
        self.api_version
    }

    /// Fail unless the negotiated version supports `feature`.
    pub(crate) fn require_version(
        &self,
        min_version: u32,
        feature: &str,
    ) -> Result<(), CompatibilityError> {
        version::require(self.api_version, min_version, feature)
    }

    /// Fetch full version metadata from the server.
    ///
    /// Not cached; each call performs a request.
    pub async fn get_version(&self) -> Result<VersionInfo, SwarmError> {
        let url = format!("{}/version", self.base_url);
        log::debug!("GET {url}");

        let response = check_status(self.http.get(&url).send().await?).await?;
        Ok(response.json::<VersionInfo>().await?)
    }

    /// Perform one API request and decode the JSON response.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        query: Params,
        body: Option<Body>,
    ) -> Result<Value, SwarmError> {
        let url = format!("{}/{}", self.base_url, path);
        log::debug!("{method} {url}");

        let mut request = self.http.request(method, &url);
        if !query.is_empty() {
            request = request.query(&query.to_query());
        }
        match body {
            Some(Body::Form(fields)) => request = request.form(&fields),
            Some(Body::Json(value)) => request = request.json(&value),
            None => {}
        }

        let response = check_status(request.send().await?).await?;
        Ok(response.json::<Value>().await?)
    }

    pub fn groups(&self) -> Groups<'_> {
        Groups::new(self)
    }

    pub fn reviews(&self) -> Reviews<'_> {
        Reviews::new(self)
    }

    pub fn comments(&self) -> Comments<'_> {
        Comments::new(self)
    }

    pub fn projects(&self) -> Projects<'_> {
        Projects::new(self)
    }

    pub fn activity(&self) -> Activity<'_> {
        Activity::new(self)
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }
}

/// Map non-success statuses to [`SwarmError::Response`].
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, SwarmError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    log::debug!("swarm responded [{status}]: {body}");

    Err(SwarmError::Response {
        status: status.as_u16(),
        body,
    })
}

/// Extract the negotiated version from an `…/api/vN` URL.
fn parse_api_version(url: &str) -> Result<u32, SwarmError> {
    let mut segments = url.rsplit('/');

    let version = segments
        .next()
        .and_then(|segment| segment.strip_prefix('v'))
        .and_then(|digits| digits.parse::<u32>().ok());

    match (version, segments.next()) {
        (Some(version), Some("api")) => Ok(version),
        _ => Err(SwarmError::Config(format!(
            "expected an …/api/vN URL, got {url}"
        ))),
    }
}

/// Build an HTTP client with the Basic-auth header installed.
fn build_http_client(config: &SwarmConfig) -> Result<Client, SwarmError> {
    let auth_string = format!("{}:{}", config.user, config.token);
    let auth_encoded = base64::engine::general_purpose::STANDARD.encode(&auth_string);

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Basic {auth_encoded}"))
            .map_err(|e| SwarmError::Config(format!("invalid credentials: {e}")))?,
    );
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    Client::builder()
        .default_headers(headers)
        .build()
        .map_err(SwarmError::Transport)
}
