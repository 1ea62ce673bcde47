//! HTTP client for the alternate routes API.
//!
//! ```text
//! GET {base}/routes?dept=YSSY&dest=YMML
//! → { "routes": [ { "acft": "B738", "route": "WOL H65 LEECE Q29 ML" }, ... ] }
//! ```
//!
//! # Typical usage
//!
//! ```rust,no_run
//! use lazyatc_models::RouteQuery;
//! use lazyatc_sdk::{ApiConfig, RoutesClient};
//!
//! # async fn run() -> Result<(), lazyatc_sdk::SdkError> {
//! let client = RoutesClient::new(ApiConfig::from_env())?;
//! let query = RouteQuery::from_input("YSSY", "YMML").expect("valid codes");
//! let payload = client.fetch_routes(&query).await?;
//! println!("{:?}", payload.routes);
//! # Ok(())
//! # }
//! ```

use lazyatc_models::RouteQuery;
use serde_json::Value;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::SdkError;

/// Body of a routes response, before individual options are interpreted.
///
/// `routes` is `None` only when the key is absent. Elements are kept as raw
/// JSON so a malformed element only affects itself and those after it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoutesPayload {
    /// The `routes` array, if present.
    pub routes: Option<Vec<Value>>,
}

impl RoutesPayload {
    /// Decode a response body.
    ///
    /// The root must be a JSON object. A `routes` key that is present must
    /// hold an array; `null` or any other value is an error.
    pub fn from_json(body: &str) -> Result<Self, SdkError> {
        Self::from_value(serde_json::from_str(body)?)
    }

    /// Interpret an already parsed body. See [`from_json`](Self::from_json).
    pub fn from_value(body: Value) -> Result<Self, SdkError> {
        let Value::Object(mut root) = body else {
            return Err(SdkError::Shape("response is not a JSON object"));
        };
        let routes = match root.remove("routes") {
            None => None,
            Some(Value::Array(routes)) => Some(routes),
            Some(_) => return Err(SdkError::Shape("`routes` is not an array")),
        };
        Ok(Self { routes })
    }
}

/// Client for the routes API.
///
/// Holds a single [`reqwest::Client`] reused across requests. Cloning is
/// cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct RoutesClient {
    http: reqwest::Client,
    routes_url: reqwest::Url,
}

impl RoutesClient {
    /// Build a client for the API described by `config`.
    pub fn new(config: ApiConfig) -> Result<Self, SdkError> {
        let routes_url = reqwest::Url::parse(&config.routes_url())
            .map_err(|e| SdkError::Config(format!("invalid API URL {}: {e}", config.base_url)))?;
        Ok(Self {
            http: reqwest::Client::new(),
            routes_url,
        })
    }

    /// The endpoint requests are sent to.
    pub fn routes_url(&self) -> &reqwest::Url {
        &self.routes_url
    }

    /// Issue one `GET /routes` for `query`.
    ///
    /// Non-success statuses, transport failures and bodies rejected by
    /// [`RoutesPayload::from_json`] are errors. No retry is attempted.
    pub async fn fetch_routes(&self, query: &RouteQuery) -> Result<RoutesPayload, SdkError> {
        debug!(%query, url = %self.routes_url, "requesting routes");

        let res = self
            .http
            .get(self.routes_url.clone())
            .query(&query.params())
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(SdkError::Status { status });
        }

        let body = res.text().await?;
        let payload = RoutesPayload::from_json(&body)?;

        debug!(
            %query,
            count = payload.routes.as_ref().map_or(0, Vec::len),
            "routes received"
        );
        Ok(payload)
    }
}
