//! Where route suggestions come from.

use std::future::Future;

use lazyatc_models::RouteQuery;
use lazyatc_sdk::{RoutesClient, RoutesPayload, SdkError};

/// Anything that can answer a route query the way the routes API does.
pub trait RouteSource {
    /// Fetch the raw payload for `query`.
    fn fetch_routes(
        &self,
        query: &RouteQuery,
    ) -> impl Future<Output = Result<RoutesPayload, SdkError>> + Send;
}

impl RouteSource for RoutesClient {
    fn fetch_routes(
        &self,
        query: &RouteQuery,
    ) -> impl Future<Output = Result<RoutesPayload, SdkError>> + Send {
        RoutesClient::fetch_routes(self, query)
    }
}
