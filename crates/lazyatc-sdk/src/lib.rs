//! # LazyATC SDK
//!
//! Client for the remote API that suggests valid alternate routes between
//! two aerodromes.
//!
//! The SDK provides:
//!
//! * [`RoutesClient`]: issues `GET /routes?dept=&dest=` requests.
//! * [`RoutesPayload`]: the decoded response body.
//! * [`ApiConfig`]: base URL, read from `LAZYATC_API_URL`.
//! * [`SdkError`]: unified error type for all SDK operations.

pub mod client;
pub mod config;
pub mod error;

pub use client::{RoutesClient, RoutesPayload};
pub use config::{ApiConfig, DEFAULT_API_URL};
pub use error::SdkError;
