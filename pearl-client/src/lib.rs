//! Pearl Client - HTTP client for the POS backend
//!
//! Provides the REST calls behind the front-of-house views and the
//! remote-resource primitive that owns one fetch-and-store cycle.

pub mod config;
pub mod error;
pub mod http;
pub mod resource;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use resource::{FetchState, RemoteResource};
