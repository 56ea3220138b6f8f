//! Typed Rust client for the HosterAPI reseller REST API.
//!
//! Construct a [`HosterApi`] with an API token, then reach the resource
//! groups (dedicated servers, virtual servers, jobs, software) through its
//! accessors. Every call returns an [`ApiResponse`]: the decoded JSON value
//! when the server answered with JSON, or the raw body text when it did not.
//!
//! ```no_run
//! use hosterapi::HosterApi;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), hosterapi::Error> {
//!     let api = HosterApi::new("abc", false)?;
//!
//!     let job = api.job().get(42).await?;
//!     if let Some(value) = job.as_json() {
//!         println!("job state: {value}");
//!     }
//!
//!     api.virtual_server().start(1337).await?;
//!     Ok(())
//! }
//! ```
//!
//! The sandbox flag targets the provider's test environment instead of
//! production. TLS verification is on by default; the builder can relax it
//! for endpoints that still serve untrusted certificates, inject a custom
//! `reqwest::Client`, or point the whole client at another base URL.

mod client;
mod credentials;
mod datacenter;
mod error;
mod job;
mod response;
mod software;

pub use client::{HosterApi, HosterApiBuilder, Params};
pub use credentials::Credentials;
pub use datacenter::{DedicatedServer, VirtualServer};
pub use error::Error;
pub use job::Job;
pub use reqwest::Method;
pub use response::ApiResponse;
pub use software::Software;
