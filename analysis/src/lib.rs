//! # panther-analysis
//!
//! HTTP client for the Panther analysis API.
//!
//! ## Quick Start
//!
//! ```
//! use panther_analysis::client::{Client, ClientConfig};
//! use panther_analysis::http::policy::get::GetPolicyParams;
//!
//! async fn run() -> Result<(), panther_analysis::http::Error> {
//!     let client = Client::new(ClientConfig::default().with_endpoint("https://analysis.example.com/v1"));
//!     let params = GetPolicyParams::new()
//!         .with_id("AWS.S3.Bucket.Encryption")
//!         .with_version_id(Some("3sJm1tDRc1dXqCPnYyMTTYqkFr1q4X5p".to_string()));
//!     let policy = client.get_policy(&params).await?;
//!     println!("{} enabled={}", policy.id, policy.enabled);
//!     Ok(())
//! }
//! ```
//!
//! Parameters carry their own timeout, an optional [`tokio_util::sync::CancellationToken`] and an
//! optional HTTP client replacing the default transport for that call only.
//! Empty parameter values are left out of the request; use
//! [`http::policy::get::EmptyValuePolicy::Reject`] to have them reported as validation errors instead.
pub mod client;
pub mod http;
