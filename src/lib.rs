//! # Cloudnode API client
//!
//! A typed, async Rust client for the Cloudnode REST API.
//!
//! ## Features
//!
//! - **Typed operations**: one method per API operation, grouped by
//!   namespace, backed by static operation descriptors
//! - **Auto-retry**: failed calls are retried after the server's hinted
//!   delay, bounded by a delay cap and an attempt budget
//! - **Pagination**: fetch single pages, neighbours, or every page of a
//!   result concurrently
//! - **Response envelopes**: every result pairs the typed data with the
//!   transport metadata and the request it came from
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cloudnode::{Client, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::with_token("token_...");
//!
//!     // Typed calls return an envelope: data plus transport metadata
//!     let newsletters = client.newsletters().list(10, 1).await?;
//!     for newsletter in &newsletters.data.items {
//!         println!("{}", newsletter.name);
//!     }
//!
//!     // Fetch the remaining pages concurrently and merge them
//!     let all = client.get_all_pages(&newsletters).await?;
//!     println!("{} newsletters in total", all.items.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          Client                             │
//! │  newsletters() tokens() auth() account() projects()  call() │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌───────────┬──────────────┬──┴──────────┬────────────────────┐
//! │  Schema   │    Retry     │  Executor   │     Pagination     │
//! ├───────────┼──────────────┼─────────────┼────────────────────┤
//! │ Operation │ Header hints │ URL build   │ get_page           │
//! │ Parameter │ Delay cap    │ Body encode │ next / previous    │
//! │ Auth      │ Budget       │ Decode      │ get_all_pages      │
//! └───────────┴──────────────┴─────────────┴────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration and retry policy
pub mod config;

/// Declarative operation descriptors
pub mod schema;

/// Response envelopes and body decoding
pub mod response;

/// Request execution and retry
pub mod http;

/// Pagination helpers
pub mod pagination;

/// Typed API surface and wire models
pub mod api;

/// The API client
pub mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use api::models;
pub use client::{Client, Compatibility};
pub use config::{ClientConfig, RetryOverrides};
pub use error::{Error, Result};
pub use pagination::PaginatedData;
pub use response::{Envelope, ErrorResponse, RequestBody, RequestContext, ResponseMeta};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// API schema version this client was built for
pub const API_VERSION: &str = "5.12.0";

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("cloudnode/", env!("CARGO_PKG_VERSION"));
