//! Pharmacology Search API Client
//!
//! Async client for the target-pharmacology endpoints of a linked-data
//! pharmacology search API: a count query and a paginated data query, both
//! driven by the same normalized filter parameters.
//!
//! # Examples
//!
//! ```rust,no_run
//! use pharmsearch_client::{
//!     parse_count, Credentials, PharmacologyApiClient, PharmacologyQuery, SearchClient,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PharmacologyApiClient::new(
//!     "https://beta.openphacts.org/1.5",
//!     Credentials { app_id: "id".into(), app_key: "key".into() },
//! )?;
//! let query = PharmacologyQuery {
//!     uri: "http://www.conceptwiki.org/concept/b932a1ed-b6c3-4291-a98a-e195668eda49".into(),
//!     ..Default::default()
//! };
//! let _total = parse_count(&client.count_query(&query).await?.body)?;
//! # Ok(())
//! # }
//! ```
pub mod async_client;
pub mod error;
pub mod models;
pub mod query;

pub use async_client::{Credentials, PharmacologyApiClient, SearchClient};
pub use error::{Error, Result};
pub use models::{parse_count, parse_results, PharmacologyRecord, RawResponse};
pub use query::{
    split_relation_expr, PageRequest, PharmacologyQuery, RangeFilter, RELATION_SEPARATOR,
};
