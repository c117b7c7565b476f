//! Pharmacology search widget core
//!
//! Resolves user-facing filter options (organisms, activity type/value/
//! condition, relation list, pChembl value/condition, sort column/direction)
//! into the parameters a pharmacology search API expects, then runs a count
//! query followed, when the count is non-zero, by a page query whose records
//! are rendered into a placement.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pharmsearch_client::{Credentials, PharmacologyApiClient};
//! use pharmsearch_widget::{MemoryTarget, QueryController, TemplateRenderer, WidgetOptions};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = WidgetOptions::from_json_str(r#"{
//!     "URI": "http://www.conceptwiki.org/concept/b932a1ed-b6c3-4291-a98a-e195668eda49",
//!     "activity": "IC50", "activityUnit": "nM",
//!     "activityCondition": ">=", "activityValue": "5",
//!     "target": "pharmacology"
//! }"#)?;
//! let client = PharmacologyApiClient::new(
//!     "https://beta.openphacts.org/1.5",
//!     Credentials { app_id: "id".into(), app_key: "key".into() },
//! )?;
//! let target = Arc::new(MemoryTarget::new());
//! let mut controller = QueryController::from_options(
//!     &options,
//!     Arc::new(client),
//!     Arc::new(TemplateRenderer),
//!     target.clone(),
//! )?;
//! controller.load().await?;
//! controller.fetch_page(2, None, None).await?;
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]

pub mod controller;
pub mod criteria;
pub mod error;
pub mod options;
pub mod pagination;
pub mod render;
pub mod resolver;

pub use controller::{FetchOutcome, FetchState, QueryController, WidgetEvent};
pub use criteria::{Condition, FilterCriteria, SortDirection};
pub use error::{Error, Result};
pub use options::WidgetOptions;
pub use pagination::PaginationState;
pub use render::{
    MemoryTarget, RenderTarget, Renderer, TemplateRenderer, DEFAULT_BODY_TEMPLATE,
    DEFAULT_TABLE_TEMPLATE,
};
pub use resolver::{resolve, ResolvedQueryParameters};
