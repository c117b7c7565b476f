//! Count-then-page fetch controller

use std::sync::Arc;

use pharmsearch_client::{parse_count, parse_results, SearchClient};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::criteria::FilterCriteria;
use crate::error::{Error, Result};
use crate::options::WidgetOptions;
use crate::pagination::PaginationState;
use crate::render::{RenderTarget, Renderer, DEFAULT_BODY_TEMPLATE, DEFAULT_TABLE_TEMPLATE};
use crate::resolver::{resolve, ResolvedQueryParameters};

const EVENT_CAPACITY: usize = 16;

/// Where the last fetch got to.
///
/// `Idle` until the first fetch; afterwards the terminal state of the most
/// recent fetch (`Rendered`, `Empty` or `Failed`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    CountPending,
    DataPending,
    Rendered,
    Empty,
    Failed,
}

/// Result of a successful fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The count was zero; no data query was issued and nothing was rendered.
    Empty,
    Rendered {
        total: u64,
        page: u32,
        records: usize,
    },
}

/// Notifications for the widget host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    Error { message: String },
}

/// Drives the count query, the conditional data query and the render for
/// one widget instance.
///
/// Criteria are fixed at construction. Fetches take `&mut self`, so calls on
/// one controller are serialized by the borrow checker; separate controllers
/// writing to the same placement overwrite each other in completion order.
pub struct QueryController {
    criteria: FilterCriteria,
    pagination: PaginationState,
    template: Option<String>,
    target_id: String,
    client: Arc<dyn SearchClient>,
    renderer: Arc<dyn Renderer>,
    target: Arc<dyn RenderTarget>,
    state: FetchState,
    events: broadcast::Sender<WidgetEvent>,
}

impl QueryController {
    pub fn new(
        criteria: FilterCriteria,
        pagination: PaginationState,
        target_id: impl Into<String>,
        client: Arc<dyn SearchClient>,
        renderer: Arc<dyn Renderer>,
        target: Arc<dyn RenderTarget>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            criteria,
            pagination,
            template: None,
            target_id: target_id.into(),
            client,
            renderer,
            target,
            state: FetchState::Idle,
            events,
        }
    }

    /// Build a controller from host options.
    pub fn from_options(
        options: &WidgetOptions,
        client: Arc<dyn SearchClient>,
        renderer: Arc<dyn Renderer>,
        target: Arc<dyn RenderTarget>,
    ) -> Result<Self> {
        let controller = Self::new(
            options.criteria(),
            options.pagination()?,
            options.target.clone(),
            client,
            renderer,
            target,
        );
        Ok(match &options.template {
            Some(template) => controller.with_template(template.clone()),
            None => controller,
        })
    }

    /// Template for [`QueryController::load`] instead of the full-table default.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn state(&self) -> FetchState {
        self.state
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    pub fn resolved(&self) -> ResolvedQueryParameters {
        resolve(&self.criteria)
    }

    /// Receive [`WidgetEvent`]s emitted by later fetches.
    pub fn subscribe(&self) -> broadcast::Receiver<WidgetEvent> {
        self.events.subscribe()
    }

    /// Initial fetch of the current page into the configured placement.
    pub async fn load(&mut self) -> Result<FetchOutcome> {
        let template = self
            .template
            .clone()
            .unwrap_or_else(|| DEFAULT_TABLE_TEMPLATE.to_string());
        let target_id = self.target_id.clone();
        let page = self.pagination.page();
        self.run(page, &template, &target_id).await
    }

    /// Fetch `page` with the same criteria.
    ///
    /// `template` defaults to the body-rows template and `replace_id` to the
    /// configured placement. On success the current page becomes `page`.
    pub async fn fetch_page(
        &mut self,
        page: u32,
        template: Option<&str>,
        replace_id: Option<&str>,
    ) -> Result<FetchOutcome> {
        let template = template.unwrap_or(DEFAULT_BODY_TEMPLATE).to_string();
        let target_id = replace_id.unwrap_or(self.target_id.as_str()).to_string();
        self.run(page, &template, &target_id).await
    }

    async fn run(&mut self, page: u32, template: &str, target_id: &str) -> Result<FetchOutcome> {
        match self.fetch(page, template, target_id).await {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                self.state = FetchState::Failed;
                warn!(page, placement = target_id, error = %err, "pharmacology fetch failed");
                // No subscribers is fine.
                let _ = self.events.send(WidgetEvent::Error {
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    async fn fetch(&mut self, page: u32, template: &str, target_id: &str) -> Result<FetchOutcome> {
        if page == 0 {
            return Err(Error::InvalidPage(page));
        }

        let resolved = resolve(&self.criteria);

        self.state = FetchState::CountPending;
        debug!(uri = %resolved.query.uri, "requesting pharmacology count");
        let response = self.client.count_query(&resolved.query).await?;
        let total = parse_count(&response.body)?;

        if total == 0 {
            self.state = FetchState::Empty;
            info!(uri = %resolved.query.uri, "no pharmacology records match, skipping data query");
            return Ok(FetchOutcome::Empty);
        }

        self.state = FetchState::DataPending;
        let request = self
            .pagination
            .request_for(page, resolved.sort_expr.as_deref());
        debug!(
            total,
            page,
            page_size = request.page_size,
            "requesting pharmacology page"
        );
        let response = self.client.data_query(&resolved.query, &request).await?;
        let records = parse_results(&response.body)?;

        let markup = self.renderer.render(&records, template)?;
        self.target.replace_content(target_id, markup);
        self.pagination.advance_to(page);
        self.state = FetchState::Rendered;

        info!(
            total,
            page,
            records = records.len(),
            placement = target_id,
            "rendered pharmacology page"
        );
        Ok(FetchOutcome::Rendered {
            total,
            page,
            records: records.len(),
        })
    }
}
