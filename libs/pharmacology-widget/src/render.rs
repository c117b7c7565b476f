//! Rendering seams: markup generation and placement
//!
//! The controller hands a page of records to a [`Renderer`] and writes the
//! markup to a [`RenderTarget`]. Both are traits so hosts can plug in their
//! own templating and output surface.

use std::collections::HashMap;
use std::sync::Mutex;

use pharmsearch_client::PharmacologyRecord;
use tera::{Context, Tera};

use crate::error::Result;

/// Full table with header, used for the initial load.
pub const DEFAULT_TABLE_TEMPLATE: &str = r#"<table class="pharmacology-table">
<thead>
<tr><th>Activity</th><th>Relation</th><th>Value</th><th>Unit</th><th>pChEMBL</th><th>PubMed</th></tr>
</thead>
<tbody>
{% for record in records -%}
<tr><td>{% if record.activity_type %}{{ record.activity_type }}{% endif %}</td><td>{% if record.activity_relation %}{{ record.activity_relation }}{% endif %}</td><td>{% if record.activity_value is number %}{{ record.activity_value }}{% endif %}</td><td>{% if record.activity_unit %}{{ record.activity_unit }}{% endif %}</td><td>{% if record.pchembl is number %}{{ record.pchembl }}{% endif %}</td><td>{% if record.pmid %}{{ record.pmid }}{% endif %}</td></tr>
{% endfor -%}
</tbody>
</table>
"#;

/// Body rows only, used when a later page replaces an existing table body.
pub const DEFAULT_BODY_TEMPLATE: &str = r#"{% for record in records -%}
<tr><td>{% if record.activity_type %}{{ record.activity_type }}{% endif %}</td><td>{% if record.activity_relation %}{{ record.activity_relation }}{% endif %}</td><td>{% if record.activity_value is number %}{{ record.activity_value }}{% endif %}</td><td>{% if record.activity_unit %}{{ record.activity_unit }}{% endif %}</td><td>{% if record.pchembl is number %}{{ record.pchembl }}{% endif %}</td><td>{% if record.pmid %}{{ record.pmid }}{% endif %}</td></tr>
{% endfor -%}
"#;

/// Turns a page of records into markup.
pub trait Renderer: Send + Sync {
    fn render(&self, records: &[PharmacologyRecord], template: &str) -> Result<String>;
}

/// Destination for rendered markup, addressed by placement id.
pub trait RenderTarget: Send + Sync {
    /// Replace whatever is at `target_id` with `markup`.
    fn replace_content(&self, target_id: &str, markup: String);
}

/// [`Renderer`] backed by autoescaped Tera templates.
///
/// Records are exposed to the template as `records`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateRenderer;

impl Renderer for TemplateRenderer {
    fn render(&self, records: &[PharmacologyRecord], template: &str) -> Result<String> {
        let mut context = Context::new();
        context.insert("records", records);
        Ok(Tera::one_off(template, &context, true)?)
    }
}

/// In-process placement map.
#[derive(Debug, Default)]
pub struct MemoryTarget {
    contents: Mutex<HashMap<String, String>>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current markup at `target_id`, if anything was written there.
    pub fn content(&self, target_id: &str) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(target_id)
            .cloned()
    }
}

impl RenderTarget for MemoryTarget {
    fn replace_content(&self, target_id: &str, markup: String) {
        self.contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(target_id.to_string(), markup);
    }
}
