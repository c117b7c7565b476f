//! Widget construction options

use pharmsearch_client::models::lenient_string;
use pharmsearch_client::Credentials;
use serde::Deserialize;

use crate::criteria::FilterCriteria;
use crate::error::{Error, Result};
use crate::pagination::{PaginationState, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

/// Options a host passes when instantiating a widget, using the host-facing
/// option names (`appID`, `URI`, `sortBy`, ...).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WidgetOptions {
    #[serde(rename = "appID", default)]
    pub app_id: Option<String>,
    #[serde(default)]
    pub app_key: Option<String>,
    #[serde(rename = "appURL", default)]
    pub app_url: Option<String>,
    #[serde(rename = "URI")]
    pub uri: String,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub assay_organism: Option<String>,
    #[serde(default)]
    pub target_organism: Option<String>,
    /// Activity type, e.g. `IC50`.
    #[serde(default)]
    pub activity: Option<String>,
    #[serde(default)]
    pub activity_condition: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub activity_value: Option<String>,
    #[serde(default)]
    pub activity_unit: Option<String>,
    #[serde(default)]
    pub activity_relations: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub pchembl_value: Option<String>,
    #[serde(default)]
    pub pchembl_condition: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_direction: Option<String>,
    #[serde(default)]
    pub lens: Option<String>,
    #[serde(default)]
    pub target_type: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Placement id the rendered table is written to.
    pub target: String,
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl WidgetOptions {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidOptions(e.to_string()))
    }

    /// Filter criteria carried by these options.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            uri: self.uri.clone(),
            assay_organism: self.assay_organism.clone(),
            target_organism: self.target_organism.clone(),
            activity_type: self.activity.clone(),
            activity_unit: self.activity_unit.clone(),
            activity_condition: self.activity_condition.clone(),
            activity_value: self.activity_value.clone(),
            activity_relations: self.activity_relations.clone(),
            pchembl_condition: self.pchembl_condition.clone(),
            pchembl_value: self.pchembl_value.clone(),
            sort_column: self.sort_by.clone(),
            sort_direction: self.sort_direction.clone(),
            lens: self.lens.clone(),
            target_type: self.target_type.clone(),
        }
    }

    pub fn pagination(&self) -> Result<PaginationState> {
        PaginationState::new(self.page, self.page_size)
    }

    /// Credentials when both `appID` and `appKey` are given.
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.app_id, &self.app_key) {
            (Some(app_id), Some(app_key)) => Some(Credentials {
                app_id: app_id.clone(),
                app_key: app_key.clone(),
            }),
            _ => None,
        }
    }
}
