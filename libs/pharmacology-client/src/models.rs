//! Response models and parsing for the pharmacology search API

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Raw response of a successful query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// One pharmacology activity record from a page of results.
///
/// Well-known fields are lifted out; everything else (assay, molecule and
/// target sub-documents) stays available through `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PharmacologyRecord {
    #[serde(
        rename(deserialize = "_about"),
        default,
        deserialize_with = "lenient_string"
    )]
    pub about: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub pmid: Option<String>,
    #[serde(
        rename(deserialize = "activityActivityType"),
        default,
        deserialize_with = "lenient_string"
    )]
    pub activity_type: Option<String>,
    #[serde(
        rename(deserialize = "activityRelation"),
        default,
        deserialize_with = "lenient_string"
    )]
    pub activity_relation: Option<String>,
    #[serde(
        rename(deserialize = "activityStandardValue"),
        default,
        deserialize_with = "lenient_number"
    )]
    pub activity_value: Option<f64>,
    #[serde(
        rename(deserialize = "activityStandardUnits"),
        default,
        deserialize_with = "lenient_string"
    )]
    pub activity_unit: Option<String>,
    #[serde(
        rename(deserialize = "pChembl"),
        default,
        deserialize_with = "lenient_number"
    )]
    pub pchembl: Option<f64>,
    #[serde(
        rename(deserialize = "activityComment"),
        default,
        deserialize_with = "lenient_string"
    )]
    pub activity_comment: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Extract the total result count from a count-query response.
///
/// Reads `result.primaryTopic.targetPharmacologyTotalResults`, falling back to
/// the first other `*TotalResults` integer under `primaryTopic`.
pub fn parse_count(raw: &str) -> Result<u64> {
    let doc: Value = serde_json::from_str(raw)?;
    let topic = doc
        .pointer("/result/primaryTopic")
        .and_then(Value::as_object)
        .ok_or_else(|| Error::MalformedResponse("missing result.primaryTopic".to_string()))?;

    if let Some(total) = topic.get("targetPharmacologyTotalResults") {
        return total.as_u64().ok_or_else(|| {
            Error::MalformedResponse(format!("total results is not a count: {total}"))
        });
    }

    topic
        .iter()
        .find(|(key, _)| key.ends_with("TotalResults"))
        .and_then(|(_, value)| value.as_u64())
        .ok_or_else(|| Error::MalformedResponse("no total results in primaryTopic".to_string()))
}

/// Extract the ordered result records from a data-query response.
///
/// A single-object `items` value is treated as a one-element page.
pub fn parse_results(raw: &str) -> Result<Vec<PharmacologyRecord>> {
    let mut doc: Value = serde_json::from_str(raw)?;
    let items = doc
        .pointer_mut("/result/items")
        .map(Value::take)
        .ok_or_else(|| Error::MalformedResponse("missing result.items".to_string()))?;

    match items {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(Error::from))
            .collect(),
        item @ Value::Object(_) => Ok(vec![serde_json::from_value(item)?]),
        other => Err(Error::MalformedResponse(format!(
            "result.items is neither a list nor an object: {other}"
        ))),
    }
}

/// Serde helper reading a string, number or boolean as its string form.
///
/// Any other JSON type reads as `None`.
pub fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
