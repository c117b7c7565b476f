//! Wire-level query parameters for the pharmacology search API
//!
//! These types carry already-normalized values. Turning user-facing filter
//! options into them is the widget's job; this module only knows how each
//! field is spelled on the wire.

/// Separator placed after every symbol of an activity relation expression.
pub const RELATION_SEPARATOR: char = '|';

/// Bound set for one numeric dimension (activity value or pChembl).
///
/// At most one of `exact` or the four bounds is populated by the widget, but
/// the type itself does not enforce that so callers can build ad-hoc queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeFilter {
    pub exact: Option<String>,
    pub min: Option<String>,
    pub min_exclusive: Option<String>,
    pub max: Option<String>,
    pub max_exclusive: Option<String>,
}

impl RangeFilter {
    pub fn is_empty(&self) -> bool {
        self.populated() == 0
    }

    /// Number of populated fields.
    pub fn populated(&self) -> usize {
        [
            &self.exact,
            &self.min,
            &self.min_exclusive,
            &self.max,
            &self.max_exclusive,
        ]
        .iter()
        .filter(|v| v.is_some())
        .count()
    }

    /// Append this range under `name`, e.g. `activity_value` and
    /// `min-activity_value`.
    fn push_pairs(&self, name: &str, pairs: &mut Vec<(String, String)>) {
        let fields = [
            (String::from(name), &self.exact),
            (format!("min-{name}"), &self.min),
            (format!("minEx-{name}"), &self.min_exclusive),
            (format!("max-{name}"), &self.max),
            (format!("maxEx-{name}"), &self.max_exclusive),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                pairs.push((key, value.clone()));
            }
        }
    }
}

/// Filter parameters shared by the count and data queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PharmacologyQuery {
    /// Target URI the pharmacology is requested for.
    pub uri: String,
    pub assay_organism: Option<String>,
    pub target_organism: Option<String>,
    pub activity_type: Option<String>,
    pub activity: RangeFilter,
    pub activity_unit: Option<String>,
    /// Relation symbols joined with [`RELATION_SEPARATOR`].
    pub activity_relation: Option<String>,
    pub pchembl: RangeFilter,
    pub target_type: Option<String>,
    pub lens: Option<String>,
}

impl PharmacologyQuery {
    /// Query-string pairs for every populated field, in a stable order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("uri".to_string(), self.uri.clone())];

        let optional = [
            ("assay_organism", &self.assay_organism),
            ("target_organism", &self.target_organism),
            ("activity_type", &self.activity_type),
        ];
        push_optional(&optional, &mut pairs);

        self.activity.push_pairs("activity_value", &mut pairs);

        let optional = [
            ("activity_unit", &self.activity_unit),
            ("activity_relation", &self.activity_relation),
        ];
        push_optional(&optional, &mut pairs);

        self.pchembl.push_pairs("pchembl", &mut pairs);

        let optional = [("target_type", &self.target_type), ("_lens", &self.lens)];
        push_optional(&optional, &mut pairs);

        pairs
    }
}

/// Paging and ordering for a data query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest<'a> {
    pub page: u32,
    pub page_size: u32,
    /// Backend sort expression, e.g. `?activityStandardValue` or
    /// `DESC(?activityStandardValue)`.
    pub order_by: Option<&'a str>,
}

impl PageRequest<'_> {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("_page".to_string(), self.page.to_string()),
            ("_pageSize".to_string(), self.page_size.to_string()),
        ];
        if let Some(order_by) = self.order_by {
            pairs.push(("_orderBy".to_string(), order_by.to_string()));
        }
        pairs
    }
}

/// Split a relation expression back into its symbols.
///
/// Empty fragments are dropped, so `">|=|"` and `">|="` both yield
/// `[">", "="]`.
pub fn split_relation_expr(expr: &str) -> Vec<String> {
    expr.split(RELATION_SEPARATOR)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

fn push_optional(fields: &[(&str, &Option<String>)], pairs: &mut Vec<(String, String)>) {
    for (key, value) in fields {
        if let Some(value) = value {
            pairs.push((key.to_string(), value.clone()));
        }
    }
}
