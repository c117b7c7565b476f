//! Filter resolution: user-facing criteria to API query parameters
//!
//! Resolution never fails. A condition symbol outside the five known ones, or
//! a partially specified filter, resolves to no filter for that dimension.

use pharmsearch_client::{PharmacologyQuery, RangeFilter, RELATION_SEPARATOR};
use tracing::debug;

use crate::criteria::{Condition, FilterCriteria, SortDirection};

/// Normalized parameters derived from a [`FilterCriteria`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedQueryParameters {
    /// Filters shared by the count and data queries.
    pub query: PharmacologyQuery,
    /// Ordering for the data query only.
    pub sort_expr: Option<String>,
}

/// Resolve `criteria` into API-ready parameters.
pub fn resolve(criteria: &FilterCriteria) -> ResolvedQueryParameters {
    // The activity range only applies when type, unit, condition and value
    // are all given.
    let activity = match (
        &criteria.activity_type,
        &criteria.activity_unit,
        &criteria.activity_condition,
        &criteria.activity_value,
    ) {
        (Some(_), Some(_), Some(condition), Some(value)) => range_for(condition, value),
        _ => RangeFilter::default(),
    };

    let pchembl = match (&criteria.pchembl_condition, &criteria.pchembl_value) {
        (Some(condition), Some(value)) => range_for(condition, value),
        _ => RangeFilter::default(),
    };

    let query = PharmacologyQuery {
        uri: criteria.uri.clone(),
        assay_organism: criteria.assay_organism.clone(),
        target_organism: criteria.target_organism.clone(),
        activity_type: criteria.activity_type.clone(),
        activity,
        activity_unit: criteria.activity_unit.clone(),
        activity_relation: relation_expr(&criteria.activity_relations),
        pchembl,
        target_type: criteria.target_type.clone(),
        lens: criteria.lens.clone(),
    };

    ResolvedQueryParameters {
        query,
        sort_expr: sort_expr(
            criteria.sort_column.as_deref(),
            criteria.sort_direction.as_deref(),
        ),
    }
}

/// Map a condition symbol and value onto a range.
pub fn range_for(condition: &str, value: &str) -> RangeFilter {
    let condition = match condition.parse::<Condition>() {
        Ok(condition) => condition,
        Err(unknown) => {
            debug!(condition = %unknown.0, "ignoring unrecognized filter condition");
            return RangeFilter::default();
        }
    };

    let value = Some(value.to_string());
    match condition {
        Condition::Greater => RangeFilter {
            min_exclusive: value,
            ..Default::default()
        },
        Condition::Less => RangeFilter {
            max_exclusive: value,
            ..Default::default()
        },
        Condition::Equal => RangeFilter {
            exact: value,
            ..Default::default()
        },
        Condition::LessOrEqual => RangeFilter {
            max: value,
            ..Default::default()
        },
        Condition::GreaterOrEqual => RangeFilter {
            min: value,
            ..Default::default()
        },
    }
}

/// Join relation symbols, each followed by the separator.
///
/// The trailing separator is kept: the backend accepts it.
pub fn relation_expr(relations: &[String]) -> Option<String> {
    if relations.is_empty() {
        return None;
    }
    let mut expr = String::new();
    for relation in relations {
        expr.push_str(relation);
        expr.push(RELATION_SEPARATOR);
    }
    Some(expr)
}

/// `?column` when ascending, `DESC(?column)` when descending.
pub fn sort_expr(column: Option<&str>, direction: Option<&str>) -> Option<String> {
    let (column, direction) = (column?, direction?);
    let column = column.strip_prefix('?').unwrap_or(column);
    if column.is_empty() {
        return None;
    }

    match direction.parse::<SortDirection>() {
        Ok(SortDirection::Ascending) => Some(format!("?{column}")),
        Ok(SortDirection::Descending) => Some(format!("DESC(?{column})")),
        Err(other) => {
            debug!(direction = %other, "ignoring unrecognized sort direction");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pharmsearch_client::split_relation_expr;

    fn activity_criteria(condition: &str, value: &str) -> FilterCriteria {
        FilterCriteria {
            uri: "http://www.conceptwiki.org/concept/target".to_string(),
            activity_type: Some("IC50".to_string()),
            activity_unit: Some("nM".to_string()),
            activity_condition: Some(condition.to_string()),
            activity_value: Some(value.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_condition_table() {
        let v = || Some("5".to_string());
        let expected = [
            (
                ">",
                RangeFilter {
                    min_exclusive: v(),
                    ..Default::default()
                },
            ),
            (
                "<",
                RangeFilter {
                    max_exclusive: v(),
                    ..Default::default()
                },
            ),
            (
                "=",
                RangeFilter {
                    exact: v(),
                    ..Default::default()
                },
            ),
            (
                "<=",
                RangeFilter {
                    max: v(),
                    ..Default::default()
                },
            ),
            (
                ">=",
                RangeFilter {
                    min: v(),
                    ..Default::default()
                },
            ),
        ];

        for (condition, range) in expected {
            let resolved = resolve(&activity_criteria(condition, "5"));
            assert_eq!(resolved.query.activity, range, "condition {condition}");
            assert_eq!(resolved.query.activity.populated(), 1);
        }
    }

    #[test]
    fn test_greater_or_equal_scenario() {
        let resolved = resolve(&activity_criteria(">=", "5"));
        assert_eq!(resolved.query.activity.min.as_deref(), Some("5"));
        assert_eq!(resolved.query.activity.exact, None);
        assert_eq!(resolved.query.activity.min_exclusive, None);
        assert_eq!(resolved.query.activity.max, None);
        assert_eq!(resolved.query.activity.max_exclusive, None);
    }

    #[test]
    fn test_activity_gate_requires_all_four() {
        // Bits: type, unit, condition, value.
        for mask in 0u8..15 {
            let mut criteria = activity_criteria("=", "5");
            if mask & 1 == 0 {
                criteria.activity_type = None;
            }
            if mask & 2 == 0 {
                criteria.activity_unit = None;
            }
            if mask & 4 == 0 {
                criteria.activity_condition = None;
            }
            if mask & 8 == 0 {
                criteria.activity_value = None;
            }
            let resolved = resolve(&criteria);
            assert!(resolved.query.activity.is_empty(), "mask {mask:04b}");
        }
    }

    #[test]
    fn test_gate_does_not_drop_passthrough_fields() {
        let mut criteria = activity_criteria("=", "5");
        criteria.activity_unit = None;
        let resolved = resolve(&criteria);
        assert!(resolved.query.activity.is_empty());
        assert_eq!(resolved.query.activity_type.as_deref(), Some("IC50"));
    }

    #[test]
    fn test_unrecognized_condition_is_no_filter() {
        let resolved = resolve(&activity_criteria("=>", "5"));
        assert!(resolved.query.activity.is_empty());
        assert!(range_for("gt", "1").is_empty());
    }

    #[test]
    fn test_pchembl_is_independent_of_activity_gate() {
        let criteria = FilterCriteria {
            pchembl_condition: Some("<".to_string()),
            pchembl_value: Some("7".to_string()),
            ..Default::default()
        };
        let resolved = resolve(&criteria);
        assert!(resolved.query.activity.is_empty());
        assert_eq!(resolved.query.pchembl.max_exclusive.as_deref(), Some("7"));
        assert_eq!(resolved.query.pchembl.populated(), 1);
    }

    #[test]
    fn test_pchembl_missing_value() {
        let criteria = FilterCriteria {
            pchembl_condition: Some("=".to_string()),
            ..Default::default()
        };
        assert!(resolve(&criteria).query.pchembl.is_empty());
    }

    #[test]
    fn test_relation_expr() {
        assert_eq!(relation_expr(&[]), None);

        let relations = vec![">".to_string(), "=".to_string()];
        assert_eq!(relation_expr(&relations).as_deref(), Some(">|=|"));

        let relations: Vec<String> = [">", "<", ">=", "<=", "="]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let expr = relation_expr(&relations).unwrap();
        assert_eq!(expr, ">|<|>=|<=|=|");
        assert_eq!(split_relation_expr(&expr), relations);
    }

    #[test]
    fn test_sort_expr() {
        assert_eq!(
            sort_expr(Some("activityStandardValue"), Some("descending")).as_deref(),
            Some("DESC(?activityStandardValue)")
        );
        assert_eq!(
            sort_expr(Some("activityStandardValue"), Some("ascending")).as_deref(),
            Some("?activityStandardValue")
        );
        assert_eq!(sort_expr(Some("activityStandardValue"), None), None);
        assert_eq!(sort_expr(None, Some("descending")), None);
        assert_eq!(sort_expr(Some("pmid"), Some("sideways")), None);
    }

    #[test]
    fn test_sort_expr_empty_column_is_absent() {
        assert_eq!(sort_expr(Some(""), Some("descending")), None);
        assert_eq!(sort_expr(Some(""), Some("ascending")), None);
        assert_eq!(sort_expr(Some("?"), Some("ascending")), None);
    }

    #[test]
    fn test_sort_expr_accepts_prefixed_column() {
        assert_eq!(
            sort_expr(Some("?pmid"), Some("ascending")).as_deref(),
            Some("?pmid")
        );
    }

    #[test]
    fn test_resolve_carries_sort_and_passthrough() {
        let criteria = FilterCriteria {
            uri: "u".to_string(),
            assay_organism: Some("Homo sapiens".to_string()),
            lens: Some("default".to_string()),
            sort_column: Some("activityStandardValue".to_string()),
            sort_direction: Some("descending".to_string()),
            ..Default::default()
        };
        let resolved = resolve(&criteria);
        assert_eq!(resolved.query.uri, "u");
        assert_eq!(resolved.query.assay_organism.as_deref(), Some("Homo sapiens"));
        assert_eq!(resolved.query.lens.as_deref(), Some("default"));
        assert_eq!(resolved.query.activity_relation, None);
        assert_eq!(
            resolved.sort_expr.as_deref(),
            Some("DESC(?activityStandardValue)")
        );
    }
}
