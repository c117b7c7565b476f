//! User-facing filter criteria

use std::fmt;
use std::str::FromStr;

/// Comparison symbol attached to a filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Greater,
    Less,
    Equal,
    LessOrEqual,
    GreaterOrEqual,
}

impl Condition {
    pub const ALL: [Condition; 5] = [
        Condition::Greater,
        Condition::Less,
        Condition::Equal,
        Condition::LessOrEqual,
        Condition::GreaterOrEqual,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Condition::Greater => ">",
            Condition::Less => "<",
            Condition::Equal => "=",
            Condition::LessOrEqual => "<=",
            Condition::GreaterOrEqual => ">=",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Returned when a string is not one of the five condition symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCondition(pub String);

impl FromStr for Condition {
    type Err = UnknownCondition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ">" => Ok(Condition::Greater),
            "<" => Ok(Condition::Less),
            "=" => Ok(Condition::Equal),
            "<=" => Ok(Condition::LessOrEqual),
            ">=" => Ok(Condition::GreaterOrEqual),
            other => Err(UnknownCondition(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" => Ok(SortDirection::Ascending),
            "descending" => Ok(SortDirection::Descending),
            other => Err(other.to_string()),
        }
    }
}

/// Filter options for one widget instance.
///
/// Condition and direction fields hold the caller's raw symbols. They are
/// interpreted during resolution, where anything unrecognized simply means
/// "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Target URI the pharmacology is requested for.
    pub uri: String,
    pub assay_organism: Option<String>,
    pub target_organism: Option<String>,
    pub activity_type: Option<String>,
    pub activity_unit: Option<String>,
    pub activity_condition: Option<String>,
    pub activity_value: Option<String>,
    /// Allowed relation symbols, in caller order.
    pub activity_relations: Vec<String>,
    pub pchembl_condition: Option<String>,
    pub pchembl_value: Option<String>,
    pub sort_column: Option<String>,
    pub sort_direction: Option<String>,
    pub lens: Option<String>,
    pub target_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_symbols_round_trip() {
        for condition in Condition::ALL {
            assert_eq!(condition.symbol().parse::<Condition>(), Ok(condition));
        }
    }

    #[test]
    fn test_unknown_condition() {
        assert_eq!(
            "=>".parse::<Condition>(),
            Err(UnknownCondition("=>".to_string()))
        );
        assert!(" >".parse::<Condition>().is_err());
    }

    #[test]
    fn test_sort_direction() {
        assert_eq!("ascending".parse::<SortDirection>(), Ok(SortDirection::Ascending));
        assert_eq!("descending".parse::<SortDirection>(), Ok(SortDirection::Descending));
        assert!("DESC".parse::<SortDirection>().is_err());
    }
}
