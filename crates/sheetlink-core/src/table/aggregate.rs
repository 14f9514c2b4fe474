//! Aggregations and text-to-number coercion.
//!
//! Cells stay text everywhere else; coercion happens only here.

use super::filter::mentions_keyword;
use regex::Regex;
use std::sync::LazyLock;

static NUMBER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d+)?|\.\d+)(?:[eE][+-]?\d+)?").unwrap()
});
static INTEGER_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[+-]?\d+").unwrap());

/// Coerce cell text to a float using its leading numeric prefix.
///
/// Leading whitespace is skipped; text without a numeric prefix is 0.0
/// (`"12.5kg"` -> 12.5, `"bad"` -> 0.0).
pub fn to_number(text: &str) -> f64 {
    NUMBER_PREFIX
        .find(text.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Coerce cell text to an integer using its leading digits (`"12.9"` -> 12).
/// Out-of-range values saturate.
pub fn to_integer(text: &str) -> i64 {
    let Some(m) = INTEGER_PREFIX.find(text.trim_start()) else {
        return 0;
    };
    let digits = m.as_str();
    digits.parse::<i64>().unwrap_or(if digits.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Aggregation selected by an accessor suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Aggregate {
    Sum,
    Avg,
}

impl Aggregate {
    pub fn suffix(self) -> &'static str {
        match self {
            Aggregate::Sum => "_sum",
            Aggregate::Avg => "_avg",
        }
    }

    /// Split a normalized accessor name into its base and aggregation.
    /// `"treca_kolona_sum"` -> `("treca_kolona", Sum)`.
    pub fn split(name: &str) -> Option<(&str, Aggregate)> {
        [Aggregate::Sum, Aggregate::Avg]
            .into_iter()
            .find_map(|agg| name.strip_suffix(agg.suffix()).map(|base| (base, agg)))
    }

    /// Apply to column values. Values still mentioning a keyword are skipped.
    /// The average of nothing is 0.
    pub fn apply<S: AsRef<str>>(self, values: &[S]) -> f64 {
        let numbers: Vec<f64> = values
            .iter()
            .map(|v| v.as_ref())
            .filter(|v| !mentions_keyword(v))
            .map(to_number)
            .collect();
        let sum: f64 = numbers.iter().sum();
        match self {
            Aggregate::Sum => sum,
            Aggregate::Avg if numbers.is_empty() => 0.0,
            Aggregate::Avg => sum / numbers.len() as f64,
        }
    }
}
