//! Filter expression parsing: `field[__operator] = value`.

use std::str::FromStr;

use indexmap::IndexMap;
use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::types::PlayerRecord;
use crate::Error;

/// A filter target value supplied by the caller.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum FilterValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Str(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Str(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Int(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        FilterValue::Int(value.into())
    }
}

impl From<u32> for FilterValue {
    fn from(value: u32) -> Self {
        FilterValue::Int(value.into())
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Float(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

/// A record field's value as the evaluator sees it.
///
/// Record accessors unwrap enumerated fields to their primitive value
/// before comparison, so leagues arrive as their upstream name and league
/// numbers as integers. `Null` means the field exists on the shape but
/// holds no value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Null,
    Int(i64),
    Str(String),
}

impl FieldValue {
    pub(crate) fn str(value: &str) -> FieldValue {
        FieldValue::Str(value.to_string())
    }

    pub(crate) fn text(value: &Option<String>) -> FieldValue {
        match value {
            Some(s) => FieldValue::str(s),
            None => FieldValue::Null,
        }
    }

    pub(crate) fn int(value: impl Into<i64>) -> FieldValue {
        FieldValue::Int(value.into())
    }

    pub(crate) fn maybe_int(value: Option<i64>) -> FieldValue {
        match value {
            Some(n) => FieldValue::Int(n),
            None => FieldValue::Null,
        }
    }
}

/// Ordered set of filter expressions, keyed by `field[__operator]`.
///
/// Insertion order is preserved: it has no effect on the result set, but
/// it decides evaluation order and how the applied filters serialize back
/// out on an envelope.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct FilterSet(IndexMap<String, FilterValue>);

impl FilterSet {
    pub fn new() -> FilterSet {
        FilterSet::default()
    }

    /// Adds an expression, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> FilterSet {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }
}

/// Comparison operators accepted in expression keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Exact,
    IExact,
    Contains,
    IContains,
    StartsWith,
    IStartsWith,
    EndsWith,
    IEndsWith,
    Gt,
    Gte,
    Lt,
    Lte,
    IsNull,
    Exists,
    Regex,
    IRegex,
}

impl FromStr for Op {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(Op::Exact),
            "iexact" => Ok(Op::IExact),
            "contains" => Ok(Op::Contains),
            "icontains" => Ok(Op::IContains),
            "startswith" => Ok(Op::StartsWith),
            "istartswith" => Ok(Op::IStartsWith),
            "endswith" => Ok(Op::EndsWith),
            "iendswith" => Ok(Op::IEndsWith),
            "gt" => Ok(Op::Gt),
            "gte" => Ok(Op::Gte),
            "lt" => Ok(Op::Lt),
            "lte" => Ok(Op::Lte),
            "isnull" => Ok(Op::IsNull),
            "exists" => Ok(Op::Exists),
            "regex" => Ok(Op::Regex),
            "iregex" => Ok(Op::IRegex),
            _ => Err(()),
        }
    }
}

/// One parsed expression bound to its target value.
#[derive(Clone, Debug)]
pub struct FilterExpression {
    field: String,
    op: Op,
    target: FilterValue,
    /// Compiled pattern for `regex`/`iregex`. `None` when the target is
    /// not a string or does not compile, in which case nothing matches.
    pattern: Option<Regex>,
}

impl FilterExpression {
    /// Splits `key` on the first `__` into field and operator; a key
    /// without `__` means operator `exact`. An operator outside the fixed
    /// table is the one filter failure that reaches the caller.
    pub fn parse(key: &str, target: &FilterValue) -> Result<FilterExpression, Error> {
        let (field, op_name) = match key.split_once("__") {
            Some((field, op_name)) => (field, op_name),
            None => (key, "exact"),
        };
        let op = op_name
            .parse::<Op>()
            .map_err(|()| Error::UnsupportedOperator(op_name.to_string()))?;
        let pattern = match (op, target) {
            (Op::Regex, FilterValue::Str(p)) => Regex::new(p).ok(),
            (Op::IRegex, FilterValue::Str(p)) => {
                RegexBuilder::new(p).case_insensitive(true).build().ok()
            }
            _ => None,
        };
        Ok(FilterExpression {
            field: field.to_string(),
            op,
            target: target.clone(),
            pattern,
        })
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn op(&self) -> Op {
        self.op
    }

    /// A record whose shape has no such field passes; otherwise the
    /// operator decides.
    pub fn matches(&self, record: &PlayerRecord) -> bool {
        match record.field(&self.field) {
            None => true,
            Some(value) => super::ops::eval(self.op, &value, &self.target, self.pattern.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FilterExpression, FilterSet, FilterValue, Op};
    use crate::Error;

    #[test]
    fn bare_key_means_exact() {
        let expr = FilterExpression::parse("league", &FilterValue::from("Ruby")).unwrap();
        assert_eq!(expr.field(), "league");
        assert_eq!(expr.op(), Op::Exact);
    }

    #[test]
    fn splits_on_first_double_underscore() {
        let expr = FilterExpression::parse("club_tag__iexact", &FilterValue::from("og")).unwrap();
        assert_eq!(expr.field(), "club_tag");
        assert_eq!(expr.op(), Op::IExact);
    }

    #[test]
    fn unsupported_operator_is_an_error() {
        let err = FilterExpression::parse("score__between", &FilterValue::from(10)).unwrap_err();
        match err {
            Error::UnsupportedOperator(op) => assert_eq!(op, "between"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn filter_set_keeps_insertion_order() {
        let filters = FilterSet::new()
            .with("score__gte", 100)
            .with("league", "Ruby")
            .with("name__icontains", "a");
        let keys: Vec<&str> = filters.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["score__gte", "league", "name__icontains"]);
        assert_eq!(filters.len(), 3);
    }

    #[test]
    fn filter_set_serializes_as_a_plain_map() {
        let filters = FilterSet::new().with("score__gte", 100).with("club_tag", "OG");
        let json = serde_json::to_value(&filters).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"score__gte": 100, "club_tag": "OG"})
        );
    }
}
