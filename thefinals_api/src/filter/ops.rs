//! Operator comparison semantics.
//!
//! A comparison that cannot be carried out — kind mismatch, non-boolean
//! null test, pattern that did not compile — counts as a non-match for
//! that record. Only an unknown operator name is a caller-visible error,
//! and that is raised at parse time, before any record is inspected.

use std::cmp::Ordering;

use regex::Regex;

use super::expression::{FieldValue, FilterValue, Op};

pub(crate) fn eval(op: Op, field: &FieldValue, target: &FilterValue, pattern: Option<&Regex>) -> bool {
    match op {
        Op::Exact => exact(field, target),
        Op::IExact => text_pair(field, target)
            .map(|(a, b)| a.to_lowercase() == b.to_lowercase())
            .unwrap_or(false),
        Op::Contains => text_pair(field, target)
            .map(|(a, b)| a.contains(b))
            .unwrap_or(false),
        Op::IContains => text_pair(field, target)
            .map(|(a, b)| a.to_lowercase().contains(&b.to_lowercase()))
            .unwrap_or(false),
        Op::StartsWith => text_pair(field, target)
            .map(|(a, b)| a.starts_with(b))
            .unwrap_or(false),
        Op::IStartsWith => text_pair(field, target)
            .map(|(a, b)| a.to_lowercase().starts_with(&b.to_lowercase()))
            .unwrap_or(false),
        Op::EndsWith => text_pair(field, target)
            .map(|(a, b)| a.ends_with(b))
            .unwrap_or(false),
        Op::IEndsWith => text_pair(field, target)
            .map(|(a, b)| a.to_lowercase().ends_with(&b.to_lowercase()))
            .unwrap_or(false),
        Op::Gt => compare(field, target)
            .map(|ord| ord == Ordering::Greater)
            .unwrap_or(false),
        Op::Gte => compare(field, target)
            .map(|ord| ord != Ordering::Less)
            .unwrap_or(false),
        Op::Lt => compare(field, target)
            .map(|ord| ord == Ordering::Less)
            .unwrap_or(false),
        Op::Lte => compare(field, target)
            .map(|ord| ord != Ordering::Greater)
            .unwrap_or(false),
        Op::IsNull => bool_target(target)
            .map(|expected| (*field == FieldValue::Null) == expected)
            .unwrap_or(false),
        Op::Exists => bool_target(target)
            .map(|expected| (*field != FieldValue::Null) == expected)
            .unwrap_or(false),
        Op::Regex | Op::IRegex => match (pattern, field) {
            (Some(pattern), FieldValue::Str(s)) => pattern.is_match(s),
            _ => false,
        },
    }
}

fn exact(field: &FieldValue, target: &FilterValue) -> bool {
    match (field, target) {
        (FieldValue::Str(a), FilterValue::Str(b)) => a == b,
        (FieldValue::Int(a), FilterValue::Int(b)) => a == b,
        (FieldValue::Int(a), FilterValue::Float(b)) => (*a as f64) == *b,
        _ => false,
    }
}

fn text_pair<'a>(field: &'a FieldValue, target: &'a FilterValue) -> Option<(&'a str, &'a str)> {
    match (field, target) {
        (FieldValue::Str(a), FilterValue::Str(b)) => Some((a, b)),
        _ => None,
    }
}

fn compare(field: &FieldValue, target: &FilterValue) -> Option<Ordering> {
    match (field, target) {
        (FieldValue::Int(a), FilterValue::Int(b)) => Some(a.cmp(b)),
        (FieldValue::Int(a), FilterValue::Float(b)) => (*a as f64).partial_cmp(b),
        (FieldValue::Str(a), FilterValue::Str(b)) => Some(a.as_str().cmp(b.as_str())),
        _ => None,
    }
}

fn bool_target(target: &FilterValue) -> Option<bool> {
    match target {
        FilterValue::Bool(b) => Some(*b),
        _ => None,
    }
}
