//! Post-fetch filtering of player records.
//!
//! Expressions use django-style keys: `score__gte`, `name__icontains`,
//! `club_tag__isnull`. A record passes when it satisfies every expression;
//! fields a record's shape does not carry pass vacuously, so mode-specific
//! filters never exclude records of other modes.

mod expression;
mod ops;
mod raw;

pub use self::expression::{FieldValue, FilterExpression, FilterSet, FilterValue, Op};
pub use self::raw::raw_filter;

use crate::types::PlayerRecord;
use crate::Error;

/// Returns the records satisfying every expression in `filters`, in their
/// original order.
///
/// All expressions are parsed up front, so an unsupported operator fails
/// the call even for an empty record list.
pub fn apply(records: &[PlayerRecord], filters: &FilterSet) -> Result<Vec<PlayerRecord>, Error> {
    let expressions = filters
        .iter()
        .map(|(key, value)| FilterExpression::parse(key, value))
        .collect::<Result<Vec<_>, Error>>()?;

    Ok(records
        .iter()
        .filter(|record| expressions.iter().all(|expr| expr.matches(record)))
        .cloned()
        .collect())
}
