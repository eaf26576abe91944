//! Inclusion conditions for template nodes.

use crate::error::Result;
use crate::placeholder::Pattern;
use crate::rows::Row;

/// Outcome of evaluating a node's condition against a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inclusion {
    /// No condition, or the condition resolved to a truthy value
    Included,
    /// The condition resolved to this non-truthy value
    Excluded(String),
    /// The condition references variables the row does not provide
    Missing(Vec<String>),
}

/// `true` (any ASCII case) and `1` are truthy; everything else is not.
pub fn is_truthy(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

/// Decides whether a node guarded by `condition` is included for `row`.
pub fn evaluate(condition: Option<&Pattern>, row: &Row) -> Result<Inclusion> {
    let Some(condition) = condition else {
        return Ok(Inclusion::Included);
    };

    let missing = condition.missing(row);
    if !missing.is_empty() {
        return Ok(Inclusion::Missing(missing));
    }

    let value = condition.substitute(row)?;
    if is_truthy(&value) {
        Ok(Inclusion::Included)
    } else {
        Ok(Inclusion::Excluded(value))
    }
}
