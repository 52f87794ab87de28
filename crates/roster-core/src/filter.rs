//! Shared helpers for exact-match filter fields.
//!
//! An unset filter imposes no constraint; set filters combine with
//! logical AND in the callers' `matches` methods.

/// Exact match on a required string field.
pub(crate) fn eq(filter: &Option<String>, value: &str) -> bool {
  filter.as_deref().is_none_or(|f| f == value)
}

/// Exact match on an optional string field. An entity with the field unset
/// never matches a set filter.
pub(crate) fn eq_opt(filter: &Option<String>, value: Option<&str>) -> bool {
  filter.as_deref().is_none_or(|f| value == Some(f))
}
