//! Shared query infrastructure: the [`Query`] trait, [`QueryParams`]
//! accumulation, and filter-value formatting.

use chrono::NaiveDate;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters percent-encoded in serialized parameter values. RFC 3986
/// unreserved characters stay literal, and so do commas: the API reads id
/// lists as `artistIds=1,2,3`.
const VALUE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b',');

/// Trait implemented by all query builders. Exposes the accumulated
/// parameters and anything rejected while building them.
pub trait Query {
    /// The accumulated filter parameters, in insertion order.
    fn params(&self) -> &QueryParams;

    /// Describes the first filter input rejected by a builder call, if any.
    fn rejected(&self) -> Option<&str>;
}

/// Filter parameters accumulated by a query builder: unique keys kept in
/// insertion order, later writes replacing the value in place.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Sets `key` to `value`, replacing any prior value for the same key.
    pub(crate) fn set(&mut self, key: &'static str, value: String) {
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Looks up the serialized value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates the `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// True when no filter has been set.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of distinct filter keys.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Serializes the parameters as `key=value&...&client=<token>`: the
    /// accumulated pairs in insertion order, the client token last with no
    /// trailing separator. Values are percent-encoded with commas kept
    /// literal.
    pub fn to_query_string(&self, token: &str) -> String {
        let mut query = String::new();
        for (key, value) in &self.pairs {
            query.push_str(key);
            query.push('=');
            query.extend(utf8_percent_encode(value, VALUE_ENCODE_SET));
            query.push('&');
        }
        query.push_str("client=");
        query.extend(utf8_percent_encode(token, VALUE_ENCODE_SET));
        query
    }
}

/// Formats a date filter as `YYYY-MM-DD`.
pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Joins an id list into comma-separated decimals, preserving input order.
/// Rejects empty lists and non-positive ids.
pub(crate) fn join_ids(key: &'static str, ids: &[i64]) -> Result<String, String> {
    if ids.is_empty() {
        return Err(format!("{} requires at least one id", key));
    }
    if let Some(id) = ids.iter().find(|id| **id <= 0) {
        return Err(format!("{} contains a non-positive id ({})", key, id));
    }
    Ok(ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(","))
}

/// Accepts a text filter only when it has visible content.
pub(crate) fn non_blank(key: &'static str, value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        Err(format!("{} must not be blank", key))
    } else {
        Ok(value.to_string())
    }
}
