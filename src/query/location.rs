use super::common::{non_blank, Query, QueryParams};

/// Fluent filter builder for the `/locations` collection.
///
/// Chains the same way as [`EventQuery`](super::EventQuery): by-value
/// methods, last write wins, the first rejected input surfaces from the
/// terminal call.
#[derive(Default)]
pub struct LocationQuery {
    params: QueryParams,
    rejected: Option<String>,
}

impl Query for LocationQuery {
    fn params(&self) -> &QueryParams {
        &self.params
    }

    fn rejected(&self) -> Option<&str> {
        self.rejected.as_deref()
    }
}

impl LocationQuery {
    /// Filters to locations in the given state or province. The API
    /// requires it when a city is supplied.
    pub fn with_state(mut self, state: &str) -> Self {
        self.apply("state", non_blank("state", state));
        self
    }

    /// Filters to locations matching the given city or town.
    pub fn with_city(mut self, city: &str) -> Self {
        self.apply("city", non_blank("city", city));
        self
    }

    /// Stores a formatted value, or remembers the first rejection.
    fn apply(&mut self, key: &'static str, value: Result<String, String>) {
        match value {
            Ok(value) => self.params.set(key, value),
            Err(reason) => {
                if self.rejected.is_none() {
                    self.rejected = Some(reason);
                }
            }
        }
    }
}
