use chrono::NaiveDate;

use crate::types::{ArtistID, LocationID, VenueID};

use super::common::{format_date, join_ids, non_blank, Query, QueryParams};

/// Fluent filter builder for the `/events` collection.
///
/// Each method takes the builder by value and returns it so filters chain;
/// setting the same filter twice keeps the last value. A rejected input
/// does not break the chain: the first one is remembered and surfaces as
/// `Error::InvalidArgument` from the terminal call, before any request is
/// sent.
#[derive(Default)]
pub struct EventQuery {
    params: QueryParams,
    rejected: Option<String>,
}

impl Query for EventQuery {
    fn params(&self) -> &QueryParams {
        &self.params
    }

    fn rejected(&self) -> Option<&str> {
        self.rejected.as_deref()
    }
}

impl EventQuery {
    /// Filters to events matching the given name (e.g. a festival name).
    pub fn with_event_name(mut self, name: &str) -> Self {
        self.apply("eventName", non_blank("eventName", name));
        self
    }

    /// Filters to events featuring any of the given artists.
    pub fn with_artist_ids(mut self, artist_ids: &[ArtistID]) -> Self {
        self.apply("artistIds", join_ids("artistIds", artist_ids));
        self
    }

    /// Filters to events held at any of the given venues.
    pub fn with_venue_ids(mut self, venue_ids: &[VenueID]) -> Self {
        self.apply("venueIds", join_ids("venueIds", venue_ids));
        self
    }

    /// Filters to events in any of the given locations.
    pub fn with_location_ids(mut self, location_ids: &[LocationID]) -> Self {
        self.apply("locationIds", join_ids("locationIds", location_ids));
        self
    }

    /// Keeps events occurring on or after this date.
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.params.set("startDate", format_date(start_date));
        self
    }

    /// Keeps events occurring on or before this date.
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.params.set("endDate", format_date(end_date));
        self
    }

    /// Keeps events added to Edmtrain on or after this UTC date.
    pub fn with_created_start_date(mut self, created_start_date: NaiveDate) -> Self {
        self.params
            .set("createdStartDate", format_date(created_start_date));
        self
    }

    /// Keeps events added to Edmtrain on or before this UTC date.
    pub fn with_created_end_date(mut self, created_end_date: NaiveDate) -> Self {
        self.params
            .set("createdEndDate", format_date(created_end_date));
        self
    }

    /// Restricts to festivals (true) or non-festivals (false). The API
    /// returns both when the filter is unset.
    pub fn is_festival(mut self, is_festival: bool) -> Self {
        self.params.set("festivalInd", is_festival.to_string());
        self
    }

    /// Set to false to exclude electronic shows. The API includes them by
    /// default.
    pub fn include_electronic_genre(mut self, include_electronic_genre: bool) -> Self {
        self.params
            .set("includeElectronicGenreInd", include_electronic_genre.to_string());
        self
    }

    /// Set to true to include non-electronic shows. The API excludes them
    /// by default.
    pub fn include_other_genre(mut self, include_other_genre: bool) -> Self {
        self.params
            .set("includeOtherGenreInd", include_other_genre.to_string());
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
