//! Event-related types returned by the API.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Numeric identifier for an event.
pub type EventID = i64;

/// Numeric identifier for a venue.
pub type VenueID = i64;

/// Numeric identifier for an artist.
pub type ArtistID = i64;

/// A single event listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique numeric event identifier.
    pub id: EventID,

    /// Link to the Edmtrain page for the event.
    pub link: String,

    /// Link to the ticket vendor, when one is listed.
    pub ticket_link: Option<String>,

    /// Event name. Single-artist shows are usually unnamed.
    pub name: Option<String>,

    /// Age restriction as displayed on the listing (e.g. "18+", "21+").
    pub ages: Option<String>,

    /// Whether the event is a festival.
    pub festival_ind: bool,

    /// Whether the event is an electronic-genre show.
    pub electronic_genre_ind: bool,

    /// Whether the event belongs to a genre other than electronic.
    pub other_genre_ind: bool,

    /// Date of the event.
    pub date: NaiveDate,

    /// When the event was added to Edmtrain, in UTC.
    pub created_date: DateTime<Utc>,

    /// The venue hosting the event.
    pub venue: Venue,

    /// Artists on the lineup, in billing order.
    pub artist_list: Vec<Artist>,
}

/// The venue hosting an event.
///
/// Online streams carry a venue whose `location` is `"Virtual"`; the API
/// omits their street address and coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    /// Unique numeric venue identifier.
    pub id: VenueID,

    /// Venue name.
    pub name: String,

    /// Area the venue is listed under (e.g. "Denver, CO"), or "Virtual".
    pub location: String,

    /// Street address, absent for virtual venues.
    pub address: Option<String>,

    /// Two-letter state code for venues in the US.
    pub state: Option<String>,

    /// Latitude in decimal degrees, absent for virtual venues.
    pub latitude: Option<f64>,

    /// Longitude in decimal degrees, absent for virtual venues.
    pub longitude: Option<f64>,
}

impl Venue {
    /// True when the venue is an online stream rather than a physical place.
    pub fn is_virtual(&self) -> bool {
        self.location == "Virtual"
    }
}

/// An artist on an event lineup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    /// Unique numeric artist identifier.
    pub id: ArtistID,

    /// Artist name.
    pub name: String,
}
