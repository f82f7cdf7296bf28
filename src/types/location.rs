//! Location types: the geographic areas events are listed under.

use serde::{Deserialize, Serialize};

/// Numeric identifier for a location.
pub type LocationID = i64;

/// A geographic area events are listed under.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Unique numeric location identifier.
    pub id: LocationID,

    /// City or town name.
    pub city: Option<String>,

    /// Full state or province name.
    pub state: Option<String>,

    /// Two-letter state abbreviation.
    pub state_code: Option<String>,

    /// Latitude of the area's center, in decimal degrees.
    pub latitude: f64,

    /// Longitude of the area's center, in decimal degrees.
    pub longitude: f64,

    /// Link to the Edmtrain page for the location.
    pub link: Option<String>,
}
