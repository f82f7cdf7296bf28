use serde::{Deserialize, Serialize};

use super::{Event, Location};

/// Envelope wrapping every `/events` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsResponse {
    /// Whether the API accepted the request.
    pub success: bool,

    /// Error description supplied by the server when `success` is false.
    pub message: Option<String>,

    /// The matched events, in server order. The live API returns this
    /// array under the key `data`; absent when the request failed.
    #[serde(default, alias = "data")]
    pub events: Vec<Event>,
}

/// Envelope wrapping every `/locations` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationsResponse {
    /// Whether the API accepted the request.
    pub success: bool,

    /// Error description supplied by the server when `success` is false.
    pub message: Option<String>,

    /// The matched locations, in server order. The live API returns this
    /// array under the key `data`; absent when the request failed.
    #[serde(default, alias = "data")]
    pub locations: Vec<Location>,
}
