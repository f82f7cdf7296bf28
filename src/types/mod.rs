mod event;
pub use self::event::{Artist, ArtistID, Event, EventID, Venue, VenueID};

mod location;
pub use self::location::{Location, LocationID};

mod response;
pub use self::response::{EventsResponse, LocationsResponse};
