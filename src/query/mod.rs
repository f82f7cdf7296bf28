mod common;
pub use self::common::{Query, QueryParams};

mod event;
pub use self::event::EventQuery;

mod location;
pub use self::location::LocationQuery;
