//! Restaurant lookup: a read-only record store queried by location.

mod finder;
mod location;
mod query;
mod store;
mod tool;

pub use finder::{LoadPolicy, Lookup, RestaurantFinder};
pub use location::Location;
pub use query::{DEFAULT_COUNT, RestaurantQuery};
pub use store::{DegradeReason, RecordStore, RestaurantRecord};
pub use tool::{TOOL_NAME, restaurant_tool};
