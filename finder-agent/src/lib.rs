//! # finder-agent
//!
//! The restaurant agent served over A2A. It reads cuisine, location and count
//! from the inbound message, calls `get_restaurants` and replies with the
//! JSON array text.

mod request;
mod restaurant_agent;

pub use request::tool_args_from_content;
pub use restaurant_agent::{AGENT_DESCRIPTION, AGENT_NAME, RestaurantAgent};
