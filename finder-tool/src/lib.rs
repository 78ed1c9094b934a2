//! # finder-tool
//!
//! Tools for the restaurant finder agent.
//!
//! - [`FunctionTool`] - Create tools from async Rust functions
//! - [`RestaurantFinder`] - Bounded restaurant lookup over JSON data files
//! - [`restaurant_tool`] - The finder exposed as the `get_restaurants` tool
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use finder_tool::RestaurantFinder;
//!
//! let finder = RestaurantFinder::new("data");
//! let json = finder.get_restaurants("italian", "New York", Some(3));
//! assert!(json.starts_with('['));
//! ```

mod function_tool;
pub mod restaurants;

pub use finder_core::Tool;
pub use function_tool::FunctionTool;
pub use restaurants::{
    DEFAULT_COUNT, LoadPolicy, Location, Lookup, RestaurantFinder, RestaurantQuery,
    RestaurantRecord, TOOL_NAME, restaurant_tool,
};
