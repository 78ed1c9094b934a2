//! # finder-core
//!
//! Core traits and types shared by the restaurant finder crates.
//!
//! - [`Agent`] - Handles one inbound [`Content`] and replies with another
//! - [`Tool`] - A named capability invoked with JSON arguments
//! - [`Skill`] - What an agent advertises on its card
//! - [`FinderError`] / [`Result`] - Unified error handling

pub mod agent;
pub mod error;
pub mod tool;
pub mod types;

pub use agent::{Agent, DEFAULT_CONTENT_TYPES};
pub use error::{FinderError, Result};
pub use tool::Tool;
pub use types::{Content, Part, Skill};
