//! # finder-server
//!
//! A2A protocol server for the restaurant agent: agent card discovery,
//! JSON-RPC `message/send` / `tasks/get` / `tasks/cancel`, static assets and
//! the usual HTTP hardening layers.

pub mod a2a;
pub mod config;
pub mod rest;

pub use a2a::{Executor, build_agent_card, build_agent_skills};
pub use config::{DEFAULT_TASK_CAPACITY, DEV_CLIENT_ORIGIN, SecurityConfig, ServerConfig};
pub use rest::{A2aController, TaskStore, create_app};
