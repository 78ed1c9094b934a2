pub mod agent_card;
pub mod events;
pub mod executor;
pub mod jsonrpc;
pub mod parts;
pub mod types;

pub use agent_card::{build_agent_card, build_agent_skills};
pub use events::{content_to_artifact, message_to_content};
pub use executor::{Executor, RESULT_ARTIFACT_NAME};
pub use jsonrpc::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, MessageSendParams, TaskQueryParams,
};
pub use parts::{a2a_parts_to_core, core_parts_to_a2a};
pub use types::*;
