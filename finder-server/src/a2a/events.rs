use crate::a2a::{
    Artifact, Message, Role,
    parts::{a2a_parts_to_core, core_parts_to_a2a},
};
use finder_core::{Content, Result};

pub fn message_to_content(message: &Message) -> Result<Content> {
    let role = match message.role {
        Role::User => "user",
        Role::Agent => "agent",
    };
    Ok(Content { role: role.to_string(), parts: a2a_parts_to_core(&message.parts)? })
}

pub fn content_to_artifact(content: &Content, name: &str) -> Artifact {
    Artifact {
        artifact_id: uuid::Uuid::new_v4().to_string(),
        name: Some(name.to_string()),
        description: None,
        parts: core_parts_to_a2a(&content.parts),
        metadata: None,
    }
}
