use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::engine::Persona;

/// A roleplay character from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Character {
    /// The unique identifier for the character.
    pub id: String,
    /// The display name the character roleplays under.
    pub name: String,
    /// Short free-form description shown in the catalog.
    pub description: String,
    /// Emoji shown next to the character in the catalog.
    pub avatar: String,
    /// Comma-separated trait list (e.g. "Misteriosa, sábia, enigmática").
    pub personality: String,
    /// Opening message shown when a conversation starts.
    pub greeting: String,
    /// Catalog grouping (e.g. "Fantasia", "Sci-Fi").
    pub category: String,
    /// Optional system-prompt override, unused by the local engine.
    #[serde(default)]
    pub system_prompt: Option<String>,
    /// Unix timestamp of when the character was created.
    pub created_at: i64,
}

impl Character {
    /// Borrowed descriptor view consumed by the response engine.
    pub fn persona(&self) -> Persona<'_> {
        Persona {
            name: &self.name,
            personality: &self.personality,
            description: &self.description,
            greeting: &self.greeting,
            system_prompt: self.system_prompt.as_deref(),
        }
    }
}

/// Payload for creating a character. Only the name is mandatory; the other
/// fields default the way the catalog expects.
#[derive(Debug, Deserialize, Validate)]
pub struct NewCharacter {
    #[validate(length(min = 1, max = 80))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub personality: String,
    #[serde(default)]
    pub greeting: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub system_prompt: Option<String>,
}

/// A persisted chat message.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct ChatMessage {
    /// The unique identifier for the message.
    pub id: i64,
    /// The character this conversation belongs to.
    pub character_id: String,
    /// The role of the message sender ("user" or "assistant").
    pub role: String,
    /// The text content of the message.
    pub content: String,
    /// Unix timestamp of when the message was created.
    pub created_at: i64,
}

/// Inbound chat request.
#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1))]
    pub character_id: String,
    #[validate(length(min = 1))]
    pub message: String,
    /// Generation profile; unknown values fall back to the fast profile.
    #[serde(default)]
    pub profile: Option<String>,
}

/// Chat reply payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}
