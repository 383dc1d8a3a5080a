//! # Response Engine
//!
//! Rule-based reply generation for character roleplay chat. No model runs
//! behind this: replies are synthesized from canned template pools keyed on
//! a lightweight classification of the incoming message.
//!
//! ## Components
//! - `classifier`: intent + sentiment detection via keyword containment
//! - `templates`: the static candidate pools for both profiles
//! - `composer`: template selection, persona substitution, length shaping
//!
//! The engine is stateless and pure per call aside from the caller-supplied
//! random source; seeded tests replay every selection deterministically.
//! The template bank is immutable after startup, so concurrent calls need
//! no locking.

pub mod classifier;
pub mod composer;
pub mod templates;

pub use classifier::{classify, Classification, Intent, Sentiment};
pub use composer::compose;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Immutable view of a character handed to the engine for one call.
/// Owned by the caller; the engine never mutates it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Persona<'a> {
    pub name: &'a str,
    /// Comma-separated trait list (e.g. "Misteriosa, sábia").
    pub personality: &'a str,
    pub description: &'a str,
    pub greeting: &'a str,
    pub system_prompt: Option<&'a str>,
}

/// Generation mode, trading brevity for elaboration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseProfile {
    /// "Blood Souls": short creative replies, hard cap 100 characters.
    #[default]
    Fast,
    /// "Crystal Mode": long detailed replies, hard cap 250 characters.
    Elaborate,
}

impl ResponseProfile {
    /// Parse a wire value, silently falling back to the default on anything
    /// unrecognized. A bad profile string is never worth failing a chat for.
    pub fn parse_lossy(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("elaborate") => ResponseProfile::Elaborate,
            Some(v) if v.eq_ignore_ascii_case("fast") => ResponseProfile::Fast,
            _ => ResponseProfile::default(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResponseProfile::Fast => "fast",
            ResponseProfile::Elaborate => "elaborate",
        }
    }
}

/// Display metadata for a generation profile, consumed by the catalog UI.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Metadata for every selectable profile.
pub fn profile_catalog() -> Vec<ProfileInfo> {
    vec![
        ProfileInfo {
            id: "fast",
            name: "Blood Souls",
            description: "Respostas rápidas e criativas (~80 caracteres)",
            icon: "🩸",
        },
        ProfileInfo {
            id: "elaborate",
            name: "Crystal Mode",
            description: "Respostas longas e detalhadas (~200 caracteres)",
            icon: "💎",
        },
    ]
}

/// Generate one in-character reply for a user message.
///
/// Classify, then compose. Nothing is retained between invocations; the
/// same inputs with different random draws may legitimately differ.
pub fn generate_response<R: Rng>(
    rng: &mut R,
    persona: &Persona<'_>,
    message: &str,
    profile: ResponseProfile,
) -> String {
    let classification = classify(message);
    debug!(
        intent = classification.intent.label(),
        sentiment = classification.sentiment.label(),
        profile = profile.label(),
        persona = persona.name,
        "composing reply"
    );
    compose(rng, persona, &classification, profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lossy_known_values() {
        assert_eq!(
            ResponseProfile::parse_lossy(Some("elaborate")),
            ResponseProfile::Elaborate
        );
        assert_eq!(
            ResponseProfile::parse_lossy(Some("FAST")),
            ResponseProfile::Fast
        );
    }

    #[test]
    fn test_parse_lossy_falls_back_to_default() {
        assert_eq!(ResponseProfile::parse_lossy(None), ResponseProfile::Fast);
        assert_eq!(
            ResponseProfile::parse_lossy(Some("turbo")),
            ResponseProfile::Fast
        );
        assert_eq!(ResponseProfile::parse_lossy(Some("")), ResponseProfile::Fast);
    }

    #[test]
    fn test_profile_catalog_lists_both_modes() {
        let catalog = profile_catalog();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].id, "fast");
        assert_eq!(catalog[1].id, "elaborate");
    }
}
