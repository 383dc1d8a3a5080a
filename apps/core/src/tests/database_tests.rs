//! Database Tests
//!
//! Catalog seeding and CRUD for characters and messages, each case running
//! against its own scratch SQLite file.

use sqlx::sqlite::SqlitePool;
use tempfile::{tempdir, TempDir};

use crate::database;
use crate::models::NewCharacter;

/// Create a test pool backed by a temporary database file. The guard must
/// stay alive for the duration of the test.
async fn create_test_pool() -> (SqlitePool, TempDir) {
    let dir = tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.sqlite");
    let db_url = format!("sqlite://{}", db_path.display());

    let pool = database::init_db(&db_url)
        .await
        .expect("Failed to init test database");
    (pool, dir)
}

fn new_character(name: &str) -> NewCharacter {
    NewCharacter {
        name: name.to_string(),
        description: String::new(),
        avatar: None,
        personality: String::new(),
        greeting: None,
        category: None,
        system_prompt: None,
    }
}

#[cfg(test)]
mod character_tests {
    use super::*;

    #[tokio::test]
    async fn test_seeds_default_catalog() {
        let (pool, _guard) = create_test_pool().await;

        let characters = database::list_characters(&pool)
            .await
            .expect("Failed to list characters");

        assert_eq!(characters.len(), 8);
        assert_eq!(characters[0].id, "char_1");
        assert_eq!(characters[0].name, "Luna");
        assert_eq!(characters[7].name, "Max");
    }

    #[tokio::test]
    async fn test_seeding_is_idempotent() {
        let dir = tempdir().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}", dir.path().join("test.sqlite").display());

        let _first = database::init_db(&db_url).await.expect("first init failed");
        let pool = database::init_db(&db_url).await.expect("second init failed");

        let characters = database::list_characters(&pool)
            .await
            .expect("Failed to list characters");
        assert_eq!(characters.len(), 8);
    }

    #[tokio::test]
    async fn test_create_character_applies_defaults() {
        let (pool, _guard) = create_test_pool().await;

        let character = database::create_character(&pool, new_character("Teste"))
            .await
            .expect("Failed to create character");

        assert!(!character.id.is_empty());
        assert_eq!(character.name, "Teste");
        assert_eq!(character.avatar, "👤");
        assert_eq!(character.greeting, "Olá! Como posso ajudar?");
        assert_eq!(character.category, "Outros");
        assert!(character.system_prompt.is_none());
    }

    #[tokio::test]
    async fn test_create_character_keeps_explicit_fields() {
        let (pool, _guard) = create_test_pool().await;

        let payload = NewCharacter {
            name: "Orion".to_string(),
            description: "Um caçador de estrelas".to_string(),
            avatar: Some("🌟".to_string()),
            personality: "Misterioso, calado".to_string(),
            greeting: Some("Você chegou tarde.".to_string()),
            category: Some("Fantasia".to_string()),
            system_prompt: None,
        };
        let character = database::create_character(&pool, payload)
            .await
            .expect("Failed to create character");

        assert_eq!(character.avatar, "🌟");
        assert_eq!(character.greeting, "Você chegou tarde.");
        assert_eq!(character.category, "Fantasia");
        assert_eq!(character.personality, "Misterioso, calado");

        let fetched = database::get_character(&pool, &character.id)
            .await
            .expect("Failed to get character")
            .expect("Character missing after insert");
        assert_eq!(fetched.name, "Orion");
    }

    #[tokio::test]
    async fn test_get_character_unknown_is_none() {
        let (pool, _guard) = create_test_pool().await;

        let missing = database::get_character(&pool, "no-such-id")
            .await
            .expect("Lookup failed");
        assert!(missing.is_none());
    }
}

#[cfg(test)]
mod message_tests {
    use super::*;

    #[tokio::test]
    async fn test_messages_roundtrip() {
        let (pool, _guard) = create_test_pool().await;

        database::add_message(&pool, "char_1", "user", "Olá!")
            .await
            .expect("Failed to add user message");
        database::add_message(&pool, "char_1", "assistant", "*sorri levemente* Sim?")
            .await
            .expect("Failed to add assistant message");

        let messages = database::get_character_messages(&pool, "char_1")
            .await
            .expect("Failed to fetch messages");

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "user");
        assert_eq!(messages[0].content, "Olá!");
        assert_eq!(messages[1].role, "assistant");
    }

    #[tokio::test]
    async fn test_messages_empty_for_fresh_character() {
        let (pool, _guard) = create_test_pool().await;

        let messages = database::get_character_messages(&pool, "char_2")
            .await
            .expect("Failed to fetch messages");
        assert!(messages.is_empty());
    }

    #[tokio::test]
    async fn test_messages_are_isolated_per_character() {
        let (pool, _guard) = create_test_pool().await;

        database::add_message(&pool, "char_1", "user", "Oi Luna")
            .await
            .expect("Failed to add message");
        database::add_message(&pool, "char_2", "user", "Oi Rex")
            .await
            .expect("Failed to add message");

        let luna_messages = database::get_character_messages(&pool, "char_1")
            .await
            .expect("Failed to fetch messages");
        assert_eq!(luna_messages.len(), 1);
        assert_eq!(luna_messages[0].content, "Oi Luna");
    }
}
