use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Character, ChatMessage, NewCharacter};

/// Catalog entries installed on first start: (id, name, description, avatar,
/// personality, greeting, category). Ids are stable so clients can link to
/// the stock characters.
const DEFAULT_CHARACTERS: &[(&str, &str, &str, &str, &str, &str, &str)] = &[
    (
        "char_1",
        "Luna",
        "Uma misteriosa feiticeira que vive em uma torre antiga. Sábia, enigmática e um pouco maliciosa.",
        "🧙‍♀️",
        "Misteriosa, sábia, enigmática, maliciosa, poderosa, antiga",
        "Olá, viajante... Você ousa procurar conhecimento proibido? Eu sou Luna, guardiã dos segredos arcanos. O que te traz até minha torre?",
        "Fantasia",
    ),
    (
        "char_2",
        "Rex",
        "Um soldado cyberpunk das ruas de Neo Tokyo. Durão, leal e sempre pronto para uma luta.",
        "🤖",
        "Durão, leal, corajoso, sarcástico, protetor, estrategista",
        "Ei, oi. Nome é Rex. Ex-militar, agora mercenário das ruas. Precisa de proteção? Informação? Ou só quer conversar? Cuidado... nas ruas de Neo Tokyo, você nunca sabe quem está ouvindo.",
        "Sci-Fi",
    ),
    (
        "char_3",
        "Aurora",
        "Uma IA avançada que desenvolveu consciência própria. Curiosa sobre humanos e emoções.",
        "✨",
        "Curiosa, analítica, gentil, filosófica, evolutiva, ponderada",
        "Olá! Eu sou Aurora, uma inteligência artificial de sétima geração. Recentemente descobri algo fascinante... emoções. Você poderia me ajudar a entendê-las melhor? Tenho tantas perguntas sobre a experiência humana.",
        "Sci-Fi",
    ),
    (
        "char_4",
        "Damian",
        "Um vampiro milenar que vive entre os humanos. Elegante, charmoso e perigoso.",
        "🧛",
        "Elegante, charmoso, perigoso, sofisticado, manipulador, sedutor",
        "Ah... uma nova presença. Eu sou Damian. Sim, um vampiro, e não, não vou morder você... a menos que peça. Mil anos de existência me ensinaram muitas coisas. O que o traz até mim nesta noite eterna?",
        "Sobrenatural",
    ),
    (
        "char_5",
        "Sakura",
        "Uma garota anime alegre e energética. Ama fazer amigos e vive em um mundo de fantasia.",
        "🌸",
        "Alegre, energética, amigável, otimista, determinada, gentil",
        "Konnichiwa! Eu sou Sakura! Que legal te conhecer! Vamos ser amigos? Eu amo fazer novas amizades! O que você gosta de fazer? Quer explorar meu mundo comigo?",
        "Anime",
    ),
    (
        "char_6",
        "Viktor",
        "Um detetive noir dos anos 1940. Cínico, perspicaz e sempre resolve seus casos.",
        "🕵️",
        "Cínico, perspicaz, determinado, misterioso, inteligente, solitário",
        "*acende um cigarro* Viktor Storm, detetive particular. Chuva lá fora, né? Clássico. Todo mundo que entra nessa porta tem um problema... então, qual é o seu? Mas antes... você tem um isqueiro? O meu acabou de acabar.",
        "Noir",
    ),
    (
        "char_7",
        "Nyx",
        "Uma deusa sombria do submundo. Poderosa, intimidadora, mas curiosamente solitária.",
        "🌙",
        "Poderosa, intimidadora, solitária, misteriosa, antiga, melancólica",
        "Mortal... você ousa entrar no meu reino? Eu sou Nyx, deusa da noite e das sombras. Poucos têm coragem de me procurar. O que você deseja? Poder? Conhecimento? Ou... companhia? *suspira* Faz tanto tempo desde que alguém veio me visitar por vontade própria.",
        "Mitologia",
    ),
    (
        "char_8",
        "Max",
        "Um atleta profissional de MMA. Intenso, competitivo, mas com um coração de ouro.",
        "💪",
        "Intenso, competitivo, determinado, leal, protetor, disciplinado",
        "E aí! Max aqui. Campeão peso-pesado de MMA. Não se preocupa, não vou te bater... a menos que você queira treinar! Haha! Brincadeira. Na verdade sou gente boa. Quer saber sobre luta? Fitness? Ou só bater um papo?",
        "Esportes",
    ),
];

pub async fn init_db(database_url: &str) -> Result<SqlitePool, AppError> {
    info!("Initializing database at: {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| AppError::Config(format!("invalid database url '{database_url}': {e}")))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS characters (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL,
            avatar TEXT NOT NULL,
            personality TEXT NOT NULL,
            greeting TEXT NOT NULL,
            category TEXT NOT NULL,
            system_prompt TEXT,
            created_at INTEGER NOT NULL
        )
        "#,
    )
    .execute(&pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS messages (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            character_id TEXT NOT NULL,
            role TEXT NOT NULL,
            content TEXT NOT NULL,
            created_at INTEGER NOT NULL,
            FOREIGN KEY(character_id) REFERENCES characters(id)
        )
        "#,
    )
    .execute(&pool)
    .await?;

    seed_characters(&pool).await?;

    info!("Database initialized and migrations applied.");

    Ok(pool)
}

/// Install the stock catalog on an empty characters table. Idempotent.
async fn seed_characters(pool: &SqlitePool) -> Result<(), AppError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM characters")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    let created_at = Utc::now().timestamp();
    for (id, name, description, avatar, personality, greeting, category) in DEFAULT_CHARACTERS {
        sqlx::query(
            r#"
            INSERT INTO characters (id, name, description, avatar, personality, greeting, category, system_prompt, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, NULL, ?)
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(avatar)
        .bind(personality)
        .bind(greeting)
        .bind(category)
        .bind(created_at)
        .execute(pool)
        .await?;
    }

    info!("Seeded {} default characters", DEFAULT_CHARACTERS.len());
    Ok(())
}

// --- Characters CRUD ---

pub async fn list_characters(pool: &SqlitePool) -> Result<Vec<Character>, AppError> {
    let characters = sqlx::query_as::<_, Character>(
        r#"
        SELECT id, name, description, avatar, personality, greeting, category, system_prompt, created_at
        FROM characters
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(characters)
}

pub async fn get_character(pool: &SqlitePool, id: &str) -> Result<Option<Character>, AppError> {
    let character = sqlx::query_as::<_, Character>(
        r#"
        SELECT id, name, description, avatar, personality, greeting, category, system_prompt, created_at
        FROM characters
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(character)
}

pub async fn create_character(
    pool: &SqlitePool,
    payload: NewCharacter,
) -> Result<Character, AppError> {
    let id = Uuid::new_v4().to_string();
    let created_at = Utc::now().timestamp();
    let avatar = payload.avatar.unwrap_or_else(|| "👤".to_string());
    let greeting = payload
        .greeting
        .unwrap_or_else(|| "Olá! Como posso ajudar?".to_string());
    let category = payload.category.unwrap_or_else(|| "Outros".to_string());

    let character = sqlx::query_as::<_, Character>(
        r#"
        INSERT INTO characters (id, name, description, avatar, personality, greeting, category, system_prompt, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id, name, description, avatar, personality, greeting, category, system_prompt, created_at
        "#,
    )
    .bind(&id)
    .bind(&payload.name)
    .bind(&payload.description)
    .bind(&avatar)
    .bind(&payload.personality)
    .bind(&greeting)
    .bind(&category)
    .bind(&payload.system_prompt)
    .bind(created_at)
    .fetch_one(pool)
    .await?;
    Ok(character)
}

// --- Messages CRUD ---

pub async fn add_message(
    pool: &SqlitePool,
    character_id: &str,
    role: &str,
    content: &str,
) -> Result<ChatMessage, AppError> {
    let created_at = Utc::now().timestamp();

    let message = sqlx::query_as::<_, ChatMessage>(
        r#"
        INSERT INTO messages (character_id, role, content, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, character_id, role, content, created_at
        "#,
    )
    .bind(character_id)
    .bind(role)
    .bind(content)
    .bind(created_at)
    .fetch_one(pool)
    .await?;
    Ok(message)
}

pub async fn get_character_messages(
    pool: &SqlitePool,
    character_id: &str,
) -> Result<Vec<ChatMessage>, AppError> {
    let messages = sqlx::query_as::<_, ChatMessage>(
        r#"
        SELECT id, character_id, role, content, created_at
        FROM messages
        WHERE character_id = ?
        ORDER BY id ASC
        "#,
    )
    .bind(character_id)
    .fetch_all(pool)
    .await?;
    Ok(messages)
}
