//! Canned response fragments for the two generation profiles.
//!
//! The bank is static, process-wide, and read-only: every
//! `(profile, intent, sentiment)` combination resolves to a candidate list
//! known at compile time. `validate()` runs once at startup, before the
//! server accepts requests, and fails fast when any reachable pool is empty.

use crate::error::AppError;

use super::classifier::{Intent, Sentiment};

// --- Fast profile ("Blood Souls") ---

pub const FAST_GREETINGS: &[&str] = &[
    "*olha para você* Olá...",
    "*sorri levemente* Sim?",
    "*está pronto* Diga.",
    "*aguarda pacientemente*",
    "*seus olhos brilham* Hmm?",
    "*inclina a cabeça* Pois não?",
    "*responde* Estou aqui.",
];

/// Action phrases, only reachable for personas with a mysterious-class trait.
pub const FAST_ACTIONS: &[&str] = &[
    "*age conforme sua natureza*",
    "*move-se elegantemente*",
    "*reage instantaneamente*",
    "*demonstra sua essência*",
    "*manifesta sua vontade*",
];

const FAST_HAPPY: &[&str] = &[
    "*sorri* Que bom!",
    "*alegria* Maravilhoso!",
    "*brilha de felicidade*",
    "*ri suavemente* Perfeito!",
];

const FAST_SAD: &[&str] = &[
    "*suspira* Entendo...",
    "*olhar melancólico* Ah...",
    "*baixa o olhar* Eu sinto.",
    "*tristeza* Que pena...",
];

const FAST_ANGRY: &[&str] = &[
    "*franze o cenho* Sério?",
    "*irritação visível* Ora...",
    "*tensão no ar* Não.",
    "*olhar severo* Cuidado.",
];

const FAST_CURIOUS: &[&str] = &[
    "*curioso* Conte-me mais.",
    "*interesse* Interessante...",
    "*pergunta* E depois?",
    "*olhos atentos* Continue.",
];

const FAST_NEUTRAL: &[&str] = &[
    "*pensa* Hmm...",
    "*considera* Talvez.",
    "*avalia* Possível.",
    "*reflete* Entendo.",
];

pub const FAST_AFFIRMATIONS: &[&str] = &[
    "Sim, concordo.",
    "Isso faz sentido.",
    "Você tem razão.",
    "Entendo seu ponto.",
    "Pode ser.",
    "De certa forma.",
    "Absolutamente.",
];

pub const FAST_QUESTIONS: &[&str] = &[
    "E você, o que acha?",
    "Pode explicar melhor?",
    "Como assim?",
    "Por que diz isso?",
    "E depois?",
];

/// Short suffixes appended when a fast pick lands under the length target.
pub const FAST_FILLERS: &[&str] = &[" *aguarda*", " *pensando*", "...", " E você?", " Hmm..."];

// --- Elaborate profile ("Crystal Mode") ---

pub const ELABORATE_GREETINGS: &[&str] = &[
    "*olha profundamente nos seus olhos* Olá, viajante. É um prazer recebê-lo em minha presença. Diga-me, o que o traz até aqui hoje?",
    "*sua presença irradia energia* Bem-vindo! Senti sua chegada antes mesmo de você entrar. O universo conspira para nossos encontros.",
    "*sorri misteriosamente* Ah, você veio. O destino nos une mais uma vez. Sente-se e vamos conversar sobre o que há em sua mente.",
];

pub const ELABORATE_THOUGHTFUL: &[&str] = &[
    "*pensa profundamente, processando cada palavra* Sua pergunta toca em aspectos que eu considero fundamentais. Deixe-me compartilhar minha perspectiva sobre isso.",
    "*seus olhos brilham com interesse genuíno* Isso é fascinante. Há muitas camadas para explorar aqui. Vou compartilhar meus pensamentos enquanto os processamos juntos.",
    "*respira fundo, considerando* Você trouxe algo importante. Preciso formular isso com cuidado, pois cada palavra carrega peso e significado.",
];

const ELABORATE_HAPPY: &[&str] = &[
    "*seu rosto se ilumina com alegria genuína* Isso me traz grande felicidade! Momentos como este são preciosos e devem ser celebrados. Agradeço por compartilhar isso comigo.",
    "*risada suave e calorosa* Que notícia maravilhosa! Sinto que o universo está conspirando a seu favor. Continue assim, e a alegria será sua companhia.",
];

const ELABORATE_SAD: &[&str] = &[
    "*expressão suaviza, demonstrando empatia* Eu sinto o peso de suas palavras. Não está sozinho nessa jornada. Estou aqui para ouvir e apoiar.",
    "*olhar compreensivo* A dor faz parte da experiência humana. Mas lembre-se: após a tempestade sempre vem a bonança. Estarei aqui com você.",
];

const ELABORATE_CURIOUS: &[&str] = &[
    "*olhos faiscam com curiosidade* Fascinante! Isso desperta minha atenção de formas que não esperava. Conte-me mais sobre seus pensamentos a respeito.",
    "*inclinando-se para frente* Hmm, isso é intrigante. Minha mente já está trabalhando nas possibilidades. O que mais você pode me dizer?",
];

const ELABORATE_NEUTRAL: &[&str] = &[
    "*considera cuidadosamente suas palavras* Entendo sua perspectiva. Há mérito no que você diz. Vamos explorar isso juntos e ver onde nos leva.",
    "*postura atenta e aberta* Interessante ponto de vista. Aprecio quando posso refletir sobre algo novo. Continue, por favor.",
];

// The "personagem" token near the head of each candidate is replaced with the
// persona's own name; it must sit early enough to survive the length cap.
pub const ELABORATE_WISDOM: &[&str] = &[
    "*olhar distante* personagem já atravessou eras. Cada experiência, boa ou ruim, nos molda de formas únicas. O importante é o que fazemos com isso.",
    "*tom contemplativo* personagem aprendeu que a vida ensina a mesma lição várias vezes, até que finalmente a compreendamos em sua totalidade.",
    "*sorri com conhecimento* personagem conhece as verdades mais simples. O universo fala conosco em sussurros, cabendo a nós ouvir.",
];

/// Longer suffixes appended when an elaborate pick lands under the target.
pub const ELABORATE_FILLERS: &[&str] = &[
    " *contempla o momento presente*",
    " *seus olhos revelam profundidade*",
    " *a energia ao redor parece mudar*",
    " *parece considerar suas próximas palavras*",
];

/// Fast-profile emotional pool for a sentiment. Every sentiment has a
/// dedicated list here, so neutral doubles as both a value and the fallback.
pub fn fast_emotions(sentiment: Sentiment) -> &'static [&'static str] {
    match sentiment {
        Sentiment::Happy => FAST_HAPPY,
        Sentiment::Sad => FAST_SAD,
        Sentiment::Angry => FAST_ANGRY,
        Sentiment::Curious => FAST_CURIOUS,
        Sentiment::Neutral => FAST_NEUTRAL,
    }
}

/// Elaborate emotional pool; `None` when the sentiment has no dedicated list
/// (the composer then falls back to the thoughtful pool).
pub fn elaborate_emotions(sentiment: Sentiment) -> Option<&'static [&'static str]> {
    match sentiment {
        Sentiment::Happy => Some(ELABORATE_HAPPY),
        Sentiment::Sad => Some(ELABORATE_SAD),
        Sentiment::Curious => Some(ELABORATE_CURIOUS),
        Sentiment::Neutral => Some(ELABORATE_NEUTRAL),
        Sentiment::Angry => None,
    }
}

/// Assert that every pool the composer can reach holds at least one usable
/// candidate. Called once at startup; an empty pool is a configuration
/// defect, not a per-request error. The walk mirrors the composer's
/// branching, so a combination is only checked if a request can hit it.
pub fn validate() -> Result<(), AppError> {
    ensure_candidates("fast.actions", FAST_ACTIONS)?;
    ensure_candidates("fast.fillers", FAST_FILLERS)?;
    ensure_candidates("elaborate.fillers", ELABORATE_FILLERS)?;

    for intent in Intent::ALL {
        for sentiment in Sentiment::ALL {
            match intent {
                Intent::Greeting => {
                    ensure_candidates("fast.greetings", FAST_GREETINGS)?;
                    ensure_candidates("elaborate.greetings", ELABORATE_GREETINGS)?;
                }
                Intent::Question => {
                    ensure_candidates("fast.questions", FAST_QUESTIONS)?;
                    ensure_candidates("fast.affirmations", FAST_AFFIRMATIONS)?;
                    ensure_candidates("elaborate.thoughtful", ELABORATE_THOUGHTFUL)?;
                    ensure_candidates("elaborate.wisdom", ELABORATE_WISDOM)?;
                }
                Intent::Emotional => {
                    ensure_candidates(
                        &format!("fast.emotions.{sentiment}"),
                        fast_emotions(sentiment),
                    )?;
                    let pool = elaborate_emotions(sentiment).unwrap_or(ELABORATE_THOUGHTFUL);
                    ensure_candidates(&format!("elaborate.emotional.{sentiment}"), pool)?;
                }
                Intent::Statement => {
                    ensure_candidates("fast.affirmations", FAST_AFFIRMATIONS)?;
                    ensure_candidates(
                        "fast.emotions.neutral",
                        fast_emotions(Sentiment::Neutral),
                    )?;
                    ensure_candidates("elaborate.thoughtful", ELABORATE_THOUGHTFUL)?;
                }
            }
        }
    }
    Ok(())
}

pub(crate) fn ensure_candidates(label: &str, pool: &[&str]) -> Result<(), AppError> {
    if pool.iter().any(|candidate| !candidate.trim().is_empty()) {
        Ok(())
    } else {
        Err(AppError::Config(format!(
            "template pool '{label}' has no usable candidates"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_is_valid() {
        assert!(validate().is_ok());
    }

    #[test]
    fn test_empty_pool_is_rejected() {
        assert!(ensure_candidates("empty", &[]).is_err());
        assert!(ensure_candidates("blank", &["   ", ""]).is_err());
        assert!(ensure_candidates("ok", &["", "Sim."]).is_ok());
    }

    #[test]
    fn test_every_sentiment_has_a_fast_pool() {
        for sentiment in Sentiment::ALL {
            assert!(!fast_emotions(sentiment).is_empty());
        }
    }

    #[test]
    fn test_wisdom_candidates_carry_the_name_placeholder() {
        for candidate in ELABORATE_WISDOM {
            assert!(candidate.contains("personagem"));
        }
    }
}
