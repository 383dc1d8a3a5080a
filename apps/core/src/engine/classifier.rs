//! Message classification via keyword containment.
//!
//! Pure substring matching on the lower-cased message. No tokenization,
//! no stemming, no Unicode normalization beyond case-folding: the keyword
//! lists below are the whole "NLP".

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse category of what kind of message the user sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Salutation (oi, olá, bom dia, ...)
    Greeting,
    /// Contains a question mark or starts with an interrogative word
    Question,
    /// Mentions an emotion noun (triste, feliz, raiva, ...)
    Emotional,
    /// Anything else
    Statement,
}

impl Intent {
    pub const ALL: [Intent; 4] = [
        Intent::Greeting,
        Intent::Question,
        Intent::Emotional,
        Intent::Statement,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Question => "question",
            Intent::Emotional => "emotional",
            Intent::Statement => "statement",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Emotional coloring inferred from the message text, independent of intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Happy,
    Sad,
    Angry,
    Curious,
    Neutral,
}

impl Sentiment {
    pub const ALL: [Sentiment; 5] = [
        Sentiment::Happy,
        Sentiment::Sad,
        Sentiment::Angry,
        Sentiment::Curious,
        Sentiment::Neutral,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Happy => "happy",
            Sentiment::Sad => "sad",
            Sentiment::Angry => "angry",
            Sentiment::Curious => "curious",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of classifying one message. Produced and consumed within a single
/// engine call; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub intent: Intent,
    pub sentiment: Sentiment,
}

// Keyword tables. These are data, not control flow: extend or localize the
// lists without touching `classify`.

/// Salutations, matched anywhere in the message.
const GREETING_KEYWORDS: &[&str] = &[
    "oi",
    "olá",
    "ola",
    "hey",
    "ei",
    "hello",
    "hi",
    "e aí",
    "eai",
    "bom dia",
    "boa tarde",
    "boa noite",
];

/// Interrogative words, matched at the start of the message only.
const INTERROGATIVE_PREFIXES: &[&str] = &["como", "qual", "quando", "onde", "por que", "porque"];

/// Emotion nouns that flag a message as emotional.
const EMOTION_KEYWORDS: &[&str] = &["triste", "feliz", "raiva", "amor", "ódio", "medo"];

const HAPPY_KEYWORDS: &[&str] = &[
    "feliz",
    "alegria",
    "bom",
    "ótimo",
    "maravilhoso",
    "incrível",
    "incrivel",
    "legal",
    "adorei",
    "amei",
    "obrigado",
    "obrigada",
    "graças",
    "sucesso",
    "consegui",
    "conseguiu",
];

const SAD_KEYWORDS: &[&str] = &[
    "triste",
    "péssimo",
    "pessimo",
    "ruim",
    "lamento",
    "sinto",
    "perdi",
    "perda",
    "fracasso",
    "deprimido",
    "chorar",
    "lágrimas",
    "lagrimas",
];

const ANGRY_KEYWORDS: &[&str] = &[
    "raiva",
    "ódio",
    "odio",
    "irritado",
    "irritante",
    "odiou",
    "detesto",
    "cansado",
    "cheio",
];

// Overlaps the question-intent markers on purpose: a question reads as
// curiosity on the sentiment axis too.
const CURIOUS_KEYWORDS: &[&str] = &[
    "?", "como", "qual", "quando", "onde", "por que", "porque", "conta", "conte", "explique",
    "diga", "oque", "o que",
];

fn contains_any(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lower.contains(k))
}

/// Classify a message into an intent and a sentiment.
///
/// Total over arbitrary UTF-8 input; an empty or all-whitespace message
/// falls through every keyword check and yields statement/neutral.
pub fn classify(message: &str) -> Classification {
    let lower = message.to_lowercase();

    let intent = if contains_any(&lower, GREETING_KEYWORDS) {
        Intent::Greeting
    } else if lower.contains('?')
        || INTERROGATIVE_PREFIXES.iter().any(|w| lower.starts_with(w))
    {
        Intent::Question
    } else if contains_any(&lower, EMOTION_KEYWORDS) {
        Intent::Emotional
    } else {
        Intent::Statement
    };

    let sentiment = if contains_any(&lower, HAPPY_KEYWORDS) {
        Sentiment::Happy
    } else if contains_any(&lower, SAD_KEYWORDS) {
        Sentiment::Sad
    } else if contains_any(&lower, ANGRY_KEYWORDS) {
        Sentiment::Angry
    } else if contains_any(&lower, CURIOUS_KEYWORDS) {
        Sentiment::Curious
    } else {
        Sentiment::Neutral
    };

    Classification { intent, sentiment }
}
