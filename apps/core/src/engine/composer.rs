//! Response composition: template selection, persona substitution, and
//! length shaping.
//!
//! Every random draw goes through the caller-supplied `Rng`, so a seeded
//! generator replays the exact same selections.

use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

use super::classifier::{Classification, Intent, Sentiment};
use super::templates;
use super::{Persona, ResponseProfile};

/// Fast picks shorter than this get a filler suffix.
const FAST_FILLER_THRESHOLD: usize = 60;
/// Hard cap for fast-profile replies, in characters.
const FAST_MAX_CHARS: usize = 100;
/// Elaborate picks shorter than this get an elaboration suffix.
const ELABORATE_FILLER_THRESHOLD: usize = 150;
/// Hard cap for elaborate-profile replies, in characters.
const ELABORATE_MAX_CHARS: usize = 250;

/// Personality keywords that unlock the action-phrase pool.
const MYSTERIOUS_TRAITS: &[&str] = &["misterio", "misteriosa"];

static NAME_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)personagem").expect("Invalid regex: name placeholder"));

/// Assemble one reply from the template bank.
///
/// Never fails for any classification value; the pools involved are
/// validated non-empty at startup.
pub fn compose<R: Rng>(
    rng: &mut R,
    persona: &Persona<'_>,
    classification: &Classification,
    profile: ResponseProfile,
) -> String {
    let (reply, cap) = match profile {
        ResponseProfile::Fast => (compose_fast(rng, persona, classification), FAST_MAX_CHARS),
        ResponseProfile::Elaborate => (
            compose_elaborate(rng, persona, classification),
            ELABORATE_MAX_CHARS,
        ),
    };
    let reply = tag_with_name(rng, persona.name, reply);
    truncate_chars(reply, cap)
}

fn compose_fast<R: Rng>(
    rng: &mut R,
    persona: &Persona<'_>,
    classification: &Classification,
) -> String {
    let mut pool: Vec<&'static str> = Vec::new();

    let personality = persona.personality.to_lowercase();
    if MYSTERIOUS_TRAITS.iter().any(|t| personality.contains(t)) {
        pool.extend_from_slice(templates::FAST_ACTIONS);
    }

    match classification.intent {
        Intent::Greeting => pool.extend_from_slice(templates::FAST_GREETINGS),
        Intent::Question => {
            pool.extend_from_slice(templates::FAST_QUESTIONS);
            if rng.gen_bool(0.5) {
                pool.extend_from_slice(templates::FAST_AFFIRMATIONS);
            }
        }
        Intent::Emotional => {
            pool.extend_from_slice(templates::fast_emotions(classification.sentiment))
        }
        Intent::Statement => {
            pool.extend_from_slice(templates::FAST_AFFIRMATIONS);
            pool.extend_from_slice(templates::fast_emotions(Sentiment::Neutral));
        }
    }

    let mut reply = pool.choose(rng).copied().unwrap_or_default().to_string();
    if reply.chars().count() < FAST_FILLER_THRESHOLD {
        if let Some(filler) = templates::FAST_FILLERS.choose(rng) {
            reply.push_str(filler);
        }
    }
    reply
}

fn compose_elaborate<R: Rng>(
    rng: &mut R,
    persona: &Persona<'_>,
    classification: &Classification,
) -> String {
    let reply = match classification.intent {
        Intent::Greeting => pick(rng, templates::ELABORATE_GREETINGS),
        Intent::Question => {
            let thoughtful = pick(rng, templates::ELABORATE_THOUGHTFUL);
            let wisdom = pick(rng, templates::ELABORATE_WISDOM);
            format!("{thoughtful} {wisdom}")
        }
        Intent::Emotional => {
            let pool = templates::elaborate_emotions(classification.sentiment)
                .unwrap_or(templates::ELABORATE_THOUGHTFUL);
            pick(rng, pool)
        }
        Intent::Statement => pick(rng, templates::ELABORATE_THOUGHTFUL),
    };

    let mut reply = NAME_PLACEHOLDER
        .replace_all(&reply, persona.name)
        .into_owned();
    if reply.chars().count() < ELABORATE_FILLER_THRESHOLD {
        if let Some(filler) = templates::ELABORATE_FILLERS.choose(rng) {
            reply.push_str(filler);
        }
    }
    reply
}

fn pick<R: Rng>(rng: &mut R, pool: &'static [&'static str]) -> String {
    pool.choose(rng).copied().unwrap_or_default().to_string()
}

/// With probability 0.3, and only when the persona's name is not already in
/// the reply, prepend one of the name-tag variants. One of the three
/// variants is the empty tag, each equally likely.
fn tag_with_name<R: Rng>(rng: &mut R, name: &str, reply: String) -> String {
    if reply.contains(name) || !rng.gen_bool(0.3) {
        return reply;
    }
    match rng.gen_range(0..3) {
        0 => format!("{name}: {reply}"),
        1 => format!("*{name} responde* {reply}"),
        _ => reply,
    }
}

/// Caps are measured in characters so a cut never lands inside a UTF-8
/// sequence of the template text.
fn truncate_chars(s: String, max: usize) -> String {
    if s.chars().count() <= max {
        s
    } else {
        s.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn persona() -> Persona<'static> {
        Persona {
            name: "Aurora",
            personality: "Curiosa, analítica, gentil",
            description: "Uma IA avançada",
            greeting: "Olá!",
            system_prompt: None,
        }
    }

    #[test]
    fn test_fast_reply_respects_cap() {
        let p = persona();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            for intent in Intent::ALL {
                for sentiment in Sentiment::ALL {
                    let reply = compose(
                        &mut rng,
                        &p,
                        &Classification { intent, sentiment },
                        ResponseProfile::Fast,
                    );
                    assert!(!reply.is_empty());
                    assert!(reply.chars().count() <= FAST_MAX_CHARS);
                }
            }
        }
    }

    #[test]
    fn test_elaborate_reply_respects_cap() {
        let p = persona();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            for intent in Intent::ALL {
                for sentiment in Sentiment::ALL {
                    let reply = compose(
                        &mut rng,
                        &p,
                        &Classification { intent, sentiment },
                        ResponseProfile::Elaborate,
                    );
                    assert!(!reply.is_empty());
                    assert!(reply.chars().count() <= ELABORATE_MAX_CHARS);
                }
            }
        }
    }

    #[test]
    fn test_truncate_chars_is_utf8_safe() {
        let s = "ção".repeat(50);
        let cut = truncate_chars(s, 7);
        assert_eq!(cut.chars().count(), 7);
        assert_eq!(cut, "çãoçãoç");
    }

    #[test]
    fn test_name_tag_skipped_when_name_present() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let reply = tag_with_name(&mut rng, "Luna", "Luna está aqui.".to_string());
            assert_eq!(reply, "Luna está aqui.");
        }
    }
}
