//! Sliding-window throttle for the chat endpoint.
//!
//! Hits are tracked per conversation key (the character id). Each check
//! prunes its own key's expired hits; `prune` sweeps the whole map so memory
//! stays bounded by active conversations.

use std::collections::HashMap;
use std::time::{Duration, Instant};

pub struct RateLimiter {
    /// Timestamps of accepted hits for each key.
    hits: HashMap<String, Vec<Instant>>,
    /// Maximum number of hits allowed within `window`.
    limit: usize,
    /// Duration of the sliding window.
    window: Duration,
}

impl RateLimiter {
    pub fn new(limit: usize, window: Duration) -> Self {
        RateLimiter {
            hits: HashMap::new(),
            limit,
            window,
        }
    }

    /// Record a hit for `key` and report whether it stays within the limit.
    pub fn check(&mut self, key: &str) -> bool {
        let now = Instant::now();
        let hits = self.hits.entry(key.to_string()).or_default();
        hits.retain(|t| now.duration_since(*t) < self.window);

        if hits.len() < self.limit {
            hits.push(now);
            true
        } else {
            false
        }
    }

    /// Number of keys currently tracked, expired or not.
    pub fn tracked(&self) -> usize {
        self.hits.len()
    }

    /// Drop keys with no hits left inside the window.
    pub fn prune(&mut self) {
        let now = Instant::now();
        self.hits.retain(|_, hits| {
            hits.retain(|t| now.duration_since(*t) < self.window);
            !hits.is_empty()
        });
    }
}
