use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::core::BandSign;

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(0);

/// Token that keeps element ids of one chart apart from any other chart in
/// the same document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartNamespace {
    token: String,
}

impl ChartNamespace {
    /// Uses an explicit token, e.g. for reproducible output in tests.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Draws the next token from a process-wide monotonic counter.
    #[must_use]
    pub fn next() -> Self {
        let value = NEXT_TOKEN.fetch_add(1, Ordering::Relaxed);
        Self {
            token: format!("h{value:x}"),
        }
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    #[must_use]
    pub fn clip_id(&self, series_index: usize) -> String {
        format!("{series_index}-{}-clip-{series_index}", self.token)
    }

    #[must_use]
    pub fn path_id(&self, series_index: usize, sign: BandSign) -> String {
        format!("{series_index}-{}-path-{sign}-{series_index}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::ChartNamespace;
    use crate::core::BandSign;

    #[test]
    fn ids_embed_series_index_and_token() {
        let namespace = ChartNamespace::new("abc");
        assert_eq!(namespace.clip_id(2), "2-abc-clip-2");
        assert_eq!(
            namespace.path_id(0, BandSign::Negative),
            "0-abc-path-negative-0"
        );
    }

    #[test]
    fn counter_tokens_are_distinct() {
        assert_ne!(ChartNamespace::next(), ChartNamespace::next());
    }
}
