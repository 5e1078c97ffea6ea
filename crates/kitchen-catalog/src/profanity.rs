//! Word-list profanity checker.

use async_trait::async_trait;

use kitchen_core::{CheckerError, ProfanityChecker};

/// Words rejected when no list is configured.
pub const DEFAULT_WORDS: &[&str] = &["damn", "hell", "crap", "shit", "fuck", "bastard"];

/// Flags text containing any listed word as a whole word, case-insensitively.
///
/// Text and list entries are split on non-alphanumeric characters, so
/// "Damn-Good Wings" is flagged while "Shellfish Platter" is not. A
/// multi-word entry matches the same words appearing consecutively.
#[derive(Debug, Clone)]
pub struct WordListChecker {
    words: Vec<Vec<String>>,
}

impl WordListChecker {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        WordListChecker {
            words: words
                .into_iter()
                .map(|word| tokenize(word.as_ref()))
                .filter(|tokens| !tokens.is_empty())
                .collect(),
        }
    }

    pub fn is_profane(&self, text: &str) -> bool {
        let tokens = tokenize(text);
        self.words.iter().any(|word| {
            tokens
                .windows(word.len())
                .any(|window| window == word.as_slice())
        })
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

impl Default for WordListChecker {
    fn default() -> Self {
        WordListChecker::new(DEFAULT_WORDS)
    }
}

#[async_trait]
impl ProfanityChecker for WordListChecker {
    async fn contains_profanity(&self, text: &str) -> Result<bool, CheckerError> {
        Ok(self.is_profane(text))
    }
}
