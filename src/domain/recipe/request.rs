use crate::domain::DomainError;

pub const MIN_WORD_COUNT: u32 = 100;
pub const MAX_WORD_COUNT: u32 = 1000;
pub const DEFAULT_WORD_COUNT: u32 = 300;

/// A validated recipe generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRequest {
    topic: String,
    word_count: u32,
}

impl RecipeRequest {
    /// Validate user input. The topic must be non-blank and the word count
    /// within [MIN_WORD_COUNT, MAX_WORD_COUNT].
    pub fn new(topic: impl Into<String>, word_count: u32) -> Result<Self, DomainError> {
        let topic = topic.into().trim().to_string();

        if topic.is_empty() {
            return Err(DomainError::validation("Recipe topic must not be empty"));
        }

        if !(MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&word_count) {
            return Err(DomainError::validation(format!(
                "Word count must be between {} and {}",
                MIN_WORD_COUNT, MAX_WORD_COUNT
            )));
        }

        Ok(Self { topic, word_count })
    }

    pub fn with_default_word_count(topic: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(topic, DEFAULT_WORD_COUNT)
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn word_count(&self) -> u32 {
        self.word_count
    }

    /// The natural-language instruction for the model
    pub fn instruction(&self) -> String {
        format!(
            "Write a detailed recipe about {} in approximately {} words. \
             Include title, ingredients, steps, and cooking tips.",
            self.topic, self.word_count
        )
    }
}
