use std::sync::Arc;

use thiserror::Error;

mod dictionary;
mod extract;
mod source;
mod vocabulary_api;

pub use dictionary::{Relation, RelatedTerms, Sense, Suggestion, Word};
pub use extract::{extract_definition, extract_suggestions};
pub use source::DocumentSource;
pub use vocabulary_api::{VocabularyApi, DEFAULT_WORD, VOCABULARY_URL};

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to fetch page: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("failed to read page body: {0}")]
    Body(#[source] reqwest::Error),
    #[error("invalid selector `{selector}`: {message}")]
    Selector {
        selector: &'static str,
        message: String,
    },
}

impl DictionaryError {
    /// True when the page never arrived, as opposed to failing to parse.
    pub fn is_fetch(&self) -> bool {
        matches!(self, DictionaryError::Fetch(_) | DictionaryError::Body(_))
    }
}

#[derive(Clone)]
pub struct Dictionary {
    source: Arc<dyn DocumentSource>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_source(VocabularyApi::new())
    }

    pub fn with_source<S>(source: S) -> Self
    where
        S: DocumentSource + 'static,
    {
        Self {
            source: Arc::new(source),
        }
    }

    pub async fn get_definition(&self, word: &str) -> Result<Word, DictionaryError> {
        let html = self.source.definition_page(word).await?;
        extract_definition(&html)
    }

    pub async fn get_suggestions(&self, word: &str) -> Result<Vec<Suggestion>, DictionaryError> {
        let html = self.source.suggestion_page(word).await?;
        extract_suggestions(&html)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
