use async_trait::async_trait;

use crate::DictionaryError;

/// Provides raw HTML documents for a word.
///
/// The extractors only ever see the returned markup, so tests can hand in
/// canned pages instead of talking to the network.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// The definition page for `word`.
    async fn definition_page(&self, word: &str) -> Result<String, DictionaryError>;

    /// The autocomplete fragment for `word`.
    async fn suggestion_page(&self, word: &str) -> Result<String, DictionaryError>;
}
