// https://www.vocabulary.com/dictionary/definition.ajax - full entry, markup only
// https://www.vocabulary.com/dictionary/autocomplete - `ul.suggestions` fragment

use async_trait::async_trait;

use crate::{DictionaryError, DocumentSource};

pub const VOCABULARY_URL: &str = "https://www.vocabulary.com";

/// Looked up when the caller does not name a word.
pub const DEFAULT_WORD: &str = "necropolis";

const DEFINITION_PATH: &str = "/dictionary/definition.ajax";
const AUTOCOMPLETE_PATH: &str = "/dictionary/autocomplete";

/// [`DocumentSource`] backed by vocabulary.com.
///
/// One GET per lookup, no retries. The body is handed back whatever the
/// status code, the extractors simply find nothing in an error page.
#[derive(Debug, Clone)]
pub struct VocabularyApi {
    client: reqwest::Client,
    base_url: String,
}

impl VocabularyApi {
    pub fn new() -> Self {
        Self::with_base_url(VOCABULARY_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }
}

impl Default for VocabularyApi {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_word(word: &str) -> &str {
    match word.trim() {
        "" => DEFAULT_WORD,
        word => word,
    }
}

pub(crate) async fn get_page(
    client: &reqwest::Client,
    url: &str,
    query: &[(&str, &str)],
) -> Result<String, DictionaryError> {
    let res: reqwest::Response = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;
    tracing::debug!(url = %res.url(), status = %res.status(), "fetched page");
    res.text().await.map_err(DictionaryError::Body)
}

#[async_trait]
impl DocumentSource for VocabularyApi {
    async fn definition_page(&self, word: &str) -> Result<String, DictionaryError> {
        let url = format!("{}{DEFINITION_PATH}", self.base_url);
        get_page(
            &self.client,
            &url,
            &[("search", resolve_word(word)), ("lang", "en")],
        )
        .await
    }

    async fn suggestion_page(&self, word: &str) -> Result<String, DictionaryError> {
        let url = format!("{}{AUTOCOMPLETE_PATH}", self.base_url);
        get_page(&self.client, &url, &[("search", resolve_word(word))]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_word_falls_back_to_default() {
        assert_eq!(resolve_word(""), DEFAULT_WORD);
        assert_eq!(resolve_word("   "), DEFAULT_WORD);
        assert_eq!(resolve_word(" lucid "), "lucid");
    }

    #[test]
    fn base_url_loses_trailing_slash() {
        let api = VocabularyApi::with_base_url("http://localhost:9000/");
        assert_eq!(api.base_url, "http://localhost:9000");
    }
}
