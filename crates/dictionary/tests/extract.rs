use async_trait::async_trait;
use dictionary::{
    extract_definition, extract_suggestions, Dictionary, DictionaryError, DocumentSource,
    RelatedTerms,
};

const LUCID: &str = include_str!("fixtures/lucid.html");
const SUGGESTIONS: &str = include_str!("fixtures/suggestions.html");

struct CannedPages;

#[async_trait]
impl DocumentSource for CannedPages {
    async fn definition_page(&self, word: &str) -> Result<String, DictionaryError> {
        assert_eq!(word, "lucid");
        Ok(LUCID.to_owned())
    }

    async fn suggestion_page(&self, _word: &str) -> Result<String, DictionaryError> {
        Ok(SUGGESTIONS.to_owned())
    }
}

#[test]
fn definition_page_maps_to_word() {
    let word = extract_definition(LUCID).unwrap();
    assert_eq!(word.title, "lucid");
    assert_eq!(
        word.short_definition,
        "Something that is lucid is very clear and easy to understand."
    );
    assert!(word.long_definition.starts_with("Lucid comes from the Latin"));
    assert_eq!(word.senses.len(), 2);

    let first = &word.senses[0];
    assert_eq!(first.part_of_speech, "adjective");
    assert_eq!(
        first.title,
        "(of language) transparently clear; easily understandable"
    );
    assert_eq!(first.example, "a lucid explanation");
    assert_eq!(first.synonyms.words, vec!["clear", "plain"]);
    assert_eq!(first.synonyms.description, "easily understood");
    assert_eq!(first.hypernyms.words, vec!["comprehensible"]);
    assert!(first.antonyms.words.is_empty());
    assert_eq!(first.antonyms.description, "");

    let second = &word.senses[1];
    assert_eq!(second.example, "a lucid moment in his madness");
    assert_eq!(second.antonyms.words, vec!["unlucid"]);
    assert_eq!(second.antonyms.description, "mentally confused");
    assert_eq!(second.synonyms, RelatedTerms::default());
}

#[test]
fn suggestions_follow_markup_order() {
    let suggestions = extract_suggestions(SUGGESTIONS).unwrap();
    assert_eq!(suggestions.len(), 3);
    assert_eq!(suggestions[0].word, "lucid");
    assert_eq!(suggestions[0].short_description, "transparently clear");
    assert_eq!(suggestions[1].word, "lucidity");
    assert_eq!(suggestions[2].word, "lucidness");
}

#[test]
fn extracted_word_survives_json_round_trip() {
    let word = extract_definition(LUCID).unwrap();
    let json = serde_json::to_vec(&word).unwrap();
    let back: dictionary::Word = serde_json::from_slice(&json).unwrap();
    assert_eq!(back, word);
}

#[tokio::test]
async fn dictionary_runs_extractors_over_injected_source() {
    let dict = Dictionary::with_source(CannedPages);

    let word = dict.get_definition("lucid").await.unwrap();
    assert_eq!(word.senses[0].synonyms.words, vec!["clear", "plain"]);

    let suggestions = dict.get_suggestions("luc").await.unwrap();
    assert_eq!(suggestions.len(), 3);
}
