//! Selector lookups over vocabulary.com markup. HTML parsing itself never
//! fails, a missing element just leaves its field empty.

use std::sync::OnceLock;

use scraper::{ElementRef, Html, Selector};

use crate::dictionary::{Relation, Sense, Suggestion, Word};
use crate::DictionaryError;

#[derive(Debug, Clone)]
struct SelectorError {
    selector: &'static str,
    message: String,
}

impl From<SelectorError> for DictionaryError {
    fn from(error: SelectorError) -> Self {
        DictionaryError::Selector {
            selector: error.selector,
            message: error.message,
        }
    }
}

fn selector(css: &'static str) -> Result<Selector, SelectorError> {
    Selector::parse(css).map_err(|error| SelectorError {
        selector: css,
        message: error.to_string(),
    })
}

fn text_of(scope: ElementRef<'_>, selector: &Selector) -> String {
    scope
        .select(selector)
        .flat_map(|element| element.text())
        .collect::<String>()
        .trim()
        .to_owned()
}

fn own_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

struct DefinitionSelectors {
    title: Selector,
    section: Selector,
    short: Selector,
    long: Selector,
    ordinal: Selector,
    part_of_speech: Selector,
    sense_title: Selector,
    example: Selector,
    instances: Selector,
    label: Selector,
    word: Selector,
    description: Selector,
}

impl DefinitionSelectors {
    fn compile() -> Result<Self, SelectorError> {
        Ok(Self {
            title: selector(".dynamictext")?,
            section: selector(".section")?,
            short: selector(".short")?,
            long: selector(".long")?,
            ordinal: selector(".ordinal")?,
            part_of_speech: selector(".definition .anchor")?,
            sense_title: selector("h3.definition")?,
            example: selector(".defContent .example")?,
            instances: selector("dl.instances")?,
            label: selector("dt")?,
            word: selector(".word")?,
            description: selector("dd div.definition")?,
        })
    }
}

struct SuggestionSelectors {
    item: Selector,
    word: Selector,
    definition: Selector,
}

impl SuggestionSelectors {
    fn compile() -> Result<Self, SelectorError> {
        Ok(Self {
            item: selector(".suggestions li")?,
            word: selector(".word")?,
            definition: selector(".definition")?,
        })
    }
}

fn definition_selectors() -> Result<&'static DefinitionSelectors, DictionaryError> {
    static SELECTORS: OnceLock<Result<DefinitionSelectors, SelectorError>> = OnceLock::new();
    SELECTORS
        .get_or_init(DefinitionSelectors::compile)
        .as_ref()
        .map_err(|error| error.clone().into())
}

fn suggestion_selectors() -> Result<&'static SuggestionSelectors, DictionaryError> {
    static SELECTORS: OnceLock<Result<SuggestionSelectors, SelectorError>> = OnceLock::new();
    SELECTORS
        .get_or_init(SuggestionSelectors::compile)
        .as_ref()
        .map_err(|error| error.clone().into())
}

pub fn extract_definition(html: &str) -> Result<Word, DictionaryError> {
    let selectors = definition_selectors()?;
    let document = Html::parse_document(html);
    let mut word = Word::default();

    if let Some(title) = document.select(&selectors.title).last() {
        word.title = own_text(title);
    }

    if let Some(section) = document.select(&selectors.section).last() {
        word.short_definition = text_of(section, &selectors.short);
        word.long_definition = text_of(section, &selectors.long);
    }

    word.senses = document
        .select(&selectors.ordinal)
        .map(|ordinal| extract_sense(ordinal, selectors))
        .collect();

    tracing::debug!(
        title = %word.title,
        senses = word.senses.len(),
        "extracted definition page"
    );
    Ok(word)
}

fn extract_sense(ordinal: ElementRef<'_>, selectors: &DefinitionSelectors) -> Sense {
    let mut sense = Sense {
        title: text_of(ordinal, &selectors.sense_title),
        part_of_speech: text_of(ordinal, &selectors.part_of_speech),
        example: text_of(ordinal, &selectors.example),
        ..Sense::default()
    };

    for instances in ordinal.select(&selectors.instances) {
        let label = text_of(instances, &selectors.label);
        let Some(relation) = Relation::from_label(&label) else {
            continue;
        };
        let related = sense.related_mut(relation);
        related
            .words
            .extend(instances.select(&selectors.word).map(own_text));
        // Later groups with the same label replace the description.
        related.description = text_of(instances, &selectors.description);
    }

    sense
}

pub fn extract_suggestions(html: &str) -> Result<Vec<Suggestion>, DictionaryError> {
    let selectors = suggestion_selectors()?;
    let document = Html::parse_document(html);
    let suggestions = document
        .select(&selectors.item)
        .map(|li| Suggestion {
            word: text_of(li, &selectors.word),
            short_description: text_of(li, &selectors.definition),
        })
        .collect::<Vec<_>>();

    tracing::debug!(count = suggestions.len(), "extracted suggestions");
    Ok(suggestions)
}
