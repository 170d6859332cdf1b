use serde::{Deserialize, Serialize};

/// One dictionary entry as scraped from a definition page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Word {
    #[serde(rename = "WordTitle")]
    pub title: String,
    #[serde(rename = "DefinitionShort")]
    pub short_definition: String,
    #[serde(rename = "DefinitionLong")]
    pub long_definition: String,
    #[serde(rename = "Definition")]
    pub senses: Vec<Sense>,
}

/// One numbered meaning of a word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sense {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Type")]
    pub part_of_speech: String,
    #[serde(rename = "Example")]
    pub example: String,
    #[serde(rename = "Synonyms")]
    pub synonyms: RelatedTerms,
    #[serde(rename = "Antonyms")]
    pub antonyms: RelatedTerms,
    /// The "Type of:" group.
    #[serde(rename = "Types")]
    pub hypernyms: RelatedTerms,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedTerms {
    #[serde(rename = "ListWord")]
    pub words: Vec<String>,
    #[serde(rename = "Description")]
    pub description: String,
}

/// An autocomplete candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Suggestion {
    #[serde(rename = "Word")]
    pub word: String,
    #[serde(rename = "ShortDescription")]
    pub short_description: String,
}

/// Relation label of an `instances` group within a sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Synonyms,
    Antonyms,
    TypeOf,
}

impl Relation {
    pub const ALL: [Relation; 3] = [Relation::Synonyms, Relation::Antonyms, Relation::TypeOf];

    pub fn label(self) -> &'static str {
        match self {
            Relation::Synonyms => "Synonyms:",
            Relation::Antonyms => "Antonyms:",
            Relation::TypeOf => "Type of:",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|relation| relation.label() == label)
    }
}

impl Sense {
    pub fn related_mut(&mut self, relation: Relation) -> &mut RelatedTerms {
        match relation {
            Relation::Synonyms => &mut self.synonyms,
            Relation::Antonyms => &mut self.antonyms,
            Relation::TypeOf => &mut self.hypernyms,
        }
    }
}
