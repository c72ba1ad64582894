use crate::constants::question_banks::{
    GRAMMAR_BLANK_BANK, READING_CHOICE_BANK, TENSES_CHOICE_BANK, VOCABULARY_BLANK_BANK,
    VOCABULARY_CHOICE_BANK,
};
use crate::services::quiz_synthesis::bank::{BlankBank, ChoiceBank};

const TENSE_KEYWORDS: [&str; 3] = ["tense", "verb", "grammar"];
const VOCABULARY_KEYWORDS: [&str; 3] = ["vocabulary", "word", "idiom"];
const READING_KEYWORDS: [&str; 3] = ["reading", "comprehension", "passage"];
const GRAMMAR_KEYWORDS: [&str; 3] = ["grammar", "tense", "verb"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChoiceCategory {
    Tenses,
    Vocabulary,
    Reading,
}

impl ChoiceCategory {
    pub fn bank(self) -> &'static ChoiceBank {
        match self {
            ChoiceCategory::Tenses => &TENSES_CHOICE_BANK,
            ChoiceCategory::Vocabulary => &VOCABULARY_CHOICE_BANK,
            ChoiceCategory::Reading => &READING_CHOICE_BANK,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlankCategory {
    Grammar,
    Vocabulary,
}

impl BlankCategory {
    pub fn bank(self) -> &'static BlankBank {
        match self {
            BlankCategory::Grammar => &GRAMMAR_BLANK_BANK,
            BlankCategory::Vocabulary => &VOCABULARY_BLANK_BANK,
        }
    }
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}

/// First matching rule wins; topics matching nothing fall back to vocabulary.
pub fn classify_choice_topic(topic: &str) -> ChoiceCategory {
    let topic = topic.to_lowercase();
    if contains_any(&topic, &TENSE_KEYWORDS) {
        ChoiceCategory::Tenses
    } else if contains_any(&topic, &VOCABULARY_KEYWORDS) {
        ChoiceCategory::Vocabulary
    } else if contains_any(&topic, &READING_KEYWORDS) {
        ChoiceCategory::Reading
    } else {
        ChoiceCategory::Vocabulary
    }
}

pub fn classify_blank_topic(topic: &str) -> BlankCategory {
    if contains_any(&topic.to_lowercase(), &GRAMMAR_KEYWORDS) {
        BlankCategory::Grammar
    } else {
        BlankCategory::Vocabulary
    }
}
