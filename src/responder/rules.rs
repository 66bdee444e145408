//! Keyword rules for intent recognition
//!
//! Each topic carries English, isiZulu and Setswana trigger words. The
//! vocabulary is deliberately language-agnostic: a Setswana trigger matches
//! in a Zulu session and vice versa, so a user can mix languages freely.

use super::pack::Topic;

/// A single topic rule: substring triggers checked against the lower-cased
/// utterance.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub topic: Topic,
    pub triggers: &'static [&'static str],
}

/// Rules in precedence order; the first rule with any matching trigger wins.
pub const RULES: &[KeywordRule] = &[
    KeywordRule {
        topic: Topic::Pests,
        triggers: &["pest", "insect", "bug", "zinambuzane", "disenyi"],
    },
    KeywordRule {
        topic: Topic::Planting,
        triggers: &["plant", "grow", "seed", "tshala", "jala"],
    },
    KeywordRule {
        topic: Topic::Soil,
        triggers: &["soil", "dirt", "earth", "umhlabathi", "mmu"],
    },
    KeywordRule {
        topic: Topic::Water,
        triggers: &["water", "irrigate", "rain", "amanzi", "metsi"],
    },
    KeywordRule {
        topic: Topic::Symptoms,
        triggers: &["symptom", "pain", "fever", "impawu", "matshwao"],
    },
    KeywordRule {
        topic: Topic::Medication,
        triggers: &["medic", "pill", "drug", "umuthi", "dithlare"],
    },
    KeywordRule {
        topic: Topic::Hygiene,
        triggers: &["hygiene", "clean", "wash", "hlanza", "hlatswa"],
    },
    KeywordRule {
        topic: Topic::Nutrition,
        triggers: &["nutrition", "food", "diet", "ukudla", "dijo"],
    },
];

impl KeywordRule {
    /// Check whether the (already lower-cased) utterance contains any trigger
    pub fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|t| lowered.contains(t))
    }
}
