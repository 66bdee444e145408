//! Static response data for the supported languages and domains
//!
//! The tables here are the entire knowledge base of the assistant: one
//! greeting per language and one canned reply per (language, domain, topic).
//! Lookups are exhaustive matches over closed enums, so a missing entry is a
//! compile error rather than a runtime surprise.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A supported interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Language {
    /// isiZulu
    Zulu,
    /// Setswana
    Tswana,
}

impl Language {
    /// ISO 639-1 code handed to the text-to-speech collaborator.
    ///
    /// Setswana is `"tn"`. Earlier revisions of the assistant used `"ts"`,
    /// which is Xitsonga; see `test_tts_codes` before changing this.
    pub fn tts_code(&self) -> &'static str {
        match self {
            Language::Zulu => "zu",
            Language::Tswana => "tn",
        }
    }

    pub fn all() -> [Language; 2] {
        [Language::Zulu, Language::Tswana]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Zulu => write!(f, "Zulu"),
            Language::Tswana => write!(f, "Tswana"),
        }
    }
}

/// An application domain the assistant can answer about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Domain {
    Healthcare,
    Agriculture,
}

impl Domain {
    /// Topic used by the "quick ask" action for this domain
    pub fn default_topic(&self) -> Topic {
        match self {
            Domain::Agriculture => Topic::Pests,
            Domain::Healthcare => Topic::Hygiene,
        }
    }

    pub fn topics(&self) -> [Topic; 4] {
        match self {
            Domain::Agriculture => [Topic::Pests, Topic::Planting, Topic::Soil, Topic::Water],
            Domain::Healthcare => [
                Topic::Symptoms,
                Topic::Medication,
                Topic::Hygiene,
                Topic::Nutrition,
            ],
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Healthcare => write!(f, "Healthcare"),
            Domain::Agriculture => write!(f, "Agriculture"),
        }
    }
}

/// A canned-response category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    Pests,
    Planting,
    Soil,
    Water,
    Symptoms,
    Medication,
    Hygiene,
    Nutrition,
}

impl Topic {
    /// The domain this topic belongs to.
    ///
    /// Trigger words for any topic can fire in either domain, but replies
    /// only exist for the topics of the active domain.
    pub fn domain(&self) -> Domain {
        match self {
            Topic::Pests | Topic::Planting | Topic::Soil | Topic::Water => Domain::Agriculture,
            Topic::Symptoms | Topic::Medication | Topic::Hygiene | Topic::Nutrition => {
                Domain::Healthcare
            }
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Topic::Pests => "pests",
            Topic::Planting => "planting",
            Topic::Soil => "soil",
            Topic::Water => "water",
            Topic::Symptoms => "symptoms",
            Topic::Medication => "medication",
            Topic::Hygiene => "hygiene",
            Topic::Nutrition => "nutrition",
        };
        write!(f, "{}", name)
    }
}

/// The static reply table: greetings plus per-topic canned responses
pub struct ResponsePack;

impl ResponsePack {
    /// Greeting for the given language, also the fallback reply when no
    /// topic matches.
    pub fn greeting(language: Language) -> &'static str {
        match language {
            Language::Zulu => "Sawubona! Ngingakusiza ngani namuhla?",
            Language::Tswana => "Dumela! O ka thusa jang kajeno?",
        }
    }

    /// Reply for a topic within a domain, or `None` when the topic belongs
    /// to the other domain.
    pub fn reply(language: Language, domain: Domain, topic: Topic) -> Option<&'static str> {
        if topic.domain() != domain {
            return None;
        }
        Some(Self::topic_reply(language, topic))
    }

    fn topic_reply(language: Language, topic: Topic) -> &'static str {
        match (language, topic) {
            (Language::Zulu, Topic::Pests) => {
                "Ukulwa nezinambuzane, sebenzisa i-organic pesticide. Hlola izitshalo nsuku zonke."
            }
            (Language::Zulu, Topic::Planting) => {
                "Isikhathi esihle sokutshala u-September kuya ku-October emaphandleni aseNingizimu Afrika."
            }
            (Language::Zulu, Topic::Soil) => {
                "Hlola umhlabathi wakho ngonyaka. Geza ngomquba wemvelo ukuze uthuthukise isimo somhlabathi."
            }
            (Language::Zulu, Topic::Water) => {
                "Qinisekisa ukuthi izitshalo zakho zithola amanzi anele, ikakhulukazi ehlobo."
            }
            (Language::Zulu, Topic::Symptoms) => {
                "Uma unezimpawu ezingajwayelekile, xhumana nogoti wezempilo ngokushesha."
            }
            (Language::Zulu, Topic::Medication) => {
                "Ungaphuze umuthi ngaphandle kokweluleka kudokotela."
            }
            (Language::Zulu, Topic::Hygiene) => {
                "Geza izandla zakho qhaba ngesikhathi eside ukuze uvimbele ukusakazeka kwegciwane."
            }
            (Language::Zulu, Topic::Nutrition) => {
                "Idla ukudla okunomsoco okuhlanganisa imifino, izithelo kanye namaprotheni."
            }
            (Language::Tswana, Topic::Pests) => {
                "Go lwa le disenyi, dirisa di-pesticide tsa tlhago. Sekaseka dimela letsatsi le letsatsi."
            }
            (Language::Tswana, Topic::Planting) => {
                "Nako e e siameng go jala ke September go ya go October mo mafelong a Aforika Borwa."
            }
            (Language::Tswana, Topic::Soil) => {
                "Sekaseka mmu wa gago ngwaga le ngwaga. O ka dirisa motswako wa tlhago go tokafatsa mmu."
            }
            (Language::Tswana, Topic::Water) => {
                "Netefatsa gore dimela tsa gago di na le metsi a lekaneng, bogolo segologolo mo marung."
            }
            (Language::Tswana, Topic::Symptoms) => {
                "Fa o na le matshwao a a sa tlwaelegang, ikopanye le moapei wa tsa boitekanelo ka bonako."
            }
            (Language::Tswana, Topic::Medication) => {
                "O se ka wa nwa ditlhare ntle le go laola ngaka."
            }
            (Language::Tswana, Topic::Hygiene) => {
                "Hlatswa diatla tsa gago ka nako e telele go thibela phetiso ya diruiwa."
            }
            (Language::Tswana, Topic::Nutrition) => {
                "Ja dijo tse di nonneng tse di akaretsang merogo, maungo le diprotein."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tts_codes() {
        assert_eq!(Language::Zulu.tts_code(), "zu");
        // "tn" is Setswana; "ts" would be Xitsonga
        assert_eq!(Language::Tswana.tts_code(), "tn");
    }

    #[test]
    fn test_every_domain_topic_has_a_reply() {
        for language in Language::all() {
            for domain in [Domain::Healthcare, Domain::Agriculture] {
                for topic in domain.topics() {
                    let reply = ResponsePack::reply(language, domain, topic);
                    assert!(reply.is_some(), "{language} {domain} {topic}");
                    assert!(!reply.unwrap().is_empty());
                }
            }
        }
    }

    #[test]
    fn test_cross_domain_reply_is_none() {
        assert_eq!(
            ResponsePack::reply(Language::Zulu, Domain::Healthcare, Topic::Pests),
            None
        );
        assert_eq!(
            ResponsePack::reply(Language::Tswana, Domain::Agriculture, Topic::Hygiene),
            None
        );
    }

    #[test]
    fn test_default_topics() {
        assert_eq!(Domain::Agriculture.default_topic(), Topic::Pests);
        assert_eq!(Domain::Healthcare.default_topic(), Topic::Hygiene);
    }

    #[test]
    fn test_topic_domains_partition() {
        let agriculture = Domain::Agriculture.topics();
        let healthcare = Domain::Healthcare.topics();
        for topic in agriculture {
            assert_eq!(topic.domain(), Domain::Agriculture);
        }
        for topic in healthcare {
            assert_eq!(topic.domain(), Domain::Healthcare);
        }
    }
}
