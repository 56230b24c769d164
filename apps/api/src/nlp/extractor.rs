//! Regex-based entity extraction: skills, keywords, person names, organisations.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::profile::dedup_preserving_order;
use crate::nlp::vocab::{
    BUSINESS_KEYWORDS, BUSINESS_SKILLS, COMMON_WORDS, LANGUAGE_SKILLS, NON_PERSON_TERMS,
    TECH_KEYWORDS, TECH_ORGANIZATIONS, TECH_SKILLS,
};
use crate::patterns::{self, Pattern, PatternSet};

const MAX_PERSONS: usize = 10;
const MAX_ORGANIZATIONS: usize = 10;
const MAX_FREE_KEYWORDS: usize = 20;

static SKILL_PATTERNS: PatternSet = Lazy::new(|| {
    [TECH_SKILLS, LANGUAGE_SKILLS, BUSINESS_SKILLS]
        .iter()
        .map(|terms| alternation(terms))
        .collect()
});

static KEYWORD_PATTERNS: PatternSet = Lazy::new(|| {
    [TECH_KEYWORDS, BUSINESS_KEYWORDS]
        .iter()
        .map(|terms| alternation(terms))
        .collect()
});

static FREE_WORD: Pattern = Lazy::new(|| Regex::new(r"\b[a-zA-Z]{4,}\b"));

static PERSON_PATTERNS: PatternSet = Lazy::new(|| {
    patterns::compile_all(&[r"\b([A-Z][a-z]+ [A-Z][a-z]+)\b", r"\b([A-Z]\. [A-Z][a-z]+)\b"])
});

/// Case-insensitive, word-bounded alternation over literal terms.
fn alternation(terms: &[&str]) -> Result<Regex, regex::Error> {
    let body = terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{body})\b"))
}

/// Everything the extractor pulls out of a piece of text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedEntities {
    pub persons: Vec<String>,
    pub organizations: Vec<String>,
    pub skills: Vec<String>,
    pub keywords: Vec<String>,
}

/// Stateless heuristic extractor. All patterns are process-wide statics, so the
/// extractor itself is free to construct and share.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFeatureExtractor;

impl TextFeatureExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, text: &str) -> ExtractedEntities {
        if text.is_empty() {
            return ExtractedEntities::default();
        }

        ExtractedEntities {
            persons: self.extract_persons(text),
            organizations: self.extract_organizations(text),
            skills: self.extract_skills(text),
            keywords: self.extract_keywords(text),
        }
    }

    /// Skills keep the casing they were written with; duplicates are dropped in
    /// first-seen order.
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        let patterns = match patterns::get_all(&SKILL_PATTERNS) {
            Ok(p) => p,
            Err(e) => {
                warn!("Skill patterns unavailable: {e}");
                return Vec::new();
            }
        };
        let matches = patterns
            .iter()
            .flat_map(|re| re.find_iter(text).map(|m| m.as_str().to_string()))
            .collect();
        dedup_preserving_order(matches)
    }

    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        let mut keywords: Vec<String> = match patterns::get_all(&KEYWORD_PATTERNS) {
            Ok(patterns) => patterns
                .iter()
                .flat_map(|re| re.find_iter(text).map(|m| m.as_str().to_string()))
                .collect(),
            Err(e) => {
                warn!("Keyword patterns unavailable: {e}");
                Vec::new()
            }
        };

        match patterns::get(&FREE_WORD) {
            Ok(word_re) => {
                let lowered = text.to_lowercase();
                let common: HashSet<&str> = COMMON_WORDS.iter().copied().collect();
                keywords.extend(
                    word_re
                        .find_iter(&lowered)
                        .map(|m| m.as_str())
                        .filter(|w| w.len() > 4 && !common.contains(w))
                        .take(MAX_FREE_KEYWORDS)
                        .map(str::to_string),
                );
            }
            Err(e) => warn!("Free-word pattern unavailable: {e}"),
        }

        dedup_preserving_order(keywords)
    }

    pub fn extract_persons(&self, text: &str) -> Vec<String> {
        let patterns = match patterns::get_all(&PERSON_PATTERNS) {
            Ok(p) => p,
            Err(e) => {
                warn!("Person patterns unavailable: {e}");
                return Vec::new();
            }
        };
        let excluded: HashSet<&str> = NON_PERSON_TERMS.iter().copied().collect();
        patterns
            .iter()
            .flat_map(|re| re.captures_iter(text))
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .filter(|name| !excluded.contains(name))
            .take(MAX_PERSONS)
            .map(str::to_string)
            .collect()
    }

    pub fn extract_organizations(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        TECH_ORGANIZATIONS
            .iter()
            .filter(|org| lowered.contains(&org.to_lowercase()))
            .take(MAX_ORGANIZATIONS)
            .map(|org| org.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe\n\
        Senior Software Engineer at Google\n\
        Built microservices in Python and JavaScript, deployed with Docker on AWS.\n\
        Strong communication and leadership. Contact: J. Smith for references.";

    #[test]
    fn test_empty_text_yields_no_entities() {
        assert_eq!(
            TextFeatureExtractor::new().extract(""),
            ExtractedEntities::default()
        );
    }

    #[test]
    fn test_extracts_tech_skills_with_original_casing() {
        let skills = TextFeatureExtractor::new().extract_skills(RESUME);
        for expected in ["Python", "JavaScript", "Docker", "AWS"] {
            assert!(skills.contains(&expected.to_string()), "missing {expected}: {skills:?}");
        }
    }

    #[test]
    fn test_skill_matching_is_case_insensitive() {
        let skills = TextFeatureExtractor::new().extract_skills("kubernetes and KUBERNETES");
        assert_eq!(skills, vec!["kubernetes", "KUBERNETES"]);
    }

    #[test]
    fn test_java_does_not_match_inside_javascript() {
        let skills = TextFeatureExtractor::new().extract_skills("Expert in JavaScript");
        assert!(skills.contains(&"JavaScript".to_string()));
        assert!(!skills.contains(&"Java".to_string()));
    }

    #[test]
    fn test_soft_skills_come_from_business_vocabulary() {
        let skills = TextFeatureExtractor::new().extract_skills(RESUME);
        assert!(skills.contains(&"communication".to_string()));
        assert!(skills.contains(&"leadership".to_string()));
    }

    #[test]
    fn test_broad_business_vocabulary() {
        let skills = TextFeatureExtractor::new().extract_skills(
            "Web Software Development on Cloud platforms, Digital Online App, Filing, TDS, VAT, Zoom, Wave",
        );
        for expected in [
            "Web", "Software", "Development", "Cloud", "Digital", "Online", "App", "Filing",
            "TDS", "VAT", "Zoom", "Wave",
        ] {
            assert!(skills.contains(&expected.to_string()), "missing {expected}: {skills:?}");
        }
    }

    #[test]
    fn test_commerce_keywords() {
        let keywords = TextFeatureExtractor::new().extract_keywords("Tax refund filing and deduction");
        for expected in ["refund", "filing", "deduction"] {
            assert!(keywords.contains(&expected.to_string()), "missing {expected}: {keywords:?}");
        }
    }

    #[test]
    fn test_keywords_include_vocabulary_and_free_words() {
        let keywords = TextFeatureExtractor::new().extract_keywords(RESUME);
        assert!(keywords.contains(&"Software".to_string()));
        // free-word pass lowercases and requires more than four letters
        assert!(keywords.contains(&"deployed".to_string()));
        assert!(!keywords.contains(&"with".to_string()));
    }

    #[test]
    fn test_persons_filter_and_limit() {
        let persons = TextFeatureExtractor::new().extract_persons(RESUME);
        assert!(persons.contains(&"Jane Doe".to_string()));
        assert!(persons.contains(&"J. Smith".to_string()));
        assert!(persons.len() <= MAX_PERSONS);
    }

    #[test]
    fn test_organizations_are_case_insensitive() {
        let orgs = TextFeatureExtractor::new().extract_organizations("worked at GOOGLE and ibm");
        assert_eq!(orgs, vec!["Google", "IBM"]);
    }
}
