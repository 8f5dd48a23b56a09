//! Profile extraction — turns raw résumé text into a structured candidate
//! profile (skills, experience years, location, expected salary).
//!
//! Matching is intentionally naive: a skill counts as present when it
//! appears as a case-insensitive substring anywhere in the text, with no
//! tokenization or word-boundary checks (so "c++" matches literally).
//! The `TermMatcher` seam exists so tokenized or fuzzy matching can be
//! swapped in later without touching the scorer.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Skills the extractor recognizes. Matching is substring-based, so
/// multi-word entries ("machine learning") and symbols ("c++") work as-is.
const KNOWN_SKILLS: &[&str] = &[
    "javascript", "typescript", "python", "java", "react", "node.js", "angular",
    "vue", "css", "html", "sql", "mongodb", "postgresql", "mysql", "redis",
    "docker", "kubernetes", "aws", "azure", "gcp", "django", "fastapi", "flask",
    "spring boot", "tensorflow", "pytorch", "scikit-learn", "pandas", "numpy",
    "machine learning", "deep learning", "nlp", "ci/cd", "git", "linux",
    "golang", "rust", "c++", "c#", "kotlin", "swift", "react native", "flutter",
    "selenium", "cypress", "jest", "graphql", "rest api", "microservices",
    "solidity", "blockchain", "spark", "hadoop", "terraform", "ansible",
];

/// Locations the extractor recognizes, matching the cities the catalog
/// postings are spread across.
const KNOWN_LOCATIONS: &[&str] = &[
    "bangalore", "hyderabad", "pune", "mumbai", "chennai", "delhi", "remote",
];

/// Ordered experience patterns; the first one that matches wins.
const EXPERIENCE_PATTERNS: &[&str] = &[
    r"(\d+)\+?\s*years?\s*of\s*(?:work\s*)?experience",
    r"(\d+)\+?\s*years?\s*experience",
    r"experience\s*(?:of\s*)?(\d+)\+?\s*years?",
];

const MAX_EXPERIENCE_YEARS: u32 = 20;
const DEFAULT_EXPERIENCE_YEARS: u32 = 2;
const SENIOR_EXPERIENCE_YEARS: u32 = 5;
const JUNIOR_EXPERIENCE_YEARS: u32 = 1;

/// Base and per-year slope of the salary expectation heuristic (LPA).
const SALARY_BASE_LPA: u32 = 4;
const SALARY_PER_YEAR_LPA: u32 = 3;

/// Structured features extracted from a résumé. Built per request and
/// discarded after the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub location: Option<String>,
    pub expected_salary_lpa: u32,
}

/// How a vocabulary term is looked up in résumé text. The default is plain
/// substring containment over the lowercased text.
pub trait TermMatcher: Send + Sync {
    fn matches(&self, text_lower: &str, term: &str) -> bool;
}

pub struct SubstringMatcher;

impl TermMatcher for SubstringMatcher {
    fn matches(&self, text_lower: &str, term: &str) -> bool {
        text_lower.contains(term)
    }
}

/// Extracts candidate profiles against a fixed vocabulary. Construct once
/// and share; extraction itself is pure and deterministic.
pub struct ProfileExtractor {
    skills: Vec<String>,
    locations: Vec<String>,
    patterns: Vec<Regex>,
    matcher: Box<dyn TermMatcher>,
}

impl ProfileExtractor {
    pub fn new(
        skills: Vec<String>,
        locations: Vec<String>,
        matcher: Box<dyn TermMatcher>,
    ) -> Self {
        let patterns = EXPERIENCE_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("valid experience pattern"))
            .collect();
        Self {
            skills,
            locations,
            patterns,
            matcher,
        }
    }

    /// Never fails: empty or unrecognizable text yields an empty skill set,
    /// the default experience, and no location.
    pub fn extract(&self, text: &str) -> CandidateProfile {
        let text_lower = text.to_lowercase();

        let skills: Vec<String> = self
            .skills
            .iter()
            .filter(|skill| self.matcher.matches(&text_lower, skill))
            .cloned()
            .collect();

        let experience_years = self.extract_experience(&text_lower);

        let location = self
            .locations
            .iter()
            .find(|loc| self.matcher.matches(&text_lower, loc))
            .cloned();

        CandidateProfile {
            skills,
            experience_years,
            location,
            expected_salary_lpa: salary_expectation_lpa(experience_years),
        }
    }

    /// First pattern that matches wins; the captured figure is capped at
    /// 20 years. Falls back to seniority keywords, then the default.
    fn extract_experience(&self, text_lower: &str) -> u32 {
        for pattern in &self.patterns {
            if let Some(caps) = pattern.captures(text_lower) {
                if let Ok(years) = caps[1].parse::<u32>() {
                    return years.min(MAX_EXPERIENCE_YEARS);
                }
            }
        }
        if text_lower.contains("senior") {
            return SENIOR_EXPERIENCE_YEARS;
        }
        if text_lower.contains("junior") {
            return JUNIOR_EXPERIENCE_YEARS;
        }
        DEFAULT_EXPERIENCE_YEARS
    }
}

impl Default for ProfileExtractor {
    fn default() -> Self {
        Self::new(
            KNOWN_SKILLS.iter().map(|s| s.to_string()).collect(),
            KNOWN_LOCATIONS.iter().map(|s| s.to_string()).collect(),
            Box::new(SubstringMatcher),
        )
    }
}

/// Rough expected annual compensation (LPA) for a given experience level.
pub fn salary_expectation_lpa(experience_years: u32) -> u32 {
    SALARY_BASE_LPA + experience_years * SALARY_PER_YEAR_LPA
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> ProfileExtractor {
        ProfileExtractor::default()
    }

    #[test]
    fn test_skills_matched_by_substring_case_insensitive() {
        let profile = extractor().extract("Worked with Python, Docker and React.");
        assert_eq!(profile.skills, vec!["python", "react", "docker"]);
    }

    #[test]
    fn test_cpp_matches_via_literal_substring() {
        let profile = extractor().extract("Ten years writing C++ servers");
        assert!(profile.skills.contains(&"c++".to_string()));
    }

    #[test]
    fn test_empty_text_yields_empty_profile() {
        let profile = extractor().extract("");
        assert!(profile.skills.is_empty());
        assert_eq!(profile.experience_years, DEFAULT_EXPERIENCE_YEARS);
        assert_eq!(profile.location, None);
    }

    #[test]
    fn test_experience_years_of_experience_pattern() {
        let profile = extractor().extract("I have 5 years of experience in backend work");
        assert_eq!(profile.experience_years, 5);
    }

    #[test]
    fn test_experience_years_experience_pattern() {
        let profile = extractor().extract("7+ years experience shipping services");
        assert_eq!(profile.experience_years, 7);
    }

    #[test]
    fn test_experience_of_n_years_pattern() {
        let profile = extractor().extract("Total experience of 4 years across two teams");
        assert_eq!(profile.experience_years, 4);
    }

    #[test]
    fn test_first_matching_pattern_wins() {
        // Both the "N years of experience" and "experience of N years" forms
        // appear; pattern order decides, not the larger figure.
        let profile =
            extractor().extract("3 years of experience. Previously: experience of 9 years.");
        assert_eq!(profile.experience_years, 3);
    }

    #[test]
    fn test_experience_capped_at_twenty() {
        let profile = extractor().extract("35 years of experience in COBOL");
        assert_eq!(profile.experience_years, 20);
    }

    #[test]
    fn test_senior_keyword_fallback() {
        let profile = extractor().extract("Senior engineer on the platform team");
        assert_eq!(profile.experience_years, 5);
    }

    #[test]
    fn test_junior_keyword_fallback() {
        let profile = extractor().extract("Junior developer, mostly frontend");
        assert_eq!(profile.experience_years, 1);
    }

    #[test]
    fn test_regex_match_beats_seniority_keyword() {
        let profile = extractor().extract("Senior engineer with 8 years of experience");
        assert_eq!(profile.experience_years, 8);
    }

    #[test]
    fn test_first_location_in_list_order_wins() {
        let profile = extractor().extract("Based in Mumbai, open to Pune");
        assert_eq!(profile.location, Some("pune".to_string()));
    }

    #[test]
    fn test_no_location_yields_none() {
        let profile = extractor().extract("Happy anywhere");
        assert_eq!(profile.location, None);
    }

    #[test]
    fn test_expected_salary_is_linear_in_experience() {
        let profile = extractor().extract("5 years of experience");
        assert_eq!(profile.expected_salary_lpa, 4 + 5 * 3);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let text = "Senior Python developer, 6 years of experience, Bangalore";
        let a = extractor().extract(text);
        let b = extractor().extract(text);
        assert_eq!(a, b);
    }
}
