//! Keyword and audience filters over posts, plus the CSV intake used by
//! the presentation-form collaborator.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::model::User;

/// Normalize free-form content into lowercase alphanumeric tokens:
/// lowercase, non-alphanumeric characters become separators, split on
/// whitespace.
pub fn normalize_tokens(content: &str) -> Vec<String> {
    content
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Split a comma-separated field into trimmed, lowercased, non-empty tokens.
fn csv_tokens(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

// ============================================================================
// Keyword filter
// ============================================================================

/// Include/exclude token clauses over post content. Both clauses are
/// optional; an empty clause imposes no constraint. A post is rejected if
/// ANY excluded token appears, and (independently) rejected unless AT LEAST
/// ONE included token appears.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordFilter {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl KeywordFilter {
    /// Parse from the form collaborator's comma-separated fields. Tokens
    /// are lowercased and trimmed; empty entries are dropped.
    pub fn from_csv(include: &str, exclude: &str) -> Self {
        Self {
            include: csv_tokens(include),
            exclude: csv_tokens(exclude),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    /// Whether `content` passes both clauses. Matching is against whole
    /// normalized tokens, never substrings.
    pub fn passes(&self, content: &str) -> bool {
        if self.is_empty() {
            return true;
        }
        let tokens: HashSet<String> = normalize_tokens(content).into_iter().collect();
        if self.exclude.iter().any(|kw| tokens.contains(kw)) {
            return false;
        }
        if !self.include.is_empty() && !self.include.iter().any(|kw| tokens.contains(kw)) {
            return false;
        }
        true
    }
}

// ============================================================================
// Audience filter
// ============================================================================

/// Exact-match membership tests against the post author's attributes.
/// An empty set imposes no constraint; non-empty sets are ANDed.
/// Genders and regions compare case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudienceFilter {
    pub ages: HashSet<u32>,
    pub genders: HashSet<String>,
    pub regions: HashSet<String>,
}

impl AudienceFilter {
    /// Parse from the form collaborator's comma-separated fields.
    /// Non-numeric age tokens are silently dropped, never an error.
    pub fn from_csv(ages: &str, genders: &str, regions: &str) -> Self {
        Self {
            ages: csv_tokens(ages)
                .into_iter()
                .filter_map(|t| t.parse().ok())
                .collect(),
            genders: csv_tokens(genders).into_iter().collect(),
            regions: csv_tokens(regions).into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ages.is_empty() && self.genders.is_empty() && self.regions.is_empty()
    }

    /// Whether an author satisfies every non-empty attribute set. The
    /// user's location stands in for the region attribute.
    pub fn passes(&self, user: &User) -> bool {
        if !self.ages.is_empty() && !self.ages.contains(&user.age) {
            return false;
        }
        if !self.genders.is_empty() && !self.genders.contains(&user.gender.to_lowercase()) {
            return false;
        }
        if !self.regions.is_empty() && !self.regions.contains(&user.location.to_lowercase()) {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_lowercased_alphanumeric() {
        assert_eq!(
            normalize_tokens("I love Tech-nology!! (2024)"),
            vec!["i", "love", "tech", "nology", "2024"]
        );
    }

    #[test]
    fn exclude_wins_over_include() {
        let f = KeywordFilter::from_csv("tech", "politics");
        assert!(f.passes("tech is great"));
        assert!(!f.passes("tech politics mix"));
        assert!(!f.passes("nothing relevant"));
    }

    #[test]
    fn include_matches_whole_tokens_only() {
        let f = KeywordFilter::from_csv("tech", "");
        assert!(!f.passes("technology is great"));
        assert!(f.passes("great tech"));
    }

    #[test]
    fn empty_clauses_impose_nothing() {
        let f = KeywordFilter::from_csv(" , ,", "");
        assert!(f.is_empty());
        assert!(f.passes("anything at all"));
    }

    #[test]
    fn non_numeric_ages_silently_dropped() {
        let f = AudienceFilter::from_csv("25, abc, 30, ", "Female", "us, UK");
        assert_eq!(f.ages.len(), 2);
        assert!(f.ages.contains(&25) && f.ages.contains(&30));
        assert!(f.genders.contains("female"));
        assert!(f.regions.contains("uk"));
    }

    #[test]
    fn audience_matching_is_case_insensitive() {
        let f = AudienceFilter::from_csv("", "female", "london");
        let user = User::new("ada", "Ada Lovelace", 28, "Female", "London");
        assert!(f.passes(&user));
        let other = User::new("alan", "Alan Turing", 31, "Male", "London");
        assert!(!f.passes(&other));
    }
}
