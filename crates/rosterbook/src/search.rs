//! Search engine for rosterbook.
//!
//! Derives a filtered view of the roster from free-text keywords and an
//! optional graduation-year filter. Views are recomputed on demand by the
//! caller; nothing here is incrementally maintained.

use crate::student::StudentRecord;

/// A parsed search filter.
///
/// Tokens are the lowercased keywords split on whitespace, with the year
/// filter (when present) appended as one more token. An empty token set
/// means no filter at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    tokens: Vec<String>,
}

impl SearchQuery {
    /// Build a query from free-text keywords and a graduation-year filter.
    ///
    /// The year text behaves as one more OR-matched keyword, so it can also
    /// match as a name substring.
    #[must_use]
    pub fn new(keywords: &str, grad_year: &str) -> Self {
        let mut tokens: Vec<String> = keywords
            .to_lowercase()
            .split_whitespace()
            .map(ToString::to_string)
            .collect();

        let year = grad_year.trim();
        if !year.is_empty() {
            tokens.push(year.to_lowercase());
        }

        Self { tokens }
    }

    /// Check whether the query applies no filter at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The tokens this query matches against.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Check whether a record matches any token.
    ///
    /// A token matches when it is a case-insensitive substring of the first
    /// or last name, or parses as an integer equal to the graduation year.
    /// A token that fails integer parsing never matches on year.
    #[must_use]
    pub fn matches(&self, student: &StudentRecord) -> bool {
        let first_name = student.first_name.to_lowercase();
        let last_name = student.last_name.to_lowercase();

        self.tokens.iter().any(|token| {
            first_name.contains(token.as_str())
                || last_name.contains(token.as_str())
                || token
                    .parse::<i32>()
                    .is_ok_and(|year| year == student.grad_year)
        })
    }
}

/// Compute the view of the collection matching the query.
///
/// With an empty query the whole collection is returned. Filtering preserves
/// the input order and never re-sorts.
#[must_use]
pub fn search<'a>(students: &'a [StudentRecord], query: &SearchQuery) -> Vec<&'a StudentRecord> {
    if query.is_empty() {
        return students.iter().collect();
    }
    students.iter().filter(|s| query.matches(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::bootstrap_roster;

    #[test]
    fn test_empty_query_returns_full_collection() {
        let roster = bootstrap_roster();
        let query = SearchQuery::new("", "");

        let view = search(&roster, &query);

        assert_eq!(view.len(), roster.len());
        for (found, expected) in view.iter().zip(roster.iter()) {
            assert_eq!(found.id, expected.id);
        }
    }

    #[test]
    fn test_whitespace_keywords_contribute_no_tokens() {
        let query = SearchQuery::new("   \t  ", "");
        assert!(query.is_empty());
        assert!(query.tokens().is_empty());
    }

    #[test]
    fn test_keyword_matches_first_name_substring() {
        let roster = bootstrap_roster();
        let query = SearchQuery::new("tom", "");

        let view = search(&roster, &query);

        assert_eq!(view.len(), 1);
        assert_eq!(view[0].first_name, "Tommi");
    }

    #[test]
    fn test_keyword_matching_is_case_insensitive() {
        let roster = bootstrap_roster();
        let query = SearchQuery::new("LUDLOW", "");

        let view = search(&roster, &query);

        assert_eq!(view.len(), 1);
        assert_eq!(view[0].last_name, "Ludlow");
    }

    #[test]
    fn test_year_filter_matches_exact_year() {
        let roster = bootstrap_roster();
        let query = SearchQuery::new("", "2003");

        let view = search(&roster, &query);

        assert_eq!(view.len(), 3);
        assert!(view.iter().all(|s| s.grad_year == 2003));
    }

    #[test]
    fn test_tokens_union_across_keywords_and_year() {
        let roster = bootstrap_roster();
        let query = SearchQuery::new("greaves 2002", "");

        let view = search(&roster, &query);

        // Greaves by substring, plus the two 2002 graduates.
        assert_eq!(view.len(), 3);
        assert!(view.iter().any(|s| s.last_name == "Greaves"));
        assert_eq!(view.iter().filter(|s| s.grad_year == 2002).count(), 2);
    }

    #[test]
    fn test_no_match_yields_empty_view() {
        let roster = bootstrap_roster();
        let query = SearchQuery::new("zzz-nomatch", "");

        assert!(search(&roster, &query).is_empty());
    }

    #[test]
    fn test_filtering_preserves_collection_order() {
        let roster = bootstrap_roster();
        let query = SearchQuery::new("", "2001");

        let view = search(&roster, &query);

        let expected: Vec<&str> = roster
            .iter()
            .filter(|s| s.grad_year == 2001)
            .map(|s| s.id.as_str())
            .collect();
        let found: Vec<&str> = view.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_non_integer_token_never_matches_year() {
        let roster = bootstrap_roster();
        let query = SearchQuery::new("20o3", "");

        assert!(search(&roster, &query).is_empty());
    }

    #[test]
    fn test_year_token_also_matches_name_substring() {
        let mut roster = bootstrap_roster();
        roster.push(StudentRecord::new(
            "Agent",
            "X2003",
            "x2003@example.com",
            1999,
            "images/default.jpg",
        ));
        let query = SearchQuery::new("", "2003");

        let view = search(&roster, &query);

        // The three 2003 graduates plus the name-substring match.
        assert_eq!(view.len(), 4);
        assert!(view.iter().any(|s| s.last_name == "X2003"));
    }

    #[test]
    fn test_year_text_is_trimmed() {
        let roster = bootstrap_roster();
        let query = SearchQuery::new("", "  2004  ");

        let view = search(&roster, &query);
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_query_token_set() {
        let query = SearchQuery::new("Greaves Foden", "2001");
        assert_eq!(query.tokens(), &["greaves", "foden", "2001"]);
    }
}
