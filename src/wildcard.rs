use globset::{GlobBuilder, GlobMatcher};

use crate::{document::DocId, engine::SearchEngine, error::Result};

impl SearchEngine {
    /// Concatenated posting lists of every vocabulary token matching the
    /// glob `pattern`, where `*` matches any run of characters.
    ///
    /// Tokens are visited in ascending order. A document listed under
    /// several matching tokens appears once per token.
    pub fn find_wildcard_matches(&self, pattern: &str) -> Result<Vec<DocId>> {
        let Some(matcher) = compile(pattern)? else {
            return Ok(Vec::new());
        };

        let mut hits = Vec::new();
        let mut tokens = 0usize;
        for (token, ids) in self.index().terms() {
            if matcher.is_match(token) {
                tokens += 1;
                hits.extend_from_slice(ids);
            }
        }

        tracing::debug!(pattern, tokens, hits = hits.len(), "wildcard search");
        Ok(hits)
    }
}

/// Build an anchored matcher in which only `*` is special.
///
/// Returns `None` for a blank pattern.
fn compile(pattern: &str) -> Result<Option<GlobMatcher>> {
    let pattern = pattern.trim().to_lowercase();
    if pattern.is_empty() {
        return Ok(None);
    }

    let mut glob = String::with_capacity(pattern.len());
    for (i, literal) in pattern.split('*').enumerate() {
        // Collapse runs of `*` into one.
        if i > 0 && !glob.ends_with('*') {
            glob.push('*');
        }
        glob.push_str(&globset::escape(literal));
    }

    let matcher = GlobBuilder::new(&glob)
        .literal_separator(false)
        .backslash_escape(false)
        .build()?
        .compile_matcher();
    Ok(Some(matcher))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentRecord;

    fn engine(texts: &[&str]) -> SearchEngine {
        SearchEngine::new(
            texts.iter().map(|text| DocumentRecord::new("", "", *text)),
        )
        .unwrap()
    }

    #[test]
    fn prefix_pattern() {
        let e = engine(&["cat", "cats", "catalog", "dog"]);
        // "cat" and "cats" share the stem "cat"; "catalog" sorts after it.
        assert_eq!(e.find_wildcard_matches("cat*").unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn no_cross_token_dedup() {
        let e = engine(&["cat catalog", "dog"]);
        assert_eq!(e.find_wildcard_matches("cat*").unwrap(), vec![0, 0]);
    }

    #[test]
    fn anchored_on_both_ends() {
        let e = engine(&["cat", "bobcat", "dog"]);
        assert_eq!(e.find_wildcard_matches("cat*").unwrap(), vec![0]);
        assert_eq!(e.find_wildcard_matches("*cat").unwrap(), vec![1, 0]);
        assert_eq!(e.find_wildcard_matches("*o*").unwrap(), vec![1, 2]);
    }

    #[test]
    fn other_metacharacters_are_literal() {
        let e = engine(&["cat", "cbt", "dog"]);
        assert!(e.find_wildcard_matches("c?t*").unwrap().is_empty());
        assert!(e.find_wildcard_matches("c[a]t*").unwrap().is_empty());
        assert!(e.find_wildcard_matches("{cat,dog}*").unwrap().is_empty());
        assert!(e.find_wildcard_matches("c.t*").unwrap().is_empty());
    }

    #[test]
    fn pattern_is_lowercased() {
        let e = engine(&["Cat"]);
        assert_eq!(e.find_wildcard_matches("CA*").unwrap(), vec![0]);
    }

    #[test]
    fn repeated_stars_collapse() {
        let e = engine(&["catalog"]);
        assert_eq!(e.find_wildcard_matches("ca**og").unwrap(), vec![0]);
        assert_eq!(e.find_wildcard_matches("**").unwrap(), vec![0]);
    }

    #[test]
    fn empty_pattern_matches_nothing() {
        let e = engine(&["cat"]);
        assert!(e.find_wildcard_matches("").unwrap().is_empty());
        assert!(e.find_wildcard_matches("   ").unwrap().is_empty());
    }

    #[test]
    fn unmatched_pattern_is_not_an_error() {
        let e = engine(&["cat"]);
        assert!(e.find_wildcard_matches("zz*").unwrap().is_empty());
    }
}
