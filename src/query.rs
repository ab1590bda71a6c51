use serde::Serialize;

use crate::{
    document::DocId,
    engine::SearchEngine,
    error::Result,
};

/// Which entry point a raw query string is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    Phrase,
    Wildcard,
    Keyword,
}

impl QueryMode {
    /// A `"` anywhere selects phrase search, otherwise a `*` selects
    /// wildcard search, otherwise the query is plain keywords.
    pub fn classify(raw: &str) -> Self {
        if raw.contains('"') {
            Self::Phrase
        } else if raw.contains('*') {
            Self::Wildcard
        } else {
            Self::Keyword
        }
    }
}

impl std::fmt::Display for QueryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Phrase => "phrase",
            Self::Wildcard => "wildcard",
            Self::Keyword => "keyword",
        })
    }
}

/// One result row with the document metadata needed for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub rank: usize,
    pub id: DocId,
    /// Only keyword search is scored.
    pub score: Option<f64>,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// The raw query was blank.
    EmptyQuery,
    Hits { mode: QueryMode, hits: Vec<SearchHit> },
}

impl QueryOutcome {
    pub fn hits(&self) -> &[SearchHit] {
        match self {
            Self::EmptyQuery => &[],
            Self::Hits { hits, .. } => hits,
        }
    }

    pub fn mode(&self) -> Option<QueryMode> {
        match self {
            Self::EmptyQuery => None,
            Self::Hits { mode, .. } => Some(*mode),
        }
    }
}

/// Classify `raw` and run it against `engine`.
pub fn execute(engine: &SearchEngine, raw: &str) -> Result<QueryOutcome> {
    if raw.trim().is_empty() {
        return Ok(QueryOutcome::EmptyQuery);
    }

    let mode = QueryMode::classify(raw);
    let scored: Vec<(DocId, Option<f64>)> = match mode {
        QueryMode::Phrase => unscored(engine.search_phrase(raw)),
        QueryMode::Wildcard => unscored(engine.find_wildcard_matches(raw)?),
        QueryMode::Keyword => engine
            .search_scored(raw)
            .into_iter()
            .map(|hit| (hit.id, Some(hit.score)))
            .collect(),
    };

    let hits = scored
        .into_iter()
        .filter_map(|(id, score)| engine.document(id).map(|doc| (doc, score)))
        .enumerate()
        .map(|(i, (doc, score))| SearchHit {
            rank: i + 1,
            id: doc.id,
            score,
            title: doc.title.clone(),
            url: doc.url.clone(),
        })
        .collect();

    Ok(QueryOutcome::Hits { mode, hits })
}

fn unscored(ids: Vec<DocId>) -> Vec<(DocId, Option<f64>)> {
    ids.into_iter().map(|id| (id, None)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentRecord;

    fn engine() -> SearchEngine {
        SearchEngine::new(vec![
            DocumentRecord::new("Foxes", "https://a", "the quick fox"),
            DocumentRecord::new("More foxes", "https://b", "quick brown fox"),
            DocumentRecord::new("Turtles", "https://c", "a slow turtle"),
        ])
        .unwrap()
    }

    #[test]
    fn classify_modes() {
        assert_eq!(QueryMode::classify("\"quick fox\""), QueryMode::Phrase);
        assert_eq!(QueryMode::classify("\"qu*\""), QueryMode::Phrase);
        assert_eq!(QueryMode::classify("qu*"), QueryMode::Wildcard);
        assert_eq!(QueryMode::classify("quick fox"), QueryMode::Keyword);
    }

    #[test]
    fn blank_query_is_reported() {
        let e = engine();
        assert_eq!(execute(&e, "").unwrap(), QueryOutcome::EmptyQuery);
        assert_eq!(execute(&e, "   ").unwrap(), QueryOutcome::EmptyQuery);
        assert!(execute(&e, "").unwrap().hits().is_empty());
    }

    #[test]
    fn keyword_hits_carry_scores_and_ranks() {
        let outcome = execute(&engine(), "quick fox").unwrap();
        assert_eq!(outcome.mode(), Some(QueryMode::Keyword));
        let hits = outcome.hits();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].rank, 1);
        assert_eq!(hits[0].id, 0);
        assert_eq!(hits[0].title, "Foxes");
        assert_eq!(hits[1].url, "https://b");
        assert!(hits.iter().all(|h| h.score.is_some()));
    }

    #[test]
    fn phrase_hits_are_unscored() {
        let outcome = execute(&engine(), "\"brown fox\"").unwrap();
        assert_eq!(outcome.mode(), Some(QueryMode::Phrase));
        assert_eq!(outcome.hits().len(), 1);
        assert_eq!(outcome.hits()[0].id, 1);
        assert!(outcome.hits()[0].score.is_none());
    }

    #[test]
    fn wildcard_hits_keep_duplicates() {
        let outcome = execute(&engine(), "*o*").unwrap();
        assert_eq!(outcome.mode(), Some(QueryMode::Wildcard));
        // "brown" [1], "fox" [0, 1], "slow" [2]
        let ids: Vec<_> = outcome.hits().iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![1, 0, 1, 2]);
        let ranks: Vec<_> = outcome.hits().iter().map(|h| h.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn no_results_is_an_empty_hit_list() {
        let outcome = execute(&engine(), "zebra").unwrap();
        assert_eq!(outcome.mode(), Some(QueryMode::Keyword));
        assert!(outcome.hits().is_empty());
    }
}
