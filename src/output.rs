use std::fmt;

use serde::Serialize;

use crate::{
    document::Document,
    engine::IndexStats,
    query::{QueryMode, QueryOutcome, SearchHit},
};

#[derive(Debug, Serialize)]
pub struct SearchReport<'a> {
    pub query: &'a str,
    pub mode: Option<QueryMode>,
    pub total_count: usize,
    pub results: &'a [SearchHit],
}

impl<'a> SearchReport<'a> {
    /// Summarize `outcome`, keeping at most `limit` hits.
    pub fn new(
        query: &'a str,
        outcome: &'a QueryOutcome,
        limit: Option<usize>,
    ) -> Self {
        let hits = outcome.hits();
        let shown = limit.map_or(hits.len(), |n| n.min(hits.len()));
        Self {
            query,
            mode: outcome.mode(),
            total_count: hits.len(),
            results: &hits[..shown],
        }
    }
}

/// Plain-text rendering of a search for terminal output.
impl fmt::Display for SearchReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(mode) = self.mode else {
            return writeln!(f, "No query provided.");
        };
        if self.results.is_empty() {
            return writeln!(f, "No results found.");
        }

        for hit in self.results {
            match hit.score {
                Some(score) => writeln!(
                    f,
                    "{:>3}. [{score:.4}] {} #{}",
                    hit.rank, hit.title, hit.id
                )?,
                None => {
                    writeln!(f, "{:>3}. {} #{}", hit.rank, hit.title, hit.id)?
                }
            }
            if !hit.url.is_empty() {
                writeln!(f, "     {}", hit.url)?;
            }
        }
        writeln!(
            f,
            "\n{} of {} result(s), {mode} search",
            self.results.len(),
            self.total_count
        )
    }
}

pub fn render_document(doc: &Document) -> String {
    format!("#{} {}\n{}\n\n{}\n", doc.id, doc.title, doc.url, doc.text)
}

pub fn render_stats(stats: &IndexStats) -> String {
    format!(
        "Documents: {}\nTerms: {}\nPostings: {}\n",
        stats.documents, stats.terms, stats.postings
    )
}
