use std::{path::Path, time::Instant};

use serde::Serialize;

use crate::{
    analyzer::Analyzer,
    document::{DocId, Document, DocumentRecord},
    error::Result,
    index::{InvertedIndex, intersect},
    loader,
};

/// Extra weight per title occurrence, relative to the body TF-IDF.
pub const TITLE_BOOST: f64 = 0.5;

/// Document store plus the inverted index built over it.
///
/// Built once; every query method takes `&self`, so a finished engine can
/// be shared between threads behind an `Arc`.
#[derive(Debug)]
pub struct SearchEngine {
    documents: Vec<Document>,
    index: InvertedIndex,
    analyzer: Analyzer,
}

/// A ranked keyword hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredDocument {
    pub id: DocId,
    pub score: f64,
}

/// Size summary of a built engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub documents: usize,
    pub terms: usize,
    pub postings: usize,
}

impl SearchEngine {
    /// Assign IDs in sequence order and index every record.
    pub fn new(
        records: impl IntoIterator<Item = DocumentRecord>,
    ) -> Result<Self> {
        let start = Instant::now();
        let documents: Vec<Document> = records
            .into_iter()
            .enumerate()
            .map(|(id, record)| Document::from_record(id, record))
            .collect();
        let analyzer = Analyzer::new()?;
        let index = InvertedIndex::build(&documents, &analyzer);

        tracing::info!(
            documents = documents.len(),
            terms = index.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "index built"
        );

        Ok(Self {
            documents,
            index,
            analyzer,
        })
    }

    /// Load a dump from disk and index it.
    pub fn open(path: &Path) -> Result<Self> {
        let records = loader::load_dump(path)?;
        Self::new(records)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document(&self, id: DocId) -> Option<&Document> {
        self.documents.get(id)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            documents: self.documents.len(),
            terms: self.index.len(),
            postings: self.index.total_postings(),
        }
    }

    /// Ranked keyword search, IDs only.
    pub fn search(&self, query: &str) -> Vec<DocId> {
        self.search_scored(query)
            .into_iter()
            .map(|hit| hit.id)
            .collect()
    }

    /// Ranked keyword search.
    ///
    /// Every query token must occur in a document for it to match. Hits
    /// are ordered by descending TF-IDF score, then ascending ID.
    pub fn search_scored(&self, query: &str) -> Vec<ScoredDocument> {
        let tokens = self.analyzer.analyze(query);
        let Some(candidates) = self.matching_all(&tokens) else {
            return Vec::new();
        };

        let mut hits: Vec<ScoredDocument> = candidates
            .into_iter()
            .map(|id| ScoredDocument {
                id,
                score: self.score(id, &tokens),
            })
            .collect();
        hits.sort_by(|a, b| {
            b.score.total_cmp(&a.score).then_with(|| a.id.cmp(&b.id))
        });

        tracing::debug!(query, hits = hits.len(), "keyword search");
        hits
    }

    /// Documents containing every token, or `None` when any is unknown.
    fn matching_all(&self, tokens: &[String]) -> Option<Vec<DocId>> {
        let (first, rest) = tokens.split_first()?;
        let mut result = self.index.postings(first)?.to_vec();
        for token in rest {
            result = intersect(&result, self.index.postings(token)?);
        }
        Some(result)
    }

    fn score(&self, id: DocId, tokens: &[String]) -> f64 {
        let doc = &self.documents[id];
        let body = self.analyzer.analyze(&doc.text);
        let title = self.analyzer.analyze(&doc.title);
        let total = self.documents.len() as f64;

        tokens
            .iter()
            .map(|token| {
                let df = self.index.postings(token).map_or(0, <[_]>::len);
                let idf = (total / df as f64).ln();
                let tf = occurrences(&body, token) as f64 / body.len() as f64;
                let tf_idf = tf * idf;
                let in_title = occurrences(&title, token) as f64;
                tf_idf + in_title * tf_idf * TITLE_BOOST
            })
            .sum()
    }
}

fn occurrences(tokens: &[String], token: &str) -> usize {
    tokens.iter().filter(|t| *t == token).count()
}
