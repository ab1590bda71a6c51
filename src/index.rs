use std::collections::BTreeMap;

use crate::{
    analyzer::Analyzer,
    document::{DocId, Document},
};

/// Token → posting list map built once from the document store.
///
/// Keys are kept sorted so vocabulary scans are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    postings: BTreeMap<String, Vec<DocId>>,
}

impl InvertedIndex {
    /// Index the `text` of every document.
    ///
    /// `documents` must be in ascending ID order: the append guard in
    /// [`InvertedIndex::record`] only deduplicates consecutive IDs.
    pub(crate) fn build(documents: &[Document], analyzer: &Analyzer) -> Self {
        let mut index = Self::default();
        let mut previous: Option<DocId> = None;
        for doc in documents {
            debug_assert!(
                previous.is_none_or(|p| p < doc.id),
                "documents must be indexed in ascending id order"
            );
            previous = Some(doc.id);
            for token in analyzer.analyze(&doc.text) {
                index.record(token, doc.id);
            }
        }
        index
    }

    fn record(&mut self, token: String, doc: DocId) {
        let ids = self.postings.entry(token).or_default();
        if ids.last() != Some(&doc) {
            ids.push(doc);
        }
    }

    /// Posting list for `token`, if it occurs anywhere in the corpus.
    pub fn postings(&self, token: &str) -> Option<&[DocId]> {
        self.postings.get(token).map(Vec::as_slice)
    }

    /// Vocabulary with posting lists, in ascending token order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, &[DocId])> {
        self.postings
            .iter()
            .map(|(token, ids)| (token.as_str(), ids.as_slice()))
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn total_postings(&self) -> usize {
        self.postings.values().map(Vec::len).sum()
    }
}

/// Intersect two ascending posting lists.
pub fn intersect(a: &[DocId], b: &[DocId]) -> Vec<DocId> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}
