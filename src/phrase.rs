use crate::{document::DocId, engine::SearchEngine};

impl SearchEngine {
    /// Documents whose analyzed text contains the analyzed query as a
    /// contiguous run of tokens, in ascending ID order.
    ///
    /// Quote characters in `query` are ignored.
    pub fn search_phrase(&self, query: &str) -> Vec<DocId> {
        let query = query.replace('"', "");
        let phrase = self.analyzer().analyze(&query);
        let Some(first) = phrase.first() else {
            return Vec::new();
        };
        let Some(candidates) = self.index().postings(first) else {
            return Vec::new();
        };

        let hits: Vec<DocId> = candidates
            .iter()
            .copied()
            .filter(|&id| {
                let doc = &self.documents()[id];
                contains_phrase(&self.analyzer().analyze(&doc.text), &phrase)
            })
            .collect();

        tracing::debug!(
            query = query.as_str(),
            candidates = candidates.len(),
            hits = hits.len(),
            "phrase search"
        );
        hits
    }
}

fn contains_phrase(tokens: &[String], phrase: &[String]) -> bool {
    !phrase.is_empty() && tokens.windows(phrase.len()).any(|w| w == phrase)
}
