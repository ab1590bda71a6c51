use tantivy::tokenizer::{
    Language,
    LowerCaser,
    RegexTokenizer,
    Stemmer,
    StopWordFilter,
    TextAnalyzer,
    TokenStream,
};

use crate::error::Result;

/// English function words dropped before stemming.
///
/// Contractions never survive tokenization (the apostrophe splits them),
/// but they stay in the list so it reads as the usual English set.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an",
    "and", "any", "are", "aren't", "as", "at", "be", "because", "been",
    "before", "being", "below", "between", "both", "but", "by", "can't",
    "cannot", "could", "couldn't", "did", "didn't", "do", "does", "doesn't",
    "doing", "don't", "down", "during", "each", "few", "for", "from",
    "further", "had", "hadn't", "has", "hasn't", "have", "haven't", "having",
    "he", "he'd", "he'll", "he's", "her", "here", "here's", "hers",
    "herself", "him", "himself", "his", "how", "how's", "i", "i'd", "i'll",
    "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its",
    "itself", "let's", "me", "more", "most", "mustn't", "my", "myself", "no",
    "nor", "not", "of", "off", "on", "once", "only", "or", "other", "ought",
    "our", "ours", "ourselves", "out", "over", "own", "same", "shan't",
    "she", "she'd", "she'll", "she's", "should", "shouldn't", "so", "some",
    "such", "than", "that", "that's", "the", "their", "theirs", "them",
    "themselves", "then", "there", "there's", "these", "they", "they'd",
    "they'll", "they're", "they've", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "wasn't", "we", "we'd", "we'll",
    "we're", "we've", "were", "weren't", "what", "what's", "when", "when's",
    "where", "where's", "which", "while", "who", "who's", "whom", "why",
    "why's", "with", "won't", "would", "wouldn't", "you", "you'd", "you'll",
    "you're", "you've", "your", "yours", "yourself", "yourselves",
];

/// Maximal runs of Unicode letters (`L*`) and numbers (`N*`).
///
/// Combining marks are separators, so `كَتَبَ` yields three tokens.
const WORD_PATTERN: &str = r"[\p{L}\p{N}]+";

/// Text → token pipeline shared by indexing and querying.
///
/// Splits on anything that is not a letter or number, lowercases, drops
/// [`STOP_WORDS`] and applies the Snowball English stemmer, in that order.
#[derive(Clone)]
pub struct Analyzer {
    pipeline: TextAnalyzer,
}

impl Analyzer {
    pub fn new() -> Result<Self> {
        let stop_words = STOP_WORDS.iter().map(|w| w.to_string());
        let tokenizer = RegexTokenizer::new(WORD_PATTERN)?;
        let pipeline = TextAnalyzer::builder(tokenizer)
            .filter(LowerCaser)
            .filter(StopWordFilter::remove(stop_words))
            .filter(Stemmer::new(Language::English))
            .build();
        Ok(Self { pipeline })
    }

    /// Run `text` through the pipeline, keeping token order.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        // token_stream needs &mut; the clone shares the stop-word set.
        let mut pipeline = self.pipeline.clone();
        let mut stream = pipeline.token_stream(text);
        let mut tokens = Vec::new();
        while stream.advance() {
            tokens.push(stream.token().text.clone());
        }
        tokens
    }
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> Analyzer {
        Analyzer::new().unwrap()
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(analyzer().analyze("").is_empty());
        assert!(analyzer().analyze("  ,.;!? ").is_empty());
    }

    #[test]
    fn splits_on_non_letters() {
        let tokens = analyzer().analyze("rust--fox,,,2024");
        assert_eq!(tokens, vec!["rust", "fox", "2024"]);
    }

    #[test]
    fn lowercases_before_stop_words() {
        let tokens = analyzer().analyze("The FOX");
        assert_eq!(tokens, vec!["fox"]);
    }

    #[test]
    fn stems_tokens() {
        let tokens = analyzer().analyze("running cats");
        assert_eq!(tokens, vec!["run", "cat"]);
    }

    #[test]
    fn drops_only_stop_words() {
        let tokens = analyzer().analyze("a slow turtle and the dog");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0], "slow");
        assert_eq!(tokens[2], "dog");
    }

    #[test]
    fn contractions_split_on_apostrophe() {
        // "don't" becomes "don" + "t"; neither half is a stop word.
        let tokens = analyzer().analyze("don't");
        assert_eq!(tokens, vec!["don", "t"]);
    }

    #[test]
    fn unicode_letters_are_kept() {
        let tokens = analyzer().analyze("Zürich/Berlin");
        assert_eq!(tokens.len(), 2);
        assert!(tokens[0].starts_with("zürich"));
    }

    #[test]
    fn combining_marks_separate_tokens() {
        // Arabic fatha (U+064E) is a nonspacing mark, not a letter.
        let tokens = analyzer().analyze("كَتَبَ");
        assert_eq!(tokens, vec!["ك", "ت", "ب"]);

        // Devanagari vowel signs (Mc) split the same way.
        let tokens = analyzer().analyze("कि");
        assert_eq!(tokens, vec!["क"]);
    }

    #[test]
    fn reanalysis_is_stable() {
        let analyzer = analyzer();
        let first = analyzer.analyze("The quick brown foxes were jumping");
        let second = analyzer.analyze(&first.join(" "));
        assert_eq!(first, vec!["quick", "brown", "fox", "jump"]);
        assert_eq!(first, second);
    }
}
