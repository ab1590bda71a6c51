//! ftsearch - an in-memory full-text search engine.
//!
//! A corpus of short documents (typically a Wikipedia abstract dump) is
//! loaded once, run through an English analysis pipeline built on
//! [Tantivy](https://github.com/quickwit-oss/tantivy)'s tokenizers, and
//! indexed into token → posting list form. Three query modes are served
//! from that index: ranked keyword search (boolean AND + TF-IDF with a
//! title boost), exact phrase search and wildcard vocabulary matching.
//!
//! # Quick start
//!
//! ```
//! use ftsearch::{DocumentRecord, SearchEngine};
//!
//! let engine = SearchEngine::new(vec![
//!     DocumentRecord::new("Foxes", "https://a.example", "the quick fox"),
//!     DocumentRecord::new("Turtles", "https://b.example", "a slow turtle"),
//! ])?;
//!
//! assert_eq!(engine.search("quick fox"), vec![0]);
//! assert_eq!(engine.search_phrase("\"slow turtle\""), vec![1]);
//! assert_eq!(engine.find_wildcard_matches("tur*")?, vec![1]);
//! # Ok::<(), ftsearch::Error>(())
//! ```

pub mod analyzer;
pub mod cli;
pub mod document;
pub mod engine;
pub mod error;
pub mod index;
pub mod loader;
pub mod output;
pub mod phrase;
pub mod query;
pub mod server;
pub mod wildcard;

pub use analyzer::Analyzer;
pub use document::{DocId, Document, DocumentRecord};
pub use engine::{IndexStats, ScoredDocument, SearchEngine};
pub use error::{Error, Result};
pub use index::InvertedIndex;
pub use query::{QueryMode, QueryOutcome, SearchHit};
