use serde::{Deserialize, Serialize};

/// Position of a document in the store. IDs are dense and zero-based.
pub type DocId = usize;

/// A document as handed over by a loader, before it has an ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub title: String,
    pub url: String,
    pub text: String,
}

impl DocumentRecord {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            text: text.into(),
        }
    }
}

/// An indexed document. `id` is its offset in the engine's store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub title: String,
    pub url: String,
    pub text: String,
}

impl Document {
    pub(crate) fn from_record(id: DocId, record: DocumentRecord) -> Self {
        Self {
            id,
            title: record.title,
            url: record.url,
            text: record.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_record_keeps_fields() {
        let record = DocumentRecord::new("Title", "https://x", "Body");
        let doc = Document::from_record(7, record);
        assert_eq!(doc.id, 7);
        assert_eq!(doc.title, "Title");
        assert_eq!(doc.url, "https://x");
        assert_eq!(doc.text, "Body");
    }

    #[test]
    fn serializes_to_json() {
        let doc = Document::from_record(0, DocumentRecord::new("T", "u", "b"));
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["id"], 0);
        assert_eq!(value["title"], "T");
    }
}
