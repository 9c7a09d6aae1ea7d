//! Pending bulk request bodies.

use serde::Serialize;

use crate::bulk::config::IdStrategy;
use crate::document::poem::Poem;
use crate::error::Result;

#[derive(Serialize)]
struct IndexAction<'a> {
    index: ActionMeta<'a>,
}

#[derive(Serialize)]
struct ActionMeta<'a> {
    #[serde(rename = "_index")]
    index: &'a str,

    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
}

/// One document rendered as its action line and source line.
#[derive(Debug, Clone)]
pub struct EncodedDocument {
    /// Both NDJSON lines, each terminated by `\n`.
    pub bytes: Vec<u8>,

    /// Id sent with the document, if any.
    pub id: Option<String>,

    /// Human-readable label for log messages.
    pub label: String,
}

impl EncodedDocument {
    /// Render `poem` as an index action for `index`.
    pub fn encode(index: &str, strategy: IdStrategy, poem: &Poem) -> Result<Self> {
        let id = match strategy {
            IdStrategy::Auto => None,
            IdStrategy::ContentHash => Some(poem.content_id()),
        };

        let action = IndexAction {
            index: ActionMeta {
                index,
                id: id.as_deref(),
            },
        };

        let mut bytes = serde_json::to_vec(&action)?;
        bytes.push(b'\n');
        serde_json::to_writer(&mut bytes, poem)?;
        bytes.push(b'\n');

        Ok(Self {
            bytes,
            id,
            label: format!("{} ({})", poem.title, poem.author),
        })
    }

    /// Size on the wire.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; an encoded document has at least its two newlines.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Per-document bookkeeping kept alongside the request body.
#[derive(Debug, Clone)]
pub struct BatchEntry {
    pub id: Option<String>,
    pub label: String,
}

/// A batch of documents waiting to be sent as one bulk request.
#[derive(Debug)]
pub struct BulkBatch {
    /// NDJSON request body.
    body: Vec<u8>,

    /// One entry per document, in body order.
    entries: Vec<BatchEntry>,
}

impl Default for BulkBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl BulkBatch {
    /// Create a new empty batch.
    pub fn new() -> Self {
        Self {
            body: Vec::new(),
            entries: Vec::new(),
        }
    }

    /// Append an encoded document.
    pub fn push(&mut self, doc: EncodedDocument) {
        self.body.extend_from_slice(&doc.bytes);
        self.entries.push(BatchEntry {
            id: doc.id,
            label: doc.label,
        });
    }

    /// Check if the batch reached either the count or the byte threshold.
    pub fn is_full(&self, max_actions: usize, max_bytes: usize) -> bool {
        self.entries.len() >= max_actions || self.body.len() >= max_bytes
    }

    /// Get the number of documents in the batch.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Size of the request body in bytes.
    pub fn size_in_bytes(&self) -> usize {
        self.body.len()
    }

    /// Split into the request body and the document entries.
    pub fn into_parts(self) -> (Vec<u8>, Vec<BatchEntry>) {
        (self.body, self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_poem(title: &str) -> Poem {
        Poem::new(title, "李白").with_paragraph("床前明月光")
    }

    #[test]
    fn test_encode_with_content_hash() {
        let poem = create_test_poem("静夜思");
        let doc = EncodedDocument::encode("poems", IdStrategy::ContentHash, &poem).unwrap();

        let text = String::from_utf8(doc.bytes.clone()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(text.ends_with('\n'));

        let action: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(action["index"]["_index"], "poems");
        assert_eq!(action["index"]["_id"], poem.content_id());

        let source: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(source["title"], "静夜思");
        assert_eq!(source["paragraphs"][0], "床前明月光");
        assert_eq!(doc.id.as_deref(), Some(poem.content_id().as_str()));
        assert_eq!(doc.label, "静夜思 (李白)");
    }

    #[test]
    fn test_encode_auto_id() {
        let doc =
            EncodedDocument::encode("poems", IdStrategy::Auto, &create_test_poem("静夜思")).unwrap();
        let text = String::from_utf8(doc.bytes).unwrap();
        let action: serde_json::Value = serde_json::from_str(text.lines().next().unwrap()).unwrap();

        assert!(action["index"].get("_id").is_none());
        assert!(doc.id.is_none());
    }

    #[test]
    fn test_bulk_batch() {
        let mut batch = BulkBatch::new();
        assert!(batch.is_empty());

        let a = EncodedDocument::encode("poems", IdStrategy::Auto, &create_test_poem("a")).unwrap();
        let b = EncodedDocument::encode("poems", IdStrategy::Auto, &create_test_poem("b")).unwrap();
        let expected_size = a.len() + b.len();
        batch.push(a);
        batch.push(b);

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.size_in_bytes(), expected_size);
        assert!(batch.is_full(2, usize::MAX));
        assert!(!batch.is_full(3, usize::MAX));
        assert!(batch.is_full(3, expected_size));

        let (body, entries) = batch.into_parts();
        assert_eq!(body.len(), expected_size);
        assert_eq!(entries[1].label, "b (李白)");
    }
}
