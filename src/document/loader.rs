//! Decoding input files into poems.
//!
//! Each input file holds a JSON array of poem objects:
//! ```json
//! [
//!   {"title": "靜夜思", "author": "李白", "paragraphs": ["床前明月光"], "notes": []}
//! ]
//! ```

use std::fs;
use std::path::Path;

use crate::document::poem::Poem;
use crate::error::{IngestError, Result};

/// A trait for turning one input file into its poems.
///
/// Failures are reported per file; the caller decides whether to skip the
/// file or stop.
pub trait DocumentLoader: Send + Sync {
    /// Read and decode the file at `path`, keeping the order of the records.
    fn load(&self, path: &Path) -> Result<Vec<Poem>>;
}

/// Loader for files containing a JSON array of poems.
#[derive(Debug, Clone, Default)]
pub struct JsonPoemLoader;

impl JsonPoemLoader {
    /// Create a new JSON loader.
    pub fn new() -> Self {
        JsonPoemLoader
    }

    /// Decode poems from raw file contents.
    pub fn decode(&self, bytes: &[u8]) -> std::result::Result<Vec<Poem>, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

impl DocumentLoader for JsonPoemLoader {
    fn load(&self, path: &Path) -> Result<Vec<Poem>> {
        let bytes = fs::read(path)
            .map_err(|e| IngestError::decode(path, format!("failed to read file: {e}")))?;

        self.decode(&bytes)
            .map_err(|e| IngestError::decode(path, format!("failed to parse JSON: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_array() {
        let file = write_temp(
            r#"[
                {"title": "春曉", "author": "孟浩然", "paragraphs": ["春眠不覺曉", "處處聞啼鳥"]},
                {"title": "相思", "author": "王維", "paragraphs": ["紅豆生南國"]}
            ]"#,
        );

        let poems = JsonPoemLoader::new().load(file.path()).unwrap();
        assert_eq!(poems.len(), 2);
        assert_eq!(poems[0].title, "春曉");
        assert_eq!(poems[1].author, "王維");
        assert_eq!(poems[0].paragraphs[1], "處處聞啼鳥");
    }

    #[test]
    fn test_load_empty_array() {
        let file = write_temp("[]");
        assert!(JsonPoemLoader::new().load(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json_is_decode_error() {
        let file = write_temp(r#"[{"title": "春曉""#);
        let err = JsonPoemLoader::new().load(file.path()).unwrap_err();

        assert!(matches!(err, IngestError::Decode { .. }));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_schema_mismatch_is_decode_error() {
        // An object at the top level instead of an array.
        let file = write_temp(r#"{"title": "春曉"}"#);
        let err = JsonPoemLoader::new().load(file.path()).unwrap_err();
        assert!(matches!(err, IngestError::Decode { .. }));

        let file = write_temp(r#"[{"paragraphs": "not a list"}]"#);
        assert!(JsonPoemLoader::new().load(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonPoemLoader::new()
            .load(&dir.path().join("missing.json"))
            .unwrap_err();

        match err {
            IngestError::Decode { path, message } => {
                assert!(path.ends_with("missing.json"));
                assert!(message.contains("failed to read file"));
            }
            other => panic!("Expected decode error, got {other:?}"),
        }
    }
}
