//! The poem record.

use serde::{Deserialize, Deserializer, Serialize};
use sha2::{Digest, Sha256};

use crate::normalize::{to_simplified, to_simplified_all};

/// A single poem.
///
/// Field names are part of the input format and of the indexed document, so
/// they must not be renamed. Missing or `null` text fields decode as empty;
/// a field of the wrong type fails the whole file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Verse lines, in reading order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub paragraphs: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,

    /// Tune or meter name (ci poems), empty for most shi poems.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rhythmic: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Poem {
    /// Create a poem with the given title and author.
    pub fn new<T: Into<String>, A: Into<String>>(title: T, author: A) -> Self {
        Poem {
            title: title.into(),
            author: author.into(),
            ..Default::default()
        }
    }

    /// Append a verse line.
    pub fn with_paragraph<S: Into<String>>(mut self, line: S) -> Self {
        self.paragraphs.push(line.into());
        self
    }

    /// Append a note.
    pub fn with_note<S: Into<String>>(mut self, note: S) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Set the tune name.
    pub fn with_rhythmic<S: Into<String>>(mut self, rhythmic: S) -> Self {
        self.rhythmic = rhythmic.into();
        self
    }

    /// Return a copy with every text field converted to simplified script.
    ///
    /// `paragraphs` and `notes` keep their length and order.
    pub fn normalized(&self) -> Poem {
        Poem {
            title: to_simplified(&self.title),
            paragraphs: to_simplified_all(&self.paragraphs),
            author: to_simplified(&self.author),
            rhythmic: to_simplified(&self.rhythmic),
            notes: to_simplified_all(&self.notes),
            name: self.name.as_deref().map(to_simplified),
            desc: self.desc.as_deref().map(to_simplified),
            description: self.description.as_deref().map(to_simplified),
        }
    }

    /// Stable identifier derived from title, author and verse lines.
    ///
    /// Each part is terminated by a NUL byte so that moving text between
    /// parts changes the digest.
    pub fn content_id(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.title.as_bytes());
        hasher.update([0u8]);
        hasher.update(self.author.as_bytes());
        hasher.update([0u8]);
        for line in &self.paragraphs {
            hasher.update(line.as_bytes());
            hasher.update([0u8]);
        }
        hex::encode(hasher.finalize())
    }
}
