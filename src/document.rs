//! Poem records and the loader that decodes them from JSON files.
//!
//! # Core Components
//!
//! - [`poem::Poem`] - One poem as found in the input files
//! - [`loader::DocumentLoader`] - Decodes a file into an ordered list of poems
//!
//! # Examples
//!
//! ```
//! use poem_indexer::document::poem::Poem;
//!
//! let poems: Vec<Poem> = serde_json::from_str(
//!     r#"[{"title":"靜夜思","author":"李白","paragraphs":["床前明月光"],"notes":[]}]"#,
//! )
//! .unwrap();
//!
//! let simplified = poems[0].normalized();
//! assert_eq!(simplified.title, "静夜思");
//! assert_eq!(simplified.paragraphs, vec!["床前明月光"]);
//! ```

pub mod loader;
pub mod poem;

pub use loader::{DocumentLoader, JsonPoemLoader};
pub use poem::Poem;
