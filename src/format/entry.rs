//! Entry definitions
//!
//! Defines the record produced for each key line of a properties file.

use serde::{Deserialize, Serialize};

/// A single key/value pair together with the comment lines above it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Lookup identity, unique within a store
    pub key: String,

    /// Unescaped value; continuation lines are joined with `\n`
    pub value: String,

    /// Comment lines directly above the key, without the marker
    pub comments: Vec<String>,
}

impl Entry {
    /// Create an entry without comments
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            comments: Vec::new(),
        }
    }

    /// Create an entry with the given comment lines
    pub fn with_comments<I, S>(key: impl Into<String>, value: impl Into<String>, comments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.into(),
            value: value.into(),
            comments: comments.into_iter().map(Into::into).collect(),
        }
    }

    /// True if the value spans more than one physical line on disk
    pub fn is_multiline(&self) -> bool {
        self.value.contains('\n')
    }
}
