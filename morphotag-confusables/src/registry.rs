//! Loading and lookup of confusable-word groups.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::error::LoadError;

/// An ordered group of word-forms a writer is prone to confuse.
///
/// Immutable once constructed; every member word-form in the registry
/// points at the same shared group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfusionGroup {
    members: Vec<String>,
}

impl ConfusionGroup {
    fn new(members: Vec<String>) -> Self {
        Self { members }
    }

    /// Member word-forms in resource order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn contains(&self, word: &str) -> bool {
        self.members.iter().any(|member| member == word)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Word-form to confusion-group lookup, built once from a resource.
///
/// A word-form maps to at most one group. When a later resource line
/// redeclares a word, the later line wins and the overwrite is logged
/// as a warning.
#[derive(Debug, Clone, Default)]
pub struct ConfusionRegistry {
    map: HashMap<String, Arc<ConfusionGroup>>,
}

impl ConfusionRegistry {
    /// Load a registry from a UTF-8 resource file.
    ///
    /// The file is read once, sequentially, and closed regardless of
    /// the outcome. Fails with [`LoadError::ResourceNotFound`] when the
    /// path cannot be opened or read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::ResourceNotFound {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::from_text(&text))
    }

    /// Build a registry from any UTF-8 byte stream.
    ///
    /// Fails with [`LoadError::StreamRead`] when the stream cannot be
    /// read to the end (including invalid UTF-8).
    pub fn from_reader(mut reader: impl io::Read) -> Result<Self, LoadError> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|source| LoadError::StreamRead { source })?;
        Ok(Self::from_text(&text))
    }

    /// Build a registry from in-memory text, one comma-separated group
    /// per line. The final line may lack a terminator.
    ///
    /// Lines that do not yield at least two word-forms are degenerate
    /// groups and are skipped, not fatal: later lines must still load.
    pub fn from_text(text: &str) -> Self {
        let mut map: HashMap<String, Arc<ConfusionGroup>> = HashMap::new();
        for line in text.lines() {
            let words = split_group_line(line);
            if words.len() < 2 {
                if !line.trim().is_empty() {
                    log::debug!("ignoring degenerate confusion set line '{}'", line);
                }
                continue;
            }
            let group = Arc::new(ConfusionGroup::new(
                words.iter().map(|word| word.to_string()).collect(),
            ));
            for word in words {
                if let Some(previous) = map.insert(word.to_string(), Arc::clone(&group)) {
                    log::warn!(
                        "confusion set line redefines '{}', dropping its mapping to {:?}",
                        word,
                        previous.members()
                    );
                }
            }
        }
        Self { map }
    }

    /// The group `word` belongs to, if any.
    pub fn lookup(&self, word: &str) -> Option<&ConfusionGroup> {
        self.map.get(word).map(Arc::as_ref)
    }

    /// Number of word-forms with a group mapping.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Split one resource line on a comma plus optional following
/// whitespace.
///
/// Interior empty tokens (`"a,,b"`) are dropped rather than indexed as
/// an empty word-form.
fn split_group_line(line: &str) -> Vec<&str> {
    line.split(',')
        .enumerate()
        .map(|(i, word)| if i == 0 { word } else { word.trim_start() })
        .filter(|word| !word.is_empty())
        .collect()
}
