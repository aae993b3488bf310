//! Error types for confusion-set loading.

use std::io;

use thiserror::Error;

/// Errors raised while loading a confusion-set resource.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The resource could not be opened or read.
    #[error("failed to read confusion set resource '{path}': {source}")]
    ResourceNotFound {
        path: String,
        #[source]
        source: io::Error,
    },

    /// An in-memory stream could not be read to the end.
    #[error("failed to read confusion set stream: {source}")]
    StreamRead {
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_resource() {
        let err = LoadError::ResourceNotFound {
            path: "/missing/confusion_sets.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let text = err.to_string();
        assert!(text.contains("/missing/confusion_sets.txt"));
    }
}
