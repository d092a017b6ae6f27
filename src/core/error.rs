use std::io;

use thiserror::Error;

/// Fatal errors of an extraction run.
///
/// Unresolvable marker arguments and untagged comments are not errors; the
/// scanner skips those silently.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read {path}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}:{line}: {message}")]
    Parse {
        path: String,
        line: usize,
        message: String,
    },

    #[error("failed to write {path}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}
