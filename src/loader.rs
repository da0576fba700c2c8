//! Reading patterns from line-oriented sources.
//!
//! Every line of the source is one pattern. Line terminators (`\n` or
//! `\r\n`) are not part of the pattern; any other whitespace is, including
//! a `\r` left before the terminator.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::{AutomatonBuilder, InvalidPattern};

/// Errors that occur when loading patterns.
///
/// Patterns read before the error occurred remain in the builder.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    /// The pattern file could not be opened
    #[error("Cannot open pattern file {}", .path.display())]
    Open {
        /// The path of the file
        path: PathBuf,
        /// The underlying error
        #[source]
        source: io::Error,
    },

    /// Reading from the source failed
    #[error("Cannot read pattern on line {line}")]
    Io {
        /// The 1-based line number
        line: usize,
        /// The underlying error
        #[source]
        source: io::Error,
    },

    /// A line is not a valid pattern
    #[error("Invalid pattern on line {line}")]
    Pattern {
        /// The 1-based line number
        line: usize,
        /// The reason the pattern was rejected
        #[source]
        source: InvalidPattern,
    },
}

impl AutomatonBuilder {
    /// Insert one pattern per line of `reader`.
    ///
    /// Blank lines are skipped or rejected depending on
    /// [crate::BuildConfig::skip_blank_lines]. Returns the number of
    /// patterns inserted.
    pub fn read_patterns<R: BufRead>(&mut self, reader: R) -> Result<usize, LoadError> {
        let mut n_inserted = 0;
        for (i, line) in reader.lines().enumerate() {
            let line_no = i + 1;
            let line = line.map_err(|source| LoadError::Io {
                line: line_no,
                source,
            })?;
            if line.is_empty() && self.config().skip_blank_lines {
                tracing::trace!(line = line_no, "skipping blank line");
                continue;
            }
            self.insert(&line).map_err(|source| LoadError::Pattern {
                line: line_no,
                source,
            })?;
            n_inserted += 1;
        }
        tracing::debug!(n_inserted, n_states = self.n_states(), "read patterns");
        Ok(n_inserted)
    }

    /// Insert one pattern per line of the file at `path`.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading patterns");
        self.read_patterns(BufReader::new(file))
    }
}
