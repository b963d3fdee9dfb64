use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{ChapterGuardError, Result};

/// File size threshold for streaming reads (10 MB)
const LARGE_FILE_THRESHOLD: u64 = 10 * 1024 * 1024;

/// Number of non-whitespace characters in `text`.
///
/// Each Unicode scalar value counts once, so a CJK character, a full-width
/// punctuation mark and an ASCII letter all count as 1. This is the usual
/// "word count" of Chinese web-novel platforms.
#[must_use]
pub fn count_chars(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CharCounter;

impl CharCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn count(&self, text: &str) -> usize {
        count_chars(text)
    }

    /// Count from a buffered reader (streaming, memory-efficient for large files).
    ///
    /// # Errors
    /// Returns an I/O error if reading fails or the input is not valid UTF-8.
    pub fn count_reader<R: BufRead>(&self, reader: R) -> std::io::Result<usize> {
        reader
            .lines()
            .try_fold(0, |total, line| Ok(total + count_chars(&line?)))
    }

    /// Reads and counts one file. Large files are streamed.
    ///
    /// # Errors
    /// Returns `FileRead` if the file cannot be opened or is not valid UTF-8.
    pub fn count_file(&self, path: &Path) -> Result<usize> {
        let to_error = |source: std::io::Error| ChapterGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        };

        let metadata = std::fs::metadata(path).map_err(to_error)?;
        if metadata.len() >= LARGE_FILE_THRESHOLD {
            let file = File::open(path).map_err(to_error)?;
            return self.count_reader(BufReader::new(file)).map_err(to_error);
        }

        let content = std::fs::read_to_string(path).map_err(to_error)?;
        Ok(self.count(&content))
    }
}

#[cfg(test)]
#[path = "chars_tests.rs"]
mod tests;
