//! Word list sources
//!
//! A [`WordSource`] supplies the raw lines of a word list and accepts
//! appended words. Files are rewritten atomically on append so a reader
//! never observes a half-written list.

use crate::core::Word;
use crate::error::LexiconError;
use log::debug;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Backing store for a lexicon's word list
pub trait WordSource: Send + Sync {
    /// Human-readable name used in error messages
    fn name(&self) -> String;

    /// Read every line of the list
    ///
    /// # Errors
    /// Returns `LexiconError::DataLoad` if the source is missing or unreadable.
    fn load(&self) -> Result<Vec<String>, LexiconError>;

    /// Persist one more word at the end of the list
    ///
    /// # Errors
    /// Returns `LexiconError::Io` if the store cannot be written. On error the
    /// stored list is unchanged.
    fn append(&mut self, word: &Word) -> Result<(), LexiconError>;
}

/// Word list stored in a text file, one word per line
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<String>, LexiconError> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| LexiconError::data_load(self.name(), e.to_string()))?;
        Ok(content.lines().map(str::to_string).collect())
    }

    fn append(&mut self, word: &Word) -> Result<(), LexiconError> {
        let io_err = |source| LexiconError::Io {
            path: self.path.clone(),
            source,
        };

        // Rewrite the link target, not the link
        let target = fs::canonicalize(&self.path).map_err(io_err)?;
        let permissions = fs::metadata(&target).map_err(io_err)?.permissions();

        let mut content = fs::read_to_string(&target).map_err(io_err)?;
        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(word.as_str());
        content.push('\n');

        let parent = target.parent().unwrap_or_else(|| Path::new("."));
        let mut temp = NamedTempFile::new_in(parent).map_err(io_err)?;
        temp.write_all(content.as_bytes()).map_err(io_err)?;
        temp.as_file().set_permissions(permissions).map_err(io_err)?;
        temp.as_file().sync_all().map_err(io_err)?;
        temp.persist(&target).map_err(|e| io_err(e.error))?;

        debug!("appended {word} to {}", self.path.display());
        Ok(())
    }
}

/// In-memory word list
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    name: String,
    lines: Vec<String>,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            name: name.into(),
            lines,
        }
    }

    /// Build from string slices
    ///
    /// # Examples
    /// ```
    /// use wordpie::wordlists::{MemorySource, WordSource};
    ///
    /// let source = MemorySource::from_slice(&["crane", "slate"]);
    /// assert_eq!(source.load().unwrap().len(), 2);
    /// ```
    #[must_use]
    pub fn from_slice(words: &[&str]) -> Self {
        Self::new("in-memory word list", words.iter().map(|&w| w.to_string()).collect())
    }

    /// The word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(
            "embedded word list",
            super::WORDS.iter().map(|&w| w.to_string()).collect(),
        )
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl WordSource for MemorySource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn load(&self) -> Result<Vec<String>, LexiconError> {
        Ok(self.lines.clone())
    }

    fn append(&mut self, word: &Word) -> Result<(), LexiconError> {
        self.lines.push(word.to_string());
        Ok(())
    }
}

/// Parse word-list lines strictly
///
/// Blank lines are skipped; any other line must be a valid five-letter word.
///
/// # Errors
/// Returns `LexiconError::DataLoad` naming the first bad line, or if no words
/// are present.
pub fn parse_words(source_name: &str, lines: &[String]) -> Result<Vec<Word>, LexiconError> {
    let mut words = Vec::with_capacity(lines.len());

    for (line_no, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let word = Word::new(trimmed).map_err(|e| {
            LexiconError::data_load(source_name, format!("line {}: \"{trimmed}\": {e}", line_no + 1))
        })?;
        words.push(word);
    }

    if words.is_empty() {
        return Err(LexiconError::data_load(source_name, "word list is empty"));
    }

    Ok(words)
}
