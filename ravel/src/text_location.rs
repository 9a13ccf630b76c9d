//! Text location tracking for error reporting and source maps.

use std::fmt;
use std::path::PathBuf;

/// A position within a source document.
///
/// Lines are the unit of parsing, so a location is a file name (if known)
/// plus a 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextLocation {
    /// The file path (if known).
    pub filename: Option<PathBuf>,
    /// Line number (1-indexed).
    pub line: usize,
}

impl TextLocation {
    /// Creates a new TextLocation.
    pub fn new(filename: Option<PathBuf>, line: usize) -> Self {
        Self { filename, line }
    }

    /// Creates a TextLocation with only line information.
    pub fn line_only(line: usize) -> Self {
        Self {
            filename: None,
            line,
        }
    }

    /// Creates a TextLocation with file and line.
    pub fn file_line(filename: PathBuf, line: usize) -> Self {
        Self {
            filename: Some(filename),
            line,
        }
    }

    /// Returns a new location with updated filename.
    pub fn with_filename(mut self, filename: PathBuf) -> Self {
        self.filename = Some(filename);
        self
    }
}

impl Default for TextLocation {
    fn default() -> Self {
        Self {
            filename: None,
            line: 1,
        }
    }
}

impl fmt::Display for TextLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.filename {
            Some(path) => write!(f, "{}:{}", path.display(), self.line),
            None => write!(f, "line {}", self.line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_filename() {
        let loc = TextLocation::new(Some(PathBuf::from("doc.txt")), 10);
        assert_eq!(format!("{}", loc), "doc.txt:10");
    }

    #[test]
    fn test_display_without_filename() {
        let loc = TextLocation::line_only(10);
        assert_eq!(format!("{}", loc), "line 10");
    }

    #[test]
    fn test_with_filename() {
        let loc = TextLocation::line_only(42).with_filename(PathBuf::from("a.txt"));
        assert_eq!(loc.line, 42);
        assert_eq!(loc.filename, Some(PathBuf::from("a.txt")));
    }
}
