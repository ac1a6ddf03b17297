//! Properties Reader
//!
//! Turns physical lines into entries. `LineParser` holds the grammar and
//! never touches I/O; `PropertiesReader` streams lines from a file into it.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::mem;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, StoreError};

use super::escape::{
    comment_text, has_continuation, is_comment, split_key_value, trim_blanks_start, unescape,
};
use super::Entry;

/// Parse in-memory text into entries, in file order
///
/// Every line is accepted: this cannot fail.
pub fn parse(input: &str) -> Vec<Entry> {
    let mut parser = LineParser::new();
    let mut entries: Vec<Entry> = input.lines().filter_map(|line| parser.feed(line)).collect();
    entries.extend(parser.finish());
    entries
}

// =============================================================================
// Line Parser
// =============================================================================

/// Incremental parser fed one physical line at a time
///
/// State between lines:
/// - comments waiting for the next key line
/// - a logical line still being continued
#[derive(Debug, Default)]
pub struct LineParser {
    pending_comments: Vec<String>,
    continuation: Option<String>,
    lines_seen: usize,
}

impl LineParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one physical line without its line terminator
    ///
    /// Returns an entry once its logical line is complete.
    pub fn feed(&mut self, line: &str) -> Option<Entry> {
        self.lines_seen += 1;

        // Continuation lines are taken as-is: never comments, never blank.
        if let Some(mut logical) = self.continuation.take() {
            let segment = trim_blanks_start(line);
            logical.push('\n');
            if has_continuation(segment) {
                logical.push_str(&segment[..segment.len() - 1]);
                self.continuation = Some(logical);
                return None;
            }
            logical.push_str(segment);
            return Some(self.build_entry(&logical));
        }

        let trimmed = trim_blanks_start(line);
        if trimmed.is_empty() {
            return None;
        }
        if is_comment(trimmed) {
            self.pending_comments.push(comment_text(trimmed));
            return None;
        }
        if has_continuation(trimmed) {
            self.continuation = Some(trimmed[..trimmed.len() - 1].to_string());
            return None;
        }

        Some(self.build_entry(trimmed))
    }

    /// Signal end of input
    ///
    /// Completes a value whose last line still asked for continuation.
    /// Comments with no key line after them are dropped.
    pub fn finish(&mut self) -> Option<Entry> {
        let entry = self
            .continuation
            .take()
            .map(|logical| self.build_entry(&logical));

        if !self.pending_comments.is_empty() {
            debug!(
                dropped = self.pending_comments.len(),
                "trailing comments without a key line"
            );
            self.pending_comments.clear();
        }

        entry
    }

    /// Number of physical lines fed so far
    pub fn lines_seen(&self) -> usize {
        self.lines_seen
    }

    fn build_entry(&mut self, logical: &str) -> Entry {
        let (raw_key, raw_value) = split_key_value(logical);
        Entry {
            key: unescape(raw_key),
            value: unescape(raw_value),
            comments: mem::take(&mut self.pending_comments),
        }
    }
}

// =============================================================================
// Streaming Reader
// =============================================================================

/// Reads entries from a properties source line by line
pub struct PropertiesReader<R> {
    reader: R,
    parser: LineParser,
    buffer: String,
    finished: bool,
}

impl PropertiesReader<BufReader<File>> {
    /// Open a properties file for reading
    ///
    /// A missing file is reported as `FileNotFound`, every other open
    /// failure as `Io`.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StoreError::FileNotFound(path.to_path_buf()),
            _ => StoreError::Io(e),
        })?;
        debug!(path = %path.display(), "opened properties file");
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> PropertiesReader<R> {
    /// Wrap any buffered source
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            parser: LineParser::new(),
            buffer: String::new(),
            finished: false,
        }
    }

    /// Read the next entry
    ///
    /// Returns `Ok(None)` once the source is exhausted.
    pub fn next_entry(&mut self) -> Result<Option<Entry>> {
        if self.finished {
            return Ok(None);
        }

        loop {
            self.buffer.clear();
            let read = match self.reader.read_line(&mut self.buffer) {
                Ok(read) => read,
                Err(e) => {
                    self.finished = true;
                    return Err(e.into());
                }
            };

            if read == 0 {
                self.finished = true;
                return Ok(self.parser.finish());
            }

            let line = match self.buffer.strip_suffix('\n') {
                Some(line) => line.strip_suffix('\r').unwrap_or(line),
                None => self.buffer.as_str(),
            };

            if let Some(entry) = self.parser.feed(line) {
                return Ok(Some(entry));
            }
        }
    }

    /// Iterate over all remaining entries
    pub fn entries(self) -> Entries<R> {
        Entries { reader: self }
    }

    /// Collect all remaining entries in file order
    pub fn read_all(mut self) -> Result<Vec<Entry>> {
        let mut entries = Vec::new();
        while let Some(entry) = self.next_entry()? {
            entries.push(entry);
        }
        debug!(
            entries = entries.len(),
            lines = self.parser.lines_seen(),
            "parsed properties"
        );
        Ok(entries)
    }
}

/// Iterator over entries of a `PropertiesReader`
///
/// Yields at most one error, then stops.
pub struct Entries<R> {
    reader: PropertiesReader<R>,
}

impl<R: BufRead> Iterator for Entries<R> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.next_entry().transpose()
    }
}
