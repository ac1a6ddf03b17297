//! Properties Writer
//!
//! Renders entries back into properties text.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::config::FormatOptions;
use crate::error::Result;

use super::escape::{escape_key, escape_value_segment};
use super::Entry;

/// Render entries into a string, in the given order
pub fn serialize(entries: &[Entry], options: &FormatOptions) -> String {
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        render_entry(&mut out, entry, options, i == 0);
    }
    out
}

/// Append one entry: optional spacer, comments, then the key line(s)
fn render_entry(out: &mut String, entry: &Entry, options: &FormatOptions, first: bool) {
    if options.blank_line_before_comments && !first && !entry.comments.is_empty() {
        out.push('\n');
    }

    let marker = options.comment_marker.as_char();
    for comment in &entry.comments {
        for line in comment.split('\n') {
            out.push(marker);
            if !line.is_empty() {
                out.push(' ');
                out.push_str(line);
            }
            out.push('\n');
        }
    }

    out.push_str(&escape_key(&entry.key));
    out.push(options.separator.as_char());

    let mut segments = entry.value.split('\n');
    if let Some(head) = segments.next() {
        out.push_str(&escape_value_segment(head));
    }
    for segment in segments {
        out.push_str("\\\n");
        if !segment.is_empty() {
            out.extend(std::iter::repeat(' ').take(options.continuation_indent));
            out.push_str(&escape_value_segment(segment));
        }
    }

    out.push('\n');
}

// =============================================================================
// Streaming Writer
// =============================================================================

/// Writes entries to a properties sink
pub struct PropertiesWriter<W: Write> {
    writer: W,
    options: FormatOptions,
    entries_written: usize,
    /// Scratch space reused for every rendered entry
    buffer: String,
}

impl PropertiesWriter<BufWriter<File>> {
    /// Create or truncate a properties file for writing
    pub fn create(path: &Path, options: FormatOptions) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        Ok(Self::new(BufWriter::new(file), options))
    }

    /// Flush buffered output and fsync the file
    pub fn commit(self) -> Result<()> {
        let written = self.entries_written;
        let file = self.finish()?.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
        debug!(entries = written, "committed properties file");
        Ok(())
    }
}

impl<W: Write> PropertiesWriter<W> {
    /// Wrap any sink
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            entries_written: 0,
            buffer: String::new(),
        }
    }

    /// Append a single entry
    pub fn write_entry(&mut self, entry: &Entry) -> Result<()> {
        self.buffer.clear();
        render_entry(&mut self.buffer, entry, &self.options, self.entries_written == 0);
        self.writer.write_all(self.buffer.as_bytes())?;
        self.entries_written += 1;
        Ok(())
    }

    /// Append entries in iteration order
    pub fn write_all<'a, I>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        for entry in entries {
            self.write_entry(entry)?;
        }
        Ok(())
    }

    /// Number of entries written so far
    pub fn entries_written(&self) -> usize {
        self.entries_written
    }

    /// Flush and hand back the underlying sink
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
