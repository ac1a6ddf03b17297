//! Configuration for propstore
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a Store instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // File Configuration
    // -------------------------------------------------------------------------
    /// The `.properties` file this store is bound to
    pub path: PathBuf,

    /// Create the file on `Store::open` when it does not exist yet
    pub create_if_missing: bool,

    // -------------------------------------------------------------------------
    // Output Configuration
    // -------------------------------------------------------------------------
    /// How entries are laid out when saved
    pub format: FormatOptions,
}

/// Layout choices for the writer
///
/// None of these affect what the reader produces: any combination
/// re-parses to the same entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Marker written in front of every comment line
    pub comment_marker: CommentMarker,

    /// Separator written between key and value
    pub separator: Separator,

    /// Spaces in front of each continuation line of a multi-line value
    pub continuation_indent: usize,

    /// Emit an empty line before every commented entry (except the first)
    pub blank_line_before_comments: bool,
}

/// Comment marker character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentMarker {
    /// `#`
    Hash,

    /// `!`
    Bang,
}

impl CommentMarker {
    pub fn as_char(self) -> char {
        match self {
            CommentMarker::Hash => '#',
            CommentMarker::Bang => '!',
        }
    }
}

/// Key/value separator character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// `key=value`
    Equals,

    /// `key:value`
    Colon,
}

impl Separator {
    pub fn as_char(self) -> char {
        match self {
            Separator::Equals => '=',
            Separator::Colon => ':',
        }
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            comment_marker: CommentMarker::Hash,
            separator: Separator::Equals,
            continuation_indent: 2,
            blank_line_before_comments: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./config.properties"),
            create_if_missing: false,
            format: FormatOptions::default(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the backing file
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = path.into();
        self
    }

    /// Create the file on open when missing
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.config.create_if_missing = create;
        self
    }

    /// Set the comment marker used on save
    pub fn comment_marker(mut self, marker: CommentMarker) -> Self {
        self.config.format.comment_marker = marker;
        self
    }

    /// Set the key/value separator used on save
    pub fn separator(mut self, separator: Separator) -> Self {
        self.config.format.separator = separator;
        self
    }

    /// Set the indent of continuation lines (in spaces)
    pub fn continuation_indent(mut self, spaces: usize) -> Self {
        self.config.format.continuation_indent = spaces;
        self
    }

    /// Toggle the empty line before commented entries
    pub fn blank_line_before_comments(mut self, enabled: bool) -> Self {
        self.config.format.blank_line_before_comments = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
