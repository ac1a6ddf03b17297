//! Properties Format Module
//!
//! Line-oriented text format for key/value entries.
//!
//! ## Responsibilities
//! - Parse files into ordered entries, keeping preceding comments
//! - Serialize entries back so that re-parsing yields the same entries
//! - Escape separators, backslashes and leading blanks
//! - Join and split multi-line values via trailing-backslash continuation
//!
//! ## File Format
//! ```text
//! # comment attached to the next key      <- '#' or '!' marks a comment
//! key=value
//! key2 : value                            <- '=', ':' or blanks separate
//! a-we\:ird\=key=value                    <- escaped separators stay in the key
//! multi=first line\                       <- odd trailing '\' continues
//!   second line                           <- leading blanks are dropped
//!
//! hello=こんにちは                         <- UTF-8 verbatim
//! ```
//!
//! Blank lines are ignored and do not break a run of comments.

mod entry;
mod escape;
mod reader;
mod writer;

pub use entry::Entry;
pub use reader::{parse, Entries, LineParser, PropertiesReader};
pub use writer::{serialize, PropertiesWriter};
