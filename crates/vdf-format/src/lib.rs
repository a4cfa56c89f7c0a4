//! Formatting utilities for KeyValues (VDF) documents.
//!
//! This crate turns [`vdf_tree::Document`] values back into text, and provides the
//! escape helpers callers need to move between stored (escaped) and plain text.
#![doc = include_str!("../README.md")]

mod options;
mod scalar;
mod writer;

pub use options::FormatOptions;
pub use scalar::{escape, guard_raw, is_quotable, unescape};
pub use writer::{VdfWriter, to_string, to_string_with_options, write_document};
