//! Syntax classification for rendered rows.
//!
//! Two halves:
//! * [`profile`] holds the immutable language descriptors (keywords, comment
//!   prefix, feature flags) and the fixed registry that selects one from a
//!   file name.
//! * [`highlight`] holds the per-byte [`Highlight`] category and the single
//!   pass classifier that turns a rendered row into a category vector.
//!
//! Everything here is byte oriented. Rows are classified after tab expansion
//! so categories line up one-to-one with rendered cells.

pub mod highlight;
pub mod profile;

pub use highlight::{Highlight, classify, is_separator};
pub use profile::{HighlightFlags, Keyword, KeywordClass, LanguageProfile, PROFILES, select_profile};
