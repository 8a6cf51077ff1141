//! Row-based text storage.
//!
//! A [`Document`] is an ordered `Vec<Row>`. Each [`Row`] owns its raw bytes
//! plus two derived buffers: the tab-expanded `render` bytes and one
//! [`Highlight`] per rendered byte. Derived buffers are rebuilt inside every
//! mutating call, so readers never observe a `render` that disagrees with
//! `chars`.
//!
//! Column math is byte oriented. A logical column (`cx`) indexes `chars`, a
//! visual column (`rx`) indexes `render`; [`coords`] converts between them.

pub mod coords;
mod document;
pub mod lines;
mod row;

pub use core_syntax::{Highlight, LanguageProfile};
pub use document::Document;
pub use row::{Row, TAB_STOP};
