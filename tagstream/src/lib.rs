#![deny(missing_docs)]
//! A streaming writer for HTML and XHTML markup whose content model is
//! checked at compile time.
//!
//! Markup is written straight to an [`std::io::Write`] sink as the fluent
//! calls happen; nothing is buffered and no tree is built. Which elements
//! can be opened at a given position is decided by the trait lattice in
//! [`model`]: a `<li>` outside a list or a `<td>` outside a row is a
//! compile error, not a runtime one. Attribute writing is typed per tag
//! through the mixins in [`attribute`], with duplicate attributes,
//! mutually exclusive attributes, and doctype-gated constructs reported
//! as immediate [`Error`]s.
//!
//! # Example
//!
//! ```
//! use tagstream::prelude::*;
//!
//! let mut out = Vec::new();
//! let mut doc = Document::with_doctype(&mut out, Doctype::Html5);
//! doc.write_doctype()?;
//! doc.html()?.with(|html| {
//!     html.head_with(|head| {
//!         head.title_text("Hello")?;
//!         Ok(())
//!     })?;
//!     html.body_with(|body| {
//!         body.p_text("Hello, World!")?;
//!         Ok(())
//!     })?;
//!     Ok(())
//! })?;
//! drop(doc);
//! assert!(String::from_utf8(out).unwrap().starts_with("<!DOCTYPE html>"));
//! # Ok::<(), tagstream::Error>(())
//! ```
//!
//! The serialization mode and doctype are chosen at construction and gate
//! void-element syntax, boolean-attribute form, CDATA guards around
//! `<script>`/`<style>` bodies, and the legality of HTML5-only
//! attributes. A [`Document`] is single-threaded and synchronous; after a
//! sink error it must be discarded.

pub mod attribute;
pub mod builder;
pub mod model;
pub mod tag;

mod document;
pub use document::{Doctype, Document, Serialization};

mod element;
pub use element::{ElementWriter, OpenElement, Scope};

mod error;
pub use error::{Error, Result};

/// One-stop import for the fluent surface: the document types, the
/// factory traits, and the attribute mixins.
pub mod prelude {
    pub use crate::attribute::*;
    pub use crate::builder::*;
    pub use crate::document::{Doctype, Document, Serialization};
    pub use crate::element::{ElementWriter, OpenElement, Scope};
    pub use crate::error::Error;
}
