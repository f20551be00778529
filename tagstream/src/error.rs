use std::io;

use thiserror::Error;

use crate::document::Doctype;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An error raised while writing a document.
///
/// Every variant is fail-fast: by the time one is raised the sink may
/// already hold a partially written tag, so the document should be
/// discarded rather than resumed.
#[derive(Error, Debug)]
pub enum Error {
    /// The underlying sink failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// An attribute was written twice on one element instance.
    #[error("duplicate attribute `{attribute}` on <{tag}>")]
    DuplicateAttribute {
        /// Tag name of the element being written.
        tag: &'static str,
        /// The attribute that had already been written.
        attribute: &'static str,
    },

    /// Two attributes that may not be combined were both written.
    #[error("attribute `{second}` conflicts with `{first}` on <{tag}>")]
    ConflictingAttributes {
        /// Tag name of the element being written.
        tag: &'static str,
        /// The attribute written first.
        first: &'static str,
        /// The attribute whose write raised the conflict.
        second: &'static str,
    },

    /// An element reached a terminal action without a required attribute.
    #[error("<{tag}> requires {requirement}")]
    MissingAttribute {
        /// Tag name of the element being closed.
        tag: &'static str,
        /// What was missing.
        requirement: &'static str,
    },

    /// A construct needs a doctype the document was not created with.
    #[error("{what} requires {required}, but the document doctype is {actual}")]
    DoctypeMismatch {
        /// The construct that was requested.
        what: String,
        /// The doctype family it needs.
        required: &'static str,
        /// The doctype the document was created with.
        actual: Doctype,
    },

    /// The element is part of the grammar but not implemented.
    #[error("element <{tag}> is not supported yet")]
    Unsupported {
        /// Tag name of the unimplemented element.
        tag: &'static str,
    },

    /// A raw-text body contains a sequence that cannot be emitted safely
    /// inside its element.
    #[error("raw text for <{tag}> contains `{needle}`")]
    UnescapableRawText {
        /// Tag name of the raw-text element.
        tag: &'static str,
        /// The offending sequence.
        needle: String,
    },

    /// Comment text contains `--`, which HTML comments cannot carry.
    #[error("comment text may not contain `--`")]
    InvalidComment,
}
