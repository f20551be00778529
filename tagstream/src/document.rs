use std::fmt;
use std::io::Write;

use crate::error::Result;

/// The declared HTML version of a document.
///
/// The doctype gates which attributes and input types are legal and which
/// implied `type` values the raw-text elements carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Doctype {
    /// HTML 5.
    Html5,
    /// XHTML 5. Same declaration as HTML 5, XML serialization by default.
    Xhtml5,
    /// HTML 4.01 Transitional.
    Html4,
    /// XHTML 1.0 Transitional.
    Xhtml1,
}

impl Doctype {
    /// The full doctype declaration for this variant.
    pub fn declaration(self) -> &'static str {
        match self {
            Doctype::Html5 | Doctype::Xhtml5 => "<!DOCTYPE html>",
            Doctype::Html4 => {
                "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01 Transitional//EN\" \"http://www.w3.org/TR/html4/loose.dtd\">"
            }
            Doctype::Xhtml1 => {
                "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\">"
            }
        }
    }

    /// Whether this doctype admits HTML5-only attributes and input types.
    #[must_use]
    pub fn is_html5(self) -> bool {
        matches!(self, Doctype::Html5 | Doctype::Xhtml5)
    }

    /// The serialization this doctype uses unless one is given explicitly.
    pub fn default_serialization(self) -> Serialization {
        match self {
            Doctype::Html5 | Doctype::Html4 => Serialization::Sgml,
            Doctype::Xhtml5 | Doctype::Xhtml1 => Serialization::Xml,
        }
    }

    /// The `type` value implied for `<script>` when the caller sets none.
    pub(crate) fn implied_script_type(self) -> Option<&'static str> {
        if self.is_html5() {
            None
        } else {
            Some("text/javascript")
        }
    }

    /// The `type` value implied for `<style>` when the caller sets none.
    pub(crate) fn implied_style_type(self) -> Option<&'static str> {
        if self.is_html5() {
            None
        } else {
            Some("text/css")
        }
    }
}

impl fmt::Display for Doctype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Doctype::Html5 => "HTML 5",
            Doctype::Xhtml5 => "XHTML 5",
            Doctype::Html4 => "HTML 4.01",
            Doctype::Xhtml1 => "XHTML 1.0",
        })
    }
}

/// Whether markup follows SGML-like HTML syntax or strict XML syntax.
///
/// The serialization gates void-element close syntax, the written form of
/// boolean attributes, CDATA guards around raw-text bodies, and the XML
/// declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Serialization {
    /// SGML-like HTML syntax: `<br>`, minimized boolean attributes.
    Sgml,
    /// Strict XML syntax: `<br/>`, `disabled="disabled"`, CDATA guards.
    Xml,
}

impl Serialization {
    /// The close syntax for a void element.
    pub(crate) fn void_close(self) -> &'static str {
        match self {
            Serialization::Sgml => ">",
            Serialization::Xml => "/>",
        }
    }

    /// Returns `true` for [`Serialization::Xml`].
    #[must_use]
    pub fn is_xml(self) -> bool {
        matches!(self, Serialization::Xml)
    }
}

/// A single in-progress HTML or XHTML document.
///
/// Holds the output sink and all cursor state shared by the element
/// writers: indentation depth, the at-newline flag, and the auto-indent
/// toggle. Every byte the crate emits goes through this type so the
/// cursor state stays accurate.
///
/// A document is a content position itself (its model is
/// [`AnyContent`](crate::model::AnyContent)), so both fragments and full
/// pages start from here. It is single-threaded and strictly synchronous;
/// after a sink error it must not be reused.
pub struct Document<W: Write> {
    sink: W,
    doctype: Doctype,
    serialization: Serialization,
    depth: usize,
    at_newline: bool,
    indent: bool,
}

impl<W: Write> fmt::Debug for Document<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("doctype", &self.doctype)
            .field("serialization", &self.serialization)
            .field("depth", &self.depth)
            .field("indent", &self.indent)
            .finish_non_exhaustive()
    }
}

impl<W: Write> Document<W> {
    /// Create a document writing to `sink` with an explicit serialization.
    pub fn new(sink: W, doctype: Doctype, serialization: Serialization) -> Self {
        log::trace!("new document: doctype {doctype}, serialization {serialization:?}");
        Document {
            sink,
            doctype,
            serialization,
            depth: 0,
            at_newline: true,
            indent: true,
        }
    }

    /// Create a document using the doctype's default serialization.
    pub fn with_doctype(sink: W, doctype: Doctype) -> Self {
        Self::new(sink, doctype, doctype.default_serialization())
    }

    /// The doctype this document was created with.
    pub fn doctype(&self) -> Doctype {
        self.doctype
    }

    /// The serialization mode this document was created with.
    pub fn serialization(&self) -> Serialization {
        self.serialization
    }

    /// Enable or disable automatic indentation. On by default.
    pub fn set_indent(&mut self, indent: bool) -> &mut Self {
        self.indent = indent;
        self
    }

    /// Write the XML declaration.
    ///
    /// A no-op under SGML serialization, so one document-building function
    /// can serve both modes.
    pub fn xml_declaration(&mut self) -> Result<&mut Self> {
        if self.serialization.is_xml() {
            self.write_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n")?;
        }
        Ok(self)
    }

    /// Write the doctype declaration and a newline.
    pub fn write_doctype(&mut self) -> Result<&mut Self> {
        let decl = self.doctype.declaration();
        self.write_str(decl)?;
        self.write_str("\n")?;
        Ok(self)
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }

    /// Consume the document and return the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    pub(crate) fn write_str(&mut self, s: &str) -> Result<()> {
        if !s.is_empty() {
            self.sink.write_all(s.as_bytes())?;
            self.at_newline = s.ends_with('\n');
        }
        Ok(())
    }

    /// Move to a fresh line indented to the current depth. Does nothing
    /// when auto-indentation is off.
    pub(crate) fn begin_line(&mut self) -> Result<()> {
        if !self.indent {
            return Ok(());
        }
        if !self.at_newline {
            self.write_str("\n")?;
        }
        for _ in 0..self.depth {
            self.write_str("  ")?;
        }
        Ok(())
    }

    pub(crate) fn indent_deeper(&mut self) {
        self.depth += 1;
    }

    pub(crate) fn indent_shallower(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    fn sgml_doc(out: &mut Vec<u8>) -> Document<&mut Vec<u8>> {
        Document::new(out, Doctype::Html5, Serialization::Sgml)
    }

    #[test]
    fn paragraph_with_text_body() {
        let mut out = Vec::new();
        let mut doc = sgml_doc(&mut out);
        doc.p_text("hello").unwrap();
        drop(doc);
        assert_eq!(String::from_utf8(out).unwrap(), "<p>hello</p>");
    }

    #[test]
    fn void_element_close_syntax_per_serialization() {
        let mut out = Vec::new();
        let mut doc = sgml_doc(&mut out);
        doc.br().unwrap().close().unwrap();
        drop(doc);
        assert_eq!(String::from_utf8(out).unwrap(), "<br>");

        let mut out = Vec::new();
        let mut doc = Document::with_doctype(&mut out, Doctype::Xhtml5);
        doc.br().unwrap().close().unwrap();
        drop(doc);
        assert_eq!(String::from_utf8(out).unwrap(), "<br/>");
    }

    #[test]
    fn doctype_declarations() {
        assert_eq!(Doctype::Html5.declaration(), "<!DOCTYPE html>");
        assert!(Doctype::Html4.declaration().contains("HTML 4.01 Transitional"));
        assert!(Doctype::Xhtml1.declaration().contains("XHTML 1.0 Transitional"));
    }

    #[test]
    fn xml_declaration_is_noop_under_sgml() {
        let mut out = Vec::new();
        let mut doc = sgml_doc(&mut out);
        doc.xml_declaration().unwrap();
        drop(doc);
        assert!(out.is_empty());

        let mut out = Vec::new();
        let mut doc = Document::with_doctype(&mut out, Doctype::Xhtml1);
        doc.xml_declaration().unwrap();
        drop(doc);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"
        );
    }

    #[test]
    fn indents_successive_paragraphs_in_a_div() {
        let mut out = Vec::new();
        let mut doc = sgml_doc(&mut out);
        doc.div()
            .unwrap()
            .with(|div| {
                div.p_text("Hello")?;
                div.p_text("World")?;
                Ok(())
            })
            .unwrap();
        drop(doc);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<div>\n  <p>Hello</p>\n  <p>World</p>\n</div>"
        );
    }

    #[test]
    fn document_with_doctype_line() {
        let mut out = Vec::new();
        let mut doc = sgml_doc(&mut out);
        doc.write_doctype().unwrap();
        doc.html()
            .unwrap()
            .with(|html| {
                html.body_text("Hello")?;
                Ok(())
            })
            .unwrap();
        drop(doc);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<!DOCTYPE html>\n<html>\n  <body>Hello</body>\n</html>"
        );
    }

    #[test]
    fn indentation_can_be_disabled() {
        let mut out = Vec::new();
        let mut doc = sgml_doc(&mut out);
        doc.set_indent(false);
        doc.html()
            .unwrap()
            .with(|html| {
                html.body_text("Hello")?;
                Ok(())
            })
            .unwrap();
        drop(doc);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<html><body>Hello</body></html>"
        );
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        fn render() -> Vec<u8> {
            let mut out = Vec::new();
            let mut doc = Document::new(&mut out, Doctype::Html5, Serialization::Sgml);
            doc.write_doctype().unwrap();
            doc.html()
                .unwrap()
                .with(|html| {
                    html.body_with(|body| {
                        body.h1_text("Title")?;
                        body.p_text("Body")?;
                        Ok(())
                    })?;
                    Ok(())
                })
                .unwrap();
            drop(doc);
            out
        }
        assert_eq!(render(), render());
    }
}
