//! The element writer: one open tag, its attributes, and its terminal
//! actions.

use std::io::Write;
use std::marker::PhantomData;

use smallvec::SmallVec;

use crate::attribute::AttrSink;
use crate::document::{Doctype, Document, Serialization};
use crate::error::{Error, Result};
use crate::model::ContentModel;
use crate::tag::{NormalTag, RawTextTag, Tag, VoidTag};

/// A single open, not yet closed element.
///
/// Created by the factory traits in [`crate::builder`]. Attribute calls
/// stream straight to the sink in call order; exactly one terminal action
/// consumes the writer. Which terminals exist depends on the tag kind:
/// [`empty`](Self::empty)/[`text`](Self::text)/[`with`](Self::with)/
/// [`open`](Self::open) for normal tags, [`close`](Self::close) for void
/// tags, and [`body`](Self::body)/[`end`](Self::end) for raw-text tags.
pub struct ElementWriter<'a, W: Write, T: Tag> {
    doc: &'a mut Document<W>,
    written: SmallVec<[&'static str; 8]>,
    _tag: PhantomData<T>,
}

impl<'a, W: Write, T: Tag> ElementWriter<'a, W, T> {
    pub(crate) fn start(doc: &'a mut Document<W>) -> Result<Self> {
        log::trace!("open <{}>", T::NAME);
        doc.begin_line()?;
        doc.write_str("<")?;
        doc.write_str(T::NAME)?;
        let mut this = ElementWriter {
            doc,
            written: SmallVec::new(),
            _tag: PhantomData,
        };
        for &(name, value) in T::implied_attrs(this.doc.doctype(), this.doc.serialization()) {
            this.write_attr(name, value)?;
        }
        Ok(this)
    }

    /// Whether a statically-named attribute has been written on this
    /// element instance.
    pub(crate) fn has_attr(&self, name: &'static str) -> bool {
        self.written.contains(&name)
    }

    fn check_dup(&self, name: &'static str) -> Result<()> {
        if self.has_attr(name) {
            return Err(Error::DuplicateAttribute {
                tag: T::NAME,
                attribute: name,
            });
        }
        Ok(())
    }

    fn write_attr(&mut self, name: &'static str, value: &str) -> Result<()> {
        self.written.push(name);
        self.doc.write_str(" ")?;
        self.doc.write_str(name)?;
        self.doc.write_str("=\"")?;
        let escaped = html_escape::encode_quoted_attribute(value);
        self.doc.write_str(&escaped)?;
        self.doc.write_str("\"")
    }

    fn seal(&mut self) -> Result<()> {
        T::close_check(&self.written)?;
        self.doc.write_str(">")
    }

    fn write_end_tag(doc: &mut Document<W>) -> Result<()> {
        doc.write_str("</")?;
        doc.write_str(T::NAME)?;
        doc.write_str(">")?;
        log::trace!("close <{}>", T::NAME);
        Ok(())
    }
}

impl<'a, W: Write, T: Tag> std::fmt::Debug for ElementWriter<'a, W, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementWriter")
            .field("tag", &T::NAME)
            .field("written", &self.written)
            .finish()
    }
}

impl<'a, W: Write, T: Tag> crate::attribute::sealed::Sealed for ElementWriter<'a, W, T> {}

impl<'a, W: Write, T: Tag> AttrSink for ElementWriter<'a, W, T> {
    type Tag = T;

    fn attr_text(&mut self, name: &'static str, value: &str) -> Result<()> {
        self.check_dup(name)?;
        self.write_attr(name, value)
    }

    fn attr_flag(&mut self, name: &'static str) -> Result<()> {
        self.check_dup(name)?;
        self.written.push(name);
        self.doc.write_str(" ")?;
        self.doc.write_str(name)?;
        if self.doc.serialization() == Serialization::Xml {
            self.doc.write_str("=\"")?;
            self.doc.write_str(name)?;
            self.doc.write_str("\"")?;
        }
        Ok(())
    }

    fn attr_int(&mut self, name: &'static str, value: i64) -> Result<()> {
        self.check_dup(name)?;
        self.write_attr(name, &value.to_string())
    }

    fn attr_token(&mut self, name: &'static str, value: &'static str) -> Result<()> {
        self.check_dup(name)?;
        self.write_attr(name, value)
    }

    fn attr_dynamic(&mut self, name: &str, value: &str) -> Result<()> {
        self.doc.write_str(" ")?;
        self.doc.write_str(name)?;
        self.doc.write_str("=\"")?;
        let escaped = html_escape::encode_quoted_attribute(value);
        self.doc.write_str(&escaped)?;
        self.doc.write_str("\"")
    }

    fn doctype(&self) -> Doctype {
        self.doc.doctype()
    }
}

impl<'a, W: Write, T: NormalTag> ElementWriter<'a, W, T> {
    /// Close with no body: `<div></div>`.
    pub fn empty(mut self) -> Result<()> {
        self.seal()?;
        Self::write_end_tag(self.doc)
    }

    /// Close with an escaped text body, written inline.
    pub fn text(mut self, body: &str) -> Result<()> {
        self.seal()?;
        let escaped = html_escape::encode_text(body);
        self.doc.write_str(&escaped)?;
        Self::write_end_tag(self.doc)
    }

    /// Supply a body via callback, then close.
    ///
    /// The callback receives the typed content position for this
    /// element's body, one indentation level deeper than the element
    /// itself; the closing tag returns to the element's own depth.
    pub fn with<F>(mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Scope<'_, W, T::Body>) -> Result<()>,
    {
        self.seal()?;
        let doc = self.doc;
        doc.indent_deeper();
        let result = {
            let mut scope = Scope::new(&mut *doc);
            f(&mut scope)
        };
        doc.indent_shallower();
        result?;
        doc.begin_line()?;
        Self::write_end_tag(doc)
    }

    /// Leave the element open and return a closeable handle for it.
    pub fn open(mut self) -> Result<OpenElement<'a, W, T>> {
        self.seal()?;
        let doc = self.doc;
        doc.indent_deeper();
        Ok(OpenElement {
            doc,
            closed: false,
            _tag: PhantomData,
        })
    }
}

impl<'a, W: Write, T: VoidTag> ElementWriter<'a, W, T> {
    /// Close the void element with the serialization's syntax.
    pub fn close(self) -> Result<()> {
        T::close_check(&self.written)?;
        let close = self.doc.serialization().void_close();
        self.doc.write_str(close)?;
        log::trace!("close <{}>", T::NAME);
        Ok(())
    }
}

impl<'a, W: Write, T: RawTextTag> ElementWriter<'a, W, T> {
    fn implied_type_attr(&mut self) -> Result<()> {
        if !self.has_attr("type") {
            if let Some(ty) = T::implied_type(self.doc.doctype()) {
                self.write_attr("type", ty)?;
            }
        }
        Ok(())
    }

    /// Write an opaque text body and close.
    ///
    /// Under XML serialization the body is wrapped in the tag's CDATA
    /// guard comments; under SGML it is written verbatim after a check
    /// that it cannot terminate the element early.
    pub fn body(mut self, body: &str) -> Result<()> {
        self.implied_type_attr()?;
        let needle = format!("</{}", T::NAME);
        if body.to_ascii_lowercase().contains(&needle) {
            return Err(Error::UnescapableRawText {
                tag: T::NAME,
                needle,
            });
        }
        let xml = self.doc.serialization().is_xml();
        if xml && body.contains("]]>") {
            return Err(Error::UnescapableRawText {
                tag: T::NAME,
                needle: "]]>".to_owned(),
            });
        }
        self.seal()?;
        if xml {
            self.doc.write_str(T::CDATA_OPEN)?;
            self.doc.write_str("\n")?;
            self.doc.write_str(body)?;
            self.doc.write_str("\n")?;
            self.doc.write_str(T::CDATA_CLOSE)?;
        } else {
            self.doc.write_str(body)?;
        }
        Self::write_end_tag(self.doc)
    }

    /// Close with no body.
    pub fn end(mut self) -> Result<()> {
        self.implied_type_attr()?;
        self.seal()?;
        Self::write_end_tag(self.doc)
    }
}

/// A typed content position inside an open element's body.
///
/// Handed to [`ElementWriter::with`] callbacks; its factory surface is
/// determined by the model parameter `M` through the traits in
/// [`crate::builder`].
pub struct Scope<'a, W: Write, M: ContentModel> {
    doc: &'a mut Document<W>,
    _model: PhantomData<M>,
}

impl<'a, W: Write, M: ContentModel> Scope<'a, W, M> {
    pub(crate) fn new(doc: &'a mut Document<W>) -> Self {
        Scope {
            doc,
            _model: PhantomData,
        }
    }

    pub(crate) fn doc_mut(&mut self) -> &mut Document<W> {
        &mut *self.doc
    }
}

/// An element left open by [`ElementWriter::open`].
///
/// The scoped-resource form of a body: the handle is a content position
/// for the element's body model, and [`end`](Self::end) writes the
/// closing tag. If the handle is dropped without `end`, the closing tag
/// is written best-effort and a sink failure is logged instead of
/// reported, so explicit `end` is preferred.
pub struct OpenElement<'a, W: Write, T: NormalTag> {
    doc: &'a mut Document<W>,
    closed: bool,
    _tag: PhantomData<T>,
}

impl<'a, W: Write, T: NormalTag> std::fmt::Debug for OpenElement<'a, W, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenElement")
            .field("tag", &T::NAME)
            .field("closed", &self.closed)
            .finish()
    }
}

impl<'a, W: Write, T: NormalTag> OpenElement<'a, W, T> {
    pub(crate) fn doc_mut(&mut self) -> &mut Document<W> {
        &mut *self.doc
    }

    fn close_now(doc: &mut Document<W>) -> Result<()> {
        doc.indent_shallower();
        doc.begin_line()?;
        doc.write_str("</")?;
        doc.write_str(T::NAME)?;
        doc.write_str(">")?;
        log::trace!("close <{}>", T::NAME);
        Ok(())
    }

    /// Write the closing tag.
    pub fn end(mut self) -> Result<()> {
        self.closed = true;
        Self::close_now(self.doc)
    }
}

impl<'a, W: Write, T: NormalTag> Drop for OpenElement<'a, W, T> {
    fn drop(&mut self) {
        if !self.closed {
            if let Err(e) = Self::close_now(self.doc) {
                log::warn!("failed to close <{}> on drop: {e}", T::NAME);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn open_element_ends_explicitly() {
        let mut out = Vec::new();
        let mut doc = Document::new(&mut out, Doctype::Html5, Serialization::Sgml);
        let mut ul = doc.ul().unwrap().open().unwrap();
        ul.li_text("one").unwrap();
        ul.li_text("two").unwrap();
        ul.end().unwrap();
        drop(doc);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<ul>\n  <li>one</li>\n  <li>two</li>\n</ul>"
        );
    }

    #[test]
    fn open_element_closes_on_drop() {
        let mut out = Vec::new();
        let mut doc = Document::new(&mut out, Doctype::Html5, Serialization::Sgml);
        {
            let mut div = doc.div().unwrap().open().unwrap();
            div.p_text("inside").unwrap();
        }
        drop(doc);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<div>\n  <p>inside</p>\n</div>"
        );
    }

    #[test]
    fn script_body_is_cdata_guarded_under_xml() {
        let mut out = Vec::new();
        let mut doc = Document::with_doctype(&mut out, Doctype::Xhtml5);
        doc.script().unwrap().body("alert(1);").unwrap();
        drop(doc);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<script>//<![CDATA[\nalert(1);\n//]]></script>"
        );
    }

    #[test]
    fn script_body_is_verbatim_under_sgml() {
        let mut out = Vec::new();
        let mut doc = Document::new(&mut out, Doctype::Html5, Serialization::Sgml);
        doc.script().unwrap().body("alert(1);").unwrap();
        drop(doc);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<script>alert(1);</script>"
        );
    }

    #[test]
    fn legacy_doctype_implies_script_type() {
        let mut out = Vec::new();
        let mut doc = Document::new(&mut out, Doctype::Html4, Serialization::Sgml);
        doc.script().unwrap().body("x();").unwrap();
        drop(doc);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<script type=\"text/javascript\">x();</script>"
        );
    }

    #[test]
    fn explicit_type_suppresses_the_implied_one() {
        let mut out = Vec::new();
        let mut doc = Document::new(&mut out, Doctype::Html4, Serialization::Sgml);
        doc.script()
            .unwrap()
            .type_("module")
            .unwrap()
            .body("x();")
            .unwrap();
        drop(doc);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<script type=\"module\">x();</script>"
        );
    }

    #[test]
    fn style_uses_comment_style_cdata_guard() {
        let mut out = Vec::new();
        let mut doc = Document::with_doctype(&mut out, Doctype::Xhtml1);
        doc.style().unwrap().body("p { color: red }").unwrap();
        drop(doc);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<style type=\"text/css\">/*<![CDATA[*/\np { color: red }\n/*]]>*/</style>"
        );
    }

    #[test]
    fn raw_body_may_not_contain_its_own_close_tag() {
        let mut out = Vec::new();
        let mut doc = Document::new(&mut out, Doctype::Html5, Serialization::Sgml);
        let err = doc
            .script()
            .unwrap()
            .body("var s = \"</script>\";")
            .unwrap_err();
        assert!(matches!(err, Error::UnescapableRawText { tag: "script", .. }));
    }
}
