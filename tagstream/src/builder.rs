//! Content holders and the per-category element factories.
//!
//! A [`Container`] is anything that holds a content position: the
//! [`Document`] itself, a [`Scope`] handed to a body callback, or an
//! [`OpenElement`]. The factory traits below attach tag methods to a
//! container whenever its position model implements the matching context
//! trait from [`crate::model`], so the compiler decides which elements
//! can be opened where.
//!
//! Per tag there are up to three forms: the bare method opens the element
//! for attribute writing, the `_text` form writes an escaped text body
//! and closes immediately, and the `_with` form takes a body callback.
//! The shortcut forms return `&mut Self` so calls chain.

use std::io::Write;

use crate::document::Document;
use crate::element::{ElementWriter, OpenElement, Scope};
use crate::error::{Error, Result};
use crate::model::{
    ColumnContext, ContentModel, DescriptionListContext, FlowContext, HtmlContext, ListContext,
    MetadataContext, OptionsContext, PhrasingContext, RootContext, RowContext,
    ScriptSupportingContext, SelectContext, TableContext, TableSectionContext, TextContext,
};
use crate::tag::{
    Abbr, Article, Aside, Base, Blockquote, Body, Br, Button, Caption, Cite, Code, Col, Colgroup,
    Dd, Dfn, Div, Dl, Dt, Em, Embed, Footer, Form, Head, Header, Hr, Html, Img, Input, Kbd, Label,
    Li, Link, Main, Mark, Meta, Nav, NormalTag, Ol, Opt, Optgroup, Pre, Samp, Script, Section,
    Select, Small, Span, Strong, Style, Sub, Sup, Table, Tbody, Td, Textarea, Tfoot, Th, Thead,
    Time, Title, Tr, Ul, Var, Wbr, A, B, H1, H2, H3, H4, H5, H6, I, P, Q, U,
};

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Anything that holds a content position: the document itself, a body
/// scope, or an open element handle.
pub trait Container: sealed::Sealed {
    /// The underlying sink type.
    type Sink: Write;

    /// The content model of this position.
    type Model: ContentModel;

    /// The owning document. Plumbing for the factory methods, not part
    /// of the public contract.
    #[doc(hidden)]
    fn document(&mut self) -> &mut Document<Self::Sink>;

    /// Write an HTML comment at this position.
    fn comment(&mut self, text: &str) -> Result<&mut Self> {
        if text.contains("--") {
            return Err(Error::InvalidComment);
        }
        let doc = self.document();
        doc.begin_line()?;
        doc.write_str("<!-- ")?;
        doc.write_str(text)?;
        doc.write_str(" -->")?;
        Ok(self)
    }
}

impl<W: Write> sealed::Sealed for Document<W> {}
impl<W: Write> Container for Document<W> {
    type Sink = W;
    type Model = crate::model::AnyContent;

    fn document(&mut self) -> &mut Document<W> {
        self
    }
}

impl<'a, W: Write, M: ContentModel> sealed::Sealed for Scope<'a, W, M> {}
impl<'a, W: Write, M: ContentModel> Container for Scope<'a, W, M> {
    type Sink = W;
    type Model = M;

    fn document(&mut self) -> &mut Document<W> {
        self.doc_mut()
    }
}

impl<'a, W: Write, T: NormalTag> sealed::Sealed for OpenElement<'a, W, T> {}
impl<'a, W: Write, T: NormalTag> Container for OpenElement<'a, W, T> {
    type Sink = W;
    type Model = T::Body;

    fn document(&mut self) -> &mut Document<W> {
        self.doc_mut()
    }
}

/// Writing character data at positions that allow it.
pub trait TextContent: Container {
    /// Write escaped text at the current position, inline.
    fn text(&mut self, text: &str) -> Result<&mut Self> {
        let escaped = html_escape::encode_text(text);
        self.document().write_str(&escaped)?;
        Ok(self)
    }

    /// Write pre-rendered markup verbatim.
    ///
    /// The caller is responsible for its well-formedness.
    fn raw(&mut self, html: &str) -> Result<&mut Self> {
        self.document().write_str(html)?;
        Ok(self)
    }
}

impl<C: Container> TextContent for C where C::Model: TextContext {}

macro_rules! normal_factories {
    ($( $open:ident / $text:ident / $with:ident => $tag:ident : $name:literal; )*) => {
        $(
            #[doc = concat!("Open a `<", $name, ">` element for attribute writing.")]
            fn $open(&mut self) -> Result<ElementWriter<'_, Self::Sink, $tag>> {
                ElementWriter::start(self.document())
            }

            #[doc = concat!("Write a `<", $name, ">` element with an escaped text body and close it.")]
            fn $text(&mut self, body: &str) -> Result<&mut Self> {
                self.$open()?.text(body)?;
                Ok(self)
            }

            #[doc = concat!("Write a `<", $name, ">` element with a body supplied by `f` and close it.")]
            fn $with<F>(&mut self, f: F) -> Result<&mut Self>
            where
                F: FnOnce(&mut Scope<'_, Self::Sink, <$tag as NormalTag>::Body>) -> Result<()>,
            {
                self.$open()?.with(f)?;
                Ok(self)
            }
        )*
    };
}

macro_rules! void_factories {
    ($( $open:ident => $tag:ident : $name:literal; )*) => {
        $(
            #[doc = concat!("Open a `<", $name, ">` void element for attribute writing.")]
            fn $open(&mut self) -> Result<ElementWriter<'_, Self::Sink, $tag>> {
                ElementWriter::start(self.document())
            }
        )*
    };
}

macro_rules! raw_factories {
    ($( $open:ident => $tag:ident : $name:literal; )*) => {
        $(
            #[doc = concat!("Open a `<", $name, ">` element. Its body is opaque text, not markup.")]
            fn $open(&mut self) -> Result<ElementWriter<'_, Self::Sink, $tag>> {
                ElementWriter::start(self.document())
            }
        )*
    };
}

macro_rules! stub_factories {
    ($( $method:ident : $name:literal; )*) => {
        $(
            #[doc = concat!("The `<", $name, ">` element. Not implemented; always fails with [`Error::Unsupported`].")]
            fn $method(&mut self) -> Result<&mut Self> {
                Err(Error::Unsupported { tag: $name })
            }
        )*
    };
}

/// Factories available at the document root.
pub trait RootBuilders: Container {
    normal_factories! {
        html / html_text / html_with => Html: "html";
    }
}
impl<C: Container> RootBuilders for C where C::Model: RootContext {}

/// Factories directly inside `<html>`.
pub trait HtmlBuilders: Container {
    normal_factories! {
        head / head_text / head_with => Head: "head";
        body / body_text / body_with => Body: "body";
    }
}
impl<C: Container> HtmlBuilders for C where C::Model: HtmlContext {}

/// Metadata factories, inside `<head>`.
pub trait MetadataBuilders: Container {
    normal_factories! {
        title / title_text / title_with => Title: "title";
    }
    void_factories! {
        meta => Meta: "meta";
        link => Link: "link";
        base => Base: "base";
    }
    raw_factories! {
        style => Style: "style";
    }
}
impl<C: Container> MetadataBuilders for C where C::Model: MetadataContext {}

/// Script-supporting factories, available nearly everywhere.
pub trait ScriptSupportingBuilders: Container {
    raw_factories! {
        script => Script: "script";
    }
    stub_factories! {
        template: "template";
    }
}
impl<C: Container> ScriptSupportingBuilders for C where C::Model: ScriptSupportingContext {}

/// Flow-content factories.
pub trait FlowBuilders: Container {
    normal_factories! {
        div / div_text / div_with => Div: "div";
        p / p_text / p_with => P: "p";
        pre / pre_text / pre_with => Pre: "pre";
        blockquote / blockquote_text / blockquote_with => Blockquote: "blockquote";
        h1 / h1_text / h1_with => H1: "h1";
        h2 / h2_text / h2_with => H2: "h2";
        h3 / h3_text / h3_with => H3: "h3";
        h4 / h4_text / h4_with => H4: "h4";
        h5 / h5_text / h5_with => H5: "h5";
        h6 / h6_text / h6_with => H6: "h6";
        header / header_text / header_with => Header: "header";
        footer / footer_text / footer_with => Footer: "footer";
        main / main_text / main_with => Main: "main";
        nav / nav_text / nav_with => Nav: "nav";
        section / section_text / section_with => Section: "section";
        article / article_text / article_with => Article: "article";
        aside / aside_text / aside_with => Aside: "aside";
        table / table_text / table_with => Table: "table";
        form / form_text / form_with => Form: "form";
        ol / ol_text / ol_with => Ol: "ol";
        ul / ul_text / ul_with => Ul: "ul";
        dl / dl_text / dl_with => Dl: "dl";
    }
    void_factories! {
        hr => Hr: "hr";
    }
}
impl<C: Container> FlowBuilders for C where C::Model: FlowContext {}

/// Phrasing-content factories.
pub trait PhrasingBuilders: Container {
    normal_factories! {
        a / a_text / a_with => A: "a";
        em / em_text / em_with => Em: "em";
        strong / strong_text / strong_with => Strong: "strong";
        small / small_text / small_with => Small: "small";
        span / span_text / span_with => Span: "span";
        code / code_text / code_with => Code: "code";
        b / b_text / b_with => B: "b";
        i / i_text / i_with => I: "i";
        u / u_text / u_with => U: "u";
        q / q_text / q_with => Q: "q";
        cite / cite_text / cite_with => Cite: "cite";
        dfn / dfn_text / dfn_with => Dfn: "dfn";
        abbr / abbr_text / abbr_with => Abbr: "abbr";
        kbd / kbd_text / kbd_with => Kbd: "kbd";
        samp / samp_text / samp_with => Samp: "samp";
        var / var_text / var_with => Var: "var";
        sub / sub_text / sub_with => Sub: "sub";
        sup / sup_text / sup_with => Sup: "sup";
        mark / mark_text / mark_with => Mark: "mark";
        time / time_text / time_with => Time: "time";
        label / label_text / label_with => Label: "label";
        button / button_text / button_with => Button: "button";
        select / select_text / select_with => Select: "select";
        textarea / textarea_text / textarea_with => Textarea: "textarea";
    }
    void_factories! {
        br => Br: "br";
        wbr => Wbr: "wbr";
        img => Img: "img";
        input => Input: "input";
        embed => Embed: "embed";
    }
    stub_factories! {
        svg: "svg";
        math: "math";
    }
}
impl<C: Container> PhrasingBuilders for C where C::Model: PhrasingContext {}

/// Table-level factories, inside `<table>`.
pub trait TableBuilders: Container {
    normal_factories! {
        caption / caption_text / caption_with => Caption: "caption";
        colgroup / colgroup_text / colgroup_with => Colgroup: "colgroup";
        thead / thead_text / thead_with => Thead: "thead";
        tbody / tbody_text / tbody_with => Tbody: "tbody";
        tfoot / tfoot_text / tfoot_with => Tfoot: "tfoot";
    }
}
impl<C: Container> TableBuilders for C where C::Model: TableContext {}

/// Row factories, shared by `<table>` and its sections.
pub trait TableSectionBuilders: Container {
    normal_factories! {
        tr / tr_text / tr_with => Tr: "tr";
    }
}
impl<C: Container> TableSectionBuilders for C where C::Model: TableSectionContext {}

/// Cell factories, inside `<tr>`.
pub trait RowBuilders: Container {
    normal_factories! {
        td / td_text / td_with => Td: "td";
        th / th_text / th_with => Th: "th";
    }
}
impl<C: Container> RowBuilders for C where C::Model: RowContext {}

/// List-item factories, inside `<ol>` and `<ul>`.
pub trait ListBuilders: Container {
    normal_factories! {
        li / li_text / li_with => Li: "li";
    }
}
impl<C: Container> ListBuilders for C where C::Model: ListContext {}

/// Description-list factories, inside `<dl>`.
pub trait DescriptionListBuilders: Container {
    normal_factories! {
        dt / dt_text / dt_with => Dt: "dt";
        dd / dd_text / dd_with => Dd: "dd";
    }
}
impl<C: Container> DescriptionListBuilders for C where C::Model: DescriptionListContext {}

/// Factories inside `<select>` beyond bare options.
pub trait SelectBuilders: Container {
    normal_factories! {
        optgroup / optgroup_text / optgroup_with => Optgroup: "optgroup";
    }
}
impl<C: Container> SelectBuilders for C where C::Model: SelectContext {}

/// Option factories, shared by `<select>` and `<optgroup>`.
pub trait OptionsBuilders: Container {
    normal_factories! {
        option / option_text / option_with => Opt: "option";
    }
}
impl<C: Container> OptionsBuilders for C where C::Model: OptionsContext {}

/// Column factories, inside `<colgroup>`.
pub trait ColgroupBuilders: Container {
    void_factories! {
        col => Col: "col";
    }
}
impl<C: Container> ColgroupBuilders for C where C::Model: ColumnContext {}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn comments_are_written_with_guards() {
        let mut out = Vec::new();
        let mut doc = Document::new(&mut out, Doctype::Html5, Serialization::Sgml);
        doc.comment("generated").unwrap();
        assert!(matches!(
            doc.comment("a -- b").unwrap_err(),
            Error::InvalidComment
        ));
        drop(doc);
        assert_eq!(String::from_utf8(out).unwrap(), "<!-- generated -->");
    }

    #[test]
    fn stubbed_elements_fail_loudly() {
        let mut out = Vec::new();
        let mut doc = Document::new(&mut out, Doctype::Html5, Serialization::Sgml);
        assert!(matches!(
            doc.svg().unwrap_err(),
            Error::Unsupported { tag: "svg" }
        ));
        assert!(matches!(
            doc.template().unwrap_err(),
            Error::Unsupported { tag: "template" }
        ));
    }

    #[test]
    fn select_accepts_options_and_groups() {
        let mut out = Vec::new();
        let mut doc = Document::new(&mut out, Doctype::Html5, Serialization::Sgml);
        doc.select()
            .unwrap()
            .name("pet")
            .unwrap()
            .with(|sel| {
                sel.option_text("cat")?;
                sel.optgroup()?.label("dogs")?.with(|grp| {
                    grp.option_text("beagle")?;
                    Ok(())
                })?;
                Ok(())
            })
            .unwrap();
        drop(doc);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<select name=\"pet\">\n  <option>cat</option>\n  <optgroup label=\"dogs\">\n    <option>beagle</option>\n  </optgroup>\n</select>"
        );
    }

    #[test]
    fn table_rows_may_skip_the_section() {
        let mut out = Vec::new();
        let mut doc = Document::new(&mut out, Doctype::Html5, Serialization::Sgml);
        doc.table()
            .unwrap()
            .with(|table| {
                table.tr_with(|row| {
                    row.td_text("cell")?;
                    Ok(())
                })?;
                Ok(())
            })
            .unwrap();
        drop(doc);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<table>\n  <tr>\n    <td>cell</td>\n  </tr>\n</table>"
        );
    }
}
