//! The tag inventory: one zero-sized type per element, classified as
//! normal, void, or raw-text.

use crate::document::{Doctype, Serialization};
use crate::error::{Error, Result};
use crate::model::{
    ColgroupContent, ContentModel, DescriptionListContent, FlowContent, HeadContent, HtmlContent,
    ListContent, OptgroupContent, PhrasingContent, RowContent, SelectContent, TableContent,
    TableSectionContent, TextOnlyContent,
};

mod sealed {
    pub trait Sealed {}
}

/// An HTML tag known to the writer.
pub trait Tag: sealed::Sealed {
    /// The tag name as written in markup.
    const NAME: &'static str;

    /// Attributes implied by the document configuration, written right
    /// after the tag name and registered for duplicate detection.
    #[doc(hidden)]
    fn implied_attrs(
        _doctype: Doctype,
        _serialization: Serialization,
    ) -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Validate the written-attribute set when the element reaches a
    /// terminal action.
    #[doc(hidden)]
    fn close_check(_written: &[&'static str]) -> Result<()> {
        Ok(())
    }
}

/// A tag with a start tag, an end tag, and a typed body position.
pub trait NormalTag: Tag {
    /// The content model of this element's body.
    type Body: ContentModel;
}

/// A tag with no end tag and no body.
pub trait VoidTag: Tag {}

/// A tag whose body is opaque text rather than markup.
pub trait RawTextTag: Tag {
    /// Guard written before the body under XML serialization.
    const CDATA_OPEN: &'static str;
    /// Guard written after the body under XML serialization.
    const CDATA_CLOSE: &'static str;

    /// The `type` attribute implied when the caller sets none.
    #[doc(hidden)]
    fn implied_type(doctype: Doctype) -> Option<&'static str>;
}

macro_rules! normal_tags {
    ($( $name:ident = $tag:literal => $body:ident; )*) => {
        $(
            #[doc = concat!("The `<", $tag, ">` element.")]
            #[derive(Debug, Clone, Copy)]
            pub struct $name;

            impl sealed::Sealed for $name {}
            impl Tag for $name {
                const NAME: &'static str = $tag;
            }
            impl NormalTag for $name {
                type Body = $body;
            }
        )*
    };
}

macro_rules! void_tags {
    ($( $name:ident = $tag:literal; )*) => {
        $(
            #[doc = concat!("The `<", $tag, ">` void element.")]
            #[derive(Debug, Clone, Copy)]
            pub struct $name;

            impl sealed::Sealed for $name {}
            impl Tag for $name {
                const NAME: &'static str = $tag;
            }
            impl VoidTag for $name {}
        )*
    };
}

normal_tags! {
    Head = "head" => HeadContent;
    Body = "body" => FlowContent;
    Div = "div" => FlowContent;
    Main = "main" => FlowContent;
    Header = "header" => FlowContent;
    Footer = "footer" => FlowContent;
    Nav = "nav" => FlowContent;
    Section = "section" => FlowContent;
    Article = "article" => FlowContent;
    Aside = "aside" => FlowContent;
    Blockquote = "blockquote" => FlowContent;
    Form = "form" => FlowContent;
    Li = "li" => FlowContent;
    Dt = "dt" => FlowContent;
    Dd = "dd" => FlowContent;
    Caption = "caption" => FlowContent;
    Td = "td" => FlowContent;
    Th = "th" => FlowContent;
    P = "p" => PhrasingContent;
    H1 = "h1" => PhrasingContent;
    H2 = "h2" => PhrasingContent;
    H3 = "h3" => PhrasingContent;
    H4 = "h4" => PhrasingContent;
    H5 = "h5" => PhrasingContent;
    H6 = "h6" => PhrasingContent;
    Pre = "pre" => PhrasingContent;
    A = "a" => PhrasingContent;
    Em = "em" => PhrasingContent;
    Strong = "strong" => PhrasingContent;
    Small = "small" => PhrasingContent;
    Span = "span" => PhrasingContent;
    Code = "code" => PhrasingContent;
    B = "b" => PhrasingContent;
    I = "i" => PhrasingContent;
    U = "u" => PhrasingContent;
    Q = "q" => PhrasingContent;
    Cite = "cite" => PhrasingContent;
    Dfn = "dfn" => PhrasingContent;
    Abbr = "abbr" => PhrasingContent;
    Kbd = "kbd" => PhrasingContent;
    Samp = "samp" => PhrasingContent;
    Var = "var" => PhrasingContent;
    Sub = "sub" => PhrasingContent;
    Sup = "sup" => PhrasingContent;
    Mark = "mark" => PhrasingContent;
    Time = "time" => PhrasingContent;
    Label = "label" => PhrasingContent;
    Button = "button" => PhrasingContent;
    Title = "title" => TextOnlyContent;
    Textarea = "textarea" => TextOnlyContent;
    Opt = "option" => TextOnlyContent;
    Table = "table" => TableContent;
    Thead = "thead" => TableSectionContent;
    Tbody = "tbody" => TableSectionContent;
    Tfoot = "tfoot" => TableSectionContent;
    Tr = "tr" => RowContent;
    Ol = "ol" => ListContent;
    Ul = "ul" => ListContent;
    Dl = "dl" => DescriptionListContent;
    Select = "select" => SelectContent;
    Optgroup = "optgroup" => OptgroupContent;
    Colgroup = "colgroup" => ColgroupContent;
}

void_tags! {
    Br = "br";
    Hr = "hr";
    Img = "img";
    Input = "input";
    Meta = "meta";
    Base = "base";
    Col = "col";
    Source = "source";
    Track = "track";
    Wbr = "wbr";
    Embed = "embed";
}

/// The `<html>` root element.
///
/// Under XML serialization it carries the XHTML namespace automatically.
#[derive(Debug, Clone, Copy)]
pub struct Html;

impl sealed::Sealed for Html {}
impl Tag for Html {
    const NAME: &'static str = "html";

    fn implied_attrs(
        _doctype: Doctype,
        serialization: Serialization,
    ) -> &'static [(&'static str, &'static str)] {
        match serialization {
            Serialization::Xml => &[("xmlns", "http://www.w3.org/1999/xhtml")],
            Serialization::Sgml => &[],
        }
    }
}
impl NormalTag for Html {
    type Body = HtmlContent;
}

/// The `<link>` void element.
///
/// Exactly one of `rel` or `itemprop` must be written before it closes.
#[derive(Debug, Clone, Copy)]
pub struct Link;

impl sealed::Sealed for Link {}
impl Tag for Link {
    const NAME: &'static str = "link";

    fn close_check(written: &[&'static str]) -> Result<()> {
        // the both-set case is caught when the second of the pair is written
        if !written.contains(&"rel") && !written.contains(&"itemprop") {
            return Err(Error::MissingAttribute {
                tag: Self::NAME,
                requirement: "one of `rel` or `itemprop`",
            });
        }
        Ok(())
    }
}
impl VoidTag for Link {}

/// The `<script>` element. Its body is opaque script text.
#[derive(Debug, Clone, Copy)]
pub struct Script;

impl sealed::Sealed for Script {}
impl Tag for Script {
    const NAME: &'static str = "script";
}
impl RawTextTag for Script {
    const CDATA_OPEN: &'static str = "//<![CDATA[";
    const CDATA_CLOSE: &'static str = "//]]>";

    fn implied_type(doctype: Doctype) -> Option<&'static str> {
        doctype.implied_script_type()
    }
}

/// The `<style>` element. Its body is opaque style text.
#[derive(Debug, Clone, Copy)]
pub struct Style;

impl sealed::Sealed for Style {}
impl Tag for Style {
    const NAME: &'static str = "style";
}
impl RawTextTag for Style {
    const CDATA_OPEN: &'static str = "/*<![CDATA[*/";
    const CDATA_CLOSE: &'static str = "/*]]>*/";

    fn implied_type(doctype: Doctype) -> Option<&'static str> {
        doctype.implied_style_type()
    }
}
