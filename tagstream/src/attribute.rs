//! Attribute mixins, grouped by value family.
//!
//! Each attribute is an extension trait over the sealed [`AttrSink`]
//! (implemented by [`ElementWriter`](crate::ElementWriter)), attached per
//! tag by a `Supports*` capability marker. The families mirror how the
//! values are written: text and URL values are escaped, boolean
//! attributes are minimized under SGML and expanded under XML, integer
//! values are formatted, and enum attributes carry a closed set of token
//! values. HTML5-only attributes and input types check the document
//! doctype and fail with [`Error::DoctypeMismatch`] under a legacy one.

use crate::document::Doctype;
use crate::error::{Error, Result};
use crate::tag::{
    Base, Blockquote, Button, Col, Colgroup, Embed, Form, Img, Input, Label, Link, Meta, Opt,
    Optgroup, Q, Script, Select, Source, Style, Tag, Td, Textarea, Th, Time, Track, A,
};
use crate::ElementWriter;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// The sink side of an element writer: where the attribute mixins write.
///
/// Implemented only by [`ElementWriter`](crate::ElementWriter); the mixin
/// traits below attach their methods to it per tag capability. The
/// `attr_*` methods are plumbing, not part of the public contract.
pub trait AttrSink: Sized + sealed::Sealed {
    /// The tag this sink is writing attributes for.
    type Tag: Tag;

    /// Write a text-valued attribute, escaping the value.
    #[doc(hidden)]
    fn attr_text(&mut self, name: &'static str, value: &str) -> Result<()>;

    /// Write a boolean attribute in the serialization's form.
    #[doc(hidden)]
    fn attr_flag(&mut self, name: &'static str) -> Result<()>;

    /// Write an integer-valued attribute.
    #[doc(hidden)]
    fn attr_int(&mut self, name: &'static str, value: i64) -> Result<()>;

    /// Write an attribute whose value is a fixed token.
    #[doc(hidden)]
    fn attr_token(&mut self, name: &'static str, value: &'static str) -> Result<()>;

    /// Write an attribute with a caller-supplied name, bypassing
    /// duplicate detection.
    #[doc(hidden)]
    fn attr_dynamic(&mut self, name: &str, value: &str) -> Result<()>;

    /// The doctype of the owning document.
    #[doc(hidden)]
    fn doctype(&self) -> Doctype;

    /// Fail unless the document doctype is HTML 5.
    #[doc(hidden)]
    fn require_html5(&self, what: &str) -> Result<()> {
        if self.doctype().is_html5() {
            Ok(())
        } else {
            Err(Error::DoctypeMismatch {
                what: what.to_owned(),
                required: "an HTML 5 doctype",
                actual: self.doctype(),
            })
        }
    }
}

/// Attributes every element accepts.
pub trait GlobalAttributes: AttrSink {
    /// Write the `id` attribute.
    fn id(mut self, value: &str) -> Result<Self> {
        self.attr_text("id", value)?;
        Ok(self)
    }

    /// Write the `class` attribute.
    fn class(mut self, value: &str) -> Result<Self> {
        self.attr_text("class", value)?;
        Ok(self)
    }

    /// Write the `style` attribute.
    fn style(mut self, value: &str) -> Result<Self> {
        self.attr_text("style", value)?;
        Ok(self)
    }

    /// Write the `title` attribute.
    fn title(mut self, value: &str) -> Result<Self> {
        self.attr_text("title", value)?;
        Ok(self)
    }

    /// Write the `lang` attribute.
    fn lang(mut self, value: &str) -> Result<Self> {
        self.attr_text("lang", value)?;
        Ok(self)
    }

    /// Write the `dir` attribute.
    fn dir(mut self, value: Dir) -> Result<Self> {
        self.attr_token("dir", value.as_str())?;
        Ok(self)
    }

    /// Write the boolean `hidden` attribute.
    fn hidden(mut self) -> Result<Self> {
        self.attr_flag("hidden")?;
        Ok(self)
    }

    /// Write the `tabindex` attribute.
    fn tabindex(mut self, value: i32) -> Result<Self> {
        self.attr_int("tabindex", i64::from(value))?;
        Ok(self)
    }

    /// Write the `accesskey` attribute.
    fn accesskey(mut self, value: &str) -> Result<Self> {
        self.attr_text("accesskey", value)?;
        Ok(self)
    }

    /// Write a `data-*` attribute.
    ///
    /// Dynamic names are exempt from duplicate detection; the caller is
    /// responsible for the name being a valid attribute name.
    fn data(mut self, name: &str, value: &str) -> Result<Self> {
        let full = format!("data-{name}");
        self.attr_dynamic(&full, value)?;
        Ok(self)
    }

    /// Write an arbitrary attribute.
    ///
    /// Escape hatch for names the typed surface does not cover; exempt
    /// from duplicate detection.
    fn attr(mut self, name: &str, value: &str) -> Result<Self> {
        self.attr_dynamic(name, value)?;
        Ok(self)
    }
}

impl<S: AttrSink> GlobalAttributes for S {}

macro_rules! text_attributes {
    ($( $trait_name:ident, $marker:ident, $method:ident => $attr:literal; )*) => {
        $(
            #[doc = concat!("Tags that take the `", $attr, "` attribute.")]
            pub trait $marker: Tag {}

            #[doc = concat!("Writes the text-valued `", $attr, "` attribute.")]
            pub trait $trait_name: AttrSink {
                #[doc = concat!("Write the `", $attr, "` attribute.")]
                fn $method(mut self, value: &str) -> Result<Self> {
                    self.attr_text($attr, value)?;
                    Ok(self)
                }
            }

            impl<S: AttrSink> $trait_name for S where S::Tag: $marker {}
        )*
    };
}

macro_rules! text_attributes_html5 {
    ($( $trait_name:ident, $marker:ident, $method:ident => $attr:literal; )*) => {
        $(
            #[doc = concat!("Tags that take the `", $attr, "` attribute.")]
            pub trait $marker: Tag {}

            #[doc = concat!("Writes the HTML5-only text-valued `", $attr, "` attribute.")]
            pub trait $trait_name: AttrSink {
                #[doc = concat!("Write the `", $attr, "` attribute. Fails under a legacy doctype.")]
                fn $method(mut self, value: &str) -> Result<Self> {
                    self.require_html5(concat!("attribute `", $attr, "`"))?;
                    self.attr_text($attr, value)?;
                    Ok(self)
                }
            }

            impl<S: AttrSink> $trait_name for S where S::Tag: $marker {}
        )*
    };
}

macro_rules! url_attributes {
    ($( $trait_name:ident, $marker:ident, $method:ident => $attr:literal; )*) => {
        $(
            #[doc = concat!("Tags that take the `", $attr, "` attribute.")]
            pub trait $marker: Tag {}

            #[doc = concat!("Writes the URL-valued `", $attr, "` attribute.")]
            pub trait $trait_name: AttrSink {
                #[doc = concat!("Write the `", $attr, "` attribute.")]
                fn $method(mut self, value: &str) -> Result<Self> {
                    self.attr_text($attr, value)?;
                    Ok(self)
                }
            }

            impl<S: AttrSink> $trait_name for S where S::Tag: $marker {}
        )*
    };
}

macro_rules! boolean_attributes {
    ($( $trait_name:ident, $marker:ident, $method:ident => $attr:literal; )*) => {
        $(
            #[doc = concat!("Tags that take the boolean `", $attr, "` attribute.")]
            pub trait $marker: Tag {}

            #[doc = concat!("Writes the boolean `", $attr, "` attribute.")]
            pub trait $trait_name: AttrSink {
                #[doc = concat!("Write the boolean `", $attr, "` attribute.")]
                fn $method(mut self) -> Result<Self> {
                    self.attr_flag($attr)?;
                    Ok(self)
                }
            }

            impl<S: AttrSink> $trait_name for S where S::Tag: $marker {}
        )*
    };
}

macro_rules! boolean_attributes_html5 {
    ($( $trait_name:ident, $marker:ident, $method:ident => $attr:literal; )*) => {
        $(
            #[doc = concat!("Tags that take the boolean `", $attr, "` attribute.")]
            pub trait $marker: Tag {}

            #[doc = concat!("Writes the HTML5-only boolean `", $attr, "` attribute.")]
            pub trait $trait_name: AttrSink {
                #[doc = concat!("Write the boolean `", $attr, "` attribute. Fails under a legacy doctype.")]
                fn $method(mut self) -> Result<Self> {
                    self.require_html5(concat!("attribute `", $attr, "`"))?;
                    self.attr_flag($attr)?;
                    Ok(self)
                }
            }

            impl<S: AttrSink> $trait_name for S where S::Tag: $marker {}
        )*
    };
}

macro_rules! int_attributes {
    ($( $trait_name:ident, $marker:ident, $method:ident => $attr:literal; )*) => {
        $(
            #[doc = concat!("Tags that take the integer-valued `", $attr, "` attribute.")]
            pub trait $marker: Tag {}

            #[doc = concat!("Writes the integer-valued `", $attr, "` attribute.")]
            pub trait $trait_name: AttrSink {
                #[doc = concat!("Write the `", $attr, "` attribute.")]
                fn $method(mut self, value: u32) -> Result<Self> {
                    self.attr_int($attr, i64::from(value))?;
                    Ok(self)
                }
            }

            impl<S: AttrSink> $trait_name for S where S::Tag: $marker {}
        )*
    };
}

macro_rules! supports {
    ($( $marker:ident : $($tag:ident),* ; )*) => {
        $( $( impl $marker for $tag {} )* )*
    };
}

text_attributes! {
    AltAttribute, SupportsAlt, alt => "alt";
    RelAttribute, SupportsRel, rel => "rel";
    HreflangAttribute, SupportsHreflang, hreflang => "hreflang";
    NameAttribute, SupportsName, name => "name";
    ValueAttribute, SupportsValue, value => "value";
    ContentAttribute, SupportsContent, content => "content";
    CharsetAttribute, SupportsCharset, charset => "charset";
    HttpEquivAttribute, SupportsHttpEquiv, http_equiv => "http-equiv";
    MediaAttribute, SupportsMedia, media => "media";
    TypeAttribute, SupportsType, type_ => "type";
    DatetimeAttribute, SupportsDatetime, datetime => "datetime";
    ForAttribute, SupportsFor, for_ => "for";
    LabelAttribute, SupportsLabel, label => "label";
    EnctypeAttribute, SupportsEnctype, enctype => "enctype";
    SrcsetAttribute, SupportsSrcset, srcset => "srcset";
    SizesAttribute, SupportsSizes, sizes => "sizes";
    MinAttribute, SupportsMin, min => "min";
    MaxAttribute, SupportsMax, max => "max";
    StepAttribute, SupportsStep, step => "step";
    DownloadAttribute, SupportsDownload, download => "download";
    HeadersAttribute, SupportsHeaders, headers => "headers";
}

text_attributes_html5! {
    PlaceholderAttribute, SupportsPlaceholder, placeholder => "placeholder";
}

url_attributes! {
    HrefAttribute, SupportsHref, href => "href";
    SrcAttribute, SupportsSrc, src => "src";
    ActionAttribute, SupportsAction, action => "action";
    CiteAttribute, SupportsCite, cite => "cite";
}

boolean_attributes! {
    DisabledAttribute, SupportsDisabled, disabled => "disabled";
    CheckedAttribute, SupportsChecked, checked => "checked";
    SelectedAttribute, SupportsSelected, selected => "selected";
    ReadonlyAttribute, SupportsReadonly, readonly => "readonly";
    MultipleAttribute, SupportsMultiple, multiple => "multiple";
    DeferAttribute, SupportsDefer, defer => "defer";
}

boolean_attributes_html5! {
    RequiredAttribute, SupportsRequired, required => "required";
    AutofocusAttribute, SupportsAutofocus, autofocus => "autofocus";
    NovalidateAttribute, SupportsNovalidate, novalidate => "novalidate";
    AsyncAttribute, SupportsAsync, async_ => "async";
}

int_attributes! {
    WidthAttribute, SupportsWidth, width => "width";
    HeightAttribute, SupportsHeight, height => "height";
    ColspanAttribute, SupportsColspan, colspan => "colspan";
    RowspanAttribute, SupportsRowspan, rowspan => "rowspan";
    SpanAttribute, SupportsSpan, span => "span";
    SizeAttribute, SupportsSize, size => "size";
    MaxlengthAttribute, SupportsMaxlength, maxlength => "maxlength";
    RowsAttribute, SupportsRows, rows => "rows";
    ColsAttribute, SupportsCols, cols => "cols";
}

supports! {
    SupportsAlt: Img, Input;
    SupportsRel: A;
    SupportsHreflang: A, Link;
    SupportsName: Input, Select, Textarea, Button, Form, Meta;
    SupportsValue: Input, Button, Opt;
    SupportsContent: Meta;
    SupportsCharset: Meta;
    SupportsHttpEquiv: Meta;
    SupportsMedia: Link, Style, Source;
    SupportsType: Link, Script, Style, Source, Embed;
    SupportsDatetime: Time;
    SupportsFor: Label;
    SupportsLabel: Opt, Optgroup, Track;
    SupportsEnctype: Form;
    SupportsSrcset: Img, Source;
    SupportsSizes: Img, Link, Source;
    SupportsMin: Input;
    SupportsMax: Input;
    SupportsStep: Input;
    SupportsDownload: A;
    SupportsHeaders: Td, Th;
    SupportsPlaceholder: Input, Textarea;
    SupportsHref: A, Link, Base;
    SupportsSrc: Img, Input, Script, Source, Track, Embed;
    SupportsAction: Form;
    SupportsCite: Blockquote, Q;
    SupportsDisabled: Input, Select, Textarea, Button, Opt, Optgroup;
    SupportsChecked: Input;
    SupportsSelected: Opt;
    SupportsReadonly: Input, Textarea;
    SupportsMultiple: Input, Select;
    SupportsDefer: Script;
    SupportsRequired: Input, Select, Textarea;
    SupportsAutofocus: Input, Select, Textarea, Button;
    SupportsNovalidate: Form;
    SupportsAsync: Script;
    SupportsWidth: Img, Embed;
    SupportsHeight: Img, Embed;
    SupportsColspan: Td, Th;
    SupportsRowspan: Td, Th;
    SupportsSpan: Col, Colgroup;
    SupportsSize: Input, Select;
    SupportsMaxlength: Input, Textarea;
    SupportsRows: Textarea;
    SupportsCols: Textarea;
}

/// Text directionality for the global `dir` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    /// Left to right.
    Ltr,
    /// Right to left.
    Rtl,
    /// Determined by the content.
    Auto,
}

impl Dir {
    /// The attribute value for this variant.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Ltr => "ltr",
            Dir::Rtl => "rtl",
            Dir::Auto => "auto",
        }
    }
}

/// Browsing-context keywords for the `target` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A new browsing context (`_blank`).
    Blank,
    /// The current browsing context (`_self`).
    SelfFrame,
    /// The parent browsing context (`_parent`).
    Parent,
    /// The top-level browsing context (`_top`).
    Top,
}

impl Target {
    /// The attribute value for this variant.
    pub fn as_str(self) -> &'static str {
        match self {
            Target::Blank => "_blank",
            Target::SelfFrame => "_self",
            Target::Parent => "_parent",
            Target::Top => "_top",
        }
    }
}

/// Values of the `type` attribute on `<button>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonType {
    /// Submits the form (`submit`).
    Submit,
    /// Resets the form (`reset`).
    Reset,
    /// No default behavior (`button`).
    Button,
}

impl ButtonType {
    /// The attribute value for this variant.
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
            ButtonType::Button => "button",
        }
    }
}

/// Values of the `method` attribute on `<form>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMethod {
    /// `get`.
    Get,
    /// `post`.
    Post,
}

impl FormMethod {
    /// The attribute value for this variant.
    pub fn as_str(self) -> &'static str {
        match self {
            FormMethod::Get => "get",
            FormMethod::Post => "post",
        }
    }
}

/// Values of the `loading` attribute on `<img>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loading {
    /// Load immediately (`eager`).
    Eager,
    /// Defer until near the viewport (`lazy`).
    Lazy,
}

impl Loading {
    /// The attribute value for this variant.
    pub fn as_str(self) -> &'static str {
        match self {
            Loading::Eager => "eager",
            Loading::Lazy => "lazy",
        }
    }
}

/// Values of the `type` attribute on `<input>`.
///
/// Variants marked HTML5-only fail under a legacy doctype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    /// `text`.
    Text,
    /// `hidden`.
    Hidden,
    /// `password`.
    Password,
    /// `checkbox`.
    Checkbox,
    /// `radio`.
    Radio,
    /// `file`.
    File,
    /// `submit`.
    Submit,
    /// `image`.
    Image,
    /// `reset`.
    Reset,
    /// `button`.
    Button,
    /// `color`. HTML5-only.
    Color,
    /// `date`. HTML5-only.
    Date,
    /// `datetime-local`. HTML5-only.
    DatetimeLocal,
    /// `email`. HTML5-only.
    Email,
    /// `month`. HTML5-only.
    Month,
    /// `number`. HTML5-only.
    Number,
    /// `range`. HTML5-only.
    Range,
    /// `search`. HTML5-only.
    Search,
    /// `tel`. HTML5-only.
    Tel,
    /// `time`. HTML5-only.
    Time,
    /// `url`. HTML5-only.
    Url,
    /// `week`. HTML5-only.
    Week,
}

impl InputType {
    /// The attribute value for this variant.
    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Hidden => "hidden",
            InputType::Password => "password",
            InputType::Checkbox => "checkbox",
            InputType::Radio => "radio",
            InputType::File => "file",
            InputType::Submit => "submit",
            InputType::Image => "image",
            InputType::Reset => "reset",
            InputType::Button => "button",
            InputType::Color => "color",
            InputType::Date => "date",
            InputType::DatetimeLocal => "datetime-local",
            InputType::Email => "email",
            InputType::Month => "month",
            InputType::Number => "number",
            InputType::Range => "range",
            InputType::Search => "search",
            InputType::Tel => "tel",
            InputType::Time => "time",
            InputType::Url => "url",
            InputType::Week => "week",
        }
    }

    /// Whether this input type exists only under an HTML 5 doctype.
    #[must_use]
    pub fn is_html5_only(self) -> bool {
        matches!(
            self,
            InputType::Color
                | InputType::Date
                | InputType::DatetimeLocal
                | InputType::Email
                | InputType::Month
                | InputType::Number
                | InputType::Range
                | InputType::Search
                | InputType::Tel
                | InputType::Time
                | InputType::Url
                | InputType::Week
        )
    }
}

/// Tags that take the `target` attribute.
pub trait SupportsTarget: Tag {}

/// Writes the `target` attribute.
pub trait TargetAttribute: AttrSink {
    /// Write the `target` attribute.
    fn target(mut self, value: Target) -> Result<Self> {
        self.attr_token("target", value.as_str())?;
        Ok(self)
    }
}

impl<S: AttrSink> TargetAttribute for S where S::Tag: SupportsTarget {}

/// Tags that take the enumerated `type` attribute of `<input>`.
pub trait SupportsInputType: Tag {}

/// Writes the `type` attribute of `<input>`.
pub trait InputTypeAttribute: AttrSink {
    /// Write the `type` attribute.
    ///
    /// HTML5-only input types fail under a legacy doctype.
    fn input_type(mut self, value: InputType) -> Result<Self> {
        if value.is_html5_only() {
            self.require_html5(&format!("input type \"{}\"", value.as_str()))?;
        }
        self.attr_token("type", value.as_str())?;
        Ok(self)
    }
}

impl<S: AttrSink> InputTypeAttribute for S where S::Tag: SupportsInputType {}

/// Tags that take the enumerated `type` attribute of `<button>`.
pub trait SupportsButtonType: Tag {}

/// Writes the `type` attribute of `<button>`.
pub trait ButtonTypeAttribute: AttrSink {
    /// Write the `type` attribute.
    fn button_type(mut self, value: ButtonType) -> Result<Self> {
        self.attr_token("type", value.as_str())?;
        Ok(self)
    }
}

impl<S: AttrSink> ButtonTypeAttribute for S where S::Tag: SupportsButtonType {}

/// Tags that take the `method` attribute.
pub trait SupportsFormMethod: Tag {}

/// Writes the `method` attribute.
pub trait FormMethodAttribute: AttrSink {
    /// Write the `method` attribute.
    fn method(mut self, value: FormMethod) -> Result<Self> {
        self.attr_token("method", value.as_str())?;
        Ok(self)
    }
}

impl<S: AttrSink> FormMethodAttribute for S where S::Tag: SupportsFormMethod {}

/// Tags that take the `loading` attribute.
pub trait SupportsLoading: Tag {}

/// Writes the `loading` attribute.
pub trait LoadingAttribute: AttrSink {
    /// Write the `loading` attribute. Fails under a legacy doctype.
    fn loading(mut self, value: Loading) -> Result<Self> {
        self.require_html5("attribute `loading`")?;
        self.attr_token("loading", value.as_str())?;
        Ok(self)
    }
}

impl<S: AttrSink> LoadingAttribute for S where S::Tag: SupportsLoading {}

supports! {
    SupportsTarget: A, Base, Form;
    SupportsInputType: Input;
    SupportsButtonType: Button;
    SupportsFormMethod: Form;
    SupportsLoading: Img;
}

impl<'a, W: std::io::Write> ElementWriter<'a, W, Link> {
    /// Write the `rel` attribute.
    ///
    /// Conflicts with `itemprop`: a `<link>` carries exactly one of the
    /// two.
    pub fn rel(mut self, value: &str) -> Result<Self> {
        if self.has_attr("itemprop") {
            return Err(Error::ConflictingAttributes {
                tag: Link::NAME,
                first: "itemprop",
                second: "rel",
            });
        }
        self.attr_text("rel", value)?;
        Ok(self)
    }

    /// Write the `itemprop` attribute.
    ///
    /// Conflicts with `rel`: a `<link>` carries exactly one of the two.
    pub fn itemprop(mut self, value: &str) -> Result<Self> {
        if self.has_attr("rel") {
            return Err(Error::ConflictingAttributes {
                tag: Link::NAME,
                first: "rel",
                second: "itemprop",
            });
        }
        self.attr_text("itemprop", value)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn html5_sgml(out: &mut Vec<u8>) -> Document<&mut Vec<u8>> {
        Document::new(out, Doctype::Html5, Serialization::Sgml)
    }

    #[test]
    fn duplicate_attribute_is_rejected() {
        let mut out = Vec::new();
        let mut doc = html5_sgml(&mut out);
        let err = doc
            .a()
            .unwrap()
            .href("https://example.com/")
            .unwrap()
            .href("https://example.org/")
            .unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateAttribute {
                tag: "a",
                attribute: "href",
            }
        ));
        drop(doc);
        // the first value stands, the second was never written
        let written = String::from_utf8(out).unwrap();
        assert_eq!(written, "<a href=\"https://example.com/\"");
    }

    #[test]
    fn link_requires_exactly_one_of_rel_and_itemprop() {
        let mut out = Vec::new();
        let mut doc = html5_sgml(&mut out);

        let err = doc
            .link()
            .unwrap()
            .rel("stylesheet")
            .unwrap()
            .itemprop("url")
            .unwrap_err();
        assert!(matches!(
            err,
            Error::ConflictingAttributes {
                tag: "link",
                first: "rel",
                second: "itemprop",
            }
        ));

        let err = doc.link().unwrap().close().unwrap_err();
        assert!(matches!(err, Error::MissingAttribute { tag: "link", .. }));
    }

    #[test]
    fn link_with_rel_closes_cleanly() {
        let mut out = Vec::new();
        let mut doc = html5_sgml(&mut out);
        doc.link()
            .unwrap()
            .rel("stylesheet")
            .unwrap()
            .href("main.css")
            .unwrap()
            .close()
            .unwrap();
        drop(doc);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<link rel=\"stylesheet\" href=\"main.css\">"
        );
    }

    #[test]
    fn html5_input_type_is_rejected_under_legacy_doctype() {
        let mut out = Vec::new();
        let mut doc = Document::new(&mut out, Doctype::Html4, Serialization::Sgml);
        let err = doc
            .input()
            .unwrap()
            .input_type(InputType::Color)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::DoctypeMismatch {
                actual: Doctype::Html4,
                ..
            }
        ));
    }

    #[test]
    fn html5_input_type_is_accepted_under_html5() {
        let mut out = Vec::new();
        let mut doc = html5_sgml(&mut out);
        doc.input()
            .unwrap()
            .input_type(InputType::Color)
            .unwrap()
            .close()
            .unwrap();
        drop(doc);
        assert_eq!(String::from_utf8(out).unwrap(), "<input type=\"color\">");
    }

    #[test]
    fn boolean_attributes_follow_the_serialization() {
        let mut out = Vec::new();
        let mut doc = html5_sgml(&mut out);
        doc.input()
            .unwrap()
            .input_type(InputType::Text)
            .unwrap()
            .disabled()
            .unwrap()
            .close()
            .unwrap();
        drop(doc);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<input type=\"text\" disabled>"
        );

        let mut out = Vec::new();
        let mut doc = Document::with_doctype(&mut out, Doctype::Xhtml5);
        doc.input()
            .unwrap()
            .input_type(InputType::Text)
            .unwrap()
            .disabled()
            .unwrap()
            .close()
            .unwrap();
        drop(doc);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<input type=\"text\" disabled=\"disabled\"/>"
        );
    }

    #[test]
    fn html5_only_boolean_is_gated_by_doctype() {
        let mut out = Vec::new();
        let mut doc = Document::new(&mut out, Doctype::Xhtml1, Serialization::Xml);
        let err = doc.input().unwrap().required().unwrap_err();
        assert!(matches!(err, Error::DoctypeMismatch { .. }));
    }

    #[test]
    fn attribute_values_are_escaped() {
        let mut out = Vec::new();
        let mut doc = html5_sgml(&mut out);
        doc.a()
            .unwrap()
            .href("/?q=a&b")
            .unwrap()
            .title("say \"hi\"")
            .unwrap()
            .text("link")
            .unwrap();
        drop(doc);
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("href=\"/?q=a&amp;b\""));
        assert!(written.contains("title=\"say &quot;hi&quot;\""));
    }

    #[test]
    fn data_attributes_bypass_duplicate_detection() {
        let mut out = Vec::new();
        let mut doc = html5_sgml(&mut out);
        doc.span()
            .unwrap()
            .data("kind", "a")
            .unwrap()
            .data("kind", "b")
            .unwrap()
            .empty()
            .unwrap();
        drop(doc);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<span data-kind=\"a\" data-kind=\"b\"></span>"
        );
    }
}
