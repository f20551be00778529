//! The content-model lattice: a compile-time classification of what may
//! be written at each position of a document.
//!
//! Position marker types are zero-sized and never constructed; they exist
//! to select which factory traits from [`crate::builder`] apply to a given
//! content holder. Context traits are the edges of the lattice: a position
//! type implements [`FlowContext`] when flow elements may be opened there.
//!
//! Category inclusions are expressed as supertraits. Every [`FlowContext`]
//! is a [`PhrasingContext`] because phrasing elements are valid wherever
//! flow content is, and a factory set shared between two incomparable
//! positions lives in a shared supertrait rather than being defined twice:
//! the `tr` of a table and of a table section ([`TableSectionContext`]),
//! the `option` of a select and of an optgroup ([`OptionsContext`]), and
//! the `<script>` of nearly everything ([`ScriptSupportingContext`]).
//!
//! Invalid nesting has no runtime representation at all; it simply does
//! not compile:
//!
//! ```compile_fail
//! use tagstream::prelude::*;
//!
//! fn misnested(doc: &mut Document<Vec<u8>>) -> tagstream::Result<()> {
//!     // a <li> may not appear directly inside a <table>
//!     doc.table()?.with(|t| {
//!         t.li()?.text("nope")?;
//!         Ok(())
//!     })?;
//!     Ok(())
//! }
//! ```

mod sealed {
    pub trait Sealed {}
}

/// A position in a document, as far as the type system is concerned.
///
/// Implemented only by the zero-sized marker types in this module.
pub trait ContentModel: sealed::Sealed {}

/// Positions that accept the root `<html>` element.
pub trait RootContext: ContentModel {}

/// Positions that accept `<head>` and `<body>`.
pub trait HtmlContext: ContentModel {}

/// Positions that accept the script-supporting elements.
pub trait ScriptSupportingContext: ContentModel {}

/// Positions that accept metadata content (`<title>`, `<meta>`,
/// `<link>`, `<base>`, `<style>`).
pub trait MetadataContext: ScriptSupportingContext {}

/// Positions that accept phrasing content.
pub trait PhrasingContext: ScriptSupportingContext {}

/// Positions that accept flow content.
///
/// Every flow position also accepts phrasing content, hence the
/// supertrait.
pub trait FlowContext: PhrasingContext {}

/// Positions where character data may be written.
pub trait TextContext: ContentModel {}

/// Positions that accept `<tr>`.
pub trait TableSectionContext: ScriptSupportingContext {}

/// Positions that accept the table-level elements (`<caption>`,
/// `<colgroup>`, `<thead>`, `<tbody>`, `<tfoot>`) in addition to bare
/// rows.
pub trait TableContext: TableSectionContext {}

/// Positions that accept `<td>` and `<th>`.
pub trait RowContext: ScriptSupportingContext {}

/// Positions that accept `<li>`.
pub trait ListContext: ScriptSupportingContext {}

/// Positions that accept `<dt>` and `<dd>`.
pub trait DescriptionListContext: ScriptSupportingContext {}

/// Positions that accept `<option>`.
pub trait OptionsContext: ContentModel {}

/// Positions that accept `<optgroup>` in addition to bare options.
pub trait SelectContext: OptionsContext + ScriptSupportingContext {}

/// Positions that accept `<col>`.
pub trait ColumnContext: ContentModel {}

macro_rules! content_models {
    ($( $(#[$meta:meta])* $name:ident : [ $($ctx:ident),* ]; )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy)]
            pub struct $name;

            impl sealed::Sealed for $name {}
            impl ContentModel for $name {}
            $( impl $ctx for $name {} )*
        )*
    };
}

content_models! {
    /// The permissive model of a [`Document`](crate::Document) itself:
    /// every factory applies, so fragments and full pages both start
    /// here.
    AnyContent: [
        RootContext, HtmlContext, MetadataContext, ScriptSupportingContext,
        PhrasingContext, FlowContext, TextContext, TableContext,
        TableSectionContext, RowContext, ListContext,
        DescriptionListContext, OptionsContext, SelectContext,
        ColumnContext
    ];
    /// Directly inside `<html>`: `<head>` and `<body>` only.
    HtmlContent: [HtmlContext];
    /// Inside `<head>`: metadata content.
    HeadContent: [ScriptSupportingContext, MetadataContext];
    /// A flow position, e.g. inside `<body>` or `<div>`.
    FlowContent: [ScriptSupportingContext, PhrasingContext, FlowContext, TextContext];
    /// A phrasing position, e.g. inside `<p>` or `<em>`.
    PhrasingContent: [ScriptSupportingContext, PhrasingContext, TextContext];
    /// Character data only, e.g. inside `<title>` or `<textarea>`.
    TextOnlyContent: [TextContext];
    /// Inside `<table>`.
    TableContent: [ScriptSupportingContext, TableSectionContext, TableContext];
    /// Inside `<thead>`, `<tbody>`, or `<tfoot>`.
    TableSectionContent: [ScriptSupportingContext, TableSectionContext];
    /// Inside `<tr>`.
    RowContent: [ScriptSupportingContext, RowContext];
    /// Inside `<ol>` or `<ul>`.
    ListContent: [ScriptSupportingContext, ListContext];
    /// Inside `<dl>`.
    DescriptionListContent: [ScriptSupportingContext, DescriptionListContext];
    /// Inside `<select>`.
    SelectContent: [ScriptSupportingContext, OptionsContext, SelectContext];
    /// Inside `<optgroup>`.
    OptgroupContent: [ScriptSupportingContext, OptionsContext];
    /// Inside `<colgroup>`.
    ColgroupContent: [ColumnContext];
}
