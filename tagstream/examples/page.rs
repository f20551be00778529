//! Writes a small XHTML page to stdout.
//!
//! Run with `cargo run --example page`. Set `RUST_LOG=trace` to watch the
//! element open/close stream.

use std::io;

use tagstream::prelude::*;

fn main() -> tagstream::Result<()> {
    env_logger::init();

    let stdout = io::stdout();
    let mut doc = Document::with_doctype(stdout.lock(), Doctype::Xhtml5);
    doc.xml_declaration()?;
    doc.write_doctype()?;
    doc.html()?.lang("en")?.with(|html| {
        html.head_with(|head| {
            head.meta()?.charset("utf-8")?.close()?;
            head.title_text("tagstream demo")?;
            head.style()?.body("main { max-width: 40rem }")?;
            Ok(())
        })?;
        html.body_with(|body| {
            body.main_with(|main| {
                main.h1_text("tagstream demo")?;
                main.p()?.with(|p| {
                    p.text("A typed, streaming writer. Invalid nesting ")?;
                    p.em_text("does not compile")?;
                    p.text(".")?;
                    Ok(())
                })?;
                main.ul_with(|list| {
                    list.li_text("content model checked at compile time")?;
                    list.li_text("attributes typed per tag")?;
                    list.li_text("bytes streamed straight to the sink")?;
                    Ok(())
                })?;
                Ok(())
            })?;
            body.script()?.body("console.log(\"hello\");")?;
            Ok(())
        })?;
        Ok(())
    })?;
    doc.flush()
}
