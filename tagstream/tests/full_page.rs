use tagstream::prelude::*;

#[test]
fn xhtml_page_renders_exactly() {
    let mut out = Vec::new();
    let mut doc = Document::with_doctype(&mut out, Doctype::Xhtml5);
    doc.xml_declaration().unwrap();
    doc.write_doctype().unwrap();
    doc.html()
        .unwrap()
        .lang("en")
        .unwrap()
        .with(|html| {
            html.head_with(|head| {
                head.meta()?.charset("utf-8")?.close()?;
                head.title_text("Demo")?;
                head.link()?.rel("stylesheet")?.href("main.css")?.close()?;
                Ok(())
            })?;
            html.body_with(|body| {
                body.h1_text("Demo")?;
                body.p()?.class("lead")?.text("Streaming, typed markup.")?;
                Ok(())
            })?;
            Ok(())
        })
        .unwrap();
    drop(doc);

    let expected = concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
        "<!DOCTYPE html>\n",
        "<html xmlns=\"http://www.w3.org/1999/xhtml\" lang=\"en\">\n",
        "  <head>\n",
        "    <meta charset=\"utf-8\"/>\n",
        "    <title>Demo</title>\n",
        "    <link rel=\"stylesheet\" href=\"main.css\"/>\n",
        "  </head>\n",
        "  <body>\n",
        "    <h1>Demo</h1>\n",
        "    <p class=\"lead\">Streaming, typed markup.</p>\n",
        "  </body>\n",
        "</html>",
    );
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn html_page_with_table_and_form_renders_exactly() {
    let mut out = Vec::new();
    let mut doc = Document::new(&mut out, Doctype::Html5, Serialization::Sgml);
    doc.write_doctype().unwrap();
    doc.html()
        .unwrap()
        .with(|html| {
            html.body_with(|body| {
                body.table_with(|table| {
                    table.thead_with(|section| {
                        section.tr_with(|row| {
                            row.th_text("Name")?;
                            row.th_text("Qty")?;
                            Ok(())
                        })?;
                        Ok(())
                    })?;
                    table.tbody_with(|section| {
                        section.tr_with(|row| {
                            row.td_text("Bolts")?;
                            row.td_text("42")?;
                            Ok(())
                        })?;
                        Ok(())
                    })?;
                    Ok(())
                })?;
                body.form()?
                    .action("/search")?
                    .method(FormMethod::Get)?
                    .with(|form| {
                        form.input()?.input_type(InputType::Text)?.name("q")?.close()?;
                        form.button()?.button_type(ButtonType::Submit)?.text("Go")?;
                        Ok(())
                    })?;
                Ok(())
            })?;
            Ok(())
        })
        .unwrap();
    drop(doc);

    let expected = concat!(
        "<!DOCTYPE html>\n",
        "<html>\n",
        "  <body>\n",
        "    <table>\n",
        "      <thead>\n",
        "        <tr>\n",
        "          <th>Name</th>\n",
        "          <th>Qty</th>\n",
        "        </tr>\n",
        "      </thead>\n",
        "      <tbody>\n",
        "        <tr>\n",
        "          <td>Bolts</td>\n",
        "          <td>42</td>\n",
        "        </tr>\n",
        "      </tbody>\n",
        "    </table>\n",
        "    <form action=\"/search\" method=\"get\">\n",
        "      <input type=\"text\" name=\"q\">\n",
        "      <button type=\"submit\">Go</button>\n",
        "    </form>\n",
        "  </body>\n",
        "</html>",
    );
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn the_same_calls_render_byte_identically() {
    fn render() -> Vec<u8> {
        let mut out = Vec::new();
        let mut doc = Document::with_doctype(&mut out, Doctype::Xhtml1);
        doc.write_doctype().unwrap();
        doc.html()
            .unwrap()
            .with(|html| {
                html.head_with(|head| {
                    head.title_text("Stable")?;
                    Ok(())
                })?;
                html.body_with(|body| {
                    body.p_text("output")?;
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
