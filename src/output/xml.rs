use super::{MatchReport, TreeReport};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::error::Error;
use std::io::Cursor;

pub fn output_tree(data: &TreeReport) -> Result<(), Box<dyn Error>> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let filetree = BytesStart::new("filetree");
    writer.write_event(Event::Start(filetree.borrow()))?;

    write_element(&mut writer, "total_files", &data.total_files.to_string())?;
    write_element(
        &mut writer,
        "files_to_parse",
        &data.files_to_parse.to_string(),
    )?;

    let files = BytesStart::new("files");
    writer.write_event(Event::Start(files.borrow()))?;

    for file in &data.files {
        let mut elem = BytesStart::new("file");
        elem.push_attribute(("path", file.path.as_str()));
        elem.push_attribute(("selected", if file.selected { "true" } else { "false" }));
        writer.write_event(Event::Empty(elem))?;
    }

    writer.write_event(Event::End(BytesEnd::new("files")))?;
    writer.write_event(Event::End(BytesEnd::new("filetree")))?;

    let result = writer.into_inner().into_inner();
    println!("{}", String::from_utf8(result)?);
    Ok(())
}

pub fn output_matches(data: &MatchReport) -> Result<(), Box<dyn Error>> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut matches = BytesStart::new("matches");
    matches.push_attribute(("query", data.query.as_str()));
    matches.push_attribute(("truncated", if data.truncated { "true" } else { "false" }));
    writer.write_event(Event::Start(matches.borrow()))?;

    for entry in &data.matches {
        let mut elem = BytesStart::new("match");
        elem.push_attribute(("path", entry.path.as_str()));
        elem.push_attribute(("kind", entry.kind.as_str()));
        writer.write_event(Event::Empty(elem))?;
    }

    writer.write_event(Event::End(BytesEnd::new("matches")))?;

    let result = writer.into_inner().into_inner();
    println!("{}", String::from_utf8(result)?);
    Ok(())
}

fn write_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    content: &str,
) -> Result<(), Box<dyn Error>> {
    let elem = BytesStart::new(name);
    writer.write_event(Event::Start(elem.borrow()))?;
    writer.write_event(Event::Text(BytesText::new(content)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
