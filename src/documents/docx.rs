//! 最小 WordprocessingML 包：内容类型、包关系和正文三个部件

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::Roster;
use crate::errors::{RecordsError, Result};

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

// A4，页边距 1 英寸（单位：twip）
const SECTION_PROPERTIES: &str = r#"<w:sectPr><w:pgSz w:w="11906" w:h="16838"/><w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="708" w:footer="708" w:gutter="0"/></w:sectPr>"#;

pub(super) fn render(roster: &Roster) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let opts = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    write_part(&mut zip, "[Content_Types].xml", CONTENT_TYPES_XML, opts)?;
    write_part(&mut zip, "_rels/.rels", PACKAGE_RELS_XML, opts)?;
    write_part(&mut zip, "word/document.xml", &document_xml(roster), opts)?;

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

fn write_part(
    zip: &mut ZipWriter<Cursor<Vec<u8>>>,
    name: &str,
    content: &str,
    opts: SimpleFileOptions,
) -> Result<()> {
    zip.start_file(name, opts)?;
    zip.write_all(content.as_bytes()).map_err(|e| {
        RecordsError::document_render(format!("Failed to write DOCX part {name}: {e}"))
    })
}

/// 标题段落（课程、小组以换行分隔）加名单段落（每行一个学生）
fn document_xml(roster: &Roster) -> String {
    let title = paragraph(&roster.title_lines());
    let students = paragraph(&roster.numbered_lines());

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{title}{students}{SECTION_PROPERTIES}</w:body></w:document>"#
    )
}

fn paragraph(lines: &[String]) -> String {
    let runs = lines
        .iter()
        .map(|line| format!(r#"<w:t xml:space="preserve">{}</w:t>"#, escape_xml(line)))
        .collect::<Vec<_>>()
        .join("<w:br/>");
    format!("<w:p><w:r>{runs}</w:r></w:p>")
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    fn roster() -> Roster {
        Roster {
            course_name: "Biochemistry".to_string(),
            group_name: "Chem <101> & Co".to_string(),
            students: vec!["Alice Smith".to_string(), "Lindon Johnson".to_string()],
        }
    }

    #[test]
    fn test_package_contains_document_parts() {
        let bytes = render(&roster()).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        for part in ["[Content_Types].xml", "_rels/.rels", "word/document.xml"] {
            assert!(archive.by_name(part).is_ok(), "missing part {part}");
        }

        let mut document = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut document)
            .unwrap();

        assert!(document.contains("Course: Biochemistry"));
        assert!(document.contains("Group: Chem &lt;101&gt; &amp; Co"));
        assert!(document.contains("1. Alice Smith"));
        assert!(document.contains("2. Lindon Johnson"));
    }

    #[test]
    fn test_empty_roster_still_has_title() {
        let empty = Roster {
            students: Vec::new(),
            ..roster()
        };
        let xml = document_xml(&empty);
        assert!(xml.contains("Course: Biochemistry"));
        assert!(!xml.contains("1. "));
    }
}
