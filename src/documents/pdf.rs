//! A4 固定版式名单，内置 Helvetica 字体，超出一页时自动分页

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference};

use super::Roster;
use crate::errors::{RecordsError, Result};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 25.4;

const COURSE_TITLE_SIZE: f32 = 20.0;
const GROUP_TITLE_SIZE: f32 = 16.0;
const LINE_SIZE: f32 = 12.0;
const LINE_SPACING: f32 = 7.0;

const PT_TO_MM: f32 = 0.352_778;
// Helvetica 平均字宽约为字号的一半
const AVG_CHAR_WIDTH: f32 = 0.5;

pub(super) fn render(roster: &Roster) -> Result<Vec<u8>> {
    let title = format!("{} - {}", roster.course_name, roster.group_name);
    let (doc, page, layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| RecordsError::document_render(format!("Failed to load PDF font: {e:?}")))?;

    let mut current = doc.get_page(page).get_layer(layer);
    let mut y = PAGE_HEIGHT - MARGIN;

    let course_title = roster.course_title();
    current.use_text(
        course_title.as_str(),
        COURSE_TITLE_SIZE,
        Mm(centered_x(&course_title, COURSE_TITLE_SIZE)),
        Mm(y),
        &font,
    );
    y -= 10.0;

    let group_title = roster.group_title();
    current.use_text(
        group_title.as_str(),
        GROUP_TITLE_SIZE,
        Mm(centered_x(&group_title, GROUP_TITLE_SIZE)),
        Mm(y),
        &font,
    );
    y -= 15.0;

    for line in roster.numbered_lines() {
        if y < MARGIN {
            let (next_page, next_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            current = doc.get_page(next_page).get_layer(next_layer);
            y = PAGE_HEIGHT - MARGIN;
        }
        write_line(&current, &font, &line, y);
        y -= LINE_SPACING;
    }

    finish(doc)
}

fn write_line(layer: &printpdf::PdfLayerReference, font: &IndirectFontRef, text: &str, y: f32) {
    layer.use_text(text, LINE_SIZE, Mm(MARGIN), Mm(y), font);
}

fn centered_x(text: &str, font_size: f32) -> f32 {
    let width = text.chars().count() as f32 * font_size * AVG_CHAR_WIDTH * PT_TO_MM;
    ((PAGE_WIDTH - width) / 2.0).max(MARGIN)
}

fn finish(doc: PdfDocumentReference) -> Result<Vec<u8>> {
    doc.save_to_bytes()
        .map_err(|e| RecordsError::document_render(format!("Failed to write PDF: {e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_produces_pdf() {
        let roster = Roster {
            course_name: "Biochemistry".to_string(),
            group_name: "Chem 101".to_string(),
            students: vec!["Alice Smith".to_string()],
        };
        let bytes = render(&roster).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_long_roster_paginates() {
        let roster = Roster {
            course_name: "Biochemistry".to_string(),
            group_name: "Chem 101".to_string(),
            students: (1..=120).map(|i| format!("Student {i}")).collect(),
        };
        let bytes = render(&roster).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_centered_x_stays_inside_margin() {
        let long = "x".repeat(300);
        assert_eq!(centered_x(&long, 20.0), MARGIN);
        assert!(centered_x("Course: A", 20.0) > MARGIN);
    }
}
