//! PDF export of generated documents (genpdf).
//!
//! A4, 12 mm margins, serif text. Headers are bold, bullets are indented with
//! their leading whitespace removed, URLs are blue. Content that overflows a
//! page continues on the next one.

use std::path::{Path, PathBuf};

use genpdf::elements::{Break, Paragraph};
use genpdf::style::{Color, Style, StyledString};
use genpdf::{Document, Element as _, Margins, PaperSize, SimplePageDecorator};

use crate::render::lines::{classify_line, split_urls, LineKind, Segment};
use crate::render::ExportError;

const FONT_SIZE_PT: u8 = 10;
const MARGIN_MM: i32 = 12;
const BULLET_INDENT_MM: f64 = 5.0;
const LINK_COLOR: Color = Color::Rgb(0, 0, 255);

/// Where to find the TTF family used for PDF export.
#[derive(Debug, Clone)]
pub struct PdfFonts {
    pub dir: PathBuf,
    pub family: String,
}

/// One laid-out line of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    Gap,
    Header(&'a str),
    Line {
        indented: bool,
        segments: Vec<Segment<'a>>,
    },
}

/// Turns plain text into layout blocks, one per line.
pub fn layout(content: &str) -> Vec<Block<'_>> {
    content
        .lines()
        .map(|line| match classify_line(line) {
            LineKind::Blank => Block::Gap,
            LineKind::Header => Block::Header(line.trim_end()),
            LineKind::Bullet => Block::Line {
                indented: true,
                segments: split_urls(line.trim_start()),
            },
            LineKind::Text => Block::Line {
                indented: false,
                segments: split_urls(line),
            },
        })
        .collect()
}

/// Renders `content` to PDF bytes. Blocking: call from `spawn_blocking`.
pub fn render_pdf(content: &str, title: &str, fonts: &PdfFonts) -> Result<Vec<u8>, ExportError> {
    let mut doc = configure_document(title, fonts)?;

    for block in layout(content) {
        match block {
            Block::Gap => doc.push(Break::new(1)),
            Block::Header(text) => {
                let mut p = Paragraph::new("");
                p.push(StyledString::new(text.to_string(), Style::new().bold()));
                doc.push(p);
            }
            Block::Line { indented, segments } => {
                let p = segments_paragraph(&segments);
                if indented {
                    doc.push(p.padded(Margins::trbl(0.0, 0.0, 0.0, BULLET_INDENT_MM)));
                } else {
                    doc.push(p);
                }
            }
        }
    }

    let mut out = Vec::new();
    doc.render(&mut out)
        .map_err(|e| ExportError::Render(e.to_string()))?;
    Ok(out)
}

fn segments_paragraph(segments: &[Segment<'_>]) -> Paragraph {
    let mut p = Paragraph::new("");
    for segment in segments {
        let styled = match segment {
            Segment::Text(text) => StyledString::new(text.to_string(), Style::new()),
            Segment::Link { text, .. } => {
                StyledString::new(text.to_string(), Style::new().with_color(LINK_COLOR))
            }
        };
        p.push(styled);
    }
    p
}

fn configure_document(title: &str, fonts: &PdfFonts) -> Result<Document, ExportError> {
    let family = load_font(&fonts.dir, &fonts.family)?;
    let mut doc = Document::new(family);
    doc.set_title(title);
    doc.set_paper_size(PaperSize::A4);
    doc.set_font_size(FONT_SIZE_PT);
    doc.set_line_spacing(1.0);

    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(MARGIN_MM);
    doc.set_page_decorator(decorator);
    Ok(doc)
}

fn load_font(
    dir: &Path,
    family: &str,
) -> Result<genpdf::fonts::FontFamily<genpdf::fonts::FontData>, ExportError> {
    genpdf::fonts::from_files(dir, family, None).map_err(|e| ExportError::Fonts {
        family: family.to_string(),
        dir: dir.display().to_string(),
        message: e.to_string(),
    })
}
