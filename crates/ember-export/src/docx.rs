//! Rendered report text to DOCX.
//!
//! The report template emits a small line-oriented markup:
//!
//! | line            | block                                  |
//! |-----------------|----------------------------------------|
//! | `# text`        | centered title                         |
//! | `## text`       | section heading                        |
//! | `### text`      | sub-section heading                    |
//! | `- text`        | bullet                                 |
//! | `> text`        | centered muted note                    |
//! | `---`           | page break                             |
//! | anything else   | body text                              |
//!
//! Inside text, `**bold**` spans are bold and runs of `█` are drawn in the
//! bar colour.

use std::io::Cursor;

use docx_rs::{AlignmentType, BreakType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use crate::error::ExportError;
use crate::styles::ReportStyles;

const FILLED_CELL: char = '\u{2588}';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    Heading { level: usize, text: &'a str },
    Bullet(&'a str),
    Note(&'a str),
    PageBreak,
    Text(&'a str),
    Blank,
}

/// Classify each line. Consecutive blank lines collapse into one.
pub fn parse_blocks(rendered: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    for line in rendered.lines().map(str::trim) {
        let block = if line.is_empty() {
            Block::Blank
        } else if line == "---" {
            Block::PageBreak
        } else if let Some((level, text)) = heading(line) {
            Block::Heading { level, text }
        } else if let Some(text) = line.strip_prefix("- ") {
            Block::Bullet(text)
        } else if let Some(text) = line.strip_prefix("> ") {
            Block::Note(text)
        } else {
            Block::Text(line)
        };

        if block == Block::Blank && matches!(blocks.last(), Some(Block::Blank) | None) {
            continue;
        }
        blocks.push(block);
    }
    blocks
}

fn heading(line: &str) -> Option<(usize, &str)> {
    let level = line.chars().take_while(|c| *c == '#').count();
    if !(1..=3).contains(&level) {
        return None;
    }
    line[level..].strip_prefix(' ').map(|text| (level, text))
}

/// Build a DOCX package from rendered report text.
pub fn generate_docx(rendered: &str, styles: &ReportStyles) -> Result<Vec<u8>, ExportError> {
    let mut doc = Docx::new();
    for level in 1..=3 {
        doc = doc.add_style(
            Style::new(&style_id(level), StyleType::Paragraph)
                .name(&format!("heading {level}"))
                .size(styles.heading_size(level) * 2),
        );
    }

    for block in parse_blocks(rendered) {
        doc = doc.add_paragraph(paragraph(&block, styles));
    }

    let mut buf = Cursor::new(Vec::new());
    doc.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Package(e.to_string()))?;
    Ok(buf.into_inner())
}

fn style_id(level: usize) -> String {
    format!("Heading{level}")
}

fn paragraph(block: &Block<'_>, styles: &ReportStyles) -> Paragraph {
    match block {
        Block::Heading { level, text } => {
            let run = Run::new()
                .add_text(*text)
                .size(styles.heading_size(*level) * 2)
                .color(styles.heading_color.as_str())
                .fonts(RunFonts::new().ascii(&styles.heading_font));
            let para = Paragraph::new().style(&style_id(*level)).add_run(run);
            if *level == 1 {
                para.align(AlignmentType::Center)
            } else {
                para
            }
        }
        Block::Bullet(text) => with_runs(
            Paragraph::new().add_run(text_run("\u{2022} ", styles)),
            text,
            styles,
        ),
        Block::Note(text) => Paragraph::new()
            .align(AlignmentType::Center)
            .add_run(text_run(text, styles).color(styles.muted_color.as_str())),
        Block::PageBreak => Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
        Block::Text(text) => with_runs(Paragraph::new(), text, styles),
        Block::Blank => Paragraph::new(),
    }
}

fn with_runs(mut para: Paragraph, text: &str, styles: &ReportStyles) -> Paragraph {
    for run in inline_runs(text, styles) {
        para = para.add_run(run);
    }
    para
}

fn text_run(text: &str, styles: &ReportStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

/// Odd `**`-separated segments are bold. Text with an unpaired marker is
/// kept literal.
fn inline_runs(text: &str, styles: &ReportStyles) -> Vec<Run> {
    let segments: Vec<&str> = text.split("**").collect();
    if segments.len() % 2 == 0 {
        return styled_runs(text, false, styles);
    }
    segments
        .iter()
        .enumerate()
        .filter(|(_, segment)| !segment.is_empty())
        .flat_map(|(index, segment)| styled_runs(segment, index % 2 == 1, styles))
        .collect()
}

fn styled_runs(text: &str, bold: bool, styles: &ReportStyles) -> Vec<Run> {
    split_bar(text)
        .into_iter()
        .map(|piece| {
            let mut run = text_run(piece, styles);
            if piece.starts_with(FILLED_CELL) {
                run = run.color(styles.bar_color.as_str());
            }
            if bold { run.bold() } else { run }
        })
        .collect()
}

/// Split `text` so every run of filled bar cells is its own piece.
fn split_bar(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut in_bar = false;
    for (offset, c) in text.char_indices() {
        let is_bar = c == FILLED_CELL;
        if is_bar != in_bar && offset > start {
            pieces.push(&text[start..offset]);
            start = offset;
        }
        in_bar = is_bar;
    }
    if start < text.len() {
        pieces.push(&text[start..]);
    }
    pieces
}
