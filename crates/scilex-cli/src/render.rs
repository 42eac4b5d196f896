//! Terminal output: colours per lexer style and the fold gutter.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetForegroundColor};
use scilex::{Accessor, Document, FoldRegion, LexStyle, LexerId};
use scilex_java::JavaStyle;
use scilex_vim::VimStyle;

/// How one style is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    pub fg: Color,
    pub bold: bool,
    pub italic: bool,
}

impl Paint {
    const fn fg(fg: Color) -> Self {
        Self {
            fg,
            bold: false,
            italic: false,
        }
    }

    const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    const fn italic(self) -> Self {
        Self {
            italic: true,
            ..self
        }
    }
}

fn java_paint(style: JavaStyle) -> Option<Paint> {
    use JavaStyle::*;
    let paint = match style {
        Default | Identifier => return None,
        CommentLine | CommentBlock => Paint::fg(Color::DarkGrey).italic(),
        CommentBlockDoc => Paint::fg(Color::DarkGreen).italic(),
        CommentTagAt | CommentTagHtml => Paint::fg(Color::DarkCyan).italic(),
        TaskMarker => Paint::fg(Color::Red).bold(),
        Character | String | Template | TripleTemplate | TripleString => Paint::fg(Color::Green),
        EscapeChar | Placeholder | FormatSpecifier => Paint::fg(Color::DarkYellow),
        Operator => Paint::fg(Color::Magenta),
        Operator2 => Paint::fg(Color::DarkMagenta).bold(),
        Number => Paint::fg(Color::Yellow),
        Word => Paint::fg(Color::Blue).bold(),
        Word2 => Paint::fg(Color::Blue),
        Directive | Annotation => Paint::fg(Color::DarkCyan),
        Class | Interface | Enum | Record => Paint::fg(Color::Cyan),
        Function => Paint::fg(Color::DarkYellow),
        FunctionDefinition => Paint::fg(Color::DarkYellow).bold(),
        Constant => Paint::fg(Color::Red),
        Label => Paint::fg(Color::DarkRed),
    };
    Some(paint)
}

fn vim_paint(style: VimStyle) -> Option<Paint> {
    use VimStyle::*;
    let paint = match style {
        Default | Identifier => return None,
        CommentLine => Paint::fg(Color::DarkGrey).italic(),
        Number | BlobHex => Paint::fg(Color::Yellow),
        StringDq | StringSq => Paint::fg(Color::Green),
        EscapeChar => Paint::fg(Color::DarkYellow),
        Regex => Paint::fg(Color::DarkGreen),
        Operator => Paint::fg(Color::Magenta),
        EnvVariable | Option | Register => Paint::fg(Color::Red),
        Word => Paint::fg(Color::Blue).bold(),
        WordDemoted => Paint::fg(Color::Blue),
        Commands => Paint::fg(Color::DarkCyan).bold(),
        Function => Paint::fg(Color::DarkYellow),
    };
    Some(paint)
}

/// Paint for a raw style of `lexer`; `None` leaves the text unstyled.
pub fn paint_for(lexer: LexerId, style: u8) -> Option<Paint> {
    match lexer {
        LexerId::JAVA => JavaStyle::from_raw(style).and_then(java_paint),
        LexerId::VIM => VimStyle::from_raw(style).and_then(vim_paint),
        _ => None,
    }
}

/// Output options.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub color: bool,
}

/// Byte ranges of `text[range]` with a uniform style, widened to char boundaries.
fn style_runs(text: &str, styles: &[u8], start: usize, end: usize) -> Vec<(usize, usize, u8)> {
    let mut runs = Vec::new();
    let mut run_start = start;
    while run_start < end {
        let style = styles[run_start];
        let mut run_end = run_start + 1;
        while run_end < end && (styles[run_end] == style || !text.is_char_boundary(run_end)) {
            run_end += 1;
        }
        runs.push((run_start, run_end, style));
        run_start = run_end;
    }
    runs
}

fn gutter_marker(doc: &Document, line: usize) -> char {
    let level = doc.fold_level(line);
    if level.is_header() {
        '-'
    } else if level.depth() > 0 {
        '|'
    } else {
        ' '
    }
}

/// Write every line of `doc` with a line number, fold marker and coloured text.
pub fn render<W: Write>(
    out: &mut W,
    doc: &Document,
    lexer: LexerId,
    options: RenderOptions,
) -> io::Result<()> {
    let text = doc.text();
    let styles = doc.styles();
    let line_count = doc.line_count();
    let width = line_count.to_string().len();

    for line in 0..line_count {
        let start = doc.line_start(line);
        let mut end = doc.line_start(line + 1).min(text.len());
        if start == end && line + 1 == line_count {
            break;
        }
        let body = text[start..end].trim_end_matches(['\r', '\n']);
        end = start + body.len();

        queue!(
            out,
            Print(format!("{:>width$} {} ", line + 1, gutter_marker(doc, line)))
        )?;
        for (run_start, run_end, style) in style_runs(&text, styles, start, end) {
            let slice = &text[run_start..run_end];
            match paint_for(lexer, style).filter(|_| options.color) {
                Some(paint) => {
                    queue!(out, SetForegroundColor(paint.fg))?;
                    if paint.bold {
                        queue!(out, SetAttribute(Attribute::Bold))?;
                    }
                    if paint.italic {
                        queue!(out, SetAttribute(Attribute::Italic))?;
                    }
                    queue!(out, Print(slice), SetAttribute(Attribute::Reset))?;
                }
                None => queue!(out, Print(slice))?,
            }
        }
        queue!(out, Print('\n'))?;
    }
    out.flush()
}

/// Write one `start-end` line (1-based, inclusive) per fold region.
pub fn render_regions<W: Write>(out: &mut W, regions: &[FoldRegion]) -> io::Result<()> {
    for region in regions {
        writeln!(out, "{}-{}", region.start_line + 1, region.end_line + 1)?;
    }
    out.flush()
}
