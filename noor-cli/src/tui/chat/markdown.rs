//! Markdown rendering for assistant messages
//!
//! Converts the model's markdown into styled ratatui lines. Headings, bold,
//! italic, inline code, fenced code blocks, and list items are styled;
//! anything else degrades to plain text lines.

use crate::tui::theme::Palette;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Render one markdown document into display lines.
pub fn render_markdown(content: &str, palette: &Palette) -> Vec<Line<'static>> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(content, options);
    let mut renderer = LineRenderer::new(palette);
    for event in parser {
        renderer.push_event(event);
    }
    renderer.finish()
}

struct LineRenderer {
    base: Style,
    heading: Style,
    code: Style,
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    bold: usize,
    italic: usize,
    in_heading: bool,
    in_code_block: bool,
    list_depth: usize,
}

impl LineRenderer {
    fn new(palette: &Palette) -> Self {
        Self {
            base: palette.assistant_prefix(),
            heading: palette.title(),
            code: palette.suggestion(),
            lines: Vec::new(),
            current: Vec::new(),
            bold: 0,
            italic: 0,
            in_heading: false,
            in_code_block: false,
            list_depth: 0,
        }
    }

    fn push_event(&mut self, event: Event) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => {
                if self.in_code_block {
                    // Fenced blocks keep their own line structure
                    for line in text.lines() {
                        self.lines
                            .push(Line::from(Span::styled(format!("  {line}"), self.code)));
                    }
                } else {
                    let style = self.current_style();
                    self.current.push(Span::styled(text.into_string(), style));
                }
            }
            Event::Code(text) => {
                self.current.push(Span::styled(text.into_string(), self.code));
            }
            Event::SoftBreak | Event::HardBreak => self.flush_line(),
            Event::Rule => {
                self.flush_line();
                self.lines.push(Line::from(Span::styled(
                    "────────".to_string(),
                    self.base,
                )));
            }
            _ => {}
        }
    }

    fn start_tag(&mut self, tag: Tag) {
        match tag {
            Tag::Heading { .. } => {
                self.flush_line();
                self.in_heading = true;
            }
            Tag::Paragraph => self.flush_line(),
            Tag::CodeBlock(_) => {
                self.flush_line();
                self.in_code_block = true;
            }
            Tag::List(_) => self.list_depth += 1,
            Tag::Item => {
                self.flush_line();
                let indent = "  ".repeat(self.list_depth.saturating_sub(1));
                self.current
                    .push(Span::styled(format!("{indent}• "), self.base));
            }
            Tag::Strong => self.bold += 1,
            Tag::Emphasis => self.italic += 1,
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) => {
                self.flush_line();
                self.in_heading = false;
            }
            TagEnd::Paragraph | TagEnd::Item => self.flush_line(),
            TagEnd::CodeBlock => self.in_code_block = false,
            TagEnd::List(_) => self.list_depth = self.list_depth.saturating_sub(1),
            TagEnd::Strong => self.bold = self.bold.saturating_sub(1),
            TagEnd::Emphasis => self.italic = self.italic.saturating_sub(1),
            _ => {}
        }
    }

    fn current_style(&self) -> Style {
        if self.in_heading {
            return self.heading;
        }
        let mut style = self.base;
        if self.bold > 0 {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic > 0 {
            style = style.add_modifier(Modifier::ITALIC);
        }
        style
    }

    fn flush_line(&mut self) {
        if !self.current.is_empty() {
            let spans = std::mem::take(&mut self.current);
            self.lines.push(Line::from(spans));
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush_line();
        self.lines
    }
}
