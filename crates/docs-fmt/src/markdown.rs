use std::fmt::{self, Write};

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

use crate::colorizer::Colorizer;
use crate::theme::Theme;

const MARK_OPEN: &str = "<mark>";
const MARK_CLOSE: &str = "</mark>";
const RULE_WIDTH: usize = 40;

/// Renderer settings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleConfig {
    pub theme: Theme,
    /// Maximum line width; `0` disables wrapping.
    pub wrap: usize,
}

impl StyleConfig {
    /// Settings that never wrap, so long URLs stay clickable.
    pub fn no_wrap(theme: Theme) -> Self {
        Self { theme, wrap: 0 }
    }
}

/// Renders markdown blocks to styled terminal text.
#[derive(Debug, Clone)]
pub struct TermRenderer {
    colorizer: Colorizer,
    wrap: usize,
}

impl TermRenderer {
    pub fn new(config: StyleConfig) -> Self {
        Self {
            colorizer: Colorizer::new(config.theme),
            wrap: config.wrap,
        }
    }

    /// Render one markdown block.
    ///
    /// The output ends with a blank line unless it is empty.
    pub fn render(&self, markdown: &str) -> Result<String, fmt::Error> {
        let mut state = RenderState::new(&self.colorizer, self.wrap);

        for event in Parser::new(markdown) {
            state.process_event(event)?;
        }

        state.finish()
    }
}

/// Render markdown with a one-off renderer.
pub fn format_markdown(markdown: &str, config: StyleConfig) -> Result<String, fmt::Error> {
    TermRenderer::new(config).render(markdown)
}

/// The line currently being assembled.
#[derive(Default)]
struct Line {
    text: String,
    /// Visible width, excluding escape sequences
    width: usize,
    /// Visible width of the indentation and list marker
    prefix_width: usize,
    started: bool,
    is_link: bool,
}

impl Line {
    fn push(&mut self, styled: &str, width: usize) {
        self.text.push_str(styled);
        self.width += width;
    }

    fn is_blank(&self) -> bool {
        self.width == self.prefix_width
    }
}

struct ListItem {
    /// Indentation of continuation lines
    indent: usize,
    /// Line number within the item, bumped on every explicit line break
    line: usize,
}

struct RenderState<'a> {
    colorizer: &'a Colorizer,
    wrap: usize,
    output: String,
    line: Line,
    /// Next number for each open list, `None` for bullet lists
    lists: Vec<Option<u64>>,
    items: Vec<ListItem>,
    pending_marker: Option<(String, usize)>,
    quote_depth: usize,
    heading: Option<(u32, String)>,
    in_code_block: bool,
    in_mark: bool,
    in_strong: bool,
    in_emphasis: bool,
    in_link: bool,
}

impl<'a> RenderState<'a> {
    fn new(colorizer: &'a Colorizer, wrap: usize) -> Self {
        Self {
            colorizer,
            wrap,
            output: String::new(),
            line: Line::default(),
            lists: Vec::new(),
            items: Vec::new(),
            pending_marker: None,
            quote_depth: 0,
            heading: None,
            in_code_block: false,
            in_mark: false,
            in_strong: false,
            in_emphasis: false,
            in_link: false,
        }
    }

    fn process_event(&mut self, event: Event) -> fmt::Result {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag_end) => self.end_tag(tag_end),
            Event::Text(text) => self.add_text(&text),
            Event::Code(code) => {
                let styled = self.colorizer.inline_code(&code);
                let width = if Colorizer::is_enabled() {
                    code.chars().count()
                } else {
                    code.chars().count() + 2
                };
                self.ensure_prefix();
                self.line.push(&styled, width);
                Ok(())
            }
            Event::InlineHtml(html) | Event::Html(html) => {
                match html.trim() {
                    MARK_OPEN => self.in_mark = true,
                    MARK_CLOSE => self.in_mark = false,
                    _ => {}
                }
                Ok(())
            }
            Event::SoftBreak | Event::HardBreak => self.line_break(),
            Event::Rule => {
                self.flush_line()?;
                writeln!(self.output, "{}", self.colorizer.rule(RULE_WIDTH))?;
                self.blank_line();
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn start_tag(&mut self, tag: Tag) -> fmt::Result {
        match tag {
            Tag::Heading { level, .. } => {
                self.flush_line()?;
                self.heading = Some((heading_level(level), String::new()));
            }
            Tag::CodeBlock(_) => {
                self.flush_line()?;
                self.in_code_block = true;
            }
            Tag::BlockQuote(_) => {
                self.flush_line()?;
                self.quote_depth += 1;
            }
            Tag::List(start) => {
                self.flush_line()?;
                self.lists.push(start);
            }
            Tag::Item => {
                self.flush_line()?;
                let depth = self.lists.len().saturating_sub(1);
                let marker = match self.lists.last_mut() {
                    Some(Some(number)) => {
                        let marker = format!("{}.", number);
                        *number += 1;
                        marker
                    }
                    _ => "\u{2022}".to_string(),
                };
                let base = "  ".repeat(depth);
                let width = base.len() + marker.chars().count() + 1;
                let styled = format!("{}{} ", base, self.colorizer.accent(&marker));
                self.pending_marker = Some((styled, width));
                self.items.push(ListItem {
                    indent: width,
                    line: 0,
                });
            }
            Tag::Emphasis => self.in_emphasis = true,
            Tag::Strong => self.in_strong = true,
            Tag::Link { .. } => self.in_link = true,
            _ => {}
        }
        Ok(())
    }

    fn end_tag(&mut self, tag_end: TagEnd) -> fmt::Result {
        match tag_end {
            TagEnd::Paragraph => {
                self.flush_line()?;
                if self.items.is_empty() {
                    self.blank_line();
                }
            }
            TagEnd::Heading(_) => {
                if let Some((level, text)) = self.heading.take() {
                    let styled = self.colorizer.heading(&text, level);
                    self.ensure_prefix();
                    self.line.push(&styled, text.chars().count());
                }
                self.flush_line()?;
                self.blank_line();
            }
            TagEnd::CodeBlock => {
                self.in_code_block = false;
                self.blank_line();
            }
            TagEnd::BlockQuote(_) => {
                self.flush_line()?;
                self.quote_depth = self.quote_depth.saturating_sub(1);
                if self.quote_depth == 0 && self.items.is_empty() {
                    self.blank_line();
                }
            }
            TagEnd::List(_) => {
                self.flush_line()?;
                self.lists.pop();
                if self.lists.is_empty() {
                    self.blank_line();
                }
            }
            TagEnd::Item => {
                self.flush_line()?;
                self.pending_marker = None;
                self.items.pop();
            }
            TagEnd::Emphasis => self.in_emphasis = false,
            TagEnd::Strong => self.in_strong = false,
            TagEnd::Link => self.in_link = false,
            _ => {}
        }
        Ok(())
    }

    fn add_text(&mut self, text: &str) -> fmt::Result {
        if let Some((_, heading)) = self.heading.as_mut() {
            heading.push_str(text);
            return Ok(());
        }

        if self.in_code_block {
            for line in text.lines() {
                self.ensure_prefix();
                let styled = self.colorizer.code_line(line);
                self.line.push("    ", 4);
                self.line.push(&styled, line.chars().count());
                self.flush_line()?;
            }
            return Ok(());
        }

        self.ensure_prefix();

        let mut text = text;
        if self.line.is_blank() {
            if text.starts_with("http://") || text.starts_with("https://") {
                self.line.is_link = true;
            } else if let Some(rest) = text.strip_prefix("\u{2022} ") {
                let bullet = self.colorizer.accent("\u{2022}");
                self.line.push(&bullet, 1);
                self.line.push(" ", 1);
                text = rest;
            }
        }

        if self.wrap == 0 {
            let styled = self.style_inline(text);
            self.line.push(&styled, text.chars().count());
            return Ok(());
        }

        for piece in text.split_inclusive(' ') {
            let width = piece.trim_end().chars().count();
            if self.line.width + width > self.wrap && !self.line.is_blank() {
                self.wrap_line()?;
            }
            let styled = self.style_inline(piece);
            self.line.push(&styled, piece.chars().count());
        }

        Ok(())
    }

    fn style_inline(&self, text: &str) -> String {
        if self.in_mark {
            self.colorizer.highlight(text)
        } else if self.in_strong {
            self.colorizer.strong(text)
        } else if self.in_emphasis {
            self.colorizer.emphasis(text)
        } else if self.in_link || self.line.is_link {
            self.colorizer.link(text)
        } else if self.items.last().is_some_and(|item| item.line == 0) {
            self.colorizer.title(text)
        } else {
            text.to_string()
        }
    }

    /// Start the current line with quote bars and the list marker or indent.
    fn ensure_prefix(&mut self) {
        if self.line.started {
            return;
        }
        self.line.started = true;

        for _ in 0..self.quote_depth {
            let prefix = self.colorizer.blockquote_prefix();
            self.line.push(&prefix, 2);
        }

        if let Some((marker, width)) = self.pending_marker.take() {
            self.line.push(&marker, width);
        } else {
            let indent = self.items.last().map_or(0, |item| item.indent);
            self.line.push(&" ".repeat(indent), indent);
        }

        self.line.prefix_width = self.line.width;
    }

    fn line_break(&mut self) -> fmt::Result {
        self.flush_line()?;
        if let Some(item) = self.items.last_mut() {
            item.line += 1;
        }
        Ok(())
    }

    /// Break an over-long line without leaving the current item line.
    fn wrap_line(&mut self) -> fmt::Result {
        let is_link = self.line.is_link;
        self.flush_line()?;
        self.ensure_prefix();
        self.line.is_link = is_link;
        Ok(())
    }

    fn flush_line(&mut self) -> fmt::Result {
        if self.line.started {
            let line = std::mem::take(&mut self.line);
            writeln!(self.output, "{}", line.text.trim_end())?;
        }
        Ok(())
    }

    fn blank_line(&mut self) {
        if !self.output.is_empty() && !self.output.ends_with("\n\n") {
            self.output.push('\n');
        }
    }

    fn finish(mut self) -> Result<String, fmt::Error> {
        self.flush_line()?;
        self.blank_line();
        Ok(self.output)
    }
}

fn heading_level(level: HeadingLevel) -> u32 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
