//! Console rendering of report lines

use crate::error_ext::ErrorContext;
use adx_domain::error::Result;
use adx_domain::ports::ReportOutput;
use adx_domain::value_objects::{Line, Tag};
use anstyle::{AnsiColor, Color, Style};
use std::io::{IsTerminal, Write};

/// Terminal style of a markup tag
pub fn tag_style(tag: Tag) -> Style {
    match tag {
        Tag::Comment => Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))),
        Tag::Info => Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))),
        Tag::Error => Style::new()
            .fg_color(Some(Color::Ansi(AnsiColor::White)))
            .bg_color(Some(Color::Ansi(AnsiColor::Red))),
    }
}

/// Decide whether console output is styled
///
/// An explicit command line flag wins over the configured value; with
/// neither, styling follows whether stdout is a terminal.
pub fn should_use_ansi(flag: Option<bool>, configured: Option<bool>) -> bool {
    flag.or(configured)
        .unwrap_or_else(|| std::io::stdout().is_terminal())
}

/// [`ReportOutput`] writing each line to a [`Write`] sink
///
/// Tagged spans are wrapped in ANSI escapes when styling is enabled and
/// written as plain text otherwise.
#[derive(Debug)]
pub struct ConsoleOutput<W: Write> {
    writer: W,
    ansi: bool,
}

impl<W: Write> ConsoleOutput<W> {
    /// Wrap a writer
    pub fn new(writer: W, ansi: bool) -> Self {
        Self { writer, ansi }
    }

    /// Whether spans are styled
    pub fn ansi(&self) -> bool {
        self.ansi
    }

    /// Flush and return the writer
    pub fn into_inner(mut self) -> Result<W> {
        self.writer
            .flush()
            .io_context("Failed to flush console output")?;
        Ok(self.writer)
    }

    fn render(&self, line: &Line) -> String {
        let mut rendered = String::new();
        for span in &line.spans {
            match span.tag {
                Some(tag) if self.ansi => {
                    let style = tag_style(tag);
                    rendered.push_str(&format!(
                        "{}{}{}",
                        style.render(),
                        span.text,
                        style.render_reset()
                    ));
                }
                _ => rendered.push_str(&span.text),
            }
        }
        rendered
    }
}

impl<W: Write> ReportOutput for ConsoleOutput<W> {
    fn write_line(&mut self, line: &Line) -> Result<()> {
        let rendered = self.render(line);
        writeln!(self.writer, "{rendered}").io_context("Failed to write report line")
    }
}
