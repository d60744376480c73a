use serde::{Deserialize, Serialize};
use std::fmt;

/// Console markup applied to a span of text
///
/// Mirrors the `<comment>`, `<info>` and `<error>` tags of console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    /// Section banners
    Comment,
    /// Labels and section headers
    Info,
    /// Warnings the operator should notice
    Error,
}

impl Tag {
    /// Markup name of the tag
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A run of text with optional markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Text content
    pub text: String,
    /// Markup, `None` for plain text
    pub tag: Option<Tag>,
}

/// One output line made of spans
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Spans in display order
    pub spans: Vec<Span>,
}

impl Line {
    /// Create an empty line
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty line
    pub fn blank() -> Self {
        Self::default()
    }

    /// A line holding a single plain span
    pub fn plain<S: Into<String>>(text: S) -> Self {
        Self::new().text(text)
    }

    /// A line holding a single tagged span
    pub fn tagged<S: Into<String>>(tag: Tag, text: S) -> Self {
        Self::new().with(Some(tag), text)
    }

    /// Append a span
    pub fn with<S: Into<String>>(mut self, tag: Option<Tag>, text: S) -> Self {
        self.spans.push(Span {
            text: text.into(),
            tag,
        });
        self
    }

    /// Append plain text
    pub fn text<S: Into<String>>(self, text: S) -> Self {
        self.with(None, text)
    }

    /// Append `<info>` text
    pub fn info<S: Into<String>>(self, text: S) -> Self {
        self.with(Some(Tag::Info), text)
    }

    /// Append `<comment>` text
    pub fn comment<S: Into<String>>(self, text: S) -> Self {
        self.with(Some(Tag::Comment), text)
    }

    /// Append `<error>` text
    pub fn error<S: Into<String>>(self, text: S) -> Self {
        self.with(Some(Tag::Error), text)
    }

    /// Whether the line has no visible text
    pub fn is_blank(&self) -> bool {
        self.spans.iter().all(|span| span.text.is_empty())
    }

    /// Whether any span carries the given tag
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.spans.iter().any(|span| span.tag == Some(tag))
    }

    /// Text without markup
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.spans {
            f.write_str(&span.text)?;
        }
        Ok(())
    }
}
