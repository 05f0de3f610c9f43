use core::fmt::{Display, Formatter};
use std::sync::Arc;

/// Number of characters shown on each side of the offending character in an excerpt
pub const WINDOW_HALF: usize = 50;

/// The complete original text a token sequence was produced from
#[derive(Debug, PartialEq, Eq, Default)]
pub struct SourceText {
    /// Optional name of the source (filename, url, etc.)
    name: Option<String>,
    /// The full text
    text: String,
}

/// Cheap, shareable handle on the original source. Every token carries one so errors can
/// show the surrounding text without the parser having to know where the tokens came from.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SourceRef(Arc<SourceText>);

impl SourceRef {
    pub fn new(text: impl Into<String>) -> Self {
        Self(Arc::new(SourceText {
            name: None,
            text: text.into(),
        }))
    }

    pub fn with_name(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self(Arc::new(SourceText {
            name: Some(name.into()),
            text: text.into(),
        }))
    }

    /// Returns the complete original text
    #[must_use]
    pub fn source(&self) -> &str {
        &self.0.text
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    /// Returns the window of text around the given character offset
    #[must_use]
    pub fn excerpt(&self, index: usize) -> Excerpt {
        Excerpt::around(self.source(), index)
    }
}

/// How the offending character in an excerpt is marked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Highlight {
    /// `>>x<<` markers, safe for logs and files
    Plain,
    /// ANSI red foreground, for terminals
    Ansi,
}

impl Highlight {
    fn open(self) -> &'static str {
        match self {
            Highlight::Plain => ">>",
            Highlight::Ansi => "\u{1b}[31m",
        }
    }

    fn close(self) -> &'static str {
        match self {
            Highlight::Plain => "<<",
            Highlight::Ansi => "\u{1b}[39m",
        }
    }
}

/// A window of source text centered on a single offending character
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Excerpt {
    /// The window does not start at the beginning of the source
    pub truncated_start: bool,
    /// Text in front of the offending character
    pub before: String,
    /// The offending character itself (empty when the offset lies past the end of the source)
    pub highlighted: String,
    /// Text after the offending character
    pub after: String,
    /// The window is filled completely, so there is probably more text after it
    pub truncated_end: bool,
}

impl Excerpt {
    /// Cuts the window out of `source`. Offsets are counted in characters, not bytes.
    #[must_use]
    pub fn around(source: &str, index: usize) -> Self {
        let start = index.saturating_sub(WINDOW_HALF);
        let error_index = index - start;

        let window: Vec<char> = source
            .chars()
            .skip(start)
            .take(index + WINDOW_HALF - start)
            .collect();

        let split = error_index.min(window.len());
        let split_after = (error_index + 1).min(window.len());

        Self {
            truncated_start: start != 0,
            before: window[..split].iter().collect(),
            highlighted: window[split..split_after].iter().collect(),
            after: window[split_after..].iter().collect(),
            truncated_end: window.len() >= WINDOW_HALF * 2,
        }
    }

    /// Renders the window with the offending character marked in the given style
    #[must_use]
    pub fn render(&self, highlight: Highlight) -> String {
        format!(
            "{}{}{}{}{}{}{}",
            if self.truncated_start { "...\n" } else { "" },
            self.before,
            highlight.open(),
            self.highlighted,
            highlight.close(),
            self.after,
            if self.truncated_end { "..." } else { "" },
        )
    }
}

impl Display for Excerpt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(Highlight::Plain))
    }
}
