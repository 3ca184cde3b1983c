use std::fmt;

/// The kind of documentation source a caller points at.
///
/// The variant set is closed: each kind has exactly one resolution rule
/// (see [`crate::learn::resolve`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Any web page.
    Url,
    /// A man page name, located with `man -w`.
    Man,
    /// A JavaDoc URL or Maven coordinate (`group:artifact[:version]`).
    Javadoc,
    /// A Sphinx URL or ReadTheDocs project name.
    Sphinx,
    /// A Go docs URL or module path.
    Godoc,
    /// A Rust docs URL or crate name.
    Rustdoc,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Man => "man",
            Self::Javadoc => "javadoc",
            Self::Sphinx => "sphinx",
            Self::Godoc => "godoc",
            Self::Rustdoc => "rustdoc",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A source kind paired with the caller's identifier for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub kind: SourceKind,
    pub identifier: String,
}

impl Source {
    pub fn new(kind: SourceKind, identifier: impl Into<String>) -> Self {
        Self {
            kind,
            identifier: identifier.into(),
        }
    }
}

/// How to retrieve a resolved source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPlan {
    /// HTTP GET of an HTML page.
    Web { url: String },
    /// Locate the man page source with the locator command, then read it.
    ManPage { name: String },
    /// Run `go doc -all <module>`; on command failure fetch `fallback_url` instead.
    GoDoc { module: String, fallback_url: String },
}

/// Fetched content, tagged with how it must be normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawContent {
    Html(String),
    ManSource(String),
    /// Already plain text; stored without conversion.
    Plain(String),
}

impl RawContent {
    /// The converter's input format name, or `None` when no conversion applies.
    pub fn converter_format(&self) -> Option<&'static str> {
        match self {
            Self::Html(_) => Some("html"),
            Self::ManSource(_) => Some("man"),
            Self::Plain(_) => None,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Html(text) | Self::ManSource(text) | Self::Plain(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Html(text) | Self::ManSource(text) | Self::Plain(text) => text,
        }
    }
}
