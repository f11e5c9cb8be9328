//! Heading extraction and Markdown outline rendering
//!
//! The pipeline is four pure steps composed by [`extract_outline`] and
//! [`Outline::render`]:
//!
//! 1. [`scope_content`] narrows the document to its main content region
//! 2. [`walk_headings`] collects `h1`..`h6` elements in document order
//! 3. [`sanitize`] strips edit markers and drops navigational sections
//! 4. [`render_markdown`] turns each heading into a `#`-prefixed line

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

use crate::OutlineError;

/// Container holding the article body on Wikipedia pages.
pub const DEFAULT_SCOPE: &str = "#mw-content-text";

/// Marker that MediaWiki appends to section headings.
pub const EDIT_MARKER: &str = "[edit]";

/// Section titles that are navigation chrome rather than content.
pub const DENYLIST: [&str; 4] = ["contents", "navigation", "references", "see also"];

pub const EMPTY_OUTLINE_MESSAGE: &str = "No headings found.";

pub const CONTENTS_HEADER: &str = "# Contents";

/// A heading as found in the document, before sanitization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHeading {
    pub level: u8,
    pub text: String,
}

/// A cleaned heading. `level` is in `1..=6` and `text` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingRecord {
    pub level: u8,
    pub text: String,
}

impl HeadingRecord {
    pub fn new(level: u8, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

impl From<HeadingRecord> for RawHeading {
    fn from(record: HeadingRecord) -> Self {
        Self {
            level: record.level,
            text: record.text,
        }
    }
}

/// Ordered, immutable sequence of cleaned headings for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Outline {
    headings: Vec<HeadingRecord>,
}

impl Outline {
    pub fn new(headings: Vec<HeadingRecord>) -> Self {
        Self { headings }
    }

    pub fn headings(&self) -> &[HeadingRecord] {
        &self.headings
    }

    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.headings.len()
    }

    pub fn render(&self, options: &RenderOptions) -> String {
        render_markdown(&self.headings, options)
    }

    pub fn into_headings(self) -> Vec<HeadingRecord> {
        self.headings
    }
}

/// Line separator used when joining rendered headings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Separator {
    /// One heading per line
    #[default]
    Newline,
    /// Headings separated by an empty line
    BlankLine,
}

impl Separator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::Newline => "\n",
            Separator::BlankLine => "\n\n",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub separator: Separator,
    /// Prepend a synthetic `# Contents` line
    pub contents_header: bool,
}

/// Region of the document that headings are collected from.
#[derive(Debug, Clone)]
pub enum ContentScope {
    /// The whole document
    Document,
    /// The first element matching a CSS selector, or the whole document if none does
    Selector { marker: String, selector: Selector },
}

impl ContentScope {
    /// Parse a CSS selector into a scope. A blank marker scopes to the whole document.
    pub fn parse(marker: &str) -> Result<Self, OutlineError> {
        let marker = marker.trim();
        if marker.is_empty() {
            return Ok(ContentScope::Document);
        }

        let selector = Selector::parse(marker)
            .map_err(|e| OutlineError::InvalidScope(marker.to_string(), format!("{e:?}")))?;

        Ok(ContentScope::Selector {
            marker: marker.to_string(),
            selector,
        })
    }

    pub fn marker(&self) -> Option<&str> {
        match self {
            ContentScope::Document => None,
            ContentScope::Selector { marker, .. } => Some(marker),
        }
    }
}

impl Default for ContentScope {
    fn default() -> Self {
        ContentScope::parse(DEFAULT_SCOPE).unwrap_or(ContentScope::Document)
    }
}

/// Minimal view of a parsed HTML element needed to walk headings
pub trait DocumentNode: Clone {
    fn tag_name(&self) -> &str;
    fn inner_text(&self) -> String;
    fn child_nodes(&self) -> Vec<Self>;
}

impl<'a> DocumentNode for ElementRef<'a> {
    fn tag_name(&self) -> &str {
        self.value().name()
    }

    fn inner_text(&self) -> String {
        self.text().collect()
    }

    fn child_nodes(&self) -> Vec<Self> {
        self.children().filter_map(ElementRef::wrap).collect()
    }
}

/// Heading level for a tag name: `h1`..`h6` map to `1..=6`, anything else is `None`.
pub fn tag_level(tag_name: &str) -> Option<u8> {
    match tag_name.to_ascii_lowercase().as_str() {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

/// Narrow a document to its content region, falling back to the root element
pub fn scope_content<'a>(document: &'a Html, scope: &ContentScope) -> ElementRef<'a> {
    match scope {
        ContentScope::Document => document.root_element(),
        ContentScope::Selector { selector, .. } => document
            .select(selector)
            .next()
            .unwrap_or_else(|| document.root_element()),
    }
}

/// Collect every heading under `root` (inclusive) in pre-order.
pub fn walk_headings<N: DocumentNode>(root: &N) -> Vec<RawHeading> {
    let mut headings = Vec::new();
    let mut stack = vec![root.clone()];

    while let Some(node) = stack.pop() {
        if let Some(level) = tag_level(node.tag_name()) {
            headings.push(RawHeading {
                level,
                text: node.inner_text().trim().to_string(),
            });
        }

        // Reversed so the first child is popped first.
        stack.extend(node.child_nodes().into_iter().rev());
    }

    headings
}

/// Case-insensitive exact match against [`DENYLIST`]
pub fn is_denylisted(text: &str) -> bool {
    let lowered = text.to_lowercase();
    DENYLIST.contains(&lowered.as_str())
}

/// Clean a single heading text, returning `None` when it should be dropped
pub fn sanitize_text(raw: &str) -> Option<String> {
    let mut text = raw.to_string();
    while text.contains(EDIT_MARKER) {
        text = text.replace(EDIT_MARKER, "");
    }

    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if text.is_empty() || is_denylisted(&text) {
        None
    } else {
        Some(text)
    }
}

/// Clean raw headings, dropping empty and navigational entries
pub fn sanitize(raw: impl IntoIterator<Item = RawHeading>) -> Vec<HeadingRecord> {
    raw.into_iter()
        .filter_map(|heading| {
            sanitize_text(&heading.text).map(|text| HeadingRecord {
                level: heading.level,
                text,
            })
        })
        .collect()
}

/// Render one heading as a Markdown line, e.g. `(3, "History")` -> `### History`
pub fn heading_line(record: &HeadingRecord) -> String {
    format!("{} {}", "#".repeat(usize::from(record.level)), record.text)
}

/// Render headings as Markdown lines joined by the configured separator.
///
/// An empty slice renders as [`EMPTY_OUTLINE_MESSAGE`]. Callers that treat an
/// empty outline as an error should check for it before rendering.
pub fn render_markdown(records: &[HeadingRecord], options: &RenderOptions) -> String {
    if records.is_empty() {
        return EMPTY_OUTLINE_MESSAGE.to_string();
    }

    let mut lines = Vec::with_capacity(records.len() + 1);
    if options.contents_header {
        lines.push(CONTENTS_HEADER.to_string());
    }
    lines.extend(records.iter().map(heading_line));

    lines.join(options.separator.as_str())
}

/// Parse an HTML document and extract its cleaned outline
pub fn extract_outline(html: &str, scope: &ContentScope) -> Outline {
    let document = Html::parse_document(html);
    let root = scope_content(&document, scope);

    Outline::new(sanitize(walk_headings(&root)))
}
