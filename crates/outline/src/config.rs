use std::time::Duration;

use outline_core::outline::{ContentScope, RenderOptions, Separator, DEFAULT_SCOPE};

use crate::prelude::Error;

pub const DEFAULT_WIKI_URL: &str = "https://en.wikipedia.org/wiki";

pub const DEFAULT_USER_AGENT: &str = concat!("outline/", env!("CARGO_PKG_VERSION"));

/// Options shared by every command that builds an outline
#[derive(Debug, Clone, clap::Args)]
pub struct OutlineOptions {
    /// Base URL that article titles are appended to
    #[arg(long, env = "OUTLINE_WIKI_URL", default_value = DEFAULT_WIKI_URL)]
    pub wiki_url: String,

    /// Timeout in seconds for the article request (default: 30)
    #[arg(short, long, env = "OUTLINE_TIMEOUT", default_value = "30")]
    pub timeout: u64,

    /// User-Agent header sent to the wiki
    #[arg(long, env = "OUTLINE_USER_AGENT")]
    pub user_agent: Option<String>,

    /// CSS selector of the content region. Empty means the whole page
    #[arg(long, env = "OUTLINE_SCOPE", default_value = DEFAULT_SCOPE)]
    pub scope: String,

    /// Separator between outline lines
    #[arg(long, env = "OUTLINE_SEPARATOR", default_value = "newline")]
    pub separator: SeparatorArg,

    /// Prepend a "# Contents" line to the outline
    #[arg(long, env = "OUTLINE_CONTENTS_HEADER")]
    pub contents_header: bool,

    /// What to do when an article has no usable headings
    #[arg(long, env = "OUTLINE_EMPTY", default_value = "message")]
    pub empty: EmptyPolicy,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SeparatorArg {
    /// One heading per line
    Newline,
    /// An empty line between headings
    BlankLine,
}

impl From<SeparatorArg> for Separator {
    fn from(s: SeparatorArg) -> Self {
        match s {
            SeparatorArg::Newline => Separator::Newline,
            SeparatorArg::BlankLine => Separator::BlankLine,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum EmptyPolicy {
    /// Answer with a "No headings found." message
    #[default]
    Message,
    /// Fail the request as not found
    Error,
}

/// Validated, immutable configuration built from [`OutlineOptions`]
#[derive(Debug, Clone)]
pub struct OutlineConfig {
    pub wiki_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    pub scope: ContentScope,
    pub render: RenderOptions,
    pub empty: EmptyPolicy,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            wiki_url: DEFAULT_WIKI_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            scope: ContentScope::default(),
            render: RenderOptions::default(),
            empty: EmptyPolicy::default(),
        }
    }
}

impl TryFrom<OutlineOptions> for OutlineConfig {
    type Error = Error;

    fn try_from(options: OutlineOptions) -> Result<Self, Self::Error> {
        let wiki_url = options.wiki_url.trim().to_string();
        if !(wiki_url.starts_with("http://") || wiki_url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "Wiki URL must start with http:// or https://, got '{wiki_url}'"
            )));
        }

        if options.timeout == 0 {
            return Err(Error::Config(
                "Timeout must be at least one second".to_string(),
            ));
        }

        Ok(Self {
            wiki_url,
            timeout: Duration::from_secs(options.timeout),
            user_agent: options
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            scope: ContentScope::parse(&options.scope)?,
            render: RenderOptions {
                separator: options.separator.into(),
                contents_header: options.contents_header,
            },
            empty: options.empty,
        })
    }
}
