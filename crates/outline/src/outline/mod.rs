pub mod fetch;

use std::time::Instant;

use log::debug;
use outline_core::outline::{extract_outline, HeadingRecord};
use serde::Serialize;

use crate::config::{EmptyPolicy, OutlineConfig};
use crate::prelude::Error;
use crate::wiki::WikipediaClient;

pub use fetch::FetchOptions;

/// Outline of one country article, as returned to HTTP and CLI callers
#[derive(Debug, Clone, Serialize)]
pub struct OutlineOutput {
    pub country: String,
    pub url: String,
    pub headings: Vec<HeadingRecord>,
    pub markdown: String,
    pub fetch_time_ms: u64,
}

/// Public function for server and CLI reuse - fetch an article and build its outline
pub async fn fetch_outline_data(
    client: &WikipediaClient,
    config: &OutlineConfig,
    country: &str,
) -> Result<OutlineOutput, Error> {
    let start = Instant::now();

    // Step 1: I/O - fetch the article page
    let article = client.fetch_article(country).await?;

    // Step 2: Pure transformation - scope, walk, sanitize
    let outline = extract_outline(&article.html, &config.scope);
    debug!(
        "Extracted {} headings for '{}'",
        outline.len(),
        article.country
    );

    if outline.is_empty() && config.empty == EmptyPolicy::Error {
        return Err(Error::NoHeadingsFound(article.country));
    }

    // Step 3: Pure transformation - render Markdown
    let markdown = outline.render(&config.render);

    Ok(OutlineOutput {
        country: article.country,
        url: article.url,
        headings: outline.into_headings(),
        markdown,
        fetch_time_ms: elapsed_ms(start),
    })
}

/// Milliseconds since `start`, saturating at `u64::MAX`
fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::{Method::GET, MockServer};
    use outline_core::outline::{RenderOptions, Separator, EMPTY_OUTLINE_MESSAGE};

    const VANUATU: &str = r#"<html><body>
        <div id="mw-content-text">
            <h1>Vanuatu</h1>
            <h2>Etymology[edit]</h2>
            <h2>History[edit]</h2>
            <h3>Prehistory</h3>
            <h2>See also</h2>
            <h2>References</h2>
        </div>
    </body></html>"#;

    async fn serve(server: &MockServer, path: &str, body: &str) {
        let path = path.to_string();
        let body = body.to_string();
        server
            .mock_async(move |when, then| {
                when.method(GET).path(path);
                then.status(200).body(body);
            })
            .await;
    }

    fn setup(server: &MockServer, config: OutlineConfig) -> (WikipediaClient, OutlineConfig) {
        let config = OutlineConfig {
            wiki_url: server.url("/wiki"),
            ..config
        };
        let client = WikipediaClient::new(&config).unwrap();
        (client, config)
    }

    #[test]
    fn test_elapsed_ms() {
        let start = Instant::now() - std::time::Duration::from_millis(1_500);
        let ms = elapsed_ms(start);
        assert!((1_500..60_000).contains(&ms));
    }

    #[tokio::test]
    async fn test_fetch_outline_data_vanuatu() {
        let server = MockServer::start_async().await;
        serve(&server, "/wiki/Vanuatu", VANUATU).await;
        let (client, config) = setup(&server, OutlineConfig::default());

        let output = fetch_outline_data(&client, &config, "Vanuatu").await.unwrap();

        assert_eq!(output.country, "Vanuatu");
        assert_eq!(
            output.headings,
            vec![
                HeadingRecord::new(1, "Vanuatu"),
                HeadingRecord::new(2, "Etymology"),
                HeadingRecord::new(2, "History"),
                HeadingRecord::new(3, "Prehistory"),
            ]
        );
        assert_eq!(
            output.markdown,
            "# Vanuatu\n## Etymology\n## History\n### Prehistory"
        );
    }

    #[tokio::test]
    async fn test_fetch_outline_data_render_options() {
        let server = MockServer::start_async().await;
        serve(&server, "/wiki/Vanuatu", VANUATU).await;
        let (client, config) = setup(
            &server,
            OutlineConfig {
                render: RenderOptions {
                    separator: Separator::BlankLine,
                    contents_header: true,
                },
                ..OutlineConfig::default()
            },
        );

        let output = fetch_outline_data(&client, &config, "Vanuatu").await.unwrap();

        assert_eq!(
            output.markdown,
            "# Contents\n\n# Vanuatu\n\n## Etymology\n\n## History\n\n### Prehistory"
        );
    }

    #[tokio::test]
    async fn test_fetch_outline_data_empty_message_policy() {
        let server = MockServer::start_async().await;
        serve(&server, "/wiki/Nowhere", "<p>No sections</p>").await;
        let (client, config) = setup(&server, OutlineConfig::default());

        let output = fetch_outline_data(&client, &config, "Nowhere").await.unwrap();

        assert!(output.headings.is_empty());
        assert_eq!(output.markdown, EMPTY_OUTLINE_MESSAGE);
    }

    #[tokio::test]
    async fn test_fetch_outline_data_empty_error_policy() {
        let server = MockServer::start_async().await;
        serve(&server, "/wiki/Nowhere", "<h2>References</h2>").await;
        let (client, config) = setup(
            &server,
            OutlineConfig {
                empty: EmptyPolicy::Error,
                ..OutlineConfig::default()
            },
        );

        let result = fetch_outline_data(&client, &config, "Nowhere").await;

        assert!(matches!(result, Err(Error::NoHeadingsFound(name)) if name == "Nowhere"));
    }
}
