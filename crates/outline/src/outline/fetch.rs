use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use std::io::IsTerminal;

use super::{fetch_outline_data, OutlineOutput};
use crate::config::{OutlineConfig, OutlineOptions};
use crate::wiki::WikipediaClient;

#[derive(Debug, clap::Args, Clone)]
pub struct FetchOptions {
    /// Country whose Wikipedia article should be outlined
    #[clap(env = "OUTLINE_COUNTRY")]
    pub country: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[clap(flatten)]
    pub outline: OutlineOptions,
}

pub async fn run(options: FetchOptions, global: crate::Global) -> Result<()> {
    let config = OutlineConfig::try_from(options.outline.clone())?;
    let client = WikipediaClient::new(&config)?;

    if global.verbose {
        eprintln!("Wiki URL: {}", config.wiki_url);
        eprintln!("Content scope: {}", config.scope.marker().unwrap_or("<document>"));
        eprintln!();
    }

    let output = fetch_outline_data(&client, &config, &options.country).await?;

    if options.json {
        output_json(&output)?;
    } else {
        output_formatted(&output);
    }

    Ok(())
}

fn output_json(output: &OutlineOutput) -> Result<()> {
    let json = serde_json::to_string_pretty(output)?;
    println!("{}", json);
    Ok(())
}

/// Formats the decorated header shown above the outline on a terminal
fn format_output_text(output: &OutlineOutput) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!("{}\n", "COUNTRY OUTLINE".bright_cyan().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    result.push_str(&format!(
        "\n{}: {}\n",
        "Country".green(),
        output.country.bright_white().bold()
    ));
    result.push_str(&format!(
        "{}: {}\n",
        "URL".green(),
        output.url.cyan().underline()
    ));
    result.push_str(&format!(
        "{}: {}\n",
        "Total Headings".green(),
        output.headings.len().to_string().bright_yellow().bold()
    ));
    result.push_str(&format!(
        "{}: {}\n",
        "Fetch Time".green(),
        format!("{} ms", output.fetch_time_ms).bright_yellow()
    ));

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_magenta()));
    result.push_str(&format!("{}\n", "MARKDOWN OUTLINE".bright_magenta().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_magenta()));

    result
}

/// Formats usage hints shown below the outline on a terminal
fn format_usage_text(output: &OutlineOutput) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&format!("{}\n", "USAGE".bright_yellow().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_yellow()));

    result.push_str(&format!(
        "\n{}:\n",
        "To get JSON output".bright_white().bold()
    ));
    result.push_str(&format!(
        "  {}\n",
        format!("outline fetch \"{}\" --json", output.country).cyan()
    ));

    result.push_str(&format!(
        "\n{}:\n",
        "To separate headings with blank lines".bright_white().bold()
    ));
    result.push_str(&format!(
        "  {}\n",
        format!("outline fetch \"{}\" --separator blank-line", output.country).cyan()
    ));

    result.push('\n');

    result
}

fn output_formatted(output: &OutlineOutput) {
    // Check if stdout is a TTY (terminal) or being piped
    let is_tty = std::io::stdout().is_terminal();

    if is_tty {
        eprint!("{}", format_output_text(output));

        for line in output.markdown.lines() {
            println!("{}", line.white());
        }

        eprint!("{}", format_usage_text(output));
    } else {
        // Piped output: plain content only
        println!("{}", output.markdown);
    }
}
