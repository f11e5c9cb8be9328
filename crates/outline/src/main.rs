use crate::prelude::*;
use clap::Parser;

mod config;
mod error;
mod mime;
mod outline;
mod prelude;
mod server;
mod wiki;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Markdown outlines of Wikipedia country articles, served over HTTP"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "OUTLINE_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Run the HTTP server
    Serve(crate::server::App),

    /// Fetch the outline of a country article and print it
    Fetch(crate::outline::FetchOptions),

    /// Detect the MIME type of a data URI
    Mime(crate::mime::MimeOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(sub_app) => crate::server::run(sub_app, app.global).await,
        SubCommands::Fetch(options) => crate::outline::fetch::run(options, app.global).await,
        SubCommands::Mime(options) => crate::mime::run(options),
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
