use crate::config::OutlineOptions;

#[derive(Debug, clap::Parser)]
#[command(name = "serve")]
#[command(about = "Serve country outlines and MIME detection over HTTP")]
pub struct App {
    /// Port to listen on
    #[arg(short, long, env = "OUTLINE_PORT", default_value = "8000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "OUTLINE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[clap(flatten)]
    pub outline: OutlineOptions,
}
