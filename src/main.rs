use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gg_runner::key_service::GgKeyService;
use gg_runner::runner;

/// Derives the image host routing code for a gallery and writes it to stdout
/// as a raw JSON document.
#[derive(Parser)]
#[clap(version)]
struct Opts {
    /// Gallery content id.
    content_id: Option<String>,

    /// Code number derived from the image hash.
    code_number: Option<String>,

    #[clap(hide = true, num_args = 0..)]
    rest: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();

    let args: Vec<String> = opts
        .content_id
        .into_iter()
        .chain(opts.code_number)
        .chain(opts.rest)
        .collect();

    let mut stdout = std::io::stdout().lock();

    runner::run(&args, &GgKeyService, &mut stdout).await?;

    Ok(())
}
