mod cli;
mod config;
mod output;

use std::io::{self, Write};

use awskp_core::{KeyRequest, KeyRetriever, ParameterStore};
use awskp_ssm::{SessionOptions, SsmParameterStore};
use color_eyre::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Entry point: parse flags, open a region-scoped session, fetch once, emit.
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli = cli::parse_or_exit();
    let config = config::load()?;
    let outfile = cli.outfile_path();
    let request = KeyRequest::new(cli.region, cli.key_id, outfile)?;

    let options = SessionOptions::new(request.region())
        .with_profile(cli.profile.or(config.profile))
        .with_endpoint_url(config.endpoint_url);
    let store = SsmParameterStore::connect(&options).await;

    let stdout = io::stdout();
    run(&request, store, &mut stdout.lock()).await
}

fn init_tracing() {
    // Stdout carries the key, so logs go to stderr and stay quiet by default.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(io::stderr);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

/// Fetch the key for `request` and write it to the requested sink.
async fn run<S, W>(request: &KeyRequest, store: S, stdout: &mut W) -> Result<()>
where
    S: ParameterStore,
    W: Write,
{
    let retriever = KeyRetriever::new(store);
    let key = retriever.fetch(request.key_id()).await?;

    match request.outfile() {
        Some(path) => {
            output::write_file(path, &key)?;
            info!(path = %path.display(), "private key saved");
        }
        None => output::write_stdout(stdout, &key)?,
    }
    Ok(())
}
