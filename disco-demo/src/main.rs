use clap::Parser;
use disco_core::config::Config;
use disco_core::{Artist, ArtistId, CatalogAlbumSource};
use disco_ui::ArtistScreenBuilder;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod demo_data;
mod surface;

use surface::TerminalSurface;

/// Open the albums screen for an artist and render it to the terminal
#[derive(Parser, Debug)]
#[command(name = "disco", version)]
struct Args {
    /// Artist to open. An empty id opens the screen with no identity.
    #[arg(long, default_value = demo_data::DEMO_ARTIST_ID)]
    artist_id: String,

    /// Override the artist name shown as the title
    #[arg(long)]
    artist_name: Option<String>,

    /// Catalog YAML file (defaults to config, then the built-in catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Simulated fetch latency in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Pull-to-refresh this many times right after the screen appears
    #[arg(long, default_value_t = 0)]
    refreshes: u32,

    /// Use the error notice's retry action once if a fetch fails
    #[arg(long)]
    retry: bool,
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    // Default to info level if RUST_LOG not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn load_source(
    args: &Args,
    config: &Config,
) -> Result<CatalogAlbumSource, Box<dyn std::error::Error>> {
    let source = match args.catalog.as_ref().or(config.catalog_path.as_ref()) {
        Some(path) => CatalogAlbumSource::load(path)?,
        None => {
            info!("Using built-in demo catalog");
            demo_data::demo_catalog()
        }
    };
    let delay = args
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or(config.fetch_delay);
    Ok(source.with_delay(delay))
}

fn resolve_artist(args: &Args, source: &CatalogAlbumSource) -> Artist {
    let known = source.artist(&args.artist_id);
    let name = args
        .artist_name
        .clone()
        .or_else(|| known.and_then(|artist| artist.name));
    Artist::new(ArtistId::new(args.artist_id.clone()), name)
}

async fn run(args: Args, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let source = load_source(&args, &config)?;
    let artist = resolve_artist(&args, &source);

    let (mut screen, mut updates) = ArtistScreenBuilder::new(artist)
        .source(Arc::new(source))
        .build(TerminalSurface::new(std::io::stdout()))?;

    screen.on_appear();
    for _ in 0..args.refreshes {
        screen.on_refresh_triggered();
    }

    let mut retried = false;
    loop {
        while screen.is_refreshing() {
            match updates.recv().await {
                Some(update) => screen.apply(update),
                None => break,
            }
        }

        let can_retry = screen
            .state()
            .error
            .as_ref()
            .is_some_and(|error| error.retry_label.is_some());
        if args.retry && !retried && can_retry {
            retried = true;
            info!("Retrying from error notice");
            screen.retry_from_error();
            continue;
        }
        break;
    }

    screen.dismiss();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    configure_logging();
    let args = Args::parse();
    let config = Config::load()?;
    info!("Starting disco for artist '{}'", args.artist_id);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(args, config))
}
