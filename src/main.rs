use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use jiff::Timestamp;
use tracing::info;

use route_tracker::config::{FetchConfig, TrackerConfig};
use route_tracker::fetch::{FileManifestFetcher, HttpManifestFetcher};
use route_tracker::geojson::GeoJsonAdapter;
use route_tracker::popup::DigitGrouping;
use route_tracker::tracker::Tracker;
use route_tracker::traits::ManifestFetcher;

#[derive(Parser)]
#[clap(author, version, about = "Render the tracked agent's route as GeoJSON", long_about = None)]
struct Cli {
    /// Manifest URL (overrides the config file)
    #[arg(short, long, conflicts_with = "file")]
    url: Option<String>,

    /// Read the manifest from a local JSON file instead of fetching it
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Evaluation instant, RFC 3339 or epoch milliseconds (default: now)
    #[arg(short, long, value_parser = parse_timestamp)]
    now: Option<Timestamp>,

    /// JSON tracker configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum)]
    grouping: Option<Grouping>,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Grouping {
    Thousands,
    Indian,
}

impl From<Grouping> for DigitGrouping {
    fn from(grouping: Grouping) -> Self {
        match grouping {
            Grouping::Thousands => DigitGrouping::Thousands,
            Grouping::Indian => DigitGrouping::Indian,
        }
    }
}

fn parse_timestamp(raw: &str) -> Result<Timestamp, String> {
    if let Ok(millis) = raw.parse::<i64>() {
        return Timestamp::from_millisecond(millis).map_err(|err| err.to_string());
    }
    raw.parse::<Timestamp>().map_err(|err| err.to_string())
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let mut config = match &cli.config {
        Some(path) => TrackerConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => TrackerConfig::default(),
    };
    if let Some(url) = cli.url {
        config.manifest_url = url;
    }
    if let Some(grouping) = cli.grouping {
        config.evaluate.grouping = grouping.into();
    }

    let fetcher: Box<dyn ManifestFetcher> = match cli.file {
        Some(path) => {
            config.manifest_url = path.to_string_lossy().into_owned();
            Box::new(FileManifestFetcher)
        }
        None => Box::new(HttpManifestFetcher::new(FetchConfig {
            timeout_secs: cli.timeout,
        })?),
    };

    let now = cli.now.unwrap_or_else(Timestamp::now);
    let mut adapter = GeoJsonAdapter::with_view(config.map.clone());
    let tracker = Tracker::new(fetcher, config);
    let presentation = tracker.render(&mut adapter, now);
    info!(
        idle = presentation.is_idle(),
        completed = presentation.completed_stops.len(),
        "rendered route at {now}"
    );

    let output = serde_json::to_string_pretty(&adapter.into_feature_collection())?;
    println!("{output}");
    Ok(())
}
