//! HTTP fetch against a real web server serving the fixture manifest.
//!
//! Needs Docker: `cargo test -- --ignored`.

mod fixtures;

use testcontainers::core::{IntoContainerPort, Mount};
use testcontainers::runners::SyncRunner;
use testcontainers::{Container, GenericImage, ImageExt, TestcontainersError};

use route_tracker::config::{FetchConfig, TrackerConfig};
use route_tracker::fetch::HttpManifestFetcher;
use route_tracker::geojson::GeoJsonAdapter;
use route_tracker::manifest::Manifest;
use route_tracker::tracker::Tracker;
use route_tracker::traits::ManifestFetcher;

use fixtures::{christmas_eve_json_path, christmas_eve_manifest, DEPARTURE};

fn nginx_container() -> Result<(Container<GenericImage>, String), TestcontainersError> {
    let fixtures_dir = christmas_eve_json_path()
        .parent()
        .map(|dir| dir.to_string_lossy().to_string())
        .unwrap_or_default();

    let image = GenericImage::new("nginx", "alpine")
        .with_exposed_port(80.tcp())
        .with_mount(Mount::bind_mount(fixtures_dir, "/usr/share/nginx/html"))
        .with_startup_timeout(std::time::Duration::from_secs(30));

    let container = image.start()?;
    let port = container.get_host_port_ipv4(80.tcp())?;
    let base_url = format!("http://127.0.0.1:{}", port);

    Ok((container, base_url))
}

fn fetch_when_ready(fetcher: &HttpManifestFetcher, url: &str) -> Option<Manifest> {
    let start = std::time::Instant::now();
    while start.elapsed() < std::time::Duration::from_secs(15) {
        if let Ok(manifest) = fetcher.fetch_manifest(url) {
            return Some(manifest);
        }
        std::thread::sleep(std::time::Duration::from_millis(500));
    }
    None
}

#[test]
#[ignore = "requires Docker"]
fn http_fetch_decodes_manifest() {
    let (container, base_url) = nginx_container().expect("start nginx container");
    let fetcher = HttpManifestFetcher::new(FetchConfig::default()).expect("build HTTP client");

    let url = format!("{}/christmas_eve.json", base_url);
    let manifest = fetch_when_ready(&fetcher, &url).expect("manifest served");
    assert_eq!(manifest, christmas_eve_manifest());

    let missing = fetcher.fetch_manifest(&format!("{}/missing.json", base_url));
    assert!(missing.is_err(), "404 must be reported as a fetch failure");

    drop(container);
}

#[test]
#[ignore = "requires Docker"]
fn tracker_over_http_renders_route() {
    let (container, base_url) = nginx_container().expect("start nginx container");
    let fetcher = HttpManifestFetcher::new(FetchConfig::default()).expect("build HTTP client");
    let url = format!("{}/christmas_eve.json", base_url);
    fetch_when_ready(&fetcher, &url).expect("manifest served");

    let config = TrackerConfig {
        manifest_url: url,
        ..TrackerConfig::default()
    };
    let tracker = Tracker::new(fetcher, config);
    let mut adapter = GeoJsonAdapter::new();
    let now = jiff::Timestamp::from_millisecond(DEPARTURE + 86_400_000).unwrap();
    let presentation = tracker.render(&mut adapter, now);

    assert!(presentation.has_current_agent);
    assert_eq!(presentation.completed_stops.len(), 4);
    assert_eq!(adapter.features().len(), 6);

    drop(container);
}
