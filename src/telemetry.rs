use std::{env, io};
use tokio::task::JoinHandle;
use tracing::{info, warn, Level};
use tracing_loki::url::Url;
use tracing_loki::BackgroundTaskController;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{filter, fmt};

/// Keeps the Loki shipping task alive for the life of the process.
pub struct TelemetryGuard {
    pub controller: BackgroundTaskController,
    pub handle: JoinHandle<()>,
}

/// Stdout fmt layer always; Loki layer only when `LOKI_URL` is set and
/// reachable, so local runs never depend on it.
pub async fn init() -> Option<TelemetryGuard> {
    let filter = filter::Targets::new()
        .with_target("nightowl", Level::TRACE)
        .with_default(Level::WARN);
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stdout));

    let base_url = match env::var("LOKI_URL") {
        Ok(url) => url.parse::<Url>().expect("Invalid LOKI_URL format"),
        Err(_) => {
            registry.init();
            warn!("Loki URL not provided. Continuing without it.");
            return None;
        }
    };

    if reqwest::get(base_url.clone()).await.is_err() {
        registry.init();
        warn!("Couldn't connect to Loki. Continuing without it.");
        return None;
    }

    let (layer, controller, task) = tracing_loki::builder()
        .label("service", "nightowl")
        .expect("Failed setting label")
        .build_controller_url(base_url)
        .expect("Failed building Loki layer");

    registry.with(layer).init();
    let handle = tokio::spawn(task);

    info!("Loki initialized");

    Some(TelemetryGuard { controller, handle })
}
