use runtracker::{
    api,
    store::DEFAULT_PROFILE,
    tracker::start_polling_task,
    AppState, DetachedSource, EventBus, FileProfileRepository, PollConfig, ScriptedSource,
    SnapshotSource, StaticTables, Tracker, TrackerConfig, TrackerStore,
};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "runtracker=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting run tracker");

    let config = TrackerConfig::from_env().expect("Invalid tracker configuration");

    let tables = match &config.tables_file {
        Some(path) => match StaticTables::load(path) {
            Ok(tables) => tables,
            Err(e) => {
                warn!(error = %e, "Falling back to built-in lookup tables");
                StaticTables::default()
            }
        },
        None => StaticTables::default(),
    };
    let tables = Arc::new(tables);

    let repository = Arc::new(FileProfileRepository::new(config.profiles_dir.clone()));
    let store = Arc::new(TrackerStore::new(repository, config.view_settings()));
    store
        .load_profile(DEFAULT_PROFILE)
        .await
        .expect("Failed to load the default profile");

    let source: Arc<dyn SnapshotSource> = match &config.replay_file {
        Some(path) => match ScriptedSource::from_file(path) {
            Ok(source) => Arc::new(source),
            Err(e) => {
                error!(error = %e, "Replay file unusable, running detached");
                Arc::new(DetachedSource)
            }
        },
        None => {
            info!("No snapshot source attached, waiting idle");
            Arc::new(DetachedSource)
        }
    };

    let event_bus = EventBus::default();
    let tracker = Arc::new(
        Tracker::builder(Arc::clone(&store), Arc::clone(&tables))
            .with_pickup_window(config.pickup_window)
            .build(),
    );

    // Start the snapshot polling task in the background
    tokio::spawn(start_polling_task(
        source,
        tracker,
        event_bus.clone(),
        PollConfig {
            tick_interval: config.tick_interval,
        },
    ));

    let app_state = AppState::new(Arc::clone(&store), tables, event_bus);
    let app = api::router(app_state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind listener");
    info!(addr = %config.bind_addr, "Server running");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "Server error");
    }

    match store.save_current_profile().await {
        Ok(()) => info!("Profile saved, shutting down"),
        Err(e) => warn!(error = %e, "Final profile save failed"),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
}
