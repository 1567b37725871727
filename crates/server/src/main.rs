mod api;
mod error;
mod router;
mod startup;
mod state;
mod worker;

use std::path::Path;

use tracing::info;

use cohort_core::Config;
use cohort_ingest::JsonImporter;

fn load_config() -> Config {
    cohort_core::config::load_dotenv();
    Config::from_env()
}

/// Start the HTTP server, optionally preloading a local dataset file.
async fn serve(config: Config, preload: Option<&Path>) -> anyhow::Result<()> {
    config.log_summary();
    let profile = config.dataset.field_profile();

    let (state, receiver) = startup::build_app_state(config);

    if let Some(path) = preload {
        let records = JsonImporter::import_file(path, &profile)?;
        let count = state.dataset.load(records).await;
        info!("Preloaded {} records from {}", count, path.display());
    }

    startup::spawn_workers(&state, receiver);

    let addr = format!(
        "{}:{}",
        state.config.server.host, state.config.server.port
    );
    let app = router::build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let config = load_config();
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("serve") | None => {
            let preload = args.get(2).map(Path::new);
            serve(config, preload).await?;
        }
        _ => {
            println!("cohort v{}", env!("CARGO_PKG_VERSION"));
            println!("Usage: cohort-server [command]");
            println!("  serve [dataset.json]   Start the HTTP server (default), optionally");
            println!("                         preloading a local JSON dataset file");
        }
    }

    Ok(())
}
