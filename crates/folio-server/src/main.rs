//! Folio — portfolio content server backed by published spreadsheet sheets.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod routes;
mod state;

use state::AppState;

fn resolve_data_dir() -> PathBuf {
    std::env::var("FOLIO_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let exe_dir = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()));
            if let Some(dir) = exe_dir {
                let parent_data = dir.join("../data");
                if parent_data.exists() {
                    return parent_data;
                }
            }
            PathBuf::from("data")
        })
}

fn print_help() {
    println!("Folio — portfolio content server");
    println!();
    println!("Usage: folio [command]");
    println!();
    println!("Commands:");
    println!("  (none) | serve           Start the server");
    println!("  fetch [--no-cache]       Print the assembled content as JSON");
    println!("  help                     Show this help message");
}

/// Run one load and print the content model.
async fn fetch(state: &AppState, ignore_cache: bool) -> anyhow::Result<()> {
    let content = state.service.load(ignore_cache).await;
    println!("{}", serde_json::to_string_pretty(&content)?);

    if let Some(report) = state.service.last_report() {
        if !report.unavailable.is_empty() {
            eprintln!(
                "Unavailable sheets: {}",
                report
                    .unavailable
                    .iter()
                    .map(|k| k.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
    }
    Ok(())
}

async fn serve(state: Arc<AppState>) -> anyhow::Result<()> {
    let app = routes::build_router(state.clone());

    let addr = format!("0.0.0.0:{}", state.config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Folio server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("serve");

    if matches!(command, "--help" | "-h" | "help") {
        print_help();
        return Ok(());
    }

    let data_dir = resolve_data_dir();
    info!("Data directory: {}", data_dir.display());

    let config = folio_core::FolioConfig::from_env(&data_dir)?;
    let state = AppState::from_config(config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize service: {}", e))?;

    match command {
        "serve" => serve(Arc::new(state)).await,
        "fetch" => {
            let ignore_cache = args[2..].iter().any(|a| a == "--no-cache");
            fetch(&state, ignore_cache).await
        }
        other => {
            eprintln!("Unknown command: {}. Use 'folio help' for usage.", other);
            std::process::exit(1);
        }
    }
}
