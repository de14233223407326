use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use voicebank::{export, AppState, Config, RecordingStore};

#[derive(Parser)]
#[command(name = "voicebank", version, about = "Prompt-driven audio collection service")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP ingestion service
    Serve,
    /// Dump all stored recordings to local files plus a CSV manifest
    Export,
    /// Show statistics about the recording store
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "voicebank=info,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let cfg = Config::load("config/voicebank")?;

    match cli.command {
        Command::Serve => serve(cfg).await,
        Command::Export => {
            let store = RecordingStore::connect(&cfg.database_url).await?;
            export::show_database_stats(&store).await?;
            println!();
            export::download_all_recordings(&store, &cfg.export_dir).await?;
            println!("\n✓ Download complete! Check the '{}/' folder.", cfg.export_dir);
            Ok(())
        }
        Command::Stats => {
            let store = RecordingStore::connect(&cfg.database_url).await?;
            export::show_database_stats(&store).await?;
            Ok(())
        }
    }
}

async fn serve(cfg: Config) -> Result<()> {
    info!("voicebank v{}", env!("CARGO_PKG_VERSION"));
    info!("Database: {}", cfg.database_url);
    info!("Prompts file: {}", cfg.prompts_file);

    let store = RecordingStore::connect(&cfg.database_url).await?;

    // A schema failure is logged but does not abort startup; requests
    // against a missing table then fail individually with a 500.
    match store.init_schema().await {
        Ok(()) => info!("Database initialized successfully"),
        Err(e) => error!("Database initialization error: {}", e),
    }

    let state = AppState::new(store, &cfg.prompts_file);
    let app = voicebank::create_router(state, &cfg.static_dir);

    let addr = format!("{}:{}", cfg.http.bind, cfg.http.port);
    info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
