mod model;
mod server;

use clap::{Parser, Subcommand};
use sea_orm::DatabaseConnection;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::{
    config::Config, error::AppError, router::router, service::seed::SeedService, startup,
    state::AppState,
};

#[derive(Parser)]
#[command(version, about = "DevCamper bootcamp directory API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Load or remove seed data
    Seed {
        #[command(subcommand)]
        action: SeedAction,
    },
}

#[derive(Subcommand)]
enum SeedAction {
    /// Import users.json, bootcamps.json, courses.json and reviews.json from a directory
    Import {
        #[arg(default_value = "data")]
        dir: PathBuf,
        /// Geocode bootcamp addresses with the configured provider
        #[arg(long)]
        geocode: bool,
    },
    /// Delete all users, bootcamps, courses and reviews
    Destroy,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,devcamper=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config, db).await,
        Command::Seed { action } => seed(config, db, action).await,
    }
}

async fn serve(config: Config, db: DatabaseConnection) -> Result<(), AppError> {
    let http_client = startup::setup_reqwest_client()?;
    let geocoder = startup::build_geocoder(&config, http_client);
    let mailer = startup::build_mailer(&config)?;

    tokio::fs::create_dir_all(&config.file_upload_path).await?;

    let addr = format!("0.0.0.0:{}", config.port);
    let state = AppState::new(db, config, geocoder, mailer);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Starting server on {}", addr);
    tracing::info!("API docs: http://{}/api-docs", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn seed(config: Config, db: DatabaseConnection, action: SeedAction) -> Result<(), AppError> {
    match action {
        SeedAction::Import { dir, geocode } => {
            let geocoder = if geocode {
                let http_client = startup::setup_reqwest_client()?;
                Some(startup::build_geocoder(&config, http_client))
            } else {
                None
            };

            let summary = SeedService::new(&db, config.bcrypt_cost, geocoder.as_deref())
                .import(&dir)
                .await?;

            tracing::info!(
                "Imported {} users, {} bootcamps, {} courses and {} reviews from {}",
                summary.users,
                summary.bootcamps,
                summary.courses,
                summary.reviews,
                dir.display()
            );
        }
        SeedAction::Destroy => {
            let summary = SeedService::new(&db, config.bcrypt_cost, None)
                .destroy()
                .await?;

            tracing::info!(
                "Deleted {} users, {} bootcamps, {} courses and {} reviews",
                summary.users,
                summary.bootcamps,
                summary.courses,
                summary.reviews
            );
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
