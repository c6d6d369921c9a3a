use std::{sync::Arc, time::Duration};

use crate::server::{
    config::{Config, GeocoderProvider},
    error::AppError,
    service::{
        geocoder::{Geocoder, MapQuestGeocoder, NominatimGeocoder},
        mailer::{LogMailer, Mailer, SmtpMailer},
    },
};

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for geocoding requests.
///
/// Redirects are disabled so the client only ever talks to the configured provider.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(HTTP_TIMEOUT)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}

/// Creates the geocoder for the configured provider.
pub fn build_geocoder(config: &Config, http_client: reqwest::Client) -> Arc<dyn Geocoder> {
    match &config.geocoder {
        GeocoderProvider::Nominatim => Arc::new(NominatimGeocoder::new(http_client)),
        GeocoderProvider::MapQuest { api_key } => {
            Arc::new(MapQuestGeocoder::new(http_client, api_key.clone()))
        }
    }
}

/// Creates the mailer, falling back to logging emails when no SMTP relay is configured.
pub fn build_mailer(config: &Config) -> Result<Arc<dyn Mailer>, AppError> {
    match &config.smtp {
        Some(smtp) => Ok(Arc::new(SmtpMailer::new(
            smtp,
            &config.from_name,
            &config.from_email,
        )?)),
        None => {
            tracing::warn!("SMTP_HOST not set, password reset emails will only be logged");
            Ok(Arc::new(LogMailer))
        }
    }
}
