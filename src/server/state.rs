//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request through
//! Axum's state extraction. Every field is cheap to clone: the database connection is a
//! pool handle and the remaining fields are reference counted.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    config::Config,
    model::query::PageDefaults,
    service::{auth::jwt::JwtService, geocoder::Geocoder, mailer::Mailer},
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Configuration loaded at startup.
    pub config: Arc<Config>,

    /// Signs and verifies access tokens.
    pub jwt: JwtService,

    /// Resolves bootcamp addresses and radius search zipcodes.
    pub geocoder: Arc<dyn Geocoder>,

    /// Delivers password reset emails.
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        config: Config,
        geocoder: Arc<dyn Geocoder>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        let jwt = JwtService::new(&config.jwt_secret, config.jwt_expire_days);

        Self {
            db,
            config: Arc::new(config),
            jwt,
            geocoder,
            mailer,
        }
    }

    /// Page and page size used by list endpoints when the request omits them.
    pub fn page_defaults(&self) -> PageDefaults {
        PageDefaults {
            page: self.config.default_page,
            limit: self.config.default_page_limit,
        }
    }
}
