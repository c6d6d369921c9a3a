use std::{path::PathBuf, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_JWT_EXPIRE_DAYS: i64 = 30;
const DEFAULT_BCRYPT_COST: u32 = 10;
const DEFAULT_FILE_UPLOAD_PATH: &str = "./public/uploads";
const DEFAULT_MAX_FILE_UPLOAD: u64 = 1_000_000;
const DEFAULT_PAGE: u64 = 1;
const DEFAULT_PAGE_LIMIT: u64 = 25;
const DEFAULT_FROM_NAME: &str = "DevCamper";
const DEFAULT_FROM_EMAIL: &str = "noreply@devcamper.io";

/// Geocoding backend used to resolve addresses and zipcodes to coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum GeocoderProvider {
    /// OpenStreetMap Nominatim, no key required.
    Nominatim,
    /// MapQuest geocoding API, requires `GEOCODER_API_KEY`.
    MapQuest { api_key: String },
}

/// SMTP relay settings. Absent when `SMTP_HOST` is not configured.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

/// Application configuration loaded from environment variables.
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub production: bool,

    pub jwt_secret: String,
    pub jwt_expire_days: i64,
    pub jwt_cookie_expire_days: i64,
    /// Bcrypt work factor for new password hashes.
    pub bcrypt_cost: u32,

    pub geocoder: GeocoderProvider,

    pub file_upload_path: PathBuf,
    pub max_file_upload: u64,

    pub default_page: u64,
    pub default_page_limit: u64,

    pub smtp: Option<SmtpConfig>,
    pub from_name: String,
    pub from_email: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let geocoder = match optional("GEOCODER_PROVIDER").as_deref() {
            None | Some("nominatim") | Some("openstreetmap") => GeocoderProvider::Nominatim,
            Some("mapquest") => GeocoderProvider::MapQuest {
                api_key: required("GEOCODER_API_KEY")?,
            },
            Some(other) => {
                return Err(ConfigError::InvalidEnvVar {
                    name: "GEOCODER_PROVIDER".to_string(),
                    value: other.to_string(),
                }
                .into())
            }
        };

        let smtp = match optional("SMTP_HOST") {
            Some(host) => Some(SmtpConfig {
                host,
                port: parsed_or("SMTP_PORT", 587)?,
                username: required("SMTP_EMAIL")?,
                password: required("SMTP_PASSWORD")?,
            }),
            None => None,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            port: parsed_or("PORT", DEFAULT_PORT)?,
            production: optional("APP_ENV").as_deref() == Some("production"),
            jwt_secret: required("JWT_SECRET")?,
            jwt_expire_days: parsed_or("JWT_EXPIRE_DAYS", DEFAULT_JWT_EXPIRE_DAYS)?,
            jwt_cookie_expire_days: parsed_or("JWT_COOKIE_EXPIRE_DAYS", DEFAULT_JWT_EXPIRE_DAYS)?,
            bcrypt_cost: parsed_or("BCRYPT_COST", DEFAULT_BCRYPT_COST)?,
            geocoder,
            file_upload_path: optional("FILE_UPLOAD_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_UPLOAD_PATH)),
            max_file_upload: parsed_or("MAX_FILE_UPLOAD", DEFAULT_MAX_FILE_UPLOAD)?,
            default_page: parsed_or("PAGE", DEFAULT_PAGE)?,
            default_page_limit: parsed_or("PAGE_LIMIT", DEFAULT_PAGE_LIMIT)?,
            smtp,
            from_name: optional("FROM_NAME").unwrap_or_else(|| DEFAULT_FROM_NAME.to_string()),
            from_email: optional("FROM_EMAIL").unwrap_or_else(|| DEFAULT_FROM_EMAIL.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parsed_or<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match optional(name) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    /// Configuration for tests: in-memory database, no SMTP, uploads in `upload_dir`.
    pub fn for_test(upload_dir: PathBuf) -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            port: DEFAULT_PORT,
            production: false,
            jwt_secret: "test_jwt_secret".to_string(),
            jwt_expire_days: DEFAULT_JWT_EXPIRE_DAYS,
            jwt_cookie_expire_days: DEFAULT_JWT_EXPIRE_DAYS,
            bcrypt_cost: 4,
            geocoder: GeocoderProvider::Nominatim,
            file_upload_path: upload_dir,
            max_file_upload: DEFAULT_MAX_FILE_UPLOAD,
            default_page: DEFAULT_PAGE,
            default_page_limit: DEFAULT_PAGE_LIMIT,
            smtp: None,
            from_name: DEFAULT_FROM_NAME.to_string(),
            from_email: DEFAULT_FROM_EMAIL.to_string(),
        }
    }
}
