//! Address geocoding through external providers.
//!
//! Bootcamp creation and address updates resolve the address to coordinates and
//! normalized components, radius searches resolve a zipcode to the search centre. The
//! provider is chosen at startup from configuration.

use async_trait::async_trait;
use serde::Deserialize;

use crate::server::{error::AppError, model::geo::GeoLocation};

const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";
const MAPQUEST_URL: &str = "https://www.mapquestapi.com/geocoding/v1/address";

/// Resolves free-form addresses to locations.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Geocodes an address or zipcode.
    ///
    /// # Returns
    /// - `Ok(Some(GeoLocation))` - Best match reported by the provider
    /// - `Ok(None)` - Provider found no match
    /// - `Err(AppError::ReqwestErr)` - Provider unreachable or returned an error status
    async fn geocode(&self, query: &str) -> Result<Option<GeoLocation>, AppError>;
}

/// OpenStreetMap Nominatim geocoder.
pub struct NominatimGeocoder {
    http: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
    #[serde(default)]
    address: NominatimAddress,
}

#[derive(Debug, Default, Deserialize)]
struct NominatimAddress {
    house_number: Option<String>,
    road: Option<String>,
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    state: Option<String>,
    postcode: Option<String>,
    country_code: Option<String>,
}

impl NominatimGeocoder {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    fn into_location(place: NominatimPlace) -> Result<GeoLocation, AppError> {
        let latitude = place.lat.parse::<f64>().map_err(|e| {
            AppError::InternalError(format!("Invalid latitude from geocoder: {}", e))
        })?;
        let longitude = place.lon.parse::<f64>().map_err(|e| {
            AppError::InternalError(format!("Invalid longitude from geocoder: {}", e))
        })?;

        let address = place.address;
        let street = match (address.house_number, address.road) {
            (Some(number), Some(road)) => Some(format!("{} {}", number, road)),
            (None, road) => road,
            (Some(number), None) => Some(number),
        };

        Ok(GeoLocation {
            latitude,
            longitude,
            formatted_address: Some(place.display_name),
            street,
            city: address.city.or(address.town).or(address.village),
            state: address.state,
            zipcode: address.postcode,
            country: address.country_code.map(|c| c.to_uppercase()),
        })
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, query: &str) -> Result<Option<GeoLocation>, AppError> {
        tracing::debug!("Geocoding '{}' with Nominatim", query);

        let places: Vec<NominatimPlace> = self
            .http
            .get(NOMINATIM_URL)
            .query(&[
                ("q", query),
                ("format", "jsonv2"),
                ("addressdetails", "1"),
                ("limit", "1"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match places.into_iter().next() {
            Some(place) => Self::into_location(place).map(Some),
            None => {
                tracing::warn!("No geocoding result for '{}'", query);
                Ok(None)
            }
        }
    }
}

/// MapQuest geocoder, requires an API key.
pub struct MapQuestGeocoder {
    http: reqwest::Client,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct MapQuestResponse {
    results: Vec<MapQuestResult>,
}

#[derive(Debug, Deserialize)]
struct MapQuestResult {
    locations: Vec<MapQuestLocation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MapQuestLocation {
    lat_lng: MapQuestLatLng,
    street: Option<String>,
    /// City
    admin_area5: Option<String>,
    /// State
    admin_area3: Option<String>,
    postal_code: Option<String>,
    /// Country
    admin_area1: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MapQuestLatLng {
    lat: f64,
    lng: f64,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl MapQuestGeocoder {
    pub fn new(http: reqwest::Client, api_key: String) -> Self {
        Self { http, api_key }
    }

    fn into_location(location: MapQuestLocation) -> GeoLocation {
        let street = non_empty(location.street);
        let city = non_empty(location.admin_area5);
        let state = non_empty(location.admin_area3);
        let zipcode = non_empty(location.postal_code);
        let country = non_empty(location.admin_area1);

        let state_zip = [state.as_deref(), zipcode.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        let formatted = [
            street.as_deref(),
            city.as_deref(),
            Some(state_zip.as_str()).filter(|s| !s.is_empty()),
            country.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");

        GeoLocation {
            latitude: location.lat_lng.lat,
            longitude: location.lat_lng.lng,
            formatted_address: Some(formatted).filter(|f| !f.is_empty()),
            street,
            city,
            state,
            zipcode,
            country,
        }
    }
}

#[async_trait]
impl Geocoder for MapQuestGeocoder {
    async fn geocode(&self, query: &str) -> Result<Option<GeoLocation>, AppError> {
        tracing::debug!("Geocoding '{}' with MapQuest", query);

        let response: MapQuestResponse = self
            .http
            .get(MAPQUEST_URL)
            .query(&[("key", self.api_key.as_str()), ("location", query)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let location = response
            .results
            .into_iter()
            .flat_map(|r| r.locations)
            .next();

        if location.is_none() {
            tracing::warn!("No geocoding result for '{}'", query);
        }

        Ok(location.map(Self::into_location))
    }
}

/// Geocoder answering from a fixed table, for tests.
#[cfg(test)]
pub struct StaticGeocoder {
    locations: std::collections::HashMap<String, GeoLocation>,
}

#[cfg(test)]
impl StaticGeocoder {
    pub fn new() -> Self {
        Self {
            locations: std::collections::HashMap::new(),
        }
    }

    /// Registers coordinates returned for an exact query string.
    pub fn with(mut self, query: &str, latitude: f64, longitude: f64) -> Self {
        self.locations.insert(
            query.to_string(),
            GeoLocation {
                latitude,
                longitude,
                formatted_address: Some(query.to_string()),
                street: None,
                city: None,
                state: None,
                zipcode: None,
                country: Some("US".to_string()),
            },
        );
        self
    }
}

#[cfg(test)]
#[async_trait]
impl Geocoder for StaticGeocoder {
    async fn geocode(&self, query: &str) -> Result<Option<GeoLocation>, AppError> {
        Ok(self.locations.get(query).cloned())
    }
}
