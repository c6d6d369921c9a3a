//! Geocoding results.

use crate::model::bootcamp::LocationDto;

/// A geocoded address: coordinates plus the normalized address components reported by
/// the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub formatted_address: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
    pub country: Option<String>,
}

impl GeoLocation {
    pub fn into_dto(self) -> LocationDto {
        LocationDto {
            coordinates: [self.longitude, self.latitude],
            formatted_address: self.formatted_address,
            street: self.street,
            city: self.city,
            state: self.state,
            zipcode: self.zipcode,
            country: self.country,
        }
    }
}
