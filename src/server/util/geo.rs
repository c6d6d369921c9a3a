//! Spherical geometry for the bootcamp radius search.

use std::str::FromStr;

use crate::server::error::AppError;

/// Earth radius in miles.
pub const EARTH_RADIUS_MI: f64 = 3963.0;
/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6378.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    Miles,
    Kilometers,
}

impl DistanceUnit {
    pub fn earth_radius(&self) -> f64 {
        match self {
            DistanceUnit::Miles => EARTH_RADIUS_MI,
            DistanceUnit::Kilometers => EARTH_RADIUS_KM,
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mi" | "mile" | "miles" => Ok(DistanceUnit::Miles),
            "km" | "kilometer" | "kilometers" => Ok(DistanceUnit::Kilometers),
            other => Err(AppError::BadRequest(format!(
                "Invalid distance unit '{}', use 'mi' or 'km'",
                other
            ))),
        }
    }
}

/// Converts a distance to a radius in radians on the Earth's surface.
pub fn radius_radians(distance: f64, unit: DistanceUnit) -> Result<f64, AppError> {
    if !distance.is_finite() || distance <= 0.0 {
        return Err(AppError::BadRequest(
            "Distance must be a positive number".to_string(),
        ));
    }
    Ok(distance / unit.earth_radius())
}

/// Central angle in radians between two points, by the haversine formula.
pub fn central_angle(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlng = (lng2 - lng1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlng / 2.0).sin().powi(2);

    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Latitude/longitude rectangle enclosing a spherical cap, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Box enclosing every point within `radius` radians of the centre.
    ///
    /// Falls back to the full longitude range near the poles, where the cap wraps.
    pub fn around(lat: f64, lng: f64, radius: f64) -> Self {
        let dlat = radius.to_degrees();
        let min_lat = (lat - dlat).max(-90.0);
        let max_lat = (lat + dlat).min(90.0);

        let cos_lat = lat.to_radians().cos();
        let (min_lng, max_lng) = if max_lat >= 90.0 || min_lat <= -90.0 || cos_lat <= f64::EPSILON
        {
            (-180.0, 180.0)
        } else {
            let dlng = (radius.sin() / cos_lat).clamp(-1.0, 1.0).asin().to_degrees();
            if lng - dlng < -180.0 || lng + dlng > 180.0 {
                (-180.0, 180.0)
            } else {
                (lng - dlng, lng + dlng)
            }
        };

        Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        }
    }
}
