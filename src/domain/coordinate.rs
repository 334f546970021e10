// Coordinate domain models, one type per reference system
use super::error::ClimateError;
use serde::Serialize;

/// WGS84 latitude/longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeographicCoord {
    pub lat: f64,
    pub lon: f64,
}

impl GeographicCoord {
    pub fn new(lat: f64, lon: f64) -> Result<Self, ClimateError> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(ClimateError::InvalidInput(format!(
                "coordinate ({}, {}) is not numeric",
                lat, lon
            )));
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(ClimateError::InvalidInput(format!(
                "coordinate ({}, {}) is outside WGS84 bounds",
                lat, lon
            )));
        }
        Ok(Self { lat, lon })
    }
}

/// Planar UTM coordinate in metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectedCoord {
    pub easting: f64,
    pub northing: f64,
}

impl ProjectedCoord {
    pub fn new(easting: f64, northing: f64) -> Self {
        Self { easting, northing }
    }

    /// Parse text-entered values such as " 6902926.76 ".
    pub fn parse(easting: &str, northing: &str) -> Result<Self, ClimateError> {
        Ok(Self::new(parse_metres(easting)?, parse_metres(northing)?))
    }

    pub fn rounded(&self) -> Self {
        Self::new(round2(self.easting), round2(self.northing))
    }

    /// Whole-metre cell reference used in grid service URLs.
    pub fn truncated(&self) -> (i64, i64) {
        (self.easting.trunc() as i64, self.northing.trunc() as i64)
    }
}

fn parse_metres(text: &str) -> Result<f64, ClimateError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| ClimateError::InvalidInput(format!("'{}' is not a coordinate value", text)))?;
    if !value.is_finite() {
        return Err(ClimateError::InvalidInput(format!(
            "'{}' is not a coordinate value",
            text
        )));
    }
    Ok(value)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
