// Projection - Transverse Mercator from WGS84 to ETRS89 / UTM
use super::coordinate::{GeographicCoord, ProjectedCoord};
use super::error::ClimateError;

/// GRS80 semi-major axis (metres)
const GRS80_A: f64 = 6_378_137.0;
/// GRS80 flattening
const GRS80_F: f64 = 1.0 / 298.257_222_101;
/// UTM scale factor on the central meridian
const UTM_K0: f64 = 0.9996;
/// UTM false easting (metres)
const UTM_FALSE_EASTING: f64 = 500_000.0;

/// Forward UTM mapping on GRS80 using the Krüger series to fourth order,
/// accurate to millimetres well outside the 6° zone width.
#[derive(Debug, Clone)]
pub struct UtmProjection {
    /// UTM zone number (1..=60)
    pub zone: u8,
    /// Central meridian in radians
    lon0: f64,
    /// Rectifying radius scaled by k0
    k0_a: f64,
    /// First eccentricity
    e: f64,
    /// Krüger alpha coefficients
    alpha: [f64; 4],
}

impl UtmProjection {
    /// Northern hemisphere UTM projection for the given zone.
    pub fn for_zone(zone: u8) -> Result<Self, ClimateError> {
        if !(1..=60).contains(&zone) {
            return Err(ClimateError::Configuration(format!(
                "UTM zone {} is outside 1..=60",
                zone
            )));
        }
        Ok(Self::build(zone))
    }

    /// ETRS89 / UTM zone 33N, the system used by the grid service.
    #[cfg(test)]
    pub fn etrs89_zone33() -> Self {
        Self::build(33)
    }

    fn build(zone: u8) -> Self {
        let n = GRS80_F / (2.0 - GRS80_F);
        let n2 = n * n;
        let n3 = n2 * n;
        let n4 = n3 * n;

        let rectifying_radius = GRS80_A / (1.0 + n) * (1.0 + n2 / 4.0 + n4 / 64.0);
        let alpha = [
            n / 2.0 - 2.0 * n2 / 3.0 + 5.0 * n3 / 16.0 + 41.0 * n4 / 180.0,
            13.0 * n2 / 48.0 - 3.0 * n3 / 5.0 + 557.0 * n4 / 1440.0,
            61.0 * n3 / 240.0 - 103.0 * n4 / 140.0,
            49561.0 * n4 / 161_280.0,
        ];

        Self {
            zone,
            lon0: (zone as f64 * 6.0 - 183.0).to_radians(),
            k0_a: UTM_K0 * rectifying_radius,
            e: (GRS80_F * (2.0 - GRS80_F)).sqrt(),
            alpha,
        }
    }

    /// Project a geographic coordinate, without rounding.
    ///
    /// Points without a finite image (on the meridians 90° from the central
    /// one) are rejected.
    pub fn transform(&self, coord: GeographicCoord) -> Result<ProjectedCoord, ClimateError> {
        let phi = coord.lat.to_radians();
        let dlon = coord.lon.to_radians() - self.lon0;

        // Conformal latitude expressed through its tangent
        let sin_phi = phi.sin();
        let t = (sin_phi.atanh() - self.e * (self.e * sin_phi).atanh()).sinh();

        let xi_prime = t.atan2(dlon.cos());
        let eta_prime = (dlon.sin() / (1.0 + t * t).sqrt()).atanh();

        let mut xi = xi_prime;
        let mut eta = eta_prime;
        for (j, alpha) in self.alpha.iter().enumerate() {
            let k = 2.0 * (j as f64 + 1.0);
            xi += alpha * (k * xi_prime).sin() * (k * eta_prime).cosh();
            eta += alpha * (k * xi_prime).cos() * (k * eta_prime).sinh();
        }

        let easting = UTM_FALSE_EASTING + self.k0_a * eta;
        let northing = self.k0_a * xi;
        if !easting.is_finite() || !northing.is_finite() {
            return Err(ClimateError::InvalidInput(format!(
                "({}, {}) cannot be projected into UTM zone {}",
                coord.lat, coord.lon, self.zone
            )));
        }
        Ok(ProjectedCoord::new(easting, northing))
    }

    /// Project and round to centimetres for display.
    pub fn transform_rounded(&self, coord: GeographicCoord) -> Result<ProjectedCoord, ClimateError> {
        Ok(self.transform(coord)?.rounded())
    }
}
