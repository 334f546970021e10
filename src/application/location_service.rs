// Location service - Use case for turning a map pick into a query point
use crate::application::place_name_lookup::PlaceNameLookup;
use crate::domain::coordinate::{GeographicCoord, ProjectedCoord};
use crate::domain::error::ClimateError;
use crate::domain::projection::UtmProjection;
use serde::Serialize;
use std::sync::Arc;

/// Shown in the name field when no place is close enough.
pub const PLACEHOLDER_NAME: &str = "Skriv inn navn";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickedLocation {
    pub geographic: GeographicCoord,
    pub projected: ProjectedCoord,
    pub name: String,
}

#[derive(Clone)]
pub struct LocationService {
    projection: UtmProjection,
    place_names: Arc<dyn PlaceNameLookup>,
    radius_m: u32,
}

impl LocationService {
    pub fn new(
        projection: UtmProjection,
        place_names: Arc<dyn PlaceNameLookup>,
        radius_m: u32,
    ) -> Self {
        Self {
            projection,
            place_names,
            radius_m,
        }
    }

    pub async fn pick(&self, lat: f64, lon: f64) -> Result<PickedLocation, ClimateError> {
        let geographic = GeographicCoord::new(lat, lon)?;
        let projected = self.projection.transform_rounded(geographic)?;
        let name = self.place_name(projected).await;

        Ok(PickedLocation {
            geographic,
            projected,
            name,
        })
    }

    /// Nearest place name, falling back to the placeholder on a miss or lookup failure.
    pub async fn place_name(&self, coord: ProjectedCoord) -> String {
        match self
            .place_names
            .nearest_place_name(coord, self.radius_m)
            .await
        {
            Ok(Some(name)) => name,
            Ok(None) => {
                tracing::debug!(
                    "No place name within {} m of E{} N{}",
                    self.radius_m,
                    coord.easting,
                    coord.northing
                );
                PLACEHOLDER_NAME.to_string()
            }
            Err(e) => {
                tracing::warn!("Place name lookup failed: {:#}", e);
                PLACEHOLDER_NAME.to_string()
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;

    pub(crate) enum FakePlaceNames {
        Found(&'static str),
        Nothing,
        Broken,
    }

    #[async_trait]
    impl PlaceNameLookup for FakePlaceNames {
        async fn nearest_place_name(
            &self,
            _coord: ProjectedCoord,
            _radius_m: u32,
        ) -> anyhow::Result<Option<String>> {
            match self {
                FakePlaceNames::Found(name) => Ok(Some(name.to_string())),
                FakePlaceNames::Nothing => Ok(None),
                FakePlaceNames::Broken => anyhow::bail!("connection refused"),
            }
        }
    }

    fn service(lookup: FakePlaceNames) -> LocationService {
        LocationService::new(UtmProjection::etrs89_zone33(), Arc::new(lookup), 500)
    }

    #[tokio::test]
    async fn test_pick_projects_and_names() {
        let picked = service(FakePlaceNames::Found("Dombås"))
            .pick(62.14497, 9.404296)
            .await
            .unwrap();

        assert_eq!(picked.projected, ProjectedCoord::new(208567.37, 6902926.76));
        assert_eq!(picked.name, "Dombås");
    }

    #[tokio::test]
    async fn test_lookup_miss_uses_placeholder() {
        let picked = service(FakePlaceNames::Nothing)
            .pick(62.14497, 9.404296)
            .await
            .unwrap();
        assert_eq!(picked.name, PLACEHOLDER_NAME);
    }

    #[tokio::test]
    async fn test_lookup_failure_uses_placeholder() {
        let name = service(FakePlaceNames::Broken)
            .place_name(ProjectedCoord::new(208567.0, 6902926.0))
            .await;
        assert_eq!(name, "Skriv inn navn");
    }

    #[tokio::test]
    async fn test_pick_rejects_out_of_range_latitude() {
        let result = service(FakePlaceNames::Nothing).pick(123.0, 9.0).await;
        assert!(matches!(result, Err(ClimateError::InvalidInput(_))));
    }
}
