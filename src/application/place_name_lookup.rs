// Lookup trait for reverse geocoding
use crate::domain::coordinate::ProjectedCoord;
use async_trait::async_trait;

#[async_trait]
pub trait PlaceNameLookup: Send + Sync {
    /// Name of the nearest place within `radius_m`, or `None` when nothing is that close.
    async fn nearest_place_name(
        &self,
        coord: ProjectedCoord,
        radius_m: u32,
    ) -> anyhow::Result<Option<String>>;
}
