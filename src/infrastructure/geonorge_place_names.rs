// Geonorge place-name lookup implementation
use crate::application::place_name_lookup::PlaceNameLookup;
use crate::domain::coordinate::ProjectedCoord;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// EUREF89 / UTM 33N
const COORDINATE_SYSTEM: &str = "25833";

#[derive(Debug, Clone)]
pub struct GeonorgePlaceNames {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct PointSearchResponse {
    #[serde(default)]
    navn: Vec<PlaceHit>,
}

#[derive(Debug, Deserialize)]
struct PlaceHit {
    #[serde(default)]
    stedsnavn: Vec<PlaceSpelling>,
}

#[derive(Debug, Deserialize)]
struct PlaceSpelling {
    #[serde(rename = "skrivemåte")]
    spelling: String,
}

impl GeonorgePlaceNames {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build place-name HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn build_query(coord: ProjectedCoord, radius_m: u32) -> Vec<(&'static str, String)> {
        vec![
            ("nord", format!("{:.2}", coord.northing)),
            ("ost", format!("{:.2}", coord.easting)),
            ("koordsys", COORDINATE_SYSTEM.to_string()),
            ("radius", radius_m.to_string()),
            ("utkoordsys", COORDINATE_SYSTEM.to_string()),
            ("treffPerSide", "1".to_string()),
            ("side", "1".to_string()),
        ]
    }
}

/// First spelling of the first hit, if any.
pub fn parse_place_names(body: &str) -> Result<Option<String>> {
    let parsed: PointSearchResponse =
        serde_json::from_str(body).context("Failed to parse place-name response")?;

    Ok(parsed
        .navn
        .into_iter()
        .next()
        .and_then(|hit| hit.stedsnavn.into_iter().next())
        .map(|s| s.spelling))
}

#[async_trait]
impl PlaceNameLookup for GeonorgePlaceNames {
    async fn nearest_place_name(
        &self,
        coord: ProjectedCoord,
        radius_m: u32,
    ) -> Result<Option<String>> {
        let url = format!("{}/punkt", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&Self::build_query(coord, radius_m))
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to send request to place-name service")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Place-name lookup failed with status {}: {}", status, body);
        }

        let body = response
            .text()
            .await
            .context("Failed to read place-name response")?;
        parse_place_names(&body)
    }
}
