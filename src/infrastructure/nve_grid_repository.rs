// NVE GridTimeSeries repository implementation
use crate::application::grid_series_repository::GridSeriesRepository;
use crate::domain::coordinate::ProjectedCoord;
use crate::domain::error::ClimateError;
use crate::domain::parameter::{ClimateParameter, ParameterSeries};
use crate::domain::query_window::QueryWindow;
use crate::infrastructure::retry::{with_retry, RetryConfig, RetryError};
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct NveGridRepository {
    base_url: String,
    client: reqwest::Client,
    retry: RetryConfig,
}

/// The subset of the GridTimeSeries payload the assembler needs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GridTimeSeriesResponse {
    data: Vec<f64>,
    altitude: f64,
}

impl NveGridRepository {
    pub fn new(base_url: String, timeout: Duration, retry: RetryConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build grid service HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            retry,
        })
    }

    /// `{base}/GridTimeSeries/{easting}/{northing}/{start}/{end}/{parameter}.json`
    fn build_series_url(
        &self,
        coord: ProjectedCoord,
        window: &QueryWindow,
        parameter: ClimateParameter,
    ) -> String {
        let (easting, northing) = coord.truncated();
        format!(
            "{}/GridTimeSeries/{}/{}/{}/{}/{}.json",
            self.base_url,
            easting,
            northing,
            window.start_str(),
            window.end_str(),
            urlencoding::encode(parameter.code())
        )
    }

    async fn get_body(&self, url: &str) -> Result<String, RetryError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                let err = anyhow!(e).context("Failed to send request to grid service");
                RetryError::Retryable(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = anyhow!("grid service responded with status {}: {}", status, body);
            return Err(if is_transient(status) {
                RetryError::Retryable(err)
            } else {
                RetryError::NonRetryable(err)
            });
        }

        response
            .text()
            .await
            .map_err(|e| RetryError::Retryable(anyhow!(e).context("Failed to read grid service body")))
    }
}

fn is_transient(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

/// Parse a GridTimeSeries JSON body; `Data` and `Altitude` are mandatory.
pub fn parse_grid_response(
    parameter: ClimateParameter,
    body: &str,
) -> Result<ParameterSeries, ClimateError> {
    let parsed: GridTimeSeriesResponse = serde_json::from_str(body).map_err(|e| {
        ClimateError::remote(parameter, format!("malformed response: {}", e))
    })?;
    Ok(ParameterSeries::new(parameter, parsed.data, parsed.altitude))
}

#[async_trait]
impl GridSeriesRepository for NveGridRepository {
    async fn fetch_series(
        &self,
        coord: ProjectedCoord,
        window: &QueryWindow,
        parameter: ClimateParameter,
    ) -> Result<ParameterSeries, ClimateError> {
        let url = self.build_series_url(coord, window, parameter);
        tracing::debug!("Requesting grid series: {}", url);

        let body = with_retry(|| self.get_body(&url), &self.retry)
            .await
            .map_err(|e| ClimateError::remote(parameter, format!("{:#}", e.into_inner())))?;

        parse_grid_response(parameter, &body)
    }
}
