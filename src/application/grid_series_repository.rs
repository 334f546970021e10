// Repository trait for grid time-series access
use crate::domain::coordinate::ProjectedCoord;
use crate::domain::error::ClimateError;
use crate::domain::parameter::{ClimateParameter, ParameterSeries};
use crate::domain::query_window::QueryWindow;
use async_trait::async_trait;

#[async_trait]
pub trait GridSeriesRepository: Send + Sync {
    /// Fetch the raw per-tick values and cell altitude for one parameter.
    ///
    /// Any transport, status or payload problem is a `RemoteService` error;
    /// implementations never substitute default data.
    async fn fetch_series(
        &self,
        coord: ProjectedCoord,
        window: &QueryWindow,
        parameter: ClimateParameter,
    ) -> Result<ParameterSeries, ClimateError>;
}
