// Climate service - Use case for fetching and assembling a climate table
use crate::application::grid_series_repository::GridSeriesRepository;
use crate::application::series_assembler::SeriesAssembler;
use crate::domain::chart::ChartData;
use crate::domain::climate_table::ClimateTable;
use crate::domain::coordinate::ProjectedCoord;
use crate::domain::error::ClimateError;
use crate::domain::parameter::ClimateParameter;
use crate::domain::query_window::QueryWindow;
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct ClimateService {
    repository: Arc<dyn GridSeriesRepository>,
    assembler: SeriesAssembler,
    parameters: Vec<ClimateParameter>,
}

impl ClimateService {
    pub fn new(repository: Arc<dyn GridSeriesRepository>, assembler: SeriesAssembler) -> Self {
        Self {
            repository,
            assembler,
            parameters: ClimateParameter::ALL.to_vec(),
        }
    }

    /// Fetch every parameter for the cell, one request at a time, then assemble.
    pub async fn climate_table(
        &self,
        coord: ProjectedCoord,
        window: &QueryWindow,
    ) -> Result<ClimateTable, ClimateError> {
        let started = Instant::now();
        let mut series = Vec::with_capacity(self.parameters.len());

        for parameter in &self.parameters {
            let fetched = self
                .repository
                .fetch_series(coord, window, *parameter)
                .await?;
            tracing::debug!(
                "Fetched {} values for {} (altitude {} m)",
                fetched.values.len(),
                parameter,
                fetched.altitude
            );
            series.push(fetched);
        }

        let table = self.assembler.assemble(series, window.start, window.end)?;

        tracing::info!(
            "Climate table for E{} N{} {}..{}: {} rows x {} columns in {} ms",
            coord.easting,
            coord.northing,
            window.start_str(),
            window.end_str(),
            table.row_count(),
            table.column_count(),
            started.elapsed().as_millis()
        );

        Ok(table)
    }

    pub async fn chart(
        &self,
        coord: ProjectedCoord,
        window: &QueryWindow,
        location: String,
    ) -> Result<ChartData, ClimateError> {
        let table = self.climate_table(coord, window).await?;
        Ok(ChartData::dual_axis(&table, location))
    }
}
