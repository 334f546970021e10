// Series assembler - Aligns parameter series on a regular time index
use crate::domain::climate_table::ClimateTable;
use crate::domain::error::ClimateError;
use crate::domain::parameter::{ClimateParameter, ParameterSeries};
use chrono::{Duration, NaiveDate, NaiveDateTime};

pub const DEFAULT_INTERVAL_HOURS: i64 = 3;
/// Values above this are upstream error codes, not measurements
pub const DEFAULT_SENTINEL_THRESHOLD: f64 = 1000.0;
const ALTITUDE_TOLERANCE_M: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct SeriesAssembler {
    interval: Duration,
    sentinel_threshold: f64,
}

impl Default for SeriesAssembler {
    fn default() -> Self {
        Self {
            interval: Duration::hours(DEFAULT_INTERVAL_HOURS),
            sentinel_threshold: DEFAULT_SENTINEL_THRESHOLD,
        }
    }
}

impl SeriesAssembler {
    pub fn new(interval: Duration, sentinel_threshold: f64) -> Result<Self, ClimateError> {
        if interval < Duration::seconds(1) {
            return Err(ClimateError::Configuration(format!(
                "sampling interval must be at least one second, got {}",
                interval
            )));
        }
        Ok(Self {
            interval,
            sentinel_threshold,
        })
    }

    /// Number of ticks from `start` to `end` midnight, both ends included.
    pub fn tick_count(&self, start: NaiveDate, end: NaiveDate) -> Result<usize, ClimateError> {
        if end < start {
            return Err(ClimateError::InvalidRange(format!(
                "end date {} is before start date {}",
                end, start
            )));
        }
        let span = (end - start).num_seconds();
        Ok((span / self.interval.num_seconds()) as usize + 1)
    }

    /// Regular timestamps from `start` to `end` midnight, both ends included.
    pub fn tick_index(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<NaiveDateTime>, ClimateError> {
        let count = self.tick_count(start, end)?;

        let first = start.and_time(chrono::NaiveTime::MIN);
        let last = end.and_time(chrono::NaiveTime::MIN);

        let mut ticks = Vec::with_capacity(count);
        let mut tick = first;
        while tick <= last {
            ticks.push(tick);
            tick += self.interval;
        }
        Ok(ticks)
    }

    /// Merge fetched series into one table and zero out sentinel values.
    ///
    /// Every series must have exactly one value per tick and all series must
    /// report the same cell altitude.
    pub fn assemble(
        &self,
        series: Vec<ParameterSeries>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ClimateTable, ClimateError> {
        let Some(altitude) = series.first().map(|s| s.altitude) else {
            return Err(ClimateError::EmptySeries);
        };
        let expected = self.tick_count(start, end)?;
        if let Some(s) = series.iter().find(|s| s.values.len() != expected) {
            return Err(ClimateError::ShapeMismatch {
                parameter: s.parameter,
                expected,
                actual: s.values.len(),
            });
        }
        let timestamps = self.tick_index(start, end)?;

        let mut columns: Vec<(ClimateParameter, Vec<f64>)> = Vec::with_capacity(series.len());
        for s in series {
            if columns.iter().any(|(p, _)| *p == s.parameter) {
                return Err(ClimateError::InvalidInput(format!(
                    "parameter {} supplied twice",
                    s.parameter
                )));
            }
            if (s.altitude - altitude).abs() > ALTITUDE_TOLERANCE_M {
                return Err(ClimateError::AltitudeMismatch {
                    parameter: s.parameter,
                    expected: altitude,
                    actual: s.altitude,
                });
            }

            let cleaned = s
                .values
                .into_iter()
                .map(|v| if v > self.sentinel_threshold { 0.0 } else { v })
                .collect();
            columns.push((s.parameter, cleaned));
        }

        tracing::debug!(
            "Assembled {} columns x {} rows from {} to {}",
            columns.len(),
            timestamps.len(),
            start,
            end
        );

        Ok(ClimateTable::new(timestamps, columns, altitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query_window::QueryWindow;

    fn date(text: &str) -> NaiveDate {
        NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
    }

    fn series(parameter: ClimateParameter, len: usize, fill: f64) -> ParameterSeries {
        ParameterSeries::new(parameter, vec![fill; len], 1203.0)
    }

    #[test]
    fn test_tick_count_is_inclusive() {
        let assembler = SeriesAssembler::default();
        let ticks = assembler.tick_index(date("2021-12-24"), date("2021-12-29")).unwrap();
        assert_eq!(ticks.len(), 41);
        assert_eq!(ticks[0], date("2021-12-24").and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(ticks[1], date("2021-12-24").and_hms_opt(3, 0, 0).unwrap());
        assert_eq!(ticks[40], date("2021-12-29").and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn test_tick_count_formula_for_other_intervals() {
        for hours in [1, 3, 6, 24] {
            let assembler = SeriesAssembler::new(Duration::hours(hours), 1000.0).unwrap();
            for days in [1u64, 2, 7, 31] {
                let start = date("2022-03-01");
                let end = start + chrono::Days::new(days);
                let ticks = assembler.tick_index(start, end).unwrap();
                assert_eq!(ticks.len() as i64, days as i64 * 24 / hours + 1);
            }
        }
    }

    #[test]
    fn test_tick_count_agrees_with_index() {
        let assembler = SeriesAssembler::default();
        let start = date("2021-12-24");
        for end in ["2021-12-24", "2021-12-25", "2021-12-29", "2022-03-01"] {
            let end = date(end);
            assert_eq!(
                assembler.tick_count(start, end).unwrap(),
                assembler.tick_index(start, end).unwrap().len()
            );
        }
    }

    #[test]
    fn test_shape_checked_before_index_is_built() {
        let assembler = SeriesAssembler::default();
        let result = assembler.assemble(
            vec![series(ClimateParameter::Precipitation, 41, 0.0)],
            date("2021-01-01"),
            date("9999-12-31"),
        );
        assert!(matches!(
            result,
            Err(ClimateError::ShapeMismatch { actual: 41, .. })
        ));
    }

    #[test]
    fn test_same_start_and_end_gives_one_row() {
        let assembler = SeriesAssembler::default();
        let day = date("2021-12-24");
        let table = assembler
            .assemble(vec![series(ClimateParameter::Temperature, 1, -4.0)], day, day)
            .unwrap();
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_end_before_start_is_invalid_range() {
        let assembler = SeriesAssembler::default();
        let result = assembler.tick_index(date("2021-12-29"), date("2021-12-24"));
        assert!(matches!(result, Err(ClimateError::InvalidRange(_))));
    }

    #[test]
    fn test_full_parameter_set_over_five_days() {
        let window = QueryWindow::parse("2021-12-24", "5").unwrap();
        let assembler = SeriesAssembler::default();
        let all = ClimateParameter::ALL
            .into_iter()
            .map(|p| series(p, 41, 2.0))
            .collect();

        let table = assembler.assemble(all, window.start, window.end).unwrap();

        assert_eq!(table.row_count(), 41);
        assert_eq!(table.column_count(), 4);
        assert_eq!(table.parameters(), ClimateParameter::ALL.to_vec());
        assert_eq!(table.altitude(), 1203.0);
    }

    #[test]
    fn test_sentinel_values_are_zeroed() {
        let assembler = SeriesAssembler::default();
        let day = date("2021-12-24");
        let raw = vec![0.4, 9999.0, 1000.0, 1000.1, -12.5, 3.0, 65535.0, 0.0, 7.7];
        let table = assembler
            .assemble(
                vec![ParameterSeries::new(ClimateParameter::Precipitation, raw, 87.0)],
                day,
                date("2021-12-25"),
            )
            .unwrap();

        assert_eq!(
            table.column(ClimateParameter::Precipitation).unwrap(),
            &[0.4, 0.0, 1000.0, 0.0, -12.5, 3.0, 0.0, 0.0, 7.7]
        );
    }

    #[test]
    fn test_length_mismatch_fails() {
        let assembler = SeriesAssembler::default();
        let result = assembler.assemble(
            vec![
                series(ClimateParameter::Precipitation, 9, 0.0),
                series(ClimateParameter::Temperature, 8, 0.0),
            ],
            date("2021-12-24"),
            date("2021-12-25"),
        );
        assert_eq!(
            result,
            Err(ClimateError::ShapeMismatch {
                parameter: ClimateParameter::Temperature,
                expected: 9,
                actual: 8,
            })
        );
    }

    #[test]
    fn test_altitude_mismatch_fails() {
        let assembler = SeriesAssembler::default();
        let mut wind = series(ClimateParameter::WindSpeed, 9, 5.0);
        wind.altitude = 640.0;
        let result = assembler.assemble(
            vec![series(ClimateParameter::Precipitation, 9, 0.0), wind],
            date("2021-12-24"),
            date("2021-12-25"),
        );
        assert!(matches!(result, Err(ClimateError::AltitudeMismatch { .. })));
    }

    #[test]
    fn test_empty_and_duplicate_input() {
        let assembler = SeriesAssembler::default();
        let day = date("2021-12-24");
        assert_eq!(
            assembler.assemble(Vec::new(), day, day),
            Err(ClimateError::EmptySeries)
        );

        let duplicated = vec![
            series(ClimateParameter::Temperature, 1, 1.0),
            series(ClimateParameter::Temperature, 1, 2.0),
        ];
        assert!(matches!(
            assembler.assemble(duplicated, day, day),
            Err(ClimateError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_assemble_is_repeatable() {
        let assembler = SeriesAssembler::default();
        let input = vec![
            ParameterSeries::new(ClimateParameter::Precipitation, vec![1.0, 2000.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0], 10.0),
            ParameterSeries::new(ClimateParameter::Temperature, vec![-1.0; 9], 10.0),
        ];
        let first = assembler
            .assemble(input.clone(), date("2021-01-01"), date("2021-01-02"))
            .unwrap();
        let second = assembler
            .assemble(input, date("2021-01-01"), date("2021-01-02"))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_interval_below_one_second_is_rejected() {
        assert!(matches!(
            SeriesAssembler::new(Duration::zero(), 1000.0),
            Err(ClimateError::Configuration(_))
        ));
        assert!(matches!(
            SeriesAssembler::new(Duration::milliseconds(500), 1000.0),
            Err(ClimateError::Configuration(_))
        ));
    }
}
