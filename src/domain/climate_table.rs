// Time-indexed climate table domain model
use super::parameter::ClimateParameter;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One column per parameter over a regular timestamp index.
///
/// Built once by the series assembler, read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ClimateTable {
    timestamps: Vec<NaiveDateTime>,
    columns: Vec<(ClimateParameter, Vec<f64>)>,
    altitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimateRow {
    pub time: NaiveDateTime,
    pub values: Vec<f64>,
}

impl ClimateTable {
    pub(crate) fn new(
        timestamps: Vec<NaiveDateTime>,
        columns: Vec<(ClimateParameter, Vec<f64>)>,
        altitude: f64,
    ) -> Self {
        debug_assert!(columns.iter().all(|(_, c)| c.len() == timestamps.len()));
        Self {
            timestamps,
            columns,
            altitude,
        }
    }

    pub fn timestamps(&self) -> &[NaiveDateTime] {
        &self.timestamps
    }

    pub fn parameters(&self) -> Vec<ClimateParameter> {
        self.columns.iter().map(|(p, _)| *p).collect()
    }

    pub fn column(&self, parameter: ClimateParameter) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|(p, _)| *p == parameter)
            .map(|(_, values)| values.as_slice())
    }

    pub fn row_count(&self) -> usize {
        self.timestamps.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Altitude of the queried grid cell in metres.
    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    pub fn rows(&self) -> Vec<ClimateRow> {
        self.timestamps
            .iter()
            .enumerate()
            .map(|(i, time)| ClimateRow {
                time: *time,
                values: self.columns.iter().map(|(_, values)| values[i]).collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 12, 24)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_rows_follow_column_order() {
        let table = ClimateTable::new(
            vec![at(0), at(3)],
            vec![
                (ClimateParameter::Precipitation, vec![0.5, 1.5]),
                (ClimateParameter::Temperature, vec![-3.0, -4.0]),
            ],
            812.0,
        );

        let rows = table.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].time, at(3));
        assert_eq!(rows[1].values, vec![1.5, -4.0]);
        assert_eq!(table.column(ClimateParameter::Temperature), Some(&[-3.0, -4.0][..]));
        assert_eq!(table.column(ClimateParameter::WindSpeed), None);
        assert_eq!(table.altitude(), 812.0);
    }
}
