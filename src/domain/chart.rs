// Chart description handed to the renderer
use super::climate_table::ClimateTable;
use super::parameter::ClimateParameter;
use chrono::NaiveDateTime;
use serde::Serialize;

pub const CHART_TITLE: &str = "Værdata - 3timer nedbør og temperatur";
pub const X_AXIS_LABEL: &str = "Tidspunkt";

/// Grid service times carry no zone. `time` is the wall-clock value to label
/// ticks with; `time_ms` is that same wall clock read as UTC.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    pub time: NaiveDateTime,
    pub time_ms: i64,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(time: NaiveDateTime, value: f64) -> Self {
        Self {
            time,
            time_ms: time.and_utc().timestamp_millis(),
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesKind {
    Bar,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    Left,
    Right,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesData {
    pub id: String,
    pub name: String,
    pub kind: SeriesKind,
    pub axis: Axis,
    pub axis_label: String,
    pub color: Option<String>,
    pub points: Vec<TimeSeriesPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub title: String,
    pub location: String,
    pub altitude: f64,
    pub x_label: String,
    pub series: Vec<SeriesData>,
}

impl ChartData {
    /// Dual-axis chart: precipitation bars on the left, temperature line on the right.
    pub fn dual_axis(table: &ClimateTable, location: String) -> Self {
        let series = [
            (ClimateParameter::Precipitation, SeriesKind::Bar, Axis::Left, None),
            (
                ClimateParameter::Temperature,
                SeriesKind::Line,
                Axis::Right,
                Some("r".to_string()),
            ),
        ]
        .into_iter()
        .filter_map(|(parameter, kind, axis, color)| {
            table
                .column(parameter)
                .map(|values| series_from_column(table, parameter, values, kind, axis, color))
        })
        .collect();

        Self {
            title: CHART_TITLE.to_string(),
            location,
            altitude: table.altitude(),
            x_label: X_AXIS_LABEL.to_string(),
            series,
        }
    }
}

fn series_from_column(
    table: &ClimateTable,
    parameter: ClimateParameter,
    values: &[f64],
    kind: SeriesKind,
    axis: Axis,
    color: Option<String>,
) -> SeriesData {
    let points = table
        .timestamps()
        .iter()
        .zip(values)
        .map(|(time, value)| TimeSeriesPoint::new(*time, *value))
        .collect();

    SeriesData {
        id: parameter.code().to_string(),
        name: parameter.label().to_string(),
        kind,
        axis,
        axis_label: format!("{} ({})", parameter.label(), parameter.unit()),
        color,
        points,
    }
}
