// Climate parameter domain model
use serde::{Serialize, Serializer};
use std::fmt;

/// The fixed set of 3-hourly variables offered by the grid service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClimateParameter {
    Precipitation,
    Temperature,
    WindDirection,
    WindSpeed,
}

impl ClimateParameter {
    pub const ALL: [ClimateParameter; 4] = [
        ClimateParameter::Precipitation,
        ClimateParameter::Temperature,
        ClimateParameter::WindDirection,
        ClimateParameter::WindSpeed,
    ];

    /// Parameter code used in grid service URLs and as table column name.
    pub fn code(&self) -> &'static str {
        match self {
            ClimateParameter::Precipitation => "rr3h",
            ClimateParameter::Temperature => "tm3h",
            ClimateParameter::WindDirection => "windDirection10m3h",
            ClimateParameter::WindSpeed => "windSpeed10m3h",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClimateParameter::Precipitation => "Nedbør",
            ClimateParameter::Temperature => "Temperatur",
            ClimateParameter::WindDirection => "Vindretning",
            ClimateParameter::WindSpeed => "Vindhastighet",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            ClimateParameter::Precipitation => "mm",
            ClimateParameter::Temperature => "\u{00B0}C",
            ClimateParameter::WindDirection => "\u{00B0}",
            ClimateParameter::WindSpeed => "m/s",
        }
    }
}

impl fmt::Display for ClimateParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for ClimateParameter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// Raw values for one parameter at one grid cell, one per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSeries {
    pub parameter: ClimateParameter,
    pub values: Vec<f64>,
    pub altitude: f64,
}

impl ParameterSeries {
    pub fn new(parameter: ClimateParameter, values: Vec<f64>, altitude: f64) -> Self {
        Self {
            parameter,
            values,
            altitude,
        }
    }
}
