//! The normalized observation record produced for one (region, year) request.

use crate::types::region::LatLon;
use crate::utils::round_to;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Precipitation arrives as an hourly rate; the dashboard shows a daily-equivalent figure.
pub const PRECIPITATION_HOURS_PER_DAY: f64 = 24.0;

const TEMPERATURE_DECIMALS: u32 = 1;
const PRECIPITATION_DECIMALS: u32 = 1;
const WIND_SPEED_DECIMALS: u32 = 1;
const CARBON_MONOXIDE_DECIMALS: u32 = 2;

/// Broad classification of why an observation could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    /// Network error, HTTP error status, or the request never completed.
    UpstreamUnavailable,
    /// The service answered but returned zero rows.
    EmptyResult,
    /// The response could not be parsed as a time-series table.
    MalformedResponse,
    /// The request itself could not be formed (e.g. a year outside the calendar range).
    InvalidRequest,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FailureKind::UpstreamUnavailable => "upstream unavailable",
            FailureKind::EmptyResult => "empty result",
            FailureKind::MalformedResponse => "malformed response",
            FailureKind::InvalidRequest => "invalid request",
        };
        f.write_str(text)
    }
}

/// A failed fetch, as carried by an error record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchFailure {
    pub kind: FailureKind,
    pub message: String,
}

/// Raw parameter values of the first returned row, before rounding.
///
/// `None` means the column was missing or held no numeric value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawReadings {
    pub temperature: Option<f64>,
    /// Hourly precipitation rate in mm/h.
    pub precipitation_rate: Option<f64>,
    pub wind_speed: Option<f64>,
    pub carbon_monoxide: Option<f64>,
}

/// One normalized weather observation for a region and year.
///
/// Missing values are `None` and must be shown as "N/A" (see [`format_reading`]),
/// never as zero. An error record has `failure` set and all readings `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRecord {
    /// Name of the region as requested by the caller.
    pub region: String,
    /// Coordinates label, e.g. `Lat: 39.9042, Lon: 116.4074`.
    pub coordinates: String,
    pub year: i32,
    /// Temperature in °C, one decimal.
    pub temperature: Option<f64>,
    /// Daily-equivalent precipitation in mm (hourly rate × 24), one decimal.
    pub precipitation: Option<f64>,
    /// Wind speed in m/s, one decimal.
    pub wind_speed: Option<f64>,
    /// Carbon monoxide in µg/m³, two decimals. Only set when it was requested.
    pub carbon_monoxide: Option<f64>,
    pub failure: Option<FetchFailure>,
}

impl ObservationRecord {
    /// Applies the rounding and unit-conversion rules to the raw readings.
    ///
    /// When `include_carbon_monoxide` is false the carbon monoxide field stays
    /// empty whatever the upstream returned.
    pub fn from_readings(
        region: &str,
        location: LatLon,
        year: i32,
        readings: RawReadings,
        include_carbon_monoxide: bool,
    ) -> Self {
        Self {
            region: region.to_string(),
            coordinates: location.label(),
            year,
            temperature: readings
                .temperature
                .map(|t| round_to(t, TEMPERATURE_DECIMALS)),
            precipitation: readings
                .precipitation_rate
                .map(|p| round_to(p * PRECIPITATION_HOURS_PER_DAY, PRECIPITATION_DECIMALS)),
            wind_speed: readings
                .wind_speed
                .map(|w| round_to(w, WIND_SPEED_DECIMALS)),
            carbon_monoxide: readings
                .carbon_monoxide
                .filter(|_| include_carbon_monoxide)
                .map(|co| round_to(co, CARBON_MONOXIDE_DECIMALS)),
            failure: None,
        }
    }

    pub fn failed(region: &str, location: LatLon, year: i32, failure: FetchFailure) -> Self {
        Self {
            region: region.to_string(),
            coordinates: location.label(),
            year,
            temperature: None,
            precipitation: None,
            wind_speed: None,
            carbon_monoxide: None,
            failure: Some(failure),
        }
    }

    pub fn is_error(&self) -> bool {
        self.failure.is_some()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.failure.as_ref().map(|f| f.message.as_str())
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.failure.as_ref().map(|f| f.kind)
    }

    /// Whether the record can contribute a point to the comparison chart.
    pub fn is_chartable(&self) -> bool {
        !self.is_error() && self.temperature.is_some()
    }
}

/// Renders an optional reading, using "N/A" for missing values.
///
/// # Examples
///
/// ```
/// use atmoscope::format_reading;
///
/// assert_eq!(format_reading(Some(12.0), "mm"), "12.0 mm");
/// assert_eq!(format_reading(Some(0.0), "mm"), "0.0 mm");
/// assert_eq!(format_reading(None, "mm"), "N/A");
/// ```
pub fn format_reading(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) if unit.is_empty() => format!("{v:.1}"),
        Some(v) => format!("{v:.1} {unit}"),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beijing() -> LatLon {
        LatLon(39.9042, 116.4074)
    }

    #[test]
    fn test_rounding_and_precipitation_conversion() {
        let readings = RawReadings {
            temperature: Some(20.05),
            precipitation_rate: Some(0.5),
            wind_speed: Some(3.33),
            carbon_monoxide: Some(123.456),
        };
        let record = ObservationRecord::from_readings("Beijing China", beijing(), 2020, readings, true);

        assert_eq!(record.temperature, Some(20.1));
        assert_eq!(record.precipitation, Some(12.0));
        assert_eq!(record.wind_speed, Some(3.3));
        assert_eq!(record.carbon_monoxide, Some(123.46));
        assert_eq!(record.coordinates, "Lat: 39.9042, Lon: 116.4074");
        assert!(!record.is_error());
        assert_eq!(record.error_message(), None);
    }

    #[test]
    fn test_missing_values_stay_absent() {
        let readings = RawReadings {
            temperature: Some(-3.0),
            ..Default::default()
        };
        let record = ObservationRecord::from_readings("Delhi India", beijing(), 2018, readings, true);
        assert_eq!(record.precipitation, None);
        assert_eq!(record.wind_speed, None);
        assert_eq!(record.carbon_monoxide, None);
        assert_eq!(format_reading(record.precipitation, "mm"), "N/A");
    }

    #[test]
    fn test_zero_precipitation_is_not_absent() {
        let readings = RawReadings {
            precipitation_rate: Some(0.0),
            ..Default::default()
        };
        let record = ObservationRecord::from_readings("Delhi India", beijing(), 2018, readings, false);
        assert_eq!(record.precipitation, Some(0.0));
    }

    #[test]
    fn test_carbon_monoxide_dropped_when_not_requested() {
        let readings = RawReadings {
            temperature: Some(10.0),
            carbon_monoxide: Some(80.0),
            ..Default::default()
        };
        let record = ObservationRecord::from_readings("Beijing China", beijing(), 2020, readings, false);
        assert_eq!(record.carbon_monoxide, None);
    }

    #[test]
    fn test_failed_record() {
        let failure = FetchFailure {
            kind: FailureKind::EmptyResult,
            message: "no rows".to_string(),
        };
        let record = ObservationRecord::failed("Beijing China", beijing(), 2019, failure);
        assert!(record.is_error());
        assert_eq!(record.error_message(), Some("no rows"));
        assert_eq!(record.failure_kind(), Some(FailureKind::EmptyResult));
        assert!(!record.is_chartable());
    }
}
