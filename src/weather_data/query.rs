//! Selection of the observation instant and assembly of the time-series request.

use crate::types::parameter::WeatherParameter;
use crate::types::region::LatLon;
use crate::utils::{mid_june, truncate_to_hour};
use crate::weather_data::error::WeatherDataError;
use chrono::{DateTime, Datelike, Duration, Utc};

/// Hour of day (UTC) sampled for past years.
pub const PAST_YEAR_SAMPLE_HOUR: u32 = 12;

/// Width of the requested window and the sampling interval.
pub fn sample_interval() -> Duration {
    Duration::hours(1)
}

/// Picks the single UTC instant to sample for `year`.
///
/// The current year samples the current hour; any other year samples
/// June 15th at 12:00 UTC. Returns `None` for years chrono cannot represent.
pub fn observation_instant(year: i32, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if year == now.year() {
        Some(truncate_to_hour(now))
    } else {
        mid_june(year, PAST_YEAR_SAMPLE_HOUR)
    }
}

/// A request for one location over a time window, as sent to a [`crate::TimeSeriesSource`].
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesQuery {
    pub location: LatLon,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub interval: Duration,
    pub parameters: Vec<WeatherParameter>,
}

impl TimeSeriesQuery {
    /// Builds the one-sample request behind an observation record.
    pub fn for_observation(
        location: LatLon,
        year: i32,
        include_carbon_monoxide: bool,
        now: DateTime<Utc>,
    ) -> Result<Self, WeatherDataError> {
        let start = observation_instant(year, now).ok_or(WeatherDataError::InvalidYear(year))?;
        let interval = sample_interval();
        Ok(Self {
            location,
            start,
            end: start + interval,
            interval,
            parameters: WeatherParameter::request_set(include_carbon_monoxide),
        })
    }

    pub fn includes(&self, parameter: WeatherParameter) -> bool {
        self.parameters.contains(&parameter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 3, 14, 37, 12).unwrap()
    }

    #[test]
    fn test_past_year_samples_mid_june_noon() {
        let query = TimeSeriesQuery::for_observation(LatLon(1.0, 2.0), 2020, false, now()).unwrap();
        assert_eq!(query.start, Utc.with_ymd_and_hms(2020, 6, 15, 12, 0, 0).unwrap());
        assert_eq!(query.end, Utc.with_ymd_and_hms(2020, 6, 15, 13, 0, 0).unwrap());
        assert_eq!(query.interval, Duration::hours(1));
        assert!(!query.includes(WeatherParameter::CarbonMonoxide));
    }

    #[test]
    fn test_current_year_samples_current_hour() {
        let query = TimeSeriesQuery::for_observation(LatLon(1.0, 2.0), 2025, true, now()).unwrap();
        assert_eq!(query.start, Utc.with_ymd_and_hms(2025, 10, 3, 14, 0, 0).unwrap());
        assert_eq!(query.end - query.start, Duration::hours(1));
        assert!(query.includes(WeatherParameter::CarbonMonoxide));
    }

    #[test]
    fn test_unrepresentable_year_is_rejected() {
        let result = TimeSeriesQuery::for_observation(LatLon(1.0, 2.0), i32::MAX, false, now());
        assert!(matches!(result, Err(WeatherDataError::InvalidYear(i32::MAX))));
    }
}
