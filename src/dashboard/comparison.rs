//! The multi-year comparison chart built from a region's stored records.

use crate::dashboard::animation::{FIRST_YEAR, LAST_YEAR};
use crate::store::historical::YearlyRecords;
use polars::prelude::*;
use serde::Serialize;

const EMPTY_TITLE: &str = "Comparative Chart";
const EMPTY_HINT: &str = "Navigate through years to generate comparative data";

/// Series of the comparison chart; all vectors are aligned with `years`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonChart {
    pub title: String,
    pub years: Vec<i32>,
    /// Temperature line, °C.
    pub temperatures: Vec<f64>,
    /// Precipitation bars, mm. Missing values are charted as 0.
    pub precipitations: Vec<f64>,
    /// CO line on a secondary axis; only present when some year has CO above zero.
    pub carbon_monoxide: Option<Vec<f64>>,
    /// Hint shown instead of data when the chart is empty.
    pub hint: Option<String>,
}

impl ComparisonChart {
    pub fn empty() -> Self {
        Self {
            title: EMPTY_TITLE.to_string(),
            years: Vec::new(),
            temperatures: Vec::new(),
            precipitations: Vec::new(),
            carbon_monoxide: None,
            hint: Some(EMPTY_HINT.to_string()),
        }
    }

    /// Builds the chart for `region` from its stored records.
    ///
    /// Only years whose record is not an error and has a temperature become
    /// points. Missing precipitation or CO inside such a record is charted as
    /// 0; the record itself keeps it absent.
    pub fn from_history(region: &str, history: Option<&YearlyRecords>) -> Self {
        let Some(history) = history else {
            return Self::empty();
        };

        let mut years = Vec::new();
        let mut temperatures = Vec::new();
        let mut precipitations = Vec::new();
        let mut carbon_monoxide = Vec::new();

        for (year, record) in history.iter().filter(|(_, r)| r.is_chartable()) {
            let Some(temperature) = record.temperature else {
                continue;
            };
            years.push(*year);
            temperatures.push(temperature);
            precipitations.push(record.precipitation.unwrap_or(0.0));
            carbon_monoxide.push(record.carbon_monoxide.unwrap_or(0.0));
        }

        if years.is_empty() {
            return Self::empty();
        }

        let has_carbon_monoxide = carbon_monoxide.iter().any(|co| *co > 0.0);
        Self {
            title: format!("Data Evolution - {region} ({FIRST_YEAR}-{LAST_YEAR})"),
            years,
            temperatures,
            precipitations,
            carbon_monoxide: has_carbon_monoxide.then_some(carbon_monoxide),
            hint: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// The series as a `DataFrame` with columns `year`, `temperature`,
    /// `precipitation` and, when shown, `carbon_monoxide`.
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let mut columns = vec![
            Column::new("year".into(), &self.years),
            Column::new("temperature".into(), &self.temperatures),
            Column::new("precipitation".into(), &self.precipitations),
        ];
        if let Some(co) = &self.carbon_monoxide {
            columns.push(Column::new("carbon_monoxide".into(), co));
        }
        DataFrame::new(columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::observation::{FailureKind, FetchFailure, ObservationRecord, RawReadings};
    use crate::types::region::LatLon;

    fn record(year: i32, readings: RawReadings, include_co: bool) -> ObservationRecord {
        ObservationRecord::from_readings("Beijing China", LatLon(39.9042, 116.4074), year, readings, include_co)
    }

    #[test]
    fn test_no_history_is_empty_chart() {
        let chart = ComparisonChart::from_history("Beijing China", None);
        assert!(chart.is_empty());
        assert_eq!(chart.title, "Comparative Chart");
        assert_eq!(chart.hint.as_deref(), Some(EMPTY_HINT));
    }

    #[test]
    fn test_series_skip_errors_and_missing_temperature() {
        let mut history = YearlyRecords::new();
        history.insert(
            2020,
            record(
                2020,
                RawReadings {
                    temperature: Some(25.0),
                    precipitation_rate: None,
                    ..Default::default()
                },
                false,
            ),
        );
        history.insert(
            2017,
            record(
                2017,
                RawReadings {
                    temperature: Some(24.0),
                    precipitation_rate: Some(0.25),
                    ..Default::default()
                },
                false,
            ),
        );
        history.insert(2018, record(2018, RawReadings::default(), false));
        history.insert(
            2019,
            ObservationRecord::failed(
                "Beijing China",
                LatLon(39.9042, 116.4074),
                2019,
                FetchFailure {
                    kind: FailureKind::EmptyResult,
                    message: "empty".to_string(),
                },
            ),
        );

        let chart = ComparisonChart::from_history("Beijing China", Some(&history));
        assert_eq!(chart.title, "Data Evolution - Beijing China (2016-2024)");
        assert_eq!(chart.years, [2017, 2020]);
        assert_eq!(chart.temperatures, [24.0, 25.0]);
        assert_eq!(chart.precipitations, [6.0, 0.0]);
        assert_eq!(chart.carbon_monoxide, None);
        assert_eq!(chart.hint, None);
        // The stored record keeps precipitation absent.
        assert_eq!(history[&2020].precipitation, None);
    }

    #[test]
    fn test_carbon_monoxide_series_shown_when_positive() {
        let mut history = YearlyRecords::new();
        history.insert(
            2021,
            record(
                2021,
                RawReadings {
                    temperature: Some(20.0),
                    carbon_monoxide: Some(150.0),
                    ..Default::default()
                },
                true,
            ),
        );
        history.insert(
            2022,
            record(
                2022,
                RawReadings {
                    temperature: Some(21.0),
                    ..Default::default()
                },
                true,
            ),
        );
        let chart = ComparisonChart::from_history("Beijing China", Some(&history));
        assert_eq!(chart.carbon_monoxide, Some(vec![150.0, 0.0]));
    }

    #[test]
    fn test_only_failed_years_is_empty_chart() {
        let mut history = YearlyRecords::new();
        history.insert(2018, record(2018, RawReadings::default(), false));
        let chart = ComparisonChart::from_history("Delhi India", Some(&history));
        assert!(chart.is_empty());
        assert_eq!(chart.title, "Comparative Chart");
    }

    #[test]
    fn test_to_frame() -> PolarsResult<()> {
        let mut history = YearlyRecords::new();
        history.insert(
            2016,
            record(
                2016,
                RawReadings {
                    temperature: Some(19.5),
                    carbon_monoxide: Some(80.0),
                    ..Default::default()
                },
                true,
            ),
        );
        let df = ComparisonChart::from_history("Shanghai China", Some(&history)).to_frame()?;
        assert_eq!(df.shape(), (1, 4));
        assert_eq!(df.column("year")?.i32()?.get(0), Some(2016));
        Ok(())
    }
}
