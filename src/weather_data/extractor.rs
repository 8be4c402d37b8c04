use crate::types::observation::RawReadings;
use crate::types::parameter::WeatherParameter;
use crate::weather_data::error::WeatherDataError;
use log::debug;
use polars::prelude::*;

/// First value of column `name` as `f64`, if the column exists and holds a number there.
fn get_opt_float(df: &DataFrame, name: &str) -> Option<f64> {
    df.column(name)
        .ok()?
        .cast(&DataType::Float64)
        .ok()?
        .f64()
        .ok()?
        .get(0)
}

/// Reads the requested parameters from the first row of `df`.
///
/// A missing column only makes that reading `None`. A table with none of the
/// requested columns is malformed, and a table without rows is empty.
pub fn extract_first_row(
    df: &DataFrame,
    parameters: &[WeatherParameter],
) -> Result<RawReadings, WeatherDataError> {
    if !parameters
        .iter()
        .any(|parameter| df.column(parameter.api_name()).is_ok())
    {
        let found: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        return Err(WeatherDataError::MissingParameters {
            found: found.join(", "),
        });
    }
    if df.height() == 0 {
        return Err(WeatherDataError::EmptyResult);
    }

    let mut readings = RawReadings::default();
    for parameter in parameters {
        let value = get_opt_float(df, parameter.api_name());
        if value.is_none() {
            debug!("Parameter {} missing from response", parameter);
        }
        match parameter {
            WeatherParameter::Temperature => readings.temperature = value,
            WeatherParameter::Precipitation => readings.precipitation_rate = value,
            WeatherParameter::WindSpeed => readings.wind_speed = value,
            WeatherParameter::CarbonMonoxide => readings.carbon_monoxide = value,
        }
    }
    Ok(readings)
}
