//! Defines the weather parameters that can be requested from the Meteomatics
//! time-series API and the parameter sets used by the dashboard.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single upstream weather parameter.
///
/// Each variant maps to one Meteomatics parameter name (including its unit
/// suffix). The parameter name doubles as the column name of the returned
/// time-series table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherParameter {
    /// Air temperature 2 m above ground, in degrees Celsius.
    Temperature,
    /// Precipitation accumulated over the last hour, in mm.
    Precipitation,
    /// Wind speed 10 m above ground, in m/s.
    WindSpeed,
    /// Carbon monoxide concentration, in µg/m³.
    CarbonMonoxide,
}

impl WeatherParameter {
    /// Parameters that are always part of a request.
    pub const BASE: [WeatherParameter; 3] = [
        WeatherParameter::Temperature,
        WeatherParameter::Precipitation,
        WeatherParameter::WindSpeed,
    ];

    pub fn api_name(&self) -> &'static str {
        match self {
            WeatherParameter::Temperature => "t_2m:C",
            WeatherParameter::Precipitation => "precip_1h:mm",
            WeatherParameter::WindSpeed => "wind_speed_10m:ms",
            WeatherParameter::CarbonMonoxide => "co:ugm3",
        }
    }

    /// Builds the parameter list for one observation request.
    ///
    /// The base parameters come first, in a fixed order, followed by carbon
    /// monoxide when `include_carbon_monoxide` is set.
    pub fn request_set(include_carbon_monoxide: bool) -> Vec<WeatherParameter> {
        let mut parameters = Self::BASE.to_vec();
        if include_carbon_monoxide {
            parameters.push(WeatherParameter::CarbonMonoxide);
        }
        parameters
    }
}

/// Formats a parameter as its Meteomatics name.
///
/// # Examples
///
/// ```
/// use atmoscope::WeatherParameter;
///
/// assert_eq!(WeatherParameter::Temperature.to_string(), "t_2m:C");
/// ```
impl fmt::Display for WeatherParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}
