use crate::weather_data::error::WeatherDataError;
use crate::weather_data::query::TimeSeriesQuery;
use polars::frame::DataFrame;
use std::future::Future;

/// The boundary to an external weather service.
///
/// Implementations return one row per sampled instant and one column per
/// requested parameter, named after [`crate::WeatherParameter::api_name`].
/// Anything else in the table is ignored.
pub trait TimeSeriesSource {
    fn query_time_series(
        &self,
        query: &TimeSeriesQuery,
    ) -> impl Future<Output = Result<DataFrame, WeatherDataError>> + Send;
}
