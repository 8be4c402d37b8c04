//! HTTP client for the Meteomatics time-series API.

use crate::config::{Config, Credentials};
use crate::weather_data::error::WeatherDataError;
use crate::weather_data::query::TimeSeriesQuery;
use crate::weather_data::source::TimeSeriesSource;
use bon::bon;
use chrono::{DateTime, Duration, Utc};
use log::{info, warn};
use polars::prelude::*;
use reqwest::Client;
use std::io::Cursor;
use tokio::task;

pub const DEFAULT_API_URL: &str = "https://api.meteomatics.com";
pub const DEFAULT_MODEL: &str = "mix";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Formats an interval as an ISO-8601 duration (`PT1H`, `PT15M`, `PT30S`).
fn iso8601_duration(interval: Duration) -> String {
    let seconds = interval.num_seconds();
    if seconds % 3600 == 0 {
        format!("PT{}H", seconds / 3600)
    } else if seconds % 60 == 0 {
        format!("PT{}M", seconds / 60)
    } else {
        format!("PT{}S", seconds)
    }
}

fn format_timestamp(datetime: DateTime<Utc>) -> String {
    datetime.format(TIMESTAMP_FORMAT).to_string()
}

/// Queries the Meteomatics REST API and returns the CSV response as a `DataFrame`.
#[derive(Debug, Clone)]
pub struct MeteomaticsClient {
    http: Client,
    base_url: String,
    credentials: Credentials,
    model: String,
}

#[bon]
impl MeteomaticsClient {
    /// Creates a client.
    ///
    /// `base_url` defaults to [`DEFAULT_API_URL`] and `model` to [`DEFAULT_MODEL`].
    ///
    /// # Examples
    ///
    /// ```
    /// use atmoscope::{Credentials, MeteomaticsClient};
    ///
    /// let client = MeteomaticsClient::builder()
    ///     .credentials(Credentials::new("user", "secret"))
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(client.model(), "mix");
    /// ```
    #[builder]
    pub fn new(
        credentials: Credentials,
        base_url: Option<String>,
        model: Option<String>,
    ) -> Result<Self, WeatherDataError> {
        let http = Client::builder()
            .gzip(true)
            .build()
            .map_err(WeatherDataError::ClientBuild)?;
        Ok(Self {
            http,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            credentials,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, WeatherDataError> {
        Self::builder()
            .credentials(config.credentials.clone())
            .base_url(config.api_url.clone())
            .model(config.model.clone())
            .build()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// URL of the CSV time-series endpoint for `query`, without the model query string.
    pub fn time_series_url(&self, query: &TimeSeriesQuery) -> String {
        let parameters: Vec<&str> = query.parameters.iter().map(|p| p.api_name()).collect();
        format!(
            "{}/{}--{}:{}/{}/{},{}/csv",
            self.base_url,
            format_timestamp(query.start),
            format_timestamp(query.end),
            iso8601_duration(query.interval),
            parameters.join(","),
            query.location.latitude(),
            query.location.longitude()
        )
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, WeatherDataError> {
        let response = self
            .http
            .get(url)
            .query(&[("model", self.model.as_str())])
            .basic_auth(&self.credentials.username, Some(self.credentials.password()))
            .send()
            .await
            .map_err(|e| WeatherDataError::NetworkRequest(url.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    WeatherDataError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    WeatherDataError::NetworkRequest(url.to_string(), e)
                });
            }
        };

        let bytes = response
            .bytes()
            .await
            .map_err(|e| WeatherDataError::NetworkRequest(url.to_string(), e))?;
        Ok(bytes.to_vec())
    }

    /// Parses a semicolon separated CSV body with a header row on a blocking task.
    async fn csv_to_dataframe(bytes: Vec<u8>, url: String) -> Result<DataFrame, WeatherDataError> {
        task::spawn_blocking(move || parse_csv(bytes, &url)).await?
    }
}

pub(crate) fn parse_csv(bytes: Vec<u8>, url: &str) -> Result<DataFrame, WeatherDataError> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_separator(b';'))
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
        .map_err(|e| WeatherDataError::CsvParse {
            url: url.to_string(),
            source: e,
        })
}

impl TimeSeriesSource for MeteomaticsClient {
    async fn query_time_series(
        &self,
        query: &TimeSeriesQuery,
    ) -> Result<DataFrame, WeatherDataError> {
        let url = self.time_series_url(query);
        info!("Requesting Meteomatics time series from {}", url);
        let bytes = self.download(&url).await?;
        let df = Self::csv_to_dataframe(bytes, url.clone()).await?;
        info!(
            "Received {} row(s) and {} column(s) from {}",
            df.height(),
            df.width(),
            url
        );
        Ok(df)
    }
}
