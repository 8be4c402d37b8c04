//! The entry point tying the region catalog, the weather source and the
//! historical store together.

use crate::config::Config;
use crate::dashboard::comparison::ComparisonChart;
use crate::error::AtmoscopeError;
use crate::regions::RegionCatalog;
use crate::store::historical::{HistoricalStore, YearlyRecords};
use crate::types::observation::{FetchFailure, ObservationRecord, RawReadings};
use crate::types::region::LatLon;
use crate::weather_data::client::MeteomaticsClient;
use crate::weather_data::error::WeatherDataError;
use crate::weather_data::extractor::extract_first_row;
use crate::weather_data::query::TimeSeriesQuery;
use crate::weather_data::source::TimeSeriesSource;
use bon::bon;
use chrono::{DateTime, Utc};
use log::{info, warn};
use tokio::sync::Mutex;

/// Fetches observations for the dashboard and keeps the per-region history.
///
/// Each instance owns its own [`HistoricalStore`]; nothing is shared between
/// instances and nothing outlives the process.
///
/// # Examples
///
/// ```no_run
/// use atmoscope::{Atmoscope, AtmoscopeError};
///
/// # async fn run() -> Result<(), AtmoscopeError> {
/// let atmoscope = Atmoscope::from_env()?;
/// let record = atmoscope
///     .fetch_observation()
///     .region("Beijing China")
///     .year(2020)
///     .include_carbon_monoxide(true)
///     .call()
///     .await;
/// println!("{:?}", record.temperature);
/// # Ok(())
/// # }
/// ```
pub struct Atmoscope<S = MeteomaticsClient> {
    source: S,
    regions: RegionCatalog,
    store: Mutex<HistoricalStore>,
    clock: fn() -> DateTime<Utc>,
}

#[bon]
impl<S: TimeSeriesSource> Atmoscope<S> {
    /// Creates an instance over `source`.
    ///
    /// Defaults: the built-in region catalog, an empty store and the system clock.
    #[builder]
    pub fn new(
        source: S,
        regions: Option<RegionCatalog>,
        store: Option<HistoricalStore>,
        clock: Option<fn() -> DateTime<Utc>>,
    ) -> Self {
        Self {
            source,
            regions: regions.unwrap_or_default(),
            store: Mutex::new(store.unwrap_or_default()),
            clock: clock.unwrap_or(Utc::now),
        }
    }

    /// Fetches one observation of `region` for `year`.
    ///
    /// Unknown region names fall back to the default region while the record
    /// keeps the requested name. Failures never escape: they come back as an
    /// error record, which is not stored. Successful records are upserted into
    /// the history under (requested name, year).
    #[builder]
    pub async fn fetch_observation(
        &self,
        region: &str,
        year: i32,
        #[builder(default)] include_carbon_monoxide: bool,
    ) -> ObservationRecord {
        let location = self.regions.resolve_region_or_default(region).location;

        match self.observe(location, year, include_carbon_monoxide).await {
            Ok(readings) => {
                let record = ObservationRecord::from_readings(
                    region,
                    location,
                    year,
                    readings,
                    include_carbon_monoxide,
                );
                self.store
                    .lock()
                    .await
                    .upsert(region, year, record.clone());
                record
            }
            Err(e) => {
                let message = format!(
                    "Error getting data from Meteomatics API for year {}: {}",
                    year,
                    e.describe()
                );
                warn!("{}", message);
                ObservationRecord::failed(
                    region,
                    location,
                    year,
                    FetchFailure {
                        kind: e.kind(),
                        message,
                    },
                )
            }
        }
    }

    async fn observe(
        &self,
        location: LatLon,
        year: i32,
        include_carbon_monoxide: bool,
    ) -> Result<RawReadings, WeatherDataError> {
        let query =
            TimeSeriesQuery::for_observation(location, year, include_carbon_monoxide, self.now())?;
        info!(
            "Requesting {} parameters at {} for {}",
            query.parameters.len(),
            location.label(),
            query.start
        );
        let frame = self.source.query_time_series(&query).await?;
        extract_first_row(&frame, &query.parameters)
    }

    /// Snapshot of the stored records of `region`, or `None` if it has none yet.
    pub async fn historical(&self, region: &str) -> Option<YearlyRecords> {
        self.store.lock().await.get(region).cloned()
    }

    /// Ascending years of `region` with a successful record.
    pub async fn all_years(&self, region: &str) -> Vec<i32> {
        self.store.lock().await.all_years(region)
    }

    /// The comparison chart of `region` built from the current history.
    pub async fn comparison_chart(&self, region: &str) -> ComparisonChart {
        let store = self.store.lock().await;
        ComparisonChart::from_history(region, store.get(region))
    }

    pub fn regions(&self) -> &RegionCatalog {
        &self.regions
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// The current time according to the configured clock.
    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }
}

impl Atmoscope<MeteomaticsClient> {
    /// An instance backed by the Meteomatics API, using the credentials and
    /// endpoint of `config`.
    pub fn from_config(config: &Config) -> Result<Self, AtmoscopeError> {
        let client = MeteomaticsClient::from_config(config)?;
        Ok(Self::builder().source(client).build())
    }

    /// Loads [`Config`] from the environment (and `.env`) and calls [`Atmoscope::from_config`].
    pub fn from_env() -> Result<Self, AtmoscopeError> {
        let config = Config::from_env()?;
        Self::from_config(&config)
    }
}
