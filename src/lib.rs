mod atmoscope;
mod config;
mod dashboard;
mod error;
mod regions;
mod store;
mod tiles;
mod types;
mod utils;
mod weather_data;

pub use atmoscope::Atmoscope;
pub use config::{Config, ConfigError, Credentials, DEFAULT_HOST, DEFAULT_PORT};
pub use error::AtmoscopeError;

pub use dashboard::animation::{AnimationDriver, Phase, FIRST_YEAR, LAST_YEAR, TICK_INTERVAL};
pub use dashboard::chart_toggle::ChartVisibility;
pub use dashboard::comparison::ComparisonChart;
pub use dashboard::panels::{Band, Panel, WeatherPanels};
pub use dashboard::{Dashboard, LocationView, WeatherView};

pub use regions::{RegionCatalog, DEFAULT_REGION, DEFAULT_VIEWPORT};
pub use store::historical::{HistoricalStore, YearlyRecords};

pub use tiles::layers::{compose_layers, Instrument, LayerSet, MapLayer, ViewMode};
pub use tiles::tile_url::*;

pub use types::observation::*;
pub use types::parameter::WeatherParameter;
pub use types::region::{LatLon, Region, Viewport};

pub use weather_data::client::{MeteomaticsClient, DEFAULT_API_URL, DEFAULT_MODEL};
pub use weather_data::error::WeatherDataError;
pub use weather_data::query::{observation_instant, TimeSeriesQuery};
pub use weather_data::source::TimeSeriesSource;
