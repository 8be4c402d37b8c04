//! Presentation-independent dashboard state.
//!
//! [`Dashboard`] reacts to the same user actions as the web page (region,
//! year and instrument selection, play/pause, chart toggle) and answers with
//! serializable view models the UI renders as-is.

pub mod animation;
pub mod chart_toggle;
pub mod comparison;
pub mod panels;

use crate::atmoscope::Atmoscope;
use crate::dashboard::animation::AnimationDriver;
use crate::dashboard::chart_toggle::ChartVisibility;
use crate::dashboard::comparison::ComparisonChart;
use crate::dashboard::panels::WeatherPanels;
use crate::tiles::layers::{compose_layers, Instrument, LayerSet, ViewMode};
use crate::types::observation::ObservationRecord;
use crate::types::region::Viewport;
use crate::weather_data::client::MeteomaticsClient;
use crate::weather_data::source::TimeSeriesSource;
use log::debug;
use serde::Serialize;

/// Map viewport and info line for a selected region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationView {
    pub viewport: Viewport,
    /// `"{name} | {description}"`.
    pub info: String,
}

/// Everything the weather section shows after a region/year/instrument change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherView {
    pub panels: WeatherPanels,
    pub comparison: ComparisonChart,
    /// The fetched record; `None` when no region is selected.
    pub record: Option<ObservationRecord>,
}

impl WeatherView {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

pub struct Dashboard<S = MeteomaticsClient> {
    core: Atmoscope<S>,
    animation: AnimationDriver,
    chart: ChartVisibility,
}

impl<S: TimeSeriesSource> Dashboard<S> {
    pub fn new(core: Atmoscope<S>) -> Self {
        Self {
            core,
            animation: AnimationDriver::new(),
            chart: ChartVisibility::new(),
        }
    }

    pub fn core(&self) -> &Atmoscope<S> {
        &self.core
    }

    pub fn animation(&self) -> &AnimationDriver {
        &self.animation
    }

    pub fn chart(&self) -> &ChartVisibility {
        &self.chart
    }

    /// Viewport and info line for the chosen region.
    ///
    /// `None` means the map keeps its current viewport and the info line is
    /// cleared: nothing is selected, or the name is not in the catalog.
    pub fn select_region(&self, region: Option<&str>) -> Option<LocationView> {
        let region = self.core.regions().get(region?)?;
        Some(LocationView {
            viewport: region.viewport(),
            info: format!("{} | {}", region.name, region.description),
        })
    }

    /// Tile layers for the current year and instrument selection.
    pub fn update_map(&self, year: i32, instruments: &[Instrument], view_mode: ViewMode) -> LayerSet {
        debug!("Updating map for {} with {:?}", year, instruments);
        compose_layers(year, instruments, view_mode, self.core.now())
    }

    /// Fetches the observation behind the panels and rebuilds the comparison chart.
    ///
    /// Carbon monoxide is requested only when MOPITT is among `instruments`.
    pub async fn update_weather(
        &self,
        region: Option<&str>,
        year: i32,
        instruments: &[Instrument],
    ) -> WeatherView {
        let Some(region) = region else {
            return WeatherView {
                panels: WeatherPanels::no_region(),
                comparison: ComparisonChart::empty(),
                record: None,
            };
        };

        let include_carbon_monoxide = instruments.contains(&Instrument::Mopitt);
        let record = self
            .core
            .fetch_observation()
            .region(region)
            .year(year)
            .include_carbon_monoxide(include_carbon_monoxide)
            .call()
            .await;

        if record.is_error() {
            return WeatherView {
                panels: WeatherPanels::unavailable(),
                comparison: ComparisonChart::empty(),
                record: Some(record),
            };
        }

        WeatherView {
            panels: WeatherPanels::from_record(&record, include_carbon_monoxide),
            comparison: self.core.comparison_chart(region).await,
            record: Some(record),
        }
    }

    /// Starts or resumes the animation; returns the status line.
    pub fn play(&mut self) -> String {
        self.animation.play();
        self.animation.status()
    }

    /// Pauses the animation; returns the status line.
    pub fn pause(&mut self) -> String {
        self.animation.pause();
        self.animation.status()
    }

    /// Periodic tick; returns the year the slider should move to, if any.
    pub fn tick(&mut self) -> Option<i32> {
        self.animation.tick()
    }

    /// Flips the comparison chart's visibility; returns the new button label.
    pub fn toggle_chart(&mut self) -> &'static str {
        self.chart.toggle();
        self.chart.button_label()
    }
}
