//! Composition of the map's tile layer stack from the instrument and view selections.

use crate::tiles::tile_url::{
    build_carbon_monoxide_tile_template_at, build_true_color_tile_template,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const BORDERS_TEMPLATE: &str = "https://server.arcgisonline.com/ArcGIS/rest/services/Reference/World_Boundaries_and_Places/MapServer/tile/{z}/{y}/{x}";

const CARBON_MONOXIDE_OPACITY: f32 = 0.6;

/// Satellite instruments selectable in the instrument checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instrument {
    /// MODIS on Terra, true-color imagery.
    Modis,
    /// MOPITT on Terra, carbon monoxide.
    Mopitt,
}

impl Instrument {
    pub fn display_name(&self) -> &'static str {
        match self {
            Instrument::Modis => "MODIS",
            Instrument::Mopitt => "MOPITT",
        }
    }

    fn attribution(&self) -> &'static str {
        match self {
            Instrument::Modis => "NASA GIBS - MODIS Terra",
            Instrument::Mopitt => "NASA GIBS - MOPITT/Terra",
        }
    }
}

/// Whether political borders and place names are drawn over the imagery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewMode {
    SatelliteOnly,
    #[default]
    WithBorders,
}

/// One tile layer handed to the map widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLayer {
    pub url: String,
    pub attribution: String,
    pub opacity: f32,
}

/// The full layer stack plus the text describing which instruments are shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSet {
    pub layers: Vec<MapLayer>,
    pub indicator: String,
}

fn instrument_layer(instrument: Instrument, year: i32, now: DateTime<Utc>) -> MapLayer {
    match instrument {
        Instrument::Modis => MapLayer {
            url: build_true_color_tile_template(year),
            attribution: instrument.attribution().to_string(),
            opacity: 1.0,
        },
        Instrument::Mopitt => MapLayer {
            url: build_carbon_monoxide_tile_template_at(year, now),
            attribution: instrument.attribution().to_string(),
            opacity: CARBON_MONOXIDE_OPACITY,
        },
    }
}

/// Builds the layer stack for a year.
///
/// Layers are ordered MODIS, MOPITT, borders. When no instrument is selected
/// MODIS is shown on its own so the map is never blank.
pub fn compose_layers(
    year: i32,
    instruments: &[Instrument],
    view_mode: ViewMode,
    now: DateTime<Utc>,
) -> LayerSet {
    let mut shown: Vec<Instrument> = [Instrument::Modis, Instrument::Mopitt]
        .into_iter()
        .filter(|i| instruments.contains(i))
        .collect();
    if shown.is_empty() {
        shown.push(Instrument::Modis);
    }

    let mut layers: Vec<MapLayer> = shown
        .iter()
        .map(|&instrument| instrument_layer(instrument, year, now))
        .collect();

    if view_mode == ViewMode::WithBorders {
        layers.push(MapLayer {
            url: BORDERS_TEMPLATE.to_string(),
            attribution: "Esri".to_string(),
            opacity: 1.0,
        });
    }

    let names: Vec<&str> = shown.iter().map(Instrument::display_name).collect();
    let indicator = if names.len() == 1 {
        format!("Instrument: {}", names[0])
    } else {
        format!("Combination: {}", names.join(", "))
    };

    LayerSet { layers, indicator }
}
