//! View models of the three reading panels under the map.

use crate::types::observation::ObservationRecord;
use serde::Serialize;

const NOT_AVAILABLE: &str = "N/A";

/// A colored band of a gauge axis, `[from, to)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    pub from: f64,
    pub to: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Panel {
    Gauge {
        title: String,
        value: f64,
        range: (f64, f64),
        bands: Vec<Band>,
    },
    Bar {
        title: String,
        value: f64,
        range: (f64, f64),
        label: String,
    },
    Placeholder {
        title: String,
        message: String,
    },
}

impl Panel {
    pub fn placeholder(title: &str, message: &str) -> Self {
        Panel::Placeholder {
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Panel::Placeholder { .. })
    }

    /// Temperature gauge, −20..50 °C.
    pub fn temperature(value: Option<f64>) -> Self {
        match value {
            Some(value) => Panel::Gauge {
                title: "Temperature (°C)".to_string(),
                value,
                range: (-20.0, 50.0),
                bands: bands(&[-20.0, 0.0, 10.0, 20.0, 30.0, 50.0]),
            },
            None => Panel::placeholder("Temperature", NOT_AVAILABLE),
        }
    }

    /// Horizontal precipitation bar, 0..300 mm.
    pub fn precipitation(value: Option<f64>) -> Self {
        match value {
            Some(value) => Panel::Bar {
                title: "Precipitation (mm)".to_string(),
                value,
                range: (0.0, 300.0),
                label: format!("{value:.1} mm"),
            },
            None => Panel::placeholder("Precipitation", NOT_AVAILABLE),
        }
    }

    /// Carbon monoxide gauge, 0..200 µg/m³.
    pub fn carbon_monoxide(value: Option<f64>) -> Self {
        match value {
            Some(value) => Panel::Gauge {
                title: "CO (µg/m³)".to_string(),
                value,
                range: (0.0, 200.0),
                bands: bands(&[0.0, 50.0, 100.0, 150.0, 200.0]),
            },
            None => Panel::placeholder("CO", NOT_AVAILABLE),
        }
    }
}

fn bands(edges: &[f64]) -> Vec<Band> {
    edges
        .windows(2)
        .map(|pair| Band {
            from: pair[0],
            to: pair[1],
        })
        .collect()
}

/// Temperature, precipitation and carbon monoxide panels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherPanels {
    pub temperature: Panel,
    pub precipitation: Panel,
    pub carbon_monoxide: Panel,
}

impl WeatherPanels {
    fn uniform(title: &str, message: &str) -> Self {
        let panel = Panel::placeholder(title, message);
        Self {
            temperature: panel.clone(),
            precipitation: panel.clone(),
            carbon_monoxide: panel,
        }
    }

    pub fn no_region() -> Self {
        Self::uniform("", "Select region")
    }

    pub fn unavailable() -> Self {
        Self::uniform("Error", "Data unavailable")
    }

    /// Panels for a fetched record. The CO panel only shows data when the
    /// MOPITT instrument is selected.
    pub fn from_record(record: &ObservationRecord, show_carbon_monoxide: bool) -> Self {
        if record.is_error() {
            return Self::unavailable();
        }
        Self {
            temperature: Panel::temperature(record.temperature),
            precipitation: Panel::precipitation(record.precipitation),
            carbon_monoxide: if show_carbon_monoxide {
                Panel::carbon_monoxide(record.carbon_monoxide)
            } else {
                Panel::placeholder("CO", "Select MOPITT")
            },
        }
    }
}
