//! Data structures describing the named locations the dashboard can analyse.

use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use atmoscope::LatLon;
///
/// let delhi = LatLon(28.6139, 77.2090);
/// assert_eq!(delhi.0, 28.6139); // Latitude
/// assert_eq!(delhi.1, 77.2090); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    pub fn latitude(&self) -> f64 {
        self.0
    }

    pub fn longitude(&self) -> f64 {
        self.1
    }

    /// Human readable label stored on observation records, e.g.
    /// `Lat: 39.9042, Lon: 116.4074`.
    pub fn label(&self) -> String {
        format!("Lat: {:.4}, Lon: {:.4}", self.0, self.1)
    }
}

/// A named point location with a default map zoom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Unique name, also used as the key of the historical store (e.g. "Beijing China").
    pub name: String,
    /// Coordinates used for weather requests and for centering the map.
    pub location: LatLon,
    /// Map zoom level applied when the region is selected.
    pub zoom: u8,
    /// Short description shown next to the region name.
    pub description: String,
}

impl Region {
    pub fn new(
        name: impl Into<String>,
        location: LatLon,
        zoom: u8,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location,
            zoom,
            description: description.into(),
        }
    }

    /// Viewport centered on the region at its default zoom.
    pub fn viewport(&self) -> Viewport {
        Viewport {
            center: self.location,
            zoom: self.zoom,
        }
    }
}

/// Map center and zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: LatLon,
    pub zoom: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_uses_four_decimals() {
        assert_eq!(LatLon(39.9042, 116.4074).label(), "Lat: 39.9042, Lon: 116.4074");
        assert_eq!(LatLon(28.6139, 77.209).label(), "Lat: 28.6139, Lon: 77.2090");
    }
}
