//! The static catalog of regions offered in the city dropdown.

use crate::types::region::{LatLon, Region, Viewport};
use log::debug;

/// Name of the region used when a lookup misses.
pub const DEFAULT_REGION: &str = "Beijing China";

/// Map viewport before any region is selected.
pub const DEFAULT_VIEWPORT: Viewport = Viewport {
    center: LatLon(30.0, 100.0),
    zoom: 3,
};

/// An immutable, ordered set of regions with a designated fallback.
#[derive(Debug, Clone)]
pub struct RegionCatalog {
    regions: Vec<Region>,
    default_index: usize,
}

impl RegionCatalog {
    /// Creates a catalog. Returns `None` if `regions` does not contain `default_name`.
    pub fn new(regions: Vec<Region>, default_name: &str) -> Option<Self> {
        let default_index = regions.iter().position(|r| r.name == default_name)?;
        Some(Self {
            regions,
            default_index,
        })
    }

    /// The three cities the dashboard ships with, defaulting to [`DEFAULT_REGION`].
    pub fn builtin() -> Self {
        let regions = vec![
            Region::new(
                "Beijing China",
                LatLon(39.9042, 116.4074),
                6,
                "Capital - High urban pollution",
            ),
            Region::new(
                "Shanghai China",
                LatLon(31.2304, 121.4737),
                6,
                "Financial and industrial center",
            ),
            Region::new(
                "Delhi India",
                LatLon(28.6139, 77.2090),
                6,
                "Megacity with high pollution",
            ),
        ];
        Self::new(regions, DEFAULT_REGION).expect("DEFAULT_REGION is one of the built-in regions")
    }

    pub fn get(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }

    pub fn default_region(&self) -> &Region {
        &self.regions[self.default_index]
    }

    /// Looks up `name`, falling back to the default region for unknown names.
    pub fn resolve_region_or_default(&self, name: &str) -> &Region {
        self.get(name).unwrap_or_else(|| {
            debug!(
                "Unknown region '{}', using default region '{}'",
                name,
                self.default_region().name
            );
            self.default_region()
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|r| r.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }
}

impl Default for RegionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
