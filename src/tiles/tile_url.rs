//! Builds NASA GIBS WMTS tile templates for the two imagery products shown on the map.
//!
//! The returned strings keep `{z}/{y}/{x}` as literal placeholders; a tiling
//! client substitutes them. No validation happens here: any year produces a
//! syntactically valid template even if GIBS has no tile for that date.

use crate::utils::mid_month_days_before;
use chrono::{DateTime, Datelike, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

const GIBS_WMTS_BASE: &str = "https://gibs.earthdata.nasa.gov/wmts/epsg3857/best";

/// The monthly CO composite lags real time by roughly two months.
pub const CARBON_MONOXIDE_LAG_DAYS: i64 = 60;

/// Satellite imagery products available as map layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageryProduct {
    /// MODIS Terra corrected reflectance, true color.
    TrueColor,
    /// MOPITT monthly carbon monoxide total column, daytime.
    CarbonMonoxide,
}

impl ImageryProduct {
    /// GIBS layer identifier.
    pub fn layer_name(&self) -> &'static str {
        match self {
            ImageryProduct::TrueColor => "MODIS_Terra_CorrectedReflectance_TrueColor",
            ImageryProduct::CarbonMonoxide => "MOPITT_CO_Monthly_Total_Column_Day",
        }
    }

    fn tile_matrix_set(&self) -> &'static str {
        match self {
            ImageryProduct::TrueColor => "GoogleMapsCompatible_Level9",
            ImageryProduct::CarbonMonoxide => "GoogleMapsCompatible_Level6",
        }
    }

    fn extension(&self) -> &'static str {
        match self {
            ImageryProduct::TrueColor => "jpg",
            ImageryProduct::CarbonMonoxide => "png",
        }
    }

    /// Tile template for a date formatted `YYYY-MM-DD`.
    pub fn tile_template(&self, date: &str) -> String {
        format!(
            "{}/{}/default/{}/{}/{{z}}/{{y}}/{{x}}.{}",
            GIBS_WMTS_BASE,
            self.layer_name(),
            date,
            self.tile_matrix_set(),
            self.extension()
        )
    }
}

fn mid_june_date(year: i32) -> String {
    format!("{year:04}-06-15")
}

/// True-color template for June 15th of `year`.
///
/// # Examples
///
/// ```
/// let url = atmoscope::build_true_color_tile_template(2020);
/// assert!(url.contains("/2020-06-15/"));
/// assert!(url.ends_with("{z}/{y}/{x}.jpg"));
/// ```
pub fn build_true_color_tile_template(year: i32) -> String {
    ImageryProduct::TrueColor.tile_template(&mid_june_date(year))
}

/// Carbon-monoxide template for `year`, relative to the current time.
pub fn build_carbon_monoxide_tile_template(year: i32) -> String {
    build_carbon_monoxide_tile_template_at(year, Utc::now())
}

/// Carbon-monoxide template for `year` as seen at `now`.
///
/// For the current calendar year the date is 60 days before `now`, moved to
/// the 15th of that month, since the current month has no composite yet.
/// Any other year uses June 15th.
pub fn build_carbon_monoxide_tile_template_at(year: i32, now: DateTime<Utc>) -> String {
    let date = if year == now.year() {
        mid_month_days_before(now, CARBON_MONOXIDE_LAG_DAYS)
    } else {
        mid_june_date(year)
    };
    debug!("MOPITT tile date for year {}: {}", year, date);
    ImageryProduct::CarbonMonoxide.tile_template(&date)
}
