//! Process-lifetime history of observation records, keyed by region and year.
//!
//! There is no eviction and nothing is persisted: the store starts empty and
//! only grows. Three cities times nine years keeps it tiny; a bounded cache or
//! real persistence would replace it if that changes.

use crate::types::observation::ObservationRecord;
use log::debug;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};

/// Records of one region, ordered by year.
pub type YearlyRecords = BTreeMap<i32, ObservationRecord>;

#[derive(Debug, Clone, Default)]
pub struct HistoricalStore {
    regions: HashMap<String, YearlyRecords>,
}

impl HistoricalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `record` at (`region`, `year`), replacing any previous record for that key.
    ///
    /// Returns the replaced record, if any.
    pub fn upsert(
        &mut self,
        region: &str,
        year: i32,
        record: ObservationRecord,
    ) -> Option<ObservationRecord> {
        let years = self.regions.entry(region.to_string()).or_default();
        match years.entry(year) {
            Entry::Occupied(mut entry) => {
                debug!("Replacing stored record for {} {}", region, year);
                Some(entry.insert(record))
            }
            Entry::Vacant(entry) => {
                entry.insert(record);
                None
            }
        }
    }

    /// All records of `region`, or `None` if nothing was stored for it yet.
    pub fn get(&self, region: &str) -> Option<&YearlyRecords> {
        self.regions.get(region)
    }

    pub fn get_record(&self, region: &str, year: i32) -> Option<&ObservationRecord> {
        self.regions.get(region).and_then(|years| years.get(&year))
    }

    /// Ascending years of `region` whose record is not an error record.
    pub fn all_years(&self, region: &str) -> Vec<i32> {
        self.get(region)
            .map(|years| {
                years
                    .iter()
                    .filter(|(_, record)| !record.is_error())
                    .map(|(year, _)| *year)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Names of regions that have at least one record, in no particular order.
    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    /// Total number of stored records.
    pub fn len(&self) -> usize {
        self.regions.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::observation::{FailureKind, FetchFailure, RawReadings};
    use crate::types::region::LatLon;

    fn record(region: &str, year: i32, temperature: f64) -> ObservationRecord {
        ObservationRecord::from_readings(
            region,
            LatLon(39.9042, 116.4074),
            year,
            RawReadings {
                temperature: Some(temperature),
                ..Default::default()
            },
            false,
        )
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = HistoricalStore::new();
        assert!(store.is_empty());
        assert!(store.get("Beijing China").is_none());
        assert!(store.all_years("Beijing China").is_empty());
    }

    #[test]
    fn test_upsert_overwrites_same_key() {
        let mut store = HistoricalStore::new();
        let r1 = record("Beijing China", 2020, 21.0);
        let r2 = record("Beijing China", 2020, 23.5);

        assert_eq!(store.upsert("Beijing China", 2020, r1.clone()), None);
        assert_eq!(store.upsert("Beijing China", 2020, r2.clone()), Some(r1));

        let years = store.get("Beijing China").unwrap();
        assert_eq!(years.len(), 1);
        assert_eq!(years[&2020], r2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_all_years_sorted_and_skips_errors() {
        let mut store = HistoricalStore::new();
        store.upsert("Delhi India", 2022, record("Delhi India", 2022, 30.0));
        store.upsert("Delhi India", 2016, record("Delhi India", 2016, 29.0));
        store.upsert(
            "Delhi India",
            2019,
            ObservationRecord::failed(
                "Delhi India",
                LatLon(28.6139, 77.2090),
                2019,
                FetchFailure {
                    kind: FailureKind::UpstreamUnavailable,
                    message: "timeout".to_string(),
                },
            ),
        );
        store.upsert("Beijing China", 2018, record("Beijing China", 2018, 22.0));

        assert_eq!(store.all_years("Delhi India"), vec![2016, 2022]);
        assert_eq!(store.all_years("Beijing China"), vec![2018]);
        assert_eq!(store.len(), 4);
        let mut regions: Vec<_> = store.regions().collect();
        regions.sort();
        assert_eq!(regions, ["Beijing China", "Delhi India"]);
        assert!(store.get_record("Delhi India", 2019).unwrap().is_error());
    }
}
