use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::features::postal_codes::clients::PostalSearchSource;
use crate::features::postal_codes::models::PostalCodeCandidate;
use crate::features::regions::clients::RegionDataSource;
use crate::features::regions::models::{Region, RegionLevel};
use crate::shared::source_error::SourceError;

type ListKey = (RegionLevel, Option<String>);

fn list_key(level: RegionLevel, parent_id: Option<&str>) -> ListKey {
    (level, parent_id.map(str::to_string))
}

/// In-memory region source with switchable failures and gates for in-flight tests
#[derive(Default)]
pub struct StaticRegionSource {
    lists: HashMap<ListKey, Vec<Region>>,
    failing: Mutex<HashSet<ListKey>>,
    held: Mutex<HashMap<ListKey, Arc<Notify>>>,
    calls: Mutex<Vec<ListKey>>,
}

impl StaticRegionSource {
    pub fn with_list(
        mut self,
        level: RegionLevel,
        parent_id: Option<&str>,
        items: &[(&str, &str)],
    ) -> Self {
        let regions = items
            .iter()
            .map(|(id, name)| Region::new(*id, *name))
            .collect();
        self.lists.insert(list_key(level, parent_id), regions);
        self
    }

    /// DKI Jakarta down to the villages of Kebayoran Baru
    pub fn jakarta_selatan() -> Self {
        Self::default()
            .with_list(
                RegionLevel::Province,
                None,
                &[("31", "DKI JAKARTA"), ("32", "JAWA BARAT")],
            )
            .with_list(
                RegionLevel::Regency,
                Some("31"),
                &[("3171", "KOTA JAKARTA SELATAN"), ("3172", "KOTA JAKARTA TIMUR")],
            )
            .with_list(RegionLevel::Regency, Some("32"), &[("3273", "KOTA BANDUNG")])
            .with_list(
                RegionLevel::District,
                Some("3171"),
                &[("3171070", "KEBAYORAN BARU"), ("3171060", "KEBAYORAN LAMA")],
            )
            .with_list(
                RegionLevel::Village,
                Some("3171070"),
                &[
                    ("3171070001", "SELONG"),
                    ("3171070005", "GANDARIA UTARA"),
                    ("3171070006", "CIPETE UTARA"),
                    ("3171070009", "SENAYAN"),
                ],
            )
    }

    pub fn fail(&self, level: RegionLevel, parent_id: Option<&str>) {
        self.failing
            .lock()
            .unwrap()
            .insert(list_key(level, parent_id));
    }

    pub fn recover(&self, level: RegionLevel, parent_id: Option<&str>) {
        self.failing
            .lock()
            .unwrap()
            .remove(&list_key(level, parent_id));
    }

    /// Block fetches of this list until the returned gate is notified
    pub fn hold(&self, level: RegionLevel, parent_id: Option<&str>) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.held
            .lock()
            .unwrap()
            .insert(list_key(level, parent_id), Arc::clone(&gate));
        gate
    }

    pub fn calls_for(&self, level: RegionLevel, parent_id: Option<&str>) -> usize {
        let key = list_key(level, parent_id);
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| **call == key)
            .count()
    }
}

#[async_trait]
impl RegionDataSource for StaticRegionSource {
    async fn fetch_regions(
        &self,
        level: RegionLevel,
        parent_id: Option<&str>,
    ) -> Result<Vec<Region>, SourceError> {
        let key = list_key(level, parent_id);
        self.calls.lock().unwrap().push(key.clone());

        let gate = self.held.lock().unwrap().get(&key).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        if self.failing.lock().unwrap().contains(&key) {
            return Err(SourceError::Transport("HTTP 503".to_string()));
        }

        self.lists
            .get(&key)
            .cloned()
            .ok_or_else(|| SourceError::Transport("HTTP 404".to_string()))
    }
}

/// Candidate record with the fields the matcher looks at
pub fn candidate(
    code: i64,
    village: &str,
    district: &str,
    regency: &str,
    province: &str,
) -> PostalCodeCandidate {
    PostalCodeCandidate {
        code,
        village: village.to_string(),
        district: district.to_string(),
        regency: regency.to_string(),
        province: province.to_string(),
        latitude: -6.2,
        longitude: 106.8,
        elevation: 30.0,
        timezone: "WIB".to_string(),
    }
}

/// In-memory postal search keyed by exact query text; unknown queries return no rows
#[derive(Default)]
pub struct StaticPostalSource {
    responses: Mutex<HashMap<String, Result<Vec<PostalCodeCandidate>, SourceError>>>,
    queries: Mutex<Vec<String>>,
}

impl StaticPostalSource {
    pub fn respond(self, query: &str, result: Result<Vec<PostalCodeCandidate>, SourceError>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(query.to_string(), result);
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl PostalSearchSource for StaticPostalSource {
    async fn search(&self, query: &str) -> Result<Vec<PostalCodeCandidate>, SourceError> {
        self.queries.lock().unwrap().push(query.to_string());
        self.responses
            .lock()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
