use super::location::Location;
use super::query::RestaurantQuery;
use super::store::{DegradeReason, RecordStore, RestaurantRecord};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

/// When the finder reads its data partitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Re-read the partition on every lookup, so edits to the file show up
    /// immediately.
    #[default]
    ReloadEachCall,
    /// Read a partition on first use and keep it for the life of the finder.
    /// Failed reads are not cached.
    CacheFirstLoad,
}

/// Outcome of a lookup. Serializes to a JSON array in every case.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found { records: Vec<RestaurantRecord>, total: usize },
    NoMatch,
    Degraded(DegradeReason),
}

impl Lookup {
    pub fn records(&self) -> &[RestaurantRecord] {
        match self {
            Lookup::Found { records, .. } => records,
            Lookup::NoMatch | Lookup::Degraded(_) => &[],
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Lookup::Degraded(_))
    }

    /// JSON array text of the returned records, `[]` when there are none.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self.records()).unwrap_or_else(|_| "[]".to_string())
    }
}

/// Bounded, order-preserving restaurant lookup over JSON data partitions.
pub struct RestaurantFinder {
    data_dir: PathBuf,
    policy: LoadPolicy,
    cache: RwLock<HashMap<Location, Arc<RecordStore>>>,
}

impl RestaurantFinder {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into(), policy: LoadPolicy::default(), cache: RwLock::default() }
    }

    pub fn with_load_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn load_policy(&self) -> LoadPolicy {
        self.policy
    }

    pub fn partition_path(&self, location: Location) -> PathBuf {
        self.data_dir.join(location.partition())
    }

    pub fn find(&self, query: &RestaurantQuery) -> Lookup {
        tracing::info!(
            count = query.count,
            cuisine = %query.cuisine,
            location = %query.location,
            "get_restaurants called"
        );

        let Some(location) = Location::recognize(&query.location) else {
            tracing::debug!(location = %query.location, "location not in allow-list");
            return Lookup::NoMatch;
        };

        match self.store_for(location) {
            Ok(store) => {
                let records = store.take(query.limit());
                tracing::info!(
                    %location,
                    found = store.len(),
                    returning = records.len(),
                    "restaurants found"
                );
                Lookup::Found { records, total: store.len() }
            }
            Err(reason) => {
                tracing::error!(
                    reason = reason.kind(),
                    path = %reason.path().display(),
                    error = %reason,
                    "restaurant data unavailable, returning no results"
                );
                Lookup::Degraded(reason)
            }
        }
    }

    /// Function-style entry point: always returns JSON array text.
    pub fn get_restaurants(&self, cuisine: &str, location: &str, count: Option<i64>) -> String {
        let mut query = RestaurantQuery::new(cuisine, location);
        if let Some(count) = count {
            query = query.with_count(count);
        }
        self.find(&query).to_json()
    }

    fn store_for(&self, location: Location) -> Result<Arc<RecordStore>, DegradeReason> {
        let path = self.partition_path(location);

        if self.policy == LoadPolicy::ReloadEachCall {
            return RecordStore::load(&path).map(Arc::new);
        }

        if let Some(store) =
            self.cache.read().unwrap_or_else(PoisonError::into_inner).get(&location)
        {
            return Ok(store.clone());
        }

        let store = Arc::new(RecordStore::load(&path)?);
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        Ok(cache.entry(location).or_insert(store).clone())
    }
}
