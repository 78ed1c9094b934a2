use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// One restaurant entry. Fields are carried through untouched, in file order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantRecord(Map<String, Value>);

impl RestaurantRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Why a lookup could not read its data partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DegradeReason {
    SourceMissing { path: PathBuf },
    SourceUnreadable { path: PathBuf, message: String },
    SourceMalformed { path: PathBuf, message: String },
}

impl DegradeReason {
    pub fn path(&self) -> &Path {
        match self {
            DegradeReason::SourceMissing { path }
            | DegradeReason::SourceUnreadable { path, .. }
            | DegradeReason::SourceMalformed { path, .. } => path,
        }
    }

    /// Short machine-readable label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            DegradeReason::SourceMissing { .. } => "source_missing",
            DegradeReason::SourceUnreadable { .. } => "source_unreadable",
            DegradeReason::SourceMalformed { .. } => "source_malformed",
        }
    }
}

impl fmt::Display for DegradeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegradeReason::SourceMissing { path } => {
                write!(f, "restaurant data not found at {}", path.display())
            }
            DegradeReason::SourceUnreadable { path, message } => {
                write!(f, "failed to read restaurant data from {}: {}", path.display(), message)
            }
            DegradeReason::SourceMalformed { path, message } => {
                write!(f, "failed to decode JSON from {}: {}", path.display(), message)
            }
        }
    }
}

/// Ordered, read-only set of restaurant records loaded from one JSON file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<RestaurantRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<RestaurantRecord>) -> Self {
        Self { records }
    }

    /// Read and parse a flat JSON array of objects.
    pub fn load(path: &Path) -> Result<Self, DegradeReason> {
        let raw = std::fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DegradeReason::SourceMissing { path: path.to_path_buf() },
            _ => DegradeReason::SourceUnreadable {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
        })?;

        Self::parse(&raw).map_err(|e| DegradeReason::SourceMalformed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn parse(raw: &[u8]) -> serde_json::Result<Self> {
        let records: Vec<RestaurantRecord> = serde_json::from_slice(raw)?;
        Ok(Self { records })
    }

    pub fn records(&self) -> &[RestaurantRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The first `count` records, in stored order.
    pub fn take(&self, count: usize) -> Vec<RestaurantRecord> {
        self.records.iter().take(count).cloned().collect()
    }
}
