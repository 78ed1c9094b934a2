use serde::Deserialize;

/// Number of records returned when the caller does not ask for a count.
pub const DEFAULT_COUNT: i64 = 5;

fn default_count() -> i64 {
    DEFAULT_COUNT
}

/// A single restaurant lookup request.
///
/// `cuisine` is recorded for logging but does not narrow the result set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RestaurantQuery {
    #[serde(default)]
    pub cuisine: String,
    pub location: String,
    #[serde(default = "default_count")]
    pub count: i64,
}

impl RestaurantQuery {
    pub fn new(cuisine: impl Into<String>, location: impl Into<String>) -> Self {
        Self { cuisine: cuisine.into(), location: location.into(), count: DEFAULT_COUNT }
    }

    pub fn with_count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    /// Upper bound on returned records. Negative counts bound to zero.
    pub fn limit(&self) -> usize {
        usize::try_from(self.count).unwrap_or(0)
    }
}
