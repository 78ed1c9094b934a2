//! Locations the restaurant lookup recognizes.
//!
//! Recognition is a fixed allow-list. A free-text location matches an entry
//! when its lowercased form *contains* one of the entry's trigger
//! substrings; nothing else opens a non-empty result. Containment is
//! deliberately loose: `"ny"` also matches `"Sunnyvale"` and `"Albany"`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    NewYork,
}

impl Location {
    /// Every recognized location, in matching order.
    pub const ALL: [Location; 1] = [Location::NewYork];

    /// Lowercase substrings that select this location.
    pub fn triggers(self) -> &'static [&'static str] {
        match self {
            Location::NewYork => &["new york", "ny"],
        }
    }

    /// Data partition file, relative to the finder's data directory.
    pub fn partition(self) -> &'static str {
        match self {
            Location::NewYork => "restaurant_data.json",
        }
    }

    /// Map free text onto the allow-list.
    pub fn recognize(input: &str) -> Option<Location> {
        let needle = input.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|location| location.triggers().iter().any(|t| needle.contains(t)))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::NewYork => f.write_str("New York"),
        }
    }
}
