use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    Platforms,
    Tools,
    LanguagesAndFrameworks,
    Techniques,
}

impl Quadrant {
    /// Slice order, starting at 12 o'clock and proceeding clockwise.
    pub const ALL: [Self; 4] = [
        Self::Platforms,
        Self::Tools,
        Self::LanguagesAndFrameworks,
        Self::Techniques,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Platforms => "Platforms",
            Self::Tools => "Tools",
            Self::LanguagesAndFrameworks => "Languages & Frameworks",
            Self::Techniques => "Techniques",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Quadrant {
    type Err = UnknownValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|quadrant| quadrant.label() == value)
            .ok_or_else(|| UnknownValue(value.to_owned()))
    }
}

/// Adoption status, declared from least to most mature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ring {
    NotRecommended,
    InDiscovery,
    Adopted,
}

impl Ring {
    /// Ring order used for band placement: index 0 is drawn as the outer band.
    pub const ALL: [Self; 3] = [Self::Adopted, Self::InDiscovery, Self::NotRecommended];

    pub fn label(self) -> &'static str {
        match self {
            Self::NotRecommended => "Not Recommended",
            Self::InDiscovery => "In Discovery",
            Self::Adopted => "Adopted",
        }
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Ring {
    type Err = UnknownValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ring| ring.label() == value)
            .ok_or_else(|| UnknownValue(value.to_owned()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized radar value: {0:?}")]
pub struct UnknownValue(pub String);

/// One technology entry, with quadrant and ring kept exactly as found in the data file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarItem {
    pub label: String,
    pub quadrant: String,
    pub ring: String,
    pub moved: bool,
    pub description: String,
    pub owners: String,
}

impl RadarItem {
    pub fn quadrant_kind(&self) -> Option<Quadrant> {
        self.quadrant.parse().ok()
    }

    pub fn ring_kind(&self) -> Option<Ring> {
        self.ring.parse().ok()
    }

    /// Whether the item can be placed on the radar at all.
    pub fn is_placeable(&self) -> bool {
        self.quadrant_kind().is_some() && self.ring_kind().is_some()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarSnapshot {
    pub last_modified: String,
    pub items: Vec<RadarItem>,
}

impl RadarSnapshot {
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn placeable_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_placeable()).count()
    }

    /// Indices of all items grouped by their raw quadrant string, in first-seen order.
    pub fn grouped_by_quadrant(&self) -> Vec<(&str, Vec<usize>)> {
        let mut groups: Vec<(&str, Vec<usize>)> = Vec::new();
        for (index, item) in self.items.iter().enumerate() {
            match groups
                .iter_mut()
                .find(|(quadrant, _)| *quadrant == item.quadrant.as_str())
            {
                Some((_, indices)) => indices.push(index),
                None => groups.push((item.quadrant.as_str(), vec![index])),
            }
        }
        groups
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
