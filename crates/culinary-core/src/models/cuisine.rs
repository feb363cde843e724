// ABOUTME: Cuisine tag enumeration and the ordered cuisine selection set
// ABOUTME: Wire values map onto a fixed set of eight cuisines with a lossless fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::btree_set::{self, BTreeSet};
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Cuisine category of a recipe
///
/// The backend sends one of eight known values. Anything else is kept verbatim
/// in `Other` so a single unexpected tag does not fail the whole list; those
/// recipes are only reachable with an empty cuisine selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Cuisine {
    /// Indian cuisine
    Indian,
    /// Mexican cuisine
    Mexican,
    /// Chinese cuisine
    Chinese,
    /// Italian cuisine
    Italian,
    /// Thai cuisine
    Thai,
    /// Japanese cuisine
    Japanese,
    /// Mediterranean cuisine
    Mediterranean,
    /// American cuisine
    American,
    /// Tag outside the known set, kept as sent
    Other(String),
}

impl Cuisine {
    /// The selectable cuisines, in the order the picker lists them
    pub const ALL: [Self; 8] = [
        Self::Indian,
        Self::Mexican,
        Self::Chinese,
        Self::Italian,
        Self::Thai,
        Self::Japanese,
        Self::Mediterranean,
        Self::American,
    ];

    /// Map a wire value onto a cuisine (exact, case-sensitive match)
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value {
            "Indian" => Self::Indian,
            "Mexican" => Self::Mexican,
            "Chinese" => Self::Chinese,
            "Italian" => Self::Italian,
            "Thai" => Self::Thai,
            "Japanese" => Self::Japanese,
            "Mediterranean" => Self::Mediterranean,
            "American" => Self::American,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Display and wire name
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Indian => "Indian",
            Self::Mexican => "Mexican",
            Self::Chinese => "Chinese",
            Self::Italian => "Italian",
            Self::Thai => "Thai",
            Self::Japanese => "Japanese",
            Self::Mediterranean => "Mediterranean",
            Self::American => "American",
            Self::Other(name) => name,
        }
    }

    /// Whether this is one of the eight selectable cuisines
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for Cuisine {
    fn from(value: String) -> Self {
        Self::from_wire(&value)
    }
}

impl From<Cuisine> for String {
    fn from(cuisine: Cuisine) -> Self {
        match cuisine {
            Cuisine::Other(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

impl Display for Cuisine {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of selected cuisine tags
///
/// An empty set means "all cuisines", never "no cuisines". Iteration follows
/// the picker order of [`Cuisine::ALL`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuisineSet(BTreeSet<Cuisine>);

impl CuisineSet {
    /// Create an empty selection
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// True when no cuisine is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of selected cuisines
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Membership test
    #[must_use]
    pub fn contains(&self, cuisine: &Cuisine) -> bool {
        self.0.contains(cuisine)
    }

    /// Whether a recipe of `cuisine` passes this selection
    #[must_use]
    pub fn admits(&self, cuisine: &Cuisine) -> bool {
        self.is_empty() || self.contains(cuisine)
    }

    /// Add the cuisine if absent, remove it if present
    ///
    /// Returns `true` when the cuisine is selected afterwards.
    pub fn toggle(&mut self, cuisine: Cuisine) -> bool {
        if self.0.remove(&cuisine) {
            false
        } else {
            self.0.insert(cuisine);
            true
        }
    }

    /// Add a cuisine, returning whether it was newly inserted
    pub fn insert(&mut self, cuisine: Cuisine) -> bool {
        self.0.insert(cuisine)
    }

    /// Remove every selection
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Iterate selected cuisines in picker order
    pub fn iter(&self) -> btree_set::Iter<'_, Cuisine> {
        self.0.iter()
    }
}

impl FromIterator<Cuisine> for CuisineSet {
    fn from_iter<I: IntoIterator<Item = Cuisine>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CuisineSet {
    type Item = &'a Cuisine;
    type IntoIter = btree_set::Iter<'a, Cuisine>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_round_trip_for_known_values() {
        for cuisine in Cuisine::ALL {
            assert_eq!(Cuisine::from_wire(cuisine.as_str()), cuisine);
        }
    }

    #[test]
    fn test_unknown_value_is_preserved() {
        let cuisine: Cuisine = serde_json::from_str("\"Ethiopian\"").unwrap();
        assert_eq!(cuisine, Cuisine::Other("Ethiopian".to_owned()));
        assert!(!cuisine.is_known());
        assert_eq!(serde_json::to_string(&cuisine).unwrap(), "\"Ethiopian\"");
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert_eq!(
            Cuisine::from_wire("indian"),
            Cuisine::Other("indian".to_owned())
        );
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut set = CuisineSet::new();
        assert!(set.toggle(Cuisine::Thai));
        assert!(set.contains(&Cuisine::Thai));
        assert!(!set.toggle(Cuisine::Thai));
        assert!(set.is_empty());
    }

    #[test]
    fn test_empty_set_admits_everything() {
        let set = CuisineSet::new();
        assert!(set.admits(&Cuisine::Italian));
        assert!(set.admits(&Cuisine::Other("Fusion".to_owned())));
    }

    #[test]
    fn test_iteration_follows_picker_order() {
        let set: CuisineSet = [Cuisine::American, Cuisine::Indian, Cuisine::Thai]
            .into_iter()
            .collect();
        let names: Vec<&str> = set.iter().map(Cuisine::as_str).collect();
        assert_eq!(names, vec!["Indian", "Thai", "American"]);
    }
}
