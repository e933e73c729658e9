//! Sector lookup tables for the growth, demand and balance dimensions
//!
//! Each dimension owns one table. Sectors absent from a table fall back to
//! the table's default score, so new sectors in the data never fail scoring.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Score for sectors that no table knows about
pub const DEFAULT_SECTOR_SCORE: u32 = 60;

pub const GROWTH_SCORES: &[(&str, u32)] = &[
    ("tech", 95),
    ("bfsi", 85),
    ("healthcare", 80),
    ("edtech", 75),
    ("ecommerce", 70),
    ("renewable", 85),
    ("gaming", 65),
    ("logistics", 60),
    ("manufacturing", 55),
    ("agritech", 70),
];

pub const DEMAND_SCORES: &[(&str, u32)] = &[
    ("tech", 90),
    ("healthcare", 85),
    ("bfsi", 80),
    ("ecommerce", 75),
    ("logistics", 70),
    ("manufacturing", 65),
    ("edtech", 70),
    ("renewable", 75),
    ("gaming", 60),
    ("agritech", 55),
];

/// Work-life balance
pub const BALANCE_SCORES: &[(&str, u32)] = &[
    ("edtech", 85),
    ("healthcare", 70),
    ("bfsi", 65),
    ("tech", 60),
    ("ecommerce", 55),
    ("manufacturing", 75),
    ("logistics", 50),
    ("gaming", 45),
    ("renewable", 70),
    ("agritech", 80),
];

/// Sectors that earn the best-match heuristic's sector bonus
pub const HIGH_GROWTH_SECTORS: &[&str] = &["tech", "bfsi"];

/// A sector → score table with an explicit fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorTable {
    scores: BTreeMap<String, u32>,
    default_score: u32,
}

impl SectorTable {
    pub fn from_entries(entries: &[(&str, u32)], default_score: u32) -> Self {
        let scores = entries
            .iter()
            .map(|(sector, score)| (sector.to_string(), (*score).min(100)))
            .collect();

        Self {
            scores,
            default_score: default_score.min(100),
        }
    }

    pub fn growth() -> Self {
        Self::from_entries(GROWTH_SCORES, DEFAULT_SECTOR_SCORE)
    }

    pub fn demand() -> Self {
        Self::from_entries(DEMAND_SCORES, DEFAULT_SECTOR_SCORE)
    }

    pub fn balance() -> Self {
        Self::from_entries(BALANCE_SCORES, DEFAULT_SECTOR_SCORE)
    }

    /// Score for `sector`; exact identifier match, default otherwise
    pub fn score(&self, sector: &str) -> u32 {
        self.scores.get(sector).copied().unwrap_or(self.default_score)
    }

    pub fn is_known(&self, sector: &str) -> bool {
        self.scores.contains_key(sector)
    }

    pub fn default_score(&self) -> u32 {
        self.default_score
    }

    pub fn set_default_score(&mut self, score: u32) {
        self.default_score = score.min(100);
    }

    /// Add or replace sector scores. Values are clamped to 100.
    pub fn extend<'a, I>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (&'a String, &'a u32)>,
    {
        for (sector, score) in overrides {
            self.scores.insert(sector.clone(), (*score).min(100));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.scores.iter().map(|(sector, score)| (sector.as_str(), *score))
    }
}

pub fn is_high_growth_sector(sector: &str) -> bool {
    HIGH_GROWTH_SECTORS.contains(&sector)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sectors() {
        assert_eq!(SectorTable::growth().score("tech"), 95);
        assert_eq!(SectorTable::demand().score("healthcare"), 85);
        assert_eq!(SectorTable::balance().score("edtech"), 85);
        assert_eq!(SectorTable::balance().score("gaming"), 45);
    }

    #[test]
    fn test_unknown_sector_falls_back() {
        let table = SectorTable::growth();
        assert_eq!(table.score("spacetech"), DEFAULT_SECTOR_SCORE);
        assert_eq!(table.score(""), DEFAULT_SECTOR_SCORE);
        // Lookup is exact on the identifier
        assert_eq!(table.score("Tech"), DEFAULT_SECTOR_SCORE);
    }

    #[test]
    fn test_tables_cover_same_sectors() {
        let growth = SectorTable::growth();
        let demand = SectorTable::demand();
        let balance = SectorTable::balance();
        assert_eq!(growth.iter().count(), 10);
        for (sector, _) in growth.iter() {
            assert!(demand.is_known(sector), "demand table missing {}", sector);
            assert!(balance.is_known(sector), "balance table missing {}", sector);
        }
    }

    #[test]
    fn test_extend_overrides_and_clamps() {
        let mut table = SectorTable::growth();
        let mut overrides = BTreeMap::new();
        overrides.insert("fintech".to_string(), 88);
        overrides.insert("tech".to_string(), 150);
        table.extend(&overrides);

        assert_eq!(table.score("fintech"), 88);
        assert_eq!(table.score("tech"), 100);
        assert_eq!(table.iter().count(), 11);
    }

    #[test]
    fn test_high_growth_sectors() {
        assert!(is_high_growth_sector("tech"));
        assert!(is_high_growth_sector("bfsi"));
        assert!(!is_high_growth_sector("healthcare"));
    }
}
