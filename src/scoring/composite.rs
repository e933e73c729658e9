//! Weighted composite match score

use crate::config::ScoringConfig;
use crate::scoring::dimensions::{
    access_score_for, salary_score_for, Dimension, DimensionScore,
};
use crate::scoring::job::Job;
use crate::scoring::sectors::{SectorTable, DEFAULT_SECTOR_SCORE};
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Bonus added to growth and demand for hot listings
pub const HOT_BONUS: u32 = 15;

/// Per-dimension weights of the composite score. They sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub salary: f64,
    pub growth: f64,
    pub demand: f64,
    pub balance: f64,
    pub access: f64,
}

pub const DEFAULT_WEIGHTS: Weights = Weights {
    salary: 0.25,
    growth: 0.25,
    demand: 0.20,
    balance: 0.15,
    access: 0.15,
};

impl Weights {
    pub fn sum(&self) -> f64 {
        self.salary + self.growth + self.demand + self.balance + self.access
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Salary => self.salary,
            Dimension::Growth => self.growth,
            Dimension::Demand => self.demand,
            Dimension::Balance => self.balance,
            Dimension::Access => self.access,
        }
    }
}

impl Default for Weights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeResult {
    /// Weighted total, rounded, 0-100
    pub total: u32,
    /// Salary, Growth, Demand, Balance, Access
    pub breakdown: [DimensionScore; 5],
}

impl CompositeResult {
    pub fn score_for(&self, dimension: Dimension) -> u32 {
        self.breakdown
            .iter()
            .find(|entry| entry.dimension == dimension)
            .map(|entry| entry.score)
            .unwrap_or(0)
    }
}

/// Scores jobs against the sector tables and weights it was built with.
///
/// Holds no per-call state; one scorer can be shared freely.
#[derive(Debug, Clone, PartialEq)]
pub struct JobScorer {
    growth: SectorTable,
    demand: SectorTable,
    balance: SectorTable,
    weights: Weights,
    hot_bonus: u32,
}

impl Default for JobScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl JobScorer {
    pub fn new() -> Self {
        Self {
            growth: SectorTable::growth(),
            demand: SectorTable::demand(),
            balance: SectorTable::balance(),
            weights: DEFAULT_WEIGHTS,
            hot_bonus: HOT_BONUS,
        }
    }

    /// Build a scorer from configuration, merging sector overrides over the
    /// built-in tables.
    pub fn from_config(config: &ScoringConfig) -> Self {
        let mut scorer = Self::new();
        scorer.weights = config.weights;
        scorer.hot_bonus = config.hot_bonus;

        for table in [&mut scorer.growth, &mut scorer.demand, &mut scorer.balance] {
            table.set_default_score(config.default_sector_score);
        }
        scorer.growth.extend(&config.sectors.growth);
        scorer.demand.extend(&config.sectors.demand);
        scorer.balance.extend(&config.sectors.balance);

        scorer
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn hot_bonus(&self) -> u32 {
        self.hot_bonus
    }

    pub fn growth_table(&self) -> &SectorTable {
        &self.growth
    }

    pub fn demand_table(&self) -> &SectorTable {
        &self.demand
    }

    pub fn balance_table(&self) -> &SectorTable {
        &self.balance
    }

    pub fn salary_score(&self, job: &Job) -> u32 {
        salary_score_for(&job.salary)
    }

    pub fn growth_score(&self, job: &Job) -> u32 {
        self.with_hot_bonus(self.growth.score(&job.sector), job.is_hot)
    }

    pub fn demand_score(&self, job: &Job) -> u32 {
        self.with_hot_bonus(self.demand.score(&job.sector), job.is_hot)
    }

    pub fn balance_score(&self, job: &Job) -> u32 {
        self.balance.score(&job.sector)
    }

    pub fn access_score(&self, job: &Job) -> u32 {
        access_score_for(&job.requirement)
    }

    pub fn dimension_score(&self, job: &Job, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::Salary => self.salary_score(job),
            Dimension::Growth => self.growth_score(job),
            Dimension::Demand => self.demand_score(job),
            Dimension::Balance => self.balance_score(job),
            Dimension::Access => self.access_score(job),
        }
    }

    /// Composite match score with its five-entry breakdown.
    pub fn calculate_match_score(&self, job: &Job) -> CompositeResult {
        let breakdown =
            Dimension::ALL.map(|dimension| DimensionScore::new(dimension, self.dimension_score(job, dimension)));

        let weighted: f64 = breakdown
            .iter()
            .map(|entry| entry.score as f64 * self.weights.get(entry.dimension))
            .sum();
        let total = weighted.round().clamp(0.0, 100.0) as u32;

        debug!("Scored '{}': total {} (weighted {:.2})", job, total, weighted);

        CompositeResult { total, breakdown }
    }

    fn with_hot_bonus(&self, base: u32, is_hot: bool) -> u32 {
        if is_hot {
            base.saturating_add(self.hot_bonus).min(100)
        } else {
            base.min(100)
        }
    }
}

static DEFAULT_SCORER: LazyLock<JobScorer> = LazyLock::new(JobScorer::new);

/// Shared scorer with the built-in tables and weights
pub fn default_scorer() -> &'static JobScorer {
    &DEFAULT_SCORER
}

/// Composite match score using the built-in tables and weights.
pub fn calculate_match_score(job: &Job) -> CompositeResult {
    default_scorer().calculate_match_score(job)
}
