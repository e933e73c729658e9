//! The five scoring dimensions and their per-job scorers

use crate::scoring::composite::default_scorer;
use crate::scoring::job::Job;
use crate::scoring::salary::parse_salary_max;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Points per salary unit in the salary dimension
const SALARY_MULTIPLIER: u64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Salary,
    Growth,
    Demand,
    Balance,
    Access,
}

impl Dimension {
    /// Breakdown order
    pub const ALL: [Dimension; 5] = [
        Dimension::Salary,
        Dimension::Growth,
        Dimension::Demand,
        Dimension::Balance,
        Dimension::Access,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Salary => "Salary",
            Dimension::Growth => "Growth",
            Dimension::Demand => "Demand",
            Dimension::Balance => "Balance",
            Dimension::Access => "Access",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Dimension::Salary => "💰",
            Dimension::Growth => "📈",
            Dimension::Demand => "🔥",
            Dimension::Balance => "⚖️",
            Dimension::Access => "🎓",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Dimension::Salary => "#10b981",
            Dimension::Growth => "#3b82f6",
            Dimension::Demand => "#f59e0b",
            Dimension::Balance => "#8b5cf6",
            Dimension::Access => "#ec4899",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One dimension's 0-100 score plus its display tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    pub label: String,
    pub score: u32,
    pub icon: String,
    pub color: String,
}

impl DimensionScore {
    pub fn new(dimension: Dimension, score: u32) -> Self {
        Self {
            dimension,
            label: dimension.label().to_string(),
            score: score.min(100),
            icon: dimension.icon().to_string(),
            color: dimension.color().to_string(),
        }
    }
}

/// A requirement-text rule: any needle present in the lowercased text gives `score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessRule {
    pub needles: &'static [&'static str],
    pub score: u32,
}

impl AccessRule {
    pub fn matches(&self, requirement_lower: &str) -> bool {
        self.needles.iter().any(|needle| requirement_lower.contains(needle))
    }
}

/// Evaluated in order; the first matching rule decides the access score.
pub const ACCESS_RULES: &[AccessRule] = &[
    AccessRule { needles: &["12th", "diploma"], score: 90 },
    AccessRule { needles: &["bca", "b.tech", "b.e"], score: 70 },
    AccessRule { needles: &["m.tech", "mba", "m.sc"], score: 50 },
    AccessRule { needles: &["phd"], score: 30 },
];

pub const DEFAULT_ACCESS_SCORE: u32 = 60;

/// Accessibility from educational prerequisites. Lower barriers score higher.
pub fn access_score_for(requirement: &str) -> u32 {
    let requirement = requirement.to_lowercase();
    ACCESS_RULES
        .iter()
        .find(|rule| rule.matches(&requirement))
        .map(|rule| rule.score)
        .unwrap_or(DEFAULT_ACCESS_SCORE)
}

pub fn salary_score_for(salary: &str) -> u32 {
    parse_salary_max(salary)
        .saturating_mul(SALARY_MULTIPLIER)
        .min(100) as u32
}

pub fn salary_score(job: &Job) -> u32 {
    salary_score_for(&job.salary)
}

pub fn growth_score(job: &Job) -> u32 {
    default_scorer().growth_score(job)
}

pub fn demand_score(job: &Job) -> u32 {
    default_scorer().demand_score(job)
}

pub fn balance_score(job: &Job) -> u32 {
    default_scorer().balance_score(job)
}

pub fn access_score(job: &Job) -> u32 {
    access_score_for(&job.requirement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::sectors::GROWTH_SCORES;

    fn job(sector: &str, hot: bool) -> Job {
        Job::new("Role", "Co").with_sector(sector).hot(hot)
    }

    #[test]
    fn test_salary_score_scale() {
        assert_eq!(salary_score_for(""), 0);
        assert_eq!(salary_score_for("₹8-12 LPA"), 48);
        assert_eq!(salary_score_for("₹20 LPA"), 80);
        assert_eq!(salary_score_for("₹25 LPA"), 100);
        assert_eq!(salary_score_for("₹40-60 LPA"), 100);
        assert_eq!(salary_score_for("18446744073709551615"), 100);
    }

    #[test]
    fn test_growth_and_demand_hot_bonus() {
        assert_eq!(growth_score(&job("gaming", false)), 65);
        assert_eq!(growth_score(&job("gaming", true)), 80);
        assert_eq!(growth_score(&job("tech", true)), 100);

        assert_eq!(demand_score(&job("agritech", false)), 55);
        assert_eq!(demand_score(&job("agritech", true)), 70);
        assert_eq!(demand_score(&job("tech", true)), 100);
    }

    #[test]
    fn test_balance_ignores_hot_flag() {
        assert_eq!(balance_score(&job("logistics", false)), 50);
        assert_eq!(balance_score(&job("logistics", true)), 50);
    }

    #[test]
    fn test_unknown_sector_defaults() {
        assert_eq!(growth_score(&job("spacetech", false)), 60);
        assert_eq!(demand_score(&job("spacetech", false)), 60);
        assert_eq!(balance_score(&job("spacetech", false)), 60);
        assert_eq!(growth_score(&job("spacetech", true)), 75);
    }

    #[test]
    fn test_access_rules() {
        assert_eq!(access_score_for("12th Pass"), 90);
        assert_eq!(access_score_for("Diploma holder"), 90);
        assert_eq!(access_score_for("B.Tech CSE"), 70);
        assert_eq!(access_score_for("BCA / MCA"), 70);
        assert_eq!(access_score_for("B.E. Mechanical"), 70);
        assert_eq!(access_score_for("M.Tech"), 50);
        assert_eq!(access_score_for("MBA Finance"), 50);
        assert_eq!(access_score_for("M.Sc Chemistry"), 50);
        assert_eq!(access_score_for("PhD required"), 30);
        assert_eq!(access_score_for("Any graduate"), DEFAULT_ACCESS_SCORE);
        assert_eq!(access_score_for(""), DEFAULT_ACCESS_SCORE);
    }

    #[test]
    fn test_access_rule_priority() {
        // 12th outranks b.tech when both appear
        assert_eq!(access_score_for("B.Tech or 12th with experience"), 90);
        // b.tech outranks mba
        assert_eq!(access_score_for("MBA preferred, B.Tech required"), 70);
        // mba outranks phd
        assert_eq!(access_score_for("PhD or MBA"), 50);
    }

    #[test]
    fn test_all_dimensions_in_range() {
        let mut sectors: Vec<&str> = GROWTH_SCORES.iter().map(|(s, _)| *s).collect();
        sectors.push("unknown-sector");

        for sector in sectors {
            for hot in [false, true] {
                let j = job(sector, hot).with_salary("₹99-150 LPA").with_requirement("PhD");
                for score in [
                    salary_score(&j),
                    growth_score(&j),
                    demand_score(&j),
                    balance_score(&j),
                    access_score(&j),
                ] {
                    assert!(score <= 100, "{} out of range for {}", score, sector);
                }
            }
        }
    }

    #[test]
    fn test_dimension_metadata() {
        let labels: Vec<&str> = Dimension::ALL.iter().map(|d| d.label()).collect();
        assert_eq!(labels, vec!["Salary", "Growth", "Demand", "Balance", "Access"]);
        assert_eq!(DimensionScore::new(Dimension::Growth, 140).score, 100);
    }
}
