//! "Best Match" badge heuristic
//!
//! A coarse bonus-based score used to flag a single top pick. It is not the
//! composite match score and the two may pick different winners.

use crate::scoring::job::Job;
use crate::scoring::salary::parse_salary_max;
use crate::scoring::sectors::is_high_growth_sector;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

const SALARY_POINTS_PER_UNIT: u64 = 2;
const SALARY_POINTS_CAP: u64 = 50;
const TRENDING_BONUS: u32 = 15;
const SECTOR_BONUS: u32 = 10;
const HIGH_SALARY_THRESHOLD: u64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reason {
    HighSalary,
    Trending,
    HighGrowthSector,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Reason::HighSalary => "High salary",
            Reason::Trending => "Trending",
            Reason::HighGrowthSector => "High-growth sector",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobScore {
    pub score: u32,
    pub reasons: Vec<Reason>,
}

/// Salary points capped at 50, plus trending and sector bonuses.
pub fn calculate_job_score(job: &Job) -> JobScore {
    let salary_max = parse_salary_max(&job.salary);
    let mut score = salary_max
        .saturating_mul(SALARY_POINTS_PER_UNIT)
        .min(SALARY_POINTS_CAP) as u32;
    let mut reasons = Vec::new();

    if salary_max >= HIGH_SALARY_THRESHOLD {
        reasons.push(Reason::HighSalary);
    }
    if job.is_hot {
        score += TRENDING_BONUS;
        reasons.push(Reason::Trending);
    }
    if is_high_growth_sector(&job.sector) {
        score += SECTOR_BONUS;
        reasons.push(Reason::HighGrowthSector);
    }

    JobScore { score, reasons }
}

/// Index of the job with the strictly highest heuristic score; the first wins ties.
///
/// Returns `None` when fewer than two jobs are compared.
pub fn best_match_index(jobs: &[Job]) -> Option<usize> {
    if jobs.len() < 2 {
        return None;
    }

    let mut best_index = 0;
    let mut best_score = calculate_job_score(&jobs[0]).score;
    for (index, job) in jobs.iter().enumerate().skip(1) {
        let score = calculate_job_score(job).score;
        if score > best_score {
            best_index = index;
            best_score = score;
        }
    }

    debug!("Best match: job #{} with heuristic score {}", best_index, best_score);
    Some(best_index)
}
