//! Leaderboard ranking by composite match score

use crate::scoring::composite::{default_scorer, CompositeResult, JobScorer};
use crate::scoring::job::Job;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchLabel {
    Excellent,
    Great,
    Good,
    Fair,
}

impl MatchLabel {
    /// Inclusive lower bounds, checked top-down
    pub fn from_total(total: u32) -> Self {
        match total {
            85.. => MatchLabel::Excellent,
            70.. => MatchLabel::Great,
            55.. => MatchLabel::Good,
            _ => MatchLabel::Fair,
        }
    }
}

impl fmt::Display for MatchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MatchLabel::Excellent => "Excellent Match",
            MatchLabel::Great => "Great Match",
            MatchLabel::Good => "Good Match",
            MatchLabel::Fair => "Fair Match",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedJob {
    pub job: Job,
    pub match_data: CompositeResult,
    /// 1-based position on the leaderboard
    pub rank: usize,
    pub label: MatchLabel,
    /// Position in the caller's input list
    pub index: usize,
}

impl JobScorer {
    /// Rank jobs by composite total, highest first. Equal totals keep input order.
    ///
    /// Returns `None` when fewer than two jobs are compared.
    pub fn rank_jobs(&self, jobs: &[Job]) -> Option<Vec<RankedJob>> {
        if jobs.len() < 2 {
            return None;
        }

        let mut scored: Vec<(usize, CompositeResult)> = jobs
            .iter()
            .enumerate()
            .map(|(index, job)| (index, self.calculate_match_score(job)))
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.1.total.cmp(&a.1.total));

        let ranked: Vec<RankedJob> = scored
            .into_iter()
            .enumerate()
            .map(|(position, (index, match_data))| RankedJob {
                job: jobs[index].clone(),
                label: MatchLabel::from_total(match_data.total),
                match_data,
                rank: position + 1,
                index,
            })
            .collect();

        debug!(
            "Ranked {} jobs, leader '{}' with {}",
            ranked.len(),
            ranked[0].job,
            ranked[0].match_data.total
        );
        Some(ranked)
    }
}

/// Rank jobs with the built-in tables and weights.
pub fn rank_jobs(jobs: &[Job]) -> Option<Vec<RankedJob>> {
    default_scorer().rank_jobs(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_81() -> Job {
        Job::new("Job 1", "Co")
            .with_salary("₹20 LPA")
            .with_sector("tech")
            .with_requirement("B.Tech")
    }

    fn job_55() -> Job {
        // 36*.25 + 55*.25 + 65*.20 + 75*.15 + 50*.15 = 54.5 -> 55
        Job::new("Job 2", "Co")
            .with_salary("₹9 LPA")
            .with_sector("manufacturing")
            .with_requirement("MBA")
    }

    fn job_90() -> Job {
        // 100*.25 + 100*.25 + 100*.20 + 60*.15 + 70*.15 = 89.5 -> 90
        Job::new("Job 3", "Co")
            .with_salary("₹30 LPA")
            .with_sector("tech")
            .with_requirement("B.Tech")
            .hot(true)
    }

    #[test]
    fn test_fixture_totals() {
        assert_eq!(default_scorer().calculate_match_score(&job_81()).total, 81);
        assert_eq!(default_scorer().calculate_match_score(&job_55()).total, 55);
        assert_eq!(default_scorer().calculate_match_score(&job_90()).total, 90);
    }

    #[test]
    fn test_rank_order_and_labels() {
        let ranked = rank_jobs(&[job_81(), job_55(), job_90()]).unwrap();

        let titles: Vec<&str> = ranked.iter().map(|r| r.job.title.as_str()).collect();
        assert_eq!(titles, vec!["Job 3", "Job 1", "Job 2"]);

        let ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);

        let labels: Vec<MatchLabel> = ranked.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec![MatchLabel::Excellent, MatchLabel::Great, MatchLabel::Good]);

        let indices: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![2, 0, 1]);
    }

    #[test]
    fn test_ties_preserve_input_order() {
        let jobs = vec![
            Job::new("First", "Co").with_sector("gaming"),
            Job::new("Second", "Co").with_sector("gaming"),
            Job::new("Third", "Co").with_sector("gaming"),
        ];
        let ranked = rank_jobs(&jobs).unwrap();
        let titles: Vec<&str> = ranked.iter().map(|r| r.job.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_requires_two_jobs() {
        assert!(rank_jobs(&[]).is_none());
        assert!(rank_jobs(&[job_81()]).is_none());
    }

    #[test]
    fn test_label_thresholds() {
        assert_eq!(MatchLabel::from_total(100), MatchLabel::Excellent);
        assert_eq!(MatchLabel::from_total(85), MatchLabel::Excellent);
        assert_eq!(MatchLabel::from_total(84), MatchLabel::Great);
        assert_eq!(MatchLabel::from_total(70), MatchLabel::Great);
        assert_eq!(MatchLabel::from_total(69), MatchLabel::Good);
        assert_eq!(MatchLabel::from_total(55), MatchLabel::Good);
        assert_eq!(MatchLabel::from_total(54), MatchLabel::Fair);
        assert_eq!(MatchLabel::from_total(0), MatchLabel::Fair);
        assert_eq!(MatchLabel::Great.to_string(), "Great Match");
    }
}
