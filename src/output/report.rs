//! Comparison report structures consumed by the formatters

use crate::scoring::best_match::{best_match_index, calculate_job_score, JobScore};
use crate::scoring::composite::{CompositeResult, JobScorer, Weights};
use crate::scoring::job::Job;
use crate::scoring::ranker::RankedJob;
use crate::scoring::salary::parse_salary_max;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything a renderer needs to draw a side-by-side job comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Jobs in input order with both scores
    pub cards: Vec<JobCard>,

    /// Ranked by composite score; absent with fewer than two jobs
    pub leaderboard: Option<Vec<RankedJob>>,

    /// Badge pick from the bonus heuristic; absent with fewer than two jobs
    pub best_match: Option<BestMatch>,

    pub summary: ComparisonSummary,

    pub weights: Weights,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCard {
    pub index: usize,
    pub job: Job,
    pub salary_max: u64,
    pub match_data: CompositeResult,
    pub job_score: JobScore,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestMatch {
    pub index: usize,
    pub title: String,
    pub company: String,
    pub job_score: JobScore,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub job_count: usize,
    pub hot_job_count: usize,
    pub average_total: f64,
    /// Input index of the job with the largest salary figure
    pub highest_salary_index: Option<usize>,
    /// Input index of the leaderboard leader
    pub top_ranked_index: Option<usize>,
    /// Heuristic and leaderboard chose different jobs
    pub picks_diverge: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub tool_version: String,
    pub source_file: Option<String>,
}

impl ComparisonReport {
    pub fn build(jobs: &[Job], scorer: &JobScorer) -> Self {
        let cards: Vec<JobCard> = jobs
            .iter()
            .enumerate()
            .map(|(index, job)| JobCard {
                index,
                job: job.clone(),
                salary_max: parse_salary_max(&job.salary),
                match_data: scorer.calculate_match_score(job),
                job_score: calculate_job_score(job),
            })
            .collect();

        let leaderboard = scorer.rank_jobs(jobs);

        let best_match = best_match_index(jobs).map(|index| BestMatch {
            index,
            title: jobs[index].title.clone(),
            company: jobs[index].company.clone(),
            job_score: cards[index].job_score.clone(),
        });

        let summary = Self::summarize(&cards, leaderboard.as_deref(), best_match.as_ref());

        Self {
            cards,
            leaderboard,
            best_match,
            summary,
            weights: *scorer.weights(),
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
                source_file: None,
            },
        }
    }

    pub fn with_source_file(mut self, source: impl Into<String>) -> Self {
        self.metadata.source_file = Some(source.into());
        self
    }

    fn summarize(
        cards: &[JobCard],
        leaderboard: Option<&[RankedJob]>,
        best_match: Option<&BestMatch>,
    ) -> ComparisonSummary {
        let job_count = cards.len();
        let hot_job_count = cards.iter().filter(|card| card.job.is_hot).count();

        let average_total = if cards.is_empty() {
            0.0
        } else {
            cards.iter().map(|card| card.match_data.total as f64).sum::<f64>() / job_count as f64
        };

        // First job wins equal salaries
        let highest_salary_index = cards
            .iter()
            .fold(None::<&JobCard>, |best, card| match best {
                Some(current) if current.salary_max >= card.salary_max => Some(current),
                _ => Some(card),
            })
            .map(|card| card.index);

        let top_ranked_index = leaderboard.and_then(|ranked| ranked.first()).map(|leader| leader.index);
        let picks_diverge = match (best_match, top_ranked_index) {
            (Some(best), Some(top)) => best.index != top,
            _ => false,
        };

        ComparisonSummary {
            job_count,
            hot_job_count,
            average_total,
            highest_salary_index,
            top_ranked_index,
            picks_diverge,
        }
    }

    pub fn card(&self, index: usize) -> Option<&JobCard> {
        self.cards.get(index)
    }
}
