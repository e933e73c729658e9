//! Job comparison library: scoring, ranking and best-match selection for job listings

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod scoring;
pub mod output;

pub use error::{Result, JobCompareError};
pub use config::Config;
pub use scoring::{
    best_match_index, calculate_job_score, calculate_match_score, parse_salary_max, rank_jobs,
    CompositeResult, Job, JobScorer, RankedJob,
};
