//! Job scoring and ranking engine

pub mod job;
pub mod salary;
pub mod sectors;
pub mod dimensions;
pub mod composite;
pub mod best_match;
pub mod ranker;

pub use best_match::{best_match_index, calculate_job_score, JobScore, Reason};
pub use composite::{calculate_match_score, CompositeResult, JobScorer, Weights};
pub use dimensions::{Dimension, DimensionScore};
pub use job::Job;
pub use ranker::{rank_jobs, MatchLabel, RankedJob};
pub use salary::parse_salary_max;
