//! Job list loading for the supported file types

use crate::error::{JobCompareError, Result};
use crate::input::file_detector::FileType;
use crate::scoring::job::Job;
use log::info;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// `{ "jobs": [...] }` / `[[jobs]]` document shape
#[derive(Debug, Deserialize)]
struct JobDocument {
    jobs: Vec<Job>,
}

/// A bare JSON array or a document with a `jobs` list
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonJobs {
    List(Vec<Job>),
    Document(JobDocument),
}

pub struct JobLoader {
    cache: HashMap<String, Vec<Job>>,
    enable_cache: bool,
}

impl Default for JobLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl JobLoader {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub fn load(&mut self, path: &Path) -> Result<Vec<Job>> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                info!("Using cached jobs for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(JobCompareError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.detect_file_type(path)?;
        let jobs = match file_type {
            FileType::Json => {
                info!("Reading JSON job list: {}", path.display());
                Self::parse_json(&std::fs::read_to_string(path)?)?
            }
            FileType::Toml => {
                info!("Reading TOML job list: {}", path.display());
                Self::parse_toml(&std::fs::read_to_string(path)?)?
            }
            FileType::Unknown => {
                return Err(JobCompareError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        info!("Loaded {} jobs from {}", jobs.len(), path.display());

        if self.enable_cache {
            self.cache.insert(path_str, jobs.clone());
        }

        Ok(jobs)
    }

    pub fn parse_json(content: &str) -> Result<Vec<Job>> {
        let jobs = match serde_json::from_str::<JsonJobs>(content)? {
            JsonJobs::List(jobs) => jobs,
            JsonJobs::Document(document) => document.jobs,
        };
        Ok(jobs)
    }

    pub fn parse_toml(content: &str) -> Result<Vec<Job>> {
        let document: JobDocument = toml::from_str(content)?;
        Ok(document.jobs)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                JobCompareError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
