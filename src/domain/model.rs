use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of the input file, keyed by the header line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub fields: HashMap<String, String>,
}

impl Record {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }
}

/// One user-initiated import run: a fixed record sequence against one
/// target collection, authenticated by one credential. Never persisted.
#[derive(Debug, Clone)]
pub struct ImportJob {
    pub collection: String,
    pub credential: String,
    pub records: Vec<Record>,
}

/// Result of attempting to create one record remotely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Created,
    Failed(String),
}

/// Aggregated per-row outcomes for a completed job. Outcome `i` always
/// corresponds to the i-th record of the job.
#[derive(Debug, Clone)]
pub struct JobReport {
    pub attempted: usize,
    pub outcomes: Vec<RowOutcome>,
}

impl JobReport {
    pub fn created(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RowOutcome::Created))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.attempted - self.created()
    }

    pub fn all_created(&self) -> bool {
        self.failed() == 0
    }
}
