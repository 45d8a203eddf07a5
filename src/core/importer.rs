use crate::domain::model::{ImportJob, JobReport, RowOutcome};
use crate::domain::ports::RecordTransport;
use crate::utils::error::{ImportError, Result};

/// Drives one remote create request per record, in input order, and
/// aggregates the per-row outcomes.
pub struct ImportPipeline<T: RecordTransport> {
    transport: T,
}

impl<T: RecordTransport> ImportPipeline<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// Runs one import job to completion.
    ///
    /// Preconditions are checked before any network activity: a violation
    /// returns `MissingJobField` and zero requests are sent. Uploads are
    /// strictly sequential; a failed row is recorded and the loop moves on,
    /// so outcome `i` always matches record `i` and a single bad row never
    /// blocks the rest of the import. Per-row failures are not job
    /// failures: the job completes once every record has been attempted.
    pub async fn run(&self, job: &ImportJob) -> Result<JobReport> {
        Self::validate(job)?;

        let mut outcomes = Vec::with_capacity(job.records.len());

        for (index, record) in job.records.iter().enumerate() {
            match self
                .transport
                .create(&job.collection, &job.credential, record)
                .await
            {
                Ok(()) => {
                    tracing::debug!("row {}: created in '{}'", index + 1, job.collection);
                    outcomes.push(RowOutcome::Created);
                }
                Err(e) => {
                    tracing::warn!("row {}: create failed: {}", index + 1, e);
                    outcomes.push(RowOutcome::Failed(e.to_string()));
                }
            }
        }

        Ok(JobReport {
            attempted: job.records.len(),
            outcomes,
        })
    }

    fn validate(job: &ImportJob) -> Result<()> {
        if job.collection.trim().is_empty() {
            return Err(ImportError::missing_field("collection"));
        }
        if job.credential.trim().is_empty() {
            return Err(ImportError::missing_field("credential"));
        }
        if job.records.is_empty() {
            return Err(ImportError::missing_field("records"));
        }
        Ok(())
    }
}
