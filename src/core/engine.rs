use crate::core::rows;
use crate::domain::model::{ImportJob, JobReport};
use crate::domain::ports::RecordTransport;
use crate::utils::error::{ImportError, Result};
use crate::core::importer::ImportPipeline;
use std::sync::atomic::{AtomicBool, Ordering};

/// Inbound boundary for one import run: validates the submitted inputs,
/// parses the file content, and hands the resulting job to the pipeline.
///
/// The busy flag is observable for the whole duration of a submission and
/// drops back to false once a report is produced or a terminal error
/// occurs.
pub struct ImportEngine<T: RecordTransport> {
    pipeline: ImportPipeline<T>,
    busy: AtomicBool,
}

impl<T: RecordTransport> ImportEngine<T> {
    pub fn new(transport: T) -> Self {
        Self {
            pipeline: ImportPipeline::new(transport),
            busy: AtomicBool::new(false),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Submits one import: collection name, credential, raw file content.
    ///
    /// Fails before any request is sent when an input is missing
    /// (`MissingJobField`), the content is not well-formed CSV (`Csv`), or
    /// the file parses but holds no data rows (`EmptyInput`).
    pub async fn submit(
        &self,
        collection: &str,
        credential: &str,
        content: &[u8],
    ) -> Result<JobReport> {
        self.busy.store(true, Ordering::SeqCst);
        let result = self.submit_inner(collection, credential, content).await;
        self.busy.store(false, Ordering::SeqCst);
        result
    }

    async fn submit_inner(
        &self,
        collection: &str,
        credential: &str,
        content: &[u8],
    ) -> Result<JobReport> {
        if collection.trim().is_empty() {
            return Err(ImportError::missing_field("collection"));
        }
        if credential.trim().is_empty() {
            return Err(ImportError::missing_field("credential"));
        }

        let records = rows::parse(content)?;
        if records.is_empty() {
            return Err(ImportError::EmptyInput);
        }

        tracing::info!(
            "importing {} records into collection '{}'",
            records.len(),
            collection
        );

        let job = ImportJob {
            collection: collection.to_string(),
            credential: credential.to_string(),
            records,
        };
        self.pipeline.run(&job).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Record;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;
    use tokio::sync::Notify;

    struct CountingTransport {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RecordTransport for CountingTransport {
        async fn create(&self, _: &str, _: &str, _: &Record) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct GatedTransport {
        release: Arc<Notify>,
    }

    #[async_trait]
    impl RecordTransport for GatedTransport {
        async fn create(&self, _: &str, _: &str, _: &Record) -> Result<()> {
            self.release.notified().await;
            Ok(())
        }
    }

    fn engine() -> ImportEngine<CountingTransport> {
        ImportEngine::new(CountingTransport {
            calls: AtomicUsize::new(0),
        })
    }

    #[tokio::test]
    async fn test_submit_runs_full_pipeline() {
        let engine = engine();
        let report = engine
            .submit("articles", "tok123", b"title\nHello\nWorld\n")
            .await
            .unwrap();

        assert_eq!(report.attempted, 2);
        assert!(report.all_created());
        assert_eq!(engine.pipeline.transport().calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_submit_header_only_is_empty_input_not_parse_error() {
        let engine = engine();
        let err = engine.submit("articles", "tok123", b"a,b\n").await.unwrap_err();

        assert!(matches!(err, ImportError::EmptyInput));
        assert_eq!(engine.pipeline.transport().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_submit_malformed_content_is_parse_error() {
        let engine = engine();
        let err = engine
            .submit("articles", "tok123", b"a,b\n1,2,3\n")
            .await
            .unwrap_err();

        assert!(matches!(err, ImportError::Csv(_)));
        assert_eq!(engine.pipeline.transport().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_submit_missing_inputs_send_nothing() {
        let engine = engine();

        let err = engine.submit("", "tok123", b"a\n1\n").await.unwrap_err();
        assert!(matches!(err, ImportError::MissingJobField { ref field } if field == "collection"));

        let err = engine.submit("articles", "", b"a\n1\n").await.unwrap_err();
        assert!(matches!(err, ImportError::MissingJobField { ref field } if field == "credential"));

        assert_eq!(engine.pipeline.transport().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_busy_flag_covers_the_whole_run() {
        let release = Arc::new(Notify::new());
        let engine = Arc::new(ImportEngine::new(GatedTransport {
            release: release.clone(),
        }));

        assert!(!engine.is_busy());

        let handle = {
            let engine = engine.clone();
            tokio::spawn(async move { engine.submit("articles", "tok123", b"a\n1\n").await })
        };

        // Wait for the submission to reach the in-flight create call.
        tokio::task::yield_now().await;
        while !engine.is_busy() {
            tokio::task::yield_now().await;
        }

        release.notify_one();
        let report = handle.await.unwrap().unwrap();
        assert_eq!(report.attempted, 1);
        assert!(!engine.is_busy());
    }

    #[tokio::test]
    async fn test_busy_flag_resets_on_terminal_error() {
        let engine = engine();
        let _ = engine.submit("articles", "tok123", b"a,b\n").await;
        assert!(!engine.is_busy());
    }
}
