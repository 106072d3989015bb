use super::error::BatchError;
use super::model::{BatchEntry, BatchSummary, GenerationJob, JobOutcome, RunOutcome};
use super::pacing::Pacer;
use crate::domain::content::{validate_segment, ContentLayout, ContentUnit, Tenant};
use crate::infrastructure::config::BatchConfig;
use crate::infrastructure::process::SynthesisRunner;
use std::path::Path;
use std::sync::Arc;

/// Walks a tenant's text tree for one language and mode and fills in missing audio.
///
/// Monuments are processed one at a time in ascending name order. An existing
/// artifact is never regenerated, so an interrupted run can simply be started again.
/// The first failed synthesis aborts the whole batch.
pub struct BatchOrchestrator {
    tenant: Tenant,
    layout: ContentLayout,
    language: String,
    mode: String,
    runner: Arc<dyn SynthesisRunner>,
    pacer: Arc<dyn Pacer>,
}

impl BatchOrchestrator {
    pub fn new(
        config: &BatchConfig,
        runner: Arc<dyn SynthesisRunner>,
        pacer: Arc<dyn Pacer>,
    ) -> Result<Self, BatchError> {
        let tenant = Tenant::new(&config.tenants_root, &config.tenant)?;
        validate_segment("lang", &config.language)?;
        validate_segment("mode", &config.mode)?;

        Ok(Self {
            layout: ContentLayout::new(&tenant),
            tenant,
            language: config.language.clone(),
            mode: config.mode.clone(),
            runner,
            pacer,
        })
    }

    pub async fn run(&self) -> Result<BatchSummary, BatchError> {
        let text_root = self.layout.text_root(&self.language);
        let audio_root = self.layout.audio_root(&self.language);

        if !is_dir(&text_root).await {
            return Err(BatchError::Configuration(format!(
                "text folder not found: {}",
                text_root.display()
            )));
        }

        ensure_dir(&audio_root).await?;

        let monuments = list_monuments(&text_root).await?;
        tracing::info!(
            tenant = %self.tenant.id,
            language = %self.language,
            mode = %self.mode,
            monuments = monuments.len(),
            text_root = %text_root.display(),
            audio_root = %audio_root.display(),
            "Starting bulk generation"
        );

        let mut summary = BatchSummary::default();
        for monument in monuments {
            self.process_monument(&monument, &mut summary).await?;
        }

        tracing::info!(
            generated = summary.generated(),
            skipped_existing = summary.skipped_existing(),
            missing_source = summary.missing_source(),
            "Bulk generation finished"
        );

        Ok(summary)
    }

    async fn process_monument(
        &self,
        monument: &str,
        summary: &mut BatchSummary,
    ) -> Result<(), BatchError> {
        let unit = ContentUnit::new(&self.tenant, &self.language, monument, &self.mode);

        let Some(mut job) = GenerationJob::resolve(&self.layout, unit.clone()).await else {
            let expected_path = self.layout.text_path(&unit);
            tracing::warn!(
                unit = %unit,
                expected = %expected_path.display(),
                "No source text, skipping"
            );
            summary.push(BatchEntry::MissingSource {
                unit,
                expected_path,
            });
            return Ok(());
        };

        ensure_dir(&self.layout.audio_dir(job.unit())).await?;

        let target = job.target_path().to_path_buf();
        let exists = tokio::fs::try_exists(&target)
            .await
            .map_err(|e| BatchError::io(&target, e))?;
        if exists {
            tracing::info!(monument, target = %target.display(), "Skipped, audio already exists");
            job.outcome = JobOutcome::SkippedExisting;
            summary.push(BatchEntry::Job(job));
            return Ok(());
        }

        tracing::info!(
            monument,
            source = %job.source_path().display(),
            target = %target.display(),
            "Generating audio"
        );

        match self.runner.run(job.source_path(), &target).await? {
            RunOutcome::Success => {
                job.outcome = JobOutcome::Generated;
                summary.push(BatchEntry::Job(job.clone()));
                self.pacer.pause(&job).await?;
                Ok(())
            }
            RunOutcome::Failed { code } => {
                tracing::error!(unit = %job.unit(), code, "Generation failed, aborting batch");
                job.outcome = JobOutcome::Failed { code };
                summary.push(BatchEntry::Job(job));
                Err(BatchError::SynthesisFailed {
                    monument: monument.to_string(),
                    code,
                    generated: summary.generated(),
                })
            }
        }
    }
}

/// Immediate subdirectories of `text_root`, sorted ascending
async fn list_monuments(text_root: &Path) -> Result<Vec<String>, BatchError> {
    let mut entries = tokio::fs::read_dir(text_root)
        .await
        .map_err(|e| BatchError::io(text_root, e))?;

    let mut monuments = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| BatchError::io(text_root, e))?
    {
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| BatchError::io(entry.path(), e))?;
        if !file_type.is_dir() {
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) => monuments.push(name),
            Err(name) => {
                tracing::warn!(name = ?name, "Skipping monument folder with non UTF-8 name")
            }
        }
    }

    monuments.sort();
    Ok(monuments)
}

async fn ensure_dir(path: &Path) -> Result<(), BatchError> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|e| BatchError::io(path, e))
}

async fn is_dir(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
}
