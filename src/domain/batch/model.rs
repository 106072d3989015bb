use crate::domain::content::{ContentLayout, ContentUnit};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOutcome {
    Pending,
    Generated,
    SkippedExisting,
    Failed { code: i32 },
}

/// Exit status of one synthesis run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Success,
    Failed { code: i32 },
}

/// A content unit whose source text exists, with both resolved paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationJob {
    unit: ContentUnit,
    source_path: PathBuf,
    target_path: PathBuf,
    pub outcome: JobOutcome,
}

impl GenerationJob {
    /// Returns `None` when the unit has no source text file.
    pub async fn resolve(layout: &ContentLayout, unit: ContentUnit) -> Option<Self> {
        let source_path = layout.text_path(&unit);
        if !is_file(&source_path).await {
            return None;
        }

        Some(Self {
            target_path: layout.audio_path(&unit),
            source_path,
            unit,
            outcome: JobOutcome::Pending,
        })
    }

    pub fn unit(&self) -> &ContentUnit {
        &self.unit
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }
}

pub(crate) async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

/// One processed monument, in processing order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchEntry {
    Job(GenerationJob),
    MissingSource {
        unit: ContentUnit,
        expected_path: PathBuf,
    },
}

impl BatchEntry {
    pub fn monument(&self) -> &str {
        match self {
            BatchEntry::Job(job) => &job.unit.monument,
            BatchEntry::MissingSource { unit, .. } => &unit.monument,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub entries: Vec<BatchEntry>,
}

impl BatchSummary {
    pub fn push(&mut self, entry: BatchEntry) {
        self.entries.push(entry);
    }

    fn count_jobs(&self, outcome: JobOutcome) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, BatchEntry::Job(job) if job.outcome == outcome))
            .count()
    }

    pub fn generated(&self) -> usize {
        self.count_jobs(JobOutcome::Generated)
    }

    pub fn skipped_existing(&self) -> usize {
        self.count_jobs(JobOutcome::SkippedExisting)
    }

    pub fn missing_source(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, BatchEntry::MissingSource { .. }))
            .count()
    }

    /// Monuments in the order they were processed
    pub fn monuments(&self) -> Vec<&str> {
        self.entries.iter().map(BatchEntry::monument).collect()
    }
}
