//! Status tracking for render jobs.
//!
//! The parsing and narration stages are stateless. A [`JobStore`] belongs to
//! whatever drives a render and records where each job is in the pipeline.

use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    sync::{
        Mutex, MutexGuard,
        atomic::{AtomicU64, Ordering},
    },
};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a job, unique within one [`JobStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(u64);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "job-{}", self.0)
    }
}

/// Pipeline stage of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Processing,
    Parsing,
    Generating,
    GeneratingAudio,
    Optimizing,
    Completed,
    Failed,
}

impl JobStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Processing => "processing",
            JobStatus::Parsing => "parsing",
            JobStatus::Generating => "generating",
            JobStatus::GeneratingAudio => "generating_audio",
            JobStatus::Optimizing => "optimizing",
            JobStatus::Completed => "completed",
            JobStatus::Failed => "failed",
        }
    }

    /// Returns `true` for statuses a job never leaves.
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JobError {
    #[error("{0} does not exist")]
    NotFound(JobId),

    #[error("{id} already finished as {status}")]
    Finished { id: JobId, status: JobStatus },
}

/// Thread-safe map from job id to status.
#[derive(Debug, Default)]
pub struct JobStore {
    next_id: AtomicU64,
    jobs: Mutex<HashMap<JobId, JobStatus>>,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new job in the `processing` state.
    pub fn create(&self) -> JobId {
        let id = JobId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock().insert(id, JobStatus::Processing);
        debug!(job:% = id; "Job created");
        id
    }

    pub fn status(&self, id: JobId) -> Option<JobStatus> {
        self.lock().get(&id).copied()
    }

    /// Moves a job to `status`.
    ///
    /// # Errors
    ///
    /// Fails if the job does not exist or has already reached a terminal
    /// status.
    pub fn update(&self, id: JobId, status: JobStatus) -> Result<(), JobError> {
        let mut jobs = self.lock();
        let current = jobs.get_mut(&id).ok_or(JobError::NotFound(id))?;
        if current.is_terminal() {
            return Err(JobError::Finished {
                id,
                status: *current,
            });
        }

        debug!(job:% = id, from:% = *current, to:% = status; "Job status changed");
        *current = status;
        Ok(())
    }

    /// Drops a job, returning its last status.
    pub fn remove(&self, id: JobId) -> Option<JobStatus> {
        let removed = self.lock().remove(&id);
        if let Some(status) = removed {
            debug!(job:% = id, status:%; "Job removed");
        }
        removed
    }

    /// Drops every completed or failed job and returns how many were dropped.
    pub fn prune_finished(&self) -> usize {
        let mut jobs = self.lock();
        let before = jobs.len();
        jobs.retain(|_, status| !status.is_terminal());
        let pruned = before - jobs.len();
        debug!(pruned; "Finished jobs pruned");
        pruned
    }

    /// Number of jobs per status.
    pub fn counts(&self) -> BTreeMap<JobStatus, usize> {
        let mut counts = BTreeMap::new();
        for status in self.lock().values() {
            *counts.entry(*status).or_insert(0) += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Statuses are plain values, so a poisoned lock still holds a usable map.
    fn lock(&self) -> MutexGuard<'_, HashMap<JobId, JobStatus>> {
        self.jobs
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
