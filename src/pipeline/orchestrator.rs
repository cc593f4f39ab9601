// Isolated, concurrent task execution on a rayon pool

use std::sync::mpsc::{self, Receiver};

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::PrintReadinessError;
use crate::pipeline::job_runner::{JobInput, JobOutcome, run_all_jobs};
use crate::pipeline::task::{AnalysisRequest, AnalysisResponse, run_task};

/// Worker pool running each request in its own task.
///
/// Requests share no mutable state; responses of concurrent tasks arrive in
/// no particular order.
pub struct AnalysisPool {
    pool: ThreadPool,
}

impl AnalysisPool {
    /// `workers == 0` lets rayon pick the thread count (one per CPU).
    pub fn new(workers: usize) -> crate::error::Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("analysis-worker-{i}"))
            .build()
            .map_err(|e| {
                PrintReadinessError::config(format!("Failed to build analysis pool: {e}"))
            })?;
        Ok(AnalysisPool { pool })
    }

    pub fn worker_count(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Submit one request; its single response arrives on the returned channel.
    ///
    /// Dropping the receiver discards the response but does not stop the task.
    pub fn spawn_task(&self, request: AnalysisRequest) -> Receiver<AnalysisResponse> {
        let (tx, rx) = mpsc::channel();
        self.pool.spawn(move || {
            let response = run_task(&request);
            if tx.send(response).is_err() {
                tracing::debug!("receiver dropped, response discarded");
            }
        });
        rx
    }

    /// Run a batch in parallel. Responses are returned in request order.
    pub fn run_all_tasks(&self, requests: &[AnalysisRequest]) -> Vec<AnalysisResponse> {
        self.pool.install(|| run_all_tasks(requests))
    }

    /// Run job inputs end to end (intake included) on this pool.
    pub fn run_all_jobs(&self, jobs: &[JobInput]) -> Vec<JobOutcome> {
        self.pool.install(|| run_all_jobs(jobs))
    }
}

/// Run multiple tasks on the current rayon pool, collecting responses.
/// One task failure does NOT prevent other tasks from running.
pub fn run_all_tasks(requests: &[AnalysisRequest]) -> Vec<AnalysisResponse> {
    requests.par_iter().map(run_task).collect()
}
