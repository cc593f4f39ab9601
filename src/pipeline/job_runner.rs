// Per-input job: intake, analysis, then release of the decoded pixels

use std::path::PathBuf;

use rayon::prelude::*;
use tracing::warn;

use crate::config::merged::MergedConfig;
use crate::intake::build_request;
use crate::pipeline::task::{AnalysisResponse, run_fingerprinted_task};

/// One file from a job file together with its merged configuration.
#[derive(Debug, Clone)]
pub struct JobInput {
    pub path: PathBuf,
    pub config: MergedConfig,
}

/// Result of a job. `fingerprint` is `None` when intake failed before a
/// request existed.
#[derive(Debug, Clone, PartialEq)]
pub struct JobOutcome {
    pub input: PathBuf,
    pub fingerprint: Option<String>,
    pub response: AnalysisResponse,
}

/// Build the request, analyze it and drop it before returning.
///
/// The decoded pixel buffer lives only for the duration of this call, so a
/// pool of N workers holds at most N buffers at a time.
pub fn run_job(job: &JobInput) -> JobOutcome {
    let request = match build_request(&job.path, &job.config) {
        Ok(request) => request,
        Err(e) => {
            warn!(path = %job.path.display(), error = %e, "intake failed");
            return JobOutcome {
                input: job.path.clone(),
                fingerprint: None,
                response: AnalysisResponse::Failure(e.to_string()),
            };
        }
    };

    let fingerprint = request.fingerprint();
    let response = run_fingerprinted_task(&request, &fingerprint);
    drop(request);

    JobOutcome {
        input: job.path.clone(),
        fingerprint: Some(fingerprint),
        response,
    }
}

/// Run every job on the current rayon pool. Outcomes keep input order.
pub fn run_all_jobs(jobs: &[JobInput]) -> Vec<JobOutcome> {
    jobs.par_iter().map(run_job).collect()
}
