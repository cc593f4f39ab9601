use std::path::{Path, PathBuf};
use std::process::ExitCode;

use print_readiness::config::job::JobFile;
use print_readiness::config::merged::MergedConfig;
use print_readiness::config::{self};
use print_readiness::pipeline::job_runner::{JobInput, JobOutcome};
use print_readiness::pipeline::orchestrator::AnalysisPool;
use print_readiness::pipeline::task::AnalysisResponse;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        eprintln!("Usage: print_readiness <jobs.yaml>...");
        eprintln!("  Analyze files for print readiness according to job specifications.");
        eprintln!("  Prints one JSON line per job input to stdout.");
        return if args.is_empty() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        };
    }

    if args.iter().any(|a| a == "--version" || a == "-V") {
        eprintln!("print_readiness {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let mut has_error = false;

    for job_file_arg in &args {
        let job_file_path = Path::new(job_file_arg);

        // Load settings from the same directory as the job file.
        let settings = match config::load_settings_for_job(job_file_path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("ERROR: Failed to load settings for {job_file_arg}: {e}");
                return ExitCode::FAILURE;
            }
        };

        let yaml_content = match std::fs::read_to_string(job_file_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("ERROR: Failed to read job file {job_file_arg}: {e}");
                return ExitCode::FAILURE;
            }
        };

        let job_file: JobFile = match serde_yml::from_str(&yaml_content) {
            Ok(jf) => jf,
            Err(e) => {
                eprintln!("ERROR: Failed to parse job file {job_file_arg}: {e}");
                return ExitCode::FAILURE;
            }
        };

        let pool = match AnalysisPool::new(settings.parallel_workers) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("ERROR: {e}");
                return ExitCode::FAILURE;
            }
        };

        // Resolve job file directory for relative paths.
        let job_dir = job_file_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();

        let jobs: Vec<JobInput> = job_file
            .jobs
            .iter()
            .map(|job| JobInput {
                path: resolve_path(&job_dir, &job.input),
                config: MergedConfig::new(&settings, job),
            })
            .collect();

        // Intake runs inside each pool task so decoded pixels are freed per job.
        for outcome in pool.run_all_jobs(&jobs) {
            report(&outcome);
            if !outcome.response.is_success() {
                has_error = true;
            }
        }
    }

    if has_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Print the JSON line to stdout and a one-line summary to stderr.
fn report(outcome: &JobOutcome) {
    let input = &outcome.input;
    let line = serde_json::json!({
        "input": input.display().to_string(),
        "fingerprint": outcome.fingerprint,
        "response": outcome.response,
    });
    println!("{line}");

    match &outcome.response {
        AnalysisResponse::Success(results) => {
            let readiness = results.print_readiness();
            eprintln!(
                "OK: {} (score {}, {:?}, {} issues)",
                input.display(),
                readiness.score,
                readiness.rating,
                readiness.issues.len()
            );
        }
        AnalysisResponse::Failure(message) => {
            eprintln!("ERROR: {}: {message}", input.display());
        }
    }
}

/// Resolve a potentially relative path against a base directory.
/// If the path is already absolute, return it as-is.
fn resolve_path(base_dir: &Path, path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        base_dir.join(p)
    }
}
