// runner.rs
use crate::db::store::ListingStore;
use crate::domain::Listing;
use crate::errors::EngineError;
use crate::synthesis::compose;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Knobs for one generation run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub workers: usize,
    pub progress_every: usize,
    pub sample_count: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            workers: 1,
            progress_every: 25,
            sample_count: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub name: String,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WriteFailure {
    pub id: String,
    pub error: String,
}

#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub total: usize,
    pub updated: usize,
    pub failed: usize,
    pub failures: Vec<WriteFailure>,
    pub samples: Vec<Sample>,
}

impl GenerationReport {
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Regenerate `generated_description` for every listing in the store.
///
/// Only the initial fetch can fail the run. A failed write is logged and
/// counted and the remaining listings are still processed; it is not retried
/// within the run, so rerunning the batch is the recovery path.
pub fn run_generation<S>(store: &S, opts: &RunOptions) -> Result<GenerationReport, EngineError>
where
    S: ListingStore + ?Sized,
{
    let started_at = Utc::now();
    let listings = store.fetch_listings()?;
    let total = listings.len();
    tracing::info!(total, workers = opts.workers, "generating descriptions");

    let workers = opts.workers.max(1).min(total.max(1));
    let progress_every = opts.progress_every.max(1);
    let chunk_size = total.div_ceil(workers).max(1);

    let processed = AtomicUsize::new(0);
    let updated = AtomicUsize::new(0);
    let failures = Mutex::new(Vec::new());

    let process = |listing: &Listing| {
        let description = compose(listing);

        match store.update_generated_description(&listing.id, &description) {
            Ok(()) => {
                updated.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                tracing::warn!(id = %listing.id, slug = %listing.slug, error = %e, "failed to store description");
                failures
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .push(WriteFailure {
                        id: listing.id.clone(),
                        error: e.to_string(),
                    });
            }
        }

        let done = processed.fetch_add(1, Ordering::Relaxed) + 1;
        if done % progress_every == 0 {
            tracing::info!(done, total, "progress");
        }
    };

    if workers == 1 {
        listings.iter().for_each(process);
    } else {
        std::thread::scope(|scope| {
            for chunk in listings.chunks(chunk_size) {
                let process = &process;
                scope.spawn(move || chunk.iter().for_each(process));
            }
        });
    }

    let mut failures = failures.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner());
    failures.sort_by(|a, b| a.id.cmp(&b.id));

    let samples = listings
        .iter()
        .take(opts.sample_count)
        .map(|l| Sample {
            name: l.name.clone(),
            category: l.category.slug().to_string(),
            description: compose(l),
        })
        .collect();

    let report = GenerationReport {
        started_at,
        finished_at: Utc::now(),
        total,
        updated: updated.into_inner(),
        failed: failures.len(),
        failures,
        samples,
    };

    tracing::info!(
        total = report.total,
        updated = report.updated,
        failed = report.failed,
        elapsed_ms = (report.finished_at - report.started_at).num_milliseconds(),
        "generation complete"
    );

    Ok(report)
}
