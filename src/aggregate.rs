use crate::count::count_repository;
use crate::error::{OrglocError, Result};
use crate::model::{Diagnostics, LineTable, RepoCounts};
use indicatif::ProgressBar;
use rayon::ThreadPoolBuilder;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::mpsc;
use tracing::warn;

/// Global accumulators. Only ever written by the orchestrating thread.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Totals {
    pub languages: LineTable,
    pub unclassified: LineTable,
    pub repositories_counted: usize,
    pub repositories_failed: usize,
    pub unparsed_lines: u64,
}

impl Totals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge(&mut self, counts: RepoCounts) {
        for (language, lines) in counts.languages {
            *self.languages.entry(language).or_insert(0) += lines;
        }
        for (ext, lines) in counts.unclassified {
            *self.unclassified.entry(ext).or_insert(0) += lines;
        }
        self.unparsed_lines += counts.unparsed_lines;
        self.repositories_counted += 1;
    }

    pub fn record_failure(&mut self) {
        self.repositories_failed += 1;
    }

    pub fn total_lines(&self) -> u64 {
        self.languages.values().sum()
    }

    pub fn diagnostics(&self) -> Diagnostics {
        Diagnostics {
            repositories_counted: self.repositories_counted,
            repositories_failed: self.repositories_failed,
            unparsed_lines: self.unparsed_lines,
        }
    }
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Run `task` on a dedicated pool of `workers` threads, once per mirror path,
/// merging results on the calling thread in completion order.
///
/// A task that fails or panics is logged and counted as a failure; it never
/// aborts the run.
pub fn analyze_with<F>(
    mirrors: Vec<(String, PathBuf)>,
    workers: usize,
    progress: &ProgressBar,
    task: F,
) -> Result<Totals>
where
    F: Fn(&std::path::Path) -> Result<RepoCounts> + Send + Sync + Copy + 'static,
{
    let pool = ThreadPoolBuilder::new()
        .num_threads(workers.max(1))
        .thread_name(|i| format!("orgloc-count-{i}"))
        .build()?;

    let (tx, rx) = mpsc::channel::<(String, Result<RepoCounts>)>();
    for (name, path) in mirrors {
        let tx = tx.clone();
        pool.spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| task(&path)))
                .unwrap_or_else(|payload| Err(OrglocError::TaskPanic(panic_message(payload))));
            // The receiver outlives every sender, so a send error cannot happen.
            let _ = tx.send((name, result));
        });
    }
    drop(tx);

    let mut totals = Totals::new();
    for (name, result) in rx {
        match result {
            Ok(counts) => totals.merge(counts),
            Err(e) => {
                warn!(repo = %name, error = %e, "counting failed, repository omitted");
                totals.record_failure();
            }
        }
        progress.inc(1);
    }
    Ok(totals)
}

/// Count every mirror with [`count_repository`].
pub fn analyze_all(
    mirrors: Vec<(String, PathBuf)>,
    workers: usize,
    progress: &ProgressBar,
) -> Result<Totals> {
    analyze_with(mirrors, workers, progress, |path| Ok(count_repository(path)))
}
