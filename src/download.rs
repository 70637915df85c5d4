//! Bounded-concurrency photo downloads.
//!
//! A fixed pool of worker threads drains a url → path queue over blocking
//! HTTP. Files are staged in a temp directory and renamed into place so a
//! half-written download never shadows a good asset. Anything already on
//! disk is left alone, which makes reruns cheap.

use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use crossbeam_channel::unbounded;

use crate::error::Result;

/// What happened to each queued asset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadReport {
    pub fetched: usize,
    pub skipped: usize,
    pub failed: usize,
}

enum Outcome {
    Fetched,
    Skipped,
    Failed,
}

/// Derive a local filename from an asset url: last path component, query
/// string stripped.
pub fn suggest_filename(url: &str) -> String {
    let without_query = url.split('?').next().unwrap_or(url);
    without_query
        .rsplit('/')
        .next()
        .unwrap_or(without_query)
        .to_string()
}

/// Download every queued asset with at most `jobs` concurrent requests.
///
/// Individual failures are logged and counted, never fatal — a missing
/// photo leaves an empty frame in the merge, which is preferable to losing
/// the whole run.
pub fn fetch_all(queue: &BTreeMap<String, PathBuf>, jobs: usize) -> Result<DownloadReport> {
    if queue.is_empty() {
        return Ok(DownloadReport::default());
    }

    let staging = tempfile::tempdir()?;
    let staging_path = staging.path();

    let (work_tx, work_rx) = unbounded::<(&String, &PathBuf)>();
    for item in queue {
        // Receiver outlives every send; the channel is unbounded.
        let _ = work_tx.send(item);
    }
    drop(work_tx);

    let (done_tx, done_rx) = unbounded::<Outcome>();

    let report = std::thread::scope(|scope| {
        for _ in 0..jobs.max(1) {
            let work_rx = work_rx.clone();
            let done_tx = done_tx.clone();
            scope.spawn(move || {
                for (url, target) in work_rx.iter() {
                    let _ = done_tx.send(fetch_one(url, target, staging_path));
                }
            });
        }
        drop(done_tx);

        let mut report = DownloadReport::default();
        for outcome in done_rx.iter() {
            match outcome {
                Outcome::Fetched => report.fetched += 1,
                Outcome::Skipped => report.skipped += 1,
                Outcome::Failed => report.failed += 1,
            }
        }
        report
    });

    Ok(report)
}

fn fetch_one(url: &str, target: &Path, staging: &Path) -> Outcome {
    if target.exists() {
        return Outcome::Skipped;
    }
    match try_fetch(url, target, staging) {
        Ok(()) => {
            tracing::debug!(url, path = %target.display(), "downloaded photo");
            Outcome::Fetched
        }
        Err(e) => {
            tracing::warn!(url, error = %e, "photo download failed");
            Outcome::Failed
        }
    }
}

fn try_fetch(url: &str, target: &Path, staging: &Path) -> io::Result<()> {
    let tmp = tempfile::NamedTempFile::new_in(staging)?;

    let response = ureq::get(url)
        .call()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let mut reader = response.into_reader();
    let mut file: &File = tmp.as_file();
    io::copy(&mut reader, &mut file)?;

    tmp.persist(target).map_err(|e| e.error)?;
    Ok(())
}
