//! Set-by-set conversion with an explicit error policy.
//!
//! Layout selection and placement are pure per-set computations, so the
//! only batch-level decision is what to do when one set fits no template:
//! stop everything, or drop the set and keep going. Skipping shrinks the
//! output (one record per surviving set), so the skipped sets are reported
//! rather than silently absorbed.

use crate::error::{LinesheetError, Result};
use crate::layout::{place, select_layout};
use crate::schema::LinesheetEntry;
use crate::types::ProductSet;

/// What to do with a set that fits no supported layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop the batch at the first unsupported set (reference behavior).
    #[default]
    Abort,
    /// Drop the offending set, report it, continue.
    Skip,
}

/// A set dropped under [`ErrorPolicy::Skip`], with the reason.
#[derive(Debug)]
pub struct SkippedSet {
    pub handle: String,
    pub reason: LinesheetError,
}

/// Result of converting a batch of sets.
#[derive(Debug, Default)]
pub struct BuildOutcome {
    pub entries: Vec<LinesheetEntry>,
    pub skipped: Vec<SkippedSet>,
}

/// Convert one set: pick its layout, then place it.
pub fn entry_for(set: &ProductSet) -> Result<LinesheetEntry> {
    let layout = select_layout(set.products.len(), set.max_variant_count())?;
    place(set, layout)
}

/// Convert `sets` into line-sheet entries, in order.
pub fn build_entries(sets: &[ProductSet], policy: ErrorPolicy) -> Result<BuildOutcome> {
    let mut outcome = BuildOutcome::default();

    for set in sets {
        match entry_for(set) {
            Ok(entry) => outcome.entries.push(entry),
            Err(reason) => match policy {
                ErrorPolicy::Abort => {
                    tracing::error!(handle = %set.handle, error = %reason, "unsupported product set");
                    return Err(reason);
                }
                ErrorPolicy::Skip => {
                    tracing::warn!(handle = %set.handle, error = %reason, "skipping unsupported set");
                    outcome.skipped.push(SkippedSet {
                        handle: set.handle.clone(),
                        reason,
                    });
                }
            },
        }
    }

    Ok(outcome)
}
