// Fail-open filtering: a filter that would remove every row is skipped
use tracing::debug;

pub trait Filter<T: ?Sized> {
    fn matches(&self, item: &T) -> bool;

    /// Short label used in logs
    fn name(&self) -> &'static str;
}

/// What happened when a filter was offered to a row set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome {
    /// Rows that did not match were removed
    Applied { kept: usize, removed: usize },
    /// No row matched, so the row set was left unchanged
    Skipped,
}

impl FilterOutcome {
    pub fn was_applied(&self) -> bool {
        matches!(self, FilterOutcome::Applied { .. })
    }
}

/// Keep the rows for which `keep` holds, unless it holds for none of them.
///
/// `label` names the filter in logs. An empty row set is left as is and
/// reported as skipped.
pub fn apply_fail_open<R, P>(rows: &mut Vec<R>, label: &str, mut keep: P) -> FilterOutcome
where
    P: FnMut(&R) -> bool,
{
    let kept = rows.iter().filter(|r| keep(*r)).count();
    if kept == 0 {
        debug!(filter = label, rows = rows.len(), "filter matched nothing; skipped");
        return FilterOutcome::Skipped;
    }
    let removed = rows.len() - kept;
    rows.retain(|r| keep(r));
    debug!(filter = label, kept, removed, "filter applied");
    FilterOutcome::Applied { kept, removed }
}
