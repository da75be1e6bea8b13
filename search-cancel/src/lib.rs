//! Version based cancellation for searches that may be overtaken by a newer
//! one typed into the same search box.
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

/// The latest search version started by one search box. Cloning shares the
/// counter.
#[derive(Debug, Clone, Default)]
pub struct SearchVersions {
    active: Arc<AtomicU64>,
}

impl SearchVersions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the next version, cancelling every token issued before.
    pub fn issue(&self) -> CancellationToken {
        let version = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        CancellationToken {
            version,
            active: Some(self.active.clone()),
        }
    }

    /// Starts a host-numbered version. The active version never moves
    /// backwards, so a request that arrives late is cancelled right away.
    pub fn begin(&self, version: u64) -> CancellationToken {
        self.active.fetch_max(version, Ordering::SeqCst);
        CancellationToken {
            version,
            active: Some(self.active.clone()),
        }
    }

    pub fn active(&self) -> u64 {
        self.active.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone)]
pub struct CancellationToken {
    version: u64,
    active: Option<Arc<AtomicU64>>,
}

impl CancellationToken {
    /// A token that is never cancelled.
    pub fn noop() -> Self {
        Self {
            version: 0,
            active: None,
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_cancelled(&self) -> bool {
        match &self.active {
            Some(active) => active.load(Ordering::SeqCst) != self.version,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_is_never_cancelled() {
        let versions = SearchVersions::new();
        let token = CancellationToken::noop();
        versions.issue();
        versions.begin(100);
        assert!(!token.is_cancelled());
    }

    #[test]
    fn issue_counts_from_one() {
        let versions = SearchVersions::new();
        assert_eq!(versions.active(), 0);
        assert_eq!(versions.issue().version(), 1);
        assert_eq!(versions.issue().version(), 2);
        assert_eq!(versions.active(), 2);
    }
}
