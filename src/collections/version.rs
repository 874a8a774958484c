use std::cell::Cell;
use std::rc::Rc;

use derive_more::IsVariant;
use log::trace;

use crate::util::error::{EnumerationError, ForeignEnumerator, VersionChanged};

/// The order in which an enumerator visits the nodes of a list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Direction {
    /// First in, first out: from the first node toward the last.
    #[default]
    Fifo,
    /// Last in, first out: from the last node toward the first.
    Lifo,
}

/// Structural version of a collection, shared with every enumerator created from it.
///
/// The version only advances while at least one enumerator is live and returns to zero once the
/// last one is dropped, because no snapshot can observe it in between.
#[derive(Debug, Default)]
pub(crate) struct VersionTracker {
    version: Cell<u64>,
    live: Cell<usize>,
}

impl VersionTracker {
    pub fn new() -> Rc<VersionTracker> {
        Rc::new(VersionTracker::default())
    }

    pub fn version(&self) -> u64 {
        self.version.get()
    }

    pub fn live(&self) -> usize {
        self.live.get()
    }

    /// Records a structural modification.
    pub fn bump(&self) {
        if self.live.get() > 0 {
            self.version.set(self.version.get().wrapping_add(1));
        }
    }

    fn register(&self) {
        self.live.set(self.live.get() + 1);
    }

    fn release(&self) {
        let live = self.live.get().saturating_sub(1);
        self.live.set(live);
        if live == 0 {
            trace!("last enumerator released at version {}, resetting", self.version.get());
            self.version.set(0);
        }
    }
}

/// A version snapshot held by an enumerator. Registers as a live enumerator on creation and
/// releases on drop.
#[derive(Debug)]
pub(crate) struct VersionGuard {
    tracker: Rc<VersionTracker>,
    snapshot: u64,
}

impl VersionGuard {
    pub fn register(tracker: &Rc<VersionTracker>) -> VersionGuard {
        tracker.register();
        trace!("enumerator registered, {} live", tracker.live());
        VersionGuard {
            tracker: Rc::clone(tracker),
            snapshot: tracker.version(),
        }
    }

    /// Checks that `tracker` is the one this guard was registered with and that no structural
    /// modification happened since the snapshot was taken.
    pub fn check(&self, tracker: &Rc<VersionTracker>) -> Result<(), EnumerationError> {
        if !Rc::ptr_eq(&self.tracker, tracker) {
            return Err(ForeignEnumerator.into());
        }
        if self.tracker.version() != self.snapshot {
            return Err(VersionChanged.into());
        }
        Ok(())
    }
}

impl Drop for VersionGuard {
    fn drop(&mut self) {
        self.tracker.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_only_while_observed() {
        let tracker = VersionTracker::new();
        tracker.bump();
        assert_eq!(tracker.version(), 0, "Version shouldn't advance without live enumerators.");

        let guard = VersionGuard::register(&tracker);
        assert!(guard.check(&tracker).is_ok());

        tracker.bump();
        assert_eq!(tracker.version(), 1);
        assert!(guard.check(&tracker).is_err_and(|e| e.is_version_changed()));

        drop(guard);
        assert_eq!(tracker.live(), 0);
        assert_eq!(tracker.version(), 0, "Releasing the last enumerator should reset the version.");
    }

    #[test]
    fn test_foreign_tracker() {
        let tracker = VersionTracker::new();
        let other = VersionTracker::new();
        let guard = VersionGuard::register(&tracker);

        assert!(guard.check(&other).is_err_and(|e| e.is_foreign_enumerator()));
    }

    #[test]
    fn test_reset_waits_for_last_release() {
        let tracker = VersionTracker::new();
        let first = VersionGuard::register(&tracker);
        let second = VersionGuard::register(&tracker);

        tracker.bump();
        drop(first);
        assert_eq!(tracker.version(), 1, "Version should survive while an enumerator is live.");
        assert!(second.check(&tracker).is_err());

        drop(second);
        assert_eq!(tracker.version(), 0);
    }
}
