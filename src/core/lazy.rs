//! Deferred image loading.
//!
//! Placeholder images carry their real source in a deferred attribute.
//! [`LazyLoader::scan`] registers every unresolved placeholder with a shared
//! [`VisibilityObserver`]; when one becomes visible, [`LazyLoader::on_visible`]
//! copies the deferred source into the live one exactly once and stops
//! observing it.

use std::cell::RefCell;

/// A placeholder image element.
pub trait LazyImage: PartialEq {
    /// Whether the live source is already set.
    fn has_source(&self) -> bool;
    /// The deferred source, if any.
    fn deferred_source(&self) -> Option<String>;
    fn set_source(&self, src: &str);
    /// Whether the element is still part of the document.
    fn is_attached(&self) -> bool;
}

/// Something that reports when targets scroll into (or near) the viewport.
pub trait VisibilityObserver {
    type Target: LazyImage;

    fn observe(&self, target: &Self::Target);
    fn unobserve(&self, target: &Self::Target);
    /// Stop observing everything.
    fn disconnect(&self);
}

pub struct LazyLoader<O: VisibilityObserver> {
    observer: O,
    pending: RefCell<Vec<O::Target>>,
}

impl<O: VisibilityObserver> LazyLoader<O> {
    pub fn new(observer: O) -> Self {
        Self {
            observer,
            pending: RefCell::new(Vec::new()),
        }
    }

    /// Number of targets currently being observed.
    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Observe every unresolved target not already observed.
    ///
    /// Targets that were detached since the last scan are dropped first.
    /// Returns how many targets were newly registered.
    pub fn scan(&self, targets: impl IntoIterator<Item = O::Target>) -> usize {
        let mut pending = self.pending.borrow_mut();
        pending.retain(|t| {
            let keep = t.is_attached() && !t.has_source();
            if !keep {
                self.observer.unobserve(t);
            }
            keep
        });

        let mut added = 0;
        for target in targets {
            if target.has_source() || pending.contains(&target) {
                continue;
            }
            self.observer.observe(&target);
            pending.push(target);
            added += 1;
        }
        added
    }

    /// Resolve `target` if it is still pending.
    ///
    /// Returns `true` only for the call that actually set the source.
    pub fn on_visible(&self, target: &O::Target) -> bool {
        let mut pending = self.pending.borrow_mut();
        let Some(index) = pending.iter().position(|t| t == target) else {
            return false;
        };
        let target = pending.swap_remove(index);
        self.observer.unobserve(&target);

        match target.deferred_source() {
            Some(src) if !target.has_source() => {
                target.set_source(&src);
                true
            }
            _ => false,
        }
    }

    /// Drop all targets and disconnect the observer.
    pub fn shutdown(&self) {
        self.pending.borrow_mut().clear();
        self.observer.disconnect();
    }
}
