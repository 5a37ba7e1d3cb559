use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use crate::models::resume::ResumeDocument;
use crate::resume::edits::Edit;

/// Holds the one résumé document of the running site.
///
/// Readers get an `Arc` snapshot that never changes underneath them. Writers go
/// through `update`, which swaps in a freshly built document while holding the
/// write lock, so updates apply one at a time in arrival order.
#[derive(Debug, Clone)]
pub struct ResumeStore {
    current: Arc<RwLock<Arc<ResumeDocument>>>,
}

impl Default for ResumeStore {
    fn default() -> Self {
        Self::new(ResumeDocument::sample())
    }
}

impl ResumeStore {
    pub fn new(doc: ResumeDocument) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(doc))),
        }
    }

    /// Returns the current document.
    pub fn current(&self) -> Arc<ResumeDocument> {
        // A poisoned lock still holds a complete document: writers only ever
        // replace the Arc after the new value is fully built.
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&*guard)
    }

    /// Replaces the document with `f(current)` and returns the new snapshot.
    pub fn update<F>(&self, f: F) -> Arc<ResumeDocument>
    where
        F: FnOnce(&ResumeDocument) -> ResumeDocument,
    {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        let next = Arc::new(f(&guard));
        *guard = Arc::clone(&next);
        next
    }

    /// Applies a single edit. Stale indices leave the document as it was.
    pub fn apply(&self, edit: &Edit) -> Arc<ResumeDocument> {
        self.update(|doc| {
            if !edit.targets_existing(doc) {
                warn!("Edit {} addresses a missing index; ignored", edit.op());
            }
            debug!("Applying edit {}", edit.op());
            edit.apply(doc)
        })
    }

    /// Like `apply`, but refuses edits whose indices do not resolve.
    /// Returns `None` and leaves the document untouched in that case.
    pub fn try_apply(&self, edit: &Edit) -> Option<Arc<ResumeDocument>> {
        let mut applied = false;
        let next = self.update(|doc| {
            if edit.targets_existing(doc) {
                applied = true;
                debug!("Applying edit {}", edit.op());
                edit.apply(doc)
            } else {
                doc.clone()
            }
        });
        applied.then_some(next)
    }

    /// Replaces the whole document.
    pub fn replace(&self, doc: ResumeDocument) -> Arc<ResumeDocument> {
        self.update(|_| doc)
    }

    /// Restores the placeholder document.
    pub fn reset(&self) -> Arc<ResumeDocument> {
        self.replace(ResumeDocument::sample())
    }
}
