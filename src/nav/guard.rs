//! Unsaved-changes guard.

use super::{Confirm, Interception, NavigationInterceptor, Route, Router};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Prompt shown before discarding dirty edits.
pub const DISCARD_PROMPT: &str = "You have unsaved changes. Discard them and leave this page?";

/// Errors from attaching a guard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    #[error("unsaved-changes guard is already attached")]
    AlreadyAttached,
}

struct DirtyCheck {
    is_dirty: Box<dyn Fn() -> bool + Send + Sync>,
    confirm: Arc<dyn Confirm>,
}

impl NavigationInterceptor for DirtyCheck {
    fn allow_leave(&self, from: &Route, to: Option<&Route>) -> bool {
        if !(self.is_dirty)() {
            return true;
        }
        let discard = self.confirm.confirm(DISCARD_PROMPT);
        debug!(
            from = %from,
            to = to.map(Route::path).as_deref().unwrap_or("<close>"),
            discard,
            "unsaved changes prompt answered"
        );
        discard
    }
}

/// Blocks navigation away from a page with unsaved edits until the user
/// agrees to discard them.
///
/// The guard covers in-app navigation and window close. It stays registered
/// with the router from [`attach`](Self::attach) until
/// [`detach`](Self::detach) or until the guard is dropped, which ties the
/// registration to the owning page's lifetime.
pub struct UnsavedChangesGuard {
    check: Arc<DirtyCheck>,
    interception: Option<Interception>,
}

impl UnsavedChangesGuard {
    /// Creates a detached guard. `is_dirty` is evaluated at navigation time.
    pub fn new<F>(is_dirty: F, confirm: Arc<dyn Confirm>) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(DirtyCheck {
                is_dirty: Box::new(is_dirty),
                confirm,
            }),
            interception: None,
        }
    }

    /// Registers the guard with `router`.
    ///
    /// # Errors
    ///
    /// Returns `GuardError::AlreadyAttached` if the guard is already
    /// registered; the existing registration is kept.
    pub fn attach(&mut self, router: &Router) -> Result<(), GuardError> {
        if self.interception.is_some() {
            return Err(GuardError::AlreadyAttached);
        }
        let check: Arc<dyn NavigationInterceptor> = self.check.clone();
        self.interception = Some(router.intercept(check));
        Ok(())
    }

    /// Deregisters the guard. Returns false if it was not attached.
    pub fn detach(&mut self) -> bool {
        self.interception.take().is_some()
    }

    /// Returns true while the guard is registered.
    pub fn is_attached(&self) -> bool {
        self.interception.is_some()
    }
}
