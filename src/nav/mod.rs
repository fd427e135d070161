//! Routes, the in-process router, confirmation prompts and the
//! unsaved-changes guard.

mod confirm;
mod guard;
mod route;
mod router;

pub use confirm::{AlwaysConfirm, Confirm, ScriptedConfirm};
pub use guard::{DISCARD_PROMPT, GuardError, UnsavedChangesGuard};
pub use route::{Route, RouteError};
pub use router::{Interception, NavigationInterceptor, NavigationOutcome, Router};
