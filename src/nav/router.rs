//! In-process router with a history stack and navigation interceptors.

use super::{Route, RouteError};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use tracing::{debug, info};

/// Something that may veto leaving the current page.
pub trait NavigationInterceptor: Send + Sync {
    /// Called before leaving `from`. `to` is `None` when the whole window is
    /// closing. Returning false cancels the navigation.
    fn allow_leave(&self, from: &Route, to: Option<&Route>) -> bool;
}

/// Result of a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The router is now at this route.
    Arrived(Route),
    /// An interceptor cancelled; the router is still at this route.
    Stayed(Route),
}

impl NavigationOutcome {
    /// Returns true if the navigation went through.
    pub fn arrived(&self) -> bool {
        matches!(self, NavigationOutcome::Arrived(_))
    }

    /// Returns the route the router is at after the attempt.
    pub fn route(&self) -> &Route {
        match self {
            NavigationOutcome::Arrived(route) | NavigationOutcome::Stayed(route) => route,
        }
    }
}

type Interceptor = Arc<dyn NavigationInterceptor>;

struct RouterState {
    current: Route,
    history: Vec<Route>,
    next_id: u64,
    interceptors: Vec<(u64, Interceptor)>,
}

enum Step {
    Push,
    Back,
}

/// Shared handle to the router.
#[derive(Clone)]
pub struct Router {
    inner: Arc<Mutex<RouterState>>,
}

impl Router {
    /// Creates a router at `start`, following its redirect if it has one.
    pub fn new(start: Route) -> Self {
        let current = start.redirect().unwrap_or(start);
        Self {
            inner: Arc::new(Mutex::new(RouterState {
                current,
                history: Vec::new(),
                next_id: 0,
                interceptors: Vec::new(),
            })),
        }
    }

    /// Returns the current route.
    pub fn current(&self) -> Route {
        self.inner.lock().current.clone()
    }

    /// Returns the number of routes that `back` can return to.
    pub fn history_len(&self) -> usize {
        self.inner.lock().history.len()
    }

    /// Parses `path` and navigates to it.
    pub fn navigate(&self, path: &str) -> Result<NavigationOutcome, RouteError> {
        let to = Route::parse(path)?;
        Ok(self.go(to))
    }

    /// Navigates to `to`, consulting every interceptor first.
    ///
    /// Navigating to the current route is a no-op and never prompts.
    pub fn go(&self, to: Route) -> NavigationOutcome {
        let to = to.redirect().unwrap_or(to);
        self.transition(to, Step::Push)
    }

    /// Returns to the previous route, if there is one.
    pub fn back(&self) -> Option<NavigationOutcome> {
        let previous = self.inner.lock().history.last().cloned()?;
        Some(self.transition(previous, Step::Back))
    }

    /// Asks every interceptor whether the window may close.
    pub fn request_close(&self) -> bool {
        let (from, interceptors) = self.interceptors();
        let allowed = interceptors.iter().all(|i| i.allow_leave(&from, None));
        if !allowed {
            info!(from = %from, "window close cancelled");
        }
        allowed
    }

    /// Registers an interceptor until the returned handle is dropped.
    pub fn intercept(&self, interceptor: Arc<dyn NavigationInterceptor>) -> Interception {
        let mut state = self.inner.lock();
        let id = state.next_id;
        state.next_id += 1;
        state.interceptors.push((id, interceptor));
        debug!(id, "navigation interceptor attached");
        Interception {
            id,
            router: Arc::downgrade(&self.inner),
        }
    }

    /// Returns the number of registered interceptors.
    pub fn interceptor_count(&self) -> usize {
        self.inner.lock().interceptors.len()
    }

    /// Interceptors run without the router lock held: they may prompt the
    /// user or read other shared state.
    fn interceptors(&self) -> (Route, Vec<Interceptor>) {
        let state = self.inner.lock();
        let interceptors = state.interceptors.iter().map(|(_, i)| Arc::clone(i)).collect();
        (state.current.clone(), interceptors)
    }

    fn transition(&self, to: Route, step: Step) -> NavigationOutcome {
        let (from, interceptors) = self.interceptors();
        if from == to {
            return NavigationOutcome::Arrived(to);
        }

        if !interceptors.iter().all(|i| i.allow_leave(&from, Some(&to))) {
            info!(from = %from, to = %to, "navigation cancelled");
            return NavigationOutcome::Stayed(from);
        }

        let mut state = self.inner.lock();
        match step {
            Step::Push => state.history.push(from),
            Step::Back => {
                state.history.pop();
            }
        }
        state.current = to.clone();
        debug!(to = %to, "navigated");
        NavigationOutcome::Arrived(to)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::Notes)
    }
}

/// Registration handle for an interceptor. Dropping it detaches.
#[must_use = "dropping an Interception immediately detaches the interceptor"]
pub struct Interception {
    id: u64,
    router: Weak<Mutex<RouterState>>,
}

impl Drop for Interception {
    fn drop(&mut self) {
        if let Some(router) = self.router.upgrade() {
            router.lock().interceptors.retain(|(id, _)| *id != self.id);
            debug!(id = self.id, "navigation interceptor detached");
        }
    }
}

impl std::fmt::Debug for Interception {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interception").field("id", &self.id).finish()
    }
}
