//! View Lifetime
//!
//! Cancellation token tied to a mounted view. Requests in flight cannot be
//! aborted, so their results are checked against the token before they
//! touch view state: nothing is applied after the view is torn down, and a
//! superseded refetch never overwrites a newer one.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use leptos::prelude::{on_cleanup, StoredValue, WithValue};

#[derive(Debug, Default)]
struct Inner {
    closed: AtomicBool,
    generation: AtomicU64,
}

#[derive(Debug, Clone, Default)]
pub struct ViewLifetime {
    inner: Arc<Inner>,
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the view as gone; every outstanding ticket becomes stale
    pub fn close(&self) {
        self.inner.closed.store(true, Ordering::SeqCst);
    }

    pub fn is_open(&self) -> bool {
        !self.inner.closed.load(Ordering::SeqCst)
    }

    /// Ticket for a request that supersedes all earlier `begin` tickets
    pub fn begin(&self) -> Ticket {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            lifetime: self.clone(),
            generation: Some(generation),
        }
    }

    /// Ticket that only goes stale when the view closes
    pub fn guard(&self) -> Ticket {
        Ticket {
            lifetime: self.clone(),
            generation: None,
        }
    }
}

/// Proof that a response may still be applied
#[derive(Debug, Clone)]
pub struct Ticket {
    lifetime: ViewLifetime,
    generation: Option<u64>,
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        if !self.lifetime.is_open() {
            return false;
        }
        match self.generation {
            Some(generation) => self.lifetime.inner.generation.load(Ordering::SeqCst) == generation,
            None => true,
        }
    }

    /// Run `apply` only if the ticket is still current. Returns whether it ran.
    pub fn apply(&self, apply: impl FnOnce()) -> bool {
        if self.is_current() {
            apply();
            true
        } else {
            log::debug!("[Lifetime] Discarding stale response");
            false
        }
    }
}

impl Ticket {
    /// A ticket that is never current
    pub fn stale() -> Self {
        let lifetime = ViewLifetime::new();
        lifetime.close();
        lifetime.guard()
    }
}

/// `Copy` handle on a component's [`ViewLifetime`], for use in event handlers
#[derive(Clone, Copy)]
pub struct ViewScope {
    lifetime: StoredValue<ViewLifetime>,
}

impl ViewScope {
    pub fn begin(&self) -> Ticket {
        self.lifetime.try_with_value(ViewLifetime::begin).unwrap_or_else(Ticket::stale)
    }

    pub fn guard(&self) -> Ticket {
        self.lifetime.try_with_value(ViewLifetime::guard).unwrap_or_else(Ticket::stale)
    }
}

/// Lifetime of the calling component, closed by its cleanup
pub fn use_view_scope() -> ViewScope {
    let lifetime = ViewLifetime::new();
    let on_drop = lifetime.clone();
    on_cleanup(move || on_drop.close());
    ViewScope {
        lifetime: StoredValue::new(lifetime),
    }
}
