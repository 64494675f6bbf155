//! View State Helpers
//!
//! The fetch/mutate plumbing every list view shares.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::Notice;
use crate::error::ApiError;
use crate::lifetime::ViewScope;

/// `Loading → Loaded → (Loading on refetch)`. Failures do not get a state of
/// their own: prior data stays on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
}

/// Fetch view data and hand it to `on_loaded`. On failure the error is logged
/// and the previous contents are kept.
pub fn spawn_load<T, Fut>(
    scope: ViewScope,
    tag: &'static str,
    fetch: Fut,
    set_state: WriteSignal<LoadState>,
    on_loaded: impl FnOnce(T) + 'static,
) where
    T: 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let ticket = scope.begin();
    // A mutation may supersede this load; the spinner still has to clear
    let guard = scope.guard();
    set_state.set(LoadState::Loading);
    spawn_local(async move {
        let result = fetch.await;
        ticket.apply(|| match result {
            Ok(data) => on_loaded(data),
            Err(e) => log::error!("[{}] Failed to load: {}", tag, e),
        });
        guard.apply(|| set_state.set(LoadState::Loaded));
    });
}

/// Run a mutation flow whose result is the refetched collection.
///
/// `set_busy` is raised until the flow resolves. Success hands the refetched
/// data to `on_success`; failure leaves the view alone and shows the error
/// inline.
pub fn spawn_action<T, E, Fut>(
    scope: ViewScope,
    tag: &'static str,
    action: Fut,
    set_busy: WriteSignal<bool>,
    set_notice: WriteSignal<Option<Notice>>,
    on_success: impl FnOnce(T) + 'static,
) where
    T: 'static,
    E: std::fmt::Display + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    let ticket = scope.begin();
    let guard = scope.guard();
    set_busy.set(true);
    set_notice.set(None);
    spawn_local(async move {
        let result = action.await;
        guard.apply(|| set_busy.set(false));
        ticket.apply(|| match result {
            Ok(data) => on_success(data),
            Err(e) => {
                log::error!("[{}] {}", tag, e);
                set_notice.set(Some(Notice::error(&e)));
            }
        });
    });
}
