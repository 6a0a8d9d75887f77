//! Reactive wrapper around `ListState` shared by the users and trusts
//! screens. The controller owns the state in a signal, hands fetch futures a
//! sequence number, and applies completions through the stale-response guard
//! so routes never reconcile responses themselves.

use crate::app_lib::AppError;
use crate::features::listing::state::{ListQuery, ListState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

pub(crate) struct ListController<T>
where
    T: Clone + Send + Sync + 'static,
{
    state: RwSignal<ListState<T>>,
}

impl<T> Clone for ListController<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListController<T> where T: Clone + Send + Sync + 'static {}

impl<T> ListController<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(noun: &'static str) -> Self {
        Self {
            state: RwSignal::new(ListState::new(noun)),
        }
    }

    /// Dispatches one fetch. The completion is applied only if no newer fetch
    /// was issued in the meantime.
    pub fn run<F>(self, fetch: F)
    where
        F: Future<Output = Result<Vec<T>, AppError>> + 'static,
    {
        let Some(seq) = self.state.try_update(|state| state.begin()) else {
            return;
        };
        spawn_local(async move {
            let outcome = fetch.await;
            // None means the owning scope was disposed; nothing to apply.
            let _ = self.state.try_update(|state| state.finish(seq, outcome));
        });
    }

    /// Snapshot of the parameters the next fetch should use. Untracked: the
    /// caller decides when to refetch.
    pub fn query(self) -> ListQuery {
        self.state.with_untracked(|state| state.query())
    }

    pub fn advance(self) -> bool {
        self.state
            .try_update(|state| state.advance())
            .unwrap_or(false)
    }

    pub fn retreat(self) -> bool {
        self.state
            .try_update(|state| state.retreat())
            .unwrap_or(false)
    }

    /// Shows a message instead of dispatching, for fetches that cannot be
    /// issued at all.
    pub fn reject(self, message: &str) {
        self.state.update(|state| state.reject(message));
    }

    pub fn submit_search(self, raw: &str) {
        self.state.update(|state| state.submit_search(raw));
    }

    pub fn remove(self, predicate: impl Fn(&T) -> bool + 'static) {
        self.state.update(|state| state.remove_where(&predicate));
    }

    pub fn records(self) -> Signal<Vec<T>> {
        Signal::derive(move || self.state.with(|state| state.records().to_vec()))
    }

    pub fn loading(self) -> Signal<bool> {
        Signal::derive(move || self.state.with(|state| state.loading()))
    }

    pub fn message(self) -> Signal<Option<String>> {
        Signal::derive(move || {
            self.state
                .with(|state| state.message().map(str::to_string))
        })
    }

    pub fn page(self) -> Signal<u32> {
        Signal::derive(move || self.state.with(|state| state.page()))
    }

    pub fn has_next(self) -> Signal<bool> {
        Signal::derive(move || self.state.with(|state| state.has_next()))
    }
}
