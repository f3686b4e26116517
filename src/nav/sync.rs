//! Reducer-style navigation state machine.
//!
//! All navigation is address-first: user actions push a new [`NavState`]
//! onto the history and then `reconcile` compares the current entry against
//! the last-applied state. Divergence starts a fetch; results are applied
//! only when their generation still matches, so a superseded fetch can never
//! overwrite a newer one.

use super::pagination::Pagination;
use super::{History, NavState};
use crate::catalog_client::ClientError;
use crate::domain::models::CatalogPage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Error(String),
}

/// A fetch the event loop must run. `generation` ties the eventual outcome
/// back to the navigation that requested it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSpec {
    pub target: NavState,
    pub generation: u64,
}

/// Completion of a fetch, successful or not.
#[derive(Debug)]
pub struct FetchOutcome {
    pub spec: FetchSpec,
    pub result: Result<CatalogPage, ClientError>,
}

pub struct NavigationSync {
    history: History,
    applied: NavState,
    page: CatalogPage,
    phase: Phase,
    generation: u64,
    in_flight: Option<NavState>,
}

impl NavigationSync {
    /// The first page is fetched before the interactive loop starts, so the
    /// machine begins `Idle` with address and applied state in agreement.
    pub fn new(initial: NavState, first_page: CatalogPage) -> Self {
        NavigationSync {
            history: History::new(initial.clone()),
            applied: initial,
            page: first_page,
            phase: Phase::Idle,
            generation: 0,
            in_flight: None,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn page(&self) -> &CatalogPage {
        &self.page
    }

    pub fn applied(&self) -> &NavState {
        &self.applied
    }

    /// The address line as currently shown.
    pub fn address(&self) -> String {
        self.history.current().encode()
    }

    /// Pager position for the applied state, or `None` when it must not
    /// render.
    pub fn pagination(&self) -> Option<Pagination> {
        Pagination::derive(self.applied.offset, self.page.page_size, self.page.num_results)
    }

    /// Changing genre invalidates any prior page position: offset resets to
    /// 0 unconditionally.
    pub fn select_genre(&mut self, code: &str) -> Option<FetchSpec> {
        self.history.push(NavState {
            list: code.to_string(),
            offset: 0,
        });
        self.reconcile()
    }

    /// Go to 1-indexed `page`, addressed by absolute offset computed from
    /// the page size of the most recently fetched page.
    pub fn select_page(&mut self, page: u32) -> Option<FetchSpec> {
        let offset = Pagination::offset_for_page(page, self.page.page_size);
        self.history.push(NavState {
            list: self.history.current().list.clone(),
            offset,
        });
        self.reconcile()
    }

    pub fn back(&mut self) -> Option<FetchSpec> {
        if self.history.back() {
            self.reconcile()
        } else {
            None
        }
    }

    pub fn forward(&mut self) -> Option<FetchSpec> {
        if self.history.forward() {
            self.reconcile()
        } else {
            None
        }
    }

    /// The explicit "apply navigation" command: compare the address against
    /// the last-applied state and start a fetch on divergence. Idempotent --
    /// re-checking an already-applied or already-in-flight target does not
    /// fire another fetch.
    fn reconcile(&mut self) -> Option<FetchSpec> {
        let target = self.history.current().clone();
        if target == self.applied {
            // Navigating back to the applied state supersedes whatever was
            // in flight; bumping the generation invalidates its outcome.
            if self.in_flight.take().is_some() {
                self.generation += 1;
                self.phase = Phase::Idle;
            }
            return None;
        }
        if self.in_flight.as_ref() == Some(&target) {
            return None;
        }
        self.generation += 1;
        self.in_flight = Some(target.clone());
        self.phase = Phase::Loading;
        tracing::debug!(list = %target.list, offset = target.offset, generation = self.generation, "navigation diverged, fetching");
        Some(FetchSpec {
            target,
            generation: self.generation,
        })
    }

    /// Apply a fetch completion. Outcomes from superseded generations are
    /// discarded wholesale, success or failure.
    pub fn apply(&mut self, outcome: FetchOutcome) {
        if outcome.spec.generation != self.generation {
            tracing::debug!(
                stale = outcome.spec.generation,
                current = self.generation,
                "discarding superseded fetch result"
            );
            return;
        }
        self.in_flight = None;
        match outcome.result {
            Ok(page) => {
                self.page = page;
                self.applied = outcome.spec.target;
                self.phase = Phase::Idle;
            }
            Err(e) => {
                tracing::error!(error = %e, list = %outcome.spec.target.list, offset = outcome.spec.target.offset, "fetch failed");
                self.phase = Phase::Error(e.to_string());
            }
        }
    }
}
