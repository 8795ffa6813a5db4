//! Per-navigation state machine.
//!
//! DESIGN
//! ======
//! `Idle -> Matching -> Loading -> {Rendered | Errored}`. `Loading` is only
//! entered when the matched chain has a loader. Each `begin` mints a fresh
//! `NavigationId`; a loader outcome is applied only if its id is still the
//! current one, so a late response can never paint over a newer navigation.
//! Nothing is cancelled: superseded loads run to completion and are dropped.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use super::loaders::{LoadError, LoadedChain, LoaderData, LoaderFailure};
use super::matcher::{RouteMatch, RouteParams};
use super::table::{RouteTable, ViewId};

/// Identity of one navigation; strictly increasing per navigator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NavigationId(u64);

/// Coarse phase of the current navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Matching,
    Loading,
    Rendered,
    Errored,
}

/// Full state of the current navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationState<'r> {
    Idle,
    Matching {
        id: NavigationId,
        path: String,
    },
    Loading {
        id: NavigationId,
        path: String,
        matched: RouteMatch<'r>,
    },
    Rendered {
        id: NavigationId,
        path: String,
        matched: RouteMatch<'r>,
        data: LoadedChain,
    },
    Errored {
        id: NavigationId,
        path: String,
        matched: RouteMatch<'r>,
        boundary_depth: usize,
        boundary_view: ViewId,
        error: LoadError,
    },
    /// No route matched and the table has no catch-all.
    Unmatched {
        id: NavigationId,
        path: String,
        fallback: ViewId,
    },
}

/// What the outlet shows at one nesting depth.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Frame {
    Empty,
    /// Waiting on this depth's loader.
    Pending,
    Layout(ViewId),
    View {
        view: ViewId,
        data: Option<LoaderData>,
        params: RouteParams,
    },
    Boundary {
        view: ViewId,
        error: Option<LoadError>,
    },
}

impl NavigationState<'_> {
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            Self::Idle => Phase::Idle,
            Self::Matching { .. } => Phase::Matching,
            Self::Loading { .. } => Phase::Loading,
            Self::Rendered { .. } => Phase::Rendered,
            Self::Errored { .. } | Self::Unmatched { .. } => Phase::Errored,
        }
    }

    #[must_use]
    pub fn id(&self) -> Option<NavigationId> {
        match self {
            Self::Idle => None,
            Self::Matching { id, .. }
            | Self::Loading { id, .. }
            | Self::Rendered { id, .. }
            | Self::Errored { id, .. }
            | Self::Unmatched { id, .. } => Some(*id),
        }
    }

    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Matching { path, .. }
            | Self::Loading { path, .. }
            | Self::Rendered { path, .. }
            | Self::Errored { path, .. }
            | Self::Unmatched { path, .. } => Some(path),
        }
    }

    /// Derive the frame rendered at `depth` of the outlet.
    #[must_use]
    pub fn frame(&self, depth: usize) -> Frame {
        match self {
            Self::Idle | Self::Matching { .. } => Frame::Empty,
            Self::Unmatched { fallback, .. } => {
                if depth == 0 {
                    Frame::Boundary { view: *fallback, error: None }
                } else {
                    Frame::Empty
                }
            }
            Self::Loading { matched, .. } => {
                let pending_at = matched.first_loader_depth().unwrap_or(usize::MAX);
                if depth < pending_at {
                    route_frame(matched, depth, None)
                } else if depth == pending_at {
                    Frame::Pending
                } else {
                    Frame::Empty
                }
            }
            Self::Rendered { matched, data, .. } => {
                let loaded = data.get(depth).cloned().flatten();
                route_frame(matched, depth, loaded)
            }
            Self::Errored { matched, boundary_depth, boundary_view, error, .. } => {
                if depth < *boundary_depth {
                    route_frame(matched, depth, None)
                } else if depth == *boundary_depth {
                    Frame::Boundary { view: *boundary_view, error: Some(error.clone()) }
                } else {
                    Frame::Empty
                }
            }
        }
    }
}

fn route_frame(matched: &RouteMatch<'_>, depth: usize, data: Option<LoaderData>) -> Frame {
    match matched.chain().get(depth) {
        None => Frame::Empty,
        Some(route) if route.is_layout() => Frame::Layout(route.view()),
        Some(route) => Frame::View { view: route.view(), data, params: matched.params().clone() },
    }
}

/// A navigation waiting on its loaders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingLoad<'r> {
    pub id: NavigationId,
    pub matched: RouteMatch<'r>,
}

/// Result of offering a loader outcome to the navigator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settled {
    Applied,
    /// The outcome belongs to a superseded navigation and was dropped.
    Stale,
}

/// Drives navigations against one route table.
#[derive(Debug)]
pub struct Navigator<'r> {
    table: &'r RouteTable,
    last_id: u64,
    state: NavigationState<'r>,
}

impl<'r> Navigator<'r> {
    #[must_use]
    pub fn new(table: &'r RouteTable) -> Self {
        Self { table, last_id: 0, state: NavigationState::Idle }
    }

    #[must_use]
    pub fn state(&self) -> &NavigationState<'r> {
        &self.state
    }

    /// Start a navigation to `path`, superseding any in flight.
    ///
    /// Returns the loads to run when the matched chain has loaders; otherwise
    /// the navigation is already terminal.
    pub fn begin(&mut self, path: &str) -> Option<PendingLoad<'r>> {
        self.last_id += 1;
        let id = NavigationId(self.last_id);
        let path = path.to_owned();
        self.state = NavigationState::Matching { id, path: path.clone() };

        let Some(matched) = self.table.resolve(&path) else {
            self.state = NavigationState::Unmatched { id, path, fallback: self.table.fallback_error() };
            return None;
        };

        if matched.first_loader_depth().is_some() {
            self.state = NavigationState::Loading { id, path, matched: matched.clone() };
            Some(PendingLoad { id, matched })
        } else {
            let data = vec![None; matched.chain().len()];
            self.state = NavigationState::Rendered { id, path, matched, data };
            None
        }
    }

    /// Apply the outcome of the loads started for `id`.
    ///
    /// Outcomes for any navigation other than the one currently loading are
    /// reported as [`Settled::Stale`] and leave state untouched.
    pub fn settle(&mut self, id: NavigationId, outcome: Result<LoadedChain, LoaderFailure>) -> Settled {
        let NavigationState::Loading { id: current, path, matched } = &self.state else {
            return Settled::Stale;
        };
        if *current != id {
            return Settled::Stale;
        }

        let path = path.clone();
        let matched = matched.clone();
        self.state = match outcome {
            Ok(data) => NavigationState::Rendered { id, path, matched, data },
            Err(LoaderFailure { depth, error }) => {
                let (boundary_depth, boundary_view) = matched.error_boundary(depth);
                NavigationState::Errored { id, path, matched, boundary_depth, boundary_view, error }
            }
        };
        Settled::Applied
    }
}
