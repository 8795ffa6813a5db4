//! Path matching over the route tree.
//!
//! Each level is scanned in declaration order with catch-all routes moved to
//! the end, so a wildcard only wins when no sibling matches. A layout consumes
//! its pattern as a prefix and then descends; a leaf must consume the rest of
//! the path. Captures are committed only once a full chain matches.

#[cfg(test)]
#[path = "matcher_test.rs"]
mod matcher_test;

use std::collections::BTreeMap;

use super::table::{Route, RouteTable, Segment, ViewId};

/// Key under which a catch-all stores the unmatched remainder.
pub const WILDCARD_PARAM: &str = "*";

/// Path parameters captured while matching.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, name: &str, value: String) {
        self.0.insert(name.to_owned(), value);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RouteParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A matched chain of routes, outermost first.
#[derive(Clone, Debug)]
pub struct RouteMatch<'r> {
    chain: Vec<&'r Route>,
    params: RouteParams,
    fallback_error: ViewId,
}

impl PartialEq for RouteMatch<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.chain.len() == other.chain.len()
            && self
                .chain
                .iter()
                .zip(&other.chain)
                .all(|(a, b)| std::ptr::eq(*a, *b))
            && self.params == other.params
            && self.fallback_error == other.fallback_error
    }
}

impl Eq for RouteMatch<'_> {}

impl<'r> RouteMatch<'r> {
    #[must_use]
    pub fn chain(&self) -> &[&'r Route] {
        &self.chain
    }

    #[must_use]
    pub fn params(&self) -> &RouteParams {
        &self.params
    }

    /// The innermost matched route.
    #[must_use]
    pub fn leaf(&self) -> Option<&'r Route> {
        self.chain.last().copied()
    }

    /// Views of the chain, outermost first.
    #[must_use]
    pub fn views(&self) -> Vec<ViewId> {
        self.chain.iter().map(|r| r.view()).collect()
    }

    /// Depth of the outermost route that declares a loader.
    #[must_use]
    pub fn first_loader_depth(&self) -> Option<usize> {
        self.chain.iter().position(|r| r.loader().is_some())
    }

    /// Nearest error boundary at or above `depth`, walking outward.
    ///
    /// Falls back to depth 0 with the table's fallback error view when no
    /// route in that part of the chain declares one.
    #[must_use]
    pub fn error_boundary(&self, depth: usize) -> (usize, ViewId) {
        let upto = depth.saturating_add(1).min(self.chain.len());
        self.chain[..upto]
            .iter()
            .enumerate()
            .rev()
            .find_map(|(i, route)| route.error_view().map(|view| (i, view)))
            .unwrap_or((0, self.fallback_error))
    }
}

/// Split a location into path segments, ignoring query, fragment, and empty
/// segments.
#[must_use]
pub fn normalize_path(path: &str) -> Vec<&str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Resolve `path` against `table`.
///
/// Returns `None` only when no route (including any catch-all) matches.
#[must_use]
pub fn match_path<'r>(table: &'r RouteTable, path: &str) -> Option<RouteMatch<'r>> {
    let segments = normalize_path(path);
    let mut chain = Vec::new();
    let mut params = RouteParams::default();
    if match_level(table.routes(), &segments, &mut chain, &mut params) {
        Some(RouteMatch { chain, params, fallback_error: table.fallback_error() })
    } else {
        None
    }
}

fn match_level<'r>(
    routes: &'r [Route],
    segments: &[&str],
    chain: &mut Vec<&'r Route>,
    params: &mut RouteParams,
) -> bool {
    let ordered = routes
        .iter()
        .filter(|r| !r.is_catch_all())
        .chain(routes.iter().filter(|r| r.is_catch_all()));

    for route in ordered {
        let mut trial = params.clone();
        let Some(rest) = consume(route, segments, &mut trial) else {
            continue;
        };

        let mark = chain.len();
        chain.push(route);
        let matched = match route.children() {
            None => rest.is_empty(),
            Some(children) => match_level(children, rest, chain, &mut trial) || rest.is_empty(),
        };
        if matched {
            *params = trial;
            return true;
        }
        chain.truncate(mark);
    }
    false
}

/// Consume `route`'s pattern from the front of `segments`, returning the rest.
fn consume<'s>(route: &Route, segments: &'s [&'s str], params: &mut RouteParams) -> Option<&'s [&'s str]> {
    let mut rest = segments;
    for pattern in route.segments() {
        match pattern {
            Segment::Wildcard => {
                params.insert(WILDCARD_PARAM, rest.join("/"));
                return Some(&rest[rest.len()..]);
            }
            Segment::Static(text) => {
                let (first, tail) = rest.split_first()?;
                if *first != text.as_str() {
                    return None;
                }
                rest = tail;
            }
            Segment::Param(name) => {
                let (first, tail) = rest.split_first()?;
                params.insert(name, (*first).to_owned());
                rest = tail;
            }
        }
    }
    Some(rest)
}
