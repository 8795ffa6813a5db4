//! Declarative route tree.
//!
//! DESIGN
//! ======
//! A route is either a leaf view or a layout with ordered children. Views are
//! referenced by `ViewId` tags rather than closures so the tree is plain data:
//! it is validated once, matched by an explicit walk (`matcher`), and rendered
//! by a single dispatch in the outlet component.
//!
//! Child patterns are relative to their parent layout; a leading `/` is
//! cosmetic. Segments are static text, `:name` parameters, or a trailing `*`
//! catch-all. Catch-all routes are tried after every sibling.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::fmt;
use std::sync::LazyLock;

use super::loaders::{Loader, home_loader, post_loader};
use super::matcher::{RouteMatch, match_path};

/// Every view the shell knows how to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewId {
    /// Navigation chrome with an outlet.
    Shell,
    Home,
    Post,
    Register,
    Login,
    NotFound,
    /// Generic error boundary.
    Error,
}

/// One segment of a route pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Static(String),
    Param(String),
    Wildcard,
}

fn parse_pattern(path: &str) -> Vec<Segment> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(|s| {
            if s == "*" {
                Segment::Wildcard
            } else if let Some(name) = s.strip_prefix(':') {
                Segment::Param(name.to_owned())
            } else {
                Segment::Static(s.to_owned())
            }
        })
        .collect()
}

/// A node of the route tree.
pub struct Route {
    path: &'static str,
    segments: Vec<Segment>,
    children: Option<Vec<Route>>,
    view: ViewId,
    loader: Option<Loader>,
    error_view: Option<ViewId>,
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("view", &self.view)
            .field("has_loader", &self.loader.is_some())
            .field("error_view", &self.error_view)
            .field("children", &self.children)
            .finish()
    }
}

impl Route {
    /// A route that renders `view` and nothing beneath it.
    #[must_use]
    pub fn leaf(path: &'static str, view: ViewId) -> Self {
        Self { path, segments: parse_pattern(path), children: None, view, loader: None, error_view: None }
    }

    /// A route that renders `view` around whichever child matches.
    #[must_use]
    pub fn layout(path: &'static str, view: ViewId, children: Vec<Route>) -> Self {
        Self { children: Some(children), ..Self::leaf(path, view) }
    }

    #[must_use]
    pub fn with_loader(mut self, loader: Loader) -> Self {
        self.loader = Some(loader);
        self
    }

    #[must_use]
    pub fn with_error_view(mut self, view: ViewId) -> Self {
        self.error_view = Some(view);
        self
    }

    #[must_use]
    pub fn path(&self) -> &'static str {
        self.path
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn view(&self) -> ViewId {
        self.view
    }

    #[must_use]
    pub fn loader(&self) -> Option<Loader> {
        self.loader
    }

    #[must_use]
    pub fn error_view(&self) -> Option<ViewId> {
        self.error_view
    }

    /// Children of a layout; `None` for leaves.
    #[must_use]
    pub fn children(&self) -> Option<&[Route]> {
        self.children.as_deref()
    }

    #[must_use]
    pub fn is_layout(&self) -> bool {
        self.children.is_some()
    }

    #[must_use]
    pub fn is_catch_all(&self) -> bool {
        self.segments.contains(&Segment::Wildcard)
    }
}

/// Structural problems detected while building a [`RouteTable`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    #[error("catch-all route {0:?} must be the last of its siblings")]
    WildcardNotLast(&'static str),

    #[error("more than one catch-all route among siblings: {0:?}")]
    DuplicateWildcard(&'static str),

    #[error("`*` must be the final segment of {0:?}")]
    WildcardNotTerminal(&'static str),

    #[error("layout {0:?} cannot be a catch-all")]
    WildcardLayout(&'static str),

    #[error("empty parameter name in {0:?}")]
    EmptyParam(&'static str),

    #[error("routes {first:?} and {second:?} can match the same path")]
    Overlap { first: &'static str, second: &'static str },
}

/// Validated, immutable route tree.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
    fallback_error: ViewId,
}

impl RouteTable {
    /// Validate and freeze a route tree.
    ///
    /// `fallback_error` is rendered when a loader fails and no route in the
    /// matched chain declares its own error view.
    ///
    /// # Errors
    ///
    /// Returns a [`RouteTableError`] when a level has misplaced or duplicate
    /// catch-alls, malformed segments, or two non-catch-all siblings (leaf or
    /// layout) that can match the same concrete path.
    pub fn new(routes: Vec<Route>, fallback_error: ViewId) -> Result<Self, RouteTableError> {
        validate_level(&routes)?;
        Ok(Self { routes, fallback_error })
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    #[must_use]
    pub fn fallback_error(&self) -> ViewId {
        self.fallback_error
    }

    /// Resolve a concrete path to its route chain.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        match_path(self, path)
    }
}

fn validate_level(routes: &[Route]) -> Result<(), RouteTableError> {
    let mut seen_catch_all: Option<&'static str> = None;

    for route in routes {
        validate_segments(route)?;

        if let Some(first) = seen_catch_all {
            return Err(if route.is_catch_all() {
                RouteTableError::DuplicateWildcard(first)
            } else {
                RouteTableError::WildcardNotLast(first)
            });
        }
        if route.is_catch_all() {
            seen_catch_all = Some(route.path);
        }

        if let Some(children) = route.children() {
            validate_level(children)?;
        }
    }

    let candidates: Vec<(&Route, Vec<Vec<&Segment>>)> = routes
        .iter()
        .filter(|r| !r.is_catch_all())
        .map(|r| (r, match_shapes(r)))
        .collect();
    for (i, (first, first_shapes)) in candidates.iter().enumerate() {
        for (second, second_shapes) in &candidates[i + 1..] {
            let clash = first_shapes
                .iter()
                .any(|a| second_shapes.iter().any(|b| shapes_overlap(a, b)));
            if clash {
                return Err(RouteTableError::Overlap { first: first.path, second: second.path });
            }
        }
    }
    Ok(())
}

fn validate_segments(route: &Route) -> Result<(), RouteTableError> {
    let last = route.segments.len().saturating_sub(1);
    for (i, segment) in route.segments.iter().enumerate() {
        match segment {
            Segment::Wildcard if i != last => return Err(RouteTableError::WildcardNotTerminal(route.path)),
            Segment::Wildcard if route.is_layout() => return Err(RouteTableError::WildcardLayout(route.path)),
            Segment::Param(name) if name.is_empty() => return Err(RouteTableError::EmptyParam(route.path)),
            _ => {}
        }
    }
    Ok(())
}

/// Every pattern, relative to the route's level, that the route can match.
///
/// A layout matches its own prefix (no child needed) and its prefix followed
/// by anything one of its children matches.
fn match_shapes(route: &Route) -> Vec<Vec<&Segment>> {
    let own: Vec<&Segment> = route.segments.iter().collect();
    let mut shapes = vec![own.clone()];
    for child in route.children().unwrap_or_default() {
        for tail in match_shapes(child) {
            let mut shape = own.clone();
            shape.extend(tail);
            shapes.push(shape);
        }
    }
    shapes
}

/// Whether some concrete path satisfies both patterns. A `*` matches any
/// remainder, including none.
fn shapes_overlap(a: &[&Segment], b: &[&Segment]) -> bool {
    match (a.split_first(), b.split_first()) {
        (None, None) => true,
        (Some((Segment::Wildcard, _)), _) | (_, Some((Segment::Wildcard, _))) => true,
        (None, Some(_)) | (Some(_), None) => false,
        (Some((x, a_rest)), Some((y, b_rest))) => {
            let compatible = match (x, y) {
                (Segment::Static(x), Segment::Static(y)) => x == y,
                _ => true,
            };
            compatible && shapes_overlap(a_rest, b_rest)
        }
    }
}

/// Path of the home page; also the destination after a successful form submit.
pub const HOME_PATH: &str = "/";
pub const REGISTER_PATH: &str = "/register";
pub const LOGIN_PATH: &str = "/login";

fn build_app_routes() -> Result<RouteTable, RouteTableError> {
    RouteTable::new(
        vec![Route::layout(
            "/",
            ViewId::Shell,
            vec![
                Route::leaf(HOME_PATH, ViewId::Home)
                    .with_loader(home_loader)
                    .with_error_view(ViewId::Error),
                Route::leaf("/posts/:post_id", ViewId::Post)
                    .with_loader(post_loader)
                    .with_error_view(ViewId::Error),
                Route::leaf(REGISTER_PATH, ViewId::Register).with_error_view(ViewId::Error),
                Route::leaf(LOGIN_PATH, ViewId::Login).with_error_view(ViewId::Error),
                Route::leaf("*", ViewId::NotFound).with_error_view(ViewId::Error),
            ],
        )],
        ViewId::Error,
    )
}

static APP_ROUTES: LazyLock<RouteTable> =
    LazyLock::new(|| build_app_routes().expect("application route table is valid"));

/// The application's route table, built on first use and never mutated.
pub fn app_routes() -> &'static RouteTable {
    &APP_ROUTES
}
