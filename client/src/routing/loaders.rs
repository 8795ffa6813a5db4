//! Route loaders: fetch what a view needs before it may render.
//!
//! DESIGN
//! ======
//! A loader is a plain function pointer so the route table stays `'static`
//! data. Each loader makes exactly one API call and never handles its own
//! failure; the navigator turns a rejection into an error-boundary render.

#[cfg(test)]
#[path = "loaders_test.rs"]
mod loaders_test;

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use super::matcher::{RouteMatch, RouteParams};
use crate::net::api::{ApiClient, ApiError};
use crate::net::types::{Post, PostList};

/// Data a loader hands to its view. The consuming view owns the shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoaderData {
    Posts(PostList),
    Post(Post),
}

/// Why a loader rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("route parameter {0:?} is missing")]
    MissingParam(&'static str),
}

impl LoadError {
    /// HTTP status behind the failure, when the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => e.status(),
            Self::MissingParam(_) => None,
        }
    }
}

pub type LoaderFuture<'a> = LocalBoxFuture<'a, Result<LoaderData, LoadError>>;

/// Async data producer bound to a route.
pub type Loader = for<'a> fn(&'a ApiClient, &'a RouteParams) -> LoaderFuture<'a>;

/// Loader for `/`: the post listing.
pub fn home_loader<'a>(client: &'a ApiClient, _params: &'a RouteParams) -> LoaderFuture<'a> {
    async move {
        let posts = client.fetch_posts().await?;
        Ok::<_, LoadError>(LoaderData::Posts(posts))
    }
    .boxed_local()
}

/// Loader for `/posts/:post_id`.
pub fn post_loader<'a>(client: &'a ApiClient, params: &'a RouteParams) -> LoaderFuture<'a> {
    async move {
        let post_id = params.get("post_id").ok_or(LoadError::MissingParam("post_id"))?;
        let post = client.fetch_post(post_id).await?;
        Ok::<_, LoadError>(LoaderData::Post(post))
    }
    .boxed_local()
}

/// Loader output for every route of a chain; `None` where a route has no loader.
pub type LoadedChain = Vec<Option<LoaderData>>;

/// First loader rejection in a chain and the depth it happened at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderFailure {
    pub depth: usize,
    pub error: LoadError,
}

/// Run every loader of `matched`, outermost first, stopping at the first
/// failure.
///
/// # Errors
///
/// Returns the failing depth and its [`LoadError`].
pub async fn load_chain(client: &ApiClient, matched: &RouteMatch<'_>) -> Result<LoadedChain, LoaderFailure> {
    let mut loaded = Vec::with_capacity(matched.chain().len());
    for (depth, route) in matched.chain().iter().enumerate() {
        let data = match route.loader() {
            Some(loader) => Some(
                loader(client, matched.params())
                    .await
                    .map_err(|error| LoaderFailure { depth, error })?,
            ),
            None => None,
        };
        loaded.push(data);
    }
    Ok(loaded)
}
