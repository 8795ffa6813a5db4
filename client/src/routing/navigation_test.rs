use futures::executor::block_on;

use super::*;
use crate::net::api::ApiError;
use crate::net::testing::{StubTransport, client_with};
use crate::net::types::{Post, PostList};
use crate::routing::loaders::load_chain;
use crate::routing::table::{Route, app_routes};

fn posts(titles: &[&str]) -> LoadedChain {
    let posts = titles
        .iter()
        .enumerate()
        .map(|(i, t)| Post { id: i.to_string(), title: (*t).to_owned(), ..Post::default() })
        .collect();
    vec![None, Some(LoaderData::Posts(PostList { posts }))]
}

fn network_failure(depth: usize) -> LoaderFailure {
    LoaderFailure { depth, error: LoadError::Api(ApiError::Network("offline".to_owned())) }
}

// =============================================================
// Phase transitions
// =============================================================

#[test]
fn new_navigator_is_idle() {
    let nav = Navigator::new(app_routes());
    assert_eq!(nav.state().phase(), Phase::Idle);
    assert_eq!(nav.state().id(), None);
    assert_eq!(nav.state().frame(0), Frame::Empty);
}

#[test]
fn route_with_loader_enters_loading() {
    let mut nav = Navigator::new(app_routes());

    let pending = nav.begin("/").unwrap();

    assert_eq!(nav.state().phase(), Phase::Loading);
    assert_eq!(nav.state().id(), Some(pending.id));
    assert_eq!(nav.state().path(), Some("/"));
    assert_eq!(pending.matched.views(), vec![ViewId::Shell, ViewId::Home]);
}

#[test]
fn route_without_loader_renders_immediately() {
    let mut nav = Navigator::new(app_routes());

    assert!(nav.begin("/register").is_none());

    assert_eq!(nav.state().phase(), Phase::Rendered);
    assert_eq!(nav.state().frame(0), Frame::Layout(ViewId::Shell));
    assert_eq!(
        nav.state().frame(1),
        Frame::View { view: ViewId::Register, data: None, params: RouteParams::default() }
    );
    assert_eq!(nav.state().frame(2), Frame::Empty);
}

#[test]
fn successful_load_renders_view_with_data() {
    let mut nav = Navigator::new(app_routes());
    let pending = nav.begin("/").unwrap();

    assert_eq!(nav.settle(pending.id, Ok(posts(&["hello"]))), Settled::Applied);

    assert_eq!(nav.state().phase(), Phase::Rendered);
    let Frame::View { view, data, .. } = nav.state().frame(1) else { panic!("expected view frame") };
    assert_eq!(view, ViewId::Home);
    let Some(LoaderData::Posts(list)) = data else { panic!("expected posts") };
    assert_eq!(list.posts[0].title, "hello");
}

#[test]
fn failed_load_renders_nearest_error_boundary() {
    let mut nav = Navigator::new(app_routes());
    let pending = nav.begin("/").unwrap();

    assert_eq!(nav.settle(pending.id, Err(network_failure(1))), Settled::Applied);

    assert_eq!(nav.state().phase(), Phase::Errored);
    // shell stays mounted; the boundary replaces only the failing view
    assert_eq!(nav.state().frame(0), Frame::Layout(ViewId::Shell));
    assert_eq!(
        nav.state().frame(1),
        Frame::Boundary {
            view: ViewId::Error,
            error: Some(LoadError::Api(ApiError::Network("offline".to_owned()))),
        }
    );
}

#[test]
fn failure_without_local_boundary_uses_ancestor() {
    let table = RouteTable::new(
        vec![Route::layout(
            "/",
            ViewId::Shell,
            vec![Route::leaf("/", ViewId::Home).with_loader(crate::routing::loaders::home_loader)],
        )
        .with_error_view(ViewId::NotFound)],
        ViewId::Error,
    )
    .unwrap();
    let mut nav = Navigator::new(&table);
    let pending = nav.begin("/").unwrap();

    nav.settle(pending.id, Err(network_failure(1)));

    let NavigationState::Errored { boundary_depth, boundary_view, .. } = nav.state() else {
        panic!("expected errored state");
    };
    assert_eq!((*boundary_depth, *boundary_view), (0, ViewId::NotFound));
    assert!(matches!(nav.state().frame(0), Frame::Boundary { view: ViewId::NotFound, .. }));
    assert_eq!(nav.state().frame(1), Frame::Empty);
}

#[test]
fn not_found_path_renders_not_found_view_not_error_boundary() {
    let mut nav = Navigator::new(app_routes());

    assert!(nav.begin("/does-not-exist").is_none());

    assert_eq!(nav.state().phase(), Phase::Rendered);
    assert!(matches!(nav.state().frame(1), Frame::View { view: ViewId::NotFound, .. }));
}

#[test]
fn unmatched_path_without_catch_all_uses_fallback_view() {
    let table = RouteTable::new(vec![Route::leaf("/", ViewId::Home)], ViewId::Error).unwrap();
    let mut nav = Navigator::new(&table);

    assert!(nav.begin("/missing").is_none());

    assert_eq!(nav.state().phase(), Phase::Errored);
    assert_eq!(nav.state().frame(0), Frame::Boundary { view: ViewId::Error, error: None });
    assert_eq!(nav.state().frame(1), Frame::Empty);
}

#[test]
fn loading_frames_show_layout_then_pending() {
    let mut nav = Navigator::new(app_routes());
    nav.begin("/posts/5").unwrap();

    assert_eq!(nav.state().frame(0), Frame::Layout(ViewId::Shell));
    assert_eq!(nav.state().frame(1), Frame::Pending);
    assert_eq!(nav.state().frame(2), Frame::Empty);
}

#[test]
fn rendered_view_frame_carries_params() {
    let mut nav = Navigator::new(app_routes());
    let pending = nav.begin("/posts/5").unwrap();
    let post = Post { id: "5".to_owned(), ..Post::default() };

    nav.settle(pending.id, Ok(vec![None, Some(LoaderData::Post(post))]));

    let Frame::View { params, .. } = nav.state().frame(1) else { panic!("expected view") };
    assert_eq!(params.get("post_id"), Some("5"));
}

// =============================================================
// Stale results
// =============================================================

#[test]
fn navigation_ids_increase() {
    let mut nav = Navigator::new(app_routes());
    let first = nav.begin("/").unwrap().id;
    let second = nav.begin("/").unwrap().id;
    assert!(second > first);
}

#[test]
fn stale_success_never_overwrites_newer_navigation() {
    let mut nav = Navigator::new(app_routes());
    let old = nav.begin("/").unwrap();
    assert!(nav.begin("/register").is_none());
    let before = nav.state().clone();

    assert_eq!(nav.settle(old.id, Ok(posts(&["stale"]))), Settled::Stale);

    assert_eq!(nav.state(), &before);
    assert!(matches!(nav.state().frame(1), Frame::View { view: ViewId::Register, .. }));
}

#[test]
fn stale_result_for_superseded_load_is_dropped_while_newer_load_pending() {
    let mut nav = Navigator::new(app_routes());
    let old = nav.begin("/").unwrap();
    let new = nav.begin("/posts/1").unwrap();

    assert_eq!(nav.settle(old.id, Err(network_failure(1))), Settled::Stale);
    assert_eq!(nav.state().phase(), Phase::Loading);
    assert_eq!(nav.state().id(), Some(new.id));

    let post = Post { id: "1".to_owned(), ..Post::default() };
    assert_eq!(nav.settle(new.id, Ok(vec![None, Some(LoaderData::Post(post))])), Settled::Applied);
    assert_eq!(nav.state().phase(), Phase::Rendered);
}

#[test]
fn settling_twice_is_ignored() {
    let mut nav = Navigator::new(app_routes());
    let pending = nav.begin("/").unwrap();

    assert_eq!(nav.settle(pending.id, Ok(posts(&["a"]))), Settled::Applied);
    let rendered = nav.state().clone();
    assert_eq!(nav.settle(pending.id, Err(network_failure(1))), Settled::Stale);

    assert_eq!(nav.state(), &rendered);
}

#[test]
fn renavigating_to_same_path_restarts_from_idle_machine() {
    let mut nav = Navigator::new(app_routes());
    let first = nav.begin("/").unwrap();
    nav.settle(first.id, Ok(posts(&["a"])));

    let second = nav.begin("/").unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(nav.state().phase(), Phase::Loading);
}

// =============================================================
// End to end with the API client
// =============================================================

#[test]
fn loader_pipeline_against_stub_service() {
    let stub = StubTransport::new().reply(200, r#"{"posts":[{"id":"9","title":"from server"}]}"#);
    let client = client_with(&stub);
    let mut nav = Navigator::new(app_routes());

    let pending = nav.begin("/").unwrap();
    let outcome = block_on(load_chain(&client, &pending.matched));
    nav.settle(pending.id, outcome);

    let Frame::View { data: Some(LoaderData::Posts(list)), .. } = nav.state().frame(1) else {
        panic!("expected posts frame");
    };
    assert_eq!(list.posts[0].title, "from server");
}

#[test]
fn loader_pipeline_renders_boundary_on_server_error() {
    let stub = StubTransport::new().reply(500, "{}");
    let client = client_with(&stub);
    let mut nav = Navigator::new(app_routes());

    let pending = nav.begin("/").unwrap();
    let outcome = block_on(load_chain(&client, &pending.matched));
    nav.settle(pending.id, outcome);

    let Frame::Boundary { view, error: Some(error) } = nav.state().frame(1) else {
        panic!("expected boundary frame");
    };
    assert_eq!(view, ViewId::Error);
    assert_eq!(error.status(), Some(500));
}
