//! Bridge between the location signal and the navigation state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! `leptos_router` owns history, the location signal and `<A>` links. This
//! outlet owns everything else: matching, loader invocation, stale-result
//! handling and error-boundary selection all go through `Navigator`.
//!
//! DESIGN
//! ======
//! The initial path is matched during render so SSR and the first hydrated
//! render agree. Loaders only ever run from the effect, which never fires on
//! the server. Each nesting depth renders through its own `Memo` of the
//! derived frame, so a depth whose frame is unchanged (the shell, normally)
//! is not rebuilt when a deeper one changes.

use leptos::logging::{error, log, warn};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::layout::Shell;
use crate::net::api::ApiClient;
use crate::pages::error::ErrorPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::post::PostPage;
use crate::pages::register::RegisterPage;
use crate::routing::loaders::{LoadError, LoaderData, load_chain};
use crate::routing::navigation::{Frame, NavigationState, Navigator, PendingLoad, Settled};
use crate::routing::table::{ViewId, app_routes};

type OutletState = RwSignal<NavigationState<'static>>;

/// Renders the matched route chain for the current location.
#[component]
pub fn RouterOutlet() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let location = use_location();

    let mut navigator = Navigator::new(app_routes());
    let initial = navigator.begin(&location.pathname.get_untracked());
    let state: OutletState = RwSignal::new(navigator.state().clone());
    let navigator = StoredValue::new(navigator);
    let initial = StoredValue::new(initial);
    provide_context(state);

    Effect::new(move |prev: Option<String>| {
        let path = location.pathname.get();
        let pending = match prev {
            None => initial.try_update_value(Option::take).flatten(),
            Some(prev) if prev == path => return path,
            Some(_) => navigator
                .try_update_value(|nav| {
                    let pending = nav.begin(&path);
                    state.set(nav.state().clone());
                    pending
                })
                .flatten(),
        };
        if let Some(pending) = pending {
            spawn_load(client.clone(), navigator, state, pending);
        }
        path
    });

    view! { <OutletLevel depth=0/> }
}

fn spawn_load(
    client: ApiClient,
    navigator: StoredValue<Navigator<'static>>,
    state: OutletState,
    pending: PendingLoad<'static>,
) {
    leptos::task::spawn_local(async move {
        let PendingLoad { id, matched } = pending;
        let outcome = load_chain(&client, &matched).await;
        if let Err(failure) = &outcome {
            warn!("loader at depth {} failed: {}", failure.depth, failure.error);
        }
        let settled = navigator.try_update_value(|nav| {
            let settled = nav.settle(id, outcome);
            if settled == Settled::Applied {
                state.set(nav.state().clone());
            }
            settled
        });
        if settled == Some(Settled::Stale) {
            log!("dropping stale loader result for {id:?}");
        }
    });
}

#[component]
fn OutletLevel(depth: usize) -> impl IntoView {
    let state = expect_context::<OutletState>();
    let frame = Memo::new(move |_| state.with(|s| s.frame(depth)));
    move || render_frame(frame.get(), depth)
}

fn render_frame(frame: Frame, depth: usize) -> AnyView {
    match frame {
        Frame::Empty => ().into_any(),
        Frame::Pending => view! { <p class="outlet-pending">"Loading..."</p> }.into_any(),
        Frame::Layout(view) => render_layout(view, depth),
        Frame::View { view, data, .. } => render_view(view, data, depth),
        Frame::Boundary { view, error } => render_boundary(view, error.as_ref(), depth),
    }
}

fn render_layout(view: ViewId, depth: usize) -> AnyView {
    match view {
        ViewId::Shell => view! {
            <Shell>
                <OutletLevel depth=depth + 1/>
            </Shell>
        }
        .into_any(),
        other => render_view(other, None, depth),
    }
}

fn render_view(view: ViewId, data: Option<LoaderData>, depth: usize) -> AnyView {
    match (view, data) {
        (ViewId::Shell, _) => render_layout(ViewId::Shell, depth),
        (ViewId::Home, Some(LoaderData::Posts(posts))) => view! { <HomePage posts=posts/> }.into_any(),
        (ViewId::Post, Some(LoaderData::Post(post))) => view! { <PostPage post=post/> }.into_any(),
        (ViewId::Register, _) => view! { <RegisterPage/> }.into_any(),
        (ViewId::Login, _) => view! { <LoginPage/> }.into_any(),
        (ViewId::NotFound, _) => view! { <NotFoundPage/> }.into_any(),
        (ViewId::Error, _) => view! { <ErrorPage status=None/> }.into_any(),
        (view, _) => {
            error!("view {view:?} rendered without its loader data");
            view! { <ErrorPage status=None/> }.into_any()
        }
    }
}

fn render_boundary(view: ViewId, error: Option<&LoadError>, depth: usize) -> AnyView {
    match view {
        ViewId::Error => view! { <ErrorPage status=error.and_then(LoadError::status)/> }.into_any(),
        other => render_view(other, None, depth),
    }
}
