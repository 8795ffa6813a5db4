//! Home page listing post titles from the home loader.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::{Post, PostList};

/// Link target for a post's own page.
pub fn post_href(post: &Post) -> String {
    format!("/posts/{}", post.id)
}

#[component]
pub fn HomePage(posts: PostList) -> impl IntoView {
    let empty = posts.posts.is_empty();
    let rows = posts
        .posts
        .into_iter()
        .map(|post| {
            let href = post_href(&post);
            let headline = post.headline().to_owned();
            view! {
                <li class="post-list__item">
                    <A href=href>{headline}</A>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="home-page">
            <h1>"Home"</h1>
            <Show when=move || empty>
                <p class="home-page__empty">"No posts yet."</p>
            </Show>
            <ul class="post-list">{rows}</ul>
        </section>
    }
}
