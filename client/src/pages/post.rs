//! Single post page, fed by the post loader.

#[cfg(test)]
#[path = "post_test.rs"]
mod post_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Post;
use crate::routing::table::HOME_PATH;

/// "3 likes · 1 comment" style summary line.
pub fn engagement_summary(post: &Post) -> String {
    format!(
        "{} {} · {} {}",
        post.likes_count,
        plural(post.likes_count, "like", "likes"),
        post.comments_count,
        plural(post.comments_count, "comment", "comments"),
    )
}

fn plural(count: u64, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

#[component]
pub fn PostPage(post: Post) -> impl IntoView {
    let summary = engagement_summary(&post);
    let headline = post.headline().to_owned();
    let body = post.content.clone().filter(|c| !c.trim().is_empty() && *c != headline);
    let posted = post.created_at.clone();

    view! {
        <article class="post-page">
            <h1>{headline}</h1>
            {body.map(|text| view! { <p class="post-page__body">{text}</p> })}
            <p class="post-page__meta">{summary}</p>
            {posted.map(|at| view! { <p class="post-page__date">{at}</p> })}
            <A href=HOME_PATH attr:class="post-page__back">"Back to posts"</A>
        </article>
    }
}
