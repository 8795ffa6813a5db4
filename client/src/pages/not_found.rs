use leptos::prelude::*;
use leptos_router::components::A;

use crate::routing::table::HOME_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found-page">
            <h1>"Page not found"</h1>
            <p>"There is nothing at this address."</p>
            <A href=HOME_PATH>"Go home"</A>
        </section>
    }
}
