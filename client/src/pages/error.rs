//! Error-boundary view.

use leptos::prelude::*;

/// Generic failure message. Technical details stay in the console log.
#[component]
pub fn ErrorPage(status: Option<u16>) -> impl IntoView {
    view! {
        <section class="error-page">
            <h1>"Something went wrong"</h1>
            <p>"Sorry, an unexpected error occurred."</p>
            {status.map(|code| view! { <p class="error-page__status">{format!("Status {code}")}</p> })}
        </section>
    }
}
