//! Rendered instead of the router when the API base URL did not resolve.

use leptos::prelude::*;

#[component]
pub fn ConfigErrorPage(message: String) -> impl IntoView {
    view! {
        <section class="error-page error-page--config">
            <h1>"Configuration error"</h1>
            <p>"The application is not configured to reach its server."</p>
            <pre class="error-page__detail">{message}</pre>
        </section>
    }
}
