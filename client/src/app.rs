//! Root application component and the SSR document shell.

use leptos::logging::error;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::Router;

use crate::components::outlet::RouterOutlet;
use crate::config::{API_BASE_META, ApiConfig, BootConfig};
use crate::net::api::ApiClient;
use crate::pages::config_error::ConfigErrorPage;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The resolved API base is published as a `<meta>` tag so the hydrated app
/// reads the same value the host validated at startup.
pub fn shell(options: LeptosOptions, api: ApiConfig) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api.base_url().to_owned()/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the one `ApiClient` for the session and hands it to every page
/// through context. Without a usable API base nothing is routed at all.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let boot = use_context::<BootConfig>().unwrap_or_else(|| BootConfig(ApiConfig::from_document()));
    let body = match boot.0 {
        Ok(config) => {
            provide_context(ApiClient::browser(config));
            view! {
                <Router>
                    <RouterOutlet/>
                </Router>
            }
            .into_any()
        }
        Err(e) => {
            error!("api configuration: {e}");
            view! { <ConfigErrorPage message=e.to_string()/> }.into_any()
        }
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/threads-web.css"/>
        <Title text="Threads"/>
        {body}
    }
}
