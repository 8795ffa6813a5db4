//! Application shell: navigation chrome around the routed content.

use leptos::prelude::*;

use crate::components::navbar::{DesktopNavbar, MobileNavbarTop};

/// Always-mounted frame. Holds no data and never navigates on its own.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="shell">
            <div class="shell__backdrop"></div>
            <header class="shell__header">
                <DesktopNavbar/>
                <MobileNavbarTop/>
            </header>
            <main class="shell__content">{children()}</main>
        </div>
    }
}
