//! Static navigation bars. Only the mobile bar is visible below the desktop
//! breakpoint and vice versa; the switch is pure CSS.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routing::table::{HOME_PATH, LOGIN_PATH, REGISTER_PATH};

/// Narrow vertical rail pinned to the left edge.
#[component]
pub fn DesktopNavbar() -> impl IntoView {
    view! {
        <nav class="navbar navbar--desktop">
            <A href=HOME_PATH attr:class="navbar__brand">"T"</A>
            <div class="navbar__links">
                <A href=LOGIN_PATH attr:class="navbar__link">"Log In"</A>
                <A href=REGISTER_PATH attr:class="navbar__link">"Register"</A>
            </div>
        </nav>
    }
}

/// Full-width bar pinned to the top on small screens.
#[component]
pub fn MobileNavbarTop() -> impl IntoView {
    view! {
        <nav class="navbar navbar--mobile">
            <div class="navbar__inner">
                <A href=HOME_PATH attr:class="navbar__brand">"Threads"</A>
            </div>
        </nav>
    }
}
