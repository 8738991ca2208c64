use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn Nav() -> impl IntoView {
    let pathname = use_location().pathname;
    let itemClass = move |path: &'static str| {
        move || {
            if pathname.get() == path {
                "nav-item active"
            } else {
                "nav-item"
            }
        }
    };

    view! {
        <nav class="nav-sidebar">
            <div class="nav-brand">
                <div class="brand-icon">"P"</div>
                <span class="brand-text">"Pulse"</span>
            </div>
            <ul class="nav-links">
                <li class=itemClass("/")>
                    <a href="/">
                        <span class="nav-icon">"\u{25A3}"</span>
                        <span>"Metric Cards"</span>
                    </a>
                </li>
                <li class=itemClass("/radar")>
                    <a href="/radar">
                        <span class="nav-icon">"\u{2B21}"</span>
                        <span>"Radar Chart"</span>
                    </a>
                </li>
            </ul>
        </nav>
    }
}
