use leptos::prelude::*;

/// Full-width box of fixed pixel height; the SVG inside scales to fit it.
#[component]
pub fn ResponsiveContainer(height: u32, children: Children) -> impl IntoView {
    view! {
        <div class="chart-container" style=format!("width: 100%; height: {height}px")>
            {children()}
        </div>
    }
}
