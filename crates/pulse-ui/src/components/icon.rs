use leptos::prelude::*;
use pulse_types::Glyph;

/// Stroke paths for each glyph, drawn on a 24x24 grid.
fn glyph_paths(glyph: Glyph) -> &'static [&'static str] {
    match glyph {
        Glyph::ArrowUp => &["m5 12 7-7 7 7", "M12 19V5"],
        Glyph::ArrowDown => &["M12 5v14", "m19 12-7 7-7-7"],
        Glyph::Users => &[
            "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
            "M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8",
            "M22 21v-2a4 4 0 0 0-3-3.87",
            "M16 3.13a4 4 0 0 1 0 7.75",
        ],
        Glyph::DollarSign => &["M12 2v20", "M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"],
        Glyph::Activity => &["M22 12h-4l-3 9L9 3l-3 9H2"],
        Glyph::ShoppingCart => &[
            "M2 2h3l2.7 12.4a2 2 0 0 0 2 1.6h8.7a2 2 0 0 0 2-1.6L22 6H6",
            "M8 21a1 1 0 1 0 2 0a1 1 0 1 0-2 0",
            "M19 21a1 1 0 1 0 2 0a1 1 0 1 0-2 0",
        ],
        Glyph::Target => &[
            "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
            "M6 12a6 6 0 1 0 12 0a6 6 0 1 0-12 0",
            "M10 12a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
        ],
        Glyph::Clock => &["M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0", "M12 6v6l4 2"],
    }
}

/// Inline SVG icon. Strokes use `currentColor`, so `color` (or the
/// surrounding text color) tints the glyph.
#[component]
pub fn Icon(
    glyph: Glyph,
    /// CSS color override
    #[prop(optional_no_strip)]
    color: Option<String>,
    #[prop(default = 16)]
    size: u32,
) -> impl IntoView {
    let name = glyph.name();
    let style = color.map(|c| format!("color: {c}"));

    view! {
        <svg
            class=format!("icon icon-{name}")
            data-glyph=name
            width=size.to_string()
            height=size.to_string()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            style=style
        >
            {glyph_paths(glyph).iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}
