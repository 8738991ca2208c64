use leptos::prelude::*;

use super::polar::{axis_angle, radius_ticks, scale_radius, PolarFrame};

/// Concentric polygons at every radius tick plus one spoke per axis.
#[component]
pub fn PolarGrid(frame: PolarFrame, axes: usize) -> impl IntoView {
    if axes == 0 {
        return view! { <g class="radar-grid"></g> }.into_any();
    }

    let rings = radius_ticks()
        .into_iter()
        .filter(|tick| *tick > 0.0)
        .map(|tick| {
            let radius = scale_radius(tick, frame.outer_radius);
            let points = frame.polygon((0..axes).map(|i| (axis_angle(i, axes), radius)));
            view! { <polygon class="radar-grid-ring" points=points fill="none" /> }
        })
        .collect_view();

    let spokes = (0..axes)
        .map(|i| {
            let (x, y) = frame.point(axis_angle(i, axes), frame.outer_radius);
            view! {
                <line
                    class="radar-grid-spoke"
                    x1=format!("{:.2}", frame.cx)
                    y1=format!("{:.2}", frame.cy)
                    x2=format!("{x:.2}")
                    y2=format!("{y:.2}")
                />
            }
        })
        .collect_view();

    view! {
        <g class="radar-grid">
            {rings}
            {spokes}
        </g>
    }
    .into_any()
}
