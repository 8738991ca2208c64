use leptos::prelude::*;
use pulse_types::RadarPoint;

use super::polar::{axis_angle, scale_radius, PolarFrame};

pub const SERIES_COLOR: &str = "#6366f1";
pub const FILL_OPACITY: f64 = 0.6;
pub const STROKE_WIDTH: u32 = 2;

/// Filled polygon through every point's `value`, one vertex per axis.
#[component]
pub fn RadarSeries(
    frame: PolarFrame,
    #[prop(into)]
    name: String,
    points: Vec<RadarPoint>,
) -> impl IntoView {
    let count = points.len();
    let outline = (count > 0).then(|| {
        frame.polygon(
            points
                .iter()
                .enumerate()
                .map(|(i, p)| (axis_angle(i, count), scale_radius(p.value, frame.outer_radius))),
        )
    });

    let vertices = points
        .into_iter()
        .enumerate()
        .map(|(i, point)| {
            let (x, y) = frame.point(axis_angle(i, count), scale_radius(point.value, frame.outer_radius));
            view! {
                <circle
                    class="radar-vertex"
                    cx=format!("{x:.2}")
                    cy=format!("{y:.2}")
                    r="3"
                    fill=SERIES_COLOR
                    data-category=point.category
                    data-value=point.value.to_string()
                    data-full-mark=point.full_mark.to_string()
                />
            }
        })
        .collect_view();

    view! {
        <g class="radar-series" data-series=name.clone() aria-label=name>
            {outline
                .map(|points| {
                    view! {
                        <polygon
                            class="radar-area"
                            points=points
                            stroke=SERIES_COLOR
                            stroke-width=STROKE_WIDTH.to_string()
                            fill=SERIES_COLOR
                            fill-opacity=FILL_OPACITY.to_string()
                        />
                    }
                })}
            {vertices}
        </g>
    }
}
