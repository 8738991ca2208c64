use leptos::prelude::*;

use super::polar::{axis_angle, radius_ticks, scale_radius, text_anchor, PolarFrame, RADIAL_DOMAIN};

pub const ANGLE_TICK_FONT_SIZE: u32 = 12;
pub const RADIUS_TICK_FONT_SIZE: u32 = 10;

/// Gap between the outer ring and a category label.
const ANGLE_LABEL_OFFSET: f64 = 8.0;

/// One label per category, spaced evenly around the circle in input order.
#[component]
pub fn PolarAngleAxis(frame: PolarFrame, categories: Vec<String>) -> impl IntoView {
    let count = categories.len();

    view! {
        <g class="radar-angle-axis">
            {categories
                .into_iter()
                .enumerate()
                .map(|(i, category)| {
                    let angle = axis_angle(i, count);
                    let (x, y) = frame.point(angle, frame.outer_radius + ANGLE_LABEL_OFFSET);
                    view! {
                        <text
                            class="radar-angle-tick"
                            x=format!("{x:.2}")
                            y=format!("{y:.2}")
                            text-anchor=text_anchor(angle)
                            dominant-baseline="central"
                            font-size=ANGLE_TICK_FONT_SIZE.to_string()
                        >
                            {category}
                        </text>
                    }
                })
                .collect_view()}
        </g>
    }
}

/// Radius axis drawn along a single fixed `angle`, labeled over
/// [`RADIAL_DOMAIN`].
#[component]
pub fn PolarRadiusAxis(frame: PolarFrame, angle: f64) -> impl IntoView {
    let [low, high] = RADIAL_DOMAIN;
    let (endX, endY) = frame.point(angle, frame.outer_radius);

    view! {
        <g class="radar-radius-axis" data-domain=format!("{low},{high}")>
            <line
                class="radar-radius-line"
                x1=format!("{:.2}", frame.cx)
                y1=format!("{:.2}", frame.cy)
                x2=format!("{endX:.2}")
                y2=format!("{endY:.2}")
            />
            {radius_ticks()
                .into_iter()
                .map(|tick| {
                    let (x, y) = frame.point(angle, scale_radius(tick, frame.outer_radius));
                    view! {
                        <text
                            class="radar-radius-tick"
                            x=format!("{x:.2}")
                            y=format!("{y:.2}")
                            text-anchor="middle"
                            font-size=RADIUS_TICK_FONT_SIZE.to_string()
                        >
                            {tick.to_string()}
                        </text>
                    }
                })
                .collect_view()}
        </g>
    }
}
