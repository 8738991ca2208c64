use leptos::prelude::*;
use pulse_types::{RadarChartConfig, RadarPoint, DEFAULT_CHART_HEIGHT};

use crate::components::chart::{
    PolarAngleAxis, PolarFrame, PolarGrid, PolarRadiusAxis, RadarSeries, ResponsiveContainer,
};

pub const SERIES_NAME: &str = "Score";

/// Direction, in degrees, along which the radius axis and its ticks are drawn.
pub const RADIUS_AXIS_ANGLE: f64 = 30.0;

/// Logical width of the plot; the SVG is scaled to the container.
const VIEW_WIDTH: f64 = 600.0;

/// Radar plot of one "Score" series over the given categories.
///
/// Axis order follows `data`. The radius scale is always 0..=100; each
/// point's `full_mark` is carried on its vertex but does not change the scale.
#[component]
pub fn RadarChart(
    data: Vec<RadarPoint>,
    #[prop(optional_no_strip)]
    title: Option<String>,
    /// Pixel height of the plot area, 400 when omitted
    #[prop(optional_no_strip)]
    height: Option<u32>,
) -> impl IntoView {
    let chartHeight = height.unwrap_or(DEFAULT_CHART_HEIGHT);
    let frame = PolarFrame::new(VIEW_WIDTH, f64::from(chartHeight));
    let axes = data.len();
    let categories: Vec<String> = data.iter().map(|p| p.category.clone()).collect();

    view! {
        <div class="radar-chart">
            {title.map(|t| view! { <h3 class="chart-title">{t}</h3> })}
            <ResponsiveContainer height=chartHeight>
                <svg
                    class="radar-plot"
                    width="100%"
                    height="100%"
                    viewBox=format!("0 0 {VIEW_WIDTH} {chartHeight}")
                    overflow="visible"
                >
                    <PolarGrid frame=frame axes=axes />
                    <PolarAngleAxis frame=frame categories=categories />
                    <PolarRadiusAxis frame=frame angle=RADIUS_AXIS_ANGLE />
                    <RadarSeries frame=frame name=SERIES_NAME points=data />
                </svg>
            </ResponsiveContainer>
        </div>
    }
}

/// Renders a chart from its serialized props.
#[component]
pub fn RadarChartFromConfig(config: RadarChartConfig) -> impl IntoView {
    let height = config.height_or_default();
    view! { <RadarChart data=config.data title=config.title height=Some(height) /> }
}
