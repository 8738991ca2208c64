use leptos::prelude::*;
use pulse_types::{Glyph, MetricCardConfig, MetricValue, Trend, TrendDirection};

use crate::components::card::Card;
use crate::components::icon::Icon;

/// Arrow glyph and color class for a trend row. Up is positive, everything
/// else is destructive.
pub fn trend_style(direction: TrendDirection) -> (Glyph, &'static str) {
    match direction {
        TrendDirection::Up => (Glyph::ArrowUp, "trend-positive"),
        TrendDirection::Down => (Glyph::ArrowDown, "trend-destructive"),
    }
}

/// Card showing a titled value with an optional trend row and icon badge.
///
/// `color` tints both the value text and the icon glyph; the trend row keeps
/// its own semantic color.
#[component]
pub fn MetricCard(
    #[prop(into)]
    title: String,
    #[prop(into)]
    value: MetricValue,
    #[prop(optional_no_strip)]
    trend: Option<Trend>,
    #[prop(optional_no_strip)]
    icon: Option<Glyph>,
    #[prop(optional_no_strip)]
    color: Option<String>,
) -> impl IntoView {
    let valueStyle = color.as_ref().map(|c| format!("color: {c}"));

    let trendRow = trend.map(|t| {
        let (arrow, trendClass) = trend_style(t.direction);
        view! {
            <div class=format!("metric-card-trend {trendClass}")>
                <Icon glyph=arrow size=14 />
                <span>{t.magnitude_label()}</span>
            </div>
        }
    });

    let iconBadge = icon.map(|glyph| {
        view! {
            <div class="metric-card-icon">
                <Icon glyph=glyph color=color.clone() size=20 />
            </div>
        }
    });

    view! {
        <Card class="metric-card">
            <div class="metric-card-body">
                <div class="metric-card-text">
                    <p class="metric-card-title">{title}</p>
                    <p class="metric-card-value" style=valueStyle>
                        {value.to_string()}
                    </p>
                    {trendRow}
                </div>
                {iconBadge}
            </div>
        </Card>
    }
}

/// Renders a card from its serialized props.
#[component]
pub fn MetricCardFromConfig(config: MetricCardConfig) -> impl IntoView {
    view! {
        <MetricCard
            title=config.title
            value=config.value
            trend=config.trend
            icon=config.icon
            color=config.color
        />
    }
}
