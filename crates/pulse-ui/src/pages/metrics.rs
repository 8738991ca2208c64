use leptos::prelude::*;
use pulse_types::{Glyph, MetricCardConfig, Trend};

use crate::components::metric_card::{MetricCard, MetricCardFromConfig};
use crate::showcase::get_showcase;

#[component]
pub fn MetricsPage() -> impl IntoView {
    let showcase = Resource::new(|| (), |_| get_showcase());

    view! {
        <div class="page-header">
            <h1>"Metric Cards"</h1>
            <p class="subtitle">"Values with optional trend, icon and color"</p>
        </div>
        <Suspense fallback=move || view! { <p class="loading">"Loading examples..."</p> }>
            {move || {
                showcase.get().map(|result| match result {
                    Ok(s) => view! { <MetricGrid metrics=s.metrics /> }.into_any(),
                    Err(e) => view! {
                        <p class="load-error">"Failed to load examples: " {e.to_string()}</p>
                    }
                        .into_any(),
                })
            }}
        </Suspense>

        <div class="page-header">
            <h2>"Variants"</h2>
        </div>
        <div class="metric-grid">
            <MetricCard title="Conversion" value="3.2%" />
            <MetricCard
                title="Bounce Rate"
                value=41.7
                trend=Some(Trend::down(-12.5))
            />
            <MetricCard
                title="Goal Progress"
                value="78 / 100"
                trend=Some(Trend::up(5.0))
                icon=Some(Glyph::Target)
                color=Some("#f59e0b".to_string())
            />
            <MetricCard
                title="Carts"
                value=212
                icon=Some(Glyph::ShoppingCart)
            />
        </div>
    }
}

#[component]
pub fn MetricGrid(metrics: Vec<MetricCardConfig>) -> impl IntoView {
    view! {
        <div class="metric-grid">
            {metrics
                .into_iter()
                .map(|config| view! { <MetricCardFromConfig config=config /> })
                .collect_view()}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use pulse_types::{sample_metrics, MetricValue};

    #[test]
    fn grid_renders_every_configured_card() {
        let mut metrics = sample_metrics();
        metrics.push(MetricCardConfig {
            title: "From File".into(),
            value: MetricValue::Text("42 units".into()),
            trend: None,
            icon: None,
            color: None,
        });
        let count = metrics.len();

        let html = view! { <MetricGrid metrics=metrics /> }.to_html();
        assert_eq!(html.matches("metric-card-title").count(), count);
        assert!(html.contains("From File"));
        assert!(html.contains("42 units"));
    }
}
