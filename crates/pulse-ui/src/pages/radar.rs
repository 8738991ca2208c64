use leptos::prelude::*;
use pulse_types::RadarPoint;

use crate::components::radar_chart::{RadarChart, RadarChartFromConfig};
use crate::showcase::get_showcase;

#[component]
pub fn RadarPage() -> impl IntoView {
    let showcase = Resource::new(|| (), |_| get_showcase());
    let compact = vec![
        RadarPoint::new("Speed", 64.0, 100.0),
        RadarPoint::new("Accuracy", 88.0, 100.0),
        RadarPoint::new("Coverage", 52.0, 100.0),
        RadarPoint::new("Stability", 93.0, 100.0),
        RadarPoint::new("Cost", 70.0, 100.0),
    ];

    view! {
        <div class="page-header">
            <h1>"Radar Chart"</h1>
            <p class="subtitle">"Scores on a fixed 0-100 scale"</p>
        </div>
        <div class="chart-grid">
            <div class="card">
                <Suspense fallback=move || view! { <p class="loading">"Loading examples..."</p> }>
                    {move || {
                        showcase.get().map(|result| match result {
                            Ok(s) => view! { <RadarChartFromConfig config=s.radar /> }.into_any(),
                            Err(e) => view! {
                                <p class="load-error">"Failed to load examples: " {e.to_string()}</p>
                            }
                                .into_any(),
                        })
                    }}
                </Suspense>
            </div>
            <div class="card">
                <RadarChart data=compact height=Some(300) />
            </div>
        </div>
    }
}
