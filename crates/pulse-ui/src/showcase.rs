use leptos::prelude::*;
use pulse_types::Showcase;

/// Example data provided by the server, or the built-in samples when nothing
/// was provided.
pub fn current_showcase() -> Showcase {
    use_context::<Showcase>().unwrap_or_default()
}

#[server]
pub async fn get_showcase() -> Result<Showcase, ServerFnError> {
    Ok(current_showcase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_types::{MetricCardConfig, MetricValue};

    #[test]
    fn falls_back_to_samples_without_context() {
        let owner = Owner::new();
        owner.with(|| assert_eq!(current_showcase(), Showcase::default()));
    }

    #[test]
    fn provided_showcase_wins() {
        let mut custom = Showcase::default();
        custom.metrics = vec![MetricCardConfig {
            title: "Custom".into(),
            value: MetricValue::Number(7.0),
            trend: None,
            icon: None,
            color: None,
        }];
        custom.radar.title = Some("Configured".into());

        let owner = Owner::new();
        owner.with(|| {
            provide_context(custom.clone());
            assert_eq!(current_showcase(), custom);
        });
    }
}
