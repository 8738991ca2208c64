use serde::{Deserialize, Serialize};

use crate::{Glyph, MetricCardConfig, MetricValue, RadarChartConfig, RadarPoint, Trend};

/// Example usages of both components, shared by the pages and the API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Showcase {
    pub metrics: Vec<MetricCardConfig>,
    pub radar: RadarChartConfig,
}

impl Default for Showcase {
    fn default() -> Self {
        Self {
            metrics: sample_metrics(),
            radar: sample_radar(),
        }
    }
}

pub fn sample_metrics() -> Vec<MetricCardConfig> {
    vec![
        MetricCardConfig {
            title: "Total Users".into(),
            value: MetricValue::Number(1234.0),
            trend: Some(Trend::up(12.5)),
            icon: Some(Glyph::Users),
            color: None,
        },
        MetricCardConfig {
            title: "Revenue".into(),
            value: MetricValue::Text("$45,231".into()),
            trend: Some(Trend::down(-4.2)),
            icon: Some(Glyph::DollarSign),
            color: Some("#22c55e".into()),
        },
        MetricCardConfig {
            title: "Active Sessions".into(),
            value: MetricValue::Number(573.0),
            trend: Some(Trend::up(8.1)),
            icon: Some(Glyph::Activity),
            color: Some("#6366f1".into()),
        },
        MetricCardConfig {
            title: "Avg. Response".into(),
            value: MetricValue::Text("182 ms".into()),
            trend: None,
            icon: Some(Glyph::Clock),
            color: None,
        },
        MetricCardConfig {
            title: "Orders".into(),
            value: MetricValue::Number(89.0),
            trend: Some(Trend::down(2.0)),
            icon: None,
            color: None,
        },
    ]
}

pub fn sample_radar() -> RadarChartConfig {
    RadarChartConfig {
        title: Some("Skill Assessment".into()),
        height: None,
        data: vec![
            RadarPoint::new("Strategy", 86.0, 100.0),
            RadarPoint::new("Execution", 72.0, 100.0),
            RadarPoint::new("Communication", 91.0, 100.0),
            RadarPoint::new("Leadership", 68.0, 100.0),
            RadarPoint::new("Innovation", 79.0, 100.0),
            RadarPoint::new("Collaboration", 88.0, 100.0),
            RadarPoint::new("Analytics", 74.0, 100.0),
            RadarPoint::new("Adaptability", 83.0, 100.0),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_radar_has_eight_axes() {
        let radar = sample_radar();
        assert_eq!(radar.data.len(), 8);
        assert_eq!(radar.data[0].category, "Strategy");
        assert_eq!(radar.height_or_default(), 400);
    }

    #[test]
    fn showcase_serializes_with_wire_names() {
        let json = serde_json::to_value(Showcase::default()).unwrap();
        assert_eq!(json["metrics"][0]["icon"], "users");
        assert_eq!(json["metrics"][0]["trend"]["direction"], "up");
        assert_eq!(json["radar"]["data"][2]["fullMark"], 100.0);
        assert!(json["metrics"][3].get("trend").is_none());
    }
}
