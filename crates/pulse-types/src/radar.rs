use serde::{Deserialize, Serialize};

pub const DEFAULT_CHART_HEIGHT: u32 = 400;

/// One axis of a radar chart.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RadarPoint {
    pub category: String,
    pub value: f64,
    /// Nominal maximum for this axis. Carried along with the point, the
    /// radial scale does not use it.
    pub full_mark: f64,
}

impl RadarPoint {
    pub fn new(category: impl Into<String>, value: f64, full_mark: f64) -> Self {
        Self {
            category: category.into(),
            value,
            full_mark,
        }
    }
}

/// Serialized form of the radar chart props.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RadarChartConfig {
    pub data: Vec<RadarPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl RadarChartConfig {
    pub fn height_or_default(&self) -> u32 {
        self.height.unwrap_or(DEFAULT_CHART_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_mark_uses_camel_case_on_the_wire() {
        let point = RadarPoint::new("Speed", 72.0, 100.0);
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["fullMark"], 100.0);
        assert!(json.get("full_mark").is_none());
    }

    #[test]
    fn height_defaults_to_400() {
        let config: RadarChartConfig = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert_eq!(config.height_or_default(), 400);
        assert!(config.title.is_none());

        let config: RadarChartConfig =
            serde_json::from_str(r#"{"data": [], "height": 320}"#).unwrap();
        assert_eq!(config.height_or_default(), 320);
    }
}
