use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Value shown on a metric card: a plain number or pre-formatted text.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Number(n) => write!(f, "{n}"),
            MetricValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Number(value)
    }
}

impl From<i32> for MetricValue {
    fn from(value: i32) -> Self {
        MetricValue::Number(value.into())
    }
}

impl From<u32> for MetricValue {
    fn from(value: u32) -> Self {
        MetricValue::Number(value.into())
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        MetricValue::Text(value.to_string())
    }
}

impl From<String> for MetricValue {
    fn from(value: String) -> Self {
        MetricValue::Text(value)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid trend direction {0:?}, expected \"up\" or \"down\"")]
pub struct ParseDirectionError(pub String);

impl FromStr for TrendDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(TrendDirection::Up),
            "down" => Ok(TrendDirection::Down),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

/// Percentage change shown under a metric value.
///
/// The sign of `value` is not tied to `direction`; only its magnitude is
/// displayed.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Trend {
    pub value: f64,
    pub direction: TrendDirection,
}

impl Trend {
    pub fn up(value: f64) -> Self {
        Self {
            value,
            direction: TrendDirection::Up,
        }
    }

    pub fn down(value: f64) -> Self {
        Self {
            value,
            direction: TrendDirection::Down,
        }
    }

    /// Absolute magnitude with a percent suffix, e.g. `-12.5` -> `12.5%`.
    pub fn magnitude_label(&self) -> String {
        format!("{}%", self.value.abs())
    }
}

/// Named icon glyphs available to cards and trend rows.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    ArrowUp,
    ArrowDown,
    Users,
    DollarSign,
    Activity,
    ShoppingCart,
    Target,
    Clock,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown glyph {0:?}")]
pub struct ParseGlyphError(pub String);

impl Glyph {
    pub const ALL: [Glyph; 8] = [
        Glyph::ArrowUp,
        Glyph::ArrowDown,
        Glyph::Users,
        Glyph::DollarSign,
        Glyph::Activity,
        Glyph::ShoppingCart,
        Glyph::Target,
        Glyph::Clock,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Glyph::ArrowUp => "arrow-up",
            Glyph::ArrowDown => "arrow-down",
            Glyph::Users => "users",
            Glyph::DollarSign => "dollar-sign",
            Glyph::Activity => "activity",
            Glyph::ShoppingCart => "shopping-cart",
            Glyph::Target => "target",
            Glyph::Clock => "clock",
        }
    }
}

impl FromStr for Glyph {
    type Err = ParseGlyphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Glyph::ALL
            .into_iter()
            .find(|g| g.name() == s)
            .ok_or_else(|| ParseGlyphError(s.to_string()))
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Serialized form of the metric card props.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MetricCardConfig {
    pub title: String,
    pub value: MetricValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Glyph>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}
