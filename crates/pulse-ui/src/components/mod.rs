pub mod card;
pub mod chart;
pub mod icon;
pub mod metric_card;
pub mod nav;
pub mod radar_chart;
