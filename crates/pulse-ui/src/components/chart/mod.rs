//! SVG building blocks for polar charts.
//!
//! Each piece draws into a shared [`polar::PolarFrame`] so a chart can stack
//! grid, axes and series inside one `<svg>`.

pub mod axis;
pub mod container;
pub mod grid;
pub mod polar;
pub mod series;

pub use axis::{PolarAngleAxis, PolarRadiusAxis};
pub use container::ResponsiveContainer;
pub use grid::PolarGrid;
pub use polar::PolarFrame;
pub use series::RadarSeries;
