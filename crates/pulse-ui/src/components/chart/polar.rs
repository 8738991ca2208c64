/// Radial scale domain. Fixed for every chart, independent of per-point
/// maxima.
pub const RADIAL_DOMAIN: [f64; 2] = [0.0, 100.0];

/// Ticks drawn on the radius axis and used for the grid rings.
pub const RADIUS_TICK_COUNT: usize = 5;

/// First axis sits at 12 o'clock; the rest follow clockwise.
pub const START_ANGLE: f64 = 90.0;

pub const OUTER_RADIUS_RATIO: f64 = 0.8;

/// Center and outer radius of a polar plot in SVG user units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarFrame {
    pub cx: f64,
    pub cy: f64,
    pub outer_radius: f64,
}

impl PolarFrame {
    pub fn new(width: f64, height: f64) -> Self {
        let halfExtent = width.min(height) / 2.0;
        Self {
            cx: width / 2.0,
            cy: height / 2.0,
            outer_radius: halfExtent * OUTER_RADIUS_RATIO,
        }
    }

    /// Cartesian position for `angle` degrees (counter-clockwise from 3
    /// o'clock) at `radius`. SVG y grows downward.
    pub fn point(&self, angle: f64, radius: f64) -> (f64, f64) {
        let rad = angle.to_radians();
        (self.cx + radius * rad.cos(), self.cy - radius * rad.sin())
    }

    /// `points` attribute for a polygon with one vertex per `(angle, radius)`.
    pub fn polygon<I>(&self, vertices: I) -> String
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        vertices
            .into_iter()
            .map(|(angle, radius)| {
                let (x, y) = self.point(angle, radius);
                format!("{x:.2},{y:.2}")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub fn axis_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return START_ANGLE;
    }
    START_ANGLE - 360.0 * index as f64 / count as f64
}

pub fn radius_ticks() -> Vec<f64> {
    let [low, high] = RADIAL_DOMAIN;
    let step = (high - low) / (RADIUS_TICK_COUNT - 1) as f64;
    (0..RADIUS_TICK_COUNT).map(|i| low + step * i as f64).collect()
}

/// Linear map of [`RADIAL_DOMAIN`] onto `[0, outer]`. Values above the domain
/// plot past the outer ring; values below it sit at the center.
pub fn scale_radius(value: f64, outer: f64) -> f64 {
    let [low, high] = RADIAL_DOMAIN;
    let ratio = (value - low) / (high - low);
    if ratio.is_nan() {
        return 0.0;
    }
    ratio.max(0.0) * outer
}

pub fn text_anchor(angle: f64) -> &'static str {
    let cos = angle.to_radians().cos();
    if cos.abs() <= 1e-5 {
        "middle"
    } else if cos > 0.0 {
        "start"
    } else {
        "end"
    }
}
