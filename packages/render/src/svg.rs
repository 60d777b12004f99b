//! SVG reference surface.
//!
//! A [`MapSurface`] implementation that draws the heat and marker layers
//! into a self-contained SVG, projected equirectangularly into the last
//! fitted bounds. No tiles are drawn; the snapshot exists to eyeball the
//! layer output without a browser.

use std::fmt::Write as _;

use crate::geometry::{BoundingBox, CircleMarker, HeatPoint};
use crate::surface::{HeatOverlayConfig, MapConfig, MapSurface};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 800.0;
const PADDING: f64 = 40.0;

/// Records layer state and serializes it to SVG.
#[derive(Debug, Default)]
pub struct SvgSurface {
    heat_points: Vec<HeatPoint>,
    markers: Vec<CircleMarker>,
    bounds: Option<BoundingBox>,
    heat_radius: f64,
    min_opacity: f64,
}

impl SvgSurface {
    /// Creates an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn project(&self, latitude: f64, longitude: f64) -> (f64, f64) {
        let Some(b) = self.bounds else {
            return (WIDTH / 2.0, HEIGHT / 2.0);
        };
        let span_x = (b.east - b.west).max(f64::EPSILON);
        let span_y = (b.north - b.south).max(f64::EPSILON);
        let x = PADDING + (longitude - b.west) / span_x * (WIDTH - 2.0 * PADDING);
        let y = PADDING + (b.north - latitude) / span_y * (HEIGHT - 2.0 * PADDING);
        (x, y)
    }

    /// Serializes the current layer state to a standalone SVG document.
    ///
    /// Heat points are drawn as blurred translucent discs under the
    /// marker layer, opacity scaled by intensity but floored at the
    /// configured minimum.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut s = String::with_capacity(1 << 16);
        let _ = writeln!(
            s,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{HEIGHT}\" \
             viewBox=\"0 0 {WIDTH} {HEIGHT}\">\n\
             <title>Safe Commute crime snapshot</title>"
        );
        s.push_str("  <rect width='100%' height='100%' fill='#f4f4f2'/>\n");

        s.push_str("  <g>\n");
        for point in &self.heat_points {
            let (x, y) = self.project(point.latitude, point.longitude);
            let opacity = point.intensity.max(self.min_opacity);
            let _ = writeln!(
                s,
                "    <circle cx='{x:.1}' cy='{y:.1}' r='{:.1}' fill='#e2543e' opacity='{opacity:.2}'/>",
                self.heat_radius
            );
        }
        s.push_str("  </g>\n");

        s.push_str("  <g stroke-width='1'>\n");
        for marker in &self.markers {
            let (x, y) = self.project(marker.latitude, marker.longitude);
            let _ = writeln!(
                s,
                "    <circle cx='{x:.1}' cy='{y:.1}' r='{:.1}' stroke='{}' fill='{}' fill-opacity='{:.1}'/>",
                marker.radius, marker.color, marker.color, marker.fill_opacity
            );
        }
        s.push_str("  </g>\n");

        s.push_str("</svg>\n");
        s
    }
}

impl MapSurface for SvgSurface {
    fn configure(&mut self, _map: &MapConfig, heat: &HeatOverlayConfig) {
        self.heat_radius = heat.radius;
        self.min_opacity = heat.min_opacity;
    }

    fn set_heat_points(&mut self, points: Vec<HeatPoint>) {
        self.heat_points = points;
    }

    fn clear_markers(&mut self) {
        self.markers.clear();
    }

    fn add_marker(&mut self, marker: CircleMarker) {
        self.markers.push(marker);
    }

    fn fit_bounds(&mut self, bounds: BoundingBox) {
        self.bounds = Some(bounds);
    }
}
