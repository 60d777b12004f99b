//! The map surface capability bundle.
//!
//! The map widget, heat layer, and marker layer are exclusive resources
//! of the renderer. This module defines the trait through which the
//! renderer drives them, plus the fixed initialization parameters.

use crate::geometry::{BoundingBox, CircleMarker, HeatPoint};

/// Where the zoom control is anchored on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomControlPosition {
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}

/// Base map initialization parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    /// Initial centre as `(latitude, longitude)`.
    pub center: (f64, f64),
    /// Initial zoom level.
    pub zoom: u8,
    /// Maximum zoom level of the tile source.
    pub max_zoom: u8,
    /// Zoom control anchor.
    pub zoom_control: ZoomControlPosition,
    /// Tile URL template.
    pub tile_url: &'static str,
    /// Tile source attribution.
    pub attribution: &'static str,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            // Manhattan centre
            center: (40.7831, -73.9712),
            zoom: 12,
            max_zoom: 19,
            zoom_control: ZoomControlPosition::TopRight,
            tile_url: "https://{s}.basemaps.cartocdn.com/light_nolabels/{z}/{x}/{y}{r}.png",
            attribution: "\u{a9} OpenStreetMap contributors & \u{a9} CartoDB",
        }
    }
}

/// Heat overlay initialization parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatOverlayConfig {
    /// Point radius in pixels.
    pub radius: f64,
    /// Blur in pixels.
    pub blur: f64,
    /// Zoom level at which points reach maximum intensity.
    pub max_zoom: u8,
    /// Saturation ceiling.
    pub max: f64,
    /// Minimum opacity of the overlay.
    pub min_opacity: f64,
    /// Gradient stops as `(offset, colour)` pairs.
    pub gradient: &'static [(f64, &'static str)],
}

impl Default for HeatOverlayConfig {
    fn default() -> Self {
        Self {
            radius: 20.0,
            blur: 25.0,
            max_zoom: 17,
            max: 0.5,
            min_opacity: 0.5,
            gradient: &[(0.2, "blue"), (0.4, "lime"), (0.6, "yellow"), (0.8, "red")],
        }
    }
}

/// Capability bundle over the map widget and its two layers.
///
/// Implementations are owned exclusively by the renderer for its
/// lifetime; nothing else mutates the layers.
pub trait MapSurface {
    /// Applies the fixed map and heat overlay parameters. Called once at
    /// renderer construction.
    fn configure(&mut self, map: &MapConfig, heat: &HeatOverlayConfig);

    /// Replaces the heat layer's point set in one assignment.
    fn set_heat_points(&mut self, points: Vec<HeatPoint>);

    /// Removes every marker from the marker layer.
    fn clear_markers(&mut self);

    /// Adds one circle marker to the marker layer.
    fn add_marker(&mut self, marker: CircleMarker);

    /// Reframes the viewport to the given bounds.
    fn fit_bounds(&mut self, bounds: BoundingBox);
}
