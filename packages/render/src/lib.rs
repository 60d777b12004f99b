#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Heat-map renderer for the safe-commute client.
//!
//! The renderer does not draw tiles itself; it owns a [`MapSurface`]
//! capability bundle (heat layer, marker layer, viewport) and issues
//! layer mutations and viewport commands against it. [`SvgSurface`] is
//! the in-repo reference surface, producing a standalone SVG snapshot;
//! a browser deployment would back the same trait with a Leaflet-style
//! widget.

pub mod geometry;
pub mod renderer;
pub mod surface;
pub mod svg;

pub use geometry::{BoundingBox, CircleMarker, HeatPoint};
pub use renderer::{HeatRenderer, LoadError, RenderState};
pub use surface::{HeatOverlayConfig, MapConfig, MapSurface, ZoomControlPosition};
pub use svg::SvgSurface;
