//! Layer geometry derived from incidents.

use safe_commute_incident_models::Incident;

/// A weighted heat-map point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatPoint {
    /// Latitude (WGS84).
    pub latitude: f64,
    /// Longitude (WGS84).
    pub longitude: f64,
    /// Weight in `[0, 1]`, derived from severity.
    pub intensity: f64,
}

impl From<&Incident> for HeatPoint {
    fn from(incident: &Incident) -> Self {
        Self {
            latitude: incident.latitude,
            longitude: incident.longitude,
            intensity: incident.severity.intensity(),
        }
    }
}

/// A circle marker with its popup, as handed to the marker layer.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleMarker {
    /// Latitude (WGS84).
    pub latitude: f64,
    /// Longitude (WGS84).
    pub longitude: f64,
    /// Marker radius in display units.
    pub radius: f64,
    /// Stroke and fill colour.
    pub color: &'static str,
    /// Fill opacity in `[0, 1]`.
    pub fill_opacity: f64,
    /// Popup body (HTML).
    pub popup_html: String,
}

impl CircleMarker {
    /// Marker radius used for every incident.
    pub const RADIUS: f64 = 8.0;

    /// Fill opacity used for every incident.
    pub const FILL_OPACITY: f64 = 0.7;

    /// Builds the marker for one incident.
    #[must_use]
    pub fn for_incident(incident: &Incident) -> Self {
        Self {
            latitude: incident.latitude,
            longitude: incident.longitude,
            radius: Self::RADIUS,
            color: incident.severity.color(),
            fill_opacity: Self::FILL_OPACITY,
            popup_html: format!(
                "Type: {}<br>Location: [{}, {}]",
                incident.severity, incident.latitude, incident.longitude
            ),
        }
    }
}

/// A geographic bounding box in WGS84 coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Western longitude boundary.
    pub west: f64,
    /// Southern latitude boundary.
    pub south: f64,
    /// Eastern longitude boundary.
    pub east: f64,
    /// Northern latitude boundary.
    pub north: f64,
}

impl BoundingBox {
    /// Creates a new bounding box from the given coordinates.
    #[must_use]
    pub const fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Computes the tightest axis-aligned box containing every
    /// `(latitude, longitude)` point. Returns `None` for an empty input.
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let mut bounds: Option<Self> = None;
        for (latitude, longitude) in points {
            bounds = Some(match bounds {
                None => Self::new(longitude, latitude, longitude, latitude),
                Some(b) => Self::new(
                    b.west.min(longitude),
                    b.south.min(latitude),
                    b.east.max(longitude),
                    b.north.max(latitude),
                ),
            });
        }
        bounds
    }

    /// Whether the point lies within this box (boundary inclusive).
    #[must_use]
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        longitude >= self.west
            && longitude <= self.east
            && latitude >= self.south
            && latitude <= self.north
    }
}
